use roxmltree::{Document, Node};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LoadError;

/// Counters googletest reports for one `<testsuite>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSuite {
    pub name: String,
    pub tests: u32,
    pub failures: u32,
    pub disabled: u32,
    pub errors: u32,
    /// Wall time in seconds.
    pub time: f64,
}

impl TestSuite {
    /// A suite passes when nothing in it failed or errored.
    pub fn passed(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }
}

/// Test suites keyed by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestResults {
    suites: BTreeMap<String, TestSuite>,
}

impl TestResults {
    /// Parses googletest XML: a `<testsuites>` root holding `<testsuite>`
    /// elements. Other children of the root are ignored.
    pub fn from_xml_str(xml: &str) -> Result<Self, LoadError> {
        let document = Document::parse(xml)?;
        let root = document.root_element();
        if root.tag_name().name() != "testsuites" {
            return Err(LoadError::UnexpectedRoot(
                root.tag_name().name().to_string(),
            ));
        }

        let mut suites = BTreeMap::new();
        for node in root
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "testsuite")
        {
            let suite = parse_suite(node)?;
            if suites.contains_key(&suite.name) {
                log::warn!("duplicate testsuite '{}', keeping the last", suite.name);
            }
            suites.insert(suite.name.clone(), suite);
        }

        if suites.is_empty() {
            return Err(LoadError::NoSuites);
        }

        log::debug!("loaded {} test suites", suites.len());
        Ok(Self { suites })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_xml_str(&content)
    }

    pub fn get(&self, name: &str) -> Option<&TestSuite> {
        self.suites.get(name)
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Suites in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &TestSuite> {
        self.suites.values()
    }
}

fn parse_suite(node: Node<'_, '_>) -> Result<TestSuite, LoadError> {
    let name = node.attribute("name").unwrap_or_default();
    if name.is_empty() {
        return Err(LoadError::UnnamedSuite);
    }

    Ok(TestSuite {
        name: name.to_string(),
        tests: attribute_or_zero(node, name, "tests")?,
        failures: attribute_or_zero(node, name, "failures")?,
        disabled: attribute_or_zero(node, name, "disabled")?,
        errors: attribute_or_zero(node, name, "errors")?,
        time: attribute_or_zero(node, name, "time")?,
    })
}

fn attribute_or_zero<T>(
    node: Node<'_, '_>,
    suite: &str,
    attribute: &'static str,
) -> Result<T, LoadError>
where
    T: std::str::FromStr + Default,
{
    match node.attribute(attribute) {
        None => Ok(T::default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidAttribute {
                suite: suite.to_string(),
                attribute,
                value: raw.to_string(),
            }),
    }
}
