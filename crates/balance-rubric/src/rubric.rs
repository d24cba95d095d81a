use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricItem {
    pub name: String,
    pub points: u32,
}

/// Rubric items in the order the rubric file lists them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Rubric {
    items: Vec<RubricItem>,
}

impl Rubric {
    /// Parses a JSON object mapping test suite names to point values.
    ///
    /// Points may be written as numbers or numeric strings and must be
    /// positive integers.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = value else {
            return Err(LoadError::RubricNotObject);
        };

        let mut items = Vec::with_capacity(entries.len());
        for (name, points) in entries {
            if name.is_empty() {
                return Err(LoadError::EmptyItemName);
            }
            let Some(points) = positive_points(&points) else {
                return Err(LoadError::NotPositive { name });
            };
            items.push(RubricItem { name, points });
        }

        if items.is_empty() {
            return Err(LoadError::EmptyRubric);
        }

        log::debug!("loaded {} rubric items", items.len());
        Ok(Self { items })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn items(&self) -> &[RubricItem] {
        &self.items
    }

    pub fn possible_points(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.points)).sum()
    }
}

fn positive_points(value: &Value) -> Option<u32> {
    let points = match value {
        Value::Number(number) => u32::try_from(number.as_u64()?).ok()?,
        Value::String(text) => text.trim().parse::<u32>().ok()?,
        _ => return None,
    };
    (points > 0).then_some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn keeps_file_order() {
        let rubric = Rubric::from_json_str(
            r#"{ "zeta_cases": 3, "alpha_cases": 2, "middle_cases": "5" }"#,
        )
        .unwrap();

        let names: Vec<_> = rubric.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zeta_cases", "alpha_cases", "middle_cases"]);
        assert_eq!(rubric.items()[2].points, 5);
        assert_eq!(rubric.possible_points(), 10);
    }

    #[rstest]
    #[case(r#"{ "a": 0 }"#)]
    #[case(r#"{ "a": -1 }"#)]
    #[case(r#"{ "a": 1.5 }"#)]
    #[case(r#"{ "a": "many" }"#)]
    #[case(r#"{ "a": true }"#)]
    #[case(r#"{ "a": [1] }"#)]
    #[case(r#"{ "a": 4294967296 }"#)]
    fn rejects_non_positive_points(#[case] json: &str) {
        let err = Rubric::from_json_str(json).unwrap_err();
        assert_eq!(err.to_string(), "key 'a' does not map to a positive integer");
    }

    #[test]
    fn rejects_empty_rubric() {
        let err = Rubric::from_json_str("{}").unwrap_err();
        assert!(matches!(err, LoadError::EmptyRubric));
    }

    #[test]
    fn rejects_non_object() {
        let err = Rubric::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, LoadError::RubricNotObject));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Rubric::from_json_str(r#"{ "": 1 }"#).unwrap_err();
        assert!(matches!(err, LoadError::EmptyItemName));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Rubric::from_json_str(r#"{ "a": 1, "#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().starts_with("error parsing JSON: "));
    }
}
