use std::path::PathBuf;

/// Failure to read or decode one of the scorer's input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error parsing JSON: top level must be an object of rubric items")]
    RubricNotObject,

    #[error("key '{name}' does not map to a positive integer")]
    NotPositive { name: String },

    #[error("rubric contains an item with an empty name")]
    EmptyItemName,

    #[error("JSON does not contain any rubric items")]
    EmptyRubric,

    #[error("error parsing XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("error decoding XML: expected root <testsuites>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("error parsing XML: a <testsuite> has no name=")]
    UnnamedSuite,

    #[error("error decoding XML: testsuite '{suite}' has invalid {attribute}=\"{value}\"")]
    InvalidAttribute {
        suite: String,
        attribute: &'static str,
        value: String,
    },

    #[error("error parsing XML: does not contain any <testsuite> nodes")]
    NoSuites,
}

/// The rubric and results were both readable but do not line up.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("testsuite '{0}' from rubric cannot be found in googletest result XML")]
    MissingSuite(String),
}
