//! Cross-references googletest XML output against a JSON scoring rubric.
//!
//! ```
//! use balance_rubric::{Rubric, TestResults, evaluate};
//!
//! let rubric = Rubric::from_json_str(r#"{ "find_dip_cases": 5 }"#).unwrap();
//! let results = TestResults::from_xml_str(
//!     r#"<testsuites><testsuite name="find_dip_cases" tests="3" failures="0"/></testsuites>"#,
//! )
//! .unwrap();
//!
//! let score = evaluate(&rubric, &results).unwrap();
//! assert_eq!(score.earned_points(), 5);
//! ```

pub mod error;
pub mod results;
pub mod rubric;
pub mod score;

pub use error::{LoadError, ScoreError};
pub use results::{TestResults, TestSuite};
pub use rubric::{Rubric, RubricItem};
pub use score::{DEFAULT_RULE_WIDTH, ItemScore, RubricScore, evaluate};
