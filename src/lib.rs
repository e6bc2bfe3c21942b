//! envsure - Interactive .env reconciliation for project setup.
//!
//! envsure ensures a project's `.env` file contains a required set of keys
//! with non-empty values, prompting the operator for any missing ones and
//! writing the merged result back to the same file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - .env file parsing and write-back
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Required-key checking and prompt driving
//! - [`runner`] - Pipeline orchestration
//! - [`ui`] - Terminal, non-interactive, and mock user interfaces
//!
//! # Example
//!
//! ```
//! use envsure::requirements::RequirementChecker;
//! use envsure::ui::MockUI;
//! use std::collections::BTreeMap;
//!
//! let checker = RequirementChecker::new(vec!["API_KEY".to_string()]);
//! let vars = BTreeMap::new();
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("API_KEY", "secret");
//!
//! let answers = checker.collect_answers(&vars, &mut ui).unwrap();
//! assert_eq!(answers.get("API_KEY").map(String::as_str), Some("secret"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod ui;

pub use error::{EnvsureError, Result};
