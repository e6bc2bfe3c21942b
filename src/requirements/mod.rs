//! Required-key checking.
//!
//! - [`checker`] - comparison of the loaded mapping against the required-key
//!   list, driving one prompt per missing key

pub mod checker;

pub use checker::{required_keys, RequirementChecker, REQUIRED_KEYS};
