//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{EnvsureError, Result};

use super::theme::EnvsureTheme;
use super::{OutputMode, UserInterface};

/// Prefix for environment-variable prompt overrides.
const ANSWER_PREFIX: &str = "ENVSURE_ANSWER_";

/// UI implementation for non-interactive mode.
///
/// Prompts cannot block on a human, so answers are taken from
/// `ENVSURE_ANSWER_<KEY>` environment variables. A required key with no
/// override is a fatal error rather than a hang.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: EnvsureTheme,
    answer_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect ENVSURE_ANSWER_* env vars
        let answer_overrides: HashMap<String, String> = std::env::vars()
            .filter_map(|(k, v)| {
                k.strip_prefix(ANSWER_PREFIX)
                    .map(|key| (key.to_string(), v))
            })
            .collect();

        Self {
            mode,
            theme: EnvsureTheme::plain(),
            answer_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: EnvsureTheme::plain(),
            answer_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt_value(&mut self, key: &str, question: &str) -> Result<String> {
        match self.answer_overrides.get(key) {
            Some(value) => {
                tracing::debug!("Answering '{}' from {}{}", question, ANSWER_PREFIX, key);
                Ok(value.clone())
            }
            None => Err(EnvsureError::AnswerUnavailable {
                key: key.to_string(),
            }),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
