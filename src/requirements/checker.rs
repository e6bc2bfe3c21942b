//! Requirement checking against the loaded environment mapping.

use crate::config::EnvMap;
use crate::error::Result;
use crate::ui::{missing_key_question, UserInterface};

/// Keys that must be present with a non-empty value for setup to be
/// considered complete. Populate this list for your project before building.
pub const REQUIRED_KEYS: &[&str] = &[];

/// Environment variable overriding [`REQUIRED_KEYS`], comma-separated.
const REQUIRED_KEYS_VAR: &str = "ENVSURE_REQUIRED_KEYS";

/// Resolve the required-key list.
///
/// `ENVSURE_REQUIRED_KEYS` wins over the compiled-in constant when set,
/// which keeps the list adjustable without a rebuild.
pub fn required_keys() -> Vec<String> {
    match std::env::var(REQUIRED_KEYS_VAR) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
    }
}

/// Compares an environment mapping against the required-key list and
/// collects operator-supplied values for the missing ones.
pub struct RequirementChecker {
    required: Vec<String>,
}

impl RequirementChecker {
    /// Create a checker over the given required keys.
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }

    /// Check if the required-key list is empty.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Keys absent from the mapping or present with an empty value,
    /// in required-list order.
    pub fn missing<'a>(&'a self, vars: &EnvMap) -> Vec<&'a str> {
        self.required
            .iter()
            .filter(|key| vars.get(key.as_str()).is_none_or(|v| v.is_empty()))
            .map(String::as_str)
            .collect()
    }

    /// Prompt for each missing key and return the collected answers.
    ///
    /// Prompts run one at a time, in required-list order. Empty answers are
    /// accepted as-is. Any prompt failure aborts the run before the writer
    /// ever executes.
    pub fn collect_answers(&self, vars: &EnvMap, ui: &mut dyn UserInterface) -> Result<EnvMap> {
        let mut answers = EnvMap::new();

        for key in self.missing(vars) {
            let value = ui.prompt_value(key, &missing_key_question(key))?;
            answers.insert(key.to_string(), value);
        }

        tracing::debug!(
            "{} of {} required keys missing",
            answers.len(),
            self.required.len()
        );
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn checker(keys: &[&str]) -> RequirementChecker {
        RequirementChecker::new(keys.iter().map(|k| k.to_string()).collect())
    }

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(checker(&[]).is_empty());
        assert!(!checker(&["FOO"]).is_empty());
    }

    #[test]
    fn absent_key_is_missing() {
        let c = checker(&["FOO"]);
        assert_eq!(c.missing(&env(&[])), ["FOO"]);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let c = checker(&["FOO"]);
        assert_eq!(c.missing(&env(&[("FOO", "")])), ["FOO"]);
    }

    #[test]
    fn present_non_empty_key_is_not_missing() {
        let c = checker(&["FOO"]);
        assert!(c.missing(&env(&[("FOO", "bar")])).is_empty());
    }

    #[test]
    fn missing_preserves_required_list_order() {
        let c = checker(&["ZEBRA", "ALPHA", "MIDDLE"]);
        assert_eq!(c.missing(&env(&[])), ["ZEBRA", "ALPHA", "MIDDLE"]);
    }

    #[test]
    fn collect_answers_prompts_only_for_missing() {
        let c = checker(&["PRESENT", "ABSENT"]);
        let vars = env(&[("PRESENT", "yes")]);

        let mut ui = MockUI::new();
        ui.set_prompt_response("ABSENT", "filled");

        let answers = c.collect_answers(&vars, &mut ui).unwrap();

        assert_eq!(answers, env(&[("ABSENT", "filled")]));
        assert_eq!(ui.prompts_shown(), ["ABSENT"]);
    }

    #[test]
    fn collect_answers_accepts_empty_input() {
        let c = checker(&["FOO"]);

        let mut ui = MockUI::new();
        ui.set_prompt_response("FOO", "");

        let answers = c.collect_answers(&env(&[]), &mut ui).unwrap();

        assert_eq!(answers.get("FOO"), Some(&"".to_string()));
    }

    #[test]
    fn collect_answers_returns_empty_when_all_set() {
        let c = checker(&["FOO"]);
        let vars = env(&[("FOO", "bar")]);

        let mut ui = MockUI::new();
        let answers = c.collect_answers(&vars, &mut ui).unwrap();

        assert!(answers.is_empty());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn collect_answers_prompts_in_required_order() {
        let c = checker(&["SECOND", "FIRST"]);

        let mut ui = MockUI::new();
        ui.set_prompt_response("SECOND", "2");
        ui.set_prompt_response("FIRST", "1");

        c.collect_answers(&env(&[]), &mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), ["SECOND", "FIRST"]);
    }

    #[test]
    fn compiled_required_list_defaults_to_empty() {
        // Operators populate REQUIRED_KEYS per project; the shipped default
        // triggers the NoRequirementsConfigured guard.
        assert!(REQUIRED_KEYS.is_empty());
    }
}
