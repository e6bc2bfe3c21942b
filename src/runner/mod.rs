//! Setup pipeline orchestration.
//!
//! Drives the sequential pipeline: load the .env file, check it against the
//! required-key list (prompting for anything missing), and write the merged
//! result back. Each step fully completes before the next begins, and the
//! write only happens after every prompt has resolved.

use std::path::{Path, PathBuf};

use crate::config::EnvFile;
use crate::error::{EnvsureError, Result};
use crate::requirements::RequirementChecker;
use crate::ui::UserInterface;

/// Outcome of a completed setup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// All required keys were already set; the file was not touched.
    Unchanged,
    /// Missing values were collected and the file was rewritten.
    Written {
        /// Number of entries added or filled in.
        added: usize,
    },
}

/// Runs the load → check → write pipeline for one .env file.
pub struct SetupRunner {
    env_path: PathBuf,
    checker: RequirementChecker,
}

impl SetupRunner {
    /// Create a runner for the .env file at `env_path`.
    pub fn new(env_path: impl Into<PathBuf>, required: Vec<String>) -> Self {
        Self {
            env_path: env_path.into(),
            checker: RequirementChecker::new(required),
        }
    }

    /// Path of the file this runner reconciles.
    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    /// Run the pipeline to completion.
    ///
    /// Fails without touching the file if the required-key list is empty,
    /// the file is absent or unreadable, or any prompt cannot be answered.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SetupOutcome> {
        // Guard against a no-op run before any file I/O.
        if self.checker.is_empty() {
            return Err(EnvsureError::NoRequirementsConfigured);
        }

        ui.message("Checking for missing environment variables...");

        let vars = EnvFile::load(&self.env_path)?;
        tracing::debug!(
            "Loaded {} entries from {}",
            vars.len(),
            self.env_path.display()
        );

        let answers = self.checker.collect_answers(&vars, ui)?;

        if answers.is_empty() {
            ui.success("All required environment variables are already set.");
            return Ok(SetupOutcome::Unchanged);
        }

        let added = answers.len();
        let mut merged = vars;
        merged.extend(answers);

        EnvFile::save(&self.env_path, &merged)?;

        ui.success(&format!(
            ".env updated with {} missing variable{}.",
            added,
            if added == 1 { "" } else { "s" }
        ));
        Ok(SetupOutcome::Written { added })
    }
}
