//! User input and interaction handling.

use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Source of operator decisions. Operations take a `&dyn Prompter` so tests
/// can script the answers.
pub trait Prompter {
    /// Asks a yes/no question. Returns `true` right away when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Asks for a line of text.
    fn input(&self, prompt: String) -> Result<String>;
}

/// Interactive terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }

        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn input(&self, prompt: String) -> Result<String> {
        let value: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value.trim().to_string())
    }
}
