use bplate::error::Result;
use bplate::prompt::Prompter;
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// Prompter answering from a fixed script and recording what it was asked.
pub struct ScriptedPrompter {
    pub confirm_answer: bool,
    pub input_answer: String,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(confirm_answer: bool, input_answer: &str) -> Self {
        Self {
            confirm_answer,
            input_answer: input_answer.to_string(),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        self.asked.borrow_mut().push(prompt);
        Ok(skip || self.confirm_answer)
    }

    fn input(&self, prompt: String) -> Result<String> {
        self.asked.borrow_mut().push(prompt);
        Ok(self.input_answer.clone())
    }
}

pub fn write<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
