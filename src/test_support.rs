use std::{
    collections::VecDeque,
    io,
    sync::{Mutex, MutexGuard},
};

use crate::usecases::terminal::Terminal;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Feeds canned input lines and records everything printed.
pub struct ScriptedTerminal {
    inputs: VecDeque<Option<String>>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(inputs: Vec<Option<&str>>) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .map(|item| item.map(|value| value.to_owned()))
                .collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Terminal for ScriptedTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.inputs.pop_front().flatten())
    }
}
