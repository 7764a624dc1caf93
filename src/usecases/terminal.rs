use std::io::{self, Write};

/// Line-oriented terminal used by the interactive flows.
pub trait Terminal {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
    /// Returns `None` on end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        println!("{line}");
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}
