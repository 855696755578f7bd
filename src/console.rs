use std::io::{self, BufRead, Write};

/// The seam between the trip planner and the terminal. Implemented by stdin
/// in production and by scripted prompters in tests.
pub trait Prompter {
    /// Prints the prompt and reads one trimmed line of input.
    fn read_line(&self, prompt: &str) -> io::Result<String>;
}

pub struct StdPrompter;

impl Prompter for StdPrompter {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
pub struct ScriptedPrompter {
    lines: std::sync::Mutex<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        ScriptedPrompter {
            lines: std::sync::Mutex::new(lines.into_iter().map(String::from).collect()),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&self, _prompt: &str) -> io::Result<String> {
        self.lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
