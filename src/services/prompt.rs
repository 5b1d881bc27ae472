use std::io::{BufRead, Write};

pub trait Prompt {
    /// Blocking single-line question. An empty answer means "skip".
    fn ask(&mut self, question: &str) -> String;
}

/// Asks on stderr and reads one line from stdin. EOF or a read error answers blank.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> String {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{}", question);
        let _ = stderr.flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(_) => String::new(),
        }
    }
}

/// Answers every question blank.
pub struct SkipPrompt;

impl Prompt for SkipPrompt {
    fn ask(&mut self, question: &str) -> String {
        log::debug!("non-interactive, skipping: {}", question.trim());
        String::new()
    }
}
