use gate_core::BoardingSession;
use gate_store::app_config::DEFAULT_PROMPT;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::commands::{self, Command};
use crate::messages;

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-eval-print loop driving one [`BoardingSession`].
///
/// Generic over the output so tests can capture exactly what an agent
/// would see on the terminal.
pub struct Repl<W: Write> {
    session: BoardingSession,
    output: W,
    prompt: String,
    intro: Option<String>,
    startup: Vec<String>,
}

impl<W: Write> Repl<W> {
    pub fn new(output: W) -> Self {
        Self {
            session: BoardingSession::new(),
            output,
            prompt: DEFAULT_PROMPT.to_string(),
            intro: None,
            startup: Vec::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Queue a command line to run after the intro, before the first prompt
    pub fn with_startup(mut self, line: impl Into<String>) -> Self {
        self.startup.push(line.into());
        self
    }

    pub fn session(&self) -> &BoardingSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        if let Some(intro) = &self.intro {
            writeln!(self.output, "{}", intro)?;
        }

        for line in std::mem::take(&mut self.startup) {
            if self.execute(&line)? == Flow::Quit {
                return Ok(());
            }
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                return Ok(());
            }
            if self.execute(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (name, arg) = parse_line(line);
        match commands::lookup(name) {
            Some(command) => self.dispatch(command, arg),
            None => {
                debug!(line, "Unknown command");
                writeln!(self.output, "{}", messages::unknown_syntax(line))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: &Command, arg: &str) -> io::Result<Flow> {
        debug!(command = command.name, arg, "Dispatching command");
        (command.handler)(&mut self.session, arg, &mut self.output)
    }
}

/// Split into command name and argument; a leading `?` means `help`.
fn parse_line(line: &str) -> (&str, &str) {
    if let Some(rest) = line.strip_prefix('?') {
        return ("help", rest.trim());
    }
    match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    }
}
