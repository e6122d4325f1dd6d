//! Named shell commands. Each handler gets the session, the trimmed argument
//! text, and the output to print its fixed lines to.

use gate_core::{BoardingSession, LoadError};
use gate_store::JsonlFile;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::messages;
use crate::repl::Flow;

pub type Handler = fn(&mut BoardingSession, &str, &mut dyn Write) -> io::Result<Flow>;

pub struct Command {
    pub name: &'static str,
    pub help: &'static str,
    pub handler: Handler,
}

/// Dispatch table, sorted by name
pub const COMMANDS: &[Command] = &[
    Command {
        name: "flight",
        help: "flight <number>\nSets the flight currently boarding, e.g. `flight AA311`. \
               Lowercase input is accepted and stored uppercased.",
        handler: flight,
    },
    Command {
        name: "help",
        help: "help [command]\nLists the available commands, or describes one of them.",
        handler: help,
    },
    Command {
        name: "load",
        help: "load <path>\nReads a JSONL file with one reservation per line. Every \
               reservation needs passenger_name, flight_number, reservation_code, \
               ticket_type, and seat. Replaces any reservations loaded before.",
        handler: load,
    },
    Command {
        name: "quit",
        help: "quit\nEnds the session.",
        handler: quit,
    },
    Command {
        name: "scan",
        help: "scan <reservation code>\nChecks a boarding pass against the loaded \
               reservations and the selected flight. Prints ALLOW if the passenger \
               may board and DENY otherwise.",
        handler: scan,
    },
    Command {
        name: "status",
        help: "status\nShows how many passengers have boarded the selected flight.",
        handler: status,
    },
];

pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

pub fn load(session: &mut BoardingSession, arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    let path = Path::new(arg);
    match session.load_from(&JsonlFile::new(path)) {
        Ok(count) => writeln!(out, "{}", messages::loaded(count))?,
        Err(LoadError::Source(err)) => {
            warn!(path = %path.display(), error = %err, "Reservation file unavailable");
            writeln!(out, "{}", messages::source_failure(path, &err))?;
        }
        Err(LoadError::Validation(failure)) => {
            writeln!(out, "{}", messages::validation_failure(&failure))?;
            writeln!(out, "{}", messages::VALIDATION_FAILED)?;
        }
    }
    Ok(Flow::Continue)
}

pub fn flight(session: &mut BoardingSession, arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    match session.select_flight(arg) {
        Ok(()) => writeln!(out, "{}", messages::FLIGHT_OK)?,
        Err(err) => {
            debug!(error = %err, "Flight selection rejected");
            writeln!(out, "{}", messages::FLIGHT_FORMAT)?;
        }
    }
    Ok(Flow::Continue)
}

pub fn scan(session: &mut BoardingSession, arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    let outcome = session.scan(arg);
    writeln!(out, "{}", messages::scan_outcome(&outcome))?;
    Ok(Flow::Continue)
}

pub fn status(session: &mut BoardingSession, _arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    match session.progress() {
        Ok(progress) => writeln!(out, "{}", messages::progress(&progress))?,
        Err(reason) => writeln!(out, "{}", messages::not_initialized(reason))?,
    }
    Ok(Flow::Continue)
}

pub fn quit(_session: &mut BoardingSession, _arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    writeln!(out, "{}", messages::GOODBYE)?;
    Ok(Flow::Quit)
}

pub fn help(_session: &mut BoardingSession, arg: &str, out: &mut dyn Write) -> io::Result<Flow> {
    if arg.is_empty() {
        let header = "Documented commands (type help <topic>):";
        let names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", "=".repeat(header.len()))?;
        writeln!(out, "{}", names.join("  "))?;
        writeln!(out)?;
        return Ok(Flow::Continue);
    }

    match lookup(arg) {
        Some(command) => writeln!(out, "{}", command.help)?,
        None => writeln!(out, "*** No help on {}", arg)?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(handler: Handler, session: &mut BoardingSession, arg: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = handler(session, arg, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_table_sorted_and_unique() {
        let names: Vec<&str> = COMMANDS.iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("scan").unwrap().name, "scan");
        assert!(lookup("SCAN").is_none());
        assert!(lookup("board").is_none());
    }

    #[test]
    fn test_flight_handler() {
        let mut session = BoardingSession::new();

        let (flow, out) = run(flight, &mut session, "aa311");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "OK\n");

        let (_, out) = run(flight, &mut session, "AA-311");
        assert_eq!(
            out,
            "Expected flight number to be a single alphanumeric word, e.g. AA311.\n"
        );
        assert_eq!(session.flight().unwrap().as_str(), "AA311");
    }

    #[test]
    fn test_quit_handler() {
        let mut session = BoardingSession::new();
        let (flow, out) = run(quit, &mut session, "");
        assert_eq!(flow, Flow::Quit);
        assert_eq!(out, "Goodbye.\n");
    }

    #[test]
    fn test_help_handler() {
        let mut session = BoardingSession::new();

        let (_, out) = run(help, &mut session, "");
        assert_eq!(
            out,
            "Documented commands (type help <topic>):\n\
             ========================================\n\
             flight  help  load  quit  scan  status\n\n"
        );

        let (_, out) = run(help, &mut session, "quit");
        assert_eq!(out, "quit\nEnds the session.\n");

        let (_, out) = run(help, &mut session, "board");
        assert_eq!(out, "*** No help on board\n");
    }

    #[test]
    fn test_status_before_load() {
        let mut session = BoardingSession::new();
        let (_, out) = run(status, &mut session, "");
        assert_eq!(
            out,
            "Please load in the reservation information first with the load command.\n"
        );
    }
}
