use gate_cli::{messages, Flow, Repl};
use std::io::Write;

const RESERVATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/reservations.jsonl");
const INVALID: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/reservations_invalid.jsonl");
const EMPTY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/reservations_empty.jsonl");
const SEAT_OVERLAP: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/reservations_seat_overlap.jsonl");

fn repl() -> Repl<Vec<u8>> {
    Repl::new(Vec::new()).with_prompt("")
}

/// Run a script and return everything printed
fn session_output(script: &str) -> String {
    let mut repl = repl();
    repl.run(script.as_bytes()).unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}

#[test]
fn test_load_valid() {
    let mut repl = repl();
    repl.execute(&format!("load {}", RESERVATIONS)).unwrap();

    let store = repl.session().store().unwrap();
    assert_eq!(store.len(), 3);
    assert!(store.iter().all(|r| !r.scanned));
    assert_eq!(String::from_utf8(repl.into_output()).unwrap(), "Loaded 3 reservations.\n");
}

#[test]
fn test_load_invalid_path() {
    assert_eq!(
        session_output("load invalid/path\n"),
        "Unable to load reservations from invalid/path. Please check the path.\n"
    );
}

#[test]
fn test_load_invalid_data() {
    let mut repl = repl();
    repl.execute(&format!("load {}", INVALID)).unwrap();

    assert!(repl.session().store().is_none());
    assert_eq!(
        String::from_utf8(repl.into_output()).unwrap(),
        "Reservations data does not contain all required columns.\n\
         Reservations data failed validation.\n"
    );
}

#[test]
fn test_load_empty_file() {
    let mut repl = repl();
    repl.execute(&format!("load {}", EMPTY)).unwrap();

    assert!(repl.session().store().is_none());
    assert_eq!(
        String::from_utf8(repl.into_output()).unwrap(),
        "Reservations data does not contain all required columns.\n\
         Reservations data failed validation.\n"
    );
}

#[test]
fn test_empty_reload_keeps_reservations() {
    let out = session_output(&format!(
        "load {}\nload {}\nflight AA311\nscan WDXDIC\n",
        RESERVATIONS, EMPTY
    ));

    assert_eq!(
        out,
        "Loaded 3 reservations.\n\
         Reservations data does not contain all required columns.\n\
         Reservations data failed validation.\n\
         OK\n\
         ALLOW\n"
    );
}

#[test]
fn test_failed_reload_keeps_reservations() {
    let out = session_output(&format!(
        "load {}\nflight AA311\nscan WDXDIC\nload {}\nscan WDXDIC\nscan ACIWMY\n",
        RESERVATIONS, SEAT_OVERLAP
    ));

    assert_eq!(
        out,
        "Loaded 3 reservations.\n\
         OK\n\
         ALLOW\n\
         Per flight, seat assignments are overlapping but should not be.\n\
         Reservations data failed validation.\n\
         DENY\n\
         ALLOW\n"
    );
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"passenger_name\": ").unwrap();
    let path = file.path().display().to_string();

    let out = session_output(&format!("load {}\n", path));
    assert!(
        out.starts_with(&format!("Unable to read reservations from {}: Line 1", path)),
        "unexpected output: {}",
        out
    );
}

#[test]
fn test_flight_valid() {
    assert_eq!(session_output("flight AA311\nflight UA123\nflight aa311\n"), "OK\nOK\nOK\n");

    let mut repl = repl();
    repl.execute("flight aa311").unwrap();
    assert_eq!(repl.session().flight().unwrap().as_str(), "AA311");
}

#[test]
fn test_flight_invalid() {
    let mut repl = repl();

    // Spaces aren't allowed
    repl.execute("flight AA311 UA123").unwrap();
    assert!(repl.session().flight().is_none());

    // Neither is punctuation
    repl.execute("flight AA-311").unwrap();
    assert!(repl.session().flight().is_none());

    // A valid flight can still be set afterwards
    repl.execute("flight AA311").unwrap();
    assert_eq!(repl.session().flight().unwrap().as_str(), "AA311");

    let expected = format!("{0}\n{0}\nOK\n", messages::FLIGHT_FORMAT);
    assert_eq!(String::from_utf8(repl.into_output()).unwrap(), expected);
}

#[test]
fn test_scan_allow_and_deny() {
    let out = session_output(&format!(
        "load {}\nflight AA311\nscan WDXDIC\nscan WDXDIC\nscan invalid scan\nscan NAQMBF\n",
        RESERVATIONS
    ));
    assert_eq!(out, "Loaded 3 reservations.\nOK\nALLOW\nDENY\nDENY\nDENY\n");
}

#[test]
fn test_scan_no_reservations() {
    assert_eq!(
        session_output("flight AA311\nscan WDXDIC\n"),
        "OK\nPlease load in the reservation information first with the load command.\n"
    );
}

#[test]
fn test_scan_no_flight() {
    assert_eq!(
        session_output(&format!("load {}\nscan WDXDIC\n", RESERVATIONS)),
        "Loaded 3 reservations.\n\
         Please set the flight number to board guests for with the flight command.\n"
    );
}

#[test]
fn test_status() {
    let out = session_output(&format!(
        "status\nload {}\nstatus\nflight AA311\nscan ACIWMY\nstatus\n",
        RESERVATIONS
    ));
    assert_eq!(
        out,
        "Please load in the reservation information first with the load command.\n\
         Loaded 3 reservations.\n\
         Please set the flight number to board guests for with the flight command.\n\
         OK\n\
         ALLOW\n\
         AA311: 1 of 2 passengers boarded.\n"
    );
}

#[test]
fn test_quit_stops_reading() {
    let mut repl = repl();
    repl.run("flight AA311\nquit\nflight UA123\n".as_bytes()).unwrap();

    assert_eq!(repl.session().flight().unwrap().as_str(), "AA311");
    assert_eq!(String::from_utf8(repl.into_output()).unwrap(), "OK\nGoodbye.\n");
}

#[test]
fn test_quit_returns_flow() {
    let mut repl = repl();
    assert_eq!(repl.execute("quit").unwrap(), Flow::Quit);
}

#[test]
fn test_intro_printed_first() {
    let mut repl = Repl::new(Vec::new()).with_prompt("(gate) ").with_intro(messages::INTRO);
    repl.run("quit\n".as_bytes()).unwrap();

    let out = String::from_utf8(repl.into_output()).unwrap();
    assert_eq!(
        out,
        "Welcome to the Boarding Gate Simulator. To start, use the load command to input \
         a JSONL file of reservation information. Type help or ? to see all commands.\n\
         (gate) Goodbye.\n"
    );
}
