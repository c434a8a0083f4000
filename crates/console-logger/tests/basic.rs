//! Basic tests for the logger under the default threshold (`Exception`)

#![cfg(all(
    feature = "max-level-exception",
    not(any(feature = "max-level-warning", feature = "max-level-info"))
))]

use pretty_assertions::assert_eq;
use proven_console_logger::test_support::capture;
use proven_console_logger::*;

fn strip(line: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(line)).unwrap()
}

#[test]
fn test_threshold_is_exception() {
    assert_eq!(THRESHOLD, Some(Severity::Exception));
}

#[test]
fn test_error_is_visible() {
    let (logger, captured) = capture(|| log!(Error, "disk {} is {}", "sda", "gone"));

    assert_eq!(captured.stderr().len(), 1);
    assert!(captured.stdout().is_empty());
    assert!(logger.ends_with("disk sda is gone"));
    assert_eq!(&*logger, captured.stderr()[0]);
}

#[test]
fn test_exception_is_visible() {
    let (logger, captured) = capture(|| exception!("caught {}", "timeout"));

    assert_eq!(captured.stderr().len(), 1);
    assert!(logger.ends_with("caught timeout"));
}

#[test]
fn test_info_is_silent() {
    let (logger, captured) = capture(|| log!(Info, "{} {}", "a", 1; "{}", "b"));

    assert!(captured.is_empty());
    assert_eq!(captured.bytes(), 0);
    assert_eq!(&*logger, "");
}

#[test]
fn test_warning_is_silent() {
    let (logger, captured) = capture(|| warning!("low {}", "memory"));

    assert!(captured.is_empty());
    assert_eq!(logger.message(), "");
}

#[test]
fn test_chained_parts_in_order() {
    let (logger, captured) = capture(|| error!("a"; "b"; "c"));

    let lines: Vec<String> = captured.stderr().iter().map(|l| strip(l)).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" a"));
    assert!(lines[1].ends_with(" b"));
    assert!(lines[2].ends_with(" c"));
    assert!(strip(&logger).ends_with(" c"));
    assert!(!logger.contains(" a"));
}

#[test]
fn test_placeholders_substitute() {
    let (logger, _) = capture(|| error!("{}-{}", "x", 1));
    assert!(logger.contains("x-1"));
}

#[test]
fn test_preamble_carries_call_site() {
    let (logger, _) = capture(|| error!("here"));
    let expected_line = line!() - 1;
    let text = strip(&logger);

    assert!(text.starts_with(file!()));
    assert!(text.contains("test_preamble_carries_call_site"));
    assert!(text.contains(&format!("in line: {expected_line} ")));
}

#[test]
fn test_direct_session_api() {
    let site = callsite!();
    let (logger, captured) = capture(|| {
        <Logger<level::Error> as LogSession>::new(site, format_args!("first {}", 1))
            .then(format_args!("second {}", 2))
    });

    assert_eq!(captured.stderr().len(), 2);
    assert!(logger.ends_with("second 2"));

    let (inert, captured) = capture(|| {
        <Logger<level::Info> as LogSession>::new(site, format_args!("first {}", 1))
            .then(format_args!("second {}", 2))
    });
    assert!(captured.is_empty());
    assert_eq!(&*inert, "");
}

#[test]
fn test_last_message_as_return_value() {
    fn fails() -> String {
        error!("could not open {}", "db.sqlite").to_string()
    }

    let (message, _) = capture(fails);
    assert!(message.ends_with("could not open db.sqlite"));
}
