use std::fs;

use pretty_assertions::assert_eq;
use tally::repl::{HELP, Reply, Session};
use walkdir::WalkDir;

/// A recorded session: the lines typed and the lines printed back.
struct Transcript {
    input:    String,
    expected: Vec<String>,
}

/// Reads a `.session` file. Lines starting with `>` are typed into the
/// session, `#` lines are comments, and every other line is expected output.
fn parse_transcript(content: &str) -> Transcript {
    let mut input = String::new();
    let mut expected = Vec::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(typed) = line.strip_prefix('>') {
            input.push_str(typed.strip_prefix(' ').unwrap_or(typed));
            input.push('\n');
        } else {
            expected.push(line.to_string());
        }
    }

    Transcript { input, expected }
}

#[test]
fn recorded_sessions_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let transcript = parse_transcript(&content);

        let mut output = Vec::new();
        Session::new().run(transcript.input.as_bytes(), &mut output)
                      .unwrap_or_else(|e| panic!("Session {path:?} failed: {e}"));
        let printed = String::from_utf8(output).expect("session output is UTF-8");

        assert_eq!(printed.lines().collect::<Vec<_>>(),
                   transcript.expected,
                   "transcript {path:?}");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

#[test]
fn commands_are_matched_exactly() {
    let mut session = Session::new();
    assert_eq!(session.execute("/help"), Reply::Print(HELP.to_string()));
    assert_eq!(session.execute("  /exit  "), Reply::Exit("Bye!".to_string()));
    assert_eq!(session.execute("/exit now"), Reply::Print("Unknown command".to_string()));
    assert_eq!(session.execute("/"), Reply::Print("Unknown command".to_string()));
}

#[test]
fn assignments_are_silent_and_persist() {
    let mut session = Session::new();
    assert_eq!(session.execute("n = 3"), Reply::Silent);
    assert_eq!(session.execute("n"), Reply::Print("3".to_string()));
    assert_eq!(session.evaluator().get_value("n"), Some(3));
}

#[test]
fn blank_lines_print_nothing() {
    let mut session = Session::new();
    assert_eq!(session.execute(""), Reply::Silent);
    assert_eq!(session.execute(" \t "), Reply::Silent);
}

#[test]
fn end_of_input_ends_the_session() {
    let mut output = Vec::new();
    Session::new().run("1 + 1\n2 * 2".as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "2\n4\n");
}
