mod common;
use common::*;
use minibasic::mach::{Event, Runtime};

#[test]
fn test_hello() {
    assert_eq!(run("10 PRINT \"HI\"\n"), "HI\n");
    assert_eq!(run("10 PRINT \"HI\"\n20 STOP\n"), "HI\n");
}

#[test]
fn test_unassigned_variable_prints_nothing() {
    assert_eq!(run("10 PRINT X\n"), "?UNDEFINED VARIABLE IN 10; X\n");
}

#[test]
fn test_lines_run_in_sorted_order() {
    assert_eq!(run("20 PRINT \"B\"\n10 PRINT \"A\"\n"), "A\nB\n");
}

#[test]
fn test_arithmetic_program() {
    assert_eq!(run("10 LET A=3\n20 LET B=5\n30 PRINT A+B\n"), "8\n");
}

#[test]
fn test_gosub_and_return() {
    assert_eq!(
        run("10 GO SUB 100\n\
             20 PRINT \"BACK\"\n\
             30 STOP\n\
             100 PRINT \"SUB\"\n\
             110 RETURN\n"),
        "SUB\nBACK\n"
    );
}

#[test]
fn test_gosub_resumes_mid_line() {
    assert_eq!(
        run("10 GO SUB 100:PRINT \"A\"\n20 STOP\n100 RETURN\n"),
        "A\n"
    );
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(run("10 RETURN\n"), "?RETURN WITHOUT GOSUB IN 10\n");
}

#[test]
fn test_goto_rounds_up_to_the_next_line() {
    assert_eq!(
        run("10 GO TO 15.5\n20 PRINT \"TWENTY\"\n30 PRINT \"THIRTY\"\n"),
        "TWENTY\nTHIRTY\n"
    );
}

#[test]
fn test_goto_computed_target() {
    assert_eq!(
        run("10 LET A=3\n20 GO TO A*10\n30 PRINT \"YES\"\n"),
        "YES\n"
    );
}

#[test]
fn test_goto_undefined_line() {
    assert_eq!(run("10 GO TO 99\n"), "?UNDEFINED LINE IN 10\n");
}

#[test]
fn test_runs_replay_identically() {
    let source = "10 FOR I=1 TO 5\n20 PRINT RND(1)\n30 NEXT I\n40 STOP\n";
    assert_eq!(run(source), run(source));
}

#[test]
fn test_empty_program_stops() {
    assert_eq!(run(""), "");
}

#[test]
fn test_interrupt_reports_break() {
    let mut runtime = Runtime::from_source("10 GO TO 10\n").unwrap();
    assert!(matches!(runtime.execute(100), Event::Running));
    runtime.interrupt();
    match runtime.execute(100) {
        Event::Errored(error) => assert_eq!(error.to_string(), "BREAK IN 10"),
        event => panic!("expected a break, got {:?}", event),
    }
    assert!(matches!(runtime.execute(100), Event::Stopped));
}

#[test]
fn test_guessing_game_session() {
    let source = "\
        10 LET S=INT(RND(1)*10)+1\n\
        20 INPUT \"GUESS? \";G\n\
        30 IF G=S THEN GO TO 100\n\
        40 IF G<S THEN PRINT \"LOW\"\n\
        50 IF G>S THEN PRINT \"HIGH\"\n\
        60 GO TO 20\n\
        100 PRINT \"RIGHT\"\n";
    let mut runtime = Runtime::from_source(source).unwrap();
    let mut output = String::new();
    let mut answers = (1..=10).map(|n| n.to_string());
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Errored(error) => panic!("unexpected error: {}", error),
            Event::Running => {}
            Event::Print(text) => output.push_str(&text),
            Event::Input(prompt) => {
                output.push_str(&prompt);
                match answers.next() {
                    Some(answer) => runtime.enter(&answer),
                    None => runtime.end_of_input(),
                }
            }
        }
    }
    assert!(output.starts_with("GUESS? "));
    assert!(output.ends_with("RIGHT\n"));
    assert!(!output.contains("HIGH"));
}
