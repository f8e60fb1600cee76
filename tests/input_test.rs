mod common;
use common::*;

#[test]
fn test_default_prompt() {
    assert_eq!(run_with_input("10 INPUT A\n20 PRINT A*2\n", &["21"]), "? 42\n");
}

#[test]
fn test_custom_prompt_shows_verbatim() {
    assert_eq!(
        run_with_input("10 INPUT \"NAME? \";N$\n20 PRINT \"HI \";N$\n", &["ADA"]),
        "NAME? HI ADA\n"
    );
}

#[test]
fn test_each_variable_reads_its_own_line() {
    assert_eq!(run_with_input("10 INPUT A,B\n20 PRINT A+B\n", &["1", "2"]), "? ? 3\n");
    assert_eq!(
        run_with_input("10 INPUT \"TWO: \",A,B\n20 PRINT A+B\n", &["1", "2"]),
        "TWO: ? 3\n"
    );
}

#[test]
fn test_string_input_is_verbatim() {
    assert_eq!(
        run_with_input("10 INPUT A$\n20 PRINT A$;\"!\"\n", &["HELLO WORLD"]),
        "? HELLO WORLD!\n"
    );
}

#[test]
fn test_numeric_input_must_parse() {
    assert_eq!(
        run_with_input("10 INPUT A\n", &["ABC"]),
        "? ?TYPE MISMATCH IN 10; INVALID NUMERIC INPUT\n"
    );
    assert_eq!(run_with_input("10 INPUT A\n20 PRINT A\n", &["  42  "]), "? 42\n");
}

#[test]
fn test_input_past_end() {
    assert_eq!(run_with_input("10 INPUT A\n", &[]), "? ?INPUT PAST END IN 10\n");
    assert_eq!(
        run_with_input("10 INPUT A,B\n", &["1"]),
        "? ? ?INPUT PAST END IN 10\n"
    );
}

#[test]
fn test_input_into_an_element() {
    assert_eq!(
        run_with_input("10 DIM A(2)\n20 INPUT A(2)\n30 PRINT A(2)\n", &["9"]),
        "? 9\n"
    );
}

#[test]
fn test_program_continues_after_input() {
    assert_eq!(
        run_with_input(
            "10 INPUT A\n20 IF A>5 THEN PRINT \"BIG\"\n30 PRINT \"DONE\"\n",
            &["7"]
        ),
        "? BIG\nDONE\n"
    );
}
