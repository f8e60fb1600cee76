mod common;
use common::*;

#[test]
fn test_read_consumes_in_line_order() {
    assert_eq!(
        run("30 DATA 3\n10 DATA 1,2\n20 READ A,B,C\n25 PRINT A;B;C\n"),
        "123\n"
    );
}

#[test]
fn test_out_of_data() {
    assert_eq!(
        run("10 DATA 1,2\n20 READ A,B\n30 PRINT A+B\n40 READ C\n"),
        "3\n?OUT OF DATA IN 40\n"
    );
}

#[test]
fn test_restore_rewinds() {
    assert_eq!(
        run("10 DATA 5\n20 READ A\n30 RESTORE\n40 READ B\n50 PRINT A+B\n"),
        "10\n"
    );
}

#[test]
fn test_restore_seeks_the_next_data_line() {
    assert_eq!(
        run("10 GO TO 40\n20 DATA 1\n30 DATA 2\n40 RESTORE 25\n50 READ A\n60 PRINT A\n"),
        "2\n"
    );
}

#[test]
fn test_restore_past_all_data() {
    assert_eq!(run("10 DATA 1\n20 RESTORE 50\n"), "?UNDEFINED LINE IN 20\n");
}

#[test]
fn test_data_statements_never_execute() {
    assert_eq!(run("10 PRINT \"A\"\n20 DATA 9\n30 PRINT \"B\"\n"), "A\nB\n");
}

#[test]
fn test_read_tag_must_match() {
    assert_eq!(run("10 DATA \"X\"\n20 READ A\n"), "?TYPE MISMATCH IN 20\n");
    assert_eq!(run("10 DATA 1\n20 READ A$\n"), "?TYPE MISMATCH IN 20\n");
}

#[test]
fn test_string_data() {
    assert_eq!(
        run("10 DATA \"BE\",\"BOP\"\n20 READ A$,B$\n30 PRINT A$+B$\n"),
        "BEBOP\n"
    );
}
