mod common;
use common::*;

#[test]
fn test_let_is_required() {
    assert_eq!(run("10 A=1\n"), "?SYNTAX ERROR IN 1:4; EXPECTED STATEMENT\n");
}

#[test]
fn test_go_to_is_two_words() {
    assert_eq!(run("10 GOTO 20\n"), "?SYNTAX ERROR IN 1:4; EXPECTED STATEMENT\n");
    assert_eq!(run("10 GO 20\n"), "?SYNTAX ERROR IN 1:7; EXPECTED TO OR SUB\n");
}

#[test]
fn test_no_grouping_parentheses() {
    assert_eq!(
        run("10 PRINT (1+2)*3\n"),
        "?SYNTAX ERROR IN 1:10; EXPECTED EXPRESSION\n"
    );
}

#[test]
fn test_duplicate_line_number() {
    assert_eq!(
        run("10 PRINT 1\n10 PRINT 2\n"),
        "?SYNTAX ERROR IN 2:1; DUPLICATE LINE NUMBER\n"
    );
}

#[test]
fn test_line_numbers_are_integers_up_to_65535() {
    assert_eq!(run("70000 PRINT 1\n"), "?SYNTAX ERROR IN 1:1; INVALID LINE NUMBER\n");
    assert_eq!(run("PRINT 1\n"), "?SYNTAX ERROR IN 1:1; EXPECTED LINE NUMBER\n");
}

#[test]
fn test_if_needs_a_relational_operator() {
    assert_eq!(
        run("10 IF 1 THEN PRINT 1\n"),
        "?SYNTAX ERROR IN 1:9; EXPECTED RELATIONAL OPERATOR\n"
    );
}

#[test]
fn test_comparison_only_between_if_and_then() {
    assert_eq!(run("10 LET A=B=C\n"), "?SYNTAX ERROR IN 1:11; EXPECTED END OF LINE\n");
}

#[test]
fn test_data_wants_literals() {
    assert_eq!(run("10 DATA -1\n"), "?SYNTAX ERROR IN 1:9; EXPECTED LITERAL\n");
}

#[test]
fn test_empty_source_is_a_program() {
    assert_eq!(run(""), "");
    assert_eq!(run("\n\n"), "");
}
