//! Numeral definitions end to end: `DEFNUM` through the interpreter, and
//! translation of numeral glosses and literal digit strings.

use fira::script::numeral::DIGIT_WORDS;
use fira::script::Interpreter;
use fira::store::{Column, Condition, Kind};

fn setup() -> Interpreter {
    let mut interp = Interpreter::new();
    for (digit, word) in DIGIT_WORDS.iter().enumerate() {
        interp
            .execute_line(&format!("DEFROOT {word} d{digit}"))
            .unwrap();
    }
    interp.execute_line("DEFROOT and an").unwrap();
    interp
}

fn run(interp: &mut Interpreter, line: &str) -> Vec<String> {
    interp.execute_line(line).unwrap().lines
}

#[test]
fn defnum_derives_the_spelling_from_the_value() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM dozen 12");
    let rows = interp.lexicon().select(
        Kind::Numeral,
        &Condition::GlossEq("dozen".into()),
        &[Column::Spelling],
    );
    assert_eq!(rows, vec![vec!["d1-d2".to_string()]]);
}

#[test]
fn zero_runs_fold_into_run_lengths() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM thousand 1000");
    let rows = interp.lexicon().select(
        Kind::Numeral,
        &Condition::ValueEq(1000),
        &[Column::Spelling],
    );
    // one, zero run of 3 (zero + three), no trailing and.
    assert_eq!(rows, vec![vec!["d1-d0-d3".to_string()]]);
}

#[test]
fn interior_zero_run_gets_an_and() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM leet 1007");
    let rows = interp.lexicon().select(
        Kind::Numeral,
        &Condition::ValueEq(1007),
        &[Column::Spelling],
    );
    assert_eq!(rows, vec![vec!["d1-d0-d2-an-d7".to_string()]]);
}

#[test]
fn digit_literal_translates_by_value() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM dozen 12");
    assert_eq!(run(&mut interp, "TRANSLATE 12 TO f"), vec!["D1-d2"]);
}

#[test]
fn undefined_digit_literal_errors() {
    let mut interp = setup();
    assert!(interp.execute_line("TRANSLATE 13 TO f").is_err());
}

#[test]
fn duplicate_value_is_swallowed() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM dozen 12");
    run(&mut interp, "DEFNUM twelve 12");
    assert_eq!(interp.lexicon().count(Kind::Numeral), 1);
}

#[test]
fn redefining_numerals_is_insensitive_to_digit_roots_changing() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM dozen 12");
    // Changing a digit root later never rewrites stored spellings.
    run(&mut interp, "UPDATE one uno");
    let rows = interp.lexicon().select(
        Kind::Numeral,
        &Condition::ValueEq(12),
        &[Column::Spelling],
    );
    assert_eq!(rows, vec![vec!["d1-d2".to_string()]]);
}

#[test]
fn defnum_rejects_a_non_integer_value() {
    let mut interp = setup();
    assert!(interp.execute_line("DEFNUM dozen twelve").is_err());
    assert!(interp.execute_line("DEFNUM dozen 1.5").is_err());
}

#[test]
fn defnum_rejects_a_negative_value() {
    let mut interp = setup();
    assert!(interp.execute_line("DEFNUM debt -4").is_err());
}

#[test]
fn defnum_without_digit_roots_errors() {
    let mut interp = Interpreter::new();
    assert!(interp.execute_line("DEFNUM dozen 12").is_err());
    assert_eq!(interp.lexicon().count(Kind::Numeral), 0);
}

#[test]
fn defnum_accepts_a_note() {
    let mut interp = setup();
    run(&mut interp, "DEFNUM dozen 12 NOTE [a full set]");
    let rows = interp.lexicon().select(
        Kind::Numeral,
        &Condition::ValueEq(12),
        &[Column::Note],
    );
    assert_eq!(rows, vec![vec!["a full set".to_string()]]);
}
