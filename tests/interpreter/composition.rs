//! Combination modes and modifiers on word definitions.

use fira::script::Interpreter;
use fira::store::{Column, Condition, Kind};

fn setup() -> Interpreter {
    let mut interp = Interpreter::new();
    for line in [
        "DEFROOT big bi",
        "DEFROOT house ho",
        "DEFROOT water lana",
        "DEFROOT _plural pa",
        "DEFROOT _feminine fe",
        "DEFROOT _place lo",
        "DEFROOT _subject su",
    ] {
        interp.execute_line(line).unwrap();
    }
    interp
}

fn fira(interp: &mut Interpreter, word: &str) -> String {
    let lines = interp
        .execute_line(&format!("TRANSLATE {word} TO f"))
        .unwrap()
        .lines;
    lines[0].to_lowercase()
}

#[test]
fn join_mode_separates_constituents() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD bighouse FROM big house WITH JOIN '")
        .unwrap();
    assert_eq!(fira(&mut interp, "bighouse"), "bi'ho");
}

#[test]
fn join_mode_without_separator_concatenates() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD bighouse FROM big house WITH JOIN")
        .unwrap();
    assert_eq!(fira(&mut interp, "bighouse"), "biho");
}

#[test]
fn slice_mode_takes_half_open_ranges() {
    let mut interp = setup();
    // water -> lana; [0,2) of lana = "la"; [0,0) of house -> whole "ho".
    interp
        .execute_line("DEFWORD waterhouse FROM water house WITH SLICE 0 2 0 0")
        .unwrap();
    assert_eq!(fira(&mut interp, "waterhouse"), "laho");
}

#[test]
fn slice_mode_rejects_wrong_bound_count() {
    let mut interp = setup();
    assert!(interp
        .execute_line("DEFWORD waterhouse FROM water house WITH SLICE 0 2")
        .is_err());
}

#[test]
fn derive_mode_appends_role_suffix() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD housekeeper FROM house WITH DERIVE subject")
        .unwrap();
    assert_eq!(fira(&mut interp, "housekeeper"), "hosu");
}

#[test]
fn derive_mode_accepts_letter_codes() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD watery FROM water WITH DERIVE p")
        .unwrap();
    assert_eq!(fira(&mut interp, "watery"), "lanalo");
}

#[test]
fn derive_mode_requires_exactly_one_constituent() {
    let mut interp = setup();
    assert!(interp
        .execute_line("DEFWORD broken FROM big house WITH DERIVE subject")
        .is_err());
}

#[test]
fn end_modifier_appends_after_the_mode() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD bighouses FROM big house WITH JOIN - END p")
        .unwrap();
    assert_eq!(fira(&mut interp, "bighouses"), "bi-hopa");
}

#[test]
fn modifier_order_does_not_matter() {
    let mut interp = setup();
    interp
        .execute_line("DEFWORD first FROM big house NOTE a END p")
        .unwrap();
    interp
        .execute_line("DEFWORD second FROM big house END p NOTE a")
        .unwrap();
    let first = interp.lexicon().select(
        Kind::Complex,
        &Condition::GlossEq("first".into()),
        &[Column::Spelling, Column::Note],
    );
    let second = interp.lexicon().select(
        Kind::Complex,
        &Condition::GlossEq("second".into()),
        &[Column::Spelling, Column::Note],
    );
    assert_eq!(first[0], second[0]);
}

#[test]
fn failed_definition_persists_nothing() {
    let mut interp = setup();
    assert!(interp
        .execute_line("DEFWORD broken FROM big missing")
        .is_err());
    assert_eq!(interp.lexicon().count(Kind::Complex), 0);
}
