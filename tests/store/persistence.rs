//! Snapshot persistence: a lexicon written to disk comes back whole, and a
//! restored lexicon drives the interpreter exactly like the original.

use fira::script::Interpreter;
use fira::store::{self, Column, Condition, Kind};

#[test]
fn interpreter_state_survives_a_snapshot() {
    let mut interp = Interpreter::new();
    for line in [
        "DEFROOT big bi",
        "DEFROOT house ho",
        "DEFWORD bighouse FROM big house NOTE [a dwelling]",
    ] {
        interp.execute_line(line).unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fira.db");
    store::save_to_file(interp.lexicon(), &path).unwrap();

    let mut restored = Interpreter::with_lexicon(store::load_from_file(&path).unwrap());
    let response = restored.execute_line("TRANSLATE bighouse TO f").unwrap();
    assert_eq!(response.lines, vec!["Biho".to_string()]);
    let rows = restored.lexicon().select(
        Kind::Complex,
        &Condition::GlossEq("bighouse".into()),
        &[Column::Note, Column::Source],
    );
    assert_eq!(
        rows,
        vec![vec![
            "a dwelling".to_string(),
            "DEFWORD bighouse FROM big house NOTE [a dwelling]".to_string()
        ]]
    );
}

#[test]
fn empty_lexicon_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.db");
    store::save_to_file(&store::Lexicon::new(), &path).unwrap();
    assert!(store::load_from_file(&path).unwrap().is_empty());
}

#[test]
fn saving_overwrites_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fira.db");

    let mut interp = Interpreter::new();
    interp.execute_line("DEFROOT sun su").unwrap();
    store::save_to_file(interp.lexicon(), &path).unwrap();

    interp.execute_line("DEBUG RDB").unwrap();
    interp.execute_line("DEFROOT moon mo").unwrap();
    store::save_to_file(interp.lexicon(), &path).unwrap();

    let restored = store::load_from_file(&path).unwrap();
    assert_eq!(restored.count(Kind::Root), 1);
    let rows = restored.select(Kind::Root, &Condition::All, &[Column::Gloss]);
    assert_eq!(rows, vec![vec!["moon".to_string()]]);
}

#[test]
fn load_from_missing_path_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store::load_from_file(dir.path().join("absent.db")).is_err());
}
