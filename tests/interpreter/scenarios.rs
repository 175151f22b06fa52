//! End-to-end command scenarios: definitions, translation in both
//! directions, listing, updating, and deleting.

use fira::script::Interpreter;
use fira::store::Kind;

fn run(interp: &mut Interpreter, line: &str) -> Vec<String> {
    interp.execute_line(line).unwrap().lines
}

#[test]
fn root_definition_round_trips() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT sun su");
    assert_eq!(run(&mut interp, "TRANSLATE sun TO f"), vec!["Su"]);
    assert_eq!(run(&mut interp, "TRANSLATE su TO e"), vec!["Sun"]);
    // Case-insensitive in both the word and the language token.
    assert_eq!(run(&mut interp, "TRANSLATE SUN TO F"), vec!["Su"]);
}

#[test]
fn compound_definition_concatenates_constituents() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT big bi");
    run(&mut interp, "DEFROOT house ho");
    run(&mut interp, "DEFWORD bighouse FROM big house");
    assert_eq!(run(&mut interp, "TRANSLATE bighouse TO f"), vec!["Biho"]);
}

#[test]
fn compound_definitions_can_build_on_compounds() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT big bi");
    run(&mut interp, "DEFROOT house ho");
    run(&mut interp, "DEFWORD bighouse FROM big house");
    run(&mut interp, "DEFWORD bigbighouse FROM big bighouse");
    assert_eq!(
        run(&mut interp, "TRANSLATE bigbighouse TO f"),
        vec!["Bibiho"]
    );
}

#[test]
fn listwords_without_args_lists_all_records() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT big bi");
    run(&mut interp, "DEFROOT house ho");
    run(&mut interp, "DEFWORD bighouse FROM big house");
    let lines = run(&mut interp, "LISTWORDS");
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().any(|l| l.contains("bighouse")));
}

#[test]
fn delete_matches_either_language_across_tables() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT big bi");
    run(&mut interp, "DEFROOT house ho");
    run(&mut interp, "DEFWORD bighouse FROM big house");

    // Delete by Fira spelling of the compound.
    run(&mut interp, "DELETE biho");
    assert_eq!(interp.lexicon().count(Kind::Complex), 0);

    // Delete by English gloss of a root.
    run(&mut interp, "DELETE house");
    assert_eq!(interp.lexicon().count(Kind::Root), 1);
}

#[test]
fn update_rewrites_only_the_root_spelling() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT sun su");
    run(&mut interp, "UPDATE sun sol");
    assert_eq!(run(&mut interp, "TRANSLATE sun TO f"), vec!["Sol"]);
    assert!(interp.execute_line("UPDATE ghost gh").is_err());
}

#[test]
fn implicit_translate_for_unrecognized_verbs() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT sun su");
    assert_eq!(run(&mut interp, "sun"), vec!["Su"]);
}

#[test]
fn session_continues_after_errors() {
    let mut interp = Interpreter::new();
    assert!(interp.execute_line("TRANSLATE ghost TO f").is_err());
    run(&mut interp, "DEFROOT sun su");
    assert_eq!(run(&mut interp, "TRANSLATE sun TO f"), vec!["Su"]);
}

#[test]
fn bracket_literals_define_multi_word_glosses() {
    let mut interp = Interpreter::new();
    run(&mut interp, "DEFROOT [the sun] su");
    assert_eq!(run(&mut interp, "TRANSLATE [the sun] TO f"), vec!["Su"]);
}
