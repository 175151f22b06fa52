//! File inclusion: nesting, depth limits, and error reporting.

use std::io::Write;

use fira::script::Interpreter;
use fira::store::Kind;

fn write_script(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn read_executes_a_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(
        &dir,
        "vocab.fira",
        "DEFROOT big bi\nDEFROOT house ho\nDEFWORD bighouse FROM big house\n",
    );
    let mut interp = Interpreter::new();
    interp.execute_line(&format!("READ {path}")).unwrap();
    assert_eq!(interp.lexicon().count(Kind::Root), 2);
    assert_eq!(interp.lexicon().count(Kind::Complex), 1);
}

#[test]
fn read_skips_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(
        &dir,
        "vocab.fira",
        "# vocabulary\n\nDEFROOT sun su\n\n# done\n",
    );
    let mut interp = Interpreter::new();
    interp.execute_line(&format!("READ {path}")).unwrap();
    assert_eq!(interp.lexicon().count(Kind::Root), 1);
}

#[test]
fn nested_reads_accumulate_into_one_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_script(&dir, "inner.fira", "DEFROOT moon mo\n");
    let outer = write_script(
        &dir,
        "outer.fira",
        &format!("DEFROOT sun su\nREAD {inner}\n"),
    );
    let mut interp = Interpreter::new();
    interp.execute_line(&format!("READ {outer}")).unwrap();
    assert_eq!(interp.lexicon().count(Kind::Root), 2);
}

#[test]
fn depth_at_the_ceiling_passes_and_one_past_fails() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = write_script(&dir, "leaf.fira", "DEFROOT sun su\n");
    let mid = write_script(&dir, "mid.fira", &format!("READ {leaf}\n"));
    let top = write_script(&dir, "top.fira", &format!("READ {mid}\n"));

    // Lines in leaf run at depth 3; a ceiling of 3 admits them.
    let mut interp = Interpreter::new();
    interp.execute_line("DEBUG MAX-RECUR 3").unwrap();
    interp.execute_line(&format!("READ {top}")).unwrap();
    assert_eq!(interp.lexicon().count(Kind::Root), 1);

    let mut interp = Interpreter::new();
    interp.execute_line("DEBUG MAX-RECUR 2").unwrap();
    let err = interp.execute_line(&format!("READ {top}")).unwrap_err();
    assert!(err.is_recursion_limit());
}

#[test]
fn self_inclusion_is_cut_off_by_the_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.fira");
    let name = path.to_string_lossy().into_owned();
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(format!("READ {name}\n").as_bytes()).unwrap();

    let mut interp = Interpreter::new();
    let err = interp.execute_line(&format!("READ {name}")).unwrap_err();
    assert!(err.is_recursion_limit());
}

#[test]
fn exit_propagates_out_of_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_script(&dir, "inner.fira", "DEFROOT sun su\nEXIT\n");
    let outer = write_script(
        &dir,
        "outer.fira",
        &format!("READ {inner}\nDEFROOT moon mo\n"),
    );
    let mut interp = Interpreter::new();
    let response = interp.execute_line(&format!("READ {outer}")).unwrap();
    assert!(response.stop);
    // The line after the inner EXIT never ran.
    assert_eq!(interp.lexicon().count(Kind::Root), 1);
}

#[test]
fn error_context_names_the_innermost_file() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_script(&dir, "inner.fira", "DEFROOT sun su\nDEFROOT broken\n");
    let outer = write_script(&dir, "outer.fira", &format!("READ {inner}\n"));
    let mut interp = Interpreter::new();
    let err = interp.execute_line(&format!("READ {outer}")).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("inner.fira"));
    assert!(msg.contains("line 2"));
    assert!(!msg.contains("outer.fira"));
}

#[test]
fn error_aborts_the_rest_of_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(
        &dir,
        "vocab.fira",
        "DEFROOT sun su\nDEFROOT broken\nDEFROOT moon mo\n",
    );
    let mut interp = Interpreter::new();
    assert!(interp.execute_line(&format!("READ {path}")).is_err());
    assert_eq!(interp.lexicon().count(Kind::Root), 1);
}

#[test]
fn extension_is_appended_but_never_doubled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir, "vocab.fira", "DEFROOT sun su\n");
    let bare = path.strip_suffix(".fira").unwrap().to_string();

    let mut interp = Interpreter::new();
    interp.execute_line(&format!("READ {bare}")).unwrap();
    interp.execute_line("DEBUG RDB").unwrap();
    interp.execute_line(&format!("READ {path}")).unwrap();
    assert_eq!(interp.lexicon().count(Kind::Root), 1);
}
