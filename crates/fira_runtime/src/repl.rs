//! The interactive REPL.
//!
//! Reads one FiraScript command per line, executes it against the
//! interpreter, prints the response, and keeps going after errors. The
//! loop ends on `EXIT`, Ctrl+D, or editor EOF; if a snapshot path is
//! configured, the lexicon is saved on the way out.

use std::path::{Path, PathBuf};

use fira_foundation::{Error, Result};
use fira_script::Interpreter;
use fira_store::{persist, Lexicon};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The interpreter: lexicon plus session settings.
    interpreter: Interpreter,

    /// Where to save the lexicon snapshot on exit, if anywhere.
    snapshot_path: Option<PathBuf>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            interpreter: Interpreter::new(),
            snapshot_path: None,
            show_banner: true,
            prompt: "fira> ".to_string(),
        }
    }

    /// Replaces the interpreter's lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.interpreter = Interpreter::with_lexicon(lexicon);
        self
    }

    /// Sets the snapshot path saved on exit.
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns a mutable reference to the interpreter.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Runs one script file through the interpreter, printing its output.
    ///
    /// # Errors
    ///
    /// Returns the first error the file raises.
    pub fn run_file(&mut self, path: &Path) -> Result<bool> {
        let line = format!("READ {}", path.display());
        let response = self.interpreter.execute_line(&line)?;
        for out in &response.lines {
            println!("{out}");
        }
        Ok(response.stop)
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally or the final
    /// snapshot save fails. Interpreter errors are printed, not returned.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim_end();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    match self.interpreter.execute_line(trimmed) {
                        Ok(response) => {
                            for out in &response.lines {
                                println!("{out}");
                            }
                            if response.stop {
                                break;
                            }
                        }
                        Err(e) => print_error(&e),
                    }
                }
                ReadResult::Interrupted => {
                    println!("\nInput cancelled.");
                }
                ReadResult::Eof => break,
            }
        }

        self.save_snapshot()?;
        println!("Goodbye!");
        Ok(())
    }

    /// Saves the lexicon to the configured snapshot path, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save_snapshot(&self) -> Result<()> {
        if let Some(path) = &self.snapshot_path {
            persist::save_to_file(self.interpreter.lexicon(), path)?;
        }
        Ok(())
    }

    fn print_banner(&self) {
        println!("Fira {}", env!("CARGO_PKG_VERSION"));
        println!("Enter FiraScript code below. Type 'HELP' for commands, 'EXIT' to leave.");
    }
}

/// Prints an interpreter error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
