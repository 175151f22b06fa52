//! The command dispatcher and session state.
//!
//! One [`Interpreter`] owns the lexicon and the mutable session settings.
//! [`Interpreter::execute`] classifies the first token of a tokenized line
//! against the fixed command set — an unrecognized first token is an
//! implicit translate-to-Fira request — runs the matching handler, and
//! returns the printable output plus a "stop" signal. All persistence and
//! lexicon mutation happens through handlers; duplicate-record inserts are
//! swallowed at the store boundary.

use std::fs;

use fira_foundation::{Error, ErrorContext, Result};
use fira_store::{Column, ComplexWord, Condition, Kind, Lexicon, Numeral, RootWord};

use crate::define::{self, last_keyword};
use crate::tokenizer::tokenize;
use crate::translate::{resolve, Direction};

/// The default file-inclusion depth ceiling.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 10;

/// The extension appended to `READ` arguments that lack it.
const SCRIPT_EXTENSION: &str = ".fira";

/// Static help text, printed verbatim line by line.
const HELP_TEXT: &str = include_str!("help.md");

/// Mutable session configuration, changed only via `DEBUG`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Suppress progress narration from handlers.
    pub silent: bool,
    /// Ceiling for file-inclusion recursion depth.
    pub max_recursion_depth: usize,
    /// Echo each line while executing a file.
    pub print_read: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            silent: true,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            print_read: false,
        }
    }
}

/// The outcome of executing one line: output to print, in order, and
/// whether the caller should stop reading further lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Lines for the caller to print.
    pub lines: Vec<String>,
    /// `true` when an `EXIT` was executed.
    pub stop: bool,
}

impl Response {
    fn none() -> Self {
        Self::default()
    }

    fn stop() -> Self {
        Self {
            lines: Vec::new(),
            stop: true,
        }
    }

    fn output(lines: Vec<String>) -> Self {
        Self { lines, stop: false }
    }
}

/// The FiraScript interpreter.
pub struct Interpreter {
    lexicon: Lexicon,
    settings: Settings,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter over an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    /// Creates an interpreter over an existing lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            settings: Settings::default(),
        }
    }

    /// Returns a reference to the lexicon.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns a mutable reference to the lexicon.
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// Returns the current session settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executes one top-level line.
    ///
    /// # Errors
    ///
    /// Returns any interpreter error the line raised; the session remains
    /// usable afterwards.
    pub fn execute_line(&mut self, line: &str) -> Result<Response> {
        self.execute(line, 0)
    }

    /// Executes one line at the given inclusion depth.
    ///
    /// # Errors
    ///
    /// Returns a recursion limit error when `depth` exceeds the configured
    /// ceiling, or whatever error the dispatched handler raises.
    pub fn execute(&mut self, line: &str, depth: usize) -> Result<Response> {
        if depth > self.settings.max_recursion_depth {
            return Err(Error::recursion_limit(self.settings.max_recursion_depth));
        }

        let tokens = tokenize(line);
        let Some(verb) = tokens.first() else {
            return Ok(Response::none());
        };

        match verb.as_str() {
            "#" => Ok(Response::none()),
            "DEFROOT" => self.defroot(&tokens[1..]),
            "DEFWORD" => self.defword(&tokens[1..], line),
            "DEFNUM" => self.defnum(&tokens[1..]),
            "LISTWORDS" => self.listwords(&tokens[1..]),
            "TRANSLATE" => {
                let word = self.translate_cmd(&tokens[1..])?;
                Ok(Response::output(vec![capitalize(&word)]))
            }
            "UPDATE" => self.update(&tokens[1..]),
            "DELETE" => self.delete(&tokens[1..]),
            "HELP" => Ok(Response::output(
                HELP_TEXT.lines().map(str::to_string).collect(),
            )),
            "READ" => self.read(&tokens[1..], depth),
            "DEBUG" => Ok(Response::output(self.debug(&tokens[1..])?)),
            "EXIT" => Ok(Response::stop()),
            // Implicit translate: the whole line is a to-Fira request.
            _ => {
                let mut args = tokens.clone();
                args.push("TO".to_string());
                args.push("f".to_string());
                let word = self.translate_cmd(&args)?;
                Ok(Response::output(vec![capitalize(&word)]))
            }
        }
    }

    fn narrate(&self, out: &mut Vec<String>, verb: &str, args: &[String]) {
        if !self.settings.silent {
            out.push(format!("{verb} {} ... DONE", args.join(" ")));
        }
    }

    fn defroot(&mut self, args: &[String]) -> Result<Response> {
        let def = define::parse_root(&self.lexicon, args)?;
        let record = RootWord {
            gloss: def.gloss.to_lowercase(),
            spelling: def.spelling.to_lowercase(),
            note: def.note,
        };
        self.lexicon.insert_root(record);
        let mut lines = Vec::new();
        self.narrate(&mut lines, "DEFROOT", args);
        Ok(Response::output(lines))
    }

    fn defword(&mut self, args: &[String], line: &str) -> Result<Response> {
        let def = define::parse_word(&self.lexicon, args)?;
        let record = ComplexWord {
            gloss: def.gloss.to_lowercase(),
            spelling: def.spelling.to_lowercase(),
            source: line.to_string(),
            note: def.note,
        };
        self.lexicon.insert_complex(record);
        let mut lines = Vec::new();
        self.narrate(&mut lines, "DEFWORD", args);
        Ok(Response::output(lines))
    }

    fn defnum(&mut self, args: &[String]) -> Result<Response> {
        let def = define::parse_num(&self.lexicon, args)?;
        let record = Numeral {
            value: def.value,
            gloss: def.gloss.to_lowercase(),
            spelling: def.spelling.to_lowercase(),
            note: def.note,
        };
        self.lexicon.insert_numeral(record);
        let mut lines = Vec::new();
        self.narrate(&mut lines, "DEFNUM", args);
        Ok(Response::output(lines))
    }

    /// `TRANSLATE <word> TO <e|f>`, shared with the implicit form.
    fn translate_cmd(&self, args: &[String]) -> Result<String> {
        if args.is_empty() {
            return Err(Error::syntax("TRANSLATE ERROR: no params provided"));
        }
        if args.len() < 3 || args[1] != "TO" {
            return Err(Error::syntax(format!(
                "TRANSLATE ERROR: '{}' not in format '<word> TO <e|f>'",
                args.join(" ")
            )));
        }
        let direction = Direction::parse(&args[2]).ok_or_else(|| {
            Error::syntax(format!(
                "TRANSLATE ERROR: '{}' not in format '<word> TO <e|f>', bad language",
                args.join(" ")
            ))
        })?;
        resolve(&self.lexicon, &args[0], direction)
    }

    fn listwords(&self, args: &[String]) -> Result<Response> {
        const KEYWORDS: [&str; 3] = ["LANG", "TYPE", "NOTE"];

        let mut kinds = vec![Kind::Root, Kind::Complex];
        let word = args.first().map(|w| w.to_lowercase()).unwrap_or_default();
        let (mut condition, mut columns) = if args.is_empty() {
            (Condition::All, Column::ALL.to_vec())
        } else {
            (
                Condition::EitherEq(word.clone()),
                vec![Column::Gloss, Column::Spelling],
            )
        };

        let mut rest = args;
        while rest.len() > 1 {
            let Some(i) = last_keyword(rest, &KEYWORDS) else {
                return Err(Error::syntax(format!(
                    "LISTWORDS ERROR: invalid subcommand in '{}'",
                    args.join(" ")
                )));
            };
            if i == 0 {
                return Err(Error::syntax(format!(
                    "LISTWORDS ERROR: invalid subcommand in '{}'",
                    args.join(" ")
                )));
            }
            match rest[i].as_str() {
                "LANG" => match rest.get(i + 1).map(String::as_str) {
                    Some("e") => condition = Condition::GlossEq(word.clone()),
                    Some("f") => condition = Condition::SpellingEq(word.clone()),
                    _ => {
                        return Err(Error::syntax(format!(
                            "LISTWORDS ERROR: invalid LANG value in '{}'",
                            args.join(" ")
                        )));
                    }
                },
                "TYPE" => match rest.get(i + 1).map(String::as_str) {
                    Some("r") => kinds = vec![Kind::Root],
                    Some("c") => kinds = vec![Kind::Complex],
                    _ => {
                        return Err(Error::syntax(format!(
                            "LISTWORDS ERROR: invalid TYPE value in '{}'",
                            args.join(" ")
                        )));
                    }
                },
                "NOTE" => columns.push(Column::Note),
                _ => unreachable!("keyword table covers all peeled tokens"),
            }
            rest = &rest[..i];
        }

        let mut lines = Vec::new();
        self.narrate(&mut lines, "LISTWORDS", args);
        for kind in kinds {
            for row in self.lexicon.select(kind, &condition, &columns) {
                lines.push(row.join(" | "));
            }
        }
        Ok(Response::output(lines))
    }

    fn update(&mut self, args: &[String]) -> Result<Response> {
        let [gloss, spelling] = args else {
            return Err(Error::syntax(format!(
                "UPDATE ERROR: invalid number of params in '{}'",
                args.join(" ")
            )));
        };
        let found = self
            .lexicon
            .update_root_spelling(&gloss.to_lowercase(), &spelling.to_lowercase());
        if !found {
            return Err(Error::syntax(format!(
                "UPDATE ERROR: no record found for '{}'",
                args.join(" ")
            )));
        }
        let mut lines = Vec::new();
        self.narrate(&mut lines, "UPDATE", args);
        Ok(Response::output(lines))
    }

    fn delete(&mut self, args: &[String]) -> Result<Response> {
        let [word] = args else {
            return Err(Error::syntax(format!(
                "DELETE ERROR: '{}' not in format '<word>'",
                args.join(" ")
            )));
        };
        let condition = Condition::EitherEq(word.to_lowercase());
        self.lexicon.delete(Kind::Root, &condition);
        self.lexicon.delete(Kind::Complex, &condition);
        let mut lines = Vec::new();
        self.narrate(&mut lines, "DELETE", args);
        Ok(Response::output(lines))
    }

    /// Executes a script file line by line at `depth + 1`.
    ///
    /// An `EXIT` inside the file stops the file and propagates to the
    /// caller. Errors from dispatched lines are rewrapped with the file
    /// name and 1-based line number, aborting the remainder of the file.
    fn read(&mut self, args: &[String], depth: usize) -> Result<Response> {
        let [name] = args else {
            return Err(Error::syntax(format!(
                "READ ERROR: invalid number of params in '{}'",
                args.join(" ")
            )));
        };

        let mut filename = name.clone();
        if !filename.ends_with(SCRIPT_EXTENSION) {
            filename.push_str(SCRIPT_EXTENSION);
        }

        let contents = fs::read_to_string(&filename)
            .map_err(|e| Error::syntax(format!("READ ERROR: cannot open file '{filename}': {e}")))?;

        let mut lines = Vec::new();
        for (index, file_line) in contents.lines().enumerate() {
            if self.settings.print_read {
                lines.push(format!(
                    "Reading {filename} line {}: {file_line}",
                    index + 1
                ));
            }
            match self.execute(file_line, depth + 1) {
                Ok(response) => {
                    lines.extend(response.lines);
                    if response.stop {
                        return Ok(Response { lines, stop: true });
                    }
                }
                Err(e) => {
                    // Keep the innermost context from nested files.
                    let e = if e.context.is_some() {
                        e
                    } else {
                        e.with_context(
                            ErrorContext::new()
                                .with_source(filename.clone())
                                .with_line(index + 1),
                        )
                    };
                    return Err(e);
                }
            }
        }
        Ok(Response::output(lines))
    }

    /// `DEBUG` session commands, chained with the same right-to-left peel
    /// as the definition modifiers.
    fn debug(&mut self, args: &[String]) -> Result<Vec<String>> {
        const KEYWORDS: [&str; 4] = ["SILENT", "MAX-RECUR", "PRINT-READ", "RDB"];

        if args.is_empty() {
            return Err(Error::syntax("DEBUG ERROR: no params provided"));
        }
        let Some(i) = last_keyword(args, &KEYWORDS) else {
            return Err(Error::syntax(format!(
                "DEBUG ERROR: invalid subcommand in '{}'",
                args.join(" ")
            )));
        };

        let mut lines = if i > 0 {
            self.debug(&args[..i])?
        } else {
            Vec::new()
        };

        match args[i].as_str() {
            "SILENT" => {
                self.settings.silent = apply_toggle(self.settings.silent, args.get(i + 1));
                lines.push(format!("Silent mode set to {}.", self.settings.silent));
            }
            "PRINT-READ" => {
                self.settings.print_read = apply_toggle(self.settings.print_read, args.get(i + 1));
                lines.push(format!("Print-read set to {}.", self.settings.print_read));
            }
            "MAX-RECUR" => {
                let old = self.settings.max_recursion_depth;
                self.settings.max_recursion_depth = match args.get(i + 1) {
                    None => DEFAULT_MAX_RECURSION_DEPTH,
                    Some(value) => value.parse().map_err(|_| {
                        Error::syntax(format!(
                            "DEBUG ERROR: invalid MAX-RECUR value in '{}'",
                            args.join(" ")
                        ))
                    })?,
                };
                lines.push(format!(
                    "Max recursion depth updated from {old} to {}.",
                    self.settings.max_recursion_depth
                ));
            }
            "RDB" => {
                self.lexicon.clear();
                lines.push("Record store cleared.".to_string());
            }
            _ => unreachable!("keyword table covers all peeled tokens"),
        }
        Ok(lines)
    }
}

/// Applies a boolean setting token: absent toggles, a recognized boolean
/// sets, and anything else toggles too. The leniency is deliberate; see
/// the session-command docs.
fn apply_toggle(current: bool, value: Option<&String>) -> bool {
    match value.map(|v| parse_bool(v)) {
        Some(Some(explicit)) => explicit,
        _ => !current,
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token.to_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
