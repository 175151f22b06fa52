//! Definition-command parsing.
//!
//! `DEFROOT`, `DEFWORD`, and `DEFNUM` share one argument shape:
//! `<gloss> <base-clause> [<modifier> <modifier-args>]*`, where the
//! modifiers are optional and logically unordered. Parsing peels them
//! right-to-left: find the *last* token that is a modifier keyword for the
//! command, recursively parse the prefix before it, then apply the found
//! modifier's effect on top. The base case (no modifier keyword left) is
//! parsed by kind-specific rules. Recursion depth is bounded by the token
//! count, so the peel needs no depth guard.

use fira_foundation::{Error, Result};
use fira_store::Lexicon;

use crate::assemble::{self, CombineMode};
use crate::numeral;
use crate::translate::{resolve, Direction};

/// Finds the index of the last token that is one of `keywords`.
#[must_use]
pub fn last_keyword(tokens: &[String], keywords: &[&str]) -> Option<usize> {
    tokens
        .iter()
        .rposition(|t| keywords.contains(&t.as_str()))
}

/// Returns the modifier's argument or a syntax error naming the command.
fn modifier_arg<'a>(tokens: &'a [String], index: usize, command: &str) -> Result<&'a String> {
    tokens.get(index + 1).ok_or_else(|| {
        Error::syntax(format!(
            "{command} ERROR: missing argument for '{}' in '{}'",
            tokens[index],
            tokens.join(" ")
        ))
    })
}

/// A grammatical role used by the `END` (and legacy `GENDER`) modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Masculine,
    Feminine,
    Neutral,
    Plural,
    Verb,
}

impl Role {
    /// Parses a role from its full name or single-letter code,
    /// case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "m" | "masculine" => Some(Self::Masculine),
            "f" | "feminine" => Some(Self::Feminine),
            "n" | "neutral" => Some(Self::Neutral),
            "p" | "plural" => Some(Self::Plural),
            "v" | "verb" => Some(Self::Verb),
            _ => None,
        }
    }

    /// The gloss of the suffix word this role appends.
    #[must_use]
    pub const fn suffix_key(self) -> &'static str {
        match self {
            Self::Masculine => "_masculine",
            Self::Feminine => "_feminine",
            Self::Neutral => "_neutral",
            Self::Plural => "_plural",
            Self::Verb => "_verb",
        }
    }
}

/// Translates the suffix word a role appends, in Fira.
fn role_suffix(lexicon: &Lexicon, token: &str, command: &str) -> Result<String> {
    let role = Role::parse(token).ok_or_else(|| {
        Error::syntax(format!("{command} ERROR: invalid role '{token}'"))
    })?;
    resolve(lexicon, role.suffix_key(), Direction::ToFira)
}

/// A parsed `DEFROOT` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootDef {
    pub gloss: String,
    pub spelling: String,
    pub note: String,
}

/// Parses `DEFROOT <gloss> <spelling> [NOTE <text>] [END <role>]`.
///
/// # Errors
///
/// Returns a syntax error on fewer than two base tokens, an unknown
/// trailing token, an invalid role, or an unresolvable role suffix.
pub fn parse_root(lexicon: &Lexicon, tokens: &[String]) -> Result<RootDef> {
    const KEYWORDS: [&str; 2] = ["NOTE", "END"];
    const COMMAND: &str = "DEFROOT";

    match last_keyword(tokens, &KEYWORDS) {
        Some(i) => {
            let mut base = parse_root(lexicon, &tokens[..i])?;
            match tokens[i].as_str() {
                "NOTE" => base.note = modifier_arg(tokens, i, COMMAND)?.clone(),
                "END" => {
                    let role = modifier_arg(tokens, i, COMMAND)?;
                    base.spelling += &role_suffix(lexicon, role, COMMAND)?;
                }
                _ => unreachable!("keyword table covers all peeled tokens"),
            }
            Ok(base)
        }
        None => match tokens {
            [gloss, spelling] => Ok(RootDef {
                gloss: gloss.clone(),
                spelling: spelling.clone(),
                note: String::new(),
            }),
            [] => Err(Error::syntax("DEFROOT ERROR: no params provided")),
            _ => Err(Error::syntax(format!(
                "DEFROOT ERROR: '{}' not in format '<gloss> <spelling> <params>'",
                tokens.join(" ")
            ))),
        },
    }
}

/// A parsed `DEFWORD` command, before assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
struct WordParts {
    gloss: String,
    constituents: Vec<String>,
    note: String,
    append: String,
    mode: CombineMode,
}

/// A parsed and assembled `DEFWORD` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordDef {
    pub gloss: String,
    pub spelling: String,
    pub note: String,
}

/// Parses and assembles
/// `DEFWORD <gloss> FROM <word>+ [WITH <mode> <args>*] [NOTE <text>] [END <role>]`.
///
/// Every constituent is resolved to Fira at definition time; the first
/// failure aborts the whole definition.
///
/// # Errors
///
/// Returns a syntax error on a malformed base clause (missing `FROM`), an
/// unresolvable constituent, or any mode/modifier violation.
pub fn parse_word(lexicon: &Lexicon, tokens: &[String]) -> Result<WordDef> {
    let parts = parse_word_parts(lexicon, tokens)?;
    let spelling = assemble::assemble(lexicon, &parts.constituents, &parts.mode, &parts.append)?;
    Ok(WordDef {
        gloss: parts.gloss,
        spelling,
        note: parts.note,
    })
}

fn parse_word_parts(lexicon: &Lexicon, tokens: &[String]) -> Result<WordParts> {
    const KEYWORDS: [&str; 4] = ["NOTE", "END", "GENDER", "WITH"];
    const COMMAND: &str = "DEFWORD";

    match last_keyword(tokens, &KEYWORDS) {
        Some(i) => {
            let mut base = parse_word_parts(lexicon, &tokens[..i])?;
            match tokens[i].as_str() {
                "NOTE" => base.note = modifier_arg(tokens, i, COMMAND)?.clone(),
                // GENDER is the legacy spelling of END on the word path.
                "END" | "GENDER" => {
                    let role = modifier_arg(tokens, i, COMMAND)?;
                    base.append += &role_suffix(lexicon, role, COMMAND)?;
                }
                "WITH" => base.mode = CombineMode::parse(&tokens[i + 1..])?,
                _ => unreachable!("keyword table covers all peeled tokens"),
            }
            Ok(base)
        }
        None => {
            if tokens.is_empty() {
                return Err(Error::syntax("DEFWORD ERROR: no params provided"));
            }
            if tokens.len() < 3 || tokens[1] != "FROM" {
                return Err(Error::syntax(format!(
                    "DEFWORD ERROR: '{}' not in format '<gloss> FROM <word> <params>'",
                    tokens.join(" ")
                )));
            }
            let mut constituents = Vec::new();
            for word in &tokens[2..] {
                let translated = resolve(lexicon, word, Direction::ToFira).map_err(|e| {
                    Error::syntax(format!(
                        "DEFWORD ERROR: error in '{}': {e}",
                        tokens.join(" ")
                    ))
                })?;
                constituents.push(translated);
            }
            Ok(WordParts {
                gloss: tokens[0].clone(),
                constituents,
                note: String::new(),
                append: String::new(),
                mode: CombineMode::Concat,
            })
        }
    }
}

/// A parsed `DEFNUM` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumDef {
    pub value: i64,
    pub gloss: String,
    pub spelling: String,
    pub note: String,
}

/// Parses `DEFNUM <gloss> <decimal-integer> [NOTE <text>]`; the spelling
/// is always produced by the numeral decomposer from the value.
///
/// # Errors
///
/// Returns a syntax error on a missing or unparsable integer, an unknown
/// trailing token, or a failed digit-word translation.
pub fn parse_num(lexicon: &Lexicon, tokens: &[String]) -> Result<NumDef> {
    const KEYWORDS: [&str; 1] = ["NOTE"];
    const COMMAND: &str = "DEFNUM";

    match last_keyword(tokens, &KEYWORDS) {
        Some(i) => {
            let mut base = parse_num(lexicon, &tokens[..i])?;
            base.note = modifier_arg(tokens, i, COMMAND)?.clone();
            Ok(base)
        }
        None => match tokens {
            [gloss, value] => {
                let value: i64 = value.parse().map_err(|_| {
                    Error::syntax(format!(
                        "DEFNUM ERROR: invalid value in '{}'",
                        tokens.join(" ")
                    ))
                })?;
                let spelling = numeral::decompose(lexicon, value)?;
                Ok(NumDef {
                    value,
                    gloss: gloss.clone(),
                    spelling,
                    note: String::new(),
                })
            }
            [] => Err(Error::syntax("DEFNUM ERROR: no params provided")),
            _ => Err(Error::syntax(format!(
                "DEFNUM ERROR: invalid number of params in '{}'",
                tokens.join(" ")
            ))),
        },
    }
}
