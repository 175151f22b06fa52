//! The word assembler.
//!
//! Merges the Fira translations of a compound definition's constituents
//! according to a combination mode, then appends any suffix text the
//! modifiers accumulated. The computed spelling is the only spelling a
//! compound word can ever have; callers never supply one.

use fira_foundation::{Error, Result};
use fira_store::Lexicon;

use crate::translate::{resolve, Direction};

/// A grammatical role used by `WITH DERIVE`.
///
/// Each role selects a suffix key that is itself translated to Fira and
/// appended to the sole constituent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeriveRole {
    /// A concrete instance of the base word.
    Instance,
    /// The agent performing the base word.
    Subject,
    /// The patient of the base word.
    Object,
    /// A place associated with the base word.
    Place,
    /// The verb form of the base word.
    Verb,
}

impl DeriveRole {
    /// Parses a role from its full name or single-letter code,
    /// case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "i" | "instance" => Some(Self::Instance),
            "s" | "subject" => Some(Self::Subject),
            "o" | "object" => Some(Self::Object),
            "p" | "place" => Some(Self::Place),
            "v" | "verb" => Some(Self::Verb),
            _ => None,
        }
    }

    /// The gloss of the suffix word this role appends.
    #[must_use]
    pub const fn suffix_key(self) -> &'static str {
        match self {
            Self::Instance => "_instance",
            Self::Subject => "_subject",
            Self::Object => "_object",
            Self::Place => "_place",
            Self::Verb => "_verb",
        }
    }
}

/// How constituent translations are merged into one spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombineMode {
    /// Concatenate the constituents in order (the default).
    Concat,
    /// Take a half-open `[start, end)` character slice of each constituent
    /// before concatenating. An end bound of 0 means "to end of string".
    /// Bounds are kept raw until assembly, when the constituent count is
    /// known.
    Slice { bounds: Vec<String> },
    /// Concatenate with a separator between constituents.
    Join { separator: Option<String> },
    /// Append a role suffix to a single constituent.
    Derive { role: DeriveRole },
}

impl CombineMode {
    /// Parses a `WITH` clause: the mode keyword plus its arguments.
    ///
    /// # Errors
    ///
    /// Returns a syntax error on an unknown mode, a `JOIN` with more than
    /// one separator, or a `DERIVE` without exactly one recognized role.
    pub fn parse(tokens: &[String]) -> Result<Self> {
        let Some((mode, args)) = tokens.split_first() else {
            return Err(Error::syntax("DEFWORD ERROR: WITH requires a mode"));
        };
        match mode.as_str() {
            "SLICE" => Ok(Self::Slice {
                bounds: args.to_vec(),
            }),
            "JOIN" => match args {
                [] => Ok(Self::Join { separator: None }),
                [separator] => Ok(Self::Join {
                    separator: Some(separator.clone()),
                }),
                _ => Err(Error::syntax(format!(
                    "DEFWORD ERROR: invalid number of arguments to JOIN in '{}'",
                    tokens.join(" ")
                ))),
            },
            "DERIVE" => {
                let [role] = args else {
                    return Err(Error::syntax(format!(
                        "DEFWORD ERROR: invalid number of arguments to DERIVE in '{}'",
                        tokens.join(" ")
                    )));
                };
                let role = DeriveRole::parse(role).ok_or_else(|| {
                    Error::syntax(format!("DEFWORD ERROR: invalid DERIVE role '{role}'"))
                })?;
                Ok(Self::Derive { role })
            }
            other => Err(Error::syntax(format!(
                "DEFWORD ERROR: invalid WITH mode '{other}'"
            ))),
        }
    }
}

/// Merges constituent translations per the mode, then appends `append`.
///
/// # Errors
///
/// Returns a syntax error when the mode's arguments do not fit the
/// constituent count, a slice bound is malformed or out of range, or a
/// `DERIVE` suffix word is missing from the lexicon.
pub fn assemble(
    lexicon: &Lexicon,
    constituents: &[String],
    mode: &CombineMode,
    append: &str,
) -> Result<String> {
    let mut spelling = match mode {
        CombineMode::Concat => constituents.concat(),
        CombineMode::Slice { bounds } => slice_concat(constituents, bounds)?,
        CombineMode::Join { separator } => {
            constituents.join(separator.as_deref().unwrap_or_default())
        }
        CombineMode::Derive { role } => {
            let [sole] = constituents else {
                return Err(Error::syntax(
                    "DEFWORD ERROR: WITH DERIVE requires exactly one constituent",
                ));
            };
            let suffix = resolve(lexicon, role.suffix_key(), Direction::ToFira).map_err(|e| {
                Error::syntax(format!("DEFWORD ERROR: WITH DERIVE {role:?}: {e}"))
            })?;
            format!("{sole}{suffix}")
        }
    };
    spelling.push_str(append);
    Ok(spelling)
}

/// Applies a half-open character slice to each constituent and
/// concatenates the results.
fn slice_concat(constituents: &[String], bounds: &[String]) -> Result<String> {
    if bounds.len() != constituents.len() * 2 {
        return Err(Error::syntax(format!(
            "DEFWORD ERROR: SLICE needs {} bounds for {} constituents, got {}",
            constituents.len() * 2,
            constituents.len(),
            bounds.len()
        )));
    }

    let mut spelling = String::new();
    for (i, word) in constituents.iter().enumerate() {
        let start = parse_bound(&bounds[i * 2])?;
        let end = parse_bound(&bounds[i * 2 + 1])?;
        let chars: Vec<char> = word.chars().collect();
        let end = if end == 0 { chars.len() } else { end };
        if start > end || end > chars.len() {
            return Err(Error::syntax(format!(
                "DEFWORD ERROR: SLICE bounds {start}..{end} out of range for '{word}'"
            )));
        }
        spelling.extend(&chars[start..end]);
    }
    Ok(spelling)
}

fn parse_bound(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| Error::syntax(format!("DEFWORD ERROR: invalid SLICE bound '{token}'")))
}
