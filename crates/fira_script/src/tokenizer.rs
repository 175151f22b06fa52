//! Line tokenization.
//!
//! Splits a raw command line on single spaces, then re-merges runs of
//! tokens that form a `[...]`-delimited multi-word literal into one token
//! with the brackets stripped. An opening bracket with no closing bracket
//! on the line merges to the end of the line; this leniency is deliberate
//! and pinned by a test.

/// Tokenizes one line of FiraScript.
///
/// Empty tokens (from repeated spaces) are dropped before bracket merging,
/// so spacing inside a bracketed literal collapses to single spaces.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].starts_with('[') {
            if !tokens[i].ends_with(']') {
                // Merge through the first token ending in `]`, or to end
                // of line when the literal is unterminated.
                let merge_end = (i + 1..tokens.len())
                    .find(|&j| tokens[j].ends_with(']'))
                    .unwrap_or(tokens.len().saturating_sub(1));
                if merge_end > i {
                    let merged = tokens[i..=merge_end].join(" ");
                    tokens[i] = merged;
                    tokens.drain(i + 1..=merge_end);
                }
            }
            let stripped = {
                let mut t = tokens[i].as_str();
                t = t.strip_prefix('[').unwrap_or(t);
                t = t.strip_suffix(']').unwrap_or(t);
                t.to_string()
            };
            tokens[i] = stripped;
        }
        i += 1;
    }

    tokens
}
