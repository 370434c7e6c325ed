//! Call-number splitting
//!
//! A shelving call number ends, by cataloging convention, in a short
//! mnemonic author mark ("Smi" for Smith). Spine labels print the
//! classification and the mark on separate lines, so the call number is
//! split with a trailing-alphabetic-run heuristic: a short (≤ 3 letter)
//! trailing run is a mark, a longer run is assumed to belong to the
//! classification except for its last three letters. The rules are
//! cataloging convention, preserved as-is.

/// Split result: classification prefix and author-mark suffix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallNumberParts {
    pub classification: String,
    pub author_mark: String,
}

/// Author marks longer than this keep only their last letters
const MARK_LEN: usize = 3;

/// Split a call number into classification and author mark.
///
/// An absent or blank call number yields two empty strings. Both outputs
/// are trimmed of trailing whitespace.
pub fn split_call_number(call_number: &str) -> CallNumberParts {
    let call_number = call_number.trim();
    if call_number.is_empty() {
        return CallNumberParts::default();
    }

    let tokens: Vec<&str> = call_number.split_whitespace().collect();
    if tokens.len() == 1 {
        return split_single_token(tokens[0]);
    }

    let mut classification = tokens[..tokens.len() - 1].join(" ");
    let last = tokens[tokens.len() - 1];

    // A last token led by a letter is the author mark; anything else
    // (".P98", "2024", "v.2") stays on the classification.
    if last.chars().next().is_some_and(char::is_alphabetic) {
        CallNumberParts {
            classification,
            author_mark: last.to_string(),
        }
    } else {
        classification.push(' ');
        classification.push_str(last);
        CallNumberParts {
            classification: classification.trim_end().to_string(),
            author_mark: String::new(),
        }
    }
}

fn split_single_token(token: &str) -> CallNumberParts {
    let run = token
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .count();

    if run == 0 {
        return CallNumberParts {
            classification: token.to_string(),
            author_mark: String::new(),
        };
    }

    // Runs longer than MARK_LEN are mostly classification; only the last
    // MARK_LEN letters are treated as the mark.
    let mark_chars = run.min(MARK_LEN);
    let cut = byte_index_from_end(token, mark_chars);

    CallNumberParts {
        classification: token[..cut].trim_end().to_string(),
        author_mark: token[cut..].to_string(),
    }
}

/// Byte index of the `n`-th character counted from the end of `s`
fn byte_index_from_end(s: &str, n: usize) -> usize {
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}
