//! # Pre-token Pattern

/// The GPT-2-style Unicode pre-token pattern.
///
/// This requires a regex engine with lookahead support (the trailing
/// `\s+(?!\S)` alternative), which the `regex` crate does not provide;
/// `fancy_regex` is used for this reason alone.
pub const PRETOKEN_PATTERN: &str =
    r"'(?:[sdmt]|ll|ve|re)| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+";

/// Build a regex alternation of exact-match literals, escaped, captured as a group.
///
/// Used to build the special-token splitter: each special token is matched
/// literally (not as a sub-pattern) and the match itself is kept as a
/// delimiter in the split output.
pub fn alternation_of_literals<S: AsRef<str>>(literals: &[S]) -> String {
    let parts: Vec<String> = literals.iter().map(|s| regex::escape(s.as_ref())).collect();
    format!("({})", parts.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_of_literals() {
        let alts = ["<|endoftext|>", "[x]", "boat"];
        let pattern = alternation_of_literals(&alts);
        assert_eq!(pattern, r"(<\|endoftext\|>|\[x\]|boat)");
    }
}
