//! Lexical tokenization (§4.6): whitespace-separated, no comments, no
//! string literals. A flat `split_whitespace` over owned strings stands in
//! for a grammar-based parser (see DESIGN.md for why this crate does not
//! use a PEG parser the way its closest teacher sibling does).

pub fn tokenize(source: &str) -> Vec<String> {
    source.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens = tokenize("LDI  A\t5\nHALT");
        assert_eq!(tokens, vec!["LDI", "A", "5", "HALT"]);
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(tokenize("   \n\t ").is_empty());
    }
}
