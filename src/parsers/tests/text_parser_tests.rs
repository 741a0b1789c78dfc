use crate::parsers::text;

mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(text::tokenize("").is_empty());
        assert!(text::count_words("   \n\t  ").is_empty());
    }

    #[test]
    fn test_case_folding_and_punctuation() {
        let table = text::count_words("Privacy Privacy policy data DATA.");

        assert_eq!(table.get("privacy"), 2);
        assert_eq!(table.get("policy"), 1);
        assert_eq!(table.get("data"), 2);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("data."), 0);
    }

    #[test]
    fn test_word_characters() {
        let tokens = text::tokenize("GDPR_2018 compliant, since 2018! e-mail us: info@cfc.com");
        assert_eq!(
            tokens,
            vec![
                "gdpr_2018",
                "compliant",
                "since",
                "2018",
                "e",
                "mail",
                "us",
                "info",
                "cfc",
                "com"
            ]
        );
    }

    #[test]
    fn test_unicode_words() {
        let table = text::count_words("Café CAFÉ naïve Straße");
        assert_eq!(table.get("café"), 2);
        assert_eq!(table.get("naïve"), 1);
        assert_eq!(table.get("straße"), 1);
    }

    #[test]
    fn test_counts_sum_to_token_total() {
        let input = "The policy covers the data we hold. We hold the data securely.";
        let tokens = text::tokenize(input);
        let table = text::count_words(input);

        assert_eq!(table.total() as usize, tokens.len());
        for (word, count) in table.iter() {
            let literal = tokens.iter().filter(|t| t.as_str() == word).count();
            assert_eq!(count as usize, literal, "count for {:?}", word);
        }
        assert_eq!(table.get("the"), 3);
    }
}

mod tag_stripping_tests {
    use super::*;

    #[test]
    fn test_tags_become_spaces() {
        assert_eq!(
            text::strip_tags("<p>Privacy<br/>Policy</p>"),
            " Privacy Policy "
        );
    }

    #[test]
    fn test_attributes_are_removed_with_their_tag() {
        let stripped = text::strip_tags(r#"<a href="/legal/privacy" title="Read this">Policy</a>"#);
        assert_eq!(text::normalize_whitespace(&stripped), "Policy");
    }

    #[test]
    fn test_script_bodies_survive() {
        let stripped = text::strip_tags("<script>var trackingId = 42;</script><p>Hi</p>");
        assert_eq!(
            text::tokenize(&stripped),
            vec!["var", "trackingid", "42", "hi"]
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(text::normalize_whitespace("  a \n\n b\t c  "), "a b c");
        assert_eq!(text::normalize_whitespace(""), "");
    }
}
