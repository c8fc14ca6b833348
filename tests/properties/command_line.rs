//! Properties of command-line parsing from config.

use proptest::prelude::*;

use sitemode::CommandLine;

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/=-]{1,12}").unwrap()
}

proptest! {
    /// PROPERTY: parsing never panics, whatever the input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = CommandLine::parse(&s);
    }

    /// PROPERTY: a whitespace-joined argv parses back to the same argv.
    #[test]
    fn property_parse_splits_joined_words(
        words in proptest::collection::vec(word(), 1..6),
        sep in "[ \t]{1,3}",
    ) {
        let line = words.join(sep.as_str());
        let parsed = CommandLine::parse(&line).unwrap();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed.argv(), expected);
    }

    /// PROPERTY: blank input is always rejected.
    #[test]
    fn property_blank_is_rejected(s in "[ \t\n]{0,16}") {
        prop_assert!(CommandLine::parse(&s).is_err());
    }
}
