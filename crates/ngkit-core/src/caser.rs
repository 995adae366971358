//! Selector name casing.
//!
//! User-facing selectors are written in dash-case (`"my-widget"`); the host
//! registry expects the camel-cased identifier form (`"myWidget"`).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A dash followed by a single ASCII letter of either case.
static DASH_LETTER_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([a-zA-Z])").unwrap());

/// Lower-cases the first character of `input` and leaves the rest untouched.
///
/// An empty input is returned unchanged.
pub fn first_letter_to_lower_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert dash-case to camelCase.
///
/// Every `-x` pair is replaced by the upper-cased letter. Dashes that are not
/// followed by a letter are kept.
pub fn dash_to_camel_case(input: &str) -> String {
    DASH_LETTER_REGEXP
        .replace_all(input, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// The selector conversion used by deferred view registration: lower-case
/// the first letter, then camel-case the dashes.
pub fn selector_to_directive_name(selector: &str) -> String {
    dash_to_camel_case(&first_letter_to_lower_case(selector))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Dash-case words with no two dashes in a row.
    const SINGLE_DASHED: &str = "[a-zA-Z0-9]{0,6}(-[a-zA-Z0-9]{1,6}){0,4}-?";

    proptest! {
        #[test]
        fn prop_dash_to_camel_case_idempotent(input in SINGLE_DASHED) {
            let once = dash_to_camel_case(&input);
            prop_assert_eq!(dash_to_camel_case(&once), once);
        }

        #[test]
        fn prop_dash_to_camel_case_leaves_no_dash_letter(input in SINGLE_DASHED) {
            let once = dash_to_camel_case(&input);
            prop_assert!(!DASH_LETTER_REGEXP.is_match(&once), "output: {}", once);
        }
    }

    #[test]
    fn test_dash_to_camel_case_double_dash_needs_two_passes() {
        let once = dash_to_camel_case("a--b");
        assert_eq!(once, "a-B");
        assert_eq!(dash_to_camel_case(&once), "aB");
    }

    #[test]
    fn test_dash_to_camel_case() {
        assert_eq!(dash_to_camel_case("my-widget"), "myWidget");
        assert_eq!(dash_to_camel_case("a-b-c"), "aBC");
        assert_eq!(dash_to_camel_case("x-Y"), "xY");
    }

    #[test]
    fn test_dash_to_camel_case_keeps_other_dashes() {
        assert_eq!(dash_to_camel_case("widget"), "widget");
        assert_eq!(dash_to_camel_case("a-1"), "a-1");
        assert_eq!(dash_to_camel_case("trailing-"), "trailing-");
        assert_eq!(dash_to_camel_case(""), "");
    }

    #[test]
    fn test_first_letter_to_lower_case() {
        assert_eq!(first_letter_to_lower_case("FooBar"), "fooBar");
        assert_eq!(first_letter_to_lower_case("fooBar"), "fooBar");
        assert_eq!(first_letter_to_lower_case("F"), "f");
        assert_eq!(first_letter_to_lower_case(""), "");
        assert_eq!(first_letter_to_lower_case("My-widget"), "my-widget");
    }

    #[test]
    fn test_selector_to_directive_name() {
        assert_eq!(selector_to_directive_name("My-thing"), "myThing");
        assert_eq!(selector_to_directive_name("my-thing"), "myThing");
        assert_eq!(selector_to_directive_name("TodoList"), "todoList");
    }
}
