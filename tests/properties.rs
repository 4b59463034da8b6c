//! Property tests for the code lookups.

use heatpump_codes::codes::{Category, CodeEntry, normalize};
use heatpump_codes::{classify_category, classify_severity, lookup_description};
use proptest::prelude::*;

/// Codes with a recognized prefix, in either case, that may or may not be in a table.
fn arb_prefixed_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[SFPIAsfpia]\\.[0-9]{1,4}").unwrap()
}

/// Strings that do not start with a recognized prefix.
fn arb_unprefixed() -> impl Strategy<Value = String> {
    prop::string::string_regex("[BCDEGHJKLMNOQRTUVWXYZ0-9_-][A-Z0-9.]{0,6}").unwrap()
}

fn arb_padding() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,3}").unwrap()
}

fn arb_known_code() -> impl Strategy<Value = &'static str> {
    let codes = CodeEntry::all().map(|e| e.code).collect::<Vec<_>>();
    prop::sample::select(codes)
}

proptest! {
    #[test]
    fn lookups_ignore_case_and_padding(
        code in arb_prefixed_code(),
        before in arb_padding(),
        after in arb_padding(),
    ) {
        let messy = format!("{before}{}{after}", code.to_lowercase());
        let clean = code.to_uppercase();
        prop_assert_eq!(lookup_description(&messy), lookup_description(&clean));
        prop_assert_eq!(classify_category(&messy), classify_category(&clean));
        prop_assert_eq!(classify_severity(&messy), classify_severity(&clean));
    }

    #[test]
    fn lookups_are_repeatable(code in any::<String>()) {
        prop_assert_eq!(lookup_description(&code), lookup_description(&code));
        prop_assert_eq!(classify_category(&code), classify_category(&code));
        prop_assert_eq!(classify_severity(&code), classify_severity(&code));
    }

    #[test]
    fn unrecognized_prefixes_pass_through(code in arb_unprefixed()) {
        prop_assert_eq!(lookup_description(&code), normalize(&code));
        prop_assert_eq!(classify_category(&code), "unknown");
        prop_assert_eq!(classify_severity(&code), "unknown");
    }

    #[test]
    fn recognized_prefixes_always_describe(code in arb_prefixed_code()) {
        let category = Category::of(&code).unwrap();
        let normalized = normalize(&code);
        let description = lookup_description(&code);
        match category.table().get(&normalized) {
            Some(known) => prop_assert_eq!(description, known),
            None => prop_assert_eq!(
                description,
                format!("{normalized}{}", category.unknown_suffix())
            ),
        }
        prop_assert_ne!(classify_severity(&code), "unknown");
    }

    #[test]
    fn known_codes_never_fall_back(code in arb_known_code()) {
        let description = lookup_description(code);
        prop_assert!(!description.contains("Unbekannter"));
        prop_assert!(!description.starts_with(code));
    }
}
