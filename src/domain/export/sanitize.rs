//! Text sanitizer for values sent to the template service.
//!
//! The template format treats `#`, braces, angle brackets and quotes as
//! syntax, so they are stripped from every free-text value before export.

/// Characters removed outright.
pub const STRIPPED_CHARS: [char; 10] = ['#', '{', '}', '<', '>', '&', '*', '"', '\'', '\r'];

/// Removes template-unsafe characters and flattens newlines to spaces.
///
/// Total and idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some(' '),
            c if STRIPPED_CHARS.contains(&c) => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_markup_characters() {
        assert_eq!(sanitize(r#"<b>"Day" #1 & {fun}*</b>"#), "bDay 1  fun/b");
    }

    #[test]
    fn strips_single_quotes() {
        assert_eq!(sanitize("Let's go"), "Lets go");
    }

    #[test]
    fn newline_becomes_single_space() {
        assert_eq!(sanitize("line one\nline two"), "line one line two");
    }

    #[test]
    fn carriage_return_is_removed() {
        assert_eq!(sanitize("a\r\nb"), "a b");
    }

    #[test]
    fn leaves_non_ascii_text_alone() {
        assert_eq!(sanitize("เช็คอิน ที่พัก"), "เช็คอิน ที่พัก");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
    }

    proptest! {
        #[test]
        fn output_never_contains_stripped_characters(input in any::<String>()) {
            let output = sanitize(&input);
            for c in STRIPPED_CHARS {
                prop_assert!(!output.contains(c));
            }
            prop_assert!(!output.contains('\n'));
        }

        #[test]
        fn every_newline_becomes_one_space(input in "[a-z\n]{0,64}") {
            let output = sanitize(&input);
            prop_assert_eq!(output.chars().count(), input.chars().count());
            prop_assert_eq!(output, input.replace('\n', " "));
        }

        #[test]
        fn sanitize_is_idempotent(input in any::<String>()) {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once.clone());
        }
    }
}
