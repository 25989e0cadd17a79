//! String and character generators.

use forge_core::{Case, CharClass, RandomStream, StringFlavor};

/// Upper bound (exclusive) of characters forged without a flavor.
pub const MAX_DEFAULT_CHAR: char = '\u{D000}';

/// Characters a flavor draws from, in the given case.
///
/// Case only affects flavors that contain letters.
pub fn flavor_class(flavor: StringFlavor, case: Case) -> CharClass {
    let letters = |lower: CharClass, upper: CharClass| match case {
        Case::Lower => lower,
        Case::Upper => upper,
        Case::Any => lower.union(&upper),
    };

    match flavor {
        StringFlavor::Ascii => CharClass::printable_ascii(),
        StringFlavor::AsciiExtended => CharClass::printable_extended_ascii(),
        StringFlavor::Alphabetical => letters(CharClass::lowercase(), CharClass::uppercase()),
        StringFlavor::AlphaNumerical => {
            letters(CharClass::lowercase(), CharClass::uppercase()).union(&CharClass::digit())
        }
        StringFlavor::Hexadecimal => {
            letters(CharClass::range('a', 'f'), CharClass::range('A', 'F'))
                .union(&CharClass::digit())
        }
        StringFlavor::Numerical => CharClass::digit(),
        StringFlavor::Whitespace => CharClass::whitespace(),
    }
}

/// Characters forged when no flavor is requested: printable, below `U+D000`.
pub fn default_char_class() -> CharClass {
    CharClass::printable()
}

/// Generate `size` characters drawn from `class`.
pub fn generate_from_class(stream: &mut RandomStream, class: &CharClass, size: usize) -> String {
    (0..size).filter_map(|_| class.pick(stream)).collect()
}

/// Generate a string of exactly `size` characters of the given flavor.
pub fn generate_string(
    stream: &mut RandomStream,
    flavor: StringFlavor,
    case: Case,
    size: usize,
) -> String {
    generate_from_class(stream, &flavor_class(flavor, case), size)
}

/// Flip the case of each letter with probability one half.
pub fn randomize_case(stream: &mut RandomStream, input: &str) -> String {
    input
        .chars()
        .flat_map(|c| {
            let upper = stream.bool(0.5);
            let mapped: Vec<char> = if upper {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            mapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_string_size_and_flavor() {
        let mut stream = RandomStream::new(42);

        let numerical = generate_string(&mut stream, StringFlavor::Numerical, Case::Any, 42);
        assert_eq!(numerical.len(), 42);
        assert!(numerical.chars().all(|c| c.is_ascii_digit()));

        let hex = generate_string(&mut stream, StringFlavor::Hexadecimal, Case::Lower, 64);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let upper = generate_string(&mut stream, StringFlavor::Alphabetical, Case::Upper, 64);
        assert!(upper.chars().all(|c| c.is_ascii_uppercase()));

        let spaces = generate_string(&mut stream, StringFlavor::Whitespace, Case::Any, 16);
        assert!(spaces.chars().all(char::is_whitespace));
    }

    #[test]
    fn test_alpha_numerical_any_case_mixes_cases() {
        let mut stream = RandomStream::new(42);
        let value = generate_string(&mut stream, StringFlavor::AlphaNumerical, Case::Any, 500);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(value.chars().any(|c| c.is_ascii_uppercase()));
        assert!(value.chars().any(|c| c.is_ascii_lowercase()));
        assert!(value.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_extended_ascii_stays_printable() {
        let mut stream = RandomStream::new(42);
        let value = generate_string(&mut stream, StringFlavor::AsciiExtended, Case::Any, 500);
        assert!(value.chars().all(|c| !c.is_control()));
        assert!(value.chars().all(|c| (c as u32) < 0xFF));
    }

    #[test]
    fn test_zero_size() {
        let mut stream = RandomStream::new(42);
        assert_eq!(generate_string(&mut stream, StringFlavor::Ascii, Case::Any, 0), "");
    }

    #[test]
    fn test_default_chars_skip_surrogates() {
        let class = default_char_class();
        assert!(!class.contains('\u{1F}'));
        assert!(class.contains(' '));
        assert!(!class.contains(MAX_DEFAULT_CHAR));
        assert!(!class.contains('\u{85}'));
        assert!(!class.contains('\u{2028}'));
        assert!(!class.contains('\u{2029}'));
        assert!(class.contains('\u{2027}'));
        assert!(class.contains('\u{202A}'));
    }

    #[test]
    fn test_randomize_case_keeps_letters() {
        let mut stream = RandomStream::new(42);
        let value = randomize_case(&mut stream, "hello world 42");
        assert_eq!(value.to_lowercase(), "hello world 42");
    }
}
