//! Character classes used by string flavors and compiled patterns.
//!
//! A `CharClass` is a normalized list of inclusive code point ranges: sorted,
//! non-overlapping, non-adjacent, and never spanning the surrogate block, so
//! every code point it counts is a valid `char`.

use crate::random::RandomStream;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// First printable ASCII character (space).
pub const MIN_PRINTABLE: char = '\u{20}';
/// Last printable ASCII character (tilde).
pub const MAX_PRINTABLE_ASCII: char = '\u{7E}';
/// Last character of the printable universe.
pub const MAX_PRINTABLE: char = '\u{CFFF}';

/// A set of characters stored as inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharClass {
    ranges: Vec<(u32, u32)>,
}

impl CharClass {
    /// An empty class.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A class holding a single character.
    pub fn single(c: char) -> Self {
        Self::range(c, c)
    }

    /// A class holding every character in `start..=end`.
    pub fn range(start: char, end: char) -> Self {
        Self::from_ranges([(start, end)])
    }

    /// Build a class from arbitrary, possibly overlapping, ranges.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut raw: Vec<(u32, u32)> = Vec::new();
        for (start, end) in ranges {
            let (start, end) = (start as u32, end as u32);
            if start > end {
                continue;
            }
            // chars cannot be surrogates, but a range can straddle the block
            if start < SURROGATE_START && end > SURROGATE_END {
                raw.push((start, SURROGATE_START - 1));
                raw.push((SURROGATE_END + 1, end));
            } else {
                raw.push((start, end));
            }
        }
        Self::normalize(raw)
    }

    fn normalize(mut raw: Vec<(u32, u32)>) -> Self {
        raw.sort_unstable();
        let mut ranges: Vec<(u32, u32)> = Vec::with_capacity(raw.len());
        for (start, end) in raw {
            match ranges.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(end);
                }
                _ => ranges.push((start, end)),
            }
        }
        Self { ranges }
    }

    /// Characters present in either class.
    pub fn union(&self, other: &CharClass) -> Self {
        let mut raw = self.ranges.clone();
        raw.extend_from_slice(&other.ranges);
        Self::normalize(raw)
    }

    /// Characters of `self` that are not in `other`.
    pub fn difference(&self, other: &CharClass) -> Self {
        let mut result = Vec::new();
        for &(start, end) in &self.ranges {
            let mut cursor = start;
            for &(cut_start, cut_end) in &other.ranges {
                if cut_end < cursor || cut_start > end {
                    continue;
                }
                if cut_start > cursor {
                    result.push((cursor, cut_start - 1));
                }
                cursor = cut_end.saturating_add(1);
                if cursor > end {
                    break;
                }
            }
            if cursor <= end {
                result.push((cursor, end));
            }
        }
        Self { ranges: result }
    }

    /// Printable characters (see [`CharClass::printable`]) that are not in this class.
    pub fn negate(&self) -> Self {
        Self::printable().difference(self)
    }

    /// Number of characters in the class.
    pub fn len(&self) -> u32 {
        self.ranges.iter().map(|(start, end)| end - start + 1).sum()
    }

    /// Whether the class holds no character at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `c` belongs to the class.
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        self.ranges
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
    }

    /// Draw one character uniformly from the class.
    ///
    /// Returns `None` for an empty class. Consumes exactly one draw otherwise.
    pub fn pick(&self, stream: &mut RandomStream) -> Option<char> {
        let total = self.len();
        if total == 0 {
            return None;
        }
        let mut offset = stream.range_i64(0, i64::from(total)) as u32;
        for &(start, end) in &self.ranges {
            let width = end - start + 1;
            if offset < width {
                return char::from_u32(start + offset);
            }
            offset -= width;
        }
        None
    }

    /// Printable characters up to `U+CFFF`.
    ///
    /// C1 controls and the line and paragraph separators are left out.
    pub fn printable() -> Self {
        Self::range(MIN_PRINTABLE, MAX_PRINTABLE)
            .difference(&Self::from_ranges([('\u{7F}', '\u{9F}'), ('\u{2028}', '\u{2029}')]))
    }

    /// `[ -~]`
    pub fn printable_ascii() -> Self {
        Self::range(MIN_PRINTABLE, MAX_PRINTABLE_ASCII)
    }

    /// Printable ASCII plus printable Latin-1 (`\u{A0}..=\u{FE}`).
    pub fn printable_extended_ascii() -> Self {
        Self::from_ranges([
            (MIN_PRINTABLE, MAX_PRINTABLE_ASCII),
            ('\u{A0}', '\u{FE}'),
        ])
    }

    /// `[0-9]`
    pub fn digit() -> Self {
        Self::range('0', '9')
    }

    /// `[a-z]`
    pub fn lowercase() -> Self {
        Self::range('a', 'z')
    }

    /// `[A-Z]`
    pub fn uppercase() -> Self {
        Self::range('A', 'Z')
    }

    /// `[A-Za-z0-9_]`
    pub fn word() -> Self {
        Self::from_ranges([('a', 'z'), ('A', 'Z'), ('0', '9'), ('_', '_')])
    }

    /// Tab, line feed, vertical tab, form feed, carriage return and space.
    pub fn whitespace() -> Self {
        Self::from_ranges([('\t', '\r'), (' ', ' ')])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_merges_overlaps_and_neighbours() {
        let class = CharClass::from_ranges([('d', 'f'), ('a', 'c'), ('e', 'k'), ('x', 'x')]);
        assert_eq!(class.len(), 12);
        assert!(class.contains('a'));
        assert!(class.contains('k'));
        assert!(!class.contains('l'));
        assert!(class.contains('x'));
    }

    #[test]
    fn test_reversed_range_is_dropped() {
        assert!(CharClass::from_ranges([('z', 'a')]).is_empty());
    }

    #[test]
    fn test_difference() {
        let class = CharClass::lowercase().difference(&CharClass::range('c', 'x'));
        assert_eq!(class.len(), 4);
        for c in ['a', 'b', 'y', 'z'] {
            assert!(class.contains(c));
        }
        assert!(!class.contains('m'));
    }

    #[test]
    fn test_negate_excludes_members() {
        let not_word = CharClass::word().negate();
        assert!(!not_word.contains('a'));
        assert!(!not_word.contains('_'));
        assert!(not_word.contains('-'));
        assert!(not_word.contains(' '));
        assert!(not_word.contains('é'));
        assert!(not_word.contains('\u{CFFF}'));
        assert!(!not_word.contains('\n'));
        assert!(!not_word.contains('\u{85}'));
        assert!(!not_word.contains('\u{D000}'));
    }

    #[test]
    fn test_negated_ascii_is_not_empty() {
        let not_ascii = CharClass::range('\0', '\u{7F}').negate();
        assert!(!not_ascii.is_empty());
        assert!(!not_ascii.contains('~'));
        assert!(not_ascii.contains('\u{A0}'));
        assert!(CharClass::printable().negate().is_empty());
    }

    #[test]
    fn test_range_across_surrogates_is_split() {
        let class = CharClass::range('\u{D7FF}', '\u{E000}');
        assert_eq!(class.len(), 2);
    }

    #[test]
    fn test_pick_stays_in_class() {
        let class = CharClass::from_ranges([('a', 'c'), ('0', '1')]);
        let mut stream = RandomStream::new(42);
        for _ in 0..500 {
            let c = class.pick(&mut stream).expect("class is not empty");
            assert!(class.contains(c), "{c:?} not in class");
        }
        assert_eq!(CharClass::empty().pick(&mut stream), None);
    }
}
