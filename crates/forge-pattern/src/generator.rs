//! String generation from a compiled pattern.

use crate::ast::{Node, Pattern};
use forge_core::RandomStream;

/// Width of the repetition count window used for unbounded quantifiers.
///
/// `*`, `+` and `{n,}` repeat their node `n + k` times with `k` drawn in
/// `[0, UNBOUNDED_REPETITION_SPAN)`.
pub const UNBOUNDED_REPETITION_SPAN: u32 = 32;

/// Generate a string matched in full by `pattern`.
///
/// Every choice (class member, alternation branch, repetition count) is a
/// draw from `stream`, so the output is determined by the stream state.
pub fn generate(pattern: &Pattern, stream: &mut RandomStream) -> String {
    let mut out = String::with_capacity(pattern.root().min_len());
    generate_node(pattern.root(), stream, &mut out);
    out
}

fn generate_node(node: &Node, stream: &mut RandomStream, out: &mut String) {
    match node {
        Node::Literal(c) => out.push(*c),

        Node::Class(class) => {
            if let Some(c) = class.pick(stream) {
                out.push(c);
            }
        }

        Node::Concat(nodes) => {
            for node in nodes {
                generate_node(node, stream, out);
            }
        }

        Node::Alternation(branches) => {
            if !branches.is_empty() {
                let branch = stream.index(branches.len());
                generate_node(&branches[branch], stream, out);
            }
        }

        Node::Repeat { node, min, max } => {
            let min = i64::from(*min);
            let upper = match max {
                Some(max) => i64::from(*max) + 1,
                None => min + i64::from(UNBOUNDED_REPETITION_SPAN),
            };
            let count = stream.range_i64(min, upper);
            for _ in 0..count {
                generate_node(node, stream, out);
            }
        }
    }
}

impl Pattern {
    /// Generate a string matched in full by this pattern.
    pub fn generate(&self, stream: &mut RandomStream) -> String {
        generate(self, stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::compile;

    #[test]
    fn test_literal_pattern_is_fixed() {
        let pattern = compile("hello").unwrap();
        let mut stream = RandomStream::new(1);
        assert_eq!(pattern.generate(&mut stream), "hello");
    }

    #[test]
    fn test_exact_repetition_length() {
        let pattern = compile(r"\d{8}").unwrap();
        let mut stream = RandomStream::new(2);
        for _ in 0..100 {
            let value = pattern.generate(&mut stream);
            assert_eq!(value.len(), 8);
            assert!(value.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_unbounded_repetition_window() {
        let pattern = compile("a{3,}").unwrap();
        let mut stream = RandomStream::new(3);
        let mut longest = 0;
        for _ in 0..500 {
            let len = pattern.generate(&mut stream).len();
            assert!((3..3 + UNBOUNDED_REPETITION_SPAN as usize).contains(&len));
            longest = longest.max(len);
        }
        assert!(longest > 3);
    }

    #[test]
    fn test_alternation_reaches_every_branch() {
        let pattern = compile("red|green|blue").unwrap();
        let mut stream = RandomStream::new(4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pattern.generate(&mut stream));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = compile("").unwrap();
        let mut stream = RandomStream::new(5);
        assert_eq!(pattern.generate(&mut stream), "");
    }

    #[test]
    fn test_same_stream_same_output() {
        let pattern = compile("[a-z]+@[a-z]+\\.(com|org)").unwrap();
        let mut a = RandomStream::new(6);
        let mut b = RandomStream::new(6);
        for _ in 0..20 {
            assert_eq!(pattern.generate(&mut a), pattern.generate(&mut b));
        }
    }
}
