//! Syntax tree of a compiled pattern.

use forge_core::CharClass;

/// Node of a compiled pattern.
///
/// Anchors (`^`, `$`) are validated by the compiler and leave no node behind:
/// generated strings are always matched in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single fixed character
    Literal(char),

    /// One character drawn from a set
    Class(CharClass),

    /// Children generated one after the other
    Concat(Vec<Node>),

    /// One branch, chosen uniformly
    Alternation(Vec<Node>),

    /// The inner node repeated between `min` and `max` times
    Repeat {
        node: Box<Node>,
        min: u32,
        /// `None` for unbounded repetitions (`*`, `+`, `{n,}`)
        max: Option<u32>,
    },
}

impl Node {
    /// Shortest number of characters this node can generate.
    pub fn min_len(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Class(_) => 1,
            Self::Concat(nodes) => nodes.iter().map(Node::min_len).sum(),
            Self::Alternation(branches) => {
                branches.iter().map(Node::min_len).min().unwrap_or(0)
            }
            Self::Repeat { node, min, .. } => node.min_len() * (*min as usize),
        }
    }
}

/// A compiled pattern: the source text and its syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    root: Node,
}

impl Pattern {
    pub(crate) fn new(source: impl Into<String>, root: Node) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }

    /// The pattern text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root of the syntax tree.
    pub fn root(&self) -> &Node {
        &self.root
    }
}
