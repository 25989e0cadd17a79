//! Compiler for the supported regular expression dialect.
//!
//! Grammar, from lowest to highest precedence:
//!
//! ```text
//! alternation := branch ('|' branch)*
//! branch      := '^'? (atom quantifier?)* '$'?
//! atom        := literal | '.' | class | escape | '(' ('?:')? alternation ')'
//! quantifier  := ('*' | '+' | '?' | '{n}' | '{n,}' | '{n,m}') '?'?
//! ```
//!
//! Anchors are only accepted at the edges of a top-level branch, where they
//! cannot change what a generated string has to look like.

use crate::ast::{Node, Pattern};
use crate::error::{PatternError, PatternErrorKind};
use forge_core::CharClass;

/// Largest repetition bound accepted in `{n,m}`.
pub const MAX_REPETITION: u32 = 1000;

type Result<T> = std::result::Result<T, PatternError>;

/// Compile a pattern into its syntax tree.
pub fn compile(source: &str) -> Result<Pattern> {
    let mut parser = Parser {
        source,
        chars: source.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let root = parser.parse_alternation()?;
    if parser.pos < parser.chars.len() {
        return Err(parser.error(PatternErrorKind::UnbalancedParenthesis));
    }
    tracing::trace!(pattern = source, "Compiled pattern");
    Ok(Pattern::new(source, root))
}

enum Escaped {
    Char(char),
    Class(CharClass),
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn error_at(&self, position: usize, kind: PatternErrorKind) -> PatternError {
        PatternError {
            pattern: self.source.to_string(),
            position,
            kind,
        }
    }

    fn error(&self, kind: PatternErrorKind) -> PatternError {
        self.error_at(self.pos, kind)
    }

    fn parse_alternation(&mut self) -> Result<Node> {
        let mut branches = vec![self.parse_branch()?];
        while self.peek() == Some('|') {
            self.pos += 1;
            branches.push(self.parse_branch()?);
        }
        if branches.len() == 1 {
            Ok(branches.remove(0))
        } else {
            Ok(Node::Alternation(branches))
        }
    }

    fn parse_branch(&mut self) -> Result<Node> {
        let mut items = Vec::new();
        while let Some(c) = self.peek() {
            match c {
                '|' => break,
                ')' if self.depth > 0 => break,
                ')' => return Err(self.error(PatternErrorKind::UnbalancedParenthesis)),
                '^' => {
                    if self.depth > 0 || !items.is_empty() {
                        return Err(self.error(PatternErrorKind::MisplacedAnchor));
                    }
                    self.pos += 1;
                }
                '$' => {
                    if self.depth > 0 || !matches!(self.peek_at(1), None | Some('|')) {
                        return Err(self.error(PatternErrorKind::MisplacedAnchor));
                    }
                    self.pos += 1;
                }
                '*' | '+' | '?' | '{' => {
                    return Err(self.error(PatternErrorKind::NothingToRepeat));
                }
                _ => {
                    let atom = self.parse_atom()?;
                    items.push(self.parse_quantifier(atom)?);
                }
            }
        }
        if items.len() == 1 {
            Ok(items.remove(0))
        } else {
            Ok(Node::Concat(items))
        }
    }

    fn parse_atom(&mut self) -> Result<Node> {
        let start = self.pos;
        let Some(c) = self.bump() else {
            return Err(self.error(PatternErrorKind::UnexpectedEnd));
        };
        match c {
            '(' => self.parse_group(start),
            '[' => self.parse_class(start).map(Node::Class),
            '.' => Ok(Node::Class(CharClass::printable_ascii())),
            '\\' => match self.parse_escape(start)? {
                Escaped::Char(c) => Ok(Node::Literal(c)),
                Escaped::Class(class) => Ok(Node::Class(class)),
            },
            other => Ok(Node::Literal(other)),
        }
    }

    fn parse_group(&mut self, open: usize) -> Result<Node> {
        if self.peek() == Some('?') {
            match (self.peek_at(1), self.peek_at(2)) {
                (Some(':'), _) => self.pos += 2,
                (Some('=' | '!'), _) | (Some('<'), Some('=' | '!')) => {
                    return Err(self.error_at(open, PatternErrorKind::LookAround));
                }
                (None, _) => {
                    return Err(self.error_at(self.chars.len(), PatternErrorKind::UnexpectedEnd));
                }
                _ => return Err(self.error_at(open, PatternErrorKind::UnsupportedConstruct)),
            }
        }

        self.depth += 1;
        let inner = self.parse_alternation()?;
        self.depth -= 1;

        if self.bump() != Some(')') {
            return Err(self.error_at(open, PatternErrorKind::UnbalancedParenthesis));
        }
        Ok(inner)
    }

    fn parse_quantifier(&mut self, atom: Node) -> Result<Node> {
        let start = self.pos;
        let (min, max) = match self.peek() {
            Some('*') => {
                self.pos += 1;
                (0, None)
            }
            Some('+') => {
                self.pos += 1;
                (1, None)
            }
            Some('?') => {
                self.pos += 1;
                (0, Some(1))
            }
            Some('{') => {
                self.pos += 1;
                self.parse_counted(start)?
            }
            _ => return Ok(atom),
        };

        // lazy modifier, irrelevant for generation
        if self.peek() == Some('?') {
            self.pos += 1;
        }
        if matches!(self.peek(), Some('*' | '+' | '?' | '{')) {
            return Err(self.error(PatternErrorKind::NothingToRepeat));
        }

        Ok(Node::Repeat {
            node: Box::new(atom),
            min,
            max,
        })
    }

    fn parse_counted(&mut self, start: usize) -> Result<(u32, Option<u32>)> {
        let Some(min) = self.parse_number() else {
            return Err(self.bound_error(start));
        };
        let max = match self.bump() {
            Some('}') => return Ok((min, Some(min))),
            Some(',') if self.peek() == Some('}') => {
                self.pos += 1;
                return Ok((min, None));
            }
            Some(',') => {
                let Some(max) = self.parse_number() else {
                    return Err(self.bound_error(start));
                };
                if self.bump() != Some('}') {
                    return Err(self.bound_error(start));
                }
                max
            }
            _ => return Err(self.bound_error(start)),
        };
        if min > max {
            return Err(self.error_at(start, PatternErrorKind::InvalidRepetition));
        }
        Ok((min, Some(max)))
    }

    fn bound_error(&self, start: usize) -> PatternError {
        if self.pos >= self.chars.len() {
            self.error_at(self.chars.len(), PatternErrorKind::UnexpectedEnd)
        } else {
            self.error_at(start, PatternErrorKind::InvalidRepetition)
        }
    }

    fn parse_number(&mut self) -> Option<u32> {
        let begin = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if begin == self.pos {
            return None;
        }
        let digits: String = self.chars[begin..self.pos].iter().collect();
        digits.parse().ok().filter(|n| *n <= MAX_REPETITION)
    }

    /// Parse what follows a backslash. `start` is the offset of the backslash.
    fn parse_escape(&mut self, start: usize) -> Result<Escaped> {
        let Some(c) = self.bump() else {
            return Err(self.error_at(start, PatternErrorKind::UnexpectedEnd));
        };
        let class = match c {
            'd' => CharClass::digit(),
            'D' => CharClass::digit().negate(),
            'w' => CharClass::word(),
            'W' => CharClass::word().negate(),
            's' => CharClass::whitespace(),
            'S' => CharClass::whitespace().negate(),
            'n' => return Ok(Escaped::Char('\n')),
            't' => return Ok(Escaped::Char('\t')),
            'r' => return Ok(Escaped::Char('\r')),
            'f' => return Ok(Escaped::Char('\u{0C}')),
            'v' => return Ok(Escaped::Char('\u{0B}')),
            'a' => return Ok(Escaped::Char('\u{07}')),
            'e' => return Ok(Escaped::Char('\u{1B}')),
            '0' => return Ok(Escaped::Char('\0')),
            'x' => return self.parse_hex(start).map(Escaped::Char),
            '1'..='9' => return Err(self.error_at(start, PatternErrorKind::BackReference)),
            c if c.is_ascii_alphanumeric() => {
                return Err(self.error_at(start, PatternErrorKind::UnsupportedEscape));
            }
            c => return Ok(Escaped::Char(c)),
        };
        Ok(Escaped::Class(class))
    }

    fn parse_hex(&mut self, start: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..2 {
            let digit = match self.bump() {
                Some(c) => match c.to_digit(16) {
                    Some(digit) => digit,
                    None => return Err(self.error_at(start, PatternErrorKind::UnsupportedEscape)),
                },
                None => return Err(self.error_at(start, PatternErrorKind::UnexpectedEnd)),
            };
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error_at(start, PatternErrorKind::UnsupportedEscape))
    }

    /// Parse a bracketed class. `open` is the offset of the `[`.
    fn parse_class(&mut self, open: usize) -> Result<CharClass> {
        let negated = self.peek() == Some('^');
        if negated {
            self.pos += 1;
        }

        let mut class = CharClass::empty();
        let mut first = true;
        loop {
            let item_start = self.pos;
            let Some(c) = self.bump() else {
                return Err(self.error_at(open, PatternErrorKind::UnterminatedClass));
            };
            let item = match c {
                // a leading ']' is a literal
                ']' if !first => break,
                '[' => return Err(self.error_at(item_start, PatternErrorKind::UnsupportedConstruct)),
                '\\' => self.parse_escape(item_start)?,
                other => Escaped::Char(other),
            };
            first = false;

            let low = match item {
                Escaped::Class(set) => {
                    class = class.union(&set);
                    continue;
                }
                Escaped::Char(low) => low,
            };

            let is_range = self.peek() == Some('-') && self.peek_at(1).is_some_and(|c| c != ']');
            if !is_range {
                class = class.union(&CharClass::single(low));
                continue;
            }

            self.pos += 1;
            let high_start = self.pos;
            let high = match self.bump() {
                Some('\\') => match self.parse_escape(high_start)? {
                    Escaped::Char(high) => high,
                    Escaped::Class(_) => {
                        return Err(self.error_at(item_start, PatternErrorKind::InvalidRange));
                    }
                },
                Some('[') => {
                    return Err(self.error_at(high_start, PatternErrorKind::UnsupportedConstruct));
                }
                Some(high) => high,
                None => return Err(self.error_at(open, PatternErrorKind::UnterminatedClass)),
            };
            if low > high {
                return Err(self.error_at(item_start, PatternErrorKind::InvalidRange));
            }
            class = class.union(&CharClass::range(low, high));
        }

        let class = if negated { class.negate() } else { class };
        if class.is_empty() {
            return Err(self.error_at(open, PatternErrorKind::EmptyClass));
        }
        Ok(class)
    }
}
