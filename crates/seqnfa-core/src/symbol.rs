// Alphabet symbols shared by patterns, automata and sequence stores.

use std::fmt;

/// A single symbol of a sequence or a pattern.
///
/// The alphabet is open: characters, integers and whole words may be mixed
/// freely in one sequence. Two values are reserved:
///
/// - [`Symbol::Wildcard`] only appears in patterns and matches any one
///   input symbol except the terminator.
/// - [`Symbol::End`] is the default terminator sentinel appended by a
///   sequence store to mark that an extension is a complete stored entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// A single character.
    Char(char),
    /// An integer atom.
    Int(i64),
    /// An opaque multi-character token (e.g. a whole word of a sentence).
    Word(String),
    /// Matches any one symbol.
    Wildcard,
    /// Sequence terminator sentinel.
    End,
}

impl Symbol {
    /// Build a symbol from a string atom: one character becomes
    /// [`Symbol::Char`], anything longer becomes [`Symbol::Word`].
    pub fn from_atom(atom: &str) -> Self {
        let mut chars = atom.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Symbol::Char(ch),
            _ => Symbol::Word(atom.to_string()),
        }
    }

    /// Build a symbol from a string atom, coercing all-digit strings
    /// (`"42"`) to [`Symbol::Int`].
    pub fn from_atom_coerced(atom: &str) -> Self {
        match parse_digits(atom) {
            Some(n) => Symbol::Int(n),
            None => Self::from_atom(atom),
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Symbol::Wildcard)
    }

    /// Whether a transition labelled `self` may consume `input`.
    ///
    /// Exact equality always matches. The wildcard matches every input
    /// except `terminator`.
    #[inline]
    pub fn accepts(&self, input: &Symbol, terminator: &Symbol) -> bool {
        self == input || (self.is_wildcard() && input != terminator)
    }
}

/// Parse a non-empty run of ASCII digits. Signs, spaces and other
/// characters are rejected, so `"-1"` stays a string atom.
pub fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(ch) => write!(f, "{ch}"),
            Symbol::Int(n) => write!(f, "{n}"),
            Symbol::Word(w) => f.write_str(w),
            Symbol::Wildcard => f.write_str("."),
            Symbol::End => f.write_str("$"),
        }
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol::Char(ch)
    }
}

impl From<i64> for Symbol {
    fn from(n: i64) -> Self {
        Symbol::Int(n)
    }
}

impl From<&str> for Symbol {
    fn from(atom: &str) -> Self {
        Symbol::from_atom(atom)
    }
}

/// Render a sequence of symbols for display.
///
/// Character-only sequences are joined without separators (`why`); any
/// sequence containing integers or words is comma-joined (`1,2,3`,
/// `hi,world`). A trailing terminator is rendered with the same rule.
pub fn render_sequence(seq: &[Symbol]) -> String {
    let char_like = seq
        .iter()
        .all(|s| matches!(s, Symbol::Char(_) | Symbol::Wildcard | Symbol::End));
    let sep = if char_like { "" } else { "," };
    seq.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
