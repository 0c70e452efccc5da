// Pattern tokenizer: splits text or atom-list patterns into tokens.
//
// Bracketed groups (`[...]` classes and `{n,m}` repetitions) are always a
// single token; the tokenizer never splits inside brackets.

use std::fmt;

use seqnfa_core::symbol::parse_digits;
use seqnfa_core::{Input, Item, Symbol};

use crate::{MAX_REPEAT, NfaError};

/// A pattern token, before or after postfix normalization.
///
/// `Open`/`Close` only exist before normalization; `Concat` only exists
/// after [`insert_concatenation`](crate::postfix::insert_concatenation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal atom or the wildcard.
    Operand(Symbol),
    /// `|`
    Alternate,
    /// Explicit concatenation marker (never written by users).
    Concat,
    /// `?`
    Optional,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `[abc]`: exactly one of the listed symbols.
    Class(Vec<Symbol>),
    /// `{n,m}`: between `min` and `max` repetitions of one literal symbol.
    Repeat { min: usize, max: usize },
}

impl Token {
    /// Binding strength of an operator token, low to high.
    /// Operands, classes and parentheses have none.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Alternate => Some(0),
            Token::Concat => Some(1),
            Token::Optional | Token::Star | Token::Plus | Token::Repeat { .. } => Some(2),
            _ => None,
        }
    }

    /// Whether this token denotes a value that can stand on its own
    /// (a literal, the wildcard, or a character class).
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Operand(_) | Token::Class(_))
    }

    /// Whether this token is a postfix quantifier (`?`, `*`, `+`).
    pub fn is_quantifier(&self) -> bool {
        matches!(self, Token::Optional | Token::Star | Token::Plus)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(sym) => write!(f, "{sym}"),
            Token::Alternate => f.write_str("|"),
            Token::Concat => f.write_str("#"),
            Token::Optional => f.write_str("?"),
            Token::Star => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Class(members) => {
                f.write_str("[")?;
                for (i, m) in members.iter().enumerate() {
                    if i > 0 && !matches!(m, Symbol::Char(_)) {
                        f.write_str(",")?;
                    }
                    write!(f, "{m}")?;
                }
                f.write_str("]")
            }
            Token::Repeat { min, max } => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Split a pattern into tokens.
///
/// The comma-joined shorthand (`["1,|,3"]`) is expanded first.
pub fn tokenize(pattern: &Input) -> Result<Vec<Token>, NfaError> {
    match pattern.clone().normalized() {
        Input::Text(text) => tokenize_text(&text),
        Input::Items(items) => tokenize_items(&items),
    }
}

/// Tokenize a text pattern, one character per atom.
pub fn tokenize_text(text: &str) -> Result<Vec<Token>, NfaError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        let token = match ch {
            '\\' => Token::Operand(Symbol::Char(chars.next().ok_or(NfaError::DanglingEscape)?)),
            '|' => Token::Alternate,
            '?' => Token::Optional,
            '*' => Token::Star,
            '+' => Token::Plus,
            '(' => Token::Open,
            ')' => Token::Close,
            '.' => Token::Operand(Symbol::Wildcard),
            '[' => {
                let body = take_until(&mut chars, ']')
                    .ok_or_else(|| NfaError::InvalidClass(format!("unterminated `[` in {text:?}")))?;
                Token::Class(parse_class(&body, false)?)
            }
            '{' => {
                let body = take_until(&mut chars, '}')
                    .ok_or_else(|| NfaError::InvalidRepeat(format!("unterminated `{{` in {text:?}")))?;
                parse_repeat(&body)?
            }
            other => Token::Operand(Symbol::Char(other)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Tokenize a pre-split atom-list pattern.
///
/// Integers are operands. Strings spelling an operator are that operator,
/// `"."` is the wildcard, and bracketed strings are class or repetition
/// tokens. Any other string is a literal atom.
pub fn tokenize_items(items: &[Item]) -> Result<Vec<Token>, NfaError> {
    items
        .iter()
        .map(|item| match item {
            Item::Int(n) => Ok(Token::Operand(Symbol::Int(*n))),
            Item::Str(s) => tokenize_atom(s),
        })
        .collect()
}

fn tokenize_atom(atom: &str) -> Result<Token, NfaError> {
    let token = match atom {
        "|" => Token::Alternate,
        "?" => Token::Optional,
        "*" => Token::Star,
        "+" => Token::Plus,
        "(" => Token::Open,
        ")" => Token::Close,
        "." => Token::Operand(Symbol::Wildcard),
        _ if atom.len() >= 2 && atom.starts_with('[') && atom.ends_with(']') => {
            Token::Class(parse_class(&atom[1..atom.len() - 1], true)?)
        }
        _ if atom.len() >= 2 && atom.starts_with('{') && atom.ends_with('}') => {
            parse_repeat(&atom[1..atom.len() - 1])?
        }
        _ => Token::Operand(Symbol::from_atom(atom)),
    };
    Ok(token)
}

/// Consume characters up to (not including) `close`. Returns `None` if the
/// input ends first.
fn take_until(chars: &mut std::str::Chars<'_>, close: char) -> Option<String> {
    let mut body = String::new();
    for ch in chars.by_ref() {
        if ch == close {
            return Some(body);
        }
        body.push(ch);
    }
    None
}

/// Parse the inside of a `[...]` class.
///
/// Text classes list one character per member. Atom-list classes split on
/// `,` when a comma is present and coerce all-digit members to integers.
fn parse_class(body: &str, coerce: bool) -> Result<Vec<Symbol>, NfaError> {
    let raw: Vec<Symbol> = if coerce && body.contains(',') {
        body.split(',')
            .filter(|m| !m.is_empty())
            .map(Symbol::from_atom_coerced)
            .collect()
    } else if coerce {
        body.chars()
            .map(|ch| match ch.to_digit(10) {
                Some(d) => Symbol::Int(d as i64),
                None => Symbol::Char(ch),
            })
            .collect()
    } else {
        body.chars().map(Symbol::Char).collect()
    };

    let mut members: Vec<Symbol> = Vec::with_capacity(raw.len());
    for sym in raw {
        if !members.contains(&sym) {
            members.push(sym);
        }
    }
    if members.is_empty() {
        return Err(NfaError::InvalidClass("empty class".to_string()));
    }
    Ok(members)
}

/// Parse the inside of a `{n,m}` (or `{n}`) repetition. Bounds above
/// [`MAX_REPEAT`] are rejected.
fn parse_repeat(body: &str) -> Result<Token, NfaError> {
    let invalid = || NfaError::InvalidRepeat(format!("{{{body}}}"));
    let bound = |s: &str| -> Result<usize, NfaError> {
        parse_digits(s.trim())
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(invalid)
    };

    let (min, max) = match body.split_once(',') {
        Some((lo, hi)) => (bound(lo)?, bound(hi)?),
        None => {
            let n = bound(body)?;
            (n, n)
        }
    };
    if min > max || max > MAX_REPEAT {
        return Err(invalid());
    }
    Ok(Token::Repeat { min, max })
}
