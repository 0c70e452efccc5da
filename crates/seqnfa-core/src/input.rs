// Pattern and sequence argument forms.

use crate::symbol::{Symbol, parse_digits};

/// One element of a pre-tokenized atom list.
///
/// Patterns and sequences may be given as a list of atoms instead of a
/// string; this is how integer alphabets and multi-character tokens are
/// expressed (`[1, "|", 3]`, `["hi", "world"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Item {
    Int(i64),
    Str(String),
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Int(n)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Str(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Str(s)
    }
}

/// The atom spelling of a symbol: integers stay integers, everything else
/// becomes its display string (`"w"`, `"hello"`, `"."`, `"$"`).
impl From<&Symbol> for Item {
    fn from(sym: &Symbol) -> Self {
        match sym {
            Symbol::Int(n) => Item::Int(*n),
            other => Item::Str(other.to_string()),
        }
    }
}

/// A pattern or sequence argument: either plain text or an atom list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Input {
    Text(String),
    Items(Vec<Item>),
}

impl Input {
    /// Apply the comma-joined shorthand.
    ///
    /// An atom list holding exactly one string (`["1,|,3"]`) is split on
    /// `,` into its atoms; all-digit parts become integers. Every other
    /// input is returned unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Input::Items(items) => match items.as_slice() {
                [Item::Str(joined)] => Input::Items(split_shorthand(joined)),
                _ => Input::Items(items),
            },
            text => text,
        }
    }

    /// Convert a sequence argument to symbols.
    ///
    /// Text yields one [`Symbol::Char`] per character. Atom lists keep
    /// integers as integers, single-character strings as characters and
    /// longer strings as words. Sequences never contain the wildcard, so
    /// `"."` here is the literal character.
    pub fn to_symbols(&self) -> Vec<Symbol> {
        match self.clone().normalized() {
            Input::Text(text) => text.chars().map(Symbol::Char).collect(),
            Input::Items(items) => items
                .iter()
                .map(|item| match item {
                    Item::Int(n) => Symbol::Int(*n),
                    Item::Str(s) => Symbol::from_atom(s),
                })
                .collect(),
        }
    }
}

/// Split a comma-joined shorthand string into atoms.
pub fn split_shorthand(joined: &str) -> Vec<Item> {
    joined
        .split(',')
        .map(|part| match parse_digits(part) {
            Some(n) => Item::Int(n),
            None => Item::Str(part.to_string()),
        })
        .collect()
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Text(s.clone())
    }
}

impl From<Vec<Item>> for Input {
    fn from(items: Vec<Item>) -> Self {
        Input::Items(items)
    }
}

impl From<&[Item]> for Input {
    fn from(items: &[Item]) -> Self {
        Input::Items(items.to_vec())
    }
}

impl From<Vec<i64>> for Input {
    fn from(ints: Vec<i64>) -> Self {
        Input::Items(ints.into_iter().map(Item::Int).collect())
    }
}

impl From<&[i64]> for Input {
    fn from(ints: &[i64]) -> Self {
        Input::Items(ints.iter().copied().map(Item::Int).collect())
    }
}

impl<const N: usize> From<[i64; N]> for Input {
    fn from(ints: [i64; N]) -> Self {
        Input::Items(ints.into_iter().map(Item::Int).collect())
    }
}

impl From<Vec<&str>> for Input {
    fn from(atoms: Vec<&str>) -> Self {
        Input::Items(atoms.into_iter().map(Item::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(atoms: [&str; N]) -> Self {
        Input::Items(atoms.into_iter().map(Item::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_is_split_and_coerced() {
        let input = Input::from(["1,|,3"]).normalized();
        assert_eq!(
            input,
            Input::Items(vec![Item::Int(1), Item::from("|"), Item::Int(3)])
        );
    }

    #[test]
    fn shorthand_only_for_single_string() {
        let input = Input::from(["1", "2"]).normalized();
        assert_eq!(input, Input::Items(vec![Item::from("1"), Item::from("2")]));

        let text = Input::from("1,2").normalized();
        assert_eq!(text, Input::Text("1,2".into()));
    }

    #[test]
    fn text_to_symbols() {
        assert_eq!(
            Input::from("a.b").to_symbols(),
            vec![Symbol::Char('a'), Symbol::Char('.'), Symbol::Char('b')]
        );
        assert!(Input::from("").to_symbols().is_empty());
    }

    #[test]
    fn symbols_to_items() {
        let seq = vec![Symbol::Char('w'), Symbol::Int(2), Symbol::Word("hi".into())];
        let items: Vec<Item> = seq.iter().map(Item::from).collect();
        assert_eq!(items, vec![Item::from("w"), Item::Int(2), Item::from("hi")]);
        assert_eq!(Input::Items(items).to_symbols(), seq);
    }

    #[test]
    fn items_to_symbols() {
        let input = Input::from(vec![Item::Int(1), Item::from("2"), Item::from("hi")]);
        assert_eq!(
            input.to_symbols(),
            vec![Symbol::Int(1), Symbol::Char('2'), Symbol::Word("hi".into())]
        );
        assert_eq!(
            Input::from(["3,3"]).to_symbols(),
            vec![Symbol::Int(3), Symbol::Int(3)]
        );
        // A bare string atom is not coerced; only the shorthand is.
        assert_eq!(
            Input::from(vec![Item::from("3"), Item::Int(3)]).to_symbols(),
            vec![Symbol::Char('3'), Symbol::Int(3)]
        );
    }
}
