// In-memory reference sequence store, usable as a prefix oracle.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::io::BufRead;
use std::path::Path;

use seqnfa_core::input::split_shorthand;
use seqnfa_core::{Input, Symbol};

use crate::PrefixOracle;

/// Error type for loading a sequence store from a file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read sequence store: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered collection of reference sequences.
///
/// Entries may be character strings, integer lists or token lists, or any
/// mix. Queried as a [`PrefixOracle`], the store answers with the distinct
/// one-symbol extensions of a prefix, in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStore {
    entries: Vec<Vec<Symbol>>,
    terminator: Symbol,
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceStore {
    /// An empty store terminated by [`Symbol::End`].
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            terminator: Symbol::End,
        }
    }

    /// Use a custom terminator sentinel.
    pub fn with_terminator(mut self, terminator: Symbol) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn terminator(&self) -> &Symbol {
        &self.terminator
    }

    pub fn push(&mut self, entry: Vec<Symbol>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Vec<Symbol>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A store of words, one character symbol per letter.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_inputs(words.into_iter().map(|w| Input::from(w.as_ref())))
    }

    /// A store of integer sequences.
    pub fn from_int_seqs<I, S>(seqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[i64]>,
    {
        Self::from_inputs(seqs.into_iter().map(|s| Input::from(s.as_ref())))
    }

    /// A store of token sequences (e.g. sentences split into words).
    pub fn from_token_seqs<I, S, T>(seqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut store = Self::new();
        for seq in seqs {
            store.push(seq.into_iter().map(|t| Symbol::from_atom(t.as_ref())).collect());
        }
        store
    }

    /// A store built from sequence arguments in any input form.
    pub fn from_inputs(inputs: impl IntoIterator<Item = Input>) -> Self {
        let mut store = Self::new();
        for input in inputs {
            store.push(input.to_symbols());
        }
        store
    }

    /// Read one entry per non-empty line. A line containing a comma is
    /// parsed as a comma-joined atom list (`1,2,3`, `hi,world`); any other
    /// line is a character sequence.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let input = if line.contains(',') {
                Input::Items(split_shorthand(line))
            } else {
                Input::from(line)
            };
            store.push(input.to_symbols());
        }
        Ok(store)
    }

    /// Load a store file (see [`from_reader`](Self::from_reader)).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Distinct one-symbol extensions of `head ++ prefix`, sorted.
    ///
    /// Every entry is considered with the terminator appended, so an entry
    /// equal to the full prefix yields the prefix plus the terminator. The
    /// full prefix itself is never returned.
    pub fn extensions_of(&self, prefix: &[Symbol], head: Option<&[Symbol]>) -> Vec<Vec<Symbol>> {
        let full: Vec<Symbol> = match head {
            Some(head) => head.iter().chain(prefix).cloned().collect(),
            None => prefix.to_vec(),
        };
        let want = full.len() + 1;

        let mut found: BTreeSet<Vec<Symbol>> = BTreeSet::new();
        for entry in &self.entries {
            if entry.len() + 1 < want || !entry.starts_with(&full) {
                continue;
            }
            let mut extension = full.clone();
            extension.push(entry.get(full.len()).unwrap_or(&self.terminator).clone());
            found.insert(extension);
        }
        found.into_iter().collect()
    }
}

impl PrefixOracle for SequenceStore {
    type Error = Infallible;

    fn extensions(
        &self,
        prefix: &[Symbol],
        head: Option<&[Symbol]>,
    ) -> Result<Vec<Vec<Symbol>>, Infallible> {
        Ok(self.extensions_of(prefix, head))
    }
}
