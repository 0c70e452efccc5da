//! Thompson NFA engine over an open symbol alphabet.
//!
//! A pattern is tokenized, rewritten into postfix form, and compiled into a
//! nondeterministic automaton. The automaton is then run in one of two modes:
//! matching a fully known sequence, or discovering complete sequences in an
//! opaque store that can only answer "which one-symbol extensions of this
//! prefix exist".
//!
//! # Architecture
//!
//! - [`token`] -- Pattern tokenizer (text and atom-list forms)
//! - [`postfix`] -- Implicit concatenation insertion and shunting-yard
//! - [`state`] -- Arena state record and state handles
//! - [`fragment`] -- Fragment algebra (Thompson combinators)
//! - [`compile`] -- Postfix-to-automaton compiler
//! - [`nfa`] -- Compiled automaton and epsilon-closure
//! - [`direct`] -- Matching a fully materialized sequence
//! - [`config`] -- Predictive search configuration
//! - [`predict`] -- Prefix-oracle driven predictive matching
//! - [`store`] -- In-memory reference sequence store

pub mod compile;
pub mod config;
pub mod direct;
pub mod fragment;
pub mod nfa;
pub mod postfix;
pub mod predict;
pub mod state;
pub mod store;
pub mod token;

pub use config::SearchConfig;
pub use direct::match_one;
pub use nfa::Nfa;
pub use predict::{SearchOutcome, predict};
pub use seqnfa_core::{Input, Item, Symbol};
pub use store::SequenceStore;

/// Error type for pattern parsing and automaton compilation.
///
/// All variants are syntax errors: they are reported to the caller of the
/// compile step and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NfaError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("malformed postfix stream: {remaining} fragments left on the stack, expected 1")]
    UnbalancedPostfix { remaining: usize },
    #[error("operator `{operator}` is missing an operand")]
    MissingOperand { operator: String },
    #[error("invalid character class: {0}")]
    InvalidClass(String),
    #[error("invalid bounded repetition: {0}")]
    InvalidRepeat(String),
    #[error("bounded repetition only applies to a single literal symbol, not a group")]
    RepeatOnGroup,
    #[error("pattern ends with a dangling escape")]
    DanglingEscape,
    #[error("automaton exceeds {limit} states")]
    TooManyStates { limit: usize },
}

/// Error type for the pattern-level predictive entry point.
///
/// Oracle failures are carried unchanged in [`PredictError::Oracle`].
#[derive(Debug, thiserror::Error)]
pub enum PredictError<E> {
    #[error("pattern error: {0}")]
    Pattern(#[from] NfaError),
    #[error("prefix oracle failed: {0}")]
    Oracle(E),
}

/// Default number of predictive search rounds after the first.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Largest bound accepted in a `{n,m}` repetition.
pub const MAX_REPEAT: usize = 10_000;

/// Largest number of states a compiled automaton may hold.
pub const MAX_STATES: usize = 1 << 20;

/// The external prefix query capability used by the predictive matcher.
///
/// `extensions(prefix, head)` returns every sequence in the backing store
/// that extends `head ++ prefix` by exactly one symbol. An extension that is
/// itself a complete stored entry is suffixed with the store's terminator.
/// `head` is only passed on the first round of a search.
///
/// The call is synchronous and may block; the matcher neither retries nor
/// times it out, and any error is returned to the caller unchanged.
pub trait PrefixOracle {
    type Error;

    fn extensions(
        &self,
        prefix: &[Symbol],
        head: Option<&[Symbol]>,
    ) -> Result<Vec<Vec<Symbol>>, Self::Error>;
}

impl<F, E> PrefixOracle for F
where
    F: Fn(&[Symbol], Option<&[Symbol]>) -> Result<Vec<Vec<Symbol>>, E>,
{
    type Error = E;

    fn extensions(
        &self,
        prefix: &[Symbol],
        head: Option<&[Symbol]>,
    ) -> Result<Vec<Vec<Symbol>>, E> {
        self(prefix, head)
    }
}
