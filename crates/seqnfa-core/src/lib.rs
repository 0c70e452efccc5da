//! Shared types for the seqnfa automaton engine.
//!
//! - [`symbol`] -- The open alphabet ([`Symbol`]) with its reserved
//!   wildcard and terminator values
//! - [`input`] -- Pattern and sequence argument forms ([`Input`], [`Item`])
//!   including the comma-joined shorthand

pub mod input;
pub mod symbol;

pub use input::{Input, Item};
pub use symbol::{Symbol, render_sequence};
