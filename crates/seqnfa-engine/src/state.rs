// Automaton state record and arena handles.

use std::fmt;

use seqnfa_core::Symbol;

/// Handle of a state inside an automaton arena.
///
/// State identity is the handle, never the state's contents, so two
/// structurally identical states are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// Handle for arena position `index`, if it fits the handle width.
    #[inline]
    pub(crate) fn new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Position of the state in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// A node of the automaton graph.
///
/// A state has at most one symbol transition and any number of epsilon
/// transitions. Multi-symbol branching is expressed with one sibling state
/// per symbol, reached over epsilon edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// True only on the designated exit of a complete (sub)automaton.
    pub accepting: bool,
    /// The single symbol-consuming transition, if any.
    pub edge: Option<(Symbol, StateId)>,
    /// Unconditional transitions taken without consuming input.
    pub epsilon: Vec<StateId>,
}

impl State {
    pub fn new(accepting: bool) -> Self {
        Self {
            accepting,
            edge: None,
            epsilon: Vec::new(),
        }
    }

    /// Symbol labelling the outgoing symbol transition.
    #[inline]
    pub fn edge_symbol(&self) -> Option<&Symbol> {
        self.edge.as_ref().map(|(sym, _)| sym)
    }

    /// Target of the symbol transition if it accepts `input`.
    #[inline]
    pub fn step(&self, input: &Symbol, terminator: &Symbol) -> Option<StateId> {
        match &self.edge {
            Some((sym, target)) if sym.accepts(input, terminator) => Some(*target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> StateId {
        StateId::new(index).unwrap()
    }

    #[test]
    fn step_follows_matching_edge_only() {
        let mut state = State::new(false);
        assert_eq!(state.step(&Symbol::Char('a'), &Symbol::End), None);

        state.edge = Some((Symbol::Char('a'), id(3)));
        assert_eq!(state.step(&Symbol::Char('a'), &Symbol::End), Some(id(3)));
        assert_eq!(state.step(&Symbol::Char('b'), &Symbol::End), None);
        assert_eq!(state.edge_symbol(), Some(&Symbol::Char('a')));
    }

    #[test]
    fn wildcard_edge() {
        let mut state = State::new(false);
        state.edge = Some((Symbol::Wildcard, id(1)));
        assert_eq!(state.step(&Symbol::Int(9), &Symbol::End), Some(id(1)));
        assert_eq!(state.step(&Symbol::End, &Symbol::End), None);
    }

    #[test]
    fn handle_display() {
        assert_eq!(id(12).to_string(), "s12");
        assert_eq!(id(12).index(), 12);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn handle_width_is_checked() {
        assert!(StateId::new(u32::MAX as usize).is_some());
        assert_eq!(StateId::new(u32::MAX as usize + 1), None);
    }
}
