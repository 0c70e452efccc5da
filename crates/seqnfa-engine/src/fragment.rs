// Fragment algebra: Thompson construction combinators.
//
// Combinators take their operand fragments by value and rewire the consumed
// states in place; a consumed fragment cannot be used again.

use seqnfa_core::Symbol;

use crate::{MAX_REPEAT, MAX_STATES, NfaError};
use crate::nfa::Nfa;
use crate::state::{State, StateId};

/// A sub-automaton with one entry and one designated exit.
///
/// Deliberately neither `Copy` nor `Clone`: passing a fragment to a
/// combinator moves it, and the combinator may rewire its states.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    start: StateId,
    end: StateId,
}

impl Fragment {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn end(&self) -> StateId {
        self.end
    }
}

/// Owns the state arena while fragments are being built and composed.
///
/// Every combinator that allocates states fails with
/// [`NfaError::TooManyStates`] once the arena would exceed [`MAX_STATES`].
#[derive(Debug, Default)]
pub struct Builder {
    states: Vec<State>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states allocated so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Read a state allocated by this builder.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    fn add_state(&mut self, accepting: bool) -> Result<StateId, NfaError> {
        let too_many = NfaError::TooManyStates { limit: MAX_STATES };
        if self.states.len() >= MAX_STATES {
            return Err(too_many);
        }
        let id = StateId::new(self.states.len()).ok_or(too_many)?;
        self.states.push(State::new(accepting));
        Ok(id)
    }

    fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.index()].epsilon.push(to);
    }

    fn set_edge(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        let state = &mut self.states[from.index()];
        debug_assert!(state.edge.is_none(), "{from} already has a symbol edge");
        state.edge = Some((symbol, to));
    }

    /// Clear the accepting flag of a state that became an internal node.
    fn demote(&mut self, id: StateId) {
        self.states[id.index()].accepting = false;
    }

    /// `start -ε-> end`
    pub fn epsilon(&mut self) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        let end = self.add_state(true)?;
        self.add_epsilon(start, end);
        Ok(Fragment { start, end })
    }

    /// `start -x-> end`
    pub fn symbol(&mut self, symbol: Symbol) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        let end = self.add_state(true)?;
        self.set_edge(start, symbol, end);
        Ok(Fragment { start, end })
    }

    /// `a` followed by `b`.
    pub fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.add_epsilon(a.end, b.start);
        self.demote(a.end);
        Fragment {
            start: a.start,
            end: b.end,
        }
    }

    /// `a | b`
    pub fn union(&mut self, a: Fragment, b: Fragment) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        self.add_epsilon(start, a.start);
        self.add_epsilon(start, b.start);

        let end = self.add_state(true)?;
        for exit in [a.end, b.end] {
            self.add_epsilon(exit, end);
            self.demote(exit);
        }
        Ok(Fragment { start, end })
    }

    /// `a*`
    pub fn closure(&mut self, a: Fragment) -> Result<Fragment, NfaError> {
        self.loop_around(a.start, a.end)
    }

    /// `a?`
    pub fn optional(&mut self, a: Fragment) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        let end = self.add_state(true)?;
        self.add_epsilon(start, end);
        self.add_epsilon(start, a.start);

        self.add_epsilon(a.end, end);
        self.demote(a.end);
        Ok(Fragment { start, end })
    }

    /// `a+`: one mandatory pass of `a` followed by `a*` over the same states.
    pub fn one_or_more(&mut self, a: Fragment) -> Result<Fragment, NfaError> {
        self.demote(a.end);
        let repeat = self.loop_around(a.start, a.end)?;
        Ok(self.concat(a, repeat))
    }

    /// Closure wiring shared by `*` and `+`. The body's exit gets the back
    /// edge to its entry, which is the cycle in the graph.
    fn loop_around(&mut self, body_start: StateId, body_end: StateId) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        let end = self.add_state(true)?;
        self.add_epsilon(start, end);
        self.add_epsilon(start, body_start);

        self.add_epsilon(body_end, end);
        self.add_epsilon(body_end, body_start);
        self.demote(body_end);
        Ok(Fragment { start, end })
    }

    /// `[c1 c2 ...]`: a flattened union of single-symbol fragments.
    ///
    /// The shared start fans out over epsilon edges to one sibling state per
    /// member; each sibling consumes its symbol into the shared end.
    pub fn char_class(&mut self, members: &[Symbol]) -> Result<Fragment, NfaError> {
        let start = self.add_state(false)?;
        let end = self.add_state(true)?;
        for member in members {
            let branch = self.add_state(false)?;
            self.add_epsilon(start, branch);
            self.set_edge(branch, member.clone(), end);
        }
        Ok(Fragment { start, end })
    }

    /// `x{min,max}`: a linear chain of `max` transitions on one symbol.
    ///
    /// Every chain state reached after at least `min` symbols exits to the
    /// fragment's end, so the chain start is an exit iff `min == 0`.
    ///
    /// Only a single-symbol fragment can be repeated; applying this to a
    /// group or any other composite fragment fails with
    /// [`NfaError::RepeatOnGroup`]. `max` is capped at [`MAX_REPEAT`].
    pub fn bounded_repeat(
        &mut self,
        a: Fragment,
        min: usize,
        max: usize,
    ) -> Result<Fragment, NfaError> {
        if min > max || max > MAX_REPEAT {
            return Err(NfaError::InvalidRepeat(format!("{{{min},{max}}}")));
        }
        let symbol = self.single_symbol(&a).ok_or(NfaError::RepeatOnGroup)?;
        if self.states.len() + max > MAX_STATES {
            return Err(NfaError::TooManyStates { limit: MAX_STATES });
        }

        // The consumed fragment is the chain's first link.
        let end = self.add_state(true)?;
        self.demote(a.end);
        let mut chain = vec![a.start];
        if max == 0 {
            self.states[a.start.index()].edge = None;
        } else {
            chain.push(a.end);
            for _ in 1..max {
                let prev = chain[chain.len() - 1];
                let next = self.add_state(false)?;
                self.set_edge(prev, symbol.clone(), next);
                chain.push(next);
            }
        }
        for &link in &chain[min..] {
            self.add_epsilon(link, end);
        }

        Ok(Fragment {
            start: a.start,
            end,
        })
    }

    /// The symbol of a plain `start -x-> end` fragment, if `a` is one.
    fn single_symbol(&self, a: &Fragment) -> Option<Symbol> {
        let start = self.state(a.start);
        let end = self.state(a.end);
        match &start.edge {
            Some((sym, target))
                if *target == a.end
                    && start.epsilon.is_empty()
                    && end.edge.is_none()
                    && end.epsilon.is_empty() =>
            {
                Some(sym.clone())
            }
            _ => None,
        }
    }

    /// Freeze the arena into an automaton rooted at `root`.
    pub fn finish(self, root: Fragment) -> Nfa {
        Nfa::from_parts(self.states, root.start, root.end)
    }
}
