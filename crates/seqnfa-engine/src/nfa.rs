// Compiled automaton: an immutable state arena with epsilon-closure.

use hashbrown::HashSet;
use seqnfa_core::{Input, Symbol};

use crate::NfaError;
use crate::state::{State, StateId};

/// A compiled nondeterministic automaton.
///
/// Built once per pattern and read-only afterwards; both matchers only
/// borrow it, so a single automaton can serve any number of searches.
#[derive(Clone)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    end: StateId,
}

impl std::fmt::Debug for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nfa")
            .field("state_count", &self.states.len())
            .field("start", &self.start)
            .field("end", &self.end)
            .field(
                "epsilon_count",
                &self.states.iter().map(|s| s.epsilon.len()).sum::<usize>(),
            )
            .finish()
    }
}

impl Nfa {
    pub(crate) fn from_parts(states: Vec<State>, start: StateId, end: StateId) -> Self {
        Self { states, start, end }
    }

    /// Compile a pattern (text, atom list, or comma-joined shorthand).
    pub fn new(pattern: impl Into<Input>) -> Result<Self, NfaError> {
        crate::compile::compile_pattern(&pattern.into())
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// The designated exit state of the whole automaton.
    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Epsilon-closure of a set of seed states.
    ///
    /// Returns every state reachable from the seeds over epsilon edges alone,
    /// seeds included, in depth-first discovery order. The visited set is
    /// local to the call; epsilon cycles (from `*` and `+`) are visited once.
    pub fn epsilon_closure(&self, seeds: impl IntoIterator<Item = StateId>) -> Vec<StateId> {
        let mut visited: HashSet<StateId> = HashSet::new();
        let mut closure = Vec::new();
        let mut stack: Vec<StateId> = Vec::new();

        for seed in seeds {
            stack.push(seed);
            while let Some(id) = stack.pop() {
                if !visited.insert(id) {
                    continue;
                }
                closure.push(id);
                // Reverse so that the first epsilon edge is explored first.
                stack.extend(self.state(id).epsilon.iter().rev());
            }
        }

        closure
    }

    /// Closure of the start state: the states live before any input.
    pub fn start_closure(&self) -> Vec<StateId> {
        self.epsilon_closure([self.start])
    }

    /// Whether any state of `states` is accepting.
    pub fn any_accepting(&self, states: &[StateId]) -> bool {
        states.iter().any(|&id| self.state(id).accepting)
    }

    /// Consume one input symbol from a closed state set and close the
    /// result. States without a matching edge contribute nothing.
    pub fn step(&self, states: &[StateId], input: &Symbol, terminator: &Symbol) -> Vec<StateId> {
        self.epsilon_closure(
            states
                .iter()
                .filter_map(|&id| self.state(id).step(input, terminator)),
        )
    }

    /// Render the graph as nested depth-first paths from the start state.
    ///
    /// A symbol state contributes its symbol followed by the path from its
    /// target. A state with epsilon edges contributes `eps` followed by one
    /// bracketed path per edge. States already printed are skipped, so
    /// cycles terminate.
    pub fn dump(&self) -> String {
        let mut visited: HashSet<StateId> = HashSet::new();
        let mut out = String::new();
        self.dump_from(self.start, &mut visited, &mut out);
        out
    }

    fn dump_from(&self, id: StateId, visited: &mut HashSet<StateId>, out: &mut String) {
        if !visited.insert(id) {
            return;
        }
        let state = self.state(id);
        if state.accepting {
            out.push('!');
        }
        if let Some((sym, target)) = &state.edge {
            out.push_str(&sym.to_string());
            out.push(' ');
            self.dump_from(*target, visited, out);
        }
        if !state.epsilon.is_empty() {
            out.push_str("eps");
            for &next in &state.epsilon {
                out.push_str(" [");
                self.dump_from(next, visited, out);
                out.push(']');
            }
        }
    }
}
