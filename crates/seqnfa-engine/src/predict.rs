// Predictive matching against an opaque, prefix-queryable sequence store.
//
// The automaton and the store are explored in lockstep, one symbol per
// round. The store is never enumerated: only prefixes that the automaton can
// still extend are ever queried.

use hashbrown::HashSet;
use log::{debug, trace};
use seqnfa_core::{Input, Symbol, render_sequence};

use crate::config::SearchConfig;
use crate::nfa::Nfa;
use crate::state::StateId;
use crate::{PredictError, PrefixOracle};

/// Result of a predictive search.
///
/// The two "nothing found" endings are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Complete stored sequences accepted by the automaton, each still
    /// carrying its terminator.
    Found(Vec<Vec<Symbol>>),
    /// Every path died out before a complete sequence was found.
    Exhausted,
    /// The round budget ran out first.
    StepLimit,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The found sequences with their terminator stripped; empty unless
    /// [`Found`](SearchOutcome::Found).
    pub fn sequences(&self) -> Vec<Vec<Symbol>> {
        match self {
            SearchOutcome::Found(found) => found
                .iter()
                .map(|seq| seq.split_last().map_or_else(Vec::new, |(_, body)| body.to_vec()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A candidate prefix together with the closed state set reached by
/// consuming it. States never cross from one candidate to another.
struct Candidate {
    prefix: Vec<Symbol>,
    states: Vec<StateId>,
}

impl Nfa {
    /// Discover complete sequences in the oracle's store that this automaton
    /// accepts.
    ///
    /// Each round queries the oracle for the one-symbol extensions of every
    /// candidate prefix. An extension ending in the terminator is a complete
    /// sequence if its own prefix left the automaton in an accepting state;
    /// any other extension survives only if the prefix's states can consume
    /// its last symbol, and becomes a candidate of the next round with the
    /// resulting states. The search stops with [`SearchOutcome::Found`] on
    /// the first round that completes a sequence. If configured, candidates
    /// are truncated to `limit` between rounds.
    ///
    /// The search is bounded by `config.max_steps`. Oracle errors are
    /// returned unchanged.
    pub fn predict<O>(&self, oracle: &O, config: &SearchConfig) -> Result<SearchOutcome, O::Error>
    where
        O: PrefixOracle + ?Sized,
    {
        let terminator = &config.terminator;
        let mut candidates = vec![Candidate {
            prefix: Vec::new(),
            states: self.start_closure(),
        }];

        for round in 0..=config.max_steps {
            let head = if round == 0 { config.head.as_deref() } else { None };

            let mut seen: HashSet<Vec<Symbol>> = HashSet::new();
            let mut complete = Vec::new();
            let mut next = Vec::new();
            for candidate in &candidates {
                let found = oracle.extensions(&candidate.prefix, head)?;
                trace!(
                    "round {round}: {} extensions of `{}`",
                    found.len(),
                    render_sequence(&candidate.prefix)
                );
                let accepting = self.any_accepting(&candidate.states);

                for ext in found {
                    if ext.len() <= candidate.prefix.len() || !seen.insert(ext.clone()) {
                        continue;
                    }
                    let Some(last) = ext.last().cloned() else { continue };
                    if &last == terminator {
                        if accepting {
                            complete.push(ext);
                        }
                        continue;
                    }
                    let states = self.step(&candidate.states, &last, terminator);
                    if !states.is_empty() {
                        next.push(Candidate { prefix: ext, states });
                    }
                }
            }

            debug!(
                "round {round}: {} candidates, {} complete, {} carried over",
                candidates.len(),
                complete.len(),
                next.len()
            );

            if !complete.is_empty() {
                return Ok(SearchOutcome::Found(complete));
            }
            if next.is_empty() {
                return Ok(SearchOutcome::Exhausted);
            }
            if let Some(limit) = config.limit {
                next.truncate(limit);
            }
            candidates = next;
        }

        debug!("gave up after {} rounds", config.max_steps + 1);
        Ok(SearchOutcome::StepLimit)
    }
}

/// Compile `pattern` and run a predictive search with `oracle`.
pub fn predict<O>(
    pattern: impl Into<Input>,
    oracle: &O,
    config: &SearchConfig,
) -> Result<SearchOutcome, PredictError<O::Error>>
where
    O: PrefixOracle + ?Sized,
{
    let nfa = Nfa::new(pattern)?;
    nfa.predict(oracle, config).map_err(PredictError::Oracle)
}
