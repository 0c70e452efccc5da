// Predictive search configuration.

use seqnfa_core::Symbol;

use crate::DEFAULT_MAX_STEPS;

/// Configuration for one predictive search.
///
/// The search itself keeps no state between calls; everything that shapes
/// a search lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed prefix context handed to the oracle on the first round only.
    pub head: Option<Vec<Symbol>>,
    /// Maximum number of candidate prefixes carried into the next round.
    pub limit: Option<usize>,
    /// Number of rounds after the first. The search runs at most
    /// `max_steps + 1` oracle rounds, then gives up.
    pub max_steps: usize,
    /// Symbol the oracle appends to extensions that are complete entries.
    pub terminator: Symbol,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            head: None,
            limit: None,
            max_steps: DEFAULT_MAX_STEPS,
            terminator: Symbol::End,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head(mut self, head: Vec<Symbol>) -> Self {
        self.head = Some(head);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_terminator(mut self, terminator: Symbol) -> Self {
        self.terminator = terminator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.head, None);
        assert_eq!(config.limit, None);
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.terminator, Symbol::End);
    }

    #[test]
    fn builder_setters() {
        let config = SearchConfig::new()
            .with_head(vec![Symbol::Char('w')])
            .with_limit(3)
            .with_max_steps(4)
            .with_terminator(Symbol::Char('$'));
        assert_eq!(config.head, Some(vec![Symbol::Char('w')]));
        assert_eq!(config.limit, Some(3));
        assert_eq!(config.max_steps, 4);
        assert_eq!(config.terminator, Symbol::Char('$'));
    }
}
