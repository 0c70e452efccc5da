// Direct sequence matching by epsilon-closure simulation.

use seqnfa_core::{Input, Symbol};

use crate::NfaError;
use crate::nfa::Nfa;

impl Nfa {
    /// Whether the whole of `sequence` is accepted by this automaton.
    ///
    /// Simulates all live states in lockstep: each input symbol advances
    /// every state whose edge matches it (exactly, or by wildcard) and the
    /// result is epsilon-closed. The sequence matches iff an accepting state
    /// is live once all input is consumed.
    pub fn matches(&self, sequence: &[Symbol]) -> bool {
        let mut live = self.start_closure();
        for input in sequence {
            live = self.step(&live, input, &Symbol::End);
            if live.is_empty() {
                return false;
            }
        }
        self.any_accepting(&live)
    }

    /// [`matches`](Self::matches) for any sequence argument form, including
    /// the comma-joined shorthand.
    pub fn match_one(&self, sequence: impl Into<Input>) -> bool {
        self.matches(&sequence.into().to_symbols())
    }
}

/// Compile `pattern` and match it against `sequence`.
///
/// Both arguments accept text, an atom list, or the single-element
/// comma-joined shorthand (`["1,|,3"]`, numeric parts become integers).
/// Only the pattern can fail, with a syntax error.
pub fn match_one(pattern: impl Into<Input>, sequence: impl Into<Input>) -> Result<bool, NfaError> {
    Ok(Nfa::new(pattern)?.match_one(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqnfa_core::Item;

    fn m(pattern: &str, seq: &str) -> bool {
        match_one(pattern, seq).unwrap()
    }

    #[test]
    fn literals() {
        assert!(m("", ""));
        assert!(m("a", "a"));
        assert!(m("ab", "ab"));
        assert!(!m("a", "ab"));
        assert!(!m("ab", "a"));
        assert!(!m("a", ""));
    }

    #[test]
    fn wildcard() {
        assert!(m(".", "a"));
        assert!(m(".b", "ab"));
        assert!(!m(".", ""));
        assert!(!m(".b", "aa"));
    }

    #[test]
    fn quantifiers() {
        assert!(m("a?", ""));
        assert!(m("a?", "a"));
        assert!(!m("a?", "aa"));

        for s in ["", "a", "aa", "aaa", "aaaa"] {
            assert!(m("a*", s), "a* should match {s:?}");
        }
        assert!(!m("a*", "ab"));

        assert!(!m("a+", ""));
        for s in ["a", "aa", "aaa", "aaaa"] {
            assert!(m("a+", s), "a+ should match {s:?}");
        }
    }

    #[test]
    fn alternation() {
        assert!(m("a|b", "a"));
        assert!(m("a|b", "b"));
        assert!(!m("a|b", ""));
        assert!(!m("a|b", "c"));
        assert!(!m("a|b", "ac"));
    }

    #[test]
    fn bounded_repetition() {
        let cases: [(&str, &[&str], &[&str]); 5] = [
            ("a{0,2}", &["", "a", "aa"], &["aaa", "aaaa"]),
            ("a{1,3}", &["a", "aa", "aaa"], &["", "aaaa"]),
            ("a{2,4}", &["aa", "aaa", "aaaa"], &["", "a", "aaaaa"]),
            ("a{2}", &["aa"], &["a", "aaa"]),
            ("a{0,0}", &[""], &["a"]),
        ];
        for (pattern, accepted, rejected) in cases {
            for s in accepted {
                assert!(m(pattern, s), "{pattern} should match {s:?}");
            }
            for s in rejected {
                assert!(!m(pattern, s), "{pattern} should not match {s:?}");
            }
        }
    }

    #[test]
    fn bounded_repetition_composes() {
        // Intermediate chain states must not leak acceptance.
        assert!(!m("a{0,2}b+", "a"));
        assert!(!m("a{0,2}b+", ""));
        assert!(m("a{0,2}b+", "aab"));
        assert!(m("a{0,1}b+", "abbb"));
        assert!(!m("a{0,1}b+", "aab"));
        assert!(m("xa{1,2}", "xaa"));
    }

    #[test]
    fn groups() {
        assert!(m("(ab)?", ""));
        assert!(m("(ab)?", "ab"));
        assert!(!m("(ab)?", "abab"));
        assert!(m("(ab)*", "abab"));
        assert!(m("(ab)+", "ab"));
        assert!(!m("(ab)+", ""));
        assert!(m("(a|b)*", "abba"));
        assert!(!m("(a|b)*", "abc"));
        assert!(m("(a|b)+", "ba"));
        assert!(!m("(a|b)?", "aa"));
    }

    #[test]
    fn classes() {
        assert!(!m("[abc]", ""));
        assert!(m("[abc]", "b"));
        assert!(!m("[abc]", "d"));
        assert!(m("[ab]*", "abba"));
        assert!(!m("[ab]*", "abc"));
        assert!(m("[a1]*", "a11a"));
        assert!(m("x[ab]y", "xby"));
    }

    #[test]
    fn integer_alphabet() {
        assert!(match_one(Vec::<i64>::new(), Vec::<i64>::new()).unwrap());
        assert!(match_one([1i64, 2], [1i64, 2]).unwrap());
        assert!(!match_one([1i64], Vec::<i64>::new()).unwrap());
        assert!(!match_one([1i64, 2], [1i64]).unwrap());

        let any_then_two = vec![Item::from("."), Item::Int(2)];
        assert!(match_one(any_then_two, [4i64, 2]).unwrap());

        let maybe_one = vec![Item::Int(1), Item::from("?")];
        assert!(match_one(maybe_one.clone(), Vec::<i64>::new()).unwrap());
        assert!(!match_one(maybe_one, [1i64, 1]).unwrap());
    }

    #[test]
    fn shorthand() {
        assert!(match_one(["1,|,3"], [1i64]).unwrap());
        assert!(match_one(["1,|,3"], ["1"]).unwrap());
        assert!(match_one(["1,2,3"], ["1,2,3"]).unwrap());
        assert!(match_one(["(,1,|,3,),3"], ["3,3"]).unwrap());
        assert!(match_one(["(,1,|,3,),3"], [3i64, 3]).unwrap());
        let mixed = vec![Item::from("3"), Item::Int(3)];
        assert!(!match_one(["(,1,|,3,),3"], mixed).unwrap());
    }

    #[test]
    fn mixed_atoms() {
        let pattern = vec![Item::from("1"), Item::Int(2), Item::from("+")];
        let ok = vec![Item::from("1"), Item::Int(2), Item::Int(2), Item::Int(2)];
        let bad = vec![Item::from("1"), Item::Int(2), Item::from("2")];
        assert!(match_one(pattern.clone(), ok).unwrap());
        assert!(!match_one(pattern, bad).unwrap());
    }

    #[test]
    fn words() {
        assert!(match_one(["hi", "(", "world", "|", "buddy", ")"], ["hi", "buddy"]).unwrap());
        assert!(!match_one(["hi", "(", "world", "|", "buddy", ")"], ["hi", "hi"]).unwrap());
    }

    #[test]
    fn compile_once_match_many() {
        let nfa = Nfa::new("(a|b)*c").unwrap();
        assert!(nfa.match_one("abac"));
        assert!(nfa.match_one("c"));
        assert!(!nfa.match_one("ab"));
        assert!(nfa.match_one("bbc"));
    }

    #[test]
    fn syntax_errors_surface() {
        assert_eq!(match_one("(a", "a"), Err(NfaError::MismatchedParentheses));
        assert_eq!(match_one("a)", "a"), Err(NfaError::MismatchedParentheses));
    }
}
