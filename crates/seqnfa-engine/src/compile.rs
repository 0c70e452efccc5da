// Postfix-to-automaton compiler.

use log::debug;
use seqnfa_core::Input;

use crate::NfaError;
use crate::fragment::{Builder, Fragment};
use crate::nfa::Nfa;
use crate::postfix;
use crate::token::Token;

/// Evaluate a postfix token stream with an operand stack of fragments.
///
/// An empty stream compiles to a single epsilon fragment. Any stream that
/// does not reduce to exactly one fragment is malformed.
pub fn compile(postfix: &[Token]) -> Result<Nfa, NfaError> {
    let mut builder = Builder::new();
    if postfix.is_empty() {
        let root = builder.epsilon()?;
        return Ok(builder.finish(root));
    }

    let mut stack: Vec<Fragment> = Vec::new();
    for token in postfix {
        let fragment = match token {
            Token::Operand(sym) => builder.symbol(sym.clone())?,
            Token::Class(members) => builder.char_class(members)?,
            Token::Alternate | Token::Concat => {
                let right = pop(&mut stack, token)?;
                let left = pop(&mut stack, token)?;
                if *token == Token::Alternate {
                    builder.union(left, right)?
                } else {
                    builder.concat(left, right)
                }
            }
            Token::Optional => {
                let inner = pop(&mut stack, token)?;
                builder.optional(inner)?
            }
            Token::Star => {
                let inner = pop(&mut stack, token)?;
                builder.closure(inner)?
            }
            Token::Plus => {
                let inner = pop(&mut stack, token)?;
                builder.one_or_more(inner)?
            }
            Token::Repeat { min, max } => {
                let inner = pop(&mut stack, token)?;
                builder.bounded_repeat(inner, *min, *max)?
            }
            Token::Open | Token::Close => return Err(NfaError::MismatchedParentheses),
        };
        stack.push(fragment);
    }

    if stack.len() != 1 {
        return Err(NfaError::UnbalancedPostfix {
            remaining: stack.len(),
        });
    }
    let root = stack.pop().ok_or(NfaError::UnbalancedPostfix { remaining: 0 })?;
    Ok(builder.finish(root))
}

fn pop(stack: &mut Vec<Fragment>, operator: &Token) -> Result<Fragment, NfaError> {
    stack.pop().ok_or_else(|| NfaError::MissingOperand {
        operator: operator.to_string(),
    })
}

/// Normalize a pattern to postfix form and compile it.
pub fn compile_pattern(pattern: &Input) -> Result<Nfa, NfaError> {
    let postfix = postfix::normalize(pattern)?;
    let nfa = compile(&postfix)?;
    debug!(
        "compiled {:?}: postfix `{}`, {} states",
        pattern,
        postfix::render_postfix(&postfix),
        nfa.state_count()
    );
    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_STATES;
    use seqnfa_core::Symbol;

    #[test]
    fn empty_stream_is_epsilon() {
        let nfa = compile(&[]).unwrap();
        assert_eq!(nfa.state_count(), 2);
        assert!(nfa.any_accepting(&nfa.start_closure()));
    }

    #[test]
    fn single_operand() {
        let nfa = compile(&[Token::Operand(Symbol::Char('a'))]).unwrap();
        assert_eq!(nfa.state_count(), 2);
        assert!(nfa.state(nfa.end()).accepting);
    }

    #[test]
    fn leftover_fragments_are_fatal() {
        let postfix = [
            Token::Operand(Symbol::Char('a')),
            Token::Operand(Symbol::Char('b')),
        ];
        assert_eq!(
            compile(&postfix).unwrap_err(),
            NfaError::UnbalancedPostfix { remaining: 2 }
        );
    }

    #[test]
    fn operator_without_operand() {
        assert_eq!(
            compile(&[Token::Star]).unwrap_err(),
            NfaError::MissingOperand {
                operator: "*".to_string()
            }
        );
        assert!(matches!(
            compile_pattern(&Input::from("|a")),
            Err(NfaError::MissingOperand { .. })
        ));
    }

    #[test]
    fn repeat_on_group_is_rejected() {
        assert_eq!(
            compile_pattern(&Input::from("(ab){1,2}")).unwrap_err(),
            NfaError::RepeatOnGroup
        );
        assert!(compile_pattern(&Input::from("a{1,2}")).is_ok());
        // A parenthesized single symbol is still a single symbol.
        assert!(compile_pattern(&Input::from("(a){1,2}")).is_ok());
    }

    #[test]
    fn oversized_patterns_are_errors() {
        assert!(matches!(
            compile_pattern(&Input::from("a{0,9000000000000}")),
            Err(NfaError::InvalidRepeat(_))
        ));
        assert!(compile_pattern(&Input::from("a{10000}")).is_ok());

        // Each repetition is within bounds, the automaton as a whole is not.
        let pattern = "a{10000}".repeat(MAX_STATES / 10_000 + 1);
        assert_eq!(
            compile_pattern(&Input::from(pattern)).unwrap_err(),
            NfaError::TooManyStates { limit: MAX_STATES }
        );
    }

    #[test]
    fn parentheses_in_postfix_are_rejected() {
        assert_eq!(
            compile(&[Token::Open]).unwrap_err(),
            NfaError::MismatchedParentheses
        );
    }
}
