// Infix-to-postfix normalization.
//
// Implicit juxtaposition (`ab`) is first rewritten into an explicit binary
// concatenation marker so that shunting-yard can treat it like `|`.

use seqnfa_core::Input;

use crate::NfaError;
use crate::token::{self, Token};

/// Insert explicit [`Token::Concat`] markers between juxtaposed tokens.
///
/// A marker goes between `a` and `b` when `a` ends a value (an operand, a
/// class, a quantifier, a bounded repetition or `)`) and `b` starts one (an
/// operand, the wildcard, a class or `(`).
pub fn insert_concatenation(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let ends_value = token.is_value()
            || token.is_quantifier()
            || matches!(token, Token::Close | Token::Repeat { .. });
        let starts_value = iter
            .peek()
            .is_some_and(|next| next.is_value() || matches!(next, Token::Open));

        out.push(token);
        if ends_value && starts_value {
            out.push(Token::Concat);
        }
    }

    out
}

/// Shunting-yard: reorder an explicit-concatenation token stream into
/// postfix form.
///
/// Values go straight to the output. An incoming operator first pops every
/// stacked operator of greater or equal precedence. Parentheses group
/// without precedence comparison and never reach the output.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, NfaError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) | Token::Class(_) => output.push(token),
            Token::Open => stack.push(token),
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(op) => output.push(op),
                    None => return Err(NfaError::MismatchedParentheses),
                }
            },
            op => {
                let prec = op.precedence();
                while let Some(top) = stack.last() {
                    if top.precedence().is_none() || top.precedence() < prec {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op == Token::Open {
            return Err(NfaError::MismatchedParentheses);
        }
        output.push(op);
    }

    Ok(output)
}

/// Tokenize a pattern and return its postfix form.
pub fn normalize(pattern: &Input) -> Result<Vec<Token>, NfaError> {
    to_postfix(insert_concatenation(token::tokenize(pattern)?))
}

/// Render a token stream as a space-separated string (`a b # * `).
pub fn render_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(pattern: &str) -> String {
        render_postfix(&normalize(&Input::from(pattern)).unwrap())
    }

    #[test]
    fn concatenation_markers() {
        let tokens = token::tokenize_text("ab(c)d*e").unwrap();
        let rendered = render_postfix(&insert_concatenation(tokens));
        assert_eq!(rendered, "a # b # ( c ) # d * # e");
    }

    #[test]
    fn no_marker_around_operators() {
        let tokens = token::tokenize_text("a|b").unwrap();
        assert_eq!(render_postfix(&insert_concatenation(tokens)), "a | b");
        let tokens = token::tokenize_text("a{1,2}b").unwrap();
        assert_eq!(render_postfix(&insert_concatenation(tokens)), "a {1,2} # b");
    }

    #[test]
    fn class_is_a_value() {
        let tokens = token::tokenize_text("a[bc]").unwrap();
        assert_eq!(render_postfix(&insert_concatenation(tokens)), "a # [bc]");
    }

    #[test]
    fn postfix_precedence() {
        assert_eq!(postfix("ab"), "a b #");
        assert_eq!(postfix("a|bc"), "a b c # |");
        assert_eq!(postfix("ab*"), "a b * #");
        assert_eq!(postfix("(a|b)*"), "a b | *");
        assert_eq!(postfix("wh.+"), "w h # . + #");
        assert_eq!(postfix("a{0,2}b+"), "a {0,2} b + #");
    }

    #[test]
    fn empty_pattern() {
        assert!(normalize(&Input::from("")).unwrap().is_empty());
    }

    #[test]
    fn mismatched_parentheses() {
        assert_eq!(
            normalize(&Input::from("a)")),
            Err(NfaError::MismatchedParentheses)
        );
        assert_eq!(
            normalize(&Input::from("(a")),
            Err(NfaError::MismatchedParentheses)
        );
    }
}
