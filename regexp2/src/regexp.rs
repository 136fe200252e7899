//! The public facade: a compiled pattern you can test strings against.

use automata::nfa::Nfa;
use automata::simulate;

use crate::compile;
use crate::parser::{self, ParseError};

/// A compiled regular expression for matching strings in full — it
/// determines whether an entire input string is within the language the
/// pattern describes, not whether some substring matches.
#[derive(Clone, Debug)]
pub struct RegExp {
    expr: String,
    nfa: Nfa,
}

impl RegExp {
    /// Parses and compiles `expr` into a [`RegExp`].
    pub fn new(expr: &str) -> Result<Self, ParseError> {
        let ast = parser::parse(expr)?;
        let nfa = compile::build(&ast);
        Ok(RegExp {
            expr: expr.to_owned(),
            nfa,
        })
    }

    /// The source pattern this `RegExp` was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Whether `input`, in its entirety, is within the language described
    /// by this pattern.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        simulate::is_match(&self.nfa, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_and_matches() {
        let re = RegExp::new("a(b|c)*").unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("abcbc"));
        assert!(!re.is_match("ad"));
        assert_eq!(re.as_str(), "a(b|c)*");
    }

    #[test]
    fn propagates_parse_errors() {
        assert_eq!(
            RegExp::new("(a").unwrap_err(),
            ParseError::UnbalancedParenthesis
        );
        assert_eq!(RegExp::new("").unwrap_err(), ParseError::MalformedExpression);
    }
}
