//! The shunting-yard parser: pattern string -> [`Ast`].
//!
//! Ported from the teacher's `ParserState`/`Parser` trait machinery in
//! spirit (two stacks, `handle_*` methods, a precedence-driven reduce
//! loop), stripped of character-class state and the `Plus`/`Optional`
//! operators — this grammar's alphabet is any `char` other than `(`, `)`,
//! `|`, `*`, and its only repetition operator is `*`.

use automata::symbol::Symbol;
use std::result;
use thiserror::Error;

use crate::ast::Ast;

/// Alias for [`std::result::Result`] using [`ParseError`].
pub type Result<T> = result::Result<T, ParseError>;

/// An error returned when parsing an invalid pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A `)` with no matching `(`, or a `(` left open at end of input.
    #[error("unbalanced parentheses")]
    UnbalancedParenthesis,
    /// An operator was applied with too few operands: an empty pattern, a
    /// pattern of only operators, a leading/trailing `|`, or an empty
    /// group `()`.
    #[error("malformed expression")]
    MalformedExpression,
}

/// A token on the operator stack. `*` is never pushed here — it is
/// postfix and applies to the output stack immediately (see
/// [`ParserState::handle_star`]), so only the operators that wait for a
/// right-hand operand ever sit on this stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OpToken {
    LeftParen,
    Concatenation,
    Union,
}

impl OpToken {
    /// Higher binds tighter. `*` (applied eagerly, never on this stack)
    /// would sit above `Concatenation`; `LeftParen` has no precedence of
    /// its own — it is a barrier, handled separately from this ordering.
    fn precedence(self) -> u8 {
        match self {
            OpToken::LeftParen => 0,
            OpToken::Concatenation => 2,
            OpToken::Union => 1,
        }
    }
}

/// Parses `pattern` into an [`Ast`].
///
/// Implements the shunting-yard algorithm of SPEC_FULL.md §4.1: an
/// operator stack and an output stack of already-built `Ast` nodes, with
/// implicit concatenation inserted wherever an operand or `)` is
/// immediately followed by another operand or `(`.
pub fn parse(pattern: &str) -> Result<Ast> {
    let mut state = ParserState::new();

    for c in pattern.chars() {
        match c {
            '(' => state.handle_left_paren()?,
            ')' => state.handle_right_paren()?,
            '*' => state.handle_star()?,
            '|' => state.handle_union()?,
            _ => state.handle_literal(c)?,
        }
    }

    state.finish()
}

struct ParserState {
    output: Vec<Ast>,
    operators: Vec<OpToken>,
    just_saw_operand: bool,
    just_saw_close_paren: bool,
}

impl ParserState {
    fn new() -> Self {
        ParserState {
            output: Vec::new(),
            operators: Vec::new(),
            just_saw_operand: false,
            just_saw_close_paren: false,
        }
    }

    /// Pops and applies operators whose precedence is >= `incoming`'s,
    /// stopping at a `(` or an empty stack. Shared by every operator's
    /// entry point, per the precedence table in SPEC_FULL.md §4.1.
    fn reduce_while_higher_or_equal(&mut self, incoming: u8) -> Result<()> {
        while let Some(top) = self.operators.last() {
            if *top == OpToken::LeftParen || top.precedence() < incoming {
                break;
            }
            let op = self.operators.pop().unwrap();
            self.apply(op)?;
        }
        Ok(())
    }

    /// If the previous token was an operand or a `)`, implicit
    /// concatenation binds here before the new token is handled.
    fn maybe_insert_concatenation(&mut self) -> Result<()> {
        if self.just_saw_operand || self.just_saw_close_paren {
            self.reduce_while_higher_or_equal(OpToken::Concatenation.precedence())?;
            self.operators.push(OpToken::Concatenation);
        }
        Ok(())
    }

    fn handle_literal(&mut self, c: char) -> Result<()> {
        self.maybe_insert_concatenation()?;
        self.output.push(Ast::Value(Symbol::Literal(c)));
        self.just_saw_operand = true;
        self.just_saw_close_paren = false;
        Ok(())
    }

    fn handle_left_paren(&mut self) -> Result<()> {
        self.maybe_insert_concatenation()?;
        self.operators.push(OpToken::LeftParen);
        self.just_saw_operand = false;
        self.just_saw_close_paren = false;
        Ok(())
    }

    fn handle_right_paren(&mut self) -> Result<()> {
        loop {
            match self.operators.pop() {
                None => return Err(ParseError::UnbalancedParenthesis),
                Some(OpToken::LeftParen) => break,
                Some(op) => self.apply(op)?,
            }
        }
        self.just_saw_operand = false;
        self.just_saw_close_paren = true;
        Ok(())
    }

    /// `*` is postfix and binds tighter than anything that can sit on the
    /// operator stack, so it never goes on the stack itself: pop any
    /// equal-or-higher precedence operators (only another eagerly-applied
    /// `*` could qualify), then apply immediately to the output stack.
    fn handle_star(&mut self) -> Result<()> {
        const STAR_PRECEDENCE: u8 = 3;
        self.reduce_while_higher_or_equal(STAR_PRECEDENCE)?;
        let operand = self
            .output
            .pop()
            .ok_or(ParseError::MalformedExpression)?;
        self.output.push(Ast::Closure(Box::new(operand)));
        self.just_saw_operand = true;
        self.just_saw_close_paren = false;
        Ok(())
    }

    fn handle_union(&mut self) -> Result<()> {
        self.reduce_while_higher_or_equal(OpToken::Union.precedence())?;
        self.operators.push(OpToken::Union);
        self.just_saw_operand = false;
        self.just_saw_close_paren = false;
        Ok(())
    }

    fn apply(&mut self, op: OpToken) -> Result<()> {
        match op {
            OpToken::LeftParen => {
                unreachable!("parser: apply() is never called with an un-popped LeftParen")
            }
            OpToken::Concatenation => {
                let right = self.output.pop().ok_or(ParseError::MalformedExpression)?;
                let left = self.output.pop().ok_or(ParseError::MalformedExpression)?;
                self.output
                    .push(Ast::Concatenation(Box::new(left), Box::new(right)));
            }
            OpToken::Union => {
                let right = self.output.pop().ok_or(ParseError::MalformedExpression)?;
                let left = self.output.pop().ok_or(ParseError::MalformedExpression)?;
                self.output
                    .push(Ast::Alternation(Box::new(left), Box::new(right)));
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Ast> {
        while let Some(op) = self.operators.pop() {
            if op == OpToken::LeftParen {
                return Err(ParseError::UnbalancedParenthesis);
            }
            self.apply(op)?;
        }

        if self.output.len() != 1 {
            return Err(ParseError::MalformedExpression);
        }
        Ok(self.output.pop().unwrap())
    }
}
