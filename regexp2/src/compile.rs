//! Bridges an [`Ast`] to an [`automata::nfa::Nfa`] via Thompson's
//! construction.
//!
//! This is the only place in the crate that imports both `crate::ast` and
//! `automata::thompson` — it exists purely to translate [`PostorderStep`]
//! into [`Op`], keeping `automata` free of any notion of regex syntax.

use automata::nfa::Nfa;
use automata::thompson::{self, Op};

use crate::ast::{Ast, PostorderStep};

/// Compiles an [`Ast`] into an NFA by walking it in post-order and handing
/// each step to [`thompson::build`].
pub fn build(ast: &Ast) -> Nfa {
    thompson::build(ast.postorder().map(|step| match step {
        PostorderStep::Value(symbol) => Op::Literal(symbol),
        PostorderStep::Closure => Op::Closure,
        PostorderStep::Concatenation => Op::Concatenation,
        PostorderStep::Alternation => Op::Alternation,
    }))
}
