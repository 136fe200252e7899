#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

//! An arena-based nondeterministic finite automaton engine.
//!
//! This crate knows nothing about regular expression syntax. It provides
//! three things: a `Symbol` alphabet of single characters plus epsilon
//! (`symbol`), an NFA state arena with Thompson's construction
//! (`nfa`, `thompson`), and a backtracking simulator (`simulate`). The
//! `regexp2` crate is the only consumer that knows how to turn a pattern
//! string into the `Op` stream `thompson::build` expects.

pub mod nfa;
pub mod simulate;
pub mod symbol;
pub mod thompson;

pub use nfa::Nfa;
pub use simulate::is_match;
pub use symbol::Symbol;
