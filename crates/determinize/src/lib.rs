//! NFA determinization via subset construction.
//!
//! An NFA over a small ordered alphabet is read from a tabular transition
//! listing, converted to an equivalent DFA by exploring the reachable
//! sets of NFA states, and written back out as a transition table. Composite
//! DFA states are identified by the set of NFA states they contain; the
//! canonical name (sorted member labels, concatenated) exists only for
//! serialization and row ordering.
//!
//! Given the same input, the conversion produces byte-identical output:
//! the frontier is processed in discovery order, symbols in alphabet order,
//! and output rows are sorted by canonical name.

pub mod automaton;
pub mod table;

mod error;

pub use automaton::{subset_construction, Alphabet, Dfa, Nfa, StateId, StateSet, SymbolId};
pub use error::Error;
