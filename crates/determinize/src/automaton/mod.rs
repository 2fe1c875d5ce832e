//! Finite automata and determinization.
//!
//! This module provides NFA and DFA implementations with:
//! - String state labels interned to dense ids
//! - Subset construction (NFA to DFA conversion) with deterministic
//!   exploration order and canonical composite-state naming
//! - Acceptance simulation for both machine kinds

mod dfa;
mod nfa;
mod state;
mod subset_construction;
mod symbol;

pub use dfa::Dfa;
pub use nfa::Nfa;
pub use state::{StateId, StateInterner, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{Alphabet, SymbolId};
