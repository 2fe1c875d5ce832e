//! CSV input adapter: parse a tabular transition listing into an NFA.

use crate::automaton::{Alphabet, Nfa};
use crate::error::Error;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io;

/// How the initial and final states of a parsed table are designated.
///
/// The explicit form is the canonical model; the positional form reproduces
/// the legacy fixture convention, where table layout doubles as automaton
/// structure.
#[derive(Debug, Clone)]
pub enum StateDesignation {
    /// First data row is the initial state and the last data row is the sole
    /// final state.
    Positional,
    /// Initial and final states are named explicitly.
    Explicit {
        initial: String,
        finals: Vec<String>,
    },
}

/// Parse an NFA from a CSV transition table.
///
/// The header row is `state, sym_1, sym_2, ...`; each data row is a state
/// label followed by one cell per symbol holding a comma-separated list of
/// destination labels. An empty cell (or empty list entry) contributes no
/// transition.
pub fn read_nfa<R: io::Read>(input: R, designation: StateDesignation) -> Result<Nfa, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(Error::EmptyTable),
    };
    if header.len() < 2 {
        return Err(Error::EmptyAlphabet);
    }

    let alphabet = Alphabet::new(header.iter().skip(1))?;
    let symbols: Vec<String> = alphabet.iter().map(str::to_string).collect();
    let expected_width = symbols.len() + 1;

    let mut nfa = Nfa::new(alphabet);
    let mut seen: HashSet<String> = HashSet::new();
    let mut first_state: Option<String> = None;
    let mut last_state: Option<String> = None;

    for (index, record) in records.enumerate() {
        let record = record?;
        let row = index + 2;

        if record.len() != expected_width {
            return Err(Error::RowWidth {
                row,
                expected: expected_width,
                found: record.len(),
            });
        }

        let state = &record[0];
        if state.is_empty() {
            return Err(Error::EmptyStateLabel { row });
        }
        if !seen.insert(state.to_string()) {
            return Err(Error::DuplicateState {
                row,
                state: state.to_string(),
            });
        }

        nfa.add_state(state);
        for (symbol, cell) in symbols.iter().zip(record.iter().skip(1)) {
            for target in cell.split(',').filter(|t| !t.is_empty()) {
                nfa.add_transition(state, symbol, target)?;
            }
        }

        first_state.get_or_insert_with(|| state.to_string());
        last_state = Some(state.to_string());
    }

    match designation {
        StateDesignation::Positional => {
            let (Some(first), Some(last)) = (first_state, last_state) else {
                return Err(Error::EmptyTable);
            };
            nfa.set_initial_state(&first);
            nfa.add_final_state(&last);
        }
        StateDesignation::Explicit { initial, finals } => {
            nfa.set_initial_state(&initial);
            for label in &finals {
                nfa.add_final_state(label);
            }
        }
    }

    Ok(nfa)
}
