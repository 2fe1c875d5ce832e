//! CSV output adapter: serialize a DFA's transition table.

use crate::automaton::Dfa;
use crate::error::Error;
use csv::Writer;
use std::io;

/// Write a DFA as a CSV transition table.
///
/// The header row is `state, sym_1, sym_2, ...` with symbols in alphabet
/// order; one row follows per DFA state, sorted by canonical name, holding
/// the destination state's canonical name per symbol. After full subset
/// construction every cell is populated; an empty destination cell would
/// only appear for a transition that was never recorded.
pub fn write_dfa<W: io::Write>(output: W, dfa: &Dfa) -> Result<(), Error> {
    let mut writer = Writer::from_writer(output);

    let mut header = vec!["state".to_string()];
    header.extend(dfa.alphabet().iter().map(str::to_string));
    writer.write_record(&header)?;

    for state in dfa.states_by_name() {
        let mut row = vec![dfa.canonical_name(state).to_string()];
        for symbol in dfa.alphabet().ids() {
            let cell = dfa
                .transition(state, symbol)
                .map(|target| dfa.canonical_name(target).to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{subset_construction, Alphabet, Nfa};

    #[test]
    fn test_write_rows_sorted_by_name() {
        // z -0-> z, z -1-> a, a -0-> a, a -1-> z; initial z, final a.
        // Discovery order is z then a, but output order is lexicographic.
        let alphabet = Alphabet::new(["0", "1"]).unwrap();
        let mut nfa = Nfa::new(alphabet);
        nfa.add_transition("z", "0", "z").unwrap();
        nfa.add_transition("z", "1", "a").unwrap();
        nfa.add_transition("a", "0", "a").unwrap();
        nfa.add_transition("a", "1", "z").unwrap();
        nfa.set_initial_state("z");
        nfa.add_final_state("a");

        let dfa = subset_construction(&nfa).unwrap();
        let mut out = Vec::new();
        write_dfa(&mut out, &dfa).unwrap();

        let expected = "state,0,1\na,a,z\nz,z,a\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_dead_state_row_first() {
        // b has no moves, so the dead state appears and its empty name
        // sorts ahead of every other row.
        let alphabet = Alphabet::new(["0", "1"]).unwrap();
        let mut nfa = Nfa::new(alphabet);
        nfa.add_transition("a", "0", "b").unwrap();
        nfa.add_transition("a", "1", "a").unwrap();
        nfa.set_initial_state("a");
        nfa.add_final_state("b");

        let dfa = subset_construction(&nfa).unwrap();
        let mut out = Vec::new();
        write_dfa(&mut out, &dfa).unwrap();

        let expected = "state,0,1\n,,\na,b,a\nb,,\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
