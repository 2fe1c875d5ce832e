//! Tabular transition-table adapters.
//!
//! The on-disk format is CSV. The header row names the state column and then
//! lists the alphabet symbols in order; each data row holds a state label
//! followed by one cell per symbol containing a comma-separated list of
//! destination states (empty cell = no transition). Alphabet order in the
//! header is preserved as the column order of the output table.

mod reader;
mod writer;

pub use reader::{read_nfa, StateDesignation};
pub use writer::write_dfa;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::subset_construction;

    const SAMPLE: &str = "state,0,1\nq0,\"q0,q1\",q0\nq1,,q2\nq2,q2,q2\n";

    #[test]
    fn test_end_to_end_conversion() {
        let nfa = read_nfa(SAMPLE.as_bytes(), StateDesignation::Positional).unwrap();
        let dfa = subset_construction(&nfa).unwrap();

        let mut out = Vec::new();
        write_dfa(&mut out, &dfa).unwrap();

        let expected = "state,0,1\n\
                        q0,q0q1,q0\n\
                        q0q1,q0q1,q0q2\n\
                        q0q1q2,q0q1q2,q0q2\n\
                        q0q2,q0q1q2,q0q2\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_end_to_end_is_deterministic() {
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let nfa = read_nfa(SAMPLE.as_bytes(), StateDesignation::Positional).unwrap();
            let dfa = subset_construction(&nfa).unwrap();
            let mut out = Vec::new();
            write_dfa(&mut out, &dfa).unwrap();
            outputs.push(out);
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
