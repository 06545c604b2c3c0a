//! alncheck - randomized black-box checks for an external pairwise aligner
//!
//! Each iteration synthesizes two DNA sequences sharing a randomly placed
//! common region, injects five known substitutions or single-base deletions
//! into one of them, hands both to the aligner under test as FASTA files,
//! and checks the aligner's variant report against the injected ground
//! truth, restricted to the shared region.

pub mod driver;
pub mod errors;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod sequence;
pub mod sites;

// Re-export the main types and functions
pub use errors::HarnessError;
pub use report::{filter_to_shared, read_variants, verify, Verdict};
pub use runner::{run_iteration, IterationOutcome, RunConfig, RunTally};
pub use scenario::{Scenario, ScenarioKind};
pub use sequence::{delete_base, random_dna, reverse_complement, substitute_base};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complement_of_a_palindrome_is_itself() {
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT".to_vec());
        assert_eq!(reverse_complement(b"GAATTC"), b"GAATTC".to_vec());
    }
}
