//! Scenario assembly: a pair of sequences sharing a random region, with a
//! known set of injected mutations.
//!
//! Both sequences embed the same shared region between independently sized
//! unique flanks, so the same mutation sits at different absolute offsets in
//! each frame. The expected coordinate pairs recorded here are the ground
//! truth the aligner's report is checked against.

use rand::Rng;

use crate::errors::HarnessError;
use crate::sequence::{delete_base, random_dna, reverse_complement, substitute_base};
use crate::sites::{collapse_after_deletions, deletion_sites, distinct_sites};

/// Mutations injected per scenario.
pub const MUTATION_COUNT: usize = 5;

/// Flank lengths are drawn from `0..=MAX_FLANK`.
pub const MAX_FLANK: usize = 200;

/// Largest shared-region length.
pub const MAX_SHARED: usize = 1000;

/// Mutations stay this far inside the shared region's edges.
const EDGE_MARGIN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Substitution,
    Deletion,
}

impl ScenarioKind {
    /// Tag that opens matching lines in the aligner's variant report.
    pub fn report_tag(&self) -> &'static str {
        match self {
            ScenarioKind::Substitution => "SNP",
            ScenarioKind::Deletion => "indel",
        }
    }
}

/// A generated sequence pair with ground-truth mutation coordinates.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
    /// Bases before the shared region in sequence 1.
    pub seq1_flank: usize,
    /// Bases before the shared region in sequence 2.
    pub seq2_flank: usize,
    pub shared_len: usize,
    /// Total bases removed from sequence 2.
    pub removed: usize,
    /// Expected (seq1, seq2) coordinate pairs, 1-based, sorted.
    pub expected: Vec<(u64, u64)>,
}

impl Scenario {
    /// Draw a scenario of a random kind.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, HarnessError> {
        if rng.gen_bool(0.5) {
            Self::substitution(rng)
        } else {
            Self::deletion(rng)
        }
    }

    pub fn substitution<R: Rng>(rng: &mut R) -> Result<Self, HarnessError> {
        Self::build(ScenarioKind::Substitution, 100, rng)
    }

    /// The deletion scenario needs a longer shared region so five sites fit
    /// the spacing constraint.
    pub fn deletion<R: Rng>(rng: &mut R) -> Result<Self, HarnessError> {
        Self::build(ScenarioKind::Deletion, 200, rng)
    }

    fn build<R: Rng>(
        kind: ScenarioKind,
        min_shared: usize,
        rng: &mut R,
    ) -> Result<Self, HarnessError> {
        let seq1_flank = rng.gen_range(0..=MAX_FLANK);
        let seq2_flank = rng.gen_range(0..=MAX_FLANK);
        let shared_len = rng.gen_range(min_shared..=MAX_SHARED);
        let seq1_tail = rng.gen_range(0..=MAX_FLANK);
        let seq2_tail = rng.gen_range(0..=MAX_FLANK);

        let shared = random_dna(shared_len, rng);
        let mut seq1 = random_dna(seq1_flank, rng);
        seq1.extend_from_slice(&shared);
        seq1.extend(random_dna(seq1_tail, rng));
        let mut seq2 = random_dna(seq2_flank, rng);
        seq2.extend_from_slice(&shared);
        seq2.extend(random_dna(seq2_tail, rng));

        let low = seq2_flank + EDGE_MARGIN;
        let high = seq2_flank + shared_len - EDGE_MARGIN;
        let offset = seq1_flank as i64 - seq2_flank as i64;

        let (seq2, removed, mut expected) = match kind {
            ScenarioKind::Substitution => {
                let sites = distinct_sites(low, high, MUTATION_COUNT, rng)?;
                let mut mutated = seq2;
                for &pos in &sites {
                    mutated = substitute_base(&mutated, pos, rng);
                }
                let expected = sites
                    .iter()
                    .map(|&pos| (seq1_frame(pos, offset), pos as u64 + 1))
                    .collect::<Vec<_>>();
                (mutated, 0, expected)
            }
            ScenarioKind::Deletion => {
                let mut sites = deletion_sites(&seq2, low, high, MUTATION_COUNT, rng)?;
                // Highest offset first, so pending deletions stay in place.
                sites.sort_unstable_by(|a, b| b.cmp(a));
                let mut mutated = seq2;
                for &pos in &sites {
                    mutated = delete_base(&mutated, pos);
                }
                let mut seq1_side: Vec<u64> =
                    sites.iter().map(|&pos| seq1_frame(pos, offset)).collect();
                seq1_side.sort_unstable();
                // The aligner reports deletion coordinates relative to the
                // already-shortened sequence 2.
                let seq2_side: Vec<u64> = collapse_after_deletions(&sites)
                    .iter()
                    .map(|&pos| pos as u64 + 1)
                    .collect();
                let expected = seq1_side.into_iter().zip(seq2_side).collect::<Vec<_>>();
                (mutated, MUTATION_COUNT, expected)
            }
        };
        expected.sort_unstable();

        // Exercise the aligner's strand handling half the time. The expected
        // coordinates are unaffected.
        let seq1 = if rng.gen_bool(0.5) {
            reverse_complement(&seq1)
        } else {
            seq1
        };

        Ok(Scenario {
            kind,
            seq1,
            seq2,
            seq1_flank,
            seq2_flank,
            shared_len,
            removed,
            expected,
        })
    }
}

/// Translate a sequence-2 position to the 1-based sequence-1 frame.
fn seq1_frame(pos: usize, offset: i64) -> u64 {
    (pos as i64 + offset + 1) as u64
}
