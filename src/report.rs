//! Parsing and checking of the aligner's variant report.
//!
//! The report is treated as opaque apart from one shape: records whose first
//! field starts with the scenario's tag carry the 1-based sequence-1
//! coordinate in field 5 and the 1-based sequence-2 coordinate in field 10.

use std::path::Path;

use crate::errors::HarnessError;
use crate::scenario::{Scenario, ScenarioKind};

const SEQ1_FIELD: usize = 4;
const SEQ2_FIELD: usize = 9;

/// Extract the coordinate pairs of every record tagged for the scenario.
pub fn read_variants(path: &Path, tag: &str) -> Result<Vec<(u64, u64)>, HarnessError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let tagged = record.get(0).is_some_and(|field| field.starts_with(tag));
        if !tagged {
            continue;
        }
        pairs.push((
            coordinate(&record, SEQ1_FIELD)?,
            coordinate(&record, SEQ2_FIELD)?,
        ));
    }
    Ok(pairs)
}

fn coordinate(record: &csv::StringRecord, index: usize) -> Result<u64, HarnessError> {
    let field = record
        .get(index)
        .ok_or_else(|| HarnessError::TruncatedRecord {
            index,
            record: record.iter().collect::<Vec<_>>().join(","),
        })?;
    field
        .trim()
        .parse()
        .map_err(|_| HarnessError::BadCoordinate(field.to_string()))
}

/// Keep only pairs strictly inside the shared region in both frames.
///
/// The sequence-2 upper bound moves in by the number of deleted bases; the
/// region's tail end has shifted that far left in the shortened sequence.
pub fn filter_to_shared(pairs: &[(u64, u64)], scenario: &Scenario) -> Vec<(u64, u64)> {
    let seq1_low = scenario.seq1_flank as u64;
    let seq1_high = (scenario.seq1_flank + scenario.shared_len) as u64;
    let seq2_low = scenario.seq2_flank as u64;
    let seq2_high = (scenario.seq2_flank + scenario.shared_len - scenario.removed) as u64;
    pairs
        .iter()
        .copied()
        .filter(|&(a, b)| a > seq1_low && a < seq1_high && b > seq2_low && b < seq2_high)
        .collect()
}

/// Outcome of comparing ground truth against the report.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub kind: ScenarioKind,
    pub expected: Vec<(u64, u64)>,
    pub actual: Vec<(u64, u64)>,
    pub passed: bool,
}

/// Filter both coordinate sets to the shared region, sort them, and demand
/// that every expected pair was reported and nothing extra was. The equal
/// cardinality check catches spurious extras; the subset check catches
/// missed variants.
pub fn verify(scenario: &Scenario, reported: &[(u64, u64)]) -> Verdict {
    let mut expected = filter_to_shared(&scenario.expected, scenario);
    let mut actual = filter_to_shared(reported, scenario);
    expected.sort_unstable();
    actual.sort_unstable();

    let all_found = expected.iter().all(|pair| actual.contains(pair));
    let passed = all_found && expected.len() == actual.len();

    Verdict {
        kind: scenario.kind,
        expected,
        actual,
        passed,
    }
}
