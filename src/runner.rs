//! Per-iteration orchestration: synthesize, align, verify.

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;

use crate::driver::{record_name, write_fasta, AlignerCommand};
use crate::errors::HarnessError;
use crate::report::{read_variants, verify, Verdict};
use crate::scenario::Scenario;

/// Settings shared by every iteration of a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub aligner: AlignerCommand,
    pub work_dir: PathBuf,
}

/// What a single iteration produced.
#[derive(Debug)]
pub enum IterationOutcome {
    Completed(Verdict),
    /// The iteration could not be carried through: site search exhausted,
    /// unlaunchable aligner, or an unreadable report.
    Inconclusive(HarnessError),
}

/// Run one randomized iteration.
///
/// The work directory is cleared after a pass; failing and inconclusive
/// iterations leave their FASTA and report files behind for inspection.
pub fn run_iteration(rng: &mut StdRng, config: &RunConfig) -> IterationOutcome {
    match try_iteration(rng, config) {
        Ok(verdict) => IterationOutcome::Completed(verdict),
        Err(err) => IterationOutcome::Inconclusive(err),
    }
}

fn try_iteration(rng: &mut StdRng, config: &RunConfig) -> Result<Verdict, HarnessError> {
    let scenario = Scenario::random(rng)?;

    fs::create_dir_all(&config.work_dir)?;
    let seq1_path = config.work_dir.join("seq1.fasta");
    let seq2_path = config.work_dir.join("seq2.fasta");
    let variants_path = config.work_dir.join("variants.csv");

    write_fasta(
        &seq1_path,
        &record_name(1, scenario.seq1.len()),
        &scenario.seq1,
    )?;
    write_fasta(
        &seq2_path,
        &record_name(2, scenario.seq2.len()),
        &scenario.seq2,
    )?;

    config
        .aligner
        .run(&seq1_path, &seq2_path, &variants_path)?;

    let reported = read_variants(&variants_path, scenario.kind.report_tag())?;
    let verdict = verify(&scenario, &reported);

    if verdict.passed {
        fs::remove_dir_all(&config.work_dir)?;
    }
    Ok(verdict)
}

/// Running pass/fail/inconclusive counts across a run.
#[derive(Debug, Default)]
pub struct RunTally {
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
}

impl RunTally {
    pub fn record(&mut self, outcome: &IterationOutcome) {
        match outcome {
            IterationOutcome::Completed(verdict) if verdict.passed => self.passed += 1,
            IterationOutcome::Completed(_) => self.failed += 1,
            IterationOutcome::Inconclusive(_) => self.inconclusive += 1,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.inconclusive == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioKind;
    use pretty_assertions::assert_eq;

    fn verdict(passed: bool) -> IterationOutcome {
        IterationOutcome::Completed(Verdict {
            kind: ScenarioKind::Substitution,
            expected: Vec::new(),
            actual: Vec::new(),
            passed,
        })
    }

    #[test]
    fn tally_counts_each_outcome() {
        let mut tally = RunTally::default();
        tally.record(&verdict(true));
        tally.record(&verdict(true));
        tally.record(&verdict(false));
        tally.record(&IterationOutcome::Inconclusive(
            HarnessError::SiteSearchExhausted {
                low: 0,
                high: 1,
                attempts: 10,
            },
        ));
        assert_eq!(tally.passed, 2);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.inconclusive, 1);
        assert!(!tally.all_passed());

        let mut clean = RunTally::default();
        clean.record(&verdict(true));
        assert!(clean.all_passed());
    }
}
