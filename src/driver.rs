//! FASTA persistence and aligner invocation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::HarnessError;

/// Column width for FASTA sequence lines.
const FASTA_WIDTH: usize = 60;

/// Assembly-graph style record name carrying the length and a fixed coverage.
pub fn record_name(index: usize, len: usize) -> String {
    format!("NODE_{index}_length_{len}_cov_100.0")
}

/// Write a single-record FASTA file, wrapping the sequence at 60 columns.
pub fn write_fasta(path: &Path, name: &str, seq: &[u8]) -> Result<(), HarnessError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, ">{name}")?;
    for chunk in seq.chunks(FASTA_WIDTH) {
        out.write_all(chunk)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// The external aligner and the fixed parameters it is driven with.
#[derive(Debug, Clone)]
pub struct AlignerCommand {
    pub exe: PathBuf,
    pub min_alignment_length: u32,
    pub min_identity: u32,
}

impl AlignerCommand {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        AlignerCommand {
            exe: exe.into(),
            min_alignment_length: 50,
            min_identity: 90,
        }
    }

    /// Align the two FASTA files, directing the variant report to `variants`.
    ///
    /// The aligner's streams and exit status are discarded; a misbehaving
    /// aligner shows up downstream as a verification mismatch. Only a
    /// process that cannot be launched at all is an error here.
    pub fn run(&self, seq1: &Path, seq2: &Path, variants: &Path) -> Result<(), HarnessError> {
        let _ = Command::new(&self.exe)
            .arg(seq1)
            .arg(seq2)
            .arg("-l")
            .arg(self.min_alignment_length.to_string())
            .arg("-i")
            .arg(self.min_identity.to_string())
            .arg("-v")
            .arg(variants)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(())
    }
}
