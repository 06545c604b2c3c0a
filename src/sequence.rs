//! Random DNA construction and single-base edit operations.

use rand::Rng;

/// The bases generated sequences are drawn from.
pub const BASES: [u8; 4] = *b"ACGT";

/// Generate `len` bases chosen uniformly from {A,C,G,T}.
pub fn random_dna<R: Rng>(len: usize, rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

/// Reverse-complement a nucleotide sequence.
///
/// Handles the full IUPAC alphabet in both cases plus gap characters;
/// anything unrecognized maps to `N`.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'R' => b'Y',
        b'Y' => b'R',
        b'S' => b'S',
        b'W' => b'W',
        b'K' => b'M',
        b'M' => b'K',
        b'r' => b'y',
        b'y' => b'r',
        b's' => b's',
        b'w' => b'w',
        b'k' => b'm',
        b'm' => b'k',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        b'N' => b'N',
        b'n' => b'n',
        b'.' => b'.',
        b'-' => b'-',
        b'?' => b'?',
        _ => b'N',
    }
}

/// Return a copy of `seq` with the base at `pos` replaced by a different
/// random base. The replacement is redrawn until it differs from the
/// original, so the output always carries exactly one mismatch.
pub fn substitute_base<R: Rng>(seq: &[u8], pos: usize, rng: &mut R) -> Vec<u8> {
    let mut out = seq.to_vec();
    let mut base = BASES[rng.gen_range(0..4)];
    while base == seq[pos] {
        base = BASES[rng.gen_range(0..4)];
    }
    out[pos] = base;
    out
}

/// Return a copy of `seq` with the single base at `pos` removed.
pub fn delete_base(seq: &[u8], pos: usize) -> Vec<u8> {
    let mut out = seq.to_vec();
    out.remove(pos);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(b"ACGT".as_slice(), b"ACGT".as_slice())]
    #[case(b"AAAA".as_slice(), b"TTTT".as_slice())]
    #[case(b"GATTACA".as_slice(), b"TGTAATC".as_slice())]
    #[case(b"RYSWKM".as_slice(), b"KMWSRY".as_slice())]
    fn reverse_complement_known_pairs(#[case] input: &[u8], #[case] expected: &[u8]) {
        assert_eq!(reverse_complement(input), expected);
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        let seq = b"ACGTacgtRYSWKMryswkmBDHVbdhvNn.-?";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq.to_vec());
    }

    #[test]
    fn unknown_bytes_complement_to_n() {
        assert_eq!(reverse_complement(b"AXG"), b"CNT".to_vec());
    }

    #[test]
    fn random_dna_uses_only_the_four_bases() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = random_dna(500, &mut rng);
        assert_eq!(seq.len(), 500);
        assert!(seq.iter().all(|b| BASES.contains(b)));
    }

    #[test]
    fn random_dna_is_reproducible_from_the_seed() {
        let a = random_dna(100, &mut StdRng::seed_from_u64(7));
        let b = random_dna(100, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn substitute_base_changes_exactly_one_position() {
        let mut rng = StdRng::seed_from_u64(2);
        let seq = random_dna(200, &mut rng);
        for pos in [0, 57, 199] {
            let out = substitute_base(&seq, pos, &mut rng);
            assert_eq!(out.len(), seq.len());
            assert_ne!(out[pos], seq[pos]);
            let diffs = seq.iter().zip(&out).filter(|(a, b)| a != b).count();
            assert_eq!(diffs, 1);
        }
    }

    #[test]
    fn delete_base_removes_exactly_one_base() {
        let seq = b"ACGTACGT".to_vec();
        assert_eq!(delete_base(&seq, 3), b"ACGACGT".to_vec());
        assert_eq!(delete_base(&seq, 0), b"CGTACGT".to_vec());
        assert_eq!(delete_base(&seq, 7), b"ACGTACG".to_vec());
    }
}
