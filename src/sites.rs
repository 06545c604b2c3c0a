//! Mutation-site selection.
//!
//! Sites are drawn by rejection sampling against the constraints each
//! mutation kind needs. Sampling is capped at a fixed attempt budget per
//! site; a degenerate interval surfaces as an error instead of spinning
//! forever.

use rand::Rng;

use crate::errors::HarnessError;

/// Draws allowed per site before the search is abandoned.
pub const MAX_SITE_ATTEMPTS: usize = 10_000;

/// Minimum distance between deletion sites.
pub const MIN_SITE_SPACING: usize = 10;

/// Draw `count` mutually distinct positions from `low..=high`.
pub fn distinct_sites<R: Rng>(
    low: usize,
    high: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, HarnessError> {
    let mut sites: Vec<usize> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut attempts = 0;
        loop {
            let pos = rng.gen_range(low..=high);
            if !sites.contains(&pos) {
                sites.push(pos);
                break;
            }
            attempts += 1;
            if attempts >= MAX_SITE_ATTEMPTS {
                return Err(HarnessError::SiteSearchExhausted {
                    low,
                    high,
                    attempts,
                });
            }
        }
    }
    Ok(sites)
}

/// Draw `count` deletion positions from `low..=high`, at least
/// [`MIN_SITE_SPACING`] apart and never on a base that repeats within two
/// positions on either side. Deleting next to an identical base admits more
/// than one equivalent alignment, so the reported coordinate would be
/// ambiguous.
///
/// Callers must keep `low` and `high` at least two bases inside `seq`.
pub fn deletion_sites<R: Rng>(
    seq: &[u8],
    low: usize,
    high: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, HarnessError> {
    let mut sites: Vec<usize> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut attempts = 0;
        loop {
            let pos = rng.gen_range(low..=high);
            if !near_existing(pos, &sites) && !ambiguous_site(seq, pos) {
                sites.push(pos);
                break;
            }
            attempts += 1;
            if attempts >= MAX_SITE_ATTEMPTS {
                return Err(HarnessError::SiteSearchExhausted {
                    low,
                    high,
                    attempts,
                });
            }
        }
    }
    Ok(sites)
}

fn near_existing(pos: usize, sites: &[usize]) -> bool {
    sites.iter().any(|&s| pos.abs_diff(s) < MIN_SITE_SPACING)
}

fn ambiguous_site(seq: &[u8], pos: usize) -> bool {
    let base = seq[pos];
    base == seq[pos - 1] || base == seq[pos + 1] || base == seq[pos - 2] || base == seq[pos + 2]
}

/// Map raw deletion positions (pre-deletion frame) to coordinates in the
/// shortened sequence: after sorting, every earlier deletion shifts the
/// later ones down by one.
pub fn collapse_after_deletions(sites: &[usize]) -> Vec<usize> {
    let mut sorted = sites.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().map(|(i, &pos)| pos - i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::random_dna;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn distinct_sites_are_unique_and_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let sites = distinct_sites(10, 40, 5, &mut rng).unwrap();
        assert_eq!(sites.len(), 5);
        let mut sorted = sites.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
        assert!(sites.iter().all(|p| (10..=40).contains(p)));
    }

    #[test]
    fn distinct_sites_fail_when_the_range_is_too_small() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = distinct_sites(10, 12, 5, &mut rng).unwrap_err();
        assert!(matches!(err, HarnessError::SiteSearchExhausted { .. }));
    }

    #[test]
    fn deletion_sites_keep_spacing_and_avoid_repeated_bases() {
        let mut rng = StdRng::seed_from_u64(6);
        let seq = random_dna(400, &mut rng);
        let sites = deletion_sites(&seq, 10, 380, 5, &mut rng).unwrap();
        assert_eq!(sites.len(), 5);
        for (i, &a) in sites.iter().enumerate() {
            for &b in &sites[i + 1..] {
                assert!(a.abs_diff(b) >= MIN_SITE_SPACING);
            }
            let base = seq[a];
            assert!(base != seq[a - 1] && base != seq[a + 1]);
            assert!(base != seq[a - 2] && base != seq[a + 2]);
        }
    }

    #[test]
    fn deletion_sites_fail_on_a_homopolymer() {
        let mut rng = StdRng::seed_from_u64(6);
        let seq = vec![b'A'; 100];
        let err = deletion_sites(&seq, 10, 90, 1, &mut rng).unwrap_err();
        assert!(matches!(err, HarnessError::SiteSearchExhausted { .. }));
    }

    #[test]
    fn collapse_shifts_each_later_site_down_by_its_rank() {
        let collapsed = collapse_after_deletions(&[300, 100, 200, 400, 500]);
        assert_eq!(collapsed, vec![100, 199, 298, 397, 496]);
    }

    #[test]
    fn collapsed_sites_stay_strictly_increasing() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let seq = random_dna(600, &mut rng);
            let sites = deletion_sites(&seq, 10, 580, 5, &mut rng).unwrap();
            let collapsed = collapse_after_deletions(&sites);
            assert!(collapsed.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
