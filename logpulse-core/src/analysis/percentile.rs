/// Percentile of a sorted sample set, linearly interpolated between the two
/// closest ranks.
///
/// `pct` is in `0.0..=100.0`. Returns `None` for an empty sample set.
pub fn percentile(sorted: &[u64], pct: f64) -> Option<f64> {
    let (first, last) = (sorted.first()?, sorted.last()?);
    let pct = pct.clamp(0.0, 100.0);

    if sorted.len() == 1 {
        return Some(*first as f64);
    }
    if pct >= 100.0 {
        return Some(*last as f64);
    }

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    let (lo_v, hi_v) = (sorted[lo] as f64, sorted[hi] as f64);
    Some(lo_v + (hi_v - lo_v) * frac)
}

/// Sorts `samples` in place and returns the requested percentiles, in order.
pub fn percentiles(samples: &mut [u64], pcts: &[f64]) -> Vec<Option<f64>> {
    samples.sort_unstable();
    pcts.iter().map(|p| percentile(samples, *p)).collect()
}
