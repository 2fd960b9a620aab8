//! Coalescing of inclusive integer ranges.
//!
//! Ranges are the items of a [`Grouping`]; walking them by start, each range
//! is joined to the running group whenever it overlaps that group's reach.

use std::ops::RangeInclusive;

use crate::Grouping;

/// Merges overlapping ranges and returns them ordered by start.
///
/// Ranges that merely touch (`3..=5`, `6..=8`) stay separate; empty ranges
/// (`start > end`) are dropped.
pub fn coalesce(ranges: &[RangeInclusive<u64>]) -> Vec<RangeInclusive<u64>> {
    let mut order = ranges
        .iter()
        .enumerate()
        .filter(|(_, range)| !range.is_empty())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    order.sort_by_key(|&i| *ranges[i].start());

    // Item `k` stands for `ranges[order[k]]`.
    let mut grouping = Grouping::new(0..order.len());
    let mut reach: Option<(usize, u64)> = None;

    for (k, &i) in order.iter().enumerate() {
        let (start, end) = (*ranges[i].start(), *ranges[i].end());
        reach = match reach {
            Some((anchor, furthest)) if start <= furthest => {
                grouping.union_indices(anchor, k);
                Some((anchor, furthest.max(end)))
            }
            _ => Some((k, end)),
        };
    }

    let mut merged = grouping
        .groups()
        .into_iter()
        .filter_map(|group| {
            let spans = group.members.iter().map(|&&k| &ranges[order[k]]);
            let start = spans.clone().map(|r| *r.start()).min()?;
            let end = spans.map(|r| *r.end()).max()?;
            Some(start..=end)
        })
        .collect::<Vec<_>>();
    merged.sort_by_key(|r| *r.start());
    merged
}

/// Counts the integers covered by at least one range.
///
/// Widened to `u128`: `0..=u64::MAX` alone holds one more integer than `u64` can count.
pub fn covered_len(ranges: &[RangeInclusive<u64>]) -> u128 {
    coalesce(ranges)
        .iter()
        .map(|r| u128::from(r.end() - r.start()) + 1)
        .sum()
}
