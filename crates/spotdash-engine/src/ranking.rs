//! Top-N ranking over grouped rows.
//!
//! Two scoring rules exist side by side (row count vs. distinct secondary
//! values) because the product uses both; see [`crate::RankingProfile`].

use std::collections::{HashMap, HashSet};

use spotdash_core::SpotRecord;

use crate::result::RankEntry;

/// Rankings are truncated to the top ten entries.
pub const RANKING_LIMIT: usize = 10;

/// Accumulates per-key state while preserving first-encounter key order,
/// so that the later stable sort tie-breaks by input order.
struct Groups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> Groups<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut V {
        let idx = *self.index.entry(key.to_string()).or_insert_with(|| {
            self.entries.push((key.to_string(), V::default()));
            self.entries.len() - 1
        });
        &mut self.entries[idx].1
    }
}

/// Rank groups by how many rows fall into each.
///
/// Groups by `key`, counts occurrences, sorts descending (stable, so ties
/// keep first-encounter order) and truncates to [`RANKING_LIMIT`].
pub fn rank_by_row_count<'a, K>(rows: &'a [SpotRecord], key: K) -> Vec<RankEntry>
where
    K: Fn(&'a SpotRecord) -> &'a str,
{
    let mut groups: Groups<usize> = Groups::new();
    for row in rows {
        *groups.entry(key(row)) += 1;
    }
    truncate_ranked(groups.entries)
}

/// Rank groups by the number of distinct secondary values seen in each.
///
/// Groups by `key` and collects the set of `distinct` values per group;
/// the group's score is the set's cardinality, not its row count.
pub fn rank_by_distinct_field<'a, K, D>(
    rows: &'a [SpotRecord],
    key: K,
    distinct: D,
) -> Vec<RankEntry>
where
    K: Fn(&'a SpotRecord) -> &'a str,
    D: Fn(&'a SpotRecord) -> &'a str,
{
    let mut groups: Groups<HashSet<&str>> = Groups::new();
    for row in rows {
        groups.entry(key(row)).insert(distinct(row));
    }
    let counted = groups
        .entries
        .into_iter()
        .map(|(label, set)| (label, set.len()))
        .collect();
    truncate_ranked(counted)
}

fn truncate_ranked(entries: Vec<(String, usize)>) -> Vec<RankEntry> {
    let mut ranked: Vec<RankEntry> = entries
        .into_iter()
        .map(|(label, count)| RankEntry { label, count })
        .collect();
    // Vec::sort_by is stable: equal counts keep first-encounter order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(RANKING_LIMIT);
    ranked
}
