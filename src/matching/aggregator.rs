use std::{
    collections::HashMap,
    time::Instant,
};

use rayon::iter::{
    IntoParallelRefIterator,
    ParallelIterator,
};

use crate::core::{
    Difficulty,
    MatchCount,
    PopulationSnapshot,
    UserWordList,
    WordRef,
};

/// Candidate filtering and execution options for one aggregation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    pub exclude_self: bool,
    pub parallel: bool,
}

/// Counts, per difficulty bucket, the words `candidate` rated exactly like the target.
/// `target_index` is the target list keyed by word.
pub fn count_overlap(target_index: &HashMap<WordRef, Difficulty>, candidate: &UserWordList) -> MatchCount {
    let mut count = MatchCount::zero(candidate.user_id.clone());
    for entry in &candidate.entries {
        if target_index.get(&entry.word) == Some(&entry.difficulty) {
            count.increment(entry.difficulty);
        }
    }
    count
}

/// One `MatchCount` per candidate in snapshot order. The target is only
/// skipped when `exclude_self` is set.
pub fn aggregate(
    target: &UserWordList,
    population: &PopulationSnapshot,
    options: AggregateOptions,
) -> Vec<MatchCount> {
    let start = Instant::now();
    let target_index = target.index();

    let is_candidate =
        |list: &&UserWordList| !(options.exclude_self && list.user_id == target.user_id);

    // Rayon collects into a Vec in snapshot order
    let counts: Vec<MatchCount> = if options.parallel {
        population
            .lists()
            .par_iter()
            .filter(|list| is_candidate(list))
            .map(|list| count_overlap(&target_index, list))
            .collect()
    } else {
        population
            .iter()
            .filter(is_candidate)
            .map(|list| count_overlap(&target_index, list))
            .collect()
    };

    log::debug!(
        "Aggregated {} candidates against {} target words ({:.2}ms)",
        counts.len(),
        target.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    counts
}
