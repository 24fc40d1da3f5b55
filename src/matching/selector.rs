use crate::core::{
    Difficulty,
    MatchCount,
    MatchResult,
    Result,
    WordMatchError,
};

pub const DEFAULT_THRESHOLD: u32 = crate::settings::DEFAULT_THRESHOLD;

/// Candidate with the highest count in one bucket. Strictly greater replaces,
/// so the first candidate in scan order keeps a tie.
fn max_by_bucket(counts: &[MatchCount], difficulty: Difficulty) -> Option<&MatchCount> {
    let mut iter = counts.iter();
    let mut best = iter.next()?;
    for count in iter {
        if count.get(difficulty) > best.get(difficulty) {
            best = count;
        }
    }
    Some(best)
}

/// Picks the winning user and bucket.
///
/// Easy wins if its best count exceeds the threshold and both other bucket
/// maxima, then medium under the same rule. Otherwise the best difficult
/// candidate wins with no threshold check, even when every count is zero.
pub fn select_match(counts: &[MatchCount], threshold: u32) -> Result<MatchResult> {
    let (max_easy, max_medium, max_difficult) = match (
        max_by_bucket(counts, Difficulty::Easy),
        max_by_bucket(counts, Difficulty::Medium),
        max_by_bucket(counts, Difficulty::Difficult),
    ) {
        (Some(easy), Some(medium), Some(difficult)) => (easy, medium, difficult),
        _ => return Err(WordMatchError::EmptyPopulation),
    };

    let (winner, difficulty) = if max_easy.easy > threshold
        && max_easy.easy > max_medium.medium
        && max_easy.easy > max_difficult.difficult
    {
        (max_easy, Difficulty::Easy)
    } else if max_medium.medium > threshold
        && max_medium.medium > max_easy.easy
        && max_medium.medium > max_difficult.difficult
    {
        (max_medium, Difficulty::Medium)
    } else {
        (max_difficult, Difficulty::Difficult)
    };

    log::debug!(
        "Selected user {} on {} bucket (easy {}, medium {}, difficult {})",
        winner.user_id,
        difficulty,
        max_easy.easy,
        max_medium.medium,
        max_difficult.difficult
    );

    Ok(MatchResult { user_id: winner.user_id.clone(), difficulty })
}
