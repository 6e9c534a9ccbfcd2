//! Aggregated round statistics for a course.

/// Scores recorded on a course, aggregated over all rounds.
///
/// Score fields are `None` when no round has a recorded score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundStats {
    pub total_rounds: i64,
    pub average_score: Option<f64>,
    pub best_score: Option<i32>,
    pub worst_score: Option<i32>,
}

impl RoundStats {
    /// Average score rounded to two decimals.
    pub fn rounded_average(&self) -> Option<f64> {
        self.average_score.map(|avg| (avg * 100.0).round() / 100.0)
    }
}
