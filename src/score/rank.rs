//! Top-N selection with location labels.

use std::fmt;

use serde::Serialize;

use crate::{
    district::{DistrictId, LocationLabels},
    score::{aggregate::by_score, ScoreStatus, ScoreTable},
};

/// Number of districts shown when no top-N is configured.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDistrict {
    /// 1-based position.
    pub rank: usize,
    pub district: DistrictId,
    pub label: String,
    /// Total score rounded to 3 decimals.
    pub score: f64,
}

impl fmt::Display for RankedDistrict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. District {} ({}): {:.3}", self.rank, self.district, self.label, self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingStatus {
    Ranked,
    /// All weights were zero; entries are tied at 0.0 and ordered by id.
    NoPreferences,
    /// No district has a defined score.
    NoValidScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub entries: Vec<RankedDistrict>,
    /// Districts left out because their score is undefined, by ascending id.
    pub excluded: Vec<DistrictId>,
    pub status: RankingStatus,
}

impl Ranking {
    /// True when some districts could not be ranked.
    #[inline] pub fn is_incomplete(&self) -> bool { !self.excluded.is_empty() }
}

/// Pick the `top_n` best districts with defined scores.
///
/// Sorting is by score descending with ties broken by ascending district id,
/// so identical input always ranks identically.
pub fn rank(table: &ScoreTable, labels: &LocationLabels, top_n: usize) -> Ranking {
    let mut scored: Vec<(DistrictId, f64)> = table.rows.iter()
        .filter_map(|row| row.total_score.map(|score| (row.district, score)))
        .collect();
    scored.sort_by(|a, b| by_score((a.0, Some(a.1)), (b.0, Some(b.1))));

    let entries: Vec<RankedDistrict> = scored.into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, (district, score))| RankedDistrict {
            rank: i + 1,
            district,
            label: labels.label(district),
            score: round_score(score),
        })
        .collect();

    let excluded = table.incomplete();
    let status = if excluded.len() == table.len() {
        RankingStatus::NoValidScores
    } else if table.status == ScoreStatus::NoPreferences {
        RankingStatus::NoPreferences
    } else {
        RankingStatus::Ranked
    };

    Ranking { entries, excluded, status }
}

/// Round to 3 decimal places for display.
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
