//! Internal scoring of the art collections by the two curators.

use is_api_types::ItemKind;
use is_catalog::{PAINTINGS, PRINTS};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rater {
    Aly,
    Mohamad,
}

impl Rater {
    pub const ALL: [Rater; 2] = [Rater::Aly, Rater::Mohamad];

    pub fn id(self) -> &'static str {
        match self {
            Rater::Aly => "aly",
            Rater::Mohamad => "mohamad",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rater::Aly => "Aly",
            Rater::Mohamad => "Mohamad",
        }
    }
}

impl FromStr for Rater {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rater::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| RatingError::UnknownRater(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("unknown rater `{0}`")]
    UnknownRater(String),
    #[error("score {0} outside 1..=10")]
    OutOfRange(u8),
}

/// Persisted shape: `{ "OP3": { "aly": 7, "mohamad": 9 } }`.
pub type RatingsSnapshot = BTreeMap<String, BTreeMap<String, u8>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ratings {
    scores: BTreeMap<String, BTreeMap<Rater, u8>>,
}

impl Ratings {
    pub fn from_snapshot(snapshot: RatingsSnapshot) -> Self {
        let mut ratings = Self::default();
        for (code, by_rater) in snapshot {
            for (rater, score) in by_rater {
                let Ok(rater) = rater.parse::<Rater>() else {
                    tracing::warn!(code = %code, rater = %rater, "ignoring rating from unknown rater");
                    continue;
                };
                if (MIN_SCORE..=MAX_SCORE).contains(&score) {
                    ratings
                        .scores
                        .entry(code.to_ascii_uppercase())
                        .or_default()
                        .insert(rater, score);
                }
            }
        }
        ratings
    }

    pub fn snapshot(&self) -> RatingsSnapshot {
        self.scores
            .iter()
            .map(|(code, by_rater)| {
                let inner = by_rater
                    .iter()
                    .map(|(rater, score)| (rater.id().to_owned(), *score))
                    .collect();
                (code.clone(), inner)
            })
            .collect()
    }

    /// Record a score. Giving the same score again clears it. Returns the
    /// stored score afterwards.
    pub fn rate(&mut self, code: &str, rater: Rater, score: u8) -> Result<Option<u8>, RatingError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RatingError::OutOfRange(score));
        }
        let code = code.trim().to_ascii_uppercase();
        if self.score(&code, rater) == Some(score) {
            self.clear(&code, rater);
            return Ok(None);
        }
        self.scores.entry(code).or_default().insert(rater, score);
        Ok(Some(score))
    }

    pub fn clear(&mut self, code: &str, rater: Rater) -> bool {
        let code = code.trim().to_ascii_uppercase();
        let Some(by_rater) = self.scores.get_mut(&code) else {
            return false;
        };
        let removed = by_rater.remove(&rater).is_some();
        if by_rater.is_empty() {
            self.scores.remove(&code);
        }
        removed
    }

    pub fn reset(&mut self) {
        self.scores.clear();
    }

    pub fn score(&self, code: &str, rater: Rater) -> Option<u8> {
        self.scores
            .get(&code.trim().to_ascii_uppercase())
            .and_then(|by_rater| by_rater.get(&rater).copied())
    }

    pub fn average(&self, code: &str) -> Option<f32> {
        let values: Vec<u8> = Rater::ALL
            .into_iter()
            .filter_map(|r| self.score(code, r))
            .collect();
        if values.is_empty() {
            return None;
        }
        let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
        Some(sum as f32 / values.len() as f32)
    }

    /// Absolute disagreement; only defined when both raters scored.
    pub fn difference(&self, code: &str) -> Option<u8> {
        let aly = self.score(code, Rater::Aly)?;
        let mohamad = self.score(code, Rater::Mohamad)?;
        Some(aly.abs_diff(mohamad))
    }

    pub fn is_rated(&self, code: &str) -> bool {
        self.scores.contains_key(&code.trim().to_ascii_uppercase())
    }

    pub fn rated_count(&self) -> usize {
        self.scores.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingField {
    Code,
    Average,
    Rater(Rater),
    Difference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSort {
    pub field: RatingField,
    pub descending: bool,
}

impl Default for RatingSort {
    fn default() -> Self {
        Self {
            field: RatingField::Code,
            descending: false,
        }
    }
}

impl RatingSort {
    pub fn id(&self) -> String {
        let field = match self.field {
            RatingField::Code => "code",
            RatingField::Average => "average",
            RatingField::Rater(r) => r.id(),
            RatingField::Difference => "difference",
        };
        format!("{field}-{}", if self.descending { "desc" } else { "asc" })
    }

    pub fn label(&self) -> String {
        match (self.field, self.descending) {
            (RatingField::Code, false) => "Code A-Z".into(),
            (RatingField::Code, true) => "Code Z-A".into(),
            (RatingField::Average, true) => "Highest Average".into(),
            (RatingField::Average, false) => "Lowest Average".into(),
            (RatingField::Rater(r), true) => format!("{}'s Highest", r.name()),
            (RatingField::Rater(r), false) => format!("{}'s Lowest", r.name()),
            (RatingField::Difference, true) => "Biggest Disagreement".into(),
            (RatingField::Difference, false) => "Most Agreement".into(),
        }
    }

    pub fn options() -> Vec<RatingSort> {
        let mut fields = vec![RatingField::Code, RatingField::Average];
        fields.extend(Rater::ALL.map(RatingField::Rater));
        fields.push(RatingField::Difference);
        fields
            .into_iter()
            .flat_map(|field| {
                let code_first = field == RatingField::Code;
                [!code_first, code_first].map(|descending| RatingSort { field, descending })
            })
            .collect()
    }
}

impl FromStr for RatingSort {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.rsplit_once('-').unwrap_or((s, "asc"));
        let field = match field {
            "code" => RatingField::Code,
            "average" => RatingField::Average,
            "difference" => RatingField::Difference,
            other => RatingField::Rater(other.parse()?),
        };
        Ok(Self {
            field,
            descending: direction == "desc",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatedFilter {
    #[default]
    All,
    Rated,
    Unrated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatedArtwork {
    pub code: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub kind: ItemKind,
}

fn all_artworks() -> impl Iterator<Item = RatedArtwork> {
    PAINTINGS
        .iter()
        .map(|p| RatedArtwork {
            code: p.code,
            title: p.title,
            image: p.image,
            kind: ItemKind::Painting,
        })
        .chain(PRINTS.iter().map(|p| RatedArtwork {
            code: p.code,
            title: p.title,
            image: p.image,
            kind: ItemKind::Print,
        }))
}

/// Split `OP12` into (`OP`, 12) for natural ordering.
fn natural_code(code: &str) -> (&str, u32) {
    let split = code.find(|c: char| c.is_ascii_digit()).unwrap_or(code.len());
    let (prefix, digits) = code.split_at(split);
    (prefix, digits.parse().unwrap_or(0))
}

/// Artworks for the ratings board. Unscored values sort as lowest.
pub fn board(
    ratings: &Ratings,
    kind: Option<ItemKind>,
    filter: RatedFilter,
    sort: RatingSort,
) -> Vec<RatedArtwork> {
    let mut rows: Vec<RatedArtwork> = all_artworks()
        .filter(|art| kind.is_none_or(|k| art.kind == k))
        .filter(|art| match filter {
            RatedFilter::All => true,
            RatedFilter::Rated => ratings.is_rated(art.code),
            RatedFilter::Unrated => !ratings.is_rated(art.code),
        })
        .collect();

    let value = |art: &RatedArtwork| -> f32 {
        match sort.field {
            RatingField::Code => 0.0,
            RatingField::Average => ratings.average(art.code).unwrap_or(-1.0),
            RatingField::Rater(r) => ratings.score(art.code, r).map_or(-1.0, f32::from),
            RatingField::Difference => ratings.difference(art.code).map_or(-1.0, f32::from),
        }
    };

    rows.sort_by(|a, b| {
        let ordering = match sort.field {
            RatingField::Code => natural_code(a.code).cmp(&natural_code(b.code)),
            _ => value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal),
        };
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_clear_and_reject() {
        let mut ratings = Ratings::default();
        assert_eq!(ratings.rate("op3", Rater::Aly, 7), Ok(Some(7)));
        assert_eq!(ratings.score("OP3", Rater::Aly), Some(7));
        assert_eq!(ratings.rate("OP3", Rater::Aly, 7), Ok(None));
        assert!(!ratings.is_rated("OP3"));
        assert_eq!(ratings.rate("OP3", Rater::Aly, 11), Err(RatingError::OutOfRange(11)));
        assert_eq!(ratings.rate("OP3", Rater::Aly, 0), Err(RatingError::OutOfRange(0)));
    }

    #[test]
    fn average_and_difference() {
        let mut ratings = Ratings::default();
        ratings.rate("PR1", Rater::Aly, 4).unwrap();
        assert_eq!(ratings.average("PR1"), Some(4.0));
        assert_eq!(ratings.difference("PR1"), None);
        ratings.rate("PR1", Rater::Mohamad, 9).unwrap();
        assert_eq!(ratings.average("PR1"), Some(6.5));
        assert_eq!(ratings.difference("PR1"), Some(5));
        assert_eq!(ratings.rated_count(), 1);
    }

    #[test]
    fn snapshot_shape_and_sanitising() {
        let snapshot: RatingsSnapshot = serde_json::from_str(
            r#"{"OP3":{"aly":7,"mohamad":12},"PR2":{"zed":5},"op9":{"mohamad":3}}"#,
        )
        .unwrap();
        let ratings = Ratings::from_snapshot(snapshot);
        assert_eq!(ratings.score("OP3", Rater::Aly), Some(7));
        assert_eq!(ratings.score("OP3", Rater::Mohamad), None);
        assert!(!ratings.is_rated("PR2"));
        assert_eq!(ratings.score("OP9", Rater::Mohamad), Some(3));

        let json = serde_json::to_value(ratings.snapshot()).unwrap();
        assert_eq!(json["OP3"]["aly"], 7);
    }

    #[test]
    fn code_sort_is_natural() {
        let rows = board(
            &Ratings::default(),
            Some(ItemKind::Print),
            RatedFilter::All,
            RatingSort::default(),
        );
        let codes: Vec<&str> = rows.iter().take(3).map(|r| r.code).collect();
        assert_eq!(codes, vec!["PR1", "PR2", "PR3"]);
        assert_eq!(rows.len(), PRINTS.len());
    }

    #[test]
    fn average_sort_puts_unrated_last_when_descending() {
        let mut ratings = Ratings::default();
        ratings.rate("PR5", Rater::Aly, 9).unwrap();
        ratings.rate("PR2", Rater::Aly, 3).unwrap();
        let sort: RatingSort = "average-desc".parse().unwrap();
        let rows = board(&ratings, None, RatedFilter::All, sort);
        assert_eq!(rows[0].code, "PR5");
        assert_eq!(rows[1].code, "PR2");

        let rated = board(&ratings, None, RatedFilter::Rated, sort);
        assert_eq!(rated.len(), 2);
        let unrated = board(&ratings, None, RatedFilter::Unrated, sort);
        assert_eq!(unrated.len(), PAINTINGS.len() + PRINTS.len() - 2);
    }

    #[test]
    fn sort_ids_roundtrip() {
        let options = RatingSort::options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0].id(), "code-asc");
        for option in options {
            assert_eq!(option.id().parse::<RatingSort>().unwrap(), option);
        }
        assert_eq!(
            "aly-desc".parse::<RatingSort>().unwrap().label(),
            "Aly's Highest"
        );
    }
}
