use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Calendar,
    Card,
}

/// Position of an entry in the journal file, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One record as it appears in the journal JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalRecord {
    pub date: String,
    #[serde(rename = "imgUrl", default)]
    pub img_url: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: String,
    pub img_url: String,
    pub rating: f64,
    pub categories: Vec<String>,
    pub description: String,
}

impl JournalEntry {
    pub fn from_record(id: EntryId, record: JournalRecord) -> Self {
        Self {
            id,
            date: record.date,
            img_url: record.img_url,
            rating: record.rating,
            categories: record.categories,
            description: record.description,
        }
    }

    pub fn rating_band(&self) -> RatingBand {
        RatingBand::for_rating(self.rating)
    }
}

/// Colour bucket for a rating. Ratings are not clamped, so anything below the
/// middle band (including negative values) is `Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBand {
    High,
    Mid,
    Low,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingBand::High
        } else if rating >= 3.5 {
            RatingBand::Mid
        } else {
            RatingBand::Low
        }
    }
}

/// Renders a rating without a trailing `.0` for whole numbers.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.is_finite() {
        format!("{}", rating as i64)
    } else {
        format!("{rating}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bands_follow_thresholds() {
        assert_eq!(RatingBand::for_rating(5.0), RatingBand::High);
        assert_eq!(RatingBand::for_rating(4.5), RatingBand::High);
        assert_eq!(RatingBand::for_rating(4.4), RatingBand::Mid);
        assert_eq!(RatingBand::for_rating(3.5), RatingBand::Mid);
        assert_eq!(RatingBand::for_rating(3.0), RatingBand::Low);
        assert_eq!(RatingBand::for_rating(-1.0), RatingBand::Low);
        assert_eq!(RatingBand::for_rating(12.0), RatingBand::High);
    }

    #[test]
    fn formats_whole_and_fractional_ratings() {
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.5), "4.5");
    }

    #[test]
    fn record_uses_camel_case_image_key() {
        let record: JournalRecord = serde_json::from_str(
            r#"{"date":"01/03/2024","imgUrl":"a.jpg","rating":4,"categories":["wash"],"description":"ok"}"#,
        )
        .expect("valid record");
        let entry = JournalEntry::from_record(EntryId(3), record);
        assert_eq!(entry.img_url, "a.jpg");
        assert_eq!(entry.rating, 4.0);
        assert_eq!(entry.categories, vec!["wash".to_string()]);
        assert_eq!(entry.id, EntryId(3));
    }
}
