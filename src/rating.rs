use serde::Serialize;

use crate::data::{RatingCategory, Ratings, Venue};

/// Per-category mean over the comments that rated that category. Categories nobody rated
/// keep the venue's own rating.
pub fn aggregate(venue: &Venue) -> Ratings {
    let mut result = venue.ratings;
    for category in RatingCategory::ALL {
        let (total, count) = venue
            .comments
            .iter()
            .filter_map(|comment| comment.ratings.get(category))
            .fold((0.0, 0usize), |(total, count), value| (total + value, count + 1));

        if count > 0 {
            result.set(category, total / count as f64);
        }
    }
    result
}

/// Rounded to one decimal for display. Rounds the exact stored value, so `4.35` (really
/// `4.3499..`) shows as `4.3`; exact halves such as `4.25` round up.
pub fn format_rating(value: f64) -> String {
    // exact hundredths-halves are the odd quarters; scaling by 4 is lossless
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).ceil() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Negative,
    Neutral,
    Positive,
}

impl Mood {
    /// Choices offered on the recommendation form, worst first.
    pub const CHOICES: [Self; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    /// `(.., 2.5]` negative, `(2.5, 4]` neutral, above 4 positive.
    pub fn from_rating(value: f64) -> Self {
        if value <= 2.5 {
            Self::Negative
        } else if value <= 4.0 {
            Self::Neutral
        } else {
            Self::Positive
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Negative => "☹",
            Self::Neutral => "😐",
            Self::Positive => "☺",
        }
    }

    /// Value stored by the recommendation form for this choice.
    pub fn form_value(self) -> u8 {
        match self {
            Self::Negative => 1,
            Self::Neutral => 2,
            Self::Positive => 3,
        }
    }
}
