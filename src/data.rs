use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Price,
    Quality,
    Service,
    Ambience,
    Menu,
}

impl RatingCategory {
    /// Display order used by every rating row.
    pub const ALL: [Self; 5] = [
        Self::Price,
        Self::Quality,
        Self::Service,
        Self::Ambience,
        Self::Menu,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Quality => "quality",
            Self::Service => "service",
            Self::Ambience => "ambience",
            Self::Menu => "menu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Quality => "Quality",
            Self::Service => "Service",
            Self::Ambience => "Ambience",
            Self::Menu => "Menu",
        }
    }

    /// One letter label used on compact comment rows.
    pub fn initial(self) -> &'static str {
        &self.label()[..1]
    }
}

/// A complete rating vector, every category in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub price: f64,
    pub quality: f64,
    pub service: f64,
    pub ambience: f64,
    pub menu: f64,
}

impl Ratings {
    pub fn get(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::Price => self.price,
            RatingCategory::Quality => self.quality,
            RatingCategory::Service => self.service,
            RatingCategory::Ambience => self.ambience,
            RatingCategory::Menu => self.menu,
        }
    }

    pub fn set(&mut self, category: RatingCategory, value: f64) {
        match category {
            RatingCategory::Price => self.price = value,
            RatingCategory::Quality => self.quality = value,
            RatingCategory::Service => self.service = value,
            RatingCategory::Ambience => self.ambience = value,
            RatingCategory::Menu => self.menu = value,
        }
    }
}

/// Ratings left by a commenter. A commenter may skip categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentRatings {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quality: Option<f64>,
    #[serde(default)]
    pub service: Option<f64>,
    #[serde(default)]
    pub ambience: Option<f64>,
    #[serde(default)]
    pub menu: Option<f64>,
}

impl CommentRatings {
    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Price => self.price,
            RatingCategory::Quality => self.quality,
            RatingCategory::Service => self.service,
            RatingCategory::Ambience => self.ambience,
            RatingCategory::Menu => self.menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "£")]
    Cheap,
    #[serde(rename = "££")]
    Moderate,
    #[serde(rename = "£££")]
    Expensive,
}

impl PriceTier {
    pub const ALL: [Self; 3] = [Self::Cheap, Self::Moderate, Self::Expensive];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cheap => "£",
            Self::Moderate => "££",
            Self::Expensive => "£££",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    #[default]
    Unresolved,
    Resolved,
}

impl IssueStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unresolved => "Unresolved",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub area: String,
    pub postcode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// path to image
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub price_range: Option<PriceTier>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    pub verified: bool,
    pub ratings: Ratings,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub ratings: CommentRatings,
    /// The commenter's identity or purchase was confirmed.
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub issue_status: IssueStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_tiers_are_ordered() {
        assert!(PriceTier::Cheap < PriceTier::Moderate);
        assert!(PriceTier::Moderate < PriceTier::Expensive);
    }

    #[test]
    fn price_tier_uses_pound_symbols() {
        let tier: PriceTier = serde_json::from_str("\"£££\"").unwrap();
        assert_eq!(tier, PriceTier::Expensive);
        assert_eq!(PriceTier::Moderate.symbol(), "££");
    }

    #[test]
    fn missing_issue_status_is_unresolved() {
        let comment: Comment = serde_json::from_value(serde_json::json!({
            "user": "Gail",
            "date": "2025-01-09",
            "text": "Decent soup.",
            "ratings": { "quality": 3 }
        }))
        .unwrap();

        assert_eq!(comment.issue_status, IssueStatus::Unresolved);
        assert_eq!(comment.ratings.get(RatingCategory::Quality), Some(3.0));
        assert_eq!(comment.ratings.get(RatingCategory::Menu), None);
        assert!(!comment.verified);
    }

    #[test]
    fn category_initials() {
        let initials: Vec<_> = RatingCategory::ALL.iter().map(|c| c.initial()).collect();
        assert_eq!(initials, ["P", "Q", "S", "A", "M"]);
    }
}
