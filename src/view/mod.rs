//! Display records for each page.
//!
//! Views only format: they read the dataset (and the session overlay where issue status
//! matters) and produce plain serializable records. Nothing here mutates state.

mod areas;
mod browse;
mod detail;
mod home;
mod moderation;
mod recommend;

pub use areas::{areas, AreaDetailCard, AreaSection, AreasView};
pub use browse::{browse, BrowseView, FilterOption, Suggestion, VenueCard};
pub use detail::{detail, CommentView, DetailLine, DetailView, SummaryItem, VenueDetail};
pub use home::{
    home, recent_activity, HomeView, Metrics, PopularArea, QuickLink, RecentCard, RECENT_LIMIT,
};
pub use moderation::{moderation, ModerationEntry, ModerationView};
pub use recommend::{recommend_form, CategoryChoices, Choice, RecommendForm, VenueOption};

use serde::Serialize;

use crate::{
    data::{CommentRatings, IssueStatus, RatingCategory, Ratings},
    rating::Mood,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBadge {
    pub category: RatingCategory,
    pub label: &'static str,
    pub mood: Option<Mood>,
    pub symbol: Option<&'static str>,
}

impl RatingBadge {
    fn new(category: RatingCategory, label: &'static str, value: Option<f64>) -> Self {
        let mood = value.map(Mood::from_rating);
        Self {
            category,
            label,
            mood,
            symbol: mood.map(Mood::symbol),
        }
    }
}

/// Full-label symbols for a complete rating vector.
pub(crate) fn rating_row(ratings: &Ratings) -> Vec<RatingBadge> {
    RatingCategory::ALL
        .into_iter()
        .map(|c| RatingBadge::new(c, c.label(), Some(ratings.get(c))))
        .collect()
}

/// Compact symbols for a comment; skipped categories carry no symbol.
pub(crate) fn comment_row(ratings: &CommentRatings) -> Vec<RatingBadge> {
    RatingCategory::ALL
        .into_iter()
        .map(|c| RatingBadge::new(c, c.initial(), ratings.get(c)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub class: &'static str,
    pub text: &'static str,
}

impl Badge {
    pub fn verification(verified: bool) -> Self {
        if verified {
            Self {
                class: "badge-verified",
                text: "Verified",
            }
        } else {
            Self {
                class: "badge-unverified",
                text: "Unverified",
            }
        }
    }

    pub fn issue(status: IssueStatus) -> Self {
        let class = match status {
            IssueStatus::Resolved => "resolved",
            IssueStatus::Unresolved => "unresolved",
        };
        Self {
            class,
            text: status.label(),
        }
    }
}

pub(crate) fn places_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} place{suffix}")
}

pub(crate) fn venue_link(id: &str) -> String {
    format!("restaurant.html?id={}", urlencoding::encode(id))
}

pub(crate) fn area_link(area: &str) -> String {
    format!("browse.html?area={}", urlencoding::encode(area))
}
