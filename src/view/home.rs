use chrono::NaiveDate;
use serde::Serialize;

use super::{area_link, places_label, RatingBadge};
use crate::{
    catalog::{AREAS, QUICK_CATEGORIES},
    data::{Comment, RatingCategory, Venue},
    dataset::Dataset,
};

pub const RECENT_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub metrics: Metrics,
    pub quick_categories: Vec<QuickLink>,
    pub popular_areas: Vec<PopularArea>,
    pub recent: Vec<RecentCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub restaurants: usize,
    pub reviews: usize,
    pub verified_percent: u32,
    pub verified_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub name: &'static str,
    pub emoji: &'static str,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularArea {
    pub name: &'static str,
    pub image: &'static str,
    pub count: usize,
    pub count_label: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentCard {
    pub venue_id: String,
    pub venue_name: String,
    pub avatar: String,
    pub user: String,
    pub date: NaiveDate,
    /// Short month and day, e.g. `Aug 5`.
    pub date_label: String,
    pub verified: bool,
    pub ratings: Vec<RatingBadge>,
    pub text: String,
}

pub fn home(dataset: &Dataset) -> HomeView {
    HomeView {
        metrics: metrics(dataset),
        quick_categories: QUICK_CATEGORIES
            .iter()
            .map(|category| QuickLink {
                name: category.name,
                emoji: category.emoji,
                link: format!("browse.html?type={}", urlencoding::encode(category.kind)),
            })
            .collect(),
        popular_areas: AREAS
            .iter()
            .map(|area| {
                let count = dataset.count_in_area(area.name);
                PopularArea {
                    name: area.name,
                    image: area.image,
                    count,
                    count_label: places_label(count),
                    link: area_link(area.name),
                }
            })
            .collect(),
        recent: recent_activity(dataset, RECENT_LIMIT)
            .into_iter()
            .map(|(venue, comment)| recent_card(venue, comment))
            .collect(),
    }
}

fn metrics(dataset: &Dataset) -> Metrics {
    let (reviews, verified) = dataset
        .comments()
        .fold((0, 0), |(reviews, verified), (_, _, comment)| {
            (reviews + 1, verified + usize::from(comment.verified))
        });
    let verified_percent = if reviews > 0 {
        (verified as f64 / reviews as f64 * 100.0).round() as u32
    } else {
        0
    };

    Metrics {
        restaurants: dataset.venues().len(),
        reviews,
        verified_percent,
        verified_label: format!("{verified_percent}%"),
    }
}

/// Newest comments across every venue. Comments on the same date keep dataset order.
pub fn recent_activity(dataset: &Dataset, limit: usize) -> Vec<(&Venue, &Comment)> {
    let mut all: Vec<(&Venue, &Comment)> = dataset
        .comments()
        .map(|(venue, _, comment)| (venue, comment))
        .collect();
    all.sort_by(|a, b| b.1.date.cmp(&a.1.date));
    all.truncate(limit);
    all
}

fn recent_card(venue: &Venue, comment: &Comment) -> RecentCard {
    let avatar = comment
        .user
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "M".to_string());
    let user = if comment.user.is_empty() {
        "Member".to_string()
    } else {
        comment.user.clone()
    };

    RecentCard {
        venue_id: venue.id.clone(),
        venue_name: venue.name.clone(),
        avatar,
        user,
        date: comment.date,
        date_label: comment.date.format("%b %-d").to_string(),
        verified: comment.verified,
        ratings: [
            (RatingCategory::Quality, "Quality"),
            (RatingCategory::Price, "Value"),
            (RatingCategory::Service, "Service"),
        ]
        .into_iter()
        .map(|(category, label)| RatingBadge::new(category, label, comment.ratings.get(category)))
        .collect(),
        text: comment.text.clone(),
    }
}
