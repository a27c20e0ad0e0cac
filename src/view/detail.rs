use chrono::NaiveDate;
use serde::Serialize;

use super::{comment_row, Badge, RatingBadge};
use crate::{
    data::{IssueStatus, RatingCategory, Venue},
    dataset::Dataset,
    query::{param, QueryParams},
    rating::{aggregate, format_rating},
    session::{CommentKey, SessionState},
};

pub const NOT_FOUND: &str = "Restaurant not found.";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailView {
    NotFound { message: &'static str },
    Found(Box<VenueDetail>),
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub details: Vec<DetailLine>,
    pub summary: Vec<SummaryItem>,
    pub comments: Vec<CommentView>,
    pub recommend_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryItem {
    pub category: RatingCategory,
    pub label: &'static str,
    pub average: f64,
    /// `average` to one decimal place.
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub index: usize,
    pub user: String,
    pub date: NaiveDate,
    pub header: String,
    pub verification: Badge,
    pub issue: Badge,
    pub ratings: Vec<RatingBadge>,
    pub text: String,
    /// Offered only while the issue is unresolved.
    pub can_resolve: bool,
}

pub fn detail(dataset: &Dataset, session: &SessionState, params: &QueryParams) -> DetailView {
    let id = param(params, "id");
    let Some(venue) = dataset.find(id) else {
        tracing::warn!("no venue with id {id:?}");
        return DetailView::NotFound { message: NOT_FOUND };
    };

    let summary = {
        let averages = aggregate(venue);
        RatingCategory::ALL
            .into_iter()
            .map(|category| SummaryItem {
                category,
                label: category.label(),
                average: averages.get(category),
                value: format_rating(averages.get(category)),
            })
            .collect()
    };

    let comments = venue
        .comments
        .iter()
        .enumerate()
        .map(|(index, comment)| {
            let status = session.issue_status(&CommentKey::new(&venue.id, index), comment);
            CommentView {
                index,
                user: comment.user.clone(),
                date: comment.date,
                header: format!("{} • {}", comment.user, comment.date),
                verification: Badge::verification(comment.verified),
                issue: Badge::issue(status),
                ratings: comment_row(&comment.ratings),
                text: comment.text.clone(),
                can_resolve: status == IssueStatus::Unresolved,
            }
        })
        .collect();

    DetailView::Found(Box::new(VenueDetail {
        id: venue.id.clone(),
        name: venue.name.clone(),
        image: venue.image.clone(),
        description: venue.description.clone(),
        details: details(venue),
        summary,
        comments,
        recommend_link: format!(
            "add_recommendation.html?id={}",
            urlencoding::encode(&venue.id)
        ),
    }))
}

fn details(venue: &Venue) -> Vec<DetailLine> {
    let line = |label, value: &str| DetailLine {
        label,
        value: value.to_string(),
        link: None,
    };

    let mut lines = Vec::new();
    if let Some(address) = &venue.address {
        lines.push(line("Address", address));
    }
    if let Some(phone) = &venue.phone {
        lines.push(line("Phone", phone));
    }
    if let Some(website) = &venue.website {
        lines.push(DetailLine {
            link: Some(website.clone()),
            ..line("Website", website)
        });
    }
    if let Some(tier) = venue.price_range {
        lines.push(line("Price range", tier.symbol()));
    }
    if let Some(hours) = &venue.opening_hours {
        lines.push(line("Opening hours", hours));
    }
    lines.push(line("Verified", if venue.verified { "Yes" } else { "No" }));
    lines
}
