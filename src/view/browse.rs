use serde::Serialize;

use super::{rating_row, venue_link, RatingBadge};
use crate::{
    data::{PriceTier, Venue},
    dataset::Dataset,
    filter::{suggest, FilterCriteria},
    query::QueryParams,
};

pub const NO_MATCH: &str = "No restaurants match your search criteria.";

const SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct BrowseView {
    pub criteria: FilterCriteria,
    /// Canonical query string for the active criteria.
    pub query: String,
    pub areas: Vec<FilterOption>,
    pub types: Vec<FilterOption>,
    pub price_ranges: Vec<FilterOption>,
    pub results: Vec<VenueCard>,
    pub message: Option<&'static str>,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub ratings: Vec<RatingBadge>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub link: String,
}

pub fn browse(dataset: &Dataset, params: &QueryParams) -> BrowseView {
    let criteria = FilterCriteria::from_params(params);
    let results: Vec<VenueCard> = criteria
        .apply(dataset.venues())
        .into_iter()
        .map(card)
        .collect();
    tracing::debug!(matched = results.len(), "browse filtered venues");

    let (message, suggestions) = if results.is_empty() {
        let suggestions = suggest(dataset.venues(), &criteria.q, SUGGESTION_LIMIT)
            .into_iter()
            .map(|venue| Suggestion {
                id: venue.id.clone(),
                name: venue.name.clone(),
                link: venue_link(&venue.id),
            })
            .collect();
        (Some(NO_MATCH), suggestions)
    } else {
        (None, Vec::new())
    };

    BrowseView {
        query: criteria.to_query_string(),
        areas: options(dataset.areas(), &criteria.area),
        types: options(dataset.kinds(), &criteria.kind),
        price_ranges: options(
            PriceTier::ALL.map(PriceTier::symbol).to_vec(),
            &criteria.price_range,
        ),
        results,
        message,
        suggestions,
        criteria,
    }
}

fn options(values: Vec<&str>, selected: &str) -> Vec<FilterOption> {
    values
        .into_iter()
        .map(|value| FilterOption {
            value: value.to_string(),
            selected: value == selected,
        })
        .collect()
}

fn card(venue: &Venue) -> VenueCard {
    VenueCard {
        id: venue.id.clone(),
        name: venue.name.clone(),
        description: venue.description.clone(),
        image: venue.image.clone(),
        ratings: rating_row(&venue.ratings),
        link: venue_link(&venue.id),
    }
}
