use serde::Serialize;

use crate::{
    data::RatingCategory,
    dataset::Dataset,
    query::{param, QueryParams},
    rating::Mood,
};

/// Category order on the recommendation form.
const FORM_CATEGORIES: [RatingCategory; 5] = [
    RatingCategory::Price,
    RatingCategory::Quality,
    RatingCategory::Service,
    RatingCategory::Menu,
    RatingCategory::Ambience,
];

#[derive(Debug, Clone, Serialize)]
pub struct RecommendForm {
    pub venues: Vec<VenueOption>,
    pub selected: Option<String>,
    pub categories: Vec<CategoryChoices>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryChoices {
    pub category: RatingCategory,
    pub label: &'static str,
    /// Name of the form field holding the chosen value.
    pub field: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub symbol: &'static str,
    pub value: u8,
}

pub fn recommend_form(dataset: &Dataset, params: &QueryParams) -> RecommendForm {
    let selected = dataset.find(param(params, "id")).map(|venue| venue.id.clone());

    RecommendForm {
        venues: dataset
            .venues()
            .iter()
            .map(|venue| VenueOption {
                id: venue.id.clone(),
                name: venue.name.clone(),
                selected: selected.as_deref() == Some(venue.id.as_str()),
            })
            .collect(),
        selected,
        categories: FORM_CATEGORIES
            .into_iter()
            .map(|category| CategoryChoices {
                category,
                label: category.label(),
                field: format!("{}-rating", category.key()),
                choices: Mood::CHOICES
                    .into_iter()
                    .map(|mood| Choice {
                        symbol: mood.symbol(),
                        value: mood.form_value(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
