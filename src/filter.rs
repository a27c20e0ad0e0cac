use derive_builder::Builder;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use serde::Serialize;

use crate::{
    data::Venue,
    query::{param, QueryParams},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[builder(default, setter(into))]
pub struct FilterCriteria {
    /// Case-insensitive substring of the venue name.
    pub q: String,
    pub area: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price_range: String,
    pub verified: bool,
    /// Case-insensitive substring of the area or the postcode.
    pub location: String,
}

impl FilterCriteria {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            q: param(params, "q").to_string(),
            area: param(params, "area").to_string(),
            kind: param(params, "type").to_string(),
            price_range: param(params, "price_range").to_string(),
            verified: param(params, "verified") == "true",
            location: param(params, "location").to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let q = self.q.to_lowercase();
        let location = self.location.to_lowercase();
        let stages = self.stages(&q, &location);
        stages.iter().all(|stage| stage(venue))
    }

    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        let q = self.q.to_lowercase();
        let location = self.location.to_lowercase();
        let stages = self.stages(&q, &location);

        let mut filtered: Vec<&Venue> = venues.iter().collect();
        for stage in &stages {
            filtered.retain(|venue| stage(*venue));
        }
        filtered
    }

    /// The active predicates, in the order they narrow the list.
    fn stages<'s>(
        &'s self,
        q: &'s str,
        location: &'s str,
    ) -> Vec<Box<dyn Fn(&Venue) -> bool + 's>> {
        let mut stages: Vec<Box<dyn Fn(&Venue) -> bool + 's>> = Vec::new();
        if !q.is_empty() {
            stages.push(Box::new(move |v: &Venue| v.name.to_lowercase().contains(q)));
        }
        if !self.area.is_empty() {
            stages.push(Box::new(move |v: &Venue| v.area == self.area));
        }
        if !self.kind.is_empty() {
            stages.push(Box::new(move |v: &Venue| v.kind == self.kind));
        }
        if !self.price_range.is_empty() {
            stages.push(Box::new(move |v: &Venue| {
                v.price_range.map(|tier| tier.symbol()) == Some(self.price_range.as_str())
            }));
        }
        if self.verified {
            stages.push(Box::new(move |v: &Venue| v.verified));
        }
        if !location.is_empty() {
            stages.push(Box::new(move |v: &Venue| {
                v.area.to_lowercase().contains(location)
                    || v.postcode.to_lowercase().contains(location)
            }));
        }
        stages
    }

    /// Canonical query string for these criteria, suitable for a browse link.
    pub fn to_query_string(&self) -> String {
        let verified = if self.verified { "true" } else { "" };
        [
            ("q", self.q.as_str()),
            ("location", self.location.as_str()),
            ("area", self.area.as_str()),
            ("type", self.kind.as_str()),
            ("price_range", self.price_range.as_str()),
            ("verified", verified),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// Venue names closest to `term`, best first. Used when a search finds nothing.
pub fn suggest<'a>(venues: &'a [Venue], term: &str, limit: usize) -> Vec<&'a Venue> {
    if term.trim().is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &Venue)> = venues
        .iter()
        .filter_map(|venue| {
            matcher
                .fuzzy_match(&venue.name, term.trim())
                .map(|score| (score, venue))
        })
        .collect();
    // stable, so equal scores keep dataset order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, venue)| venue).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Dataset, query::parse_query};

    fn ids(venues: &[&Venue]) -> Vec<String> {
        venues.iter().map(|v| v.id.clone()).collect()
    }

    #[test]
    fn no_criteria_keeps_everything_in_order() {
        let dataset = Dataset::embedded().unwrap();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(
            ids(&criteria.apply(dataset.venues())),
            ["coffee-corner", "seafood-bistro", "curry-house"]
        );
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let dataset = Dataset::embedded().unwrap();
        let criteria = FilterCriteriaBuilder::default().q("HOUSE").build().unwrap();
        assert_eq!(ids(&criteria.apply(dataset.venues())), ["curry-house"]);
    }

    #[test]
    fn area_and_type_are_exact() {
        let dataset = Dataset::embedded().unwrap();
        let criteria = FilterCriteriaBuilder::default().area("leith").build().unwrap();
        assert!(criteria.apply(dataset.venues()).is_empty());

        let criteria = FilterCriteriaBuilder::default()
            .area("Leith")
            .kind("Seafood")
            .build()
            .unwrap();
        assert_eq!(ids(&criteria.apply(dataset.venues())), ["seafood-bistro"]);
    }

    #[test]
    fn price_range_matches_symbol() {
        let dataset = Dataset::embedded().unwrap();
        let criteria = FilterCriteriaBuilder::default().price_range("££").build().unwrap();
        assert_eq!(
            ids(&criteria.apply(dataset.venues())),
            ["coffee-corner", "curry-house"]
        );

        let criteria = FilterCriteriaBuilder::default().price_range("cheap").build().unwrap();
        assert!(criteria.apply(dataset.venues()).is_empty());
    }

    #[test]
    fn verified_only_when_true() {
        let dataset = Dataset::embedded().unwrap();

        let criteria = FilterCriteria::from_params(&parse_query("verified=true"));
        assert_eq!(
            ids(&criteria.apply(dataset.venues())),
            ["coffee-corner", "seafood-bistro"]
        );

        let criteria = FilterCriteria::from_params(&parse_query("verified=yes"));
        assert_eq!(criteria.apply(dataset.venues()).len(), 3);
    }

    #[test]
    fn location_matches_area_or_postcode() {
        let dataset = Dataset::embedded().unwrap();

        let criteria = FilterCriteria::from_params(&parse_query("location=eh8"));
        assert_eq!(ids(&criteria.apply(dataset.venues())), ["curry-house"]);

        let criteria = FilterCriteria::from_params(&parse_query("location=old%20to"));
        assert_eq!(ids(&criteria.apply(dataset.venues())), ["coffee-corner"]);
    }

    #[test]
    fn matches_agrees_with_apply() {
        let dataset = Dataset::embedded().unwrap();
        let criteria = FilterCriteria::from_params(&parse_query("q=o&price_range=%C2%A3%C2%A3"));
        let applied = ids(&criteria.apply(dataset.venues()));
        let matched: Vec<_> = dataset
            .venues()
            .iter()
            .filter(|v| criteria.matches(v))
            .map(|v| v.id.clone())
            .collect();
        assert_eq!(applied, matched);
        assert_eq!(applied, ["coffee-corner", "curry-house"]);
    }

    #[test]
    fn query_string_is_canonical() {
        let criteria = FilterCriteria::from_params(&parse_query(
            "verified=true&area=Old%20Town&q=cafe&utm=1",
        ));
        assert_eq!(criteria.to_query_string(), "q=cafe&area=Old%20Town&verified=true");
        assert_eq!(FilterCriteria::default().to_query_string(), "");
    }

    #[test]
    fn suggestions_rank_close_names() {
        let dataset = Dataset::embedded().unwrap();
        let found = suggest(dataset.venues(), "cury", 3);
        assert_eq!(found[0].id, "curry-house");
        assert!(suggest(dataset.venues(), "  ", 3).is_empty());
        assert!(suggest(dataset.venues(), "zzzz", 3).is_empty());
    }
}
