use std::{collections::HashSet, path::Path};

use anyhow::{bail, Context};

use crate::data::{Comment, RatingCategory, Venue};

const EMBEDDED: &str = include_str!("../data/venues.json");

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct Dataset {
    venues: Vec<Venue>,
}

impl Dataset {
    /// The fixture shipped with the crate.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED).context("fail to load embedded venue fixture")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("fail to read venue fixture {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid venue fixture {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let venues: Vec<Venue> = serde_json::from_str(raw).context("fail to parse venues")?;
        Self::from_venues(venues)
    }

    pub fn from_venues(venues: Vec<Venue>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for venue in &venues {
            if !seen.insert(venue.id.as_str()) {
                bail!("duplicate venue id {}", venue.id);
            }
            for category in RatingCategory::ALL {
                check_range(&venue.id, category, venue.ratings.get(category))?;
            }
            for comment in &venue.comments {
                check_comment(&venue.id, comment)?;
            }
        }

        tracing::debug!("loaded {} venues", venues.len());
        Ok(Self { venues })
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn find(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// Distinct areas in first-seen order.
    pub fn areas(&self) -> Vec<&str> {
        distinct(self.venues.iter().map(|venue| venue.area.as_str()))
    }

    /// Distinct venue types in first-seen order.
    pub fn kinds(&self) -> Vec<&str> {
        distinct(self.venues.iter().map(|venue| venue.kind.as_str()))
    }

    pub fn count_in_area(&self, area: &str) -> usize {
        self.venues.iter().filter(|venue| venue.area == area).count()
    }

    /// Every comment with the venue it belongs to and its position there.
    pub fn comments(&self) -> impl Iterator<Item = (&Venue, usize, &Comment)> {
        self.venues.iter().flat_map(|venue| {
            venue
                .comments
                .iter()
                .enumerate()
                .map(move |(index, comment)| (venue, index, comment))
        })
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

fn check_comment(venue: &str, comment: &Comment) -> anyhow::Result<()> {
    for category in RatingCategory::ALL {
        if let Some(value) = comment.ratings.get(category) {
            check_range(venue, category, value)
                .with_context(|| format!("in comment by {}", comment.user))?;
        }
    }
    Ok(())
}

fn check_range(venue: &str, category: RatingCategory, value: f64) -> anyhow::Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        bail!(
            "{} rating {value} of venue {venue} is outside {MIN_RATING}..={MAX_RATING}",
            category.key()
        );
    }
    Ok(())
}
