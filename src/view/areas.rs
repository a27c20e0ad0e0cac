use serde::Serialize;

use super::{area_link, places_label};
use crate::{
    catalog::{self, AREA_GROUPS},
    dataset::Dataset,
};

#[derive(Debug, Clone, Serialize)]
pub struct AreasView {
    pub groups: Vec<AreaSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaSection {
    pub title: &'static str,
    pub description: &'static str,
    pub areas: Vec<AreaDetailCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaDetailCard {
    pub name: &'static str,
    pub description: &'static str,
    pub count: usize,
    pub count_label: String,
    pub link: String,
}

pub fn areas(dataset: &Dataset) -> AreasView {
    let groups = AREA_GROUPS
        .iter()
        .map(|group| AreaSection {
            title: group.title,
            description: group.description,
            areas: group
                .areas
                .iter()
                .map(|&name| {
                    let count = dataset.count_in_area(name);
                    AreaDetailCard {
                        name,
                        description: catalog::area(name).description,
                        count,
                        count_label: places_label(count),
                        link: area_link(name),
                    }
                })
                .collect(),
        })
        .collect();

    AreasView { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_order() {
        let dataset = Dataset::embedded().unwrap();
        let view = areas(&dataset);
        let titles: Vec<_> = view.groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Central areas", "North & East", "South & West"]);
    }

    #[test]
    fn cards_count_fixture_venues() {
        let dataset = Dataset::embedded().unwrap();
        let view = areas(&dataset);
        let old_town = &view.groups[0].areas[0];
        assert_eq!(old_town.name, "Old Town");
        assert_eq!(old_town.count_label, "1 place");
        assert!(old_town.description.starts_with("As the historic heart"));

        let stockbridge = &view.groups[1].areas[1];
        assert_eq!(stockbridge.count, 0);
        assert_eq!(stockbridge.link, "browse.html?area=Stockbridge");
    }
}
