//! Static site content: neighbourhood descriptions, how they are grouped on the areas
//! page, and the quick-search shortcuts on the home page.

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub areas: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCategory {
    pub name: &'static str,
    pub emoji: &'static str,
    /// Value placed in the browse `type` parameter.
    pub kind: &'static str,
}

pub const AREAS: &[AreaDefinition] = &[
    AreaDefinition {
        name: "Old Town",
        description: "As the historic heart of Edinburgh and a UNESCO World Heritage Site, the Old Town is defined by its medieval architecture and cobblestone streets.  The Royal Mile runs from Edinburgh Castle at the top to the Palace of Holyroodhouse at the bottom.  The Grassmarket, a lively area of pubs and shops with views of the castle, and the underground vaults are also key parts of the Old Town.",
        image: "images/coffee_corner.jpg",
    },
    AreaDefinition {
        name: "New Town",
        description: "Another UNESCO World Heritage Site, the New Town is famed for its elegant Georgian architecture, wide streets and squares.  It is separated from the Old Town by Princes Street Gardens.  Princes Street is the main shopping street, offering excellent views of the castle, while George Street features a wide selection of upscale shops, restaurants and cocktail bars.",
        image: "images/coffee_corner.jpg",
    },
    AreaDefinition {
        name: "Leith",
        description: "This historic port district has transformed into one of Edinburgh's most vibrant and creative neighbourhoods.  The waterfront is lined with cosmopolitan restaurants, bars and the Royal Yacht Britannia.",
        image: "images/seafood_bistro.jpg",
    },
    AreaDefinition {
        name: "West End",
        description: "A bohemian and cultural hub known for its art venues, independent boutiques and Georgian architecture.  It connects to the Haymarket area, a transport hub.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Southside",
        description: "Located near the University of Edinburgh, this area has a large student population, creating a lively atmosphere with many independent shops, cafés and pubs.  The Meadows, a large public park, is a central feature.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Stockbridge",
        description: "Situated north of the city centre, this area retains a distinct village feel with a laid‑back, bohemian charm.  It features independent boutiques, cafés and the popular Sunday market.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Portobello",
        description: "Known as Edinburgh's seaside suburb, this area on the eastern edge of the city offers a relaxed, coastal lifestyle with a sandy beach and promenade.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Morningside",
        description: "An affluent neighbourhood south of the city centre with a mix of Victorian and Edwardian housing.  Known for its peaceful, leafy streets and independent shops, it is particularly popular with families.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Marchmont",
        description: "A popular residential neighbourhood for students due to its proximity to the University of Edinburgh.  It is separated from the Old Town by The Meadows park.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Corstorphine",
        description: "A family‑friendly suburban area to the west, known for its community feel and green spaces, and home to Edinburgh Zoo.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Gorgie",
        description: "Located in the southwest, this working‑class residential area offers a more down‑to‑earth atmosphere.",
        image: PLACEHOLDER_IMAGE,
    },
    AreaDefinition {
        name: "Bruntsfield",
        description: "Neighbourhood adjacent to Morningside with cafés and independent shops, known for its leafy streets and family‑friendly vibe.",
        image: PLACEHOLDER_IMAGE,
    },
];

pub const AREA_GROUPS: &[AreaGroup] = &[
    AreaGroup {
        title: "Central areas",
        description: "The historic heart of Edinburgh encompasses the UNESCO‑listed Old Town and New Town, along with the cultural West End and student‑filled Southside.",
        areas: &["Old Town", "New Town", "West End", "Southside"],
    },
    AreaGroup {
        title: "North & East",
        description: "To the north and east you’ll find the bustling port of Leith, the village‑like charm of Stockbridge and the seaside suburb of Portobello.",
        areas: &["Leith", "Stockbridge", "Portobello"],
    },
    AreaGroup {
        title: "South & West",
        description: "South of the centre lie leafy residential districts such as Morningside, Marchmont, Bruntsfield and Corstorphine, while to the southwest Gorgie offers a more down‑to‑earth vibe.",
        areas: &["Morningside", "Marchmont", "Bruntsfield", "Corstorphine", "Gorgie"],
    },
];

pub const QUICK_CATEGORIES: &[QuickCategory] = &[
    QuickCategory { name: "Scottish", emoji: "🏴", kind: "scottish" },
    QuickCategory { name: "Italian", emoji: "🍝", kind: "italian" },
    QuickCategory { name: "Seafood", emoji: "🦞", kind: "seafood" },
    QuickCategory { name: "Cafés", emoji: "☕", kind: "cafe" },
    QuickCategory { name: "Fine Dining", emoji: "🍷", kind: "fine_dining" },
    QuickCategory { name: "Pubs", emoji: "🍺", kind: "pub" },
    QuickCategory { name: "Asian", emoji: "🍜", kind: "thai,chinese,japanese,indian" },
    QuickCategory { name: "Vegetarian", emoji: "🥗", kind: "vegetarian,vegan" },
];

/// Looks up an area definition, falling back to an empty placeholder for areas that have
/// no write-up yet.
pub fn area(name: &str) -> AreaDefinition {
    AREAS
        .iter()
        .find(|def| def.name == name)
        .copied()
        .unwrap_or(AreaDefinition {
            name: "",
            description: "",
            image: PLACEHOLDER_IMAGE,
        })
}
