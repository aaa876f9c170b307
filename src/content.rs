//! Site content: the hardcoded catalog and its renderers.
//!
//! Attractions render two ways: as cards in `#attractionGrid`, each with a
//! favorite toggle (`button.favorite-btn[data-id]`) left unlabelled for the
//! favorites binder, and as a detail list in `#attractionList`. Foods render
//! as plain cards in `#foodGrid` and festivals as list items in
//! `#festivalList`. Neither carries a favorite toggle.

use crate::dom::Element;
use crate::favorites::FAVORITE_ID_ATTR;

pub const ATTRACTION_GRID_ID: &str = "attractionGrid";
pub const ATTRACTION_LIST_ID: &str = "attractionList";
pub const FOOD_GRID_ID: &str = "foodGrid";
pub const FESTIVAL_LIST_ID: &str = "festivalList";

/// Class of the favorite toggle button on attraction cards.
pub const FAVORITE_BUTTON_CLASS: &str = "favorite-btn";

/// Page the attraction cards link to for details.
const DETAILS_HREF: &str = "culture.html";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attraction {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
    pub year_established: u16,
    /// Square metres
    pub area: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub desc: &'static str,
}

pub const ATTRACTIONS: &[Attraction] = &[
    Attraction {
        id: "lander-anchorage",
        name: "Lander Brothers Anchorage (Asaba)",
        desc: "Historic anchorage and riverside views at Asaba.",
        image: "images/lander-small.jpg",
        year_established: 1900,
        area: 5000,
    },
    Attraction {
        id: "abraka",
        name: "Abraka Turf & Country Club",
        desc: "Natural springs, resort and golf course.",
        image: "images/abraka-small.jpg",
        year_established: 1955,
        area: 12000,
    },
    Attraction {
        id: "otuogu-beach",
        name: "Otuogu Beach",
        desc: "Coastal beach spots with fishing communities.",
        image: "images/otuogu-small.jpg",
        year_established: 2002,
        area: 9000,
    },
    Attraction {
        id: "nana-museum",
        name: "Nana Living History Museum (Koko)",
        desc: "Museum showcasing regional history and artifacts.",
        image: "images/nana-small.jpg",
        year_established: 1998,
        area: 3000,
    },
    Attraction {
        id: "warri-palace",
        name: "Warri Kingdom Palace",
        desc: "Historic palace and cultural center in Warri.",
        image: "images/warri-small.jpg",
        year_established: 1870,
        area: 15000,
    },
    Attraction {
        id: "isoko-forest",
        name: "Isoko Forest & Trails",
        desc: "Trails, birdwatching, and traditional villages.",
        image: "images/isoko-small.jpg",
        year_established: 2010,
        area: 8000,
    },
];

pub const FOODS: &[Food] = &[
    Food {
        id: "banga",
        name: "Banga Soup",
        image: "images/banga-small.jpg",
        desc: "Rich palm-nut based soup, often with fresh fish.",
    },
    Food {
        id: "owho",
        name: "Owho Soup",
        image: "images/owho-small.jpg",
        desc: "Traditional soup served with starch or fufu.",
    },
    Food {
        id: "freshfish",
        name: "Fresh River Fish",
        image: "images/fish-small.jpg",
        desc: "Seafood specialties around the coast.",
    },
];

pub const FESTIVALS: &[&str] = &[
    "Iwu Festival (Anioma)",
    "Okere Juju Festival (Warri)",
    "Ogwa Festival (Isoko)",
    "River Blessing Ceremonies",
];

fn card_image(src: &str, alt: &str) -> Element {
    Element::new("img")
        .with_attr("src", src)
        .with_attr("alt", alt)
        .with_attr("loading", "lazy")
}

/// Grid card for an attraction, with its favorite toggle and a details link.
pub fn attraction_card(a: &Attraction) -> Element {
    let actions = Element::new("div")
        .with_attr("class", "card-actions")
        .with_child(
            Element::new("button")
                .with_attr("class", &format!("btn {FAVORITE_BUTTON_CLASS}"))
                .with_attr(FAVORITE_ID_ATTR, a.id),
        )
        .with_child(
            Element::new("a")
                .with_attr("class", "btn")
                .with_attr("href", DETAILS_HREF)
                .with_text("Details"),
        );

    Element::new("article")
        .with_attr("class", "card")
        .with_child(card_image(a.image, a.name))
        .with_child(
            Element::new("div")
                .with_attr("class", "card-content")
                .with_child(Element::new("h3").with_text(a.name))
                .with_child(Element::new("p").with_text(a.desc))
                .with_child(Element::new("p").with_child(
                    Element::new("small").with_text(&format!("Established: {}", a.year_established)),
                ))
                .with_child(actions),
        )
}

/// Detail entry for an attraction, anchored by its id.
pub fn attraction_detail(a: &Attraction) -> Element {
    let facts = format!(
        "Established: {} • Area: {} sq m",
        a.year_established,
        group_thousands(a.area)
    );

    Element::new("article")
        .with_attr("class", "card")
        .with_attr("id", a.id)
        .with_child(
            Element::new("div")
                .with_attr("class", "detail")
                .with_child(card_image(a.image, a.name))
                .with_child(
                    Element::new("div")
                        .with_child(Element::new("h3").with_text(a.name))
                        .with_child(Element::new("p").with_text(a.desc))
                        .with_child(Element::new("p").with_child(Element::new("small").with_text(&facts))),
                ),
        )
}

pub fn food_card(f: &Food) -> Element {
    Element::new("article")
        .with_attr("class", "card")
        .with_child(card_image(f.image, f.name))
        .with_child(
            Element::new("div")
                .with_attr("class", "card-content")
                .with_child(Element::new("h3").with_text(f.name))
                .with_child(Element::new("p").with_text(f.desc)),
        )
}

pub fn festival_item(name: &str) -> Element {
    Element::new("li").with_text(name)
}

/// `1234567` → `"1,234,567"`, as `toLocaleString` does for `en-US`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Replaces the contents of `container` with `items`, in order.
fn fill(container: &Element, items: impl IntoIterator<Item = Element>) {
    container.clear_children();
    for item in items {
        container.append_child(item);
    }
    log::debug!(
        "Rendered {} items into #{}",
        container.children().len(),
        container.id().unwrap_or_default()
    );
}

pub fn render_attraction_grid(container: &Element) {
    fill(container, ATTRACTIONS.iter().map(attraction_card));
}

pub fn render_attraction_list(container: &Element) {
    fill(container, ATTRACTIONS.iter().map(attraction_detail));
}

pub fn render_food_grid(container: &Element) {
    fill(container, FOODS.iter().map(food_card));
}

pub fn render_festival_list(container: &Element) {
    fill(container, FESTIVALS.iter().map(|s| festival_item(s)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: Vec<&str> = ATTRACTIONS
            .iter()
            .map(|a| a.id)
            .chain(FOODS.iter().map(|f| f.id))
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn attraction_card_carries_favorite_control() {
        let card = attraction_card(&ATTRACTIONS[1]);
        let buttons = card.query_by_class(FAVORITE_BUTTON_CLASS);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].attr(FAVORITE_ID_ATTR).as_deref(), Some("abraka"));
        assert!(buttons[0].has_class("btn"));

        let html = card.to_html();
        assert!(html.contains("<h3>Abraka Turf &amp; Country Club</h3>"));
        assert!(html.contains("<small>Established: 1955</small>"));
        assert!(html.contains("href=\"culture.html\""));
    }

    #[test]
    fn detail_shows_year_and_grouped_area() {
        let detail = attraction_detail(&ATTRACTIONS[4]);
        assert_eq!(detail.id().as_deref(), Some("warri-palace"));
        assert!(detail
            .to_html()
            .contains("<small>Established: 1870 • Area: 15,000 sq m</small>"));
        assert!(detail.query_by_attr(FAVORITE_ID_ATTR).is_empty());
    }

    #[test]
    fn food_and_festivals_have_no_favorite_controls() {
        let grid = Element::new("div").with_attr("id", FOOD_GRID_ID);
        render_food_grid(&grid);
        assert_eq!(grid.children().len(), FOODS.len());
        assert!(grid.query_by_attr(FAVORITE_ID_ATTR).is_empty());

        let list = Element::new("ul").with_attr("id", FESTIVAL_LIST_ID);
        render_festival_list(&list);
        let names: Vec<String> = list.children().iter().map(|li| li.text()).collect();
        assert_eq!(names, FESTIVALS);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5000), "5,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn rendering_replaces_previous_items() {
        let grid = Element::new("div").with_attr("id", ATTRACTION_GRID_ID);
        render_attraction_grid(&grid);
        render_attraction_grid(&grid);
        assert_eq!(grid.children().len(), ATTRACTIONS.len());
    }
}
