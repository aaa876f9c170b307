//! Page load: skeleton, content, favorites, nav toggles and footer.

use time::OffsetDateTime;

use crate::config::SiteConfig;
use crate::content::{
    self, ATTRACTION_GRID_ID, ATTRACTION_LIST_ID, FESTIVAL_LIST_ID, FOOD_GRID_ID,
};
use crate::dom::{Document, Element};
use crate::errors::SiteError;
use crate::favorites::{FavoriteId, FavoritesBinder, FavoritesStore, ToggleControl, FAVORITE_ID_ATTR};
use crate::footer::{populate_footer, LAST_MODIFIED_ID, YEAR_ID};
use crate::nav::{bind_main_nav, bind_menu_toggle, MAIN_NAV_ID, MENU_CLOSED_ICON, NAV_TOGGLE_ID};
use crate::storage::StorageHandle;

pub struct Page {
    document: Document,
    binder: FavoritesBinder,
    bound_controls: usize,
}

impl Page {
    /// Builds the document and runs every load-time step against `storage`.
    ///
    /// `last_modified` becomes `document.lastModified`; `now` drives the footer year.
    pub fn load(
        config: &SiteConfig,
        storage: StorageHandle,
        last_modified: OffsetDateTime,
        now: OffsetDateTime,
    ) -> Result<Self, SiteError> {
        let document = Document::new(last_modified);
        build_skeleton(&document, config);

        bind_main_nav(&document);
        bind_menu_toggle(&document);
        populate_footer(&document, now)?;

        let store = FavoritesStore::with_key(storage, config.storage_key.clone());
        let binder = FavoritesBinder::new(store, config.labels.clone());
        let bound_controls = render_page_content(&document, &binder);

        log::info!("Page loaded with {} favorite controls", bound_controls);

        Ok(Self {
            document,
            binder,
            bound_controls,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &FavoritesStore {
        self.binder.store()
    }

    pub fn binder(&self) -> &FavoritesBinder {
        &self.binder
    }

    pub fn bound_controls(&self) -> usize {
        self.bound_controls
    }

    /// All favorite controls on the page, in document order.
    pub fn favorite_controls(&self) -> Vec<Element> {
        self.document.root().query_by_attr(FAVORITE_ID_ATTR)
    }

    /// First favorite control for `id`.
    pub fn favorite_control(&self, id: &FavoriteId) -> Option<Element> {
        self.favorite_controls()
            .into_iter()
            .find(|c| c.favorite_id().as_ref() == Some(id))
    }

    /// Rebinds the attraction grid's controls in place, refreshing labels that
    /// went stale. Returns the number bound.
    pub fn rebind_favorites(&self) -> Result<usize, SiteError> {
        let grid = self
            .document
            .get_element_by_id(ATTRACTION_GRID_ID)
            .ok_or_else(|| SiteError::MissingElement(ATTRACTION_GRID_ID.to_string()))?;
        Ok(self.binder.bind_container(&grid))
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

/// Renders the catalog into whichever content containers `doc` has, then
/// binds favorites on the attraction grid. Returns the number of controls bound.
pub fn render_page_content(doc: &Document, binder: &FavoritesBinder) -> usize {
    let mut bound = 0;

    if let Some(grid) = doc.get_element_by_id(ATTRACTION_GRID_ID) {
        content::render_attraction_grid(&grid);
        bound = binder.bind_container(&grid);
    }
    if let Some(list) = doc.get_element_by_id(ATTRACTION_LIST_ID) {
        content::render_attraction_list(&list);
    }
    if let Some(grid) = doc.get_element_by_id(FOOD_GRID_ID) {
        content::render_food_grid(&grid);
    }
    if let Some(list) = doc.get_element_by_id(FESTIVAL_LIST_ID) {
        content::render_festival_list(&list);
    }

    bound
}

fn section(heading: &str, container: Element) -> Element {
    Element::new("section")
        .with_child(Element::new("h2").with_text(heading))
        .with_child(container)
}

fn build_skeleton(doc: &Document, config: &SiteConfig) {
    let links = Element::new("ul");
    for (href, text) in [
        (ATTRACTION_GRID_ID, "Attractions"),
        (ATTRACTION_LIST_ID, "Culture"),
        (FOOD_GRID_ID, "Food"),
        (FESTIVAL_LIST_ID, "Festivals"),
    ] {
        links.append_child(
            Element::new("li").with_child(
                Element::new("a")
                    .with_attr("href", &format!("#{href}"))
                    .with_text(text),
            ),
        );
    }

    let header = Element::new("header")
        .with_child(Element::new("h1").with_text(&config.site_name))
        .with_child(
            Element::new("button")
                .with_attr("id", NAV_TOGGLE_ID)
                .with_attr("class", "nav-toggle")
                .with_attr("aria-controls", MAIN_NAV_ID)
                .with_attr("aria-expanded", "false")
                .with_text(MENU_CLOSED_ICON),
        )
        .with_child(Element::new("nav").with_attr("id", MAIN_NAV_ID).with_child(links));

    let grid = |id: &str| Element::new("div").with_attr("id", id).with_attr("class", "grid");
    let main = Element::new("main")
        .with_child(section("Top Attractions", grid(ATTRACTION_GRID_ID)))
        .with_child(section("Culture & Heritage", Element::new("div").with_attr("id", ATTRACTION_LIST_ID)))
        .with_child(section("Local Food", grid(FOOD_GRID_ID)))
        .with_child(section("Festivals", Element::new("ul").with_attr("id", FESTIVAL_LIST_ID)));

    let footer = Element::new("footer")
        .with_child(
            Element::new("p")
                .with_text("© ")
                .with_child(Element::new("span").with_attr("id", YEAR_ID)),
        )
        .with_child(Element::new("p").with_attr("id", LAST_MODIFIED_ID));

    let body = Element::new("body")
        .with_child(header)
        .with_child(main)
        .with_child(footer);
    doc.root().append_child(body);
}
