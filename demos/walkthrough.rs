use delta_tourism::favorites::FavoriteId;
use delta_tourism::{storage, Page, SiteConfig, SiteError};
use time::OffsetDateTime;

// Usage: walkthrough [--db <file>] [favorite-id ...]
//
// Loads the page, clicks the favorite button of every id given, then prints
// the rendered HTML followed by the persisted favorites. Run it twice with the
// same --db file to watch favorites survive a reload.
fn main() -> Result<(), SiteError> {
    env_logger::init();

    let mut builder = SiteConfig::builder();
    let mut ids = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--db" {
            match args.next() {
                Some(path) => builder = builder.database_path(path),
                None => {
                    eprintln!("--db needs a file path");
                    std::process::exit(2);
                }
            }
        } else {
            ids.push(FavoriteId::from(arg));
        }
    }

    let config = builder.build()?;
    let area = storage::open(&config)?;

    let now = OffsetDateTime::now_utc();
    let page = Page::load(&config, area, now, now)?;

    for id in &ids {
        match page.favorite_control(id) {
            Some(control) => {
                control.click();
                match page.binder().labels().state_of(&control.text()) {
                    Some(state) => println!("{id}: {:?}", state),
                    None => println!("{id}: unrecognised label {:?}", control.text()),
                }
            }
            None => log::warn!("No favorite control for '{}'", id),
        }
    }

    println!("{}", page.to_html());

    let set = page.store().load();
    let favorites: Vec<&str> = set.iter().map(|i| i.as_str()).collect();
    println!("favorites: {:?}", favorites);

    Ok(())
}
