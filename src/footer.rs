//! Footer copyright year and last-modified line.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::dom::Document;
use crate::errors::SiteError;

pub const YEAR_ID: &str = "year";
pub const LAST_MODIFIED_ID: &str = "lastModified";

/// Same shape as `document.lastModified`.
const LAST_MODIFIED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month]/[day]/[year] [hour]:[minute]:[second]");

pub fn last_modified_text(at: OffsetDateTime) -> Result<String, SiteError> {
    Ok(format!("Last Modification: {}", at.format(LAST_MODIFIED_FORMAT)?))
}

/// Fills `#year` with the year of `now` and `#lastModified` with the document timestamp.
pub fn populate_footer(doc: &Document, now: OffsetDateTime) -> Result<(), SiteError> {
    let year = doc
        .get_element_by_id(YEAR_ID)
        .ok_or_else(|| SiteError::MissingElement(YEAR_ID.to_string()))?;
    let last_modified = doc
        .get_element_by_id(LAST_MODIFIED_ID)
        .ok_or_else(|| SiteError::MissingElement(LAST_MODIFIED_ID.to_string()))?;

    year.set_text(&now.year().to_string());
    last_modified.set_text(&last_modified_text(doc.last_modified())?);
    Ok(())
}
