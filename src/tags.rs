//! Tag handling shared by the form editor and the list facet.

mod chip_editor;
mod facet;

pub use self::chip_editor::{TAG_SEPARATORS, TagChipEditor};
pub use self::facet::{FacetEntry, TagFacetIndex, parse_timestamp};

/// Splits a serialized tag field into trimmed, non-empty names.
pub fn split_tags(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|t| !t.is_empty())
}
