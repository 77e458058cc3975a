use serde::Serialize;

use super::domain::Listing;

pub const PAGE_SIZE: usize = 19;

/// One page of filtered listings. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub number: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub items: Vec<&'a Listing>,
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Slices `filtered` to the requested page; page 0 is read as page 1 and
/// pages past the end are empty.
pub fn paginate<'a>(filtered: &[&'a Listing], number: usize) -> Page<'a> {
    let number = number.max(1);
    let start = (number - 1).saturating_mul(PAGE_SIZE);
    let items = filtered
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .copied()
        .collect();

    Page {
        number,
        page_count: page_count(filtered.len()),
        total_matches: filtered.len(),
        items,
    }
}
