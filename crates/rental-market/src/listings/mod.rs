//! Search results filtering over listing fixtures.

pub mod domain;
mod filters;
mod fixtures;
mod pagination;

pub use domain::{Furnishing, LandlordType, Listing, PropertyType};
pub use filters::{DepositFilter, FurnishingFilter, ListingFilters, PriceFilter, PropertyTypeFilter};
pub use fixtures::ListingFixture;
pub use pagination::{page_count, paginate, Page, PAGE_SIZE};
