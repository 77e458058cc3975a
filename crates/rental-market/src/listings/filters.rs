use serde::{Deserialize, Serialize};

use super::domain::{Furnishing, Listing, PropertyType};
use crate::pricing::DepositPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositFilter {
    pub no_deposit: bool,
    pub deposit_saver: bool,
}

impl DepositFilter {
    pub fn is_active(&self) -> bool {
        self.no_deposit || self.deposit_saver
    }

    fn matches(&self, listing: &Listing) -> bool {
        match listing.deposit {
            DepositPolicy::NoDeposit => self.no_deposit,
            DepositPolicy::DepositSaver => self.deposit_saver,
            DepositPolicy::Standard => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyTypeFilter {
    pub shared_room: bool,
    pub private_room: bool,
    pub studio: bool,
    pub apartment: bool,
    pub one_bedroom: bool,
    pub two_bedrooms: bool,
    pub three_bedrooms: bool,
    pub four_plus_bedrooms: bool,
    pub student_residence: bool,
}

impl PropertyTypeFilter {
    pub fn is_active(&self) -> bool {
        self.shared_room
            || self.private_room
            || self.studio
            || self.apartment
            || self.any_bedroom_count()
            || self.student_residence
    }

    fn any_bedroom_count(&self) -> bool {
        self.one_bedroom || self.two_bedrooms || self.three_bedrooms || self.four_plus_bedrooms
    }

    // Bedroom counts only narrow the apartment option; on their own they match nothing.
    fn bedrooms_match(&self, listing: &Listing) -> bool {
        if !self.any_bedroom_count() {
            return true;
        }
        match listing.bedrooms {
            1 => self.one_bedroom,
            2 => self.two_bedrooms,
            3 => self.three_bedrooms,
            count if count >= 4 => self.four_plus_bedrooms,
            _ => false,
        }
    }

    // Options are checked in order; once an apartment reaches the apartment
    // option its bedroom verdict is final.
    fn matches(&self, listing: &Listing) -> bool {
        let property_type = listing.property_type;
        if (self.shared_room && property_type == PropertyType::SharedRoom)
            || (self.private_room && property_type == PropertyType::PrivateRoom)
            || (self.studio && property_type == PropertyType::Studio)
        {
            return true;
        }
        if self.apartment && property_type.is_apartment() {
            return self.bedrooms_match(listing);
        }
        self.student_residence && listing.is_student_residence
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFilter {
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub bills_included: bool,
}

impl PriceFilter {
    pub fn is_active(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some() || self.bills_included
    }

    fn matches(&self, listing: &Listing) -> bool {
        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| listing.price > max) {
            return false;
        }
        !self.bills_included || listing.bills_included
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnishingFilter {
    pub shell: bool,
    pub upholstered: bool,
    pub furnished: bool,
}

impl FurnishingFilter {
    pub fn is_active(&self) -> bool {
        self.shell || self.upholstered || self.furnished
    }

    fn matches(&self, listing: &Listing) -> bool {
        match listing.furnishing {
            Furnishing::Shell => self.shell,
            Furnishing::Upholstered => self.upholstered,
            Furnishing::Furnished => self.furnished,
        }
    }
}

/// Every filter the search results page offers. Inactive groups pass all
/// listings; active groups keep listings matching any selected option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilters {
    pub deposit: DepositFilter,
    pub property_type: PropertyTypeFilter,
    pub price: PriceFilter,
    pub furnishing: FurnishingFilter,
}

impl ListingFilters {
    pub fn is_active(&self) -> bool {
        self.deposit.is_active()
            || self.property_type.is_active()
            || self.price.is_active()
            || self.furnishing.is_active()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        (!self.deposit.is_active() || self.deposit.matches(listing))
            && (!self.property_type.is_active() || self.property_type.matches(listing))
            && (!self.price.is_active() || self.price.matches(listing))
            && (!self.furnishing.is_active() || self.furnishing.matches(listing))
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}
