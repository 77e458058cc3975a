use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pricing::DepositPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Studio,
    Apartment,
    PrivateRoom,
    SharedRoom,
    LuxuryApartment,
    Penthouse,
    Loft,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Apartment => "Apartment",
            Self::PrivateRoom => "Private room",
            Self::SharedRoom => "Shared room",
            Self::LuxuryApartment => "Luxury apartment",
            Self::Penthouse => "Penthouse",
            Self::Loft => "Loft",
        }
    }

    pub const fn is_apartment(self) -> bool {
        matches!(self, Self::Apartment | Self::LuxuryApartment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Furnishing {
    Shell,
    Upholstered,
    Furnished,
}

impl Furnishing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shell => "Shell",
            Self::Upholstered => "Upholstered",
            Self::Furnished => "Furnished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandlordType {
    RentalCompany,
    PrivateLandlord,
    StudentHousing,
    CorporateHousing,
}

impl LandlordType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RentalCompany => "Rental company",
            Self::PrivateLandlord => "Private landlord",
            Self::StudentHousing => "Student housing",
            Self::CorporateHousing => "Corporate housing",
        }
    }
}

/// A rentable unit as shown on the search results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    /// Monthly price in whole euros.
    pub price: u32,
    pub property_type: PropertyType,
    pub bedrooms: u8,
    pub size_m2: u16,
    /// Purpose-built student accommodation.
    pub is_student_residence: bool,
    pub bills_included: bool,
    pub deposit: DepositPolicy,
    pub furnishing: Furnishing,
    pub landlord: LandlordType,
    pub rating: f32,
    pub reviews: u16,
    pub available_from: NaiveDate,
}
