use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::domain::{Furnishing, LandlordType, Listing, PropertyType};
use crate::pricing::DepositPolicy;

const PROPERTY_TYPES: [PropertyType; 6] = [
    PropertyType::Studio,
    PropertyType::Apartment,
    PropertyType::PrivateRoom,
    PropertyType::LuxuryApartment,
    PropertyType::Penthouse,
    PropertyType::Loft,
];

const LANDLORD_TYPES: [LandlordType; 4] = [
    LandlordType::RentalCompany,
    LandlordType::PrivateLandlord,
    LandlordType::StudentHousing,
    LandlordType::CorporateHousing,
];

/// Months (June through October) listings become available in.
const AVAILABILITY_MONTHS: [u32; 5] = [6, 7, 8, 9, 10];
const AVAILABILITY_YEAR: i32 = 2025;

/// Seeded stand-in for a listings backend. The same seed always produces the
/// same listings.
pub struct ListingFixture {
    rng: StdRng,
}

impl ListingFixture {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Listing> {
        (0..count).map(|index| self.listing(index)).collect()
    }

    fn listing(&mut self, index: usize) -> Listing {
        let rng = &mut self.rng;
        let is_student_residence = rng.gen_bool(0.25);

        let deposit = if rng.gen_bool(0.3) {
            if rng.gen_bool(0.5) {
                DepositPolicy::DepositSaver
            } else {
                DepositPolicy::NoDeposit
            }
        } else {
            DepositPolicy::Standard
        };

        let price = if is_student_residence {
            rng.gen_range(600..1200)
        } else {
            rng.gen_range(800..1800)
        };

        let furnishing = if rng.gen_bool(0.33) {
            Furnishing::Shell
        } else if rng.gen_bool(0.5) {
            Furnishing::Upholstered
        } else {
            Furnishing::Furnished
        };

        let month = AVAILABILITY_MONTHS[rng.gen_range(0..AVAILABILITY_MONTHS.len())];
        let day = rng.gen_range(1..=28);
        let available_from = NaiveDate::from_ymd_opt(AVAILABILITY_YEAR, month, day)
            .unwrap_or(NaiveDate::MIN);

        Listing {
            id: (index + 1).to_string(),
            price,
            property_type: PROPERTY_TYPES[rng.gen_range(0..PROPERTY_TYPES.len())],
            bedrooms: rng.gen_range(1..=3),
            size_m2: rng.gen_range(20..100),
            is_student_residence,
            bills_included: rng.gen_bool(0.5),
            deposit,
            furnishing,
            landlord: LANDLORD_TYPES[rng.gen_range(0..LANDLORD_TYPES.len())],
            rating: f32::from(rng.gen_range(35u8..=50)) / 10.0,
            reviews: rng.gen_range(1..=50),
            available_from,
        }
    }
}
