use chrono::NaiveDate;
use clap::Args;
use rental_market::error::AppError;
use rental_market::listings::{
    paginate, DepositFilter, FurnishingFilter, ListingFilters, ListingFixture, PriceFilter,
    PropertyTypeFilter,
};
use rental_market::pricing::dates::parse_stay_date;
use rental_market::pricing::{compute_charges, ChargeRequest, RentalCharges};
use rental_market::search::{rank, CityCatalog, CityDirectory, Suggestions, MIN_QUERY_CHARS};

#[derive(Args, Debug, Default)]
pub(crate) struct CitiesArgs {
    /// Search text; omit to list the popular cities shown before typing
    pub(crate) query: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Monthly rent in whole euros
    #[arg(long)]
    pub(crate) rent: i64,
    /// Deposit policy: standard, deposit_saver or no_deposit
    #[arg(long, default_value = "standard")]
    pub(crate) deposit_policy: String,
    /// Move-in date (YYYY-MM-DD or DD-Mon-YYYY)
    #[arg(long, value_parser = parse_stay_date)]
    pub(crate) move_in: NaiveDate,
    /// Move-out date (YYYY-MM-DD or DD-Mon-YYYY)
    #[arg(long, value_parser = parse_stay_date)]
    pub(crate) move_out: NaiveDate,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    /// Seed for the generated listing fixtures
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
    /// Number of listings to generate
    #[arg(long, default_value_t = 40)]
    pub(crate) count: usize,
    /// Page to print, starting at 1
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    #[arg(long)]
    pub(crate) no_deposit: bool,
    #[arg(long)]
    pub(crate) deposit_saver: bool,
    #[arg(long)]
    pub(crate) min_price: Option<u32>,
    #[arg(long)]
    pub(crate) max_price: Option<u32>,
    #[arg(long)]
    pub(crate) bills_included: bool,
    #[arg(long)]
    pub(crate) shared_room: bool,
    #[arg(long)]
    pub(crate) private_room: bool,
    #[arg(long)]
    pub(crate) studio: bool,
    #[arg(long)]
    pub(crate) apartment: bool,
    /// Narrow apartments to one bedroom
    #[arg(long)]
    pub(crate) one_bedroom: bool,
    #[arg(long)]
    pub(crate) two_bedrooms: bool,
    #[arg(long)]
    pub(crate) three_bedrooms: bool,
    #[arg(long)]
    pub(crate) four_plus_bedrooms: bool,
    #[arg(long)]
    pub(crate) student_residence: bool,
    #[arg(long)]
    pub(crate) shell: bool,
    #[arg(long)]
    pub(crate) upholstered: bool,
    #[arg(long)]
    pub(crate) furnished: bool,
}

impl ListingsArgs {
    fn filters(&self) -> ListingFilters {
        ListingFilters {
            deposit: DepositFilter {
                no_deposit: self.no_deposit,
                deposit_saver: self.deposit_saver,
            },
            property_type: PropertyTypeFilter {
                shared_room: self.shared_room,
                private_room: self.private_room,
                studio: self.studio,
                apartment: self.apartment,
                one_bedroom: self.one_bedroom,
                two_bedrooms: self.two_bedrooms,
                three_bedrooms: self.three_bedrooms,
                four_plus_bedrooms: self.four_plus_bedrooms,
                student_residence: self.student_residence,
            },
            price: PriceFilter {
                min_price: self.min_price,
                max_price: self.max_price,
                bills_included: self.bills_included,
            },
            furnishing: FurnishingFilter {
                shell: self.shell,
                upholstered: self.upholstered,
                furnished: self.furnished,
            },
        }
    }
}

pub(crate) fn run_cities(args: CitiesArgs) -> Result<(), AppError> {
    let directory = CityDirectory::new(CityCatalog::standard());
    let query = args.query.as_deref();

    match directory.suggestions(query) {
        Suggestions::Popular(cities) => {
            println!("Popular cities");
            for city in cities {
                println!("- {} ({})", city.name, city.country);
            }
        }
        Suggestions::TooShort => {
            println!("Type at least {MIN_QUERY_CHARS} characters to search");
        }
        Suggestions::Matches(_) => {
            let query = query.unwrap_or_default();
            let ranked = rank(query, directory.catalog().cities());
            if ranked.is_empty() {
                println!("No cities match {query:?}");
            }
            for entry in ranked {
                println!(
                    "- {} ({}) | {} | score {}",
                    entry.city.name,
                    entry.city.country,
                    entry.tier.label(),
                    entry.score
                );
            }
        }
    }

    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let request = ChargeRequest::new(args.rent, &args.deposit_policy, args.move_in, args.move_out)?;
    let charges = compute_charges(&request)?;
    render_quote(&charges);
    Ok(())
}

fn render_quote(charges: &RentalCharges) {
    let fees = &charges.fees;
    println!(
        "Stay {} -> {} ({} months) | {} | rent {}",
        charges.move_in,
        charges.move_out,
        charges.total_months,
        charges.deposit_policy.label(),
        charges.monthly_rent
    );
    println!("Due at booking: {}", charges.upfront_total);
    println!("- First month rent: {}", fees.first_month_rent);
    println!("- Tenant protection: {}", fees.tenant_protection_fee);
    println!("- Rent guarantee: {}", fees.rent_guarantee_fee);
    println!(
        "Deposit due at move-in: {} (traditional {} | deposit saver fee {})",
        fees.deposit_due, fees.traditional_deposit, fees.deposit_saver_fee
    );

    println!("Landlord payment schedule:");
    for entry in &charges.payment_schedule {
        let marker = if entry.is_partial { " (partial)" } else { "" };
        println!(
            "  - {} -> {} | {} days | {}{}",
            entry.start, entry.end, entry.days, entry.amount, marker
        );
    }
    println!("Landlord total: {}", charges.landlord_total());
}

pub(crate) fn run_listings(args: ListingsArgs) -> Result<(), AppError> {
    let listings = ListingFixture::new(args.seed).generate(args.count);
    let filters = args.filters();
    let filtered = filters.apply(&listings);
    let page = paginate(&filtered, args.page);

    println!(
        "{} of {} listings match | page {} of {}",
        page.total_matches,
        listings.len(),
        page.number,
        page.page_count
    );
    for listing in page.items {
        println!(
            "- #{} {} | {} bd | {} m2 | {} EUR{} | {} | {} | {:.1} ({} reviews) | from {}",
            listing.id,
            listing.property_type.label(),
            listing.bedrooms,
            listing.size_m2,
            listing.price,
            if listing.bills_included { " incl. bills" } else { "" },
            listing.deposit.label(),
            listing.furnishing.label(),
            listing.rating,
            listing.reviews,
            listing.available_from
        );
    }

    Ok(())
}
