//! Rental fee and landlord payment schedule calculator.

mod calculator;
pub mod dates;
pub mod domain;
mod fees;
pub mod router;
mod schedule;

#[cfg(test)]
mod tests;

pub use calculator::compute_charges;
pub use domain::{
    ChargeError, ChargeRequest, DepositPolicy, FeeBreakdown, PaymentScheduleEntry, RentalCharges,
};
pub use fees::{
    DEPOSIT_SAVER_PERCENT, RENT_GUARANTEE_PERCENT, TENANT_PROTECTION_PERCENT,
    TRADITIONAL_DEPOSIT_MONTHS,
};
pub use router::{charges_router, ChargeQuoteRequest};
pub use schedule::{FORTNIGHT_DAYS, LAST_MONTH_PARTIAL_BEFORE_DAY};
