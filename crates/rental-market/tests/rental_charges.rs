use chrono::NaiveDate;
use rental_market::pricing::{compute_charges, ChargeError, ChargeRequest, DepositPolicy};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn quote_for_property_page_defaults() {
    let request = ChargeRequest::new(950, "Standard", date(2025, 5, 16), date(2025, 11, 30))
        .expect("valid request");
    let charges = compute_charges(&request).expect("quote computes");

    assert_eq!(charges.total_months, 7);
    assert_eq!(charges.fees.tenant_protection_fee, 143);
    assert_eq!(charges.fees.rent_guarantee_fee, 200);
    assert_eq!(charges.upfront_total, 950 + 143 + 200);
    assert_eq!(charges.fees.deposit_due, 1900);

    let schedule = &charges.payment_schedule;
    assert_eq!(schedule.len(), 7);
    assert!(schedule[0].is_partial);
    assert_eq!(schedule[0].amount, 950);
    let last = schedule.last().expect("last entry");
    assert_eq!(last.start, date(2025, 11, 16));
    assert_eq!(last.end, date(2025, 11, 30));
    assert!(!last.is_partial);
}

#[test]
fn deposit_saver_quote_reports_both_deposits() {
    let request = ChargeRequest::new(1200, "deposit_saver", date(2025, 9, 1), date(2026, 8, 31))
        .expect("valid request");
    let charges = compute_charges(&request).expect("quote computes");

    assert_eq!(charges.deposit_policy, DepositPolicy::DepositSaver);
    assert_eq!(charges.total_months, 12);
    assert_eq!(charges.fees.traditional_deposit, 2400);
    assert_eq!(charges.fees.deposit_saver_fee, 60);
    assert_eq!(charges.fees.deposit_due, 60);
    assert_eq!(charges.fees.rent_guarantee_fee, 432);
    assert_eq!(charges.landlord_total(), 1200 * 12);
}

#[test]
fn invalid_inputs_surface_typed_errors() {
    assert!(matches!(
        ChargeRequest::new(1000, "bank guarantee", date(2025, 1, 1), date(2025, 2, 1)),
        Err(ChargeError::UnknownDepositPolicy(tag)) if tag == "bank guarantee"
    ));

    let reversed = ChargeRequest::new(1000, "no deposit", date(2025, 2, 1), date(2025, 1, 1))
        .expect("policy parses");
    assert!(matches!(
        compute_charges(&reversed),
        Err(ChargeError::InvalidDateRange { .. })
    ));

    let free = ChargeRequest::new(0, "no deposit", date(2025, 1, 1), date(2025, 2, 1))
        .expect("policy parses");
    assert_eq!(compute_charges(&free), Err(ChargeError::NonPositiveRent(0)));
}

#[test]
fn charges_serialize_for_the_payment_panel() {
    let request = ChargeRequest::new(800, "No Deposit", date(2025, 6, 20), date(2025, 7, 10))
        .expect("valid request");
    let charges = compute_charges(&request).expect("quote computes");
    let value = serde_json::to_value(&charges).expect("serialize charges");

    assert_eq!(value["deposit_policy"], "no_deposit");
    assert_eq!(value["fees"]["deposit_due"], 0);
    assert_eq!(value["payment_schedule"][0]["start"], "2025-06-20");
    assert_eq!(value["payment_schedule"][0]["days"], 20);
    assert_eq!(value["payment_schedule"][0]["is_partial"], true);
    assert_eq!(value["payment_schedule"][0]["amount"], 800);
}
