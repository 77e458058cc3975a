use chrono::NaiveDate;

use crate::pricing::{compute_charges, ChargeRequest, DepositPolicy, RentalCharges};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn request(
    monthly_rent: i64,
    deposit_policy: DepositPolicy,
    move_in: NaiveDate,
    move_out: NaiveDate,
) -> ChargeRequest {
    ChargeRequest {
        monthly_rent,
        deposit_policy,
        move_in,
        move_out,
    }
}

pub(super) fn quote(monthly_rent: i64, move_in: NaiveDate, move_out: NaiveDate) -> RentalCharges {
    compute_charges(&request(
        monthly_rent,
        DepositPolicy::Standard,
        move_in,
        move_out,
    ))
    .expect("valid stay prices")
}

pub(super) fn assert_contiguous(charges: &RentalCharges) {
    let schedule = &charges.payment_schedule;
    let first = schedule.first().expect("schedule is never empty");
    let last = schedule.last().expect("schedule is never empty");
    assert_eq!(first.start, charges.move_in, "schedule starts at move-in");
    assert_eq!(last.end, charges.move_out, "schedule ends at move-out");

    for pair in schedule.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "entries must not gap or overlap");
    }
    for entry in schedule {
        assert!(entry.start <= entry.end);
        assert_eq!(entry.days, (entry.end - entry.start).num_days());
    }
}
