use chrono::{Datelike, NaiveDate};

use super::dates::add_months;
use super::domain::{ChargeError, PaymentScheduleEntry};
use super::fees::round_div;

/// Partial sub-periods this short are billed at the fortnightly (half) rate.
pub const FORTNIGHT_DAYS: i64 = 14;
/// A stay ending before this day of the month leaves a partial final month.
pub const LAST_MONTH_PARTIAL_BEFORE_DAY: u32 = 28;

/// Walks the stay one calendar month at a time from the cursor.
///
/// Each step runs from the cursor to the cursor plus one month (clamped to
/// month end), or to move-out when that comes first, and the cursor then
/// moves to that date. Clamping carries forward, so a 31st move-in drifts to
/// the 28th after February. The walk continues while the cursor has not
/// passed move-out, so a step landing exactly on move-out yields a final
/// zero-day entry. Entries are contiguous: the first starts at move-in and
/// the last ends at move-out.
///
/// Partial steps (the first when move-in is after the 1st, the last when
/// move-out is before the 28th) spanning at most [`FORTNIGHT_DAYS`] are billed
/// at half rent; longer partial steps pay the full month.
pub(crate) fn payment_schedule(
    monthly_rent: i64,
    move_in: NaiveDate,
    move_out: NaiveDate,
) -> Result<Vec<PaymentScheduleEntry>, ChargeError> {
    let half_rent = round_div(monthly_rent, 2)?;
    let mut schedule = Vec::new();
    let mut cursor = move_in;

    while cursor <= move_out {
        let next = add_months(cursor, 1).ok_or(ChargeError::OutOfRange)?;
        let end = if next < move_out { next } else { move_out };

        let is_first = schedule.is_empty();
        let is_last = next > move_out;
        let is_partial = (is_first && move_in.day() > 1)
            || (is_last && move_out.day() < LAST_MONTH_PARTIAL_BEFORE_DAY);

        let days = (end - cursor).num_days();
        let amount = if is_partial && days <= FORTNIGHT_DAYS {
            half_rent
        } else {
            monthly_rent
        };

        schedule.push(PaymentScheduleEntry {
            start: cursor,
            end,
            amount,
            is_partial,
            days,
        });

        cursor = next;
    }

    Ok(schedule)
}
