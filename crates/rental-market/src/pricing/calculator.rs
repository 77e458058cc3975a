use tracing::debug;

use super::dates::months_between;
use super::domain::{ChargeError, ChargeRequest, RentalCharges};
use super::fees::fee_breakdown;
use super::schedule::payment_schedule;

/// Prices a stay: the booking total due up front, the fee breakdown, and the
/// month-by-month landlord payment schedule.
pub fn compute_charges(request: &ChargeRequest) -> Result<RentalCharges, ChargeError> {
    let ChargeRequest {
        monthly_rent,
        deposit_policy,
        move_in,
        move_out,
    } = *request;

    if monthly_rent <= 0 {
        return Err(ChargeError::NonPositiveRent(monthly_rent));
    }
    if move_out < move_in {
        return Err(ChargeError::InvalidDateRange { move_in, move_out });
    }

    let total_months = months_between(move_in, move_out)
        .checked_add(1)
        .ok_or(ChargeError::OutOfRange)?;

    let fees = fee_breakdown(monthly_rent, deposit_policy, total_months)?;
    let upfront_total = monthly_rent
        .checked_add(fees.tenant_protection_fee)
        .and_then(|subtotal| subtotal.checked_add(fees.rent_guarantee_fee))
        .ok_or(ChargeError::OutOfRange)?;

    let payment_schedule = payment_schedule(monthly_rent, move_in, move_out)?;

    debug!(
        monthly_rent,
        policy = deposit_policy.label(),
        %move_in,
        %move_out,
        total_months,
        upfront_total,
        entries = payment_schedule.len(),
        "computed rental charges"
    );

    Ok(RentalCharges {
        monthly_rent,
        deposit_policy,
        move_in,
        move_out,
        total_months,
        upfront_total,
        fees,
        payment_schedule,
    })
}
