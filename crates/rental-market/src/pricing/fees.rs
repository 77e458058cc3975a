use super::domain::{ChargeError, DepositPolicy, FeeBreakdown};

pub const TENANT_PROTECTION_PERCENT: i64 = 15;
pub const RENT_GUARANTEE_PERCENT: i64 = 3;
pub const DEPOSIT_SAVER_PERCENT: i64 = 5;
pub const TRADITIONAL_DEPOSIT_MONTHS: i64 = 2;

/// Rounds `numerator / denominator` half away from zero. Both must be positive.
pub(crate) fn round_div(numerator: i64, denominator: i64) -> Result<i64, ChargeError> {
    numerator
        .checked_add(denominator / 2)
        .map(|biased| biased / denominator)
        .ok_or(ChargeError::OutOfRange)
}

fn percent_of(amount: i64, percent: i64) -> Result<i64, ChargeError> {
    let scaled = amount.checked_mul(percent).ok_or(ChargeError::OutOfRange)?;
    round_div(scaled, 100)
}

pub(crate) fn fee_breakdown(
    monthly_rent: i64,
    deposit_policy: DepositPolicy,
    total_months: u32,
) -> Result<FeeBreakdown, ChargeError> {
    let stay_rent = monthly_rent
        .checked_mul(i64::from(total_months))
        .ok_or(ChargeError::OutOfRange)?;

    let tenant_protection_fee = percent_of(monthly_rent, TENANT_PROTECTION_PERCENT)?;
    let rent_guarantee_fee = percent_of(stay_rent, RENT_GUARANTEE_PERCENT)?;
    let traditional_deposit = monthly_rent
        .checked_mul(TRADITIONAL_DEPOSIT_MONTHS)
        .ok_or(ChargeError::OutOfRange)?;
    let deposit_saver_fee = percent_of(monthly_rent, DEPOSIT_SAVER_PERCENT)?;

    let deposit_due = match deposit_policy {
        DepositPolicy::Standard => traditional_deposit,
        DepositPolicy::DepositSaver => deposit_saver_fee,
        DepositPolicy::NoDeposit => 0,
    };

    Ok(FeeBreakdown {
        first_month_rent: monthly_rent,
        tenant_protection_fee,
        rent_guarantee_fee,
        traditional_deposit,
        deposit_saver_fee,
        deposit_due,
    })
}
