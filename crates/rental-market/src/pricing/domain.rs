use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the tenant covers the landlord's security requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DepositPolicy {
    Standard,
    DepositSaver,
    NoDeposit,
}

impl DepositPolicy {
    pub const fn ordered() -> [Self; 3] {
        [Self::Standard, Self::DepositSaver, Self::NoDeposit]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::DepositSaver => "Deposit Saver",
            Self::NoDeposit => "No Deposit",
        }
    }
}

impl FromStr for DepositPolicy {
    type Err = ChargeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tag: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match tag.as_str() {
            "standard" => Ok(Self::Standard),
            "deposit_saver" => Ok(Self::DepositSaver),
            "no_deposit" => Ok(Self::NoDeposit),
            _ => Err(ChargeError::UnknownDepositPolicy(raw.to_string())),
        }
    }
}

impl TryFrom<String> for DepositPolicy {
    type Error = ChargeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Inputs to a charge quote. Amounts are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub monthly_rent: i64,
    pub deposit_policy: DepositPolicy,
    pub move_in: NaiveDate,
    pub move_out: NaiveDate,
}

impl ChargeRequest {
    pub fn new(
        monthly_rent: i64,
        deposit_policy: &str,
        move_in: NaiveDate,
        move_out: NaiveDate,
    ) -> Result<Self, ChargeError> {
        Ok(Self {
            monthly_rent,
            deposit_policy: deposit_policy.parse()?,
            move_in,
            move_out,
        })
    }
}

/// One billing sub-period owed to the landlord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub amount: i64,
    pub is_partial: bool,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub first_month_rent: i64,
    pub tenant_protection_fee: i64,
    pub rent_guarantee_fee: i64,
    /// Two months of rent, shown for comparison whatever the policy.
    pub traditional_deposit: i64,
    pub deposit_saver_fee: i64,
    pub deposit_due: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCharges {
    pub monthly_rent: i64,
    pub deposit_policy: DepositPolicy,
    pub move_in: NaiveDate,
    pub move_out: NaiveDate,
    pub total_months: u32,
    pub upfront_total: i64,
    pub fees: FeeBreakdown,
    pub payment_schedule: Vec<PaymentScheduleEntry>,
}

impl RentalCharges {
    /// Everything paid to the landlord over the stay.
    pub fn landlord_total(&self) -> i64 {
        self.payment_schedule.iter().map(|entry| entry.amount).sum()
    }

    pub fn partial_entries(&self) -> impl Iterator<Item = &PaymentScheduleEntry> {
        self.payment_schedule.iter().filter(|entry| entry.is_partial)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChargeError {
    #[error("move-out date {move_out} is before move-in date {move_in}")]
    InvalidDateRange {
        move_in: NaiveDate,
        move_out: NaiveDate,
    },
    #[error("monthly rent must be positive, got {0}")]
    NonPositiveRent(i64),
    #[error("unknown deposit policy '{0}' (expected standard, deposit_saver or no_deposit)")]
    UnknownDepositPolicy(String),
    #[error("stay or rent is too large to price")]
    OutOfRange,
}
