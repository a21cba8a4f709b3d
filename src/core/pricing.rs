//! Per-performance pricing: charge amount and volume credits.
//!
//! Every constant lives in [`PricingRules`]; the defaults reproduce the
//! theater's standard price list. All amounts are integer cents.

use std::num::{NonZeroU32, NonZeroU64};

use serde::{Deserialize, Serialize};

use super::error::BillingError;
use super::types::{Genre, Performance, Play};

const DEFAULT_COMEDY_CREDIT_DIVISOR: NonZeroU32 = match NonZeroU32::new(5) {
    Some(v) => v,
    None => unreachable!(),
};

const DEFAULT_CENTS_PER_UNIT: NonZeroU64 = match NonZeroU64::new(100) {
    Some(v) => v,
    None => unreachable!(),
};

/// Tragedy price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TragedyRates {
    /// Flat charge for every tragedy performance.
    pub base_amount: u64,
    /// Seats included in the base amount.
    pub audience_threshold: u32,
    /// Charge per seat above the threshold.
    pub overage_per_person: u64,
}

impl Default for TragedyRates {
    fn default() -> Self {
        Self {
            base_amount: 40_000,
            audience_threshold: 30,
            overage_per_person: 1_000,
        }
    }
}

/// Comedy price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComedyRates {
    /// Flat charge for every comedy performance.
    pub base_amount: u64,
    /// Seats included before the overage fee applies.
    pub audience_threshold: u32,
    /// One-off fee once the audience exceeds the threshold.
    pub overage_flat_fee: u64,
    /// Charge per seat above the threshold.
    pub overage_per_person: u64,
    /// Charge for every seat, independent of the threshold.
    pub per_seat_surcharge: u64,
}

impl Default for ComedyRates {
    fn default() -> Self {
        Self {
            base_amount: 30_000,
            audience_threshold: 20,
            overage_flat_fee: 10_000,
            overage_per_person: 500,
            per_seat_surcharge: 300,
        }
    }
}

/// The complete set of pricing and credit constants.
///
/// Deserializable with missing fields falling back to the defaults, so a
/// rule file only needs to list what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub tragedy: TragedyRates,
    pub comedy: ComedyRates,
    /// Seats above this count earn one volume credit each.
    pub credit_threshold: u32,
    /// Comedies earn an extra `audience / comedy_credit_divisor` credits.
    pub comedy_credit_divisor: NonZeroU32,
    /// Minor units per major currency unit (cents per dollar).
    pub cents_per_unit: NonZeroU64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tragedy: TragedyRates::default(),
            comedy: ComedyRates::default(),
            credit_threshold: 30,
            comedy_credit_divisor: DEFAULT_COMEDY_CREDIT_DIVISOR,
            cents_per_unit: DEFAULT_CENTS_PER_UNIT,
        }
    }
}

/// Amount and credits for one performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge in cents.
    pub amount: u64,
    /// Volume credits earned.
    pub credits: u64,
}

impl PricingRules {
    /// Price a performance: amount and credits from a single genre resolution.
    pub fn price(&self, performance: &Performance, play: &Play) -> Result<Charge, BillingError> {
        let genre = play.genre()?;
        Ok(Charge {
            amount: self.genre_amount(genre, performance.audience)?,
            credits: self.genre_credits(genre, performance.audience),
        })
    }

    /// Charge in cents for one performance of `play`.
    pub fn amount_for(&self, performance: &Performance, play: &Play) -> Result<u64, BillingError> {
        self.genre_amount(play.genre()?, performance.audience)
    }

    /// Volume credits earned by one performance of `play`.
    pub fn credits_for(&self, performance: &Performance, play: &Play) -> Result<u64, BillingError> {
        Ok(self.genre_credits(play.genre()?, performance.audience))
    }

    /// Charge in cents for `audience` seats of a `genre` performance.
    pub fn genre_amount(&self, genre: Genre, audience: u32) -> Result<u64, BillingError> {
        match genre {
            Genre::Tragedy => {
                let rates = &self.tragedy;
                let overage = excess(audience, rates.audience_threshold)
                    .checked_mul(rates.overage_per_person)
                    .ok_or_else(|| overflow(genre, audience))?;
                rates
                    .base_amount
                    .checked_add(overage)
                    .ok_or_else(|| overflow(genre, audience))
            }
            Genre::Comedy => {
                let rates = &self.comedy;
                let mut amount = rates.base_amount;
                if audience > rates.audience_threshold {
                    amount = excess(audience, rates.audience_threshold)
                        .checked_mul(rates.overage_per_person)
                        .and_then(|per_person| per_person.checked_add(rates.overage_flat_fee))
                        .and_then(|overage| amount.checked_add(overage))
                        .ok_or_else(|| overflow(genre, audience))?;
                }
                u64::from(audience)
                    .checked_mul(rates.per_seat_surcharge)
                    .and_then(|surcharge| amount.checked_add(surcharge))
                    .ok_or_else(|| overflow(genre, audience))
            }
        }
    }

    /// Volume credits for `audience` seats of a `genre` performance.
    pub fn genre_credits(&self, genre: Genre, audience: u32) -> u64 {
        let base = excess(audience, self.credit_threshold);
        match genre {
            Genre::Tragedy => base,
            Genre::Comedy => base + u64::from(audience / self.comedy_credit_divisor.get()),
        }
    }
}

/// Charge in cents for one performance under the default price list.
pub fn calculate_amount(performance: &Performance, play: &Play) -> Result<u64, BillingError> {
    PricingRules::default().amount_for(performance, play)
}

/// Volume credits for one performance under the default price list.
pub fn calculate_volume_credits(
    performance: &Performance,
    play: &Play,
) -> Result<u64, BillingError> {
    PricingRules::default().credits_for(performance, play)
}

/// Seats above `threshold`, zero when at or below it.
fn excess(audience: u32, threshold: u32) -> u64 {
    u64::from(audience.saturating_sub(threshold))
}

fn overflow(genre: Genre, audience: u32) -> BillingError {
    BillingError::Arithmetic(format!(
        "{genre} amount for {audience} seats overflows"
    ))
}
