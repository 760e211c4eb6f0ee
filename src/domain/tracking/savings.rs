//! Money and cigarettes saved since the quit date.

use serde::{Deserialize, Serialize};

/// Price of a pack, in cents, and how many cigarettes it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackPricing {
    pub pack_price_cents: i64,
    pub cigarettes_per_pack: u32,
}

impl PackPricing {
    pub fn new(pack_price_cents: i64, cigarettes_per_pack: u32) -> Self {
        Self {
            pack_price_cents,
            cigarettes_per_pack,
        }
    }
}

pub fn cigarettes_not_smoked(days: u32, cigarettes_per_day: u32) -> u64 {
    u64::from(days) * u64::from(cigarettes_per_day)
}

/// Money saved in cents, rounded down.
pub fn money_saved(days: u32, cigarettes_per_day: u32, pricing: PackPricing) -> i64 {
    if pricing.cigarettes_per_pack == 0 {
        return 0;
    }
    let cigarettes = cigarettes_not_smoked(days, cigarettes_per_day) as i64;
    cigarettes * pricing.pack_price_cents / i64::from(pricing.cigarettes_per_pack)
}

/// `R$ 12,50` style rendering of an amount in cents.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}R$ {},{:02}", sign, cents / 100, cents % 100)
}
