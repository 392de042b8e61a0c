use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// .5 goes up.
    #[default]
    HalfUp,
    /// .5 goes to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    /// Round `numer / denom` to an integer. `denom` must be nonzero.
    pub fn div_round(self, numer: u64, denom: u64) -> u64 {
        let q = numer / denom;
        let r = numer % denom;
        // compare 2r against denom without overflowing on huge remainders
        let twice = r as u128 * 2;
        let d = denom as u128;
        let up = match self {
            RoundingMode::HalfUp => twice >= d,
            RoundingMode::HalfEven => twice > d || (twice == d && q % 2 == 1),
        };
        if up { q + 1 } else { q }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceChargePolicy {
    pub enabled_by_default: bool,
    /// Whole percent of the subtotal; 10 is the usual "加一".
    pub rate_percent: u32,
    pub rounding: RoundingMode,
}

impl Default for ServiceChargePolicy {
    fn default() -> Self {
        Self {
            enabled_by_default: true,
            rate_percent: 10,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl ServiceChargePolicy {
    /// Charge on the aggregate subtotal, rounded exactly once.
    pub fn charge_for(&self, subtotal: u64) -> u64 {
        let scaled = subtotal.saturating_mul(self.rate_percent as u64);
        self.rounding.div_round(scaled, 100)
    }
}
