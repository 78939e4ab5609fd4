use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Buyback-wide monetary cap applied under employment-status capping
pub fn status_monetary_cap_inr() -> Decimal {
    dec!(10_000_000)
}

/// Employment status of the option holder at buyback time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Current,
    Former,
}

impl EmploymentStatus {
    /// Maximum percentage of the position this status may tender
    pub fn cap_percent(&self) -> Decimal {
        match self {
            EmploymentStatus::Current => dec!(25),
            EmploymentStatus::Former => dec!(50),
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            EmploymentStatus::Current => "Current Employee",
            EmploymentStatus::Former => "Former Employee",
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Selling-cap configuration for a buyback offer.
///
/// Offers come in two shapes: a flat monetary cap chosen per participant,
/// or an employment-status percentage cap combined with the fixed
/// buyback-wide monetary cap. The requested percentage and the total
/// position always cap the sale in addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapContext {
    /// Absolute cap on sale proceeds, in INR
    MonetaryCap { amount_inr: Decimal },
    /// Percentage cap derived from employment status
    EmploymentStatus(EmploymentStatus),
}

/// Which constraint bound the number of sellable units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitingFactor {
    RequestedPercent,
    StatusCap,
    MonetaryCap,
    TotalUnits,
}

impl LimitingFactor {
    pub fn display(&self) -> &'static str {
        match self {
            LimitingFactor::RequestedPercent => "Requested Percentage",
            LimitingFactor::StatusCap => "Employment Status Cap",
            LimitingFactor::MonetaryCap => "Monetary Cap",
            LimitingFactor::TotalUnits => "Total Available Units",
        }
    }
}

impl std::fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Resolved split of a position into sellable and retained units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub sellable_units: u64,
    pub non_sellable_units: u64,
    pub limiting_factor: LimitingFactor,
    /// Percentage of the position actually sellable
    pub actual_percent: Decimal,
}

/// Floor a candidate to whole units; quotients beyond u64 range can never
/// bind below the total, so they are treated as unbounded.
fn whole_units(candidate: Decimal) -> u64 {
    candidate.floor().to_u64().unwrap_or(u64::MAX)
}

/// Determine how many units may actually be tendered.
///
/// Takes the minimum of the requested percentage, the cap configuration
/// and the total position, each expressed as an absolute unit count.
/// When several constraints share the minimum, attribution follows a fixed
/// priority: requested percentage, status cap, monetary cap, total units.
/// Over-requests are clamped, never rejected.
pub fn resolve_sellable_units(
    total_units: u64,
    requested_percent: Decimal,
    cap: &CapContext,
    buyback_price_inr: Decimal,
) -> Allocation {
    let total = Decimal::from(total_units);

    let mut candidates = vec![(
        LimitingFactor::RequestedPercent,
        whole_units(total * requested_percent / dec!(100)),
    )];

    match cap {
        CapContext::MonetaryCap { amount_inr } => {
            candidates.push((
                LimitingFactor::MonetaryCap,
                whole_units(amount_inr / buyback_price_inr),
            ));
        }
        CapContext::EmploymentStatus(status) => {
            candidates.push((
                LimitingFactor::StatusCap,
                whole_units(total * status.cap_percent() / dec!(100)),
            ));
            candidates.push((
                LimitingFactor::MonetaryCap,
                whole_units(status_monetary_cap_inr() / buyback_price_inr),
            ));
        }
    }
    candidates.push((LimitingFactor::TotalUnits, total_units));

    let sellable_units = candidates.iter().map(|(_, units)| *units).min().unwrap_or(0);
    let (limiting_factor, _) = candidates
        .into_iter()
        .find(|(_, units)| *units == sellable_units)
        .unwrap_or((LimitingFactor::TotalUnits, total_units));

    let actual_percent = Decimal::from(sellable_units) * dec!(100) / total;

    log::debug!(
        "allocation: total={}, requested={}%, sellable={}, limited by {}",
        total_units,
        requested_percent,
        sellable_units,
        limiting_factor
    );

    Allocation {
        sellable_units,
        non_sellable_units: total_units - sellable_units,
        limiting_factor,
        actual_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_percent_binds() {
        let cap = CapContext::MonetaryCap {
            amount_inr: dec!(100_000_000),
        };
        let allocation = resolve_sellable_units(1000, dec!(10), &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 100);
        assert_eq!(allocation.non_sellable_units, 900);
        assert_eq!(allocation.limiting_factor, LimitingFactor::RequestedPercent);
        assert_eq!(allocation.actual_percent, dec!(10));
    }

    #[test]
    fn status_cap_binds_for_current_employee() {
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Current);
        let allocation = resolve_sellable_units(1000, dec!(100), &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 250);
        assert_eq!(allocation.non_sellable_units, 750);
        assert_eq!(allocation.limiting_factor, LimitingFactor::StatusCap);
        assert_eq!(allocation.actual_percent, dec!(25));
    }

    #[test]
    fn former_employee_cap_is_wider() {
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Former);
        let allocation = resolve_sellable_units(1000, dec!(100), &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 500);
        assert_eq!(allocation.limiting_factor, LimitingFactor::StatusCap);
    }

    #[test]
    fn monetary_cap_binds_when_strictly_smallest() {
        let cap = CapContext::MonetaryCap {
            amount_inr: dec!(50_000),
        };
        let allocation = resolve_sellable_units(1000, dec!(100), &cap, dec!(5010));
        // floor(50,000 / 5,010) = 9
        assert_eq!(allocation.sellable_units, 9);
        assert_eq!(allocation.limiting_factor, LimitingFactor::MonetaryCap);
    }

    #[test]
    fn status_monetary_cap_binds_at_high_prices() {
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Current);
        // floor(10,000,000 / 100,000) = 100 < 250 status units
        let allocation = resolve_sellable_units(1000, dec!(100), &cap, dec!(100_000));
        assert_eq!(allocation.sellable_units, 100);
        assert_eq!(allocation.limiting_factor, LimitingFactor::MonetaryCap);
    }

    #[test]
    fn over_request_is_clamped_to_total() {
        let cap = CapContext::MonetaryCap {
            amount_inr: dec!(100_000_000),
        };
        let allocation = resolve_sellable_units(100, dec!(100), &cap, dec!(835));
        assert_eq!(allocation.sellable_units, 100);
        assert_eq!(allocation.non_sellable_units, 0);
        // 100% of 100 units equals the total; requested percent wins attribution
        assert_eq!(allocation.limiting_factor, LimitingFactor::RequestedPercent);
    }

    #[test]
    fn zero_percent_requests_nothing() {
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Current);
        let allocation = resolve_sellable_units(1000, Decimal::ZERO, &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 0);
        assert_eq!(allocation.non_sellable_units, 1000);
        assert_eq!(allocation.limiting_factor, LimitingFactor::RequestedPercent);
        assert_eq!(allocation.actual_percent, Decimal::ZERO);
    }

    #[test]
    fn tie_attribution_prefers_requested_percent() {
        // 25% requested equals the current-employee cap exactly
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Current);
        let allocation = resolve_sellable_units(1000, dec!(25), &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 250);
        assert_eq!(allocation.limiting_factor, LimitingFactor::RequestedPercent);
    }

    #[test]
    fn fractional_unit_counts_are_floored() {
        let cap = CapContext::MonetaryCap {
            amount_inr: dec!(100_000_000),
        };
        // 33% of 100 = 33.33 units
        let allocation = resolve_sellable_units(100, dec!(33.333), &cap, dec!(5010));
        assert_eq!(allocation.sellable_units, 33);
    }

    #[test]
    fn sellable_never_exceeds_total() {
        // cap quotient far beyond u64 range
        let cap = CapContext::MonetaryCap {
            amount_inr: dec!(1_000_000_000_000_000_000),
        };
        let allocation = resolve_sellable_units(42, dec!(100), &cap, dec!(0.01));
        assert_eq!(allocation.sellable_units, 42);
        assert_eq!(allocation.non_sellable_units, 0);
    }
}
