use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::factors::EmissionFactors;
use crate::input::{amount, RawInput};
use crate::rounding::round2;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
/// Average number of days in a month.
pub const DAYS_PER_MONTH: f64 = 30.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Energy,
    Transport,
    Flights,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Energy,
        Category::Transport,
        Category::Flights,
        Category::Diet,
        Category::Waste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Transport => "transport",
            Category::Flights => "flights",
            Category::Diet => "diet",
            Category::Waste => "waste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Transport => "Transport",
            Category::Flights => "Flights",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }
}

/// Monthly kg CO2e per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub energy: f64,
    pub transport: f64,
    pub flights: f64,
    pub diet: f64,
    pub waste: f64,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.energy,
            Category::Transport => self.transport,
            Category::Flights => self.flights,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    pub fn entries(&self) -> [(Category, f64); 5] {
        Category::ALL.map(|category| (category, self.get(category)))
    }

    pub fn sum(&self) -> f64 {
        self.energy + self.transport + self.flights + self.diet + self.waste
    }

    /// Categories ordered largest first. Equal values keep category order.
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut entries = self.entries().to_vec();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// Fraction of the breakdown sum each category represents. All zeros when
    /// the sum is not positive.
    pub fn shares(&self) -> [(Category, f64); 5] {
        let sum = self.sum();
        self.entries().map(|(category, value)| {
            let share = if sum > 0.0 { value / sum } else { 0.0 };
            (category, share)
        })
    }

    fn rounded(&self) -> Self {
        Self {
            energy: round2(self.energy),
            transport: round2(self.transport),
            flights: round2(self.flights),
            diet: round2(self.diet),
            waste: round2(self.waste),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    /// kg CO2e per month, rounded from the unrounded category sum.
    pub total_footprint: f64,
    pub breakdown: Breakdown,
    pub inputs: RawInput,
}

/// A term that overflowed (or became NaN from opposing infinities) counts as zero.
fn finite_term(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes a monthly footprint with the default emission factors.
pub fn compute(raw: RawInput) -> FootprintResult {
    compute_with(raw, &EmissionFactors::DEFAULT)
}

/// Computes a monthly footprint. Never fails: missing or non-finite amounts
/// count as zero, an unknown diet contributes nothing, and the household is
/// at least one person.
pub fn compute_with(raw: RawInput, factors: &EmissionFactors) -> FootprintResult {
    let energy =
        amount(raw.energy_kwh) * factors.energy_kwh + amount(raw.gas_therms) * factors.gas_therms;

    let transport = (amount(raw.transport_car) * factors.transport_car
        + amount(raw.transport_bus) * factors.transport_bus
        + amount(raw.transport_train) * factors.transport_train)
        * WEEKS_PER_MONTH;

    let flights = amount(raw.transport_flight) * factors.transport_flight;

    let diet = factors.diet_weekly(raw.diet.as_deref()) * WEEKS_PER_MONTH;

    let waste = raw.household_size() as f64 * factors.waste_per_person * DAYS_PER_MONTH;

    let unrounded = Breakdown {
        energy: finite_term(energy),
        transport: finite_term(transport),
        flights: finite_term(flights),
        diet: finite_term(diet),
        waste: finite_term(waste),
    };
    let sum = unrounded.sum();
    // terms are finite, but their sum can still overflow
    let total = if sum.is_finite() {
        sum
    } else {
        f64::MAX.copysign(sum)
    };

    debug!(total, "computed footprint");

    FootprintResult {
        total_footprint: round2(total),
        breakdown: unrounded.rounded(),
        inputs: raw,
    }
}
