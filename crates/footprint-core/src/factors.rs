//! Emission-factor table used by the calculator.
//!
//! Factors are read-only for the lifetime of a process. The defaults are
//! simplified EPA/ICAO figures; a deployment may override any subset of them
//! from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, Result};

/// kg CO2e multipliers per unit of consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EmissionFactors {
    /// kg CO2e / kWh
    pub energy_kwh: f64,
    /// kg CO2e / therm
    pub gas_therms: f64,
    /// kg CO2e / mile
    pub transport_car: f64,
    pub transport_bus: f64,
    pub transport_train: f64,
    pub transport_flight: f64,
    /// kg CO2e / week
    pub diet_omnivore: f64,
    pub diet_vegetarian: f64,
    pub diet_vegan: f64,
    /// kg CO2e / day / person
    pub waste_per_person: f64,
}

impl EmissionFactors {
    pub const DEFAULT: EmissionFactors = EmissionFactors {
        energy_kwh: 0.389,
        gas_therms: 5.3,
        transport_car: 0.24,
        transport_bus: 0.08,
        transport_train: 0.05,
        transport_flight: 0.12,
        diet_omnivore: 45.0,
        diet_vegetarian: 30.0,
        diet_vegan: 20.0,
        waste_per_person: 2.2,
    };

    /// Parses a (possibly partial) factor table. Keys left out keep their
    /// default value.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let factors: EmissionFactors = toml::from_str(raw)?;
        factors.validate()?;
        Ok(factors)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Weekly diet footprint for a diet key. Unknown or absent keys yield 0.
    pub fn diet_weekly(&self, key: Option<&str>) -> f64 {
        match key.and_then(Diet::from_key) {
            Some(Diet::Omnivore) => self.diet_omnivore,
            Some(Diet::Vegetarian) => self.diet_vegetarian,
            Some(Diet::Vegan) => self.diet_vegan,
            None => 0.0,
        }
    }

    pub fn entries(&self) -> [(&'static str, f64, &'static str); 10] {
        [
            ("energyKwh", self.energy_kwh, "kg CO2e / kWh"),
            ("gasTherms", self.gas_therms, "kg CO2e / therm"),
            ("transportCar", self.transport_car, "kg CO2e / mile"),
            ("transportBus", self.transport_bus, "kg CO2e / mile"),
            ("transportTrain", self.transport_train, "kg CO2e / mile"),
            ("transportFlight", self.transport_flight, "kg CO2e / mile"),
            ("dietOmnivore", self.diet_omnivore, "kg CO2e / week"),
            ("dietVegetarian", self.diet_vegetarian, "kg CO2e / week"),
            ("dietVegan", self.diet_vegan, "kg CO2e / week"),
            ("wastePerPerson", self.waste_per_person, "kg CO2e / day / person"),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (key, value, _) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::Validation(format!(
                    "emission factor '{key}' must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    #[serde(rename = "dietOmnivore")]
    Omnivore,
    #[serde(rename = "dietVegetarian")]
    Vegetarian,
    #[serde(rename = "dietVegan")]
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Omnivore, Diet::Vegetarian, Diet::Vegan];

    pub fn key(&self) -> &'static str {
        match self {
            Diet::Omnivore => "dietOmnivore",
            Diet::Vegetarian => "dietVegetarian",
            Diet::Vegan => "dietVegan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Diet::Omnivore => "Omnivore",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|diet| diet.key() == value)
    }
}
