//! Calculator inputs and the parse-and-default step that produces them.
//!
//! [`FormInput`] mirrors what an input form submits: every field is an
//! optional string. [`FormInput::parse`] turns it into a typed [`RawInput`]
//! so that the calculator never has to deal with loose values.

use std::path::Path;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FootprintError, Result};

/// Consumption figures at their natural cadence.
///
/// `energy_kwh`, `gas_therms` and `transport_flight` are monthly; the other
/// transport modes are weekly miles. Absent fields count as zero, except
/// `waste_people` which counts as a single-person household.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kwh: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_therms: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_car: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_bus: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_train: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_flight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_household",
        skip_serializing_if = "Option::is_none"
    )]
    pub waste_people: Option<i64>,
}

impl RawInput {
    /// Household size used by the waste term, clamped to at least one person.
    pub fn household_size(&self) -> i64 {
        self.waste_people.unwrap_or(1).max(1)
    }

    /// Reads an input file, picking the format from the extension
    /// (`.toml`, anything else is treated as JSON).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&raw)?)
        } else {
            Ok(serde_json::from_str(&raw)?)
        }
    }
}

/// Treats missing and non-finite values as zero.
pub(crate) fn amount(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// A numeric field as submitted: a number, a numeric string such as `"300"`,
/// or anything else (`""`, `"abc"`, `true`) which counts as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Whole(i64),
    Fractional(f64),
    Text(String),
    Other(IgnoredAny),
}

impl LooseNumber {
    fn as_f64(&self) -> Option<f64> {
        match self {
            LooseNumber::Whole(n) => Some(*n as f64),
            LooseNumber::Fractional(f) => Some(*f).filter(|f| f.is_finite()),
            LooseNumber::Text(text) => parse_number(Some(text.as_str())),
            LooseNumber::Other(_) => None,
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(LooseNumber::as_f64))
}

fn deserialize_household<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        LooseNumber::Whole(n) => Some(n),
        other => other.as_f64().and_then(household_from_f64),
    }))
}

fn household_from_f64(value: f64) -> Option<i64> {
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

/// Raw form submission. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub energy_kwh: Option<String>,
    pub gas_therms: Option<String>,
    pub transport_car: Option<String>,
    pub transport_bus: Option<String>,
    pub transport_train: Option<String>,
    pub transport_flight: Option<String>,
    pub diet: Option<String>,
    pub waste_people: Option<String>,
}

impl FormInput {
    /// Builds a form from `name=value` pairs; unknown names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = FormInput::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "energyKwh" => &mut form.energy_kwh,
                "gasTherms" => &mut form.gas_therms,
                "transportCar" => &mut form.transport_car,
                "transportBus" => &mut form.transport_bus,
                "transportTrain" => &mut form.transport_train,
                "transportFlight" => &mut form.transport_flight,
                "diet" => &mut form.diet,
                "wastePeople" => &mut form.waste_people,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }

    /// Parses every field, dropping anything empty or unparseable.
    pub fn parse(&self) -> RawInput {
        RawInput {
            energy_kwh: parse_number(self.energy_kwh.as_deref()),
            gas_therms: parse_number(self.gas_therms.as_deref()),
            transport_car: parse_number(self.transport_car.as_deref()),
            transport_bus: parse_number(self.transport_bus.as_deref()),
            transport_train: parse_number(self.transport_train.as_deref()),
            transport_flight: parse_number(self.transport_flight.as_deref()),
            diet: self
                .diet
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            waste_people: parse_number(self.waste_people.as_deref()).and_then(household_from_f64),
        }
    }

    /// Like [`FormInput::parse`], but reports the first field that was filled
    /// in with something other than a number.
    pub fn parse_strict(&self) -> Result<RawInput> {
        let numeric = [
            ("energyKwh", &self.energy_kwh),
            ("gasTherms", &self.gas_therms),
            ("transportCar", &self.transport_car),
            ("transportBus", &self.transport_bus),
            ("transportTrain", &self.transport_train),
            ("transportFlight", &self.transport_flight),
            ("wastePeople", &self.waste_people),
        ];
        for (name, value) in numeric {
            if let Some(text) = value.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                if parse_number(Some(text)).is_none() {
                    return Err(FootprintError::Validation(format!(
                        "field '{name}' must be a number (got '{text}')"
                    )));
                }
            }
        }
        Ok(self.parse())
    }
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_treats_nan_as_zero() {
        assert_eq!(amount(Some(f64::NAN)), 0.0);
        assert_eq!(amount(None), 0.0);
        assert_eq!(amount(Some(12.5)), 12.5);
    }

    #[test]
    fn household_defaults_and_clamps() {
        let mut input = RawInput::default();
        assert_eq!(input.household_size(), 1);
        input.waste_people = Some(0);
        assert_eq!(input.household_size(), 1);
        input.waste_people = Some(-3);
        assert_eq!(input.household_size(), 1);
        input.waste_people = Some(4);
        assert_eq!(input.household_size(), 4);
    }

    #[test]
    fn loose_json_values_are_parsed_or_dropped() {
        let input: RawInput = serde_json::from_str(
            r#"{"energyKwh": "", "gasTherms": "50", "transportCar": "abc",
                "transportBus": true, "transportTrain": null, "transportFlight": 500,
                "wastePeople": "2.7"}"#,
        )
        .unwrap();
        assert_eq!(input.energy_kwh, None);
        assert_eq!(input.gas_therms, Some(50.0));
        assert_eq!(input.transport_car, None);
        assert_eq!(input.transport_bus, None);
        assert_eq!(input.transport_train, None);
        assert_eq!(input.transport_flight, Some(500.0));
        assert_eq!(input.waste_people, Some(2));
    }
}
