use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::error::{FootprintError, Result};
use crate::factors::EmissionFactors;

pub const BIND_ADDR_VAR: &str = "FOOTPRINT_BIND_ADDR";
pub const FACTORS_PATH_VAR: &str = "FOOTPRINT_FACTORS_PATH";
pub const SEED_DEMO_VAR: &str = "FOOTPRINT_SEED_DEMO";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub factors_path: Option<PathBuf>,
    pub seed_demo: bool,
}

impl AppConfig {
    /// Reads configuration from the process environment. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| {
            info!("{BIND_ADDR_VAR} not set, using default: {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|err| {
            FootprintError::Validation(format!("invalid {BIND_ADDR_VAR} '{bind_raw}': {err}"))
        })?;

        let factors_path = lookup(FACTORS_PATH_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            Some(value) => parse_flag(SEED_DEMO_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            factors_path,
            seed_demo,
        })
    }

    /// Emission factors from `factors_path`, or the defaults.
    pub fn load_factors(&self) -> Result<EmissionFactors> {
        match &self.factors_path {
            Some(path) => {
                info!(path = %path.display(), "loading emission factors");
                EmissionFactors::from_toml_file(path)
            }
            None => Ok(EmissionFactors::default()),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(FootprintError::Validation(format!(
            "invalid {key} '{other}': expected true or false"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(config.factors_path.is_none());
        assert!(!config.seed_demo);
        assert_eq!(config.load_factors().unwrap(), EmissionFactors::DEFAULT);
    }

    #[test]
    fn environment_values_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (FACTORS_PATH_VAR, "/etc/footprint/factors.toml"),
            (SEED_DEMO_VAR, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.factors_path.as_deref(),
            Some(std::path::Path::new("/etc/footprint/factors.toml"))
        );
        assert!(config.seed_demo);
    }

    #[test]
    fn bad_bind_address_is_a_validation_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "not-an-address")]))
            .unwrap_err();
        assert!(matches!(err, FootprintError::Validation(_)));
    }
}
