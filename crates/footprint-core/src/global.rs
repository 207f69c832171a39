use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEmissions {
    pub country: String,
    /// Mt CO2e per year
    pub total_emissions: f64,
    /// t CO2e per person per year
    pub per_capita: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionsMetric {
    #[default]
    TotalEmissions,
    PerCapita,
}

impl EmissionsMetric {
    pub fn value(&self, row: &CountryEmissions) -> f64 {
        match self {
            EmissionsMetric::TotalEmissions => row.total_emissions,
            EmissionsMetric::PerCapita => row.per_capita,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalEmissions {
    pub data: Vec<CountryEmissions>,
    pub source: String,
    pub year: i32,
}

const COUNTRIES: [(&str, f64, f64); 10] = [
    ("China", 10065.0, 7.38),
    ("United States", 5416.0, 16.56),
    ("India", 2654.0, 1.96),
    ("Russia", 1711.0, 11.85),
    ("Japan", 1162.0, 9.27),
    ("Germany", 759.0, 9.13),
    ("Iran", 720.0, 8.65),
    ("South Korea", 659.0, 12.89),
    ("Canada", 569.0, 15.32),
    ("Brazil", 457.0, 2.15),
];

impl GlobalEmissions {
    /// Reference figures for the ten largest emitters.
    pub fn reference() -> Self {
        Self {
            data: COUNTRIES
                .iter()
                .map(|(country, total, per_capita)| CountryEmissions {
                    country: country.to_string(),
                    total_emissions: *total,
                    per_capita: *per_capita,
                })
                .collect(),
            source: "World Resources Institute (reference sample)".to_string(),
            year: 2022,
        }
    }

    /// Rows sorted descending by `metric`.
    pub fn ranked_by(mut self, metric: EmissionsMetric) -> Self {
        self.data
            .sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_capita_ranking_puts_united_states_first() {
        let ranked = GlobalEmissions::reference().ranked_by(EmissionsMetric::PerCapita);
        assert_eq!(ranked.data[0].country, "United States");
        assert_eq!(ranked.data[9].country, "India");
        assert_eq!(ranked.year, 2022);
    }

    #[test]
    fn total_ranking_puts_china_first() {
        let ranked = GlobalEmissions::reference().ranked_by(EmissionsMetric::TotalEmissions);
        assert_eq!(ranked.data[0].country, "China");
        assert_eq!(ranked.data.len(), 10);
    }
}
