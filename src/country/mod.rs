//! Country catalog
//!
//! Static reference data for the countries a character can be born into.
//! The table is built once on first access and only ever handed out through
//! shared `Arc`s, so nothing in the simulation can mutate it.

use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Key of the neutral fallback country
pub const CUSTOM_COUNTRY: &str = "custom";

/// Government policy indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    /// Paid parental leave, in days
    pub parental_leave: f32,
    /// Monthly child benefit in local currency
    pub child_benefits: f32,
    pub childcare_cost: f32,
    pub tax_benefits_for_children: f32,
    pub education_cost: f32,
    pub healthcare_cost: f32,
    pub work_life_balance: f32,
}

/// Cultural indices, 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    pub family_oriented: f32,
    pub career_focused: f32,
    pub traditionalism: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economy {
    /// Yearly average salary in local currency
    pub average_salary: f32,
    /// Unemployment rate in percent
    pub unemployment: f32,
    pub living_cost: f32,
    pub housing_cost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Catalog key this country was registered under
    #[serde(rename = "type")]
    pub key: String,
    pub policies: Policies,
    pub culture: Culture,
    pub economy: Economy,
}

impl Country {
    /// Whether this is the neutral fallback country
    pub fn is_custom(&self) -> bool {
        self.key == CUSTOM_COUNTRY
    }
}

static CATALOG: OnceLock<AHashMap<&'static str, Arc<Country>>> = OnceLock::new();

fn catalog() -> &'static AHashMap<&'static str, Arc<Country>> {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a country by key, falling back to the neutral custom country
pub fn get_country(key: &str) -> Arc<Country> {
    let table = catalog();
    match table.get(key) {
        Some(country) => Arc::clone(country),
        None => {
            tracing::debug!(key, "unknown country key, using custom country");
            Arc::clone(&table[CUSTOM_COUNTRY])
        }
    }
}

/// Selectable country keys, excluding the custom fallback, sorted
pub fn country_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = catalog()
        .keys()
        .copied()
        .filter(|k| *k != CUSTOM_COUNTRY)
        .collect();
    keys.sort_unstable();
    keys
}

fn build_catalog() -> AHashMap<&'static str, Arc<Country>> {
    let countries = [
        entry(
            CUSTOM_COUNTRY,
            "Custom Country",
            Policies {
                parental_leave: 50.0,
                child_benefits: 50.0,
                childcare_cost: 50.0,
                tax_benefits_for_children: 50.0,
                education_cost: 50.0,
                healthcare_cost: 50.0,
                work_life_balance: 50.0,
            },
            Culture {
                family_oriented: 50.0,
                career_focused: 50.0,
                traditionalism: 50.0,
            },
            Economy {
                average_salary: 50_000.0,
                unemployment: 50.0,
                living_cost: 50.0,
                housing_cost: 50.0,
            },
        ),
        entry(
            "sweden",
            "Sweden",
            Policies {
                parental_leave: 480.0,
                child_benefits: 1250.0, // SEK
                childcare_cost: 20.0,
                tax_benefits_for_children: 70.0,
                education_cost: 10.0,
                healthcare_cost: 15.0,
                work_life_balance: 85.0,
            },
            Culture {
                family_oriented: 75.0,
                career_focused: 65.0,
                traditionalism: 45.0,
            },
            Economy {
                average_salary: 42_000.0,
                unemployment: 7.5,
                living_cost: 70.0,
                housing_cost: 75.0,
            },
        ),
        entry(
            "usa",
            "United States",
            Policies {
                parental_leave: 0.0,
                child_benefits: 300.0,
                childcare_cost: 80.0,
                tax_benefits_for_children: 40.0,
                education_cost: 85.0,
                healthcare_cost: 90.0,
                work_life_balance: 40.0,
            },
            Culture {
                family_oriented: 60.0,
                career_focused: 80.0,
                traditionalism: 55.0,
            },
            Economy {
                average_salary: 65_000.0,
                unemployment: 5.5,
                living_cost: 65.0,
                housing_cost: 70.0,
            },
        ),
        entry(
            "japan",
            "Japan",
            Policies {
                parental_leave: 58.0,
                child_benefits: 15_000.0, // yen
                childcare_cost: 60.0,
                tax_benefits_for_children: 30.0,
                education_cost: 60.0,
                healthcare_cost: 30.0,
                work_life_balance: 25.0,
            },
            Culture {
                family_oriented: 70.0,
                career_focused: 90.0,
                traditionalism: 80.0,
            },
            Economy {
                average_salary: 4_500_000.0, // yen
                unemployment: 2.8,
                living_cost: 75.0,
                housing_cost: 80.0,
            },
        ),
        entry(
            "germany",
            "Germany",
            Policies {
                parental_leave: 360.0,
                child_benefits: 219.0,
                childcare_cost: 30.0,
                tax_benefits_for_children: 60.0,
                education_cost: 15.0,
                healthcare_cost: 25.0,
                work_life_balance: 70.0,
            },
            Culture {
                family_oriented: 65.0,
                career_focused: 70.0,
                traditionalism: 50.0,
            },
            Economy {
                average_salary: 52_000.0,
                unemployment: 5.7,
                living_cost: 65.0,
                housing_cost: 60.0,
            },
        ),
    ];

    countries.into_iter().collect()
}

fn entry(
    key: &'static str,
    name: &str,
    policies: Policies,
    culture: Culture,
    economy: Economy,
) -> (&'static str, Arc<Country>) {
    let country = Country {
        name: name.to_string(),
        key: key.to_string(),
        policies,
        culture,
        economy,
    };
    (key, Arc::new(country))
}
