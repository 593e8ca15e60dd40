//! 世界国家/州/城市数据
//!
//! 按国家代码、州代码查询，保持数据源中的原始顺序

use super::read_json;
use crate::error::Result;
use crate::types::{City, Country, State};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN: OnceLock<WorldDataset> = OnceLock::new();

/// JSON 文件结构
#[derive(Debug, Deserialize)]
struct WorldFile {
    countries: Vec<Country>,
    #[serde(default)]
    states: Vec<State>,
    #[serde(default)]
    cities: Vec<City>,
}

#[derive(Debug, Clone, Default)]
pub struct WorldDataset {
    countries: Vec<Country>,
    country_index: HashMap<String, usize>,
    states_by_country: HashMap<String, Vec<State>>,
    cities_by_state: HashMap<(String, String), Vec<City>>,
}

fn load_builtin() -> WorldDataset {
    let json_data = include_str!("../../resources/world.json");
    let dataset = WorldDataset::from_json(json_data).unwrap_or_else(|e| {
        log::error!("Failed to parse world.json: {}", e);
        WorldDataset::default()
    });
    log::info!("加载内置世界区划数据: {} 个国家", dataset.countries.len());
    dataset
}

impl WorldDataset {
    pub fn new(countries: Vec<Country>, states: Vec<State>, cities: Vec<City>) -> Self {
        let country_index = countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.iso_code.clone(), i))
            .collect();

        let mut states_by_country: HashMap<String, Vec<State>> = HashMap::new();
        for s in states {
            states_by_country
                .entry(s.country_code.clone())
                .or_default()
                .push(s);
        }

        let mut cities_by_state: HashMap<(String, String), Vec<City>> = HashMap::new();
        for c in cities {
            cities_by_state
                .entry((c.country_code.clone(), c.state_code.clone()))
                .or_default()
                .push(c);
        }

        Self {
            countries,
            country_index,
            states_by_country,
            cities_by_state,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: WorldFile = serde_json::from_str(json)?;
        Ok(Self::new(file.countries, file.states, file.cities))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file: WorldFile = read_json(path)?;
        log::info!(
            "加载世界区划数据 {}: {} 个国家, {} 个州, {} 个城市",
            path.display(),
            file.countries.len(),
            file.states.len(),
            file.cities.len()
        );
        Ok(Self::new(file.countries, file.states, file.cities))
    }

    pub fn builtin() -> &'static WorldDataset {
        BUILTIN.get_or_init(load_builtin)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, code: &str) -> Option<&Country> {
        self.country_index.get(code).map(|&i| &self.countries[i])
    }

    pub fn states_of(&self, country_code: &str) -> &[State] {
        self.states_by_country
            .get(country_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn state(&self, country_code: &str, state_code: &str) -> Option<&State> {
        self.states_of(country_code)
            .iter()
            .find(|s| s.iso_code == state_code)
    }

    pub fn cities_of(&self, country_code: &str, state_code: &str) -> &[City] {
        self.cities_by_state
            .get(&(country_code.to_string(), state_code.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_states(&self, country_code: &str) -> bool {
        !self.states_of(country_code).is_empty()
    }

    pub fn has_cities(&self, country_code: &str, state_code: &str) -> bool {
        !self.cities_of(country_code, state_code).is_empty()
    }
}
