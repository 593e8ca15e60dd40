use crate::error::{RegionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "region_config.json";
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

pub const ENV_CHINA_DATASET: &str = "REGION_CHINA_DATASET";
pub const ENV_WORLD_DATASET: &str = "REGION_WORLD_DATASET";
pub const ENV_SEARCH_LIMIT: &str = "REGION_SEARCH_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// 外部省市区数据文件，不设置时使用内置数据
    pub china_dataset: Option<PathBuf>,
    /// 外部世界国家/州/城市数据文件
    pub world_dataset: Option<PathBuf>,
    pub search_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            china_dataset: None,
            world_dataset: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl ResolverConfig {
    /// 读取配置文件，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("配置文件 {} 不存在，使用默认配置", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| RegionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| RegionError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|source| RegionError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| RegionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 用环境变量覆盖配置项
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup(ENV_CHINA_DATASET) {
            self.china_dataset = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_WORLD_DATASET) {
            self.world_dataset = Some(PathBuf::from(path));
        }
        if let Some(limit) = lookup(ENV_SEARCH_LIMIT) {
            self.search_limit = limit.trim().parse().map_err(|_| {
                RegionError::Config(format!("{} 必须是正整数: {}", ENV_SEARCH_LIMIT, limit))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.search_limit == 0 {
            return Err(RegionError::Config("search_limit 必须大于 0".to_string()));
        }
        Ok(())
    }
}
