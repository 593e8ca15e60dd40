//! 数据源适配
//!
//! 两份互相独立的只读数据集：中国省市区嵌套数据，以及世界国家/州/城市数据。
//! 数据全部在内存中，未知代码返回空结果而不是错误。

mod china;
mod world;

pub use china::ChinaDataset;
pub use world::WorldDataset;

use crate::error::{RegionError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// 读取外部 JSON 数据文件
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| RegionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RegionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
