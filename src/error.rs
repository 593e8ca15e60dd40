//! 数据集与配置加载错误
//!
//! 查询本身不会失败（未命中返回空列表），只有读取外部数据集或配置文件时才会出错。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("读取文件失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 JSON 失败 {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置无效: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RegionError>;
