//! 中国省市区数据
//!
//! 从内置 JSON 文件加载，结构为 省 → 市 → 区 的嵌套列表

use super::read_json;
use crate::error::Result;
use crate::types::ChinaArea;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// 内置数据集（首次访问时加载）
static BUILTIN: OnceLock<ChinaDataset> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct ChinaDataset {
    provinces: Vec<ChinaArea>,
    /// 省份代码 → provinces 下标
    province_index: HashMap<String, usize>,
}

fn load_builtin() -> ChinaDataset {
    let json_data = include_str!("../../resources/china_areas.json");
    let dataset = ChinaDataset::from_json(json_data).unwrap_or_else(|e| {
        log::error!("Failed to parse china_areas.json: {}", e);
        ChinaDataset::default()
    });
    log::info!("加载内置省市区数据: {} 个省级区划", dataset.provinces.len());
    dataset
}

impl ChinaDataset {
    pub fn new(provinces: Vec<ChinaArea>) -> Self {
        let province_index = provinces
            .iter()
            .enumerate()
            .map(|(i, p)| (p.value.clone(), i))
            .collect();
        Self {
            provinces,
            province_index,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let provinces: Vec<ChinaArea> = serde_json::from_str(json)?;
        Ok(Self::new(provinces))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let provinces: Vec<ChinaArea> = read_json(path)?;
        log::info!(
            "加载省市区数据 {}: {} 个省级区划",
            path.display(),
            provinces.len()
        );
        Ok(Self::new(provinces))
    }

    pub fn builtin() -> &'static ChinaDataset {
        BUILTIN.get_or_init(load_builtin)
    }

    pub fn provinces(&self) -> &[ChinaArea] {
        &self.provinces
    }

    pub fn province(&self, code: &str) -> Option<&ChinaArea> {
        self.province_index.get(code).map(|&i| &self.provinces[i])
    }

    /// 在省份的直接下级中按代码查找城市（不穿透"市辖区"层级）
    pub fn city(&self, province_code: &str, city_code: &str) -> Option<&ChinaArea> {
        self.province(province_code)?
            .children
            .iter()
            .find(|c| c.value == city_code)
    }

    /// 按代码查找任意层级的区划，返回从省份开始的完整路径
    pub fn path_to(&self, code: &str) -> Option<Vec<&ChinaArea>> {
        fn walk<'a>(nodes: &'a [ChinaArea], code: &str, path: &mut Vec<&'a ChinaArea>) -> bool {
            for node in nodes {
                path.push(node);
                // 下级代码总是以上级代码为前缀
                if node.value == code
                    || (code.starts_with(node.value.as_str()) && walk(&node.children, code, path))
                {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        if walk(&self.provinces, code, &mut path) {
            Some(path)
        } else {
            None
        }
    }
}
