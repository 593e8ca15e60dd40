//! 合并中国省市区数据与世界数据
//!
//! 台湾、香港、澳门作为与省份同级的节点挂在"中国"下：
//! 世界数据中有对应的州数据时优先使用，否则使用内置列表。

use crate::normalize::{self, CHINA_CODE, CHINA_LABEL};
use crate::sources::{ChinaDataset, WorldDataset};
use crate::types::{ChinaArea, RegionNode};

/// 香港十八区，按固定顺序
const HONG_KONG_DISTRICTS: [&str; 18] = [
    "Central and Western",
    "Wan Chai",
    "Eastern",
    "Southern",
    "Yau Tsim Mong",
    "Sham Shui Po",
    "Kowloon City",
    "Wong Tai Sin",
    "Kwun Tong",
    "Tsuen Wan",
    "Tuen Mun",
    "Yuen Long",
    "North",
    "Tai Po",
    "Sai Kung",
    "Sha Tin",
    "Kwai Tsing",
    "Islands",
];

/// 澳门七个堂区
const MACAU_PARISHES: [&str; 7] = [
    "花地玛堂区",
    "圣安多尼堂区",
    "大堂区",
    "望德堂区",
    "风顺堂区",
    "嘉模堂区",
    "圣方济各堂区",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialRegion {
    Taiwan,
    HongKong,
    Macau,
}

impl SpecialRegion {
    pub const ALL: [SpecialRegion; 3] = [
        SpecialRegion::Taiwan,
        SpecialRegion::HongKong,
        SpecialRegion::Macau,
    ];

    /// 在"中国"下的节点值，同时也是世界数据中的国家代码
    pub fn code(self) -> &'static str {
        match self {
            SpecialRegion::Taiwan => "TW",
            SpecialRegion::HongKong => "HK",
            SpecialRegion::Macau => "MO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialRegion::Taiwan => "台湾省",
            SpecialRegion::HongKong => "香港特别行政区",
            SpecialRegion::Macau => "澳门特别行政区",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// 香港、澳门只到市一级，不再有区县
    pub fn has_districts(self) -> bool {
        matches!(self, SpecialRegion::Taiwan)
    }
}

/// "中国"下的特别行政区节点（未展开）
///
/// 台湾在世界数据缺少州数据时是叶子；港澳始终有内置列表可展开。
pub fn special_region_node(world: &WorldDataset, region: SpecialRegion) -> RegionNode {
    let is_leaf = match region {
        SpecialRegion::Taiwan => !world.has_states(region.code()),
        SpecialRegion::HongKong | SpecialRegion::Macau => false,
    };
    RegionNode::lazy_unless(region.code(), region.label(), is_leaf)
}

/// 特别行政区的下一级
pub fn special_region_children(world: &WorldDataset, region: SpecialRegion) -> Vec<RegionNode> {
    let code = region.code();
    let states = world.states_of(code);

    match region {
        SpecialRegion::Taiwan => states
            .iter()
            .map(|s| {
                RegionNode::lazy_unless(
                    &s.iso_code,
                    normalize::translate_taiwan_state(&s.name),
                    !world.has_cities(code, &s.iso_code),
                )
            })
            .collect(),
        SpecialRegion::HongKong if !states.is_empty() => states
            .iter()
            .map(|s| RegionNode::leaf(&s.iso_code, normalize::translate_hong_kong(&s.name)))
            .collect(),
        SpecialRegion::Macau if !states.is_empty() => states
            .iter()
            .map(|s| RegionNode::leaf(&s.iso_code, normalize::translate_macau(&s.name)))
            .collect(),
        SpecialRegion::HongKong => {
            log::debug!("世界数据缺少香港分区，使用内置十八区");
            HONG_KONG_DISTRICTS
                .iter()
                .map(|name| RegionNode::leaf(*name, normalize::translate_hong_kong(name)))
                .collect()
        }
        SpecialRegion::Macau => {
            log::debug!("世界数据缺少澳门分区，使用内置堂区列表");
            MACAU_PARISHES
                .iter()
                .map(|name| RegionNode::leaf(*name, *name))
                .collect()
        }
    }
}

/// 特别行政区的第三级，只有台湾县市下有城市
pub fn special_region_grandchildren(
    world: &WorldDataset,
    region: SpecialRegion,
    state_code: &str,
) -> Vec<RegionNode> {
    if !region.has_districts() {
        return vec![];
    }
    world
        .cities_of(region.code(), state_code)
        .iter()
        .map(|c| RegionNode::leaf(&c.name, normalize::translate_taiwan_city(&c.name)))
        .collect()
}

/// 省级节点（未展开）
pub fn province_node(province: &ChinaArea) -> RegionNode {
    RegionNode::lazy_unless(&province.value, &province.label, province.children.is_empty())
}

/// "中国"的下一级：所有省份，之后依次是台湾、香港、澳门
pub fn china_states(china: &ChinaDataset, world: &WorldDataset) -> Vec<RegionNode> {
    let mut nodes: Vec<RegionNode> = china.provinces().iter().map(province_node).collect();
    nodes.extend(
        SpecialRegion::ALL
            .into_iter()
            .map(|region| special_region_node(world, region)),
    );
    nodes
}

/// 顶层国家列表，中国固定在第一位
pub fn countries(world: &WorldDataset) -> Vec<RegionNode> {
    let mut nodes = vec![RegionNode::branch(CHINA_CODE, CHINA_LABEL)];
    nodes.extend(
        world
            .countries()
            .iter()
            .filter(|c| c.iso_code != CHINA_CODE)
            .map(|c| {
                RegionNode::lazy_unless(
                    &c.iso_code,
                    normalize::country_label(&c.iso_code, &c.name),
                    !world.has_states(&c.iso_code),
                )
            }),
    );
    nodes
}

/// 把未展开的可展开节点替换为已展开节点，叶子保持不变
fn expand_with(node: RegionNode, children: impl FnOnce(&str) -> Vec<RegionNode>) -> RegionNode {
    if node.is_leaf() {
        return node;
    }
    let children = children(&node.value);
    RegionNode::expanded(node.value, node.label, children)
}

fn expanded_province(province: &ChinaArea) -> RegionNode {
    let cities = normalize::province_children(province)
        .into_iter()
        .map(|city| {
            expand_with(city, |code| {
                province
                    .children
                    .iter()
                    .find(|c| c.value == code)
                    .map(normalize::city_children)
                    .unwrap_or_default()
            })
        })
        .collect();
    expand_with(province_node(province), |_| cities)
}

fn expanded_special_region(world: &WorldDataset, region: SpecialRegion) -> RegionNode {
    expand_with(special_region_node(world, region), |_| {
        special_region_children(world, region)
            .into_iter()
            .map(|state| {
                expand_with(state, |code| special_region_grandchildren(world, region, code))
            })
            .collect()
    })
}

/// 完整展开的"中国"子树，每一级的内容与按需查询的结果一致
pub fn china_tree(china: &ChinaDataset, world: &WorldDataset) -> RegionNode {
    let mut provinces: Vec<RegionNode> = china.provinces().iter().map(expanded_province).collect();
    provinces.extend(
        SpecialRegion::ALL
            .into_iter()
            .map(|region| expanded_special_region(world, region)),
    );
    RegionNode::expanded(CHINA_CODE, CHINA_LABEL, provinces)
}
