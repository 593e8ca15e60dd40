//! 名称与结构规范化
//!
//! - 英文名 → 中文名：按顺序尝试一组查表策略，第一次命中即返回，全部未命中则原样返回
//! - "市辖区"折叠：直辖市下唯一的"市辖区"层级被跳过，区直接挂在省级下

pub mod tables;

use crate::types::{ChinaArea, RegionNode};
use tables::NameTable;

/// 直辖市下的占位层级名称
pub const MUNICIPAL_DISTRICT: &str = "市辖区";

pub const CHINA_CODE: &str = "CN";
pub const CHINA_LABEL: &str = "中国";

/// 单次查表策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// 原名直接查表
    Direct,
    /// 去掉后缀（如 " City"）后查表
    StripSuffix(&'static str),
}

impl NameStrategy {
    fn lookup(self, table: &NameTable, name: &str) -> Option<&'static str> {
        match self {
            NameStrategy::Direct => table.get(name).copied(),
            NameStrategy::StripSuffix(suffix) => name
                .strip_suffix(suffix)
                .and_then(|stripped| table.get(stripped.trim_end()).copied()),
        }
    }
}

/// 一张映射表加上按顺序尝试的查表策略
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    table: &'static NameTable,
    strategies: &'static [NameStrategy],
}

impl Translator {
    pub const fn new(table: &'static NameTable, strategies: &'static [NameStrategy]) -> Self {
        Self { table, strategies }
    }

    /// 命中返回映射值，否则返回 `None`
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.lookup(self.table, name))
    }

    /// 未命中时原样返回
    pub fn translate(&self, name: &str) -> String {
        self.lookup(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.to_string())
    }
}

use NameStrategy::{Direct, StripSuffix};

const DIRECT: &[NameStrategy] = &[Direct];
const TAIWAN_STATE_CHAIN: &[NameStrategy] =
    &[Direct, StripSuffix(" City"), StripSuffix(" County")];
const TAIWAN_CITY_CHAIN: &[NameStrategy] = &[Direct, StripSuffix(" City")];
const HONG_KONG_CHAIN: &[NameStrategy] = &[Direct, StripSuffix(" District")];
const MACAU_CHAIN: &[NameStrategy] = &[Direct, StripSuffix(" Parish")];
const JAPAN_CHAIN: &[NameStrategy] = &[Direct, StripSuffix(" Prefecture")];
const KOREA_CHAIN: &[NameStrategy] = &[
    Direct,
    StripSuffix(" Province"),
    StripSuffix(" Special City"),
    StripSuffix(" Metropolitan City"),
    StripSuffix(" City"),
];

pub fn taiwan_states() -> Translator {
    Translator::new(&tables::TAIWAN_STATE_NAMES, TAIWAN_STATE_CHAIN)
}

pub fn taiwan_cities() -> Translator {
    Translator::new(&tables::TAIWAN_CITY_NAMES, TAIWAN_CITY_CHAIN)
}

pub fn hong_kong() -> Translator {
    Translator::new(&tables::HONG_KONG_NAMES, HONG_KONG_CHAIN)
}

pub fn macau() -> Translator {
    Translator::new(&tables::MACAU_NAMES, MACAU_CHAIN)
}

pub fn world_cities() -> Translator {
    Translator::new(&tables::WORLD_CITY_NAMES, DIRECT)
}

/// 配置了州/省名映射的国家
pub fn state_translator(country_code: &str) -> Option<Translator> {
    let translator = match country_code {
        "US" => Translator::new(&tables::US_STATE_NAMES, DIRECT),
        "CA" => Translator::new(&tables::CANADA_PROVINCE_NAMES, DIRECT),
        "AU" => Translator::new(&tables::AUSTRALIA_STATE_NAMES, DIRECT),
        "JP" => Translator::new(&tables::JAPAN_PREFECTURE_NAMES, JAPAN_CHAIN),
        "KR" => Translator::new(&tables::KOREA_PROVINCE_NAMES, KOREA_CHAIN),
        "GB" => Translator::new(&tables::UK_COUNTRY_NAMES, DIRECT),
        "DE" => Translator::new(&tables::GERMANY_STATE_NAMES, DIRECT),
        "FR" => Translator::new(&tables::FRANCE_REGION_NAMES, DIRECT),
        "TW" => taiwan_states(),
        "HK" => hong_kong(),
        "MO" => macau(),
        _ => return None,
    };
    Some(translator)
}

pub fn translate_taiwan_state(name: &str) -> String {
    taiwan_states().translate(name)
}

pub fn translate_taiwan_city(name: &str) -> String {
    taiwan_cities().translate(name)
}

pub fn translate_hong_kong(name: &str) -> String {
    hong_kong().translate(name)
}

pub fn translate_macau(name: &str) -> String {
    macau().translate(name)
}

/// 州/省名；未配置映射的国家原样返回
pub fn translate_state(country_code: &str, name: &str) -> String {
    match state_translator(country_code) {
        Some(translator) => translator.translate(name),
        None => name.to_string(),
    }
}

/// 城市名；台湾、香港、澳门用各自的表，其他国家用通用城市表
pub fn translate_city(country_code: &str, name: &str) -> String {
    match country_code {
        "TW" => translate_taiwan_city(name),
        "HK" => translate_hong_kong(name),
        "MO" => translate_macau(name),
        _ => world_cities().translate(name),
    }
}

/// 国家显示名：中国固定为"中国"，其他国家查表，查不到用数据源英文名
pub fn country_label(country_code: &str, english_name: &str) -> String {
    if country_code == CHINA_CODE {
        return CHINA_LABEL.to_string();
    }
    tables::COUNTRY_DISPLAY_NAMES
        .get(country_code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| english_name.to_string())
}

/// 省份下是否只有一个带下级的"市辖区"
pub fn is_municipality(province: &ChinaArea) -> bool {
    matches!(
        province.children.as_slice(),
        [only] if only.label == MUNICIPAL_DISTRICT && !only.children.is_empty()
    )
}

/// 省份的直接下级（市级）
///
/// 直辖市跳过"市辖区"层级，区直接作为下级并标记为叶子；
/// 普通省份的城市在没有区县数据时标记为叶子。
pub fn province_children(province: &ChinaArea) -> Vec<RegionNode> {
    if is_municipality(province) {
        return province.children[0]
            .children
            .iter()
            .map(|district| RegionNode::leaf(&district.value, &district.label))
            .collect();
    }

    province
        .children
        .iter()
        .map(|city| RegionNode::lazy_unless(&city.value, &city.label, city.children.is_empty()))
        .collect()
}

/// 城市下的区县，全部是叶子
pub fn city_children(city: &ChinaArea) -> Vec<RegionNode> {
    city.children
        .iter()
        .map(|district| RegionNode::leaf(&district.value, &district.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn municipality() -> ChinaArea {
        ChinaArea::new(
            "11",
            "北京市",
            vec![ChinaArea::new(
                "1101",
                MUNICIPAL_DISTRICT,
                vec![
                    ChinaArea::new("110101", "东城区", vec![]),
                    ChinaArea::new("110102", "西城区", vec![]),
                ],
            )],
        )
    }

    #[test]
    fn test_translate_direct_hit() {
        assert_eq!(translate_taiwan_state("Taipei"), "台北市");
        assert_eq!(translate_taiwan_state("Chiayi City"), "嘉义市");
    }

    #[test]
    fn test_translate_strips_city_suffix() {
        assert_eq!(translate_taiwan_state("Keelung City"), "基隆市");
        assert_eq!(translate_taiwan_state("New Taipei City"), "新北市");
    }

    #[test]
    fn test_translate_strips_county_suffix() {
        assert_eq!(translate_taiwan_state("Changhua County"), "彰化县");
        assert_eq!(translate_taiwan_state("Lienchiang County"), "连江县");
    }

    #[test]
    fn test_translate_falls_back_to_source_name() {
        assert_eq!(translate_taiwan_state("Atlantis"), "Atlantis");
        assert_eq!(translate_taiwan_city("Zhubei"), "Zhubei");
        assert_eq!(translate_state("BR", "São Paulo"), "São Paulo");
        assert_eq!(translate_city("US", "Springfield"), "Springfield");
    }

    #[test]
    fn test_translate_keys_and_unmapped_names() {
        for (key, value) in tables::TAIWAN_STATE_NAMES.iter() {
            assert_eq!(translate_taiwan_state(key), *value);
        }
        assert_eq!(translate_hong_kong("台北市"), "台北市");
    }

    #[test]
    fn test_strategy_order_prefers_direct() {
        // "Hualien City" 直接命中"花莲市"，不会被去后缀成"花莲县"
        assert_eq!(translate_taiwan_state("Hualien City"), "花莲市");
    }

    #[test]
    fn test_hong_kong_district_suffix() {
        assert_eq!(translate_hong_kong("Central and Western District"), "中西区");
        assert_eq!(translate_hong_kong("Kowloon City"), "九龙城区");
        assert_eq!(translate_hong_kong("Islands District"), "离岛区");
    }

    #[test]
    fn test_macau_parish_suffix() {
        assert_eq!(translate_macau("Saint Lazarus Parish"), "望德堂区");
        assert_eq!(translate_macau("Sé"), "大堂区");
    }

    #[test]
    fn test_country_specific_state_tables() {
        assert_eq!(translate_state("US", "California"), "加利福尼亚州");
        assert_eq!(translate_state("JP", "Aichi Prefecture"), "爱知县");
        assert_eq!(translate_state("JP", "Tokyo"), "东京都");
        assert_eq!(translate_state("KR", "Gyeonggi Province"), "京畿道");
        assert_eq!(translate_state("KR", "Sejong City"), "世宗特别自治市");
        assert_eq!(translate_state("TW", "Taoyuan City"), "桃园市");
        // 同名但不同国家的州不会串表
        assert_eq!(translate_state("AU", "Victoria"), "维多利亚州");
        assert_eq!(translate_state("BR", "Victoria"), "Victoria");
    }

    #[test]
    fn test_country_label() {
        assert_eq!(country_label("CN", "China"), "中国");
        assert_eq!(country_label("JP", "Japan"), "日本");
        assert_eq!(country_label("XK", "Kosovo"), "科索沃");
        assert_eq!(country_label("ZZ", "Unknown Land"), "Unknown Land");
    }

    #[test]
    fn test_municipality_collapse() {
        let children = province_children(&municipality());
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].label, "东城区");
        assert!(children.iter().all(RegionNode::is_leaf));
    }

    #[test]
    fn test_empty_municipal_wrapper_is_not_collapsed() {
        let province = ChinaArea::new(
            "99",
            "测试市",
            vec![ChinaArea::new("9901", MUNICIPAL_DISTRICT, vec![])],
        );
        assert!(!is_municipality(&province));
        let children = province_children(&province);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, MUNICIPAL_DISTRICT);
        assert!(children[0].is_leaf());
    }

    #[test]
    fn test_two_wrappers_are_not_collapsed() {
        let province = ChinaArea::new(
            "50",
            "重庆市",
            vec![
                ChinaArea::new(
                    "5001",
                    MUNICIPAL_DISTRICT,
                    vec![ChinaArea::new("500101", "万州区", vec![])],
                ),
                ChinaArea::new("5002", "县", vec![ChinaArea::new("500229", "城口县", vec![])]),
            ],
        );
        let children = province_children(&province);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| !c.is_leaf()));
    }

    #[test]
    fn test_ordinary_province_city_leaf_flag() {
        let province = ChinaArea::new(
            "44",
            "广东省",
            vec![
                ChinaArea::new("4401", "广州市", vec![ChinaArea::new("440106", "天河区", vec![])]),
                ChinaArea::new("4419", "东莞市", vec![]),
            ],
        );
        let children = province_children(&province);
        assert!(!children[0].is_leaf());
        assert!(children[1].is_leaf());
    }
}
