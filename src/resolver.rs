//! 按需展开的区划树
//!
//! 每个查询只返回一层子节点。任何层级的未知代码都返回空列表，
//! 级联组件据此停止展开。

use crate::composer::{self, SpecialRegion};
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::normalize::{self, CHINA_CODE};
use crate::sources::{ChinaDataset, WorldDataset};
use crate::types::{ChinaArea, RegionLevel, RegionMatch, RegionNode};
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct RegionResolver {
    china: Cow<'static, ChinaDataset>,
    world: Cow<'static, WorldDataset>,
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RegionResolver {
    /// 使用内置数据集
    pub fn builtin() -> Self {
        Self {
            china: Cow::Borrowed(ChinaDataset::builtin()),
            world: Cow::Borrowed(WorldDataset::builtin()),
        }
    }

    pub fn new(china: ChinaDataset, world: WorldDataset) -> Self {
        Self {
            china: Cow::Owned(china),
            world: Cow::Owned(world),
        }
    }

    /// 按配置加载外部数据集，未配置的部分使用内置数据
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let china = match &config.china_dataset {
            Some(path) => Cow::Owned(ChinaDataset::from_file(path)?),
            None => Cow::Borrowed(ChinaDataset::builtin()),
        };
        let world = match &config.world_dataset {
            Some(path) => Cow::Owned(WorldDataset::from_file(path)?),
            None => Cow::Borrowed(WorldDataset::builtin()),
        };
        Ok(Self { china, world })
    }

    pub fn china(&self) -> &ChinaDataset {
        &self.china
    }

    pub fn world(&self) -> &WorldDataset {
        &self.world
    }

    /// 第一级：国家，中国在最前
    pub fn list_countries(&self) -> Vec<RegionNode> {
        let nodes = composer::countries(&self.world);
        log::debug!("国家列表: {} 个", nodes.len());
        nodes
    }

    /// 第二级：省/州
    pub fn list_states(&self, country_code: &str) -> Vec<RegionNode> {
        let nodes = if country_code == CHINA_CODE {
            composer::china_states(&self.china, &self.world)
        } else {
            self.world
                .states_of(country_code)
                .iter()
                .map(|s| {
                    RegionNode::lazy_unless(
                        &s.iso_code,
                        normalize::translate_state(country_code, &s.name),
                        !self.world.has_cities(country_code, &s.iso_code),
                    )
                })
                .collect()
        };
        log::debug!("省/州列表 {}: {} 个", country_code, nodes.len());
        nodes
    }

    /// 第三级：城市
    pub fn list_cities(&self, country_code: &str, state_code: &str) -> Vec<RegionNode> {
        let nodes = if country_code == CHINA_CODE {
            match SpecialRegion::from_code(state_code) {
                Some(region) => composer::special_region_children(&self.world, region),
                None => self
                    .china
                    .province(state_code)
                    .map(normalize::province_children)
                    .unwrap_or_default(),
            }
        } else {
            self.world
                .cities_of(country_code, state_code)
                .iter()
                .map(|c| {
                    RegionNode::leaf(&c.name, normalize::translate_city(country_code, &c.name))
                })
                .collect()
        };
        log::debug!(
            "城市列表 {}/{}: {} 个",
            country_code,
            state_code,
            nodes.len()
        );
        nodes
    }

    /// 第四级：区县，只有中国有
    pub fn list_districts(
        &self,
        country_code: &str,
        state_code: &str,
        city_code: &str,
    ) -> Vec<RegionNode> {
        if country_code != CHINA_CODE {
            return vec![];
        }
        let nodes = match SpecialRegion::from_code(state_code) {
            Some(region) => composer::special_region_grandchildren(&self.world, region, city_code),
            None => self
                .china
                .city(state_code, city_code)
                .map(normalize::city_children)
                .unwrap_or_default(),
        };
        log::debug!(
            "区县列表 {}/{}/{}: {} 个",
            country_code,
            state_code,
            city_code,
            nodes.len()
        );
        nodes
    }

    /// 级联组件懒加载入口：按已选路径的长度分派到对应层级
    pub fn children(&self, path: &[&str]) -> Vec<RegionNode> {
        match path {
            [] => self.list_countries(),
            [country] => self.list_states(country),
            [country, state] => self.list_cities(country, state),
            [country, state, city] => self.list_districts(country, state, city),
            _ => vec![],
        }
    }

    /// 已选代码路径 → 显示名称，遇到无法识别的代码即停止
    pub fn label_path(&self, path: &[&str]) -> Vec<String> {
        let mut labels = Vec::with_capacity(path.len());
        for (depth, code) in path.iter().enumerate() {
            let found = self
                .children(&path[..depth])
                .into_iter()
                .find(|node| node.value == *code);
            match found {
                Some(node) => labels.push(node.label),
                None => break,
            }
        }
        labels
    }

    /// 完整展开的中国子树
    pub fn china_tree(&self) -> RegionNode {
        composer::china_tree(&self.china, &self.world)
    }

    /// 按名称模糊搜索中国区划，最多返回 `limit` 条
    pub fn search(&self, query: &str, limit: usize) -> Vec<RegionMatch> {
        let query = query.trim();
        let mut matches = Vec::new();
        if query.is_empty() || limit == 0 {
            return matches;
        }

        let mut parents = Vec::new();
        for province in self.china.provinces() {
            collect_matches(
                province,
                RegionLevel::Province,
                query,
                limit,
                &mut parents,
                &mut matches,
            );
            if matches.len() >= limit {
                break;
            }
        }
        log::debug!("搜索 {}: {} 条结果", query, matches.len());
        matches
    }

    /// 获取某个区划下的所有区县代码
    /// 用于按省/市查询时聚合下属区县
    pub fn district_codes(&self, code: &str) -> Vec<String> {
        let path = match self.china.path_to(code) {
            Some(path) => path,
            None => return vec![],
        };

        let mut result = vec![];
        match path.as_slice() {
            [.., district] if path.len() >= 3 => result.push(district.value.clone()),
            [.., area] => collect_codes_at_depth(&area.children, 3 - path.len(), &mut result),
            [] => {}
        }
        result
    }
}

fn collect_matches(
    area: &ChinaArea,
    level: RegionLevel,
    query: &str,
    limit: usize,
    parents: &mut Vec<String>,
    out: &mut Vec<RegionMatch>,
) {
    if out.len() >= limit {
        return;
    }
    if area.label.contains(query) {
        let mut path_labels = parents.clone();
        path_labels.push(area.label.clone());
        out.push(RegionMatch {
            code: area.value.clone(),
            label: area.label.clone(),
            level,
            path_labels,
        });
    }

    // 直辖市的"市辖区"不出现在结果和路径里
    let (children, child_level) = match level {
        RegionLevel::Province if normalize::is_municipality(area) => {
            (&area.children[0].children, RegionLevel::District)
        }
        RegionLevel::Province => (&area.children, RegionLevel::City),
        RegionLevel::City => (&area.children, RegionLevel::District),
        RegionLevel::District => return,
    };

    parents.push(area.label.clone());
    for child in children {
        collect_matches(child, child_level, query, limit, parents, out);
        if out.len() >= limit {
            break;
        }
    }
    parents.pop();
}

/// 收集向下第 `depth` 层（从 1 开始）的全部代码
fn collect_codes_at_depth(nodes: &[ChinaArea], depth: usize, out: &mut Vec<String>) {
    for node in nodes {
        if depth <= 1 {
            out.push(node.value.clone());
        } else {
            collect_codes_at_depth(&node.children, depth - 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{City, Country, State};

    fn country(code: &str, name: &str) -> Country {
        Country {
            iso_code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn state(country: &str, code: &str, name: &str) -> State {
        State {
            iso_code: code.to_string(),
            name: name.to_string(),
            country_code: country.to_string(),
        }
    }

    fn city(country: &str, state: &str, name: &str) -> City {
        City {
            name: name.to_string(),
            country_code: country.to_string(),
            state_code: state.to_string(),
        }
    }

    /// 小型数据集：北京（直辖市）、江苏、重庆（两个占位层级）
    fn resolver() -> RegionResolver {
        let china = ChinaDataset::new(vec![
            ChinaArea::new(
                "11",
                "北京市",
                vec![ChinaArea::new(
                    "1101",
                    "市辖区",
                    vec![
                        ChinaArea::new("110101", "东城区", vec![]),
                        ChinaArea::new("110105", "朝阳区", vec![]),
                    ],
                )],
            ),
            ChinaArea::new(
                "32",
                "江苏省",
                vec![
                    ChinaArea::new(
                        "3209",
                        "盐城市",
                        vec![
                            ChinaArea::new("320923", "阜宁县", vec![]),
                            ChinaArea::new("320924", "射阳县", vec![]),
                        ],
                    ),
                    ChinaArea::new(
                        "3201",
                        "南京市",
                        vec![ChinaArea::new("320106", "鼓楼区", vec![])],
                    ),
                ],
            ),
            ChinaArea::new(
                "50",
                "重庆市",
                vec![
                    ChinaArea::new(
                        "5001",
                        "市辖区",
                        vec![ChinaArea::new("500103", "渝中区", vec![])],
                    ),
                    ChinaArea::new("5002", "县", vec![ChinaArea::new("500233", "忠县", vec![])]),
                ],
            ),
        ]);
        let world = WorldDataset::new(
            vec![
                country("AQ", "Antarctica"),
                country("CN", "China"),
                country("US", "United States"),
                country("TW", "Taiwan"),
                country("SG", "Singapore"),
            ],
            vec![
                state("US", "CA", "California"),
                state("US", "WY", "Wyoming"),
                state("TW", "TPE", "Taipei"),
                state("SG", "01", "Central Singapore"),
            ],
            vec![
                city("US", "CA", "Los Angeles"),
                city("US", "CA", "Fresno"),
                city("TW", "TPE", "Taipei"),
            ],
        );
        RegionResolver::new(china, world)
    }

    fn values(nodes: &[RegionNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.value.as_str()).collect()
    }

    #[test]
    fn test_countries_china_first_and_leaf_matches_states() {
        let resolver = resolver();
        let countries = resolver.list_countries();
        assert_eq!(values(&countries), vec!["CN", "AQ", "US", "TW", "SG"]);
        for c in &countries[1..] {
            assert_eq!(c.is_leaf(), resolver.list_states(&c.value).is_empty());
        }
        assert_eq!(countries[2].label, "美国");
    }

    #[test]
    fn test_china_states_end_with_special_regions() {
        let states = resolver().list_states("CN");
        assert_eq!(values(&states), vec!["11", "32", "50", "TW", "HK", "MO"]);
        for code in ["TW", "HK", "MO"] {
            assert_eq!(states.iter().filter(|s| s.value == code).count(), 1);
        }
    }

    #[test]
    fn test_municipality_cities_are_districts() {
        let cities = resolver().list_cities("CN", "11");
        assert_eq!(values(&cities), vec!["110101", "110105"]);
        assert!(cities.iter().all(RegionNode::is_leaf));
    }

    #[test]
    fn test_chongqing_keeps_wrappers() {
        let resolver = resolver();
        let cities = resolver.list_cities("CN", "50");
        assert_eq!(values(&cities), vec!["5001", "5002"]);
        assert_eq!(
            values(&resolver.list_districts("CN", "50", "5002")),
            vec!["500233"]
        );
    }

    #[test]
    fn test_ordinary_province_four_levels() {
        let resolver = resolver();
        let cities = resolver.list_cities("CN", "32");
        assert_eq!(values(&cities), vec!["3209", "3201"]);
        assert!(cities.iter().all(|c| !c.is_leaf()));
        let districts = resolver.list_districts("CN", "32", "3209");
        assert_eq!(values(&districts), vec!["320923", "320924"]);
        assert!(districts.iter().all(RegionNode::is_leaf));
    }

    #[test]
    fn test_special_region_fallbacks() {
        let resolver = resolver();
        let hk = resolver.list_cities("CN", "HK");
        assert_eq!(hk.len(), 18);
        assert!(hk.iter().all(RegionNode::is_leaf));
        let mo = resolver.list_cities("CN", "MO");
        assert_eq!(mo.len(), 7);
        assert!(mo.iter().all(RegionNode::is_leaf));
    }

    #[test]
    fn test_special_region_districts_are_empty() {
        let resolver = resolver();
        for city in ["Wan Chai", "大堂区", "anything"] {
            assert!(resolver.list_districts("CN", "HK", city).is_empty());
            assert!(resolver.list_districts("CN", "MO", city).is_empty());
        }
    }

    #[test]
    fn test_taiwan_expansion() {
        let resolver = resolver();
        let states = resolver.list_cities("CN", "TW");
        assert_eq!(states, vec![RegionNode::branch("TPE", "台北市")]);
        let cities = resolver.list_districts("CN", "TW", "TPE");
        assert_eq!(cities, vec![RegionNode::leaf("Taipei", "台北")]);
    }

    #[test]
    fn test_other_country_levels() {
        let resolver = resolver();
        let states = resolver.list_states("US");
        assert_eq!(states[0], RegionNode::branch("CA", "加利福尼亚州"));
        assert_eq!(states[1], RegionNode::leaf("WY", "怀俄明州"));

        let cities = resolver.list_cities("US", "CA");
        assert_eq!(cities[0], RegionNode::leaf("Los Angeles", "洛杉矶"));
        assert_eq!(cities[1], RegionNode::leaf("Fresno", "Fresno"));

        assert!(resolver.list_districts("US", "CA", "Los Angeles").is_empty());
    }

    #[test]
    fn test_unknown_codes_are_empty() {
        let resolver = resolver();
        assert!(resolver.list_states("ZZ").is_empty());
        assert!(resolver.list_cities("CN", "99999").is_empty());
        assert!(resolver.list_cities("ZZ", "01").is_empty());
        assert!(resolver.list_districts("CN", "32", "9999").is_empty());
        assert!(resolver.list_districts("CN", "99", "3209").is_empty());
        assert!(resolver.list_districts("CN", "11", "110101").is_empty());
    }

    #[test]
    fn test_children_dispatch() {
        let resolver = resolver();
        assert_eq!(resolver.children(&[]), resolver.list_countries());
        assert_eq!(resolver.children(&["CN"]), resolver.list_states("CN"));
        assert_eq!(resolver.children(&["CN", "32"]), resolver.list_cities("CN", "32"));
        assert_eq!(
            resolver.children(&["CN", "32", "3209"]),
            resolver.list_districts("CN", "32", "3209")
        );
        assert!(resolver.children(&["CN", "32", "3209", "320923"]).is_empty());
    }

    #[test]
    fn test_label_path() {
        let resolver = resolver();
        assert_eq!(
            resolver.label_path(&["CN", "32", "3209", "320923"]),
            vec!["中国", "江苏省", "盐城市", "阜宁县"]
        );
        assert_eq!(
            resolver.label_path(&["CN", "11", "110105"]),
            vec!["中国", "北京市", "朝阳区"]
        );
        assert_eq!(resolver.label_path(&["CN", "99", "9901"]), vec!["中国"]);
        assert!(resolver.label_path(&["ZZ"]).is_empty());
    }

    #[test]
    fn test_china_tree_matches_lazy_queries() {
        let resolver = resolver();
        let tree = resolver.china_tree();
        let provinces = tree.children().unwrap();
        assert_eq!(values(provinces), values(&resolver.list_states("CN")));
        for province in provinces {
            if let Some(cities) = province.children() {
                assert_eq!(values(cities), values(&resolver.list_cities("CN", &province.value)));
            }
        }
    }

    #[test]
    fn test_search_skips_collapsed_wrapper() {
        let resolver = resolver();
        let matches = resolver.search("朝阳", 50);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].code, "110105");
        assert_eq!(matches[0].level, RegionLevel::District);
        assert_eq!(matches[0].path_labels, vec!["北京市", "朝阳区"]);

        // 重庆的"市辖区"没有被折叠，可以被搜到
        let wrappers = resolver.search("市辖区", 50);
        assert_eq!(wrappers.len(), 1);
        assert_eq!(wrappers[0].code, "5001");
    }

    #[test]
    fn test_search_limit_and_empty_query() {
        let resolver = resolver();
        assert_eq!(resolver.search("县", 2).len(), 2);
        assert!(resolver.search("  ", 50).is_empty());
        assert!(resolver.search("江苏", 0).is_empty());
    }

    #[test]
    fn test_district_codes() {
        let resolver = resolver();
        assert_eq!(resolver.district_codes("320923"), vec!["320923"]);
        assert_eq!(resolver.district_codes("3209"), vec!["320923", "320924"]);
        assert_eq!(
            resolver.district_codes("32"),
            vec!["320923", "320924", "320106"]
        );
        assert_eq!(resolver.district_codes("11"), vec!["110101", "110105"]);
        assert_eq!(resolver.district_codes("50"), vec!["500103", "500233"]);
        assert!(resolver.district_codes("99").is_empty());
    }

    #[test]
    fn test_from_config_prefers_external_world_data() {
        let dir = tempfile::tempdir().unwrap();
        let world_path = dir.path().join("world.json");
        std::fs::write(
            &world_path,
            r#"{"countries":[{"isoCode":"HK","name":"Hong Kong S.A.R."}],
                "states":[{"isoCode":"HWC","name":"Wan Chai District","countryCode":"HK"}]}"#,
        )
        .unwrap();
        let config = ResolverConfig {
            world_dataset: Some(world_path),
            ..ResolverConfig::default()
        };

        let resolver = RegionResolver::from_config(&config).unwrap();
        assert_eq!(
            resolver.list_cities("CN", "HK"),
            vec![RegionNode::leaf("HWC", "湾仔区")]
        );
        // 未配置的中国数据仍使用内置数据
        assert_eq!(resolver.list_cities("CN", "11").len(), 16);
    }

    #[test]
    fn test_from_config_missing_dataset_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResolverConfig {
            china_dataset: Some(dir.path().join("missing.json")),
            ..ResolverConfig::default()
        };
        assert!(matches!(
            RegionResolver::from_config(&config),
            Err(crate::error::RegionError::Io { .. })
        ));
    }

    #[test]
    fn test_builtin_resolver() {
        let resolver = RegionResolver::builtin();
        let countries = resolver.list_countries();
        assert_eq!(countries[0].value, "CN");

        let beijing = resolver.list_cities("CN", "11");
        assert_eq!(beijing.len(), 16);
        assert!(beijing.iter().all(RegionNode::is_leaf));

        assert_eq!(resolver.list_cities("CN", "HK").len(), 18);
        assert_eq!(resolver.list_cities("CN", "MO").len(), 7);
        assert!(resolver.list_cities("CN", "TW").len() > 10);

        let yancheng = resolver.list_districts("CN", "32", "3209");
        assert!(yancheng.iter().any(|d| d.label == "阜宁县"));
    }

    #[test]
    fn test_builtin_every_city_has_districts() {
        let resolver = RegionResolver::builtin();
        let shijiazhuang = resolver.list_districts("CN", "13", "1301");
        assert!(shijiazhuang.iter().any(|d| d.label == "长安区"));

        for province in resolver.list_states("CN") {
            if SpecialRegion::from_code(&province.value).is_some() {
                continue;
            }
            let collapsed = resolver
                .china()
                .province(&province.value)
                .map(normalize::is_municipality)
                .unwrap_or(false);
            for city in resolver.list_cities("CN", &province.value) {
                if collapsed {
                    assert!(city.is_leaf(), "{} {}", province.label, city.label);
                    continue;
                }
                assert!(!city.is_leaf(), "{} {}", province.label, city.label);
                assert!(
                    !resolver
                        .list_districts("CN", &province.value, &city.value)
                        .is_empty(),
                    "{} {}",
                    province.label,
                    city.label
                );
            }
        }
    }

    #[test]
    fn test_builtin_world_covers_iso_countries() {
        let resolver = RegionResolver::builtin();
        let countries = resolver.list_countries();
        assert!(countries.len() > 240);
        for code in ["BR", "IN", "MX", "RU"] {
            let country = countries.iter().find(|c| c.value == code).unwrap();
            assert!(!country.is_leaf(), "{}", code);
            assert!(!resolver.list_states(code).is_empty(), "{}", code);
        }
        assert_eq!(resolver.list_states("JP").len(), 47);
    }
}
