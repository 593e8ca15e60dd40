//! 国家 → 省/州 → 市 → 区 四级区划解析
//!
//! 合并中国省市区数据与世界国家/州/城市数据，按需逐级返回级联选择器的节点。

pub mod composer;
pub mod config;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod sources;
pub mod types;

pub use composer::SpecialRegion;
pub use config::ResolverConfig;
pub use error::{RegionError, Result};
pub use normalize::{
    country_label, translate_city, translate_hong_kong, translate_macau, translate_state,
    translate_taiwan_city, translate_taiwan_state, NameStrategy, Translator,
};
pub use resolver::RegionResolver;
pub use sources::{ChinaDataset, WorldDataset};
pub use types::{ChinaArea, City, Country, Expansion, RegionLevel, RegionMatch, RegionNode, State};
