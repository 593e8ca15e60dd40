use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// 级联选择器中的一个区划节点
///
/// `value` 只在同一父节点的子级中唯一。是否还能继续展开由 [`Expansion`] 决定，
/// 不依赖 `children` 字段是否存在。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNode {
    pub value: String,
    pub label: String,
    pub expansion: Expansion,
}

/// 节点的展开状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// 叶子节点，保证没有下级
    Terminal,
    /// 可展开，下级需要再次查询
    Lazy,
    /// 可展开，下级已随节点一起给出
    Expanded(Vec<RegionNode>),
}

impl RegionNode {
    pub fn leaf(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            expansion: Expansion::Terminal,
        }
    }

    pub fn branch(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            expansion: Expansion::Lazy,
        }
    }

    pub fn expanded(
        value: impl Into<String>,
        label: impl Into<String>,
        children: Vec<RegionNode>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            expansion: Expansion::Expanded(children),
        }
    }

    /// 有下级时为可展开节点，否则为叶子
    pub fn lazy_unless(value: impl Into<String>, label: impl Into<String>, is_leaf: bool) -> Self {
        if is_leaf {
            Self::leaf(value, label)
        } else {
            Self::branch(value, label)
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.expansion, Expansion::Terminal)
    }

    pub fn children(&self) -> Option<&[RegionNode]> {
        match &self.expansion {
            Expansion::Expanded(children) => Some(children),
            _ => None,
        }
    }
}

/// 前端级联组件使用的 `{value, label, leaf, children?}` 结构
#[derive(Serialize)]
struct WireNode<'a> {
    value: &'a str,
    label: &'a str,
    leaf: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [RegionNode]>,
}

impl Serialize for RegionNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireNode {
            value: &self.value,
            label: &self.label,
            leaf: self.is_leaf(),
            children: self.children(),
        }
        .serialize(serializer)
    }
}

/// 中国行政区划数据集中的一行（省、市、区嵌套）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChinaArea {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChinaArea>,
}

impl ChinaArea {
    pub fn new(value: &str, label: &str, children: Vec<ChinaArea>) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub iso_code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub iso_code: String,
    pub name: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub country_code: String,
    pub state_code: String,
}

/// 中国区划层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    Province,
    City,
    District,
}

/// 名称搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMatch {
    pub code: String,
    pub label: String,
    pub level: RegionLevel,
    /// 从省级开始的完整名称路径，不含被折叠的"市辖区"
    pub path_labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_serializes_without_children() {
        let json = serde_json::to_value(RegionNode::leaf("110101", "东城区")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": "110101", "label": "东城区", "leaf": true})
        );
    }

    #[test]
    fn test_expanded_serializes_children() {
        let node = RegionNode::expanded("11", "北京市", vec![RegionNode::leaf("110101", "东城区")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["leaf"], false);
        assert_eq!(json["children"][0]["label"], "东城区");
    }

    #[test]
    fn test_lazy_branch_is_not_leaf() {
        let node = RegionNode::branch("CN", "中国");
        assert!(!node.is_leaf());
        assert!(node.children().is_none());
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_world_rows_use_camel_case() {
        let state: State =
            serde_json::from_str(r#"{"isoCode":"CA","name":"California","countryCode":"US"}"#)
                .unwrap();
        assert_eq!(state.iso_code, "CA");
        assert_eq!(state.country_code, "US");
    }
}
