//! Board Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 未分类哨兵值
///
/// 指向不存在分类的 categoryId 同样视为未分类
pub const UNCATEGORIZED: &str = "uncategorized";

/// 生成新的实体 ID
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// 仅用于相对排序，不要求连续
    pub order: i64,
}

impl Category {
    pub fn new(name: impl Into<String>, order: i64) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            order,
        }
    }
}

/// 子链接 - 无排序字段，按插入顺序展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLink {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl SubLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// 链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub order: i64,
    #[serde(default)]
    pub sub_links: Vec<SubLink>,
}

impl Link {
    pub fn is_in_category(&self, category_id: &str) -> bool {
        self.category_id == category_id
    }

    /// 标题、URL、描述或任一子链接标题包含 needle（needle 需已小写）
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(needle);

        contains(&self.title)
            || contains(&self.url)
            || self.description.as_deref().map(contains).unwrap_or(false)
            || self.sub_links.iter().any(|s| contains(&s.title))
    }
}

/// 数据集 - 持久化单元，整体读写
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub links: Vec<Link>,
}

impl Dataset {
    pub fn new(categories: Vec<Category>, links: Vec<Link>) -> Self {
        Self { categories, links }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.links.is_empty()
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}
