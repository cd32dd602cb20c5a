//! Board Context - 搜索与过滤

use super::{Dataset, Link, UNCATEGORIZED};

/// 当前浏览范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(String),
    /// 未分类：哨兵值或指向已删除分类的链接
    Uncategorized,
}

impl Scope {
    fn contains(&self, dataset: &Dataset, link: &Link) -> bool {
        match self {
            Scope::All => true,
            Scope::Category(id) => link.is_in_category(id),
            Scope::Uncategorized => {
                link.is_in_category(UNCATEGORIZED) || !dataset.has_category(&link.category_id)
            }
        }
    }
}

/// 按范围与关键字过滤链接，结果按 order 升序
///
/// 关键字为空（或仅包含空白）时返回范围内所有链接。
/// 匹配不区分大小写，覆盖标题、URL、描述与子链接标题。
pub fn filter_links<'a>(dataset: &'a Dataset, query: &str, scope: &Scope) -> Vec<&'a Link> {
    let needle = query.trim().to_lowercase();

    let mut links: Vec<&Link> = dataset
        .links
        .iter()
        .filter(|link| scope.contains(dataset, link))
        .filter(|link| needle.is_empty() || link.matches_lowercase(&needle))
        .collect();

    links.sort_by_key(|l| l.order);
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::{Category, SubLink};
    use chrono::Utc;

    fn link(id: &str, title: &str, category_id: &str, order: i64) -> Link {
        Link {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{}.example.org", id),
            description: None,
            category_id: category_id.to_string(),
            created_at: Utc::now(),
            order,
            sub_links: Vec::new(),
        }
    }

    fn dataset() -> Dataset {
        let mut docs = link("docs", "Rust Documentation", "dev", 2);
        docs.description = Some("Standard LIBRARY reference".to_string());
        let mut news = link("news", "Morning Paper", "read", 0);
        news.sub_links.push(SubLink::new("Tech Section", "https://news.example.org/tech"));

        Dataset::new(
            vec![
                Category {
                    id: "dev".to_string(),
                    name: "Dev".to_string(),
                    order: 0,
                },
                Category {
                    id: "read".to_string(),
                    name: "Reading".to_string(),
                    order: 1,
                },
            ],
            vec![
                docs,
                news,
                link("crates", "crates.io", "dev", 1),
                link("orphan", "Orphaned", "deleted-category", 3),
                link("loose", "Loose Link", UNCATEGORIZED, 4),
            ],
        )
    }

    fn ids(links: Vec<&Link>) -> Vec<&str> {
        links.into_iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_scope_sorted() {
        let data = dataset();
        assert_eq!(
            ids(filter_links(&data, "", &Scope::All)),
            vec!["news", "crates", "docs", "orphan", "loose"]
        );
        assert_eq!(
            ids(filter_links(&data, "   ", &Scope::Category("dev".to_string()))),
            vec!["crates", "docs"]
        );
    }

    #[test]
    fn test_case_insensitive_fields() {
        let data = dataset();
        // 标题
        assert_eq!(ids(filter_links(&data, "rust", &Scope::All)), vec!["docs"]);
        // 描述
        assert_eq!(ids(filter_links(&data, "library", &Scope::All)), vec!["docs"]);
        // URL
        assert_eq!(ids(filter_links(&data, "CRATES.EXAMPLE", &Scope::All)), vec!["crates"]);
        // 子链接标题
        assert_eq!(ids(filter_links(&data, "tech", &Scope::All)), vec!["news"]);
    }

    #[test]
    fn test_uncategorized_includes_dangling() {
        let data = dataset();
        assert_eq!(
            ids(filter_links(&data, "", &Scope::Uncategorized)),
            vec!["orphan", "loose"]
        );
    }

    #[test]
    fn test_no_match() {
        let data = dataset();
        assert!(filter_links(&data, "zzz", &Scope::All).is_empty());
    }
}
