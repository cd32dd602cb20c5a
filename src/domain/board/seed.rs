//! Board Context - 种子数据
//!
//! 远端与本地缓存都不可用时的初始数据集

use chrono::{TimeZone, Utc};

use super::{Category, Dataset, Link, SubLink, UNCATEGORIZED};

/// 固定的种子数据集（ID 稳定，便于比较）
pub fn seed_dataset() -> Dataset {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let categories = vec![
        Category {
            id: "seed-dev".to_string(),
            name: "Development".to_string(),
            order: 0,
        },
        Category {
            id: "seed-reading".to_string(),
            name: "Reading".to_string(),
            order: 1,
        },
    ];

    let links = vec![
        Link {
            id: "seed-rust".to_string(),
            title: "Rust".to_string(),
            url: "https://www.rust-lang.org".to_string(),
            description: Some("The Rust programming language".to_string()),
            category_id: "seed-dev".to_string(),
            created_at,
            order: 0,
            sub_links: vec![
                SubLink {
                    id: "seed-rust-book".to_string(),
                    title: "The Book".to_string(),
                    url: "https://doc.rust-lang.org/book/".to_string(),
                },
                SubLink {
                    id: "seed-rust-std".to_string(),
                    title: "Standard Library".to_string(),
                    url: "https://doc.rust-lang.org/std/".to_string(),
                },
            ],
        },
        Link {
            id: "seed-docs-rs".to_string(),
            title: "Docs.rs".to_string(),
            url: "https://docs.rs".to_string(),
            description: None,
            category_id: "seed-dev".to_string(),
            created_at,
            order: 1,
            sub_links: Vec::new(),
        },
        Link {
            id: "seed-this-week".to_string(),
            title: "This Week in Rust".to_string(),
            url: "https://this-week-in-rust.org".to_string(),
            description: Some("Weekly newsletter".to_string()),
            category_id: "seed-reading".to_string(),
            created_at,
            order: 2,
            sub_links: Vec::new(),
        },
        Link {
            id: "seed-example".to_string(),
            title: "Example".to_string(),
            url: "https://example.com".to_string(),
            description: None,
            category_id: UNCATEGORIZED.to_string(),
            created_at,
            order: 3,
            sub_links: Vec::new(),
        },
    ];

    Dataset::new(categories, links)
}
