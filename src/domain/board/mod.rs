//! Board Context - 链接看板限界上下文
//!
//! 职责:
//! - 分类、链接、子链接实体
//! - 拖拽排序与重新归类
//! - 搜索过滤
//! - 备份导入导出

mod aggregate;
mod backup;
mod drag;
mod entities;
mod errors;
mod filter;
mod seed;

pub use aggregate::{reduce, Board, BoardEvent, Change, LinkDraft};
pub use backup::{backup_file_name, export_backup, parse_backup, BackupFile};
pub use drag::{DragItem, DragKind, DragState, DropPosition, DropTarget, PointerPosition};
pub use entities::{new_id, Category, Dataset, Link, SubLink, UNCATEGORIZED};
pub use errors::BoardError;
pub use filter::{filter_links, Scope};
pub use seed::seed_dataset;
