//! Board Context - 拖拽状态

use serde::{Deserialize, Serialize};

/// 被拖拽对象的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Category,
    Link,
}

/// 被拖拽的对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragItem {
    pub kind: DragKind,
    pub id: String,
}

impl DragItem {
    pub fn category(id: impl Into<String>) -> Self {
        Self {
            kind: DragKind::Category,
            id: id.into(),
        }
    }

    pub fn link(id: impl Into<String>) -> Self {
        Self {
            kind: DragKind::Link,
            id: id.into(),
        }
    }
}

/// 放置位置（仅链接拖到链接上时计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// 根据指针相对目标卡片水平中点的位置决定插入方向
    pub fn from_pointer(pointer: &PointerPosition) -> Self {
        let midpoint = pointer.target_left + pointer.target_width / 2.0;
        if pointer.x < midpoint {
            DropPosition::Before
        } else {
            DropPosition::After
        }
    }
}

/// 拖拽经过时的指针与目标几何信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub target_left: f64,
    pub target_width: f64,
}

impl PointerPosition {
    pub fn new(x: f64, target_left: f64, target_width: f64) -> Self {
        Self {
            x,
            target_left,
            target_width,
        }
    }
}

/// 放置目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Category(String),
    Link(String),
    /// 未分类区域
    Uncategorized,
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Category(id) | DropTarget::Link(id) => id,
            DropTarget::Uncategorized => super::UNCATEGORIZED,
        }
    }
}

/// 瞬时拖拽状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    pub dragged: Option<DragItem>,
    pub drag_over_id: Option<String>,
    pub drop_position: Option<DropPosition>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
