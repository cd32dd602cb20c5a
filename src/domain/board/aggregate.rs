//! Board Context - Aggregate Root

use chrono::Utc;

use super::drag::{DragItem, DragKind, DragState, DropPosition, DropTarget, PointerPosition};
use super::filter::{filter_links, Scope};
use super::{BoardError, Category, Dataset, Link, SubLink, UNCATEGORIZED};

/// 新建或编辑链接时提交的表单内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub category_id: String,
    pub sub_links: Vec<SubLink>,
}

impl LinkDraft {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            category_id: category_id.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn validate(&self) -> Result<(), BoardError> {
        if self.title.trim().is_empty() {
            return Err(BoardError::InvalidInput("标题不能为空".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(BoardError::InvalidInput("URL 不能为空".to_string()));
        }
        Ok(())
    }

    fn normalized_category(&self) -> String {
        if self.category_id.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            self.category_id.clone()
        }
    }

    fn normalized_description(&self) -> Option<String> {
        self.description
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
    }
}

/// 看板事件
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    DragStart(DragItem),
    DragOver {
        target: DropTarget,
        pointer: Option<PointerPosition>,
    },
    Drop(DropTarget),
    DragEnd,
    AddCategory {
        name: String,
    },
    RenameCategory {
        id: String,
        name: String,
    },
    DeleteCategory {
        id: String,
    },
    AddLink(LinkDraft),
    UpdateLink {
        id: String,
        draft: LinkDraft,
    },
    DeleteLink {
        id: String,
    },
    AddSubLink {
        link_id: String,
        title: String,
        url: String,
    },
    RemoveSubLink {
        link_id: String,
        sub_link_id: String,
    },
    /// 整体替换（导入备份、远端加载）
    Replace(Dataset),
}

/// 事件对数据集造成的影响
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// 数据集未变化（拖拽过程中的瞬时状态变化也属于此类）
    Unchanged,
    Modified,
    Created { id: String },
}

impl Change {
    pub fn is_dataset_changed(&self) -> bool {
        !matches!(self, Change::Unchanged)
    }
}

/// Board 聚合根
///
/// 不变量:
/// - 分类 ID、链接 ID 各自唯一
/// - 删除分类只会把其链接移到未分类，永不删除链接
/// - 每次放置结束后拖拽状态被清空
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    dataset: Dataset,
    drag: DragState,
}

impl Board {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            drag: DragState::default(),
        }
    }

    // Getters
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn categories(&self) -> &[Category] {
        &self.dataset.categories
    }

    pub fn links(&self) -> &[Link] {
        &self.dataset.links
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn get_link(&self, id: &str) -> Option<&Link> {
        self.dataset.links.iter().find(|l| l.id == id)
    }

    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.dataset.categories.iter().find(|c| c.id == id)
    }

    /// 按 order 排序的分类
    pub fn sorted_categories(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.dataset.categories.iter().collect();
        sorted.sort_by_key(|c| c.order);
        sorted
    }

    /// 搜索并按 order 排序
    pub fn search(&self, query: &str, scope: &Scope) -> Vec<&Link> {
        filter_links(&self.dataset, query, scope)
    }

    /// 应用一个事件
    pub fn apply(&mut self, event: BoardEvent) -> Result<Change, BoardError> {
        match event {
            BoardEvent::DragStart(item) => {
                self.begin_drag(item);
                Ok(Change::Unchanged)
            }
            BoardEvent::DragOver { target, pointer } => {
                self.drag_over(&target, pointer.as_ref());
                Ok(Change::Unchanged)
            }
            BoardEvent::Drop(target) => Ok(self.drop_on(&target)),
            BoardEvent::DragEnd => {
                self.end_drag();
                Ok(Change::Unchanged)
            }
            BoardEvent::AddCategory { name } => {
                self.add_category(&name).map(|id| Change::Created { id })
            }
            BoardEvent::RenameCategory { id, name } => {
                self.rename_category(&id, &name).map(|_| Change::Modified)
            }
            BoardEvent::DeleteCategory { id } => {
                self.delete_category(&id).map(|_| Change::Modified)
            }
            BoardEvent::AddLink(draft) => self.add_link(draft).map(|id| Change::Created { id }),
            BoardEvent::UpdateLink { id, draft } => {
                self.update_link(&id, draft).map(|_| Change::Modified)
            }
            BoardEvent::DeleteLink { id } => self.delete_link(&id).map(|_| Change::Modified),
            BoardEvent::AddSubLink {
                link_id,
                title,
                url,
            } => self
                .add_sub_link(&link_id, &title, &url)
                .map(|id| Change::Created { id }),
            BoardEvent::RemoveSubLink {
                link_id,
                sub_link_id,
            } => self
                .remove_sub_link(&link_id, &sub_link_id)
                .map(|_| Change::Modified),
            BoardEvent::Replace(dataset) => {
                self.replace(dataset);
                Ok(Change::Modified)
            }
        }
    }

    // ========== 拖拽 ==========

    pub fn begin_drag(&mut self, item: DragItem) {
        self.drag = DragState {
            dragged: Some(item),
            drag_over_id: None,
            drop_position: None,
        };
    }

    /// 记录悬停目标；仅链接悬停在链接上时计算插入方向
    pub fn drag_over(&mut self, target: &DropTarget, pointer: Option<&PointerPosition>) {
        let Some(dragged) = self.drag.dragged.as_ref() else {
            return;
        };

        self.drag.drag_over_id = Some(target.id().to_string());
        self.drag.drop_position = match (dragged.kind, target, pointer) {
            (DragKind::Link, DropTarget::Link(_), Some(pointer)) => {
                Some(DropPosition::from_pointer(pointer))
            }
            _ => None,
        };
    }

    pub fn end_drag(&mut self) {
        self.drag.clear();
    }

    /// 放置：无论结果如何都会结束拖拽
    pub fn drop_on(&mut self, target: &DropTarget) -> Change {
        let drag = std::mem::take(&mut self.drag);
        let Some(dragged) = drag.dragged else {
            return Change::Unchanged;
        };

        // 悬停记录的方向只对同一个目标有效
        let position = match drag.drag_over_id.as_deref() {
            Some(over) if over == target.id() => drag.drop_position,
            _ => None,
        }
        .unwrap_or(DropPosition::Before);

        let changed = match (dragged.kind, target) {
            (DragKind::Category, DropTarget::Category(target_id)) => {
                self.move_category(&dragged.id, target_id)
            }
            (DragKind::Link, DropTarget::Link(target_id)) => {
                self.move_link(&dragged.id, target_id, position)
            }
            (DragKind::Link, DropTarget::Category(category_id)) => {
                self.recategorize(&dragged.id, category_id)
            }
            (DragKind::Link, DropTarget::Uncategorized) => {
                self.recategorize(&dragged.id, UNCATEGORIZED)
            }
            (DragKind::Category, _) => false,
        };

        if changed {
            Change::Modified
        } else {
            Change::Unchanged
        }
    }

    /// 移动到目标位置（非交换），随后按位置重新编号
    fn move_category(&mut self, dragged_id: &str, target_id: &str) -> bool {
        if dragged_id == target_id || self.get_category(target_id).is_none() {
            return false;
        }

        let mut sorted = self.dataset.categories.clone();
        sorted.sort_by_key(|c| c.order);

        let Some(from) = sorted.iter().position(|c| c.id == dragged_id) else {
            return false;
        };
        let moved = sorted.remove(from);
        let Some(to) = sorted.iter().position(|c| c.id == target_id) else {
            return false;
        };
        sorted.insert(to, moved);

        for (index, category) in sorted.iter_mut().enumerate() {
            category.order = index as i64;
        }

        let changed = sorted != self.dataset.categories;
        self.dataset.categories = sorted;

        if changed {
            tracing::debug!(category_id = %dragged_id, target_id = %target_id, "Category moved");
        }
        changed
    }

    /// 链接拖到链接：先归入目标分类，再在整个扁平列表中重新编号
    fn move_link(&mut self, dragged_id: &str, target_id: &str, position: DropPosition) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let Some(target_category) = self.get_link(target_id).map(|l| l.category_id.clone())
        else {
            return false;
        };

        let mut sorted = self.dataset.links.clone();
        sorted.sort_by_key(|l| l.order);

        let Some(from) = sorted.iter().position(|l| l.id == dragged_id) else {
            return false;
        };
        let mut moved = sorted.remove(from);
        moved.category_id = target_category;

        let Some(mut to) = sorted.iter().position(|l| l.id == target_id) else {
            return false;
        };
        if position == DropPosition::After {
            to += 1;
        }
        sorted.insert(to, moved);

        for (index, link) in sorted.iter_mut().enumerate() {
            link.order = index as i64;
        }

        let changed = sorted != self.dataset.links;
        self.dataset.links = sorted;

        if changed {
            tracing::debug!(
                link_id = %dragged_id,
                target_id = %target_id,
                position = ?position,
                "Link moved"
            );
        }
        changed
    }

    fn recategorize(&mut self, link_id: &str, category_id: &str) -> bool {
        match self.dataset.links.iter_mut().find(|l| l.id == link_id) {
            Some(link) if link.category_id != category_id => {
                link.category_id = category_id.to_string();
                true
            }
            _ => false,
        }
    }

    // ========== 分类 ==========

    pub fn add_category(&mut self, name: &str) -> Result<String, BoardError> {
        let name = validate_name(name)?;
        let order = next_order(self.dataset.categories.iter().map(|c| c.order));
        let category = Category::new(name, order);
        let id = category.id.clone();
        self.dataset.categories.push(category);
        Ok(id)
    }

    pub fn rename_category(&mut self, id: &str, name: &str) -> Result<(), BoardError> {
        let name = validate_name(name)?;
        let category = self
            .dataset
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BoardError::CategoryNotFound(id.to_string()))?;
        category.name = name;
        Ok(())
    }

    /// 删除分类，并把其下所有链接移到未分类
    pub fn delete_category(&mut self, id: &str) -> Result<usize, BoardError> {
        let index = self
            .dataset
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BoardError::CategoryNotFound(id.to_string()))?;
        self.dataset.categories.remove(index);

        let mut moved = 0;
        for link in self.dataset.links.iter_mut().filter(|l| l.category_id == id) {
            link.category_id = UNCATEGORIZED.to_string();
            moved += 1;
        }

        tracing::debug!(category_id = %id, moved_links = moved, "Category deleted");
        Ok(moved)
    }

    // ========== 链接 ==========

    /// 新链接追加到扁平列表末尾
    pub fn add_link(&mut self, draft: LinkDraft) -> Result<String, BoardError> {
        draft.validate()?;
        let link = Link {
            id: super::new_id(),
            title: draft.title.trim().to_string(),
            url: draft.url.trim().to_string(),
            description: draft.normalized_description(),
            category_id: draft.normalized_category(),
            created_at: Utc::now(),
            order: next_order(self.dataset.links.iter().map(|l| l.order)),
            sub_links: draft.sub_links,
        };
        let id = link.id.clone();
        self.dataset.links.push(link);
        Ok(id)
    }

    /// 编辑保留 id、createdAt 与 order
    pub fn update_link(&mut self, id: &str, draft: LinkDraft) -> Result<(), BoardError> {
        draft.validate()?;
        let link = self.link_mut(id)?;
        link.title = draft.title.trim().to_string();
        link.url = draft.url.trim().to_string();
        link.description = draft.normalized_description();
        link.category_id = draft.normalized_category();
        link.sub_links = draft.sub_links;
        Ok(())
    }

    pub fn delete_link(&mut self, id: &str) -> Result<(), BoardError> {
        let before = self.dataset.links.len();
        self.dataset.links.retain(|l| l.id != id);
        if self.dataset.links.len() == before {
            return Err(BoardError::LinkNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn add_sub_link(
        &mut self,
        link_id: &str,
        title: &str,
        url: &str,
    ) -> Result<String, BoardError> {
        if title.trim().is_empty() || url.trim().is_empty() {
            return Err(BoardError::InvalidInput(
                "子链接标题和 URL 不能为空".to_string(),
            ));
        }
        let link = self.link_mut(link_id)?;
        let sub_link = SubLink::new(title.trim(), url.trim());
        let id = sub_link.id.clone();
        link.sub_links.push(sub_link);
        Ok(id)
    }

    pub fn remove_sub_link(&mut self, link_id: &str, sub_link_id: &str) -> Result<(), BoardError> {
        let link = self.link_mut(link_id)?;
        let before = link.sub_links.len();
        link.sub_links.retain(|s| s.id != sub_link_id);
        if link.sub_links.len() == before {
            return Err(BoardError::SubLinkNotFound(sub_link_id.to_string()));
        }
        Ok(())
    }

    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.drag.clear();
    }

    fn link_mut(&mut self, id: &str) -> Result<&mut Link, BoardError> {
        self.dataset
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| BoardError::LinkNotFound(id.to_string()))
    }
}

/// 纯函数形式的状态转换：`apply(state, event) -> state`
pub fn reduce(board: &Board, event: BoardEvent) -> Result<Board, BoardError> {
    let mut next = board.clone();
    next.apply(event)?;
    Ok(next)
}

fn validate_name(name: &str) -> Result<String, BoardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::InvalidInput("分类名称不能为空".to_string()));
    }
    Ok(name.to_string())
}

fn next_order(orders: impl Iterator<Item = i64>) -> i64 {
    orders.max().map(|max| max + 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(id: &str, category_id: &str, order: i64) -> Link {
        Link {
            id: id.to_string(),
            title: format!("Link {}", id),
            url: format!("https://example.com/{}", id),
            description: None,
            category_id: category_id.to_string(),
            created_at: Utc::now(),
            order,
            sub_links: Vec::new(),
        }
    }

    fn category(id: &str, order: i64) -> Category {
        Category {
            id: id.to_string(),
            name: format!("Category {}", id),
            order,
        }
    }

    fn drop_link(board: &mut Board, dragged: &str, target: &str, position: DropPosition) {
        board.begin_drag(DragItem::link(dragged));
        // 目标卡片横跨 [0, 100)，左半边为 BEFORE
        let x = match position {
            DropPosition::Before => 10.0,
            DropPosition::After => 90.0,
        };
        board.drag_over(
            &DropTarget::Link(target.to_string()),
            Some(&PointerPosition::new(x, 0.0, 100.0)),
        );
        board.drop_on(&DropTarget::Link(target.to_string()));
    }

    fn visual_ids(board: &Board) -> Vec<String> {
        board
            .search("", &Scope::All)
            .into_iter()
            .map(|l| l.id.clone())
            .collect()
    }

    #[test]
    fn test_category_move_to_position() {
        let dataset = Dataset::new(
            vec![category("a", 0), category("b", 1), category("c", 2)],
            Vec::new(),
        );
        let mut board = Board::new(dataset);

        board.begin_drag(DragItem::category("a"));
        board.drag_over(&DropTarget::Category("c".to_string()), None);
        assert!(board.drag().drop_position.is_none());
        let change = board.drop_on(&DropTarget::Category("c".to_string()));

        assert_eq!(change, Change::Modified);
        let ids: Vec<&str> = board.sorted_categories().iter().map(|c| c.id.as_str()).collect();
        // 移除 a 后 c 位于索引 1，a 插入到该位置
        assert_eq!(ids, vec!["b", "a", "c"]);
        let orders: Vec<i64> = board.sorted_categories().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert!(!board.drag().is_dragging());
    }

    #[test]
    fn test_category_renumbering_is_contiguous() {
        let dataset = Dataset::new(
            vec![category("a", 10), category("b", 40), category("c", 25)],
            Vec::new(),
        );
        let mut board = Board::new(dataset);

        board.begin_drag(DragItem::category("b"));
        board.drop_on(&DropTarget::Category("a".to_string()));

        let ids: Vec<&str> = board.sorted_categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(board.get_category("b").unwrap().order, 0);
        assert_eq!(board.get_category("c").unwrap().order, 2);
    }

    #[test]
    fn test_link_drop_before_across_categories() {
        // A 在分类 X（order 2），B 在分类 Y（order 0）
        let dataset = Dataset::new(
            vec![category("x", 0), category("y", 1)],
            vec![link("b", "y", 0), link("c", "x", 1), link("a", "x", 2)],
        );
        let mut board = Board::new(dataset);

        drop_link(&mut board, "a", "b", DropPosition::Before);

        let a = board.get_link("a").unwrap();
        let b = board.get_link("b").unwrap();
        assert_eq!(a.category_id, "y");
        assert_eq!(a.order + 1, b.order);
        assert_eq!(visual_ids(&board), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_link_drop_after() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![link("a", "x", 0), link("b", "x", 1), link("c", "x", 2)],
        );
        let mut board = Board::new(dataset);

        drop_link(&mut board, "a", "b", DropPosition::After);

        assert_eq!(visual_ids(&board), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reorders_form_a_permutation() {
        let ids = ["a", "b", "c", "d", "e"];
        let dataset = Dataset::new(
            Vec::new(),
            ids.iter()
                .enumerate()
                .map(|(i, id)| link(id, "x", i as i64))
                .collect(),
        );
        let mut board = Board::new(dataset);

        // 在纯 Vec 上模拟同样的 BEFORE/AFTER 操作作为期望结果
        let mut expected: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        let moves = [
            ("e", "a", DropPosition::Before),
            ("b", "d", DropPosition::After),
            ("a", "c", DropPosition::After),
            ("d", "e", DropPosition::Before),
            ("c", "b", DropPosition::After),
        ];

        for (dragged, target, position) in moves {
            drop_link(&mut board, dragged, target, position);

            let from = expected.iter().position(|id| id == dragged).unwrap();
            let item = expected.remove(from);
            let mut to = expected.iter().position(|id| id == target).unwrap();
            if position == DropPosition::After {
                to += 1;
            }
            expected.insert(to, item);

            assert_eq!(visual_ids(&board), expected);
            let mut orders: Vec<i64> = board.links().iter().map(|l| l.order).collect();
            orders.sort();
            assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_self_drop_is_noop() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![link("a", "x", 7), link("b", "y", 9)],
        );
        let mut board = Board::new(dataset.clone());

        drop_link(&mut board, "a", "a", DropPosition::After);

        assert_eq!(board.dataset(), &dataset);
        assert!(!board.drag().is_dragging());
    }

    #[test]
    fn test_link_drop_on_category_only_recategorizes() {
        let dataset = Dataset::new(
            vec![category("x", 0), category("y", 1)],
            vec![link("a", "x", 5), link("b", "x", 3)],
        );
        let mut board = Board::new(dataset);

        board.begin_drag(DragItem::link("a"));
        board.drag_over(
            &DropTarget::Category("y".to_string()),
            Some(&PointerPosition::new(1.0, 0.0, 100.0)),
        );
        assert!(board.drag().drop_position.is_none());
        let change = board.drop_on(&DropTarget::Category("y".to_string()));

        assert_eq!(change, Change::Modified);
        let a = board.get_link("a").unwrap();
        assert_eq!(a.category_id, "y");
        assert_eq!(a.order, 5);
    }

    #[test]
    fn test_link_drop_on_uncategorized() {
        let dataset = Dataset::new(vec![category("x", 0)], vec![link("a", "x", 0)]);
        let mut board = Board::new(dataset);

        board.begin_drag(DragItem::link("a"));
        board.drop_on(&DropTarget::Uncategorized);

        assert_eq!(board.get_link("a").unwrap().category_id, UNCATEGORIZED);
    }

    #[test]
    fn test_category_drop_on_link_or_uncategorized_is_noop() {
        let dataset = Dataset::new(
            vec![category("x", 0), category("y", 1)],
            vec![link("a", "x", 0), link("b", UNCATEGORIZED, 1)],
        );
        let mut board = Board::new(dataset.clone());

        for target in [
            DropTarget::Link("a".to_string()),
            DropTarget::Uncategorized,
        ] {
            board.begin_drag(DragItem::category("y"));
            board.drag_over(&target, Some(&PointerPosition::new(90.0, 0.0, 100.0)));
            assert!(board.drag().drop_position.is_none());

            assert_eq!(board.drop_on(&target), Change::Unchanged);
            assert_eq!(board.dataset(), &dataset);
            assert!(!board.drag().is_dragging());
        }
    }

    #[test]
    fn test_drop_position_from_other_target_is_ignored() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![
                link("a", "x", 0),
                link("b", "x", 1),
                link("c", "x", 2),
                link("d", "x", 3),
            ],
        );
        let mut board = Board::new(dataset);

        // 在 a 的右半边悬停记录 AFTER，随后直接放到 c 上
        board.begin_drag(DragItem::link("d"));
        board.drag_over(
            &DropTarget::Link("a".to_string()),
            Some(&PointerPosition::new(90.0, 0.0, 100.0)),
        );
        assert_eq!(board.drag().drop_position, Some(DropPosition::After));
        let change = board.drop_on(&DropTarget::Link("c".to_string()));

        assert_eq!(change, Change::Modified);
        assert_eq!(visual_ids(&board), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut board = Board::new(Dataset::new(Vec::new(), vec![link("a", "x", 0)]));
        let change = board.drop_on(&DropTarget::Link("a".to_string()));
        assert_eq!(change, Change::Unchanged);
    }

    #[test]
    fn test_drag_end_clears_state() {
        let mut board = Board::new(Dataset::default());
        board.begin_drag(DragItem::link("a"));
        board.drag_over(
            &DropTarget::Link("b".to_string()),
            Some(&PointerPosition::new(80.0, 0.0, 100.0)),
        );
        assert_eq!(board.drag().drop_position, Some(DropPosition::After));

        board.apply(BoardEvent::DragEnd).unwrap();
        assert_eq!(board.drag(), &DragState::default());
    }

    #[test]
    fn test_delete_category_reassigns_links() {
        let dataset = Dataset::new(
            vec![category("x", 0), category("y", 1)],
            vec![link("a", "x", 0), link("b", "y", 1), link("c", "x", 2)],
        );
        let mut board = Board::new(dataset);

        let moved = board.delete_category("x").unwrap();

        assert_eq!(moved, 2);
        assert_eq!(board.links().len(), 3);
        assert!(board.get_category("x").is_none());
        assert_eq!(board.get_link("a").unwrap().category_id, UNCATEGORIZED);
        assert_eq!(board.get_link("c").unwrap().category_id, UNCATEGORIZED);
        assert_eq!(board.get_link("b").unwrap().category_id, "y");
    }

    #[test]
    fn test_delete_unknown_category() {
        let mut board = Board::new(Dataset::default());
        assert_eq!(
            board.delete_category("nope"),
            Err(BoardError::CategoryNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_add_link_appends_to_end() {
        let mut board = Board::new(Dataset::new(Vec::new(), vec![link("a", "x", 4)]));

        let change = board
            .apply(BoardEvent::AddLink(
                LinkDraft::new("  Tokio ", "https://tokio.rs", "").with_description("  "),
            ))
            .unwrap();

        let Change::Created { id } = change else {
            panic!("expected created change");
        };
        let added = board.get_link(&id).unwrap();
        assert_eq!(added.title, "Tokio");
        assert_eq!(added.category_id, UNCATEGORIZED);
        assert_eq!(added.order, 5);
        assert!(added.description.is_none());
    }

    #[test]
    fn test_add_link_requires_title_and_url() {
        let mut board = Board::new(Dataset::default());
        let result = board.add_link(LinkDraft::new("", "https://example.com", "x"));
        assert!(matches!(result, Err(BoardError::InvalidInput(_))));
    }

    #[test]
    fn test_update_link_keeps_identity() {
        let original = link("a", "x", 3);
        let mut board = Board::new(Dataset::new(Vec::new(), vec![original.clone()]));

        board
            .update_link("a", LinkDraft::new("Renamed", "https://renamed.dev", "y"))
            .unwrap();

        let updated = board.get_link("a").unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.category_id, "y");
        assert_eq!(updated.order, 3);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn test_sub_links_keep_insertion_order() {
        let mut board = Board::new(Dataset::new(Vec::new(), vec![link("a", "x", 0)]));

        let first = board.add_sub_link("a", "Issues", "https://example.com/issues").unwrap();
        board.add_sub_link("a", "Wiki", "https://example.com/wiki").unwrap();
        let titles: Vec<&str> = board.get_link("a").unwrap().sub_links.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Issues", "Wiki"]);

        board.remove_sub_link("a", &first).unwrap();
        assert_eq!(board.get_link("a").unwrap().sub_links.len(), 1);
        assert!(board.remove_sub_link("a", &first).is_err());
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let board = Board::new(Dataset::new(vec![category("x", 0)], Vec::new()));
        let next = reduce(
            &board,
            BoardEvent::RenameCategory {
                id: "x".to_string(),
                name: "Reading".to_string(),
            },
        )
        .unwrap();

        assert_eq!(board.get_category("x").unwrap().name, "Category x");
        assert_eq!(next.get_category("x").unwrap().name, "Reading");
    }
}
