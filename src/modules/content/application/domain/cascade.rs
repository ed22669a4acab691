use uuid::Uuid;

use super::entities::ChildRow;
use super::sort_order::{max_rank, next_append_rank};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CascadeError {
    #[error("Child {child_id} does not belong to parent {parent_id}")]
    NotMember { parent_id: Uuid, child_id: Uuid },
}

/// The ordered children of one parent row.
///
/// Children only exist through their parent id, so adding or removing here
/// is the single place where parent and child are made consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildList {
    parent_id: Uuid,
    children: Vec<ChildRow>,
}

impl ChildList {
    pub fn new(parent_id: Uuid, mut children: Vec<ChildRow>) -> Self {
        children.retain(|c| c.parent_id == parent_id);
        children.sort_by_key(|c| c.sort_order);
        Self {
            parent_id,
            children,
        }
    }

    pub fn parent_id(&self) -> Uuid {
        self.parent_id
    }

    pub fn children(&self) -> &[ChildRow] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, child_id: Uuid) -> bool {
        self.children.iter().any(|c| c.id == child_id)
    }

    /// Append a child after its highest-ranked sibling.
    pub fn add(&mut self, child_id: Uuid) -> ChildRow {
        let sort_order = next_append_rank(max_rank(self.children.iter().map(|c| c.sort_order)));
        let row = ChildRow {
            id: child_id,
            parent_id: self.parent_id,
            sort_order,
        };
        self.children.push(row);
        row
    }

    /// Detach a child. Remaining siblings keep their ranks.
    pub fn remove(&mut self, child_id: Uuid) -> Result<ChildRow, CascadeError> {
        let position = self
            .children
            .iter()
            .position(|c| c.id == child_id)
            .ok_or(CascadeError::NotMember {
                parent_id: self.parent_id,
                child_id,
            })?;

        Ok(self.children.remove(position))
    }
}
