use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::error::DomainError;

/// Data payload for chart nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Unique employee identifier
    pub id: EmployeeId,
    /// Display name
    pub name: String,
}

/// Chart node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct OrgNode {
    /// Employee data for this node
    pub data: NodeData,
    /// Index of the supervisor node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of direct report nodes, in report order
    pub children: Vec<Index>,
}

/// A located employee: its node, its current supervisor, and the
/// supervisor's identifier.
#[derive(Debug, Clone, Copy)]
pub struct Located {
    pub node: Index,
    pub parent: Index,
    pub parent_id: EmployeeId,
}

/// Arena-based tree structure for the organization chart.
///
/// Uses generational arena for memory-safe node references. The id map
/// makes lookups O(1) where the nested form would need a full search;
/// the explicit parent index replaces re-deriving the supervisor by
/// searching from the root.
#[derive(Debug)]
pub struct OrgArena {
    /// Arena storage for all chart nodes
    arena: Arena<OrgNode>,
    /// Index of the root node, None for empty charts
    root: Option<Index>,
    /// Employee id -> arena index
    ids: HashMap<EmployeeId, Index>,
}

impl Default for OrgArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            ids: HashMap::new(),
        }
    }

    /// Build an arena from a nested chart. The arena owns an
    /// independent copy; the source chart is left untouched.
    #[instrument(level = "debug", skip(chart))]
    pub fn from_chart(chart: &Employee) -> Result<Self, DomainError> {
        let mut tree = Self::new();
        let mut stack: Vec<(&Employee, Option<Index>)> = vec![(chart, None)];

        while let Some((employee, parent_idx)) = stack.pop() {
            let data = NodeData {
                id: employee.id,
                name: employee.name.clone(),
            };
            let node_idx = tree.insert_node(data, parent_idx)?;

            // Push in reverse so siblings keep their report order
            for child in employee.subordinates.iter().rev() {
                stack.push((child, Some(node_idx)));
            }
        }

        Ok(tree)
    }

    /// Rebuild the nested chart form as an independent deep copy.
    /// Returns `None` for an empty arena.
    pub fn to_chart(&self) -> Option<Employee> {
        self.root.and_then(|root| self.build_subtree(root))
    }

    fn build_subtree(&self, node_idx: Index) -> Option<Employee> {
        let node = self.arena.get(node_idx)?;
        let subordinates = node
            .children
            .iter()
            .filter_map(|&child| self.build_subtree(child))
            .collect();
        Some(Employee {
            id: node.data.id,
            name: node.data.name.clone(),
            subordinates,
        })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(
        &mut self,
        data: NodeData,
        parent: Option<Index>,
    ) -> Result<Index, DomainError> {
        if self.ids.contains_key(&data.id) {
            return Err(DomainError::DuplicateId(data.id));
        }
        let id = data.id;
        let node = OrgNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);
        self.ids.insert(id, node_idx);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        Ok(node_idx)
    }

    /// Find an employee together with their current supervisor.
    ///
    /// The root is never located: it has no supervisor, so it can be
    /// neither relocated nor chosen as a relocation target.
    #[instrument(level = "trace", skip(self))]
    pub fn locate(&self, id: EmployeeId) -> Option<Located> {
        let node_idx = *self.ids.get(&id)?;
        let node = self.arena.get(node_idx)?;
        let parent_idx = node.parent?;
        let parent = self.arena.get(parent_idx)?;
        Some(Located {
            node: node_idx,
            parent: parent_idx,
            parent_id: parent.data.id,
        })
    }

    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn employee_count(&self) -> usize {
        self.arena.len()
    }

    /// Identifiers of a node's direct reports, in report order.
    pub fn children_ids(&self, idx: Index) -> Vec<EmployeeId> {
        match self.arena.get(idx) {
            Some(node) => node
                .children
                .iter()
                .filter_map(|&child| self.arena.get(child).map(|n| n.data.id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Excise `employee` and reattach it under `supervisor`.
    ///
    /// The employee's reports are appended to `parent` (the former
    /// supervisor) before the employee is removed from that list, so
    /// the promoted reports always form the tail of the parent's list
    /// and the employee is always the tail of the new supervisor's
    /// list. Undo depends on both positions.
    pub(crate) fn relocate_node(&mut self, employee: Index, parent: Index, supervisor: Index) {
        let promoted = match self.arena.get_mut(employee) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for &child in &promoted {
            if let Some(node) = self.arena.get_mut(child) {
                node.parent = Some(parent);
            }
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.extend(promoted);
            node.children.retain(|&child| child != employee);
        }
        if let Some(node) = self.arena.get_mut(supervisor) {
            node.children.push(employee);
        }
        if let Some(node) = self.arena.get_mut(employee) {
            node.parent = Some(supervisor);
        }
    }

    /// Drop the last `count` entries from a node's report list.
    pub(crate) fn truncate_children(&mut self, idx: Index, count: usize) {
        if let Some(node) = self.arena.get_mut(idx) {
            let keep = node.children.len().saturating_sub(count);
            node.children.truncate(keep);
        }
    }

    /// Replace a node's report list, fixing up the reports' parents.
    pub(crate) fn set_children(&mut self, idx: Index, children: Vec<Index>) {
        for &child in &children {
            if let Some(node) = self.arena.get_mut(child) {
                node.parent = Some(idx);
            }
        }
        if let Some(node) = self.arena.get_mut(idx) {
            node.children = children;
        }
    }

    /// Remove and return the last report of a node. The caller is
    /// responsible for reattaching the popped node.
    pub(crate) fn pop_child(&mut self, idx: Index) -> Option<Index> {
        self.arena.get_mut(idx)?.children.pop()
    }

    /// Append `child` to `parent`'s report list.
    pub(crate) fn attach(&mut self, parent: Index, child: Index) {
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
    }

    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Depth-first pre-order traversal over the chart.
pub struct TreeIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
