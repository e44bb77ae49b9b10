use std::cmp::Ordering;

use crate::common::fold::fold_cmp;
use crate::common::record::Record;
use crate::debugger::{Component, DebugLevel};
use crate::index::node::{AvlNode, InsertOutcome, NodeId};
use crate::{db_debug, db_scope, db_trace};

/// AVL tree keyed by case-folded title.
///
/// Nodes are stored in an arena and linked by [`NodeId`]. Slots freed by
/// deletion are recycled by later inserts.
#[derive(Debug, Default)]
pub struct OrderedCatalogIndex {
    pub(crate) root: Option<NodeId>,
    nodes: Vec<Option<AvlNode>>,
    free: Vec<NodeId>,
    len: usize,
}

impl OrderedCatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.free.clear();
        self.len = 0;
    }

    pub fn insert(&mut self, record: Record) -> InsertOutcome {
        if record.title.trim().is_empty() {
            return InsertOutcome::Rejected;
        }

        let key = record.title.clone();
        let (root, outcome) = db_scope!(
            DebugLevel::Trace,
            Component::Index,
            format!("insert '{}'", key),
            { self.insert_at(self.root, &key, record) }
        );
        self.root = Some(root);

        if outcome.is_inserted() {
            self.len += 1;
            db_debug!(Component::Index, "inserted '{}' (len={})", key, self.len);
        } else {
            db_debug!(Component::Index, "ignored duplicate title '{}'", key);
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        outcome
    }

    /// Removes the record whose title matches `title` (ignoring case).
    pub fn delete(&mut self, title: &str) -> bool {
        self.remove(title).is_some()
    }

    /// Like [`delete`](Self::delete) but hands back the removed record.
    pub fn remove(&mut self, title: &str) -> Option<Record> {
        let (root, removed) = db_scope!(
            DebugLevel::Trace,
            Component::Index,
            format!("delete '{}'", title),
            { self.delete_at(self.root, title) }
        );
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
            db_debug!(Component::Index, "deleted '{}' (len={})", title, self.len);
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        removed
    }

    fn insert_at(
        &mut self,
        node: Option<NodeId>,
        key: &str,
        record: Record,
    ) -> (NodeId, InsertOutcome) {
        let Some(id) = node else {
            return (self.alloc(record), InsertOutcome::Inserted);
        };

        let outcome = match fold_cmp(key, &self.node(id).record.title) {
            Ordering::Less => {
                let left = self.node(id).left;
                let (child, outcome) = self.insert_at(left, key, record);
                self.node_mut(id).left = Some(child);
                outcome
            }
            Ordering::Greater => {
                let right = self.node(id).right;
                let (child, outcome) = self.insert_at(right, key, record);
                self.node_mut(id).right = Some(child);
                outcome
            }
            Ordering::Equal => return (id, InsertOutcome::Duplicate),
        };

        if !outcome.is_inserted() {
            return (id, outcome);
        }

        self.update_height(id);
        (self.rebalance_after_insert(id, key), outcome)
    }

    /// Insert cases are picked by where the new key went relative to the
    /// heavy child.
    fn rebalance_after_insert(&mut self, id: NodeId, key: &str) -> NodeId {
        let balance = self.balance_of(Some(id));

        if balance > 1 {
            let left = self.left_of(id);
            if fold_cmp(key, &self.node(left).record.title) == Ordering::Less {
                return self.rotate_right(id);
            }
            let left = self.rotate_left(left);
            self.node_mut(id).left = Some(left);
            return self.rotate_right(id);
        }

        if balance < -1 {
            let right = self.right_of(id);
            if fold_cmp(key, &self.node(right).record.title) == Ordering::Greater {
                return self.rotate_left(id);
            }
            let right = self.rotate_right(right);
            self.node_mut(id).right = Some(right);
            return self.rotate_left(id);
        }

        id
    }

    fn delete_at(
        &mut self,
        node: Option<NodeId>,
        title: &str,
    ) -> (Option<NodeId>, Option<Record>) {
        let Some(id) = node else {
            return (None, None);
        };

        let removed = match fold_cmp(title, &self.node(id).record.title) {
            Ordering::Less => {
                let left = self.node(id).left;
                let (child, removed) = self.delete_at(left, title);
                self.node_mut(id).left = child;
                removed
            }
            Ordering::Greater => {
                let right = self.node(id).right;
                let (child, removed) = self.delete_at(right, title);
                self.node_mut(id).right = child;
                removed
            }
            Ordering::Equal => {
                let (left, right) = (self.node(id).left, self.node(id).right);
                match (left, right) {
                    (Some(_), Some(right)) => {
                        // Two children: the in-order successor's record takes
                        // this node's place and the successor node goes away.
                        let (child, successor) = self.detach_min(right);
                        db_trace!(
                            Component::Index,
                            "'{}' replaced by successor '{}'",
                            self.node(id).record.title,
                            successor.title
                        );
                        let node = self.node_mut(id);
                        node.right = child;
                        Some(std::mem::replace(&mut node.record, successor))
                    }
                    (child, None) | (None, child) => {
                        let record = self.release(id);
                        return (child, Some(record));
                    }
                }
            }
        };

        if removed.is_none() {
            return (Some(id), None);
        }

        self.update_height(id);
        (Some(self.rebalance_after_delete(id)), removed)
    }

    /// Unlinks the leftmost node under `id` and returns the new subtree root
    /// together with its record.
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, Record) {
        match self.node(id).left {
            None => {
                let right = self.node(id).right;
                (right, self.release(id))
            }
            Some(left) => {
                let (child, record) = self.detach_min(left);
                self.node_mut(id).left = child;
                self.update_height(id);
                (Some(self.rebalance_after_delete(id)), record)
            }
        }
    }

    /// Delete cases are picked by the balance of the heavy child.
    fn rebalance_after_delete(&mut self, id: NodeId) -> NodeId {
        let balance = self.balance_of(Some(id));

        if balance > 1 {
            let left = self.left_of(id);
            if self.balance_of(Some(left)) >= 0 {
                return self.rotate_right(id);
            }
            let left = self.rotate_left(left);
            self.node_mut(id).left = Some(left);
            return self.rotate_right(id);
        }

        if balance < -1 {
            let right = self.right_of(id);
            if self.balance_of(Some(right)) <= 0 {
                return self.rotate_left(id);
            }
            let right = self.rotate_right(right);
            self.node_mut(id).right = Some(right);
            return self.rotate_left(id);
        }

        id
    }

    //        y              x
    //       / \            / \
    //      x   C   -->    A   y
    //     / \                / \
    //    A   B              B   C
    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let x = self.left_of(y);
        let b = self.node(x).right;

        db_trace!(Component::Index, "rotate right at '{}'", self.node(y).record.title);

        self.node_mut(y).left = b;
        self.node_mut(x).right = Some(y);

        self.update_height(y);
        self.update_height(x);
        x
    }

    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let y = self.right_of(x);
        let b = self.node(y).left;

        db_trace!(Component::Index, "rotate left at '{}'", self.node(x).record.title);

        self.node_mut(x).right = b;
        self.node_mut(y).left = Some(x);

        self.update_height(x);
        self.update_height(y);
        y
    }

    // ---------- arena ----------

    fn alloc(&mut self, record: Record) -> NodeId {
        let node = AvlNode::leaf(record);
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Frees the slot. The caller must already have unlinked `id`.
    fn release(&mut self, id: NodeId) -> Record {
        match self.nodes[id.0].take() {
            Some(node) => {
                self.free.push(id);
                node.record
            }
            None => unreachable!("double release of {:?}", id),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &AvlNode {
        match &self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("dangling node id {:?}", id),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut AvlNode {
        match &mut self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("dangling node id {:?}", id),
        }
    }

    fn left_of(&self, id: NodeId) -> NodeId {
        match self.node(id).left {
            Some(left) => left,
            None => unreachable!("left-heavy node {:?} has no left child", id),
        }
    }

    fn right_of(&self, id: NodeId) -> NodeId {
        match self.node(id).right {
            Some(right) => right,
            None => unreachable!("right-heavy node {:?} has no right child", id),
        }
    }

    fn height_of(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.node(id).height)
    }

    /// height(left) - height(right); 0 for an absent node.
    fn balance_of(&self, id: Option<NodeId>) -> isize {
        match id {
            Some(id) => {
                let node = self.node(id);
                self.height_of(node.left) as isize - self.height_of(node.right) as isize
            }
            None => 0,
        }
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.node_mut(id).height = height;
    }

    // ---------- invariants ----------

    /// Panics if ordering, balance, cached heights, uniqueness or the node
    /// count are off. Runs after every mutation in debug builds.
    pub fn assert_invariants(&self) {
        let mut count = 0;
        self.assert_node(self.root, None, None, &mut count);

        assert_eq!(count, self.len, "reachable nodes != len");
        assert_eq!(
            self.nodes.iter().filter(|n| n.is_some()).count(),
            self.len,
            "live arena slots != len"
        );
        assert_eq!(self.nodes.len(), self.len + self.free.len());
    }

    fn assert_node(
        &self,
        id: Option<NodeId>,
        lower: Option<&str>,
        upper: Option<&str>,
        count: &mut usize,
    ) -> usize {
        let Some(id) = id else {
            return 0;
        };
        let node = self.node(id);
        let title = node.record.title.as_str();
        *count += 1;

        // strict bounds also rule out duplicate titles
        if let Some(lower) = lower {
            assert_eq!(fold_cmp(lower, title), Ordering::Less, "'{}' out of order", title);
        }
        if let Some(upper) = upper {
            assert_eq!(fold_cmp(title, upper), Ordering::Less, "'{}' out of order", title);
        }

        let lh = self.assert_node(node.left, lower, Some(title), count);
        let rh = self.assert_node(node.right, Some(title), upper, count);

        assert!(lh.abs_diff(rh) <= 1, "'{}' unbalanced: {} vs {}", title, lh, rh);
        assert_eq!(node.height, 1 + lh.max(rh), "stale height at '{}'", title);

        node.height
    }
}
