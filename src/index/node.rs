use crate::common::record::Record;

/// Slot in the index arena. Only the parent node (or the index root) holds a
/// given id, so the arena always describes a tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct AvlNode {
    pub record: Record,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// Leaf = 1. An absent child counts as 0.
    pub height: usize,
}

impl AvlNode {
    pub fn leaf(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same title (ignoring case) is already present. The
    /// stored record is kept and the new one dropped.
    Duplicate,
    /// Blank titles are never indexed.
    Rejected,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}
