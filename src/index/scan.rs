//! Read paths over the index: exact lookup, in-order iteration and the
//! linear scans built on it.
//!
//! Only `find_exact` uses the tree ordering. Keyword and field scans visit
//! every node; the tree just hands them out in title order.

use std::cmp::Ordering;

use crate::common::fold::fold_cmp;
use crate::common::record::{Field, Record};
use crate::index::avl::OrderedCatalogIndex;
use crate::index::node::NodeId;

impl OrderedCatalogIndex {
    pub fn find_exact(&self, title: &str) -> Option<&Record> {
        self.locate(title).map(|id| &self.node(id).record)
    }

    /// Mutable access for in-place field updates. Changing `title` through
    /// this reference would break the ordering, so callers must not.
    pub fn find_exact_mut(&mut self, title: &str) -> Option<&mut Record> {
        let id = self.locate(title)?;
        Some(&mut self.node_mut(id).record)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.locate(title).is_some()
    }

    fn locate(&self, title: &str) -> Option<NodeId> {
        let mut cur = self.root;

        while let Some(id) = cur {
            let node = self.node(id);
            cur = match fold_cmp(title, &node.record.title) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }

        None
    }

    /// `(title, cached height)` for every node in title order. Two indexes
    /// with equal shapes have identical tree structure: the tallest entry of
    /// any run is that subtree's root.
    pub fn shape(&self) -> Vec<(&str, usize)> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_shape(self.root, &mut out);
        out
    }

    fn collect_shape<'a>(&'a self, id: Option<NodeId>, out: &mut Vec<(&'a str, usize)>) {
        let Some(id) = id else {
            return;
        };
        let node = self.node(id);
        self.collect_shape(node.left, out);
        out.push((node.record.title.as_str(), node.height));
        self.collect_shape(node.right, out);
    }

    /// Records in ascending title order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Records where `keyword` occurs, ignoring case, in the title, author,
    /// publisher, any date part, ISBN or category. An empty keyword matches
    /// everything.
    pub fn scan(&self, keyword: &str) -> Vec<&Record> {
        let needle = keyword.to_lowercase();
        self.scan_by(|record| record.matches_prefolded(&needle))
    }

    pub fn scan_by<F>(&self, predicate: F) -> Vec<&Record>
    where
        F: Fn(&Record) -> bool,
    {
        self.iter().filter(|record| predicate(*record)).collect()
    }

    /// Records whose `field` equals `value` ignoring case.
    pub fn scan_field(&self, field: Field, value: &str) -> Vec<&Record> {
        self.scan_by(|record| record.field_equals(field, value))
    }

    pub fn list_all(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    /// All records ordered by author ignoring case. The sort is stable, so
    /// books by the same author stay in title order.
    pub fn list_by_author(&self) -> Vec<&Record> {
        let mut records = self.list_all();
        records.sort_by(|a, b| fold_cmp(&a.author, &b.author));
        records
    }
}

impl<'a> IntoIterator for &'a OrderedCatalogIndex {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator holding the path of pending ancestors.
pub struct Iter<'a> {
    index: &'a OrderedCatalogIndex,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(index: &'a OrderedCatalogIndex) -> Self {
        let mut iter = Self {
            index,
            stack: Vec::with_capacity(index.height()),
            remaining: index.len(),
        };
        iter.push_left(index.root);
        iter
    }

    fn push_left(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.index.node(id).left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let index = self.index;
        let node = index.node(id);
        self.push_left(node.right);
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
