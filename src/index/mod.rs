pub mod avl;
pub mod node;
pub mod scan;

pub use avl::OrderedCatalogIndex;
pub use node::{AvlNode, InsertOutcome, NodeId};
pub use scan::Iter;
