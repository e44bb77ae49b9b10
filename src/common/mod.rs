pub mod fold;
pub mod record;

pub use fold::{contains_folded, eq_folded, fold_cmp};
pub use record::{Field, PublicationDate, Record, RecordUpdate};
