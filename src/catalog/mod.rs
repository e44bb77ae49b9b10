pub mod catalog;
pub mod sample;

pub use catalog::Catalog;
