pub mod config;
pub mod error;

pub mod catalog;
pub mod common;
pub mod debugger;
pub mod index;
pub mod shell;
