pub mod command;
pub mod unit_tests;

pub use command::{Command, Reply, execute, parse};
