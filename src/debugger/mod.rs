pub mod debugger;
mod macros;

pub use debugger::{Component, DebugLevel, set_debug_level};
