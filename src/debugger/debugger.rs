use std::fmt;
use std::cell::Cell;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Accepts either a number (`"3"`) or a level name (`"info"`).
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(n) = s.trim().parse::<u8>() {
            return Some(Self::from_u8(n));
        }

        match s.trim().to_uppercase().as_str() {
            "OFF" => Some(DebugLevel::Off),
            "ERROR" => Some(DebugLevel::Error),
            "WARN" => Some(DebugLevel::Warn),
            "INFO" => Some(DebugLevel::Info),
            "DEBUG" => Some(DebugLevel::Debug),
            "TRACE" => Some(DebugLevel::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    Index,
    Catalog,
    Shell,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Index => "index",
            Component::Catalog => "catalog",
            Component::Shell => "shell",
        };
        f.write_str(name)
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

thread_local! {
    // per thread, so scopes opened on different threads never interleave
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && (level as u8) <= DEBUG_LEVEL.load(Ordering::Relaxed)
}

pub fn indent() {
    DEPTH.with(|d| d.set(d.get() + 1));
}

pub fn dedent() {
    DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
}

pub fn format_indent() -> String {
    DEPTH.with(|d| "  ".repeat(d.get()))
}

/// Colored tag printed in front of every log line.
pub fn level_tag(level: DebugLevel) -> String {
    let (color, name) = match level {
        DebugLevel::Off => return String::new(),
        DebugLevel::Error => ("\x1b[31m", "ERROR"),
        DebugLevel::Warn => ("\x1b[33m", "WARN"),
        DebugLevel::Info => ("\x1b[32m", "INFO"),
        DebugLevel::Debug => ("\x1b[34m", "DEBUG"),
        DebugLevel::Trace => ("\x1b[90m", "TRACE"),
    };
    format!("{}{}\x1b[0m", color, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_numbers_and_names() {
        assert_eq!(DebugLevel::parse("0"), Some(DebugLevel::Off));
        assert_eq!(DebugLevel::parse("4"), Some(DebugLevel::Debug));
        assert_eq!(DebugLevel::parse("9"), Some(DebugLevel::Trace));
        assert_eq!(DebugLevel::parse("warn"), Some(DebugLevel::Warn));
        assert_eq!(DebugLevel::parse(" Trace "), Some(DebugLevel::Trace));
        assert_eq!(DebugLevel::parse("loud"), None);
    }

    #[test]
    fn off_never_logs() {
        assert!(!should_log(DebugLevel::Off));
        assert_eq!(level_tag(DebugLevel::Off), "");
    }

    #[test]
    fn level_tag_names_the_level() {
        assert!(level_tag(DebugLevel::Warn).contains("WARN"));
        assert!(level_tag(DebugLevel::Trace).contains("TRACE"));
    }

    #[test]
    fn dedent_never_underflows() {
        dedent();
        assert_eq!(format_indent(), "");

        indent();
        indent();
        assert_eq!(format_indent(), "    ");
        dedent();
        dedent();
        assert_eq!(format_indent(), "");
    }

    #[test]
    fn scope_indents_body_and_returns_its_value() {
        set_debug_level(DebugLevel::Trace);

        let inside = crate::db_scope!(DebugLevel::Trace, Component::Index, "outer", {
            crate::db_scope!(DebugLevel::Trace, Component::Index, "inner", {
                format_indent()
            })
        });

        set_debug_level(DebugLevel::Off);

        assert_eq!(inside, "    ");
        assert_eq!(format_indent(), "");
    }
}
