//! Line commands understood by `catalogcli`.
//!
//! Fields inside `add` and `set` are separated by `|` so titles can contain
//! spaces.

use crate::catalog::Catalog;
use crate::common::record::{Field, PublicationDate, Record, RecordUpdate};
use crate::db_scope;
use crate::debugger::{Component, DebugLevel};
use crate::error::CatalogError;

pub const HELP: &str = "\
commands:
  add <title> | <author> | <publisher> | <date> | <isbn> | <category> [| <call number>]
  set <title> | <field> | <value>
  remove <title>
  find <title>
  search <keyword>
  group <field> <value>
  toggle <title>
  list
  authors
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Record),
    Set {
        title: String,
        update: RecordUpdate,
    },
    Remove(String),
    Find(String),
    Search(String),
    Group {
        field: String,
        value: String,
    },
    Toggle(String),
    List,
    Authors,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Records(Vec<Record>),
    Message(String),
    Quit,
}

pub fn parse(line: &str) -> Result<Command, CatalogError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let cmd = match verb.to_lowercase().as_str() {
        "add" => Command::Add(parse_record(rest)?),
        "set" => parse_set(rest)?,
        "remove" | "delete" => Command::Remove(required(rest, "title")?),
        "find" => Command::Find(required(rest, "title")?),
        "search" => Command::Search(rest.to_string()),
        "group" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| invalid("usage: group <field> <value>"))?;
            Command::Group {
                field: field.to_string(),
                value: value.trim().to_string(),
            }
        }
        "toggle" => Command::Toggle(required(rest, "title")?),
        "list" => Command::List,
        "authors" => Command::Authors,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(invalid(&format!("unknown command '{}'", other))),
    };

    Ok(cmd)
}

pub fn execute(catalog: &mut Catalog, cmd: Command) -> Result<Reply, CatalogError> {
    let name = format!("{:?}", cmd);
    db_scope!(DebugLevel::Debug, Component::Shell, name, { run(catalog, cmd) })
}

fn run(catalog: &mut Catalog, cmd: Command) -> Result<Reply, CatalogError> {
    let reply = match cmd {
        Command::Add(record) => {
            let title = record.title.clone();
            catalog.add_book(record)?;
            Reply::Message(format!("added '{}'", title))
        }
        Command::Set { title, update } => {
            let record = catalog.update_book(&title, update)?;
            Reply::Records(vec![record.clone()])
        }
        Command::Remove(title) => {
            let removed = catalog.remove_book(&title)?;
            Reply::Message(format!("removed '{}'", removed.title))
        }
        Command::Find(title) => {
            let record = catalog
                .find_book(&title)
                .ok_or(CatalogError::NotFound(title))?;
            Reply::Records(vec![record.clone()])
        }
        Command::Search(keyword) => owned(catalog.search(&keyword)),
        Command::Group { field, value } => owned(catalog.group_by(&field, &value)?),
        Command::Toggle(title) => {
            let available = catalog.toggle_availability(&title)?;
            let state = if available { "available" } else { "checked out" };
            Reply::Message(format!("'{}' is now {}", title, state))
        }
        Command::List => owned(catalog.list_all()),
        Command::Authors => owned(catalog.list_by_author()),
        Command::Help => Reply::Message(HELP.to_string()),
        Command::Quit => Reply::Quit,
    };

    Ok(reply)
}

fn owned(records: Vec<&Record>) -> Reply {
    Reply::Records(records.into_iter().cloned().collect())
}

fn invalid(reason: &str) -> CatalogError {
    CatalogError::InvalidCommand(reason.to_string())
}

fn required(arg: &str, what: &str) -> Result<String, CatalogError> {
    if arg.is_empty() {
        return Err(invalid(&format!("missing {}", what)));
    }
    Ok(arg.to_string())
}

fn split_fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn parse_record(rest: &str) -> Result<Record, CatalogError> {
    let fields = split_fields(rest);
    if fields.len() < 6 || fields.len() > 7 {
        return Err(invalid(
            "usage: add <title> | <author> | <publisher> | <date> | <isbn> | <category> [| <call number>]",
        ));
    }

    let mut record = Record::new(fields[0], fields[1])
        .publisher(fields[2])
        .date(parse_date(fields[3]))
        .isbn(fields[4])
        .category(fields[5]);

    if let Some(call_number) = fields.get(6).filter(|c| !c.is_empty()) {
        record = record.call_number(*call_number);
    }

    Ok(record)
}

fn parse_set(rest: &str) -> Result<Command, CatalogError> {
    let fields = split_fields(rest);
    let [title, field, value] = fields[..] else {
        return Err(invalid("usage: set <title> | <field> | <value>"));
    };

    let mut update = RecordUpdate::default();
    match field.parse::<Field>() {
        Ok(Field::Title) => return Err(invalid("the title cannot be changed")),
        Ok(Field::Author) => update.author = Some(value.to_string()),
        Ok(Field::Publisher) => update.publisher = Some(value.to_string()),
        Ok(Field::Date) => update.date = Some(parse_date(value)),
        Ok(Field::Isbn) => update.isbn = Some(value.to_string()),
        Ok(Field::Category) => update.category = Some(value.to_string()),
        Err(_) if field.eq_ignore_ascii_case("call") => {
            update.call_number = Some(value.to_string())
        }
        Err(e) => return Err(e),
    }

    Ok(Command::Set {
        title: title.to_string(),
        update,
    })
}

/// "July 22, 1997" and "July 22 1997" become month/day/year parts; anything
/// else is kept as free text.
pub fn parse_date(s: &str) -> PublicationDate {
    let parts: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    match parts[..] {
        [month, day, year] if day.parse::<u8>().is_ok() && year.parse::<u32>().is_ok() => {
            PublicationDate::parts(month, day, year)
        }
        _ => PublicationDate::Text(s.to_string()),
    }
}
