use std::fmt;
use std::str::FromStr;

use crate::common::fold::{contains_prefolded, eq_folded};
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicationDate {
    /// Month name, day and year kept as entered ("July", "22", "1997").
    Parts {
        month: String,
        day: String,
        year: String,
    },
    Text(String),
}

impl PublicationDate {
    pub fn parts(
        month: impl Into<String>,
        day: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        PublicationDate::Parts {
            month: month.into(),
            day: day.into(),
            year: year.into(),
        }
    }

    fn pieces(&self) -> Vec<&str> {
        match self {
            PublicationDate::Parts { month, day, year } => {
                vec![month.as_str(), day.as_str(), year.as_str()]
            }
            PublicationDate::Text(text) => vec![text.as_str()],
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.pieces().into_iter().any(|p| contains_prefolded(p, needle))
    }

    /// Equal to the rendered date or to any single component of it.
    fn matches_exactly(&self, value: &str) -> bool {
        eq_folded(&self.to_string(), value)
            || self.pieces().into_iter().any(|p| eq_folded(p, value))
    }
}

impl Default for PublicationDate {
    fn default() -> Self {
        PublicationDate::Text(String::new())
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationDate::Parts { month, day, year } => write!(f, "{} {}, {}", month, day, year),
            PublicationDate::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub date: PublicationDate,
    pub isbn: String,
    pub category: String,
    pub call_number: Option<String>,
    pub book_number: Option<u32>,
    pub available: bool,
}

impl Record {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publisher: String::new(),
            date: PublicationDate::default(),
            isbn: String::new(),
            category: String::new(),
            call_number: None,
            book_number: None,
            available: true,
        }
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn date(mut self, date: PublicationDate) -> Self {
        self.date = date;
        self
    }

    pub fn year(self, year: impl Into<String>) -> Self {
        self.date(PublicationDate::Text(year.into()))
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn call_number(mut self, call_number: impl Into<String>) -> Self {
        self.call_number = Some(call_number.into());
        self
    }

    pub fn book_number(mut self, number: u32) -> Self {
        self.book_number = Some(number);
        self
    }

    /// Keyword match over title, author, publisher, date parts, ISBN and
    /// category, ignoring case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.matches_prefolded(&keyword.to_lowercase())
    }

    pub(crate) fn matches_prefolded(&self, needle: &str) -> bool {
        contains_prefolded(&self.title, needle)
            || contains_prefolded(&self.author, needle)
            || contains_prefolded(&self.publisher, needle)
            || self.date.contains(needle)
            || contains_prefolded(&self.isbn, needle)
            || contains_prefolded(&self.category, needle)
    }

    pub fn field_equals(&self, field: Field, value: &str) -> bool {
        match field {
            Field::Title => eq_folded(&self.title, value),
            Field::Author => eq_folded(&self.author, value),
            Field::Publisher => eq_folded(&self.publisher, value),
            Field::Date => self.date.matches_exactly(value),
            Field::Isbn => eq_folded(&self.isbn, value),
            Field::Category => eq_folded(&self.category, value),
        }
    }

    pub fn apply(&mut self, update: RecordUpdate) {
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(publisher) = update.publisher {
            self.publisher = publisher;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(isbn) = update.isbn {
            self.isbn = isbn;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(call_number) = update.call_number {
            self.call_number = Some(call_number);
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.book_number {
            write!(f, "#{} ", n)?;
        }
        write!(f, "{} by {}", self.title, self.author)?;
        if !self.publisher.is_empty() {
            write!(f, " ({})", self.publisher)?;
        }
        let date = self.date.to_string();
        if !date.is_empty() {
            write!(f, ", {}", date)?;
        }
        if !self.isbn.is_empty() {
            write!(f, ", ISBN {}", self.isbn)?;
        }
        if !self.category.is_empty() {
            write!(f, " [{}]", self.category)?;
        }
        if let Some(call_number) = &self.call_number {
            write!(f, " {}", call_number)?;
        }
        if !self.available {
            f.write_str(" (checked out)")?;
        }
        Ok(())
    }
}

/// Partial change to a record. The title is the index key and cannot be
/// changed in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<PublicationDate>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub call_number: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Publisher,
    Date,
    Isbn,
    Category,
}

impl FromStr for Field {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            "publisher" => Ok(Field::Publisher),
            "date" | "year" => Ok(Field::Date),
            "isbn" => Ok(Field::Isbn),
            "category" => Ok(Field::Category),
            other => Err(CatalogError::UnknownField(other.to_string())),
        }
    }
}
