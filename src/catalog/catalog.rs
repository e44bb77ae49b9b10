use crate::common::record::{Field, Record, RecordUpdate};
use crate::debugger::Component;
use crate::error::CatalogError;
use crate::index::{InsertOutcome, OrderedCatalogIndex};
use crate::{db_debug, db_info, db_warn};

/// One catalog session. Owns the title index for its whole lifetime and turns
/// the index's plain outcomes into [`CatalogError`]s for callers.
#[derive(Debug, Default)]
pub struct Catalog {
    index: OrderedCatalogIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_books() -> Self {
        let mut catalog = Self::new();
        for record in crate::catalog::sample::sample_books() {
            if let Err(e) = catalog.add_book(record) {
                db_warn!(Component::Catalog, "skipping sample book: {}", e);
            }
        }
        db_info!(Component::Catalog, "seeded {} sample books", catalog.len());
        catalog
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &OrderedCatalogIndex {
        &self.index
    }

    // ---------- mutations ----------

    pub fn add_book(&mut self, record: Record) -> Result<(), CatalogError> {
        let title = record.title.clone();

        match self.index.insert(record) {
            InsertOutcome::Inserted => {
                db_debug!(Component::Catalog, "added '{}'", title);
                Ok(())
            }
            InsertOutcome::Duplicate => {
                db_warn!(Component::Catalog, "duplicate title '{}'", title);
                Err(CatalogError::DuplicateTitle(title))
            }
            InsertOutcome::Rejected => {
                db_warn!(Component::Catalog, "rejected blank title");
                Err(CatalogError::EmptyTitle)
            }
        }
    }

    pub fn remove_book(&mut self, title: &str) -> Result<Record, CatalogError> {
        let removed = self
            .index
            .remove(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        db_debug!(Component::Catalog, "removed '{}'", removed.title);
        Ok(removed)
    }

    pub fn update_book(
        &mut self,
        title: &str,
        update: RecordUpdate,
    ) -> Result<&Record, CatalogError> {
        let record = self
            .index
            .find_exact_mut(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        record.apply(update);
        db_debug!(Component::Catalog, "updated '{}'", record.title);
        Ok(record)
    }

    /// Flips checked-in/checked-out and returns the new availability.
    pub fn toggle_availability(&mut self, title: &str) -> Result<bool, CatalogError> {
        let record = self
            .index
            .find_exact_mut(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        record.available = !record.available;
        db_debug!(
            Component::Catalog,
            "'{}' is now {}",
            record.title,
            if record.available { "available" } else { "checked out" }
        );
        Ok(record.available)
    }

    // ---------- queries ----------

    pub fn find_book(&self, title: &str) -> Option<&Record> {
        self.index.find_exact(title)
    }

    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        self.index.scan(keyword)
    }

    pub fn group_by(&self, field: &str, value: &str) -> Result<Vec<&Record>, CatalogError> {
        let field: Field = field.parse()?;
        Ok(self.index.scan_field(field, value))
    }

    pub fn list_all(&self) -> Vec<&Record> {
        self.index.list_all()
    }

    pub fn list_by_author(&self) -> Vec<&Record> {
        self.index.list_by_author()
    }
}
