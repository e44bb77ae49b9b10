mod helpers;

use maplit::btreeset;

use helpers::data::{index_of, manga, titles};
use libris::catalog::Catalog;
use libris::common::record::{Field, Record};
use libris::error::CatalogError;
use libris::index::{InsertOutcome, OrderedCatalogIndex};

#[test]
fn list_all_is_title_order_not_insert_order() {
    let mut index = OrderedCatalogIndex::new();
    index.insert(Record::new("Naruto", "Masashi Kishimoto"));
    index.insert(Record::new("One Piece", "Eiichiro Oda"));

    assert_eq!(titles(&index.list_all()), vec!["Naruto", "One Piece"]);

    let mut reversed = OrderedCatalogIndex::new();
    reversed.insert(Record::new("One Piece", "Eiichiro Oda"));
    reversed.insert(Record::new("Naruto", "Masashi Kishimoto"));

    assert_eq!(titles(&reversed.list_all()), vec!["Naruto", "One Piece"]);
}

#[test]
fn degenerate_insert_order_is_rebalanced() {
    let mut index = OrderedCatalogIndex::new();
    for t in ["E", "D", "C", "B", "A"] {
        index.insert(Record::new(t, "Anon"));
    }

    assert!(index.height() <= 3, "height {}", index.height());
}

#[test]
fn case_variant_title_is_a_duplicate() {
    let mut index = OrderedCatalogIndex::new();
    assert_eq!(index.insert(Record::new("apple", "A")), InsertOutcome::Inserted);
    assert_eq!(index.insert(Record::new("Apple", "B")), InsertOutcome::Duplicate);

    assert_eq!(index.len(), 1);
    assert_eq!(titles(&index.list_all()), vec!["apple"]);
}

#[test]
fn keyword_scan_finds_publisher() {
    let mut records = manga();
    records.push(Record::new("Akira", "Katsuhiro Otomo").publisher("Kodansha"));
    let index = index_of(records);

    let hits = index.scan("shueisha");
    assert_eq!(titles(&hits), vec!["Naruto", "One Piece"]);
}

#[test]
fn keyword_scan_covers_every_text_field() {
    let index = index_of(manga());

    let found = |kw: &str| {
        index
            .scan(kw)
            .into_iter()
            .map(|r| r.title.clone())
            .collect::<std::collections::BTreeSet<_>>()
    };

    assert_eq!(found("eiichiro"), btreeset! {"One Piece".to_string()});
    assert_eq!(found("FIRE"), btreeset! {"Fire Force".to_string()});
    assert_eq!(
        found("201"),
        btreeset! {"Fire Force".to_string(), "Slime".to_string()}
    );
    assert!(found("nonexistent").is_empty());
    assert_eq!(found("").len(), 5);
}

#[test]
fn grouped_scan_by_field() {
    let index = index_of(manga());

    let kodansha = index.scan_field(Field::Publisher, "Kodansha");
    assert_eq!(titles(&kodansha), vec!["Fire Force", "Slime"]);

    let by_year = index.scan_field(Field::Date, "1999");
    assert_eq!(titles(&by_year), vec!["Naruto"]);
}

#[test]
fn list_by_author_orders_by_author_then_title() {
    let index = index_of(manga());

    let authors: Vec<&str> = index
        .list_by_author()
        .into_iter()
        .map(|r| r.author.as_str())
        .collect();

    assert_eq!(
        authors,
        vec![
            "Atsushi Ohkubo",
            "Eiichiro Oda",
            "Fuse",
            "Kanehito Yamada",
            "Masashi Kishimoto"
        ]
    );
}

#[test]
fn catalog_surfaces_outcomes_as_errors() {
    let mut catalog = Catalog::new();
    for r in manga() {
        catalog.add_book(r).unwrap();
    }

    assert_eq!(
        catalog.add_book(Record::new("SLIME", "Someone")),
        Err(CatalogError::DuplicateTitle("SLIME".into()))
    );
    assert_eq!(
        catalog.remove_book("Berserk").unwrap_err(),
        CatalogError::NotFound("Berserk".into())
    );

    let removed = catalog.remove_book("slime").unwrap();
    assert_eq!(removed.author, "Fuse");
    assert_eq!(catalog.len(), 4);
    assert!(catalog.find_book("Slime").is_none());
    assert!(catalog.search("kodansha").len() == 1);
}
