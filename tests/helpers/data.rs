use libris::common::record::Record;
use libris::index::OrderedCatalogIndex;

#[allow(dead_code)]
pub fn manga() -> Vec<Record> {
    vec![
        Record::new("One Piece", "Eiichiro Oda").publisher("Shueisha").year("1997"),
        Record::new("Naruto", "Masashi Kishimoto").publisher("Shueisha").year("1999"),
        Record::new("Fire Force", "Atsushi Ohkubo").publisher("Kodansha").year("2015"),
        Record::new("Slime", "Fuse").publisher("Kodansha").year("2014"),
        Record::new("Frieren", "Kanehito Yamada").publisher("Shogakukan").year("2020"),
    ]
}

#[allow(dead_code)]
pub fn index_of(records: Vec<Record>) -> OrderedCatalogIndex {
    let mut index = OrderedCatalogIndex::new();
    for r in records {
        index.insert(r);
    }
    index
}

#[allow(dead_code)]
pub fn titles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}
