use crate::common::record::{PublicationDate, Record};

const MANGA: [(&str, &str, &str, &str, &str); 7] = [
    ("One Piece", "Eiichiro Oda", "Shueisha", "1997", "9780000001"),
    ("Naruto", "Masashi Kishimoto", "Shueisha", "1999", "9780000002"),
    ("Dragon Ball", "Akira Toriyama", "Shueisha", "1984", "9780000003"),
    ("Fire Force", "Atsushi Ohkubo", "Kodansha", "2015", "9780000004"),
    ("Frieren", "Kanehito Yamada", "Shogakukan", "2020", "9780000005"),
    ("Slime", "Fuse", "Kodansha", "2014", "9780000006"),
    ("Bleach", "Tite Kubo", "Shueisha", "2001", "9780000007"),
];

/// Starter shelf loaded by `Catalog::with_sample_books`.
pub fn sample_books() -> Vec<Record> {
    let mut books: Vec<Record> = MANGA
        .iter()
        .map(|(title, author, publisher, year, isbn)| {
            Record::new(*title, *author)
                .publisher(*publisher)
                .year(*year)
                .isbn(*isbn)
                .category("Manga")
        })
        .collect();

    books.push(
        Record::new("The Logic and Design of Computer Programs", "Jim Messinger")
            .publisher("Pearson")
            .date(PublicationDate::parts("October", "15", "2004"))
            .isbn("9781576761304")
            .category("Computer Science")
            .call_number("QA 76.6 M47 2005"),
    );
    books.push(
        Record::new("C Interfaces and Implementations", "David R. Hanson")
            .publisher("Addison-Wesley Professional")
            .date(PublicationDate::parts("August", "20", "1996"))
            .isbn("9780201498417")
            .category("Computer Science")
            .call_number("QA 76.73 C15H37 1997"),
    );
    books.push(
        Record::new("Quantum Mechanics", "Eugen Merzbacher")
            .publisher("Wiley")
            .date(PublicationDate::parts("December", "1", "1997"))
            .isbn("9780471887027")
            .category("Physics")
            .call_number("QC 174.12 M47 1998"),
    );

    books
}
