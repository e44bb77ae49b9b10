#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::common::record::{PublicationDate, RecordUpdate};
    use crate::error::CatalogError;
    use crate::shell::command::parse_date;
    use crate::shell::{Command, Reply, execute, parse};

    fn run(catalog: &mut Catalog, line: &str) -> Result<Reply, CatalogError> {
        execute(catalog, parse(line)?)
    }

    fn reply_titles(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Records(records) => records.into_iter().map(|r| r.title).collect(),
            other => panic!("expected records, got {:?}", other),
        }
    }

    #[test]
    fn parse_add_with_call_number() {
        let cmd = parse(
            "add Naruto | Masashi Kishimoto | Shueisha | September 21, 1999 | 9780000002 | Manga | QA76.73.C16",
        )
        .unwrap();

        let Command::Add(record) = cmd else {
            panic!("expected add, got {:?}", cmd);
        };
        assert_eq!(record.title, "Naruto");
        assert_eq!(record.date, PublicationDate::parts("September", "21", "1999"));
        assert_eq!(record.call_number.as_deref(), Some("QA76.73.C16"));
    }

    #[test]
    fn parse_add_needs_six_fields() {
        assert!(matches!(
            parse("add Naruto | Kishimoto"),
            Err(CatalogError::InvalidCommand(_))
        ));
    }

    #[test]
    fn parse_set_builds_update() {
        assert_eq!(
            parse("set Bleach | publisher | VIZ Media").unwrap(),
            Command::Set {
                title: "Bleach".into(),
                update: RecordUpdate {
                    publisher: Some("VIZ Media".into()),
                    ..Default::default()
                },
            }
        );
        assert!(parse("set Bleach | title | Other").is_err());
        assert!(parse("set Bleach | colour | red").is_err());
    }

    #[test]
    fn parse_misc_commands() {
        assert_eq!(parse("  LIST ").unwrap(), Command::List);
        assert_eq!(parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(
            parse("group publisher Kodansha").unwrap(),
            Command::Group {
                field: "publisher".into(),
                value: "Kodansha".into()
            }
        );
        assert!(parse("find").is_err());
        assert!(parse("frobnicate").is_err());
    }

    #[test]
    fn dates_fall_back_to_text() {
        assert_eq!(parse_date("July 22 1997"), PublicationDate::parts("July", "22", "1997"));
        assert_eq!(parse_date("1997"), PublicationDate::Text("1997".into()));
        assert_eq!(
            parse_date("Spring of 97"),
            PublicationDate::Text("Spring of 97".into())
        );
    }

    #[test]
    fn session_round_trip() {
        let mut catalog = Catalog::new();

        run(
            &mut catalog,
            "add One Piece | Eiichiro Oda | Shueisha | 1997 | 9780000001 | Manga",
        )
        .unwrap();
        run(
            &mut catalog,
            "add Naruto | Masashi Kishimoto | Shueisha | 1999 | 9780000002 | Manga",
        )
        .unwrap();

        let err = run(&mut catalog, "add naruto | x | y | z | w | v").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTitle("naruto".into()));

        assert_eq!(
            reply_titles(run(&mut catalog, "list").unwrap()),
            vec!["Naruto", "One Piece"]
        );
        assert_eq!(
            reply_titles(run(&mut catalog, "authors").unwrap()),
            vec!["One Piece", "Naruto"]
        );

        assert_eq!(
            run(&mut catalog, "toggle one piece").unwrap(),
            Reply::Message("'one piece' is now checked out".into())
        );

        run(&mut catalog, "remove Naruto").unwrap();
        assert!(matches!(
            run(&mut catalog, "find Naruto"),
            Err(CatalogError::NotFound(_))
        ));
        assert_eq!(run(&mut catalog, "quit").unwrap(), Reply::Quit);
    }
}
