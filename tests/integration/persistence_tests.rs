//! Save/load through the JSON file

use bibliotheca::{
    models::{Item, LibraryState, LoanRecord, Patron},
    repository::{JsonFileStorage, LibraryStorage},
    AppError, DataOrigin, Library,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;

use crate::temp_library;

#[test]
fn test_round_trip_through_library() {
    let (dir, mut library) = temp_library();
    library.add_item("Dune", "Herbert", "1965").unwrap();
    library.add_item("Solaris", "Lem", "1961").unwrap();
    library.add_item("Eden", "Lem", "1959").unwrap();
    library.add_patron("Ana", "Nowak").unwrap();
    library.add_patron("Jan", "Kowalski").unwrap();

    library.checkout("2", "1").unwrap();
    library.checkin("2", "1").unwrap();
    library.checkout("1", "2").unwrap();
    library.checkout("3", "2").unwrap();
    library.save_all().unwrap();

    let reopened =
        Library::open(JsonFileStorage::new(dir.path().join("test_data.json"))).unwrap();
    assert_eq!(reopened.origin(), DataOrigin::Storage);
    assert_eq!(reopened.snapshot(), library.snapshot());
    assert_eq!(reopened.list_patrons()[1].active_loans, vec![1, 3]);
}

#[test]
fn test_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("data.json"));

    let due = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let loan_day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut lent = Item::new(1, "Dune".into(), "Herbert".into(), 1965);
    lent.on_loan = true;
    lent.due_date = Some(due);

    let state = LibraryState {
        items: vec![lent, Item::new(2, "Zażółć".into(), "Gęślą Jaźń".into(), 2001)],
        patrons: vec![Patron {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Nowak".into(),
            active_loans: vec![1],
        }],
        history: vec![
            LoanRecord {
                patron_name: "Ana Nowak".into(),
                item_title: "Zażółć".into(),
                date: loan_day,
            },
            LoanRecord {
                patron_name: "Ana Nowak".into(),
                item_title: "Dune".into(),
                date: loan_day,
            },
        ],
    };

    storage.save(&state).unwrap();
    assert_eq!(storage.load().unwrap(), Some(state.clone()));

    // Saving again over an existing file replaces it entirely
    let empty = LibraryState::default();
    storage.save(&empty).unwrap();
    assert_eq!(storage.load().unwrap(), Some(empty));
}

#[test]
fn test_corrupt_file_halts_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let result = Library::open(JsonFileStorage::new(&path));
    assert!(matches!(result, Err(AppError::CorruptData(_))));
}

#[test]
fn test_highest_possible_id_halts_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
    "ksiazki": [
        {"tytul": "Lalka", "autor": "Prus", "rok_wydania": 1890, "id_ksiazki": 4294967295,
         "wypozyczona": false, "data_zwrotu": null}
    ],
    "uzytkownicy": [],
    "historia": []
}"#,
    )
    .unwrap();

    let result = Library::open(JsonFileStorage::new(&path));
    assert!(matches!(result, Err(AppError::CorruptData(_))));
}

#[test]
fn test_legacy_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_data.json");
    fs::write(
        &path,
        r#"{
    "ksiazki": [
        {"tytul": "Lalka", "autor": "Prus", "rok_wydania": 1890, "id_ksiazki": 1,
         "wypozyczona": true, "data_zwrotu": "2024-05-20"},
        {"tytul": "Potop", "autor": "Sienkiewicz", "rok_wydania": 1886, "id_ksiazki": 2,
         "wypozyczona": false, "data_zwrotu": null}
    ],
    "uzytkownicy": [
        {"imie": "Ana", "nazwisko": "Nowak", "id_uzytkownika": 1,
         "wypozyczone_ksiazki": [
            {"tytul": "Lalka", "autor": "Prus", "rok_wydania": 1890, "id_ksiazki": 1,
             "wypozyczona": true, "data_zwrotu": "2024-05-20"}
         ]}
    ],
    "historia": [
        {"uzytkownik": "Ana Nowak", "ksiazka": "Lalka", "data": "2024-05-06"}
    ]
}"#,
    )
    .unwrap();

    let mut library = Library::open(JsonFileStorage::new(&path)).unwrap();
    assert_eq!(library.list_items().len(), 2);
    assert_eq!(library.list_patrons()[0].active_loans, vec![1]);
    assert_eq!(
        library.history()[0].date,
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    );

    // The returned book updates the single catalog entry
    let returned = library.checkin("1", "1").unwrap();
    assert!(!returned.on_loan);
    assert!(!library.get_item(1).unwrap().on_loan);
    assert_eq!(library.history().len(), 1);
}
