//! Catalog, roster and lending workflows through the facade

use bibliotheca::{models::SearchField, AppError, DataOrigin};
use chrono::{Duration, Local};
use proptest::prelude::*;

use crate::temp_library;

#[test]
fn test_dune_scenario() {
    let (_dir, mut library) = temp_library();
    assert_eq!(library.origin(), DataOrigin::Fresh);

    assert_eq!(library.add_item("Dune", "Herbert", "1965").unwrap().id, 1);
    assert_eq!(library.add_patron("Ana", "Nowak").unwrap().id, 1);

    let today = Local::now().date_naive();
    let receipt = library.checkout("1", "1").unwrap();
    let item = library.get_item(1).unwrap();
    assert!(item.on_loan);
    assert_eq!(item.due_date, Some(receipt.due_date));
    assert_eq!(receipt.due_date - today, Duration::days(14));
    assert_eq!(library.history().len(), 1);
    assert_eq!(library.history()[0].patron_name, "Ana Nowak");
    assert_eq!(library.history()[0].item_title, "Dune");

    let returned = library.checkin("1", "1").unwrap();
    assert!(!returned.on_loan);
    assert!(returned.due_date.is_none());
    let item = library.get_item(1).unwrap();
    assert!(!item.on_loan);
    assert!(item.due_date.is_none());
    assert!(library.list_patrons()[0].active_loans.is_empty());
    assert_eq!(library.history().len(), 1);
    assert_eq!(library.list_items().len(), 1);
}

#[test]
fn test_empty_catalog_lists_nothing() {
    let (_dir, library) = temp_library();
    assert!(library.list_items().is_empty());
    assert!(library.find_items(SearchField::Title, "Dune").is_empty());
}

#[test]
fn test_remove_unknown_item() {
    let (_dir, mut library) = temp_library();
    library.add_item("Dune", "Herbert", "1965").unwrap();
    assert!(matches!(library.remove_item(2), Err(AppError::NotFound(_))));
    assert_eq!(library.list_items().len(), 1);
}

#[test]
fn test_double_checkout_by_any_patron() {
    let (_dir, mut library) = temp_library();
    library.add_item("Dune", "Herbert", "1965").unwrap();
    library.add_patron("Ana", "Nowak").unwrap();
    library.add_patron("Jan", "Kowalski").unwrap();

    library.checkout("1", "1").unwrap();
    assert!(matches!(library.checkout("1", "1"), Err(AppError::Conflict(_))));
    assert!(matches!(library.checkout("1", "2"), Err(AppError::Conflict(_))));
    assert_eq!(library.history().len(), 1);
}

#[test]
fn test_return_must_come_from_borrower() {
    let (_dir, mut library) = temp_library();
    library.add_item("Dune", "Herbert", "1965").unwrap();
    library.add_patron("Ana", "Nowak").unwrap();
    library.add_patron("Jan", "Kowalski").unwrap();
    library.checkout("1", "1").unwrap();

    assert!(matches!(library.checkin("1", "2"), Err(AppError::NotFound(_))));
    assert!(library.get_item(1).unwrap().on_loan);

    library.checkin("1", "1").unwrap();
    // Free again, so the other patron may borrow it
    library.checkout("1", "2").unwrap();
    assert_eq!(library.history().len(), 2);
}

#[test]
fn test_item_on_loan_cannot_be_removed() {
    let (_dir, mut library) = temp_library();
    library.add_item("Dune", "Herbert", "1965").unwrap();
    library.add_patron("Ana", "Nowak").unwrap();
    library.checkout("1", "1").unwrap();

    assert!(matches!(library.remove_item(1), Err(AppError::Conflict(_))));
    library.checkin("1", "1").unwrap();
    assert_eq!(library.remove_item(1).unwrap().title, "Dune");
}

proptest! {
    #[test]
    fn prop_added_item_is_found_by_title(
        title in "[A-Za-z][A-Za-z ]{0,30}",
        author in "[A-Za-z ]{0,30}",
        year in -3000i32..3000,
    ) {
        let (_dir, mut library) = temp_library();
        let id = library.add_item(&title, &author, &year.to_string()).unwrap().id;

        let found = library.find_items(SearchField::Title, &title);
        prop_assert_eq!(found.len(), 1);
        prop_assert_eq!(found[0].id, id);
        prop_assert_eq!(&found[0].author, &author);
        prop_assert_eq!(found[0].publication_year, year);
    }
}
