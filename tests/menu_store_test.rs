use menu_kit::{Course, Field, IndexError, MenuDraft, MenuStore, ValidationError};

fn sample_store() -> MenuStore {
    let mut store = MenuStore::new();
    store
        .add(&MenuDraft::new("Steak", "Grilled", "Mains", "100"))
        .unwrap();
    store
        .add(&MenuDraft::new("Pasta", "Creamy", "Mains", "50"))
        .unwrap();
    store
        .add(&MenuDraft::new("Malva", "Warm pudding", "Desserts", "30"))
        .unwrap();
    store
}

/// 新增成功時長度加一，且新項目在最後
#[test]
fn test_valid_add_appends_one_item() {
    let mut store = sample_store();
    let drafts = [
        MenuDraft::new("Soup", "Hot", "Starters", "45.5"),
        MenuDraft::new("Free bread", "Daily", "starters", "0"),
        MenuDraft::new("Trifle", "Layered", "Desserts", " 12.25 "),
    ];

    for draft in &drafts {
        let before = store.len();
        let item = store.add(draft).unwrap();
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.items().last(), Some(&item));
    }
}

#[test]
fn test_soup_price_is_a_number() {
    let mut store = MenuStore::new();
    let item = store
        .add(&MenuDraft::new("Soup", "Hot", "Starters", "45.5"))
        .unwrap();

    assert_eq!(item.dish_name(), "Soup");
    assert_eq!(item.description(), "Hot");
    assert_eq!(item.course(), Course::Starters);
    assert_eq!(item.price(), 45.5);
}

#[test]
fn test_invalid_add_leaves_collection_unchanged() {
    let cases = [
        (
            MenuDraft::new("", "Hot", "Starters", "10"),
            ValidationError::MissingField(Field::DishName),
        ),
        (
            MenuDraft::new("Soup", "", "Starters", "10"),
            ValidationError::MissingField(Field::Description),
        ),
        (
            MenuDraft::new("Soup", "Hot", "Starters", ""),
            ValidationError::MissingField(Field::Price),
        ),
        (
            MenuDraft::new("Soup", "Hot", "Starters", "ten"),
            ValidationError::InvalidPrice("ten".to_string()),
        ),
        (
            MenuDraft::new("Soup", "Hot", "Starters", "-3"),
            ValidationError::InvalidPrice("-3".to_string()),
        ),
        (
            MenuDraft::new("Soup", "Hot", "Brunch", ""),
            ValidationError::MissingField(Field::Price),
        ),
        (
            MenuDraft::new("Soup", "Hot", "Brunch", "10"),
            ValidationError::InvalidCourse("Brunch".to_string()),
        ),
    ];

    let mut store = sample_store();
    let before = store.items().to_vec();
    let version = store.version();

    for (draft, expected) in cases {
        assert_eq!(store.add(&draft), Err(expected));
    }

    assert_eq!(store.items(), before.as_slice());
    assert_eq!(store.version(), version);
}

#[test]
fn test_remove_out_of_range() {
    let mut empty = MenuStore::new();
    assert_eq!(
        empty.remove_at(0),
        Err(IndexError::OutOfRange { index: 0, len: 0 })
    );
    assert!(empty.is_empty());

    let mut store = sample_store();
    let before = store.items().to_vec();
    assert_eq!(
        store.remove_at(3),
        Err(IndexError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_remove_first_shifts_remaining() {
    let mut store = sample_store();
    let removed = store.remove_at(0).unwrap();

    assert_eq!(removed.dish_name(), "Steak");
    let names: Vec<_> = store.items().iter().map(|i| i.dish_name()).collect();
    assert_eq!(names, vec!["Pasta", "Malva"]);
}

#[test]
fn test_average_price_by_course() {
    let averages = sample_store().average_price_by_course();

    assert_eq!(averages.len(), 2);
    assert_eq!(averages.courses(), vec![Course::Mains, Course::Desserts]);
    assert_eq!(averages.get(Course::Mains), Some(75.0));
    assert_eq!(averages.get(Course::Desserts), Some(30.0));
    assert_eq!(averages.get(Course::Starters), None);

    let json = serde_json::to_string(&averages).unwrap();
    assert_eq!(json, r#"{"Mains":75.0,"Desserts":30.0}"#);
}

#[test]
fn test_filter_by_course() {
    let store = sample_store();

    let desserts: Vec<_> = store.filter_by_course(Some(Course::Desserts)).collect();
    assert_eq!(desserts.len(), 1);
    assert_eq!(desserts[0].dish_name(), "Malva");

    let all: Vec<_> = store
        .filter_by_course(None)
        .map(|i| i.dish_name())
        .collect();
    assert_eq!(all, vec!["Steak", "Pasta", "Malva"]);

    assert_eq!(store.filter_by_course(Some(Course::Starters)).count(), 0);
}

#[test]
fn test_derived_views_are_idempotent() {
    let store = sample_store();

    let first: Vec<_> = store.filter_by_course(Some(Course::Mains)).cloned().collect();
    let second: Vec<_> = store.filter_by_course(Some(Course::Mains)).cloned().collect();
    assert_eq!(first, second);

    assert_eq!(
        store.average_price_by_course(),
        store.average_price_by_course()
    );
    assert_eq!(store.len(), 3);
}

#[test]
fn test_views_follow_mutations() {
    let mut store = sample_store();
    store.remove_at(2).unwrap();

    assert_eq!(store.filter_by_course(Some(Course::Desserts)).count(), 0);
    assert_eq!(store.average_price_by_course().courses(), vec![Course::Mains]);
}

#[test]
fn test_duplicates_are_allowed() {
    let mut store = MenuStore::new();
    let draft = MenuDraft::new("Soup", "Hot", "Starters", "20");
    store.add(&draft).unwrap();
    store.add(&draft).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0], store.items()[1]);
    assert_eq!(store.average_price_by_course().get(Course::Starters), Some(20.0));
}
