use dedupdb::{
    core::store::{RecordStore, StoreError},
    record::{Record, RecordDraft},
};

fn store() -> RecordStore {
    RecordStore::open_in_memory().expect("open store")
}

fn alice() -> RecordDraft {
    RecordDraft::new("Alice", "a@x.com", "111", Some("Addr1"))
}

#[test]
fn insert_into_empty_store_is_listed_back() {
    let mut store = store();
    assert!(store.list_all().expect("list").is_empty());

    let id = store.insert(alice()).expect("insert");

    assert_eq!(store.count().expect("count"), 1);
    assert_eq!(
        store.list_all().expect("list"),
        vec![Record {
            id,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "111".to_string(),
            address: Some("Addr1".to_string()),
        }]
    );
}

#[test]
fn shared_email_is_rejected_without_mutation() {
    let mut store = store();
    let first = store.insert(alice()).expect("insert");

    let err = store
        .insert(RecordDraft::new("Bob", "a@x.com", "222", Some("Addr2")))
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { existing_id: Some(id) } if id == first));
    assert_eq!(store.count().expect("count"), 1);
    assert_eq!(store.list_all().expect("list")[0].name, "Alice");
}

#[test]
fn shared_phone_is_rejected() {
    let mut store = store();
    store.insert(alice()).expect("insert");

    let err = store
        .insert(RecordDraft::new("Carol", "c@z.com", "111", None))
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { .. }));
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn ids_are_monotonic_and_listing_is_id_ordered() {
    let mut store = store();
    let a = store.insert(alice()).expect("a");
    let b = store
        .insert(RecordDraft::new("Bob", "b@y.com", "222", None))
        .expect("b");
    let c = store
        .insert(RecordDraft::new("Carol", "c@z.com", "333", None))
        .expect("c");

    assert_eq!((a, b, c), (1, 2, 3));
    let ids: Vec<_> = store.list_all().expect("list").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn search_matches_any_field_by_substring() {
    let mut store = store();
    store
        .insert(RecordDraft::new("Alice", "a@x.com", "111", Some("NYC")))
        .expect("alice");
    store
        .insert(RecordDraft::new("Bob", "b@y.com", "222", Some("LA")))
        .expect("bob");

    let hits = store.search("a@x").expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Alice");

    assert!(store.search("999").expect("search").is_empty());
    assert_eq!(store.search("").expect("search").len(), 2);

    let by_address = store.search("LA").expect("search");
    assert_eq!(by_address.len(), 1);
    assert_eq!(by_address[0].name, "Bob");

    let by_phone = store.search("22").expect("search");
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].phone, "222");
}

#[test]
fn search_ignores_ascii_case() {
    let mut store = store();
    store.insert(alice()).expect("insert");

    assert_eq!(store.search("ALICE").expect("search").len(), 1);
    assert_eq!(store.search("addr").expect("search").len(), 1);
}

#[test]
fn search_treats_wildcards_literally() {
    let mut store = store();
    store
        .insert(RecordDraft::new("Alice", "a@x.com", "111", Some("NYC")))
        .expect("alice");
    store
        .insert(RecordDraft::new("Under_score", "u@x.com", "555", Some("100% Main")))
        .expect("under");

    let underscore = store.search("_").expect("search");
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name, "Under_score");

    let percent = store.search("%").expect("search");
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "Under_score");
}

#[test]
fn fields_round_trip_byte_for_byte() {
    let mut store = store();
    let draft = RecordDraft::new(
        "  Zoë O'Brien ",
        "zoë+tag@exämple.org",
        "+1 (555) 010-9999",
        Some("12 Rue de l'Église\tApt 3"),
    );
    let id = store.insert(draft.clone()).expect("insert");

    let listed = store.list_all().expect("list");
    let found = store.search("Brien").expect("search");
    for rec in [&listed[0], &found[0]] {
        assert_eq!(rec.id, id);
        assert_eq!(rec.name, draft.name);
        assert_eq!(rec.email, draft.email);
        assert_eq!(rec.phone, draft.phone);
        assert_eq!(rec.address, draft.address);
    }
}

#[test]
fn missing_address_reads_back_as_none() {
    let mut store = store();
    store
        .insert(RecordDraft::new("Bob", "b@y.com", "222", None))
        .expect("insert");

    assert_eq!(store.list_all().expect("list")[0].address, None);
    assert_eq!(store.search("Bob").expect("search").len(), 1);
}

#[test]
fn delete_duplicates_on_clean_store_removes_nothing() {
    let mut store = store();
    store.insert(alice()).expect("insert");

    assert!(store.duplicate_groups().expect("groups").is_empty());
    assert_eq!(store.delete_duplicates().expect("dedup"), 0);
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn very_long_keyword_finds_nothing_without_error() {
    let mut store = store();
    store.insert(alice()).expect("insert");

    let hits = store.search(&"z".repeat(60_000)).expect("search");
    assert_eq!(hits, vec![]);
}

#[test]
fn very_long_field_is_found_by_long_keyword() {
    let mut store = store();
    let long_address = "Q".repeat(60_000);
    store
        .insert(RecordDraft::new("Alice", "a@x.com", "111", Some(&long_address)))
        .expect("insert");

    let hits = store.search(&"q".repeat(55_000)).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].address.as_deref(), Some(long_address.as_str()));
}
