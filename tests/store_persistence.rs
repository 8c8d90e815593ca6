use chrono::NaiveDate;
use spendtrail_core::{
    currency::Amount,
    errors::LedgerError,
    ledger::{EntryDraft, Kind},
    storage::{JsonStore, MemoryStore},
    store::LedgerStore,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn draft(cents: i64, category: &str, day: u32) -> EntryDraft {
    EntryDraft::new()
        .with_amount(Amount::from_cents(cents))
        .with_category(category)
        .with_date(date(day))
}

fn open_at(path: &Path) -> LedgerStore {
    LedgerStore::open(Box::new(JsonStore::new(path))).expect("open store")
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn mutations_survive_a_reopen() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut store = open_at(&path);
    store
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("append income");
    store
        .append(Kind::Expense, draft(4000, "Food", 1).with_note("groceries"))
        .expect("append expense");
    drop(store);

    let reopened = open_at(&path);
    assert_eq!(reopened.ledger().count(Kind::Income), 1);
    assert_eq!(reopened.ledger().count(Kind::Expense), 1);
    let expense = &reopened.ledger().entries(Kind::Expense)[0];
    assert_eq!(expense.amount, Amount::from_cents(4000));
    assert_eq!(expense.note.as_deref(), Some("groceries"));
}

#[test]
fn persisted_record_is_the_two_sequence_shape() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut store = open_at(&path);
    store
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("append");

    let raw = fs::read_to_string(&path).expect("read record");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse record");
    assert_eq!(value["income"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["expenses"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["income"][0]["amount"], "100.00");
    assert_eq!(value["income"][0]["date"], "2024-01-01");
    assert!(value["income"][0].get("note").is_none());
}

#[test]
fn corrupt_record_falls_back_to_empty_and_the_next_save_recovers() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");
    fs::write(&path, "][ definitely broken").expect("plant corrupt record");

    let mut store = open_at(&path);
    assert!(
        store.ledger().is_empty(),
        "unreadable state must load as the empty ledger"
    );

    store
        .append(Kind::Expense, draft(500, "Chai", 2))
        .expect("append after fallback");
    let raw = fs::read_to_string(&path).expect("read record");
    let recovered: serde_json::Value = serde_json::from_str(&raw).expect("record is valid again");
    assert_eq!(recovered["expenses"].as_array().map(Vec::len), Some(1));
}

#[test]
fn atomic_save_failure_preserves_file_and_snapshot() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut store = open_at(&path);
    store
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // A directory colliding with the staging file name forces File::create to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    let result = store.append(Kind::Expense, draft(4000, "Food", 2));
    assert!(
        matches!(result, Err(LedgerError::Storage(_))),
        "expected the blocked staging path to surface as a storage error"
    );
    assert_eq!(
        fs::read_to_string(&path).expect("read after failure"),
        original,
        "a failed save must not touch the previous record"
    );
    assert_eq!(
        store.ledger().count(Kind::Expense),
        0,
        "a failed save must not commit to the in-memory snapshot"
    );

    fs::remove_dir_all(&tmp_path).unwrap();
    store
        .append(Kind::Expense, draft(4000, "Food", 2))
        .expect("append succeeds once the staging path is free");
    assert_eq!(store.ledger().count(Kind::Expense), 1);
}

#[test]
fn out_of_range_replace_keeps_the_record_byte_identical() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut store = open_at(&path);
    store
        .append(Kind::Expense, draft(4000, "Food", 1))
        .expect("append");
    let before = fs::read_to_string(&path).expect("read record");

    let err = store
        .replace_at(Kind::Expense, 5, draft(1, "Ghost", 1))
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::OutOfRange {
            kind: Kind::Expense,
            position: 5,
            len: 1
        }
    );
    let err = store
        .replace_at(Kind::Income, 0, draft(1, "Ghost", 1))
        .unwrap_err();
    assert!(matches!(err, LedgerError::OutOfRange { .. }));

    assert_eq!(
        fs::read_to_string(&path).expect("read record again"),
        before,
        "a stale address must leave the record byte for byte identical"
    );
}

#[test]
fn clear_deletes_the_record() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut store = open_at(&path);
    store
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("append");
    assert!(path.exists());

    store.clear().expect("clear");
    assert!(!path.exists(), "clear should remove the persisted record");
    assert!(store.ledger().is_empty());

    let reopened = open_at(&path);
    assert!(reopened.ledger().is_empty());
}

#[test]
fn last_full_save_wins_across_independent_stores() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ledger.json");

    let mut first = open_at(&path);
    let mut second = open_at(&path);

    first
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("first writer");
    second
        .append(Kind::Expense, draft(4000, "Food", 1))
        .expect("second writer");

    first.reload().expect("reload");
    assert_eq!(first.ledger().count(Kind::Income), 0);
    assert_eq!(first.ledger().count(Kind::Expense), 1);
}

#[test]
fn memory_backend_loads_number_amounts_from_legacy_payloads() {
    let payload = r#"{
        "income": [ { "amount": 100, "category": "Salary", "date": "2024-01-01" } ],
        "expenses": [ { "amount": 40.5, "category": "Food", "date": "2024-01-01", "note": "lunch" } ]
    }"#;
    let store =
        LedgerStore::open(Box::new(MemoryStore::with_payload(payload))).expect("open store");
    assert_eq!(
        store.ledger().entries(Kind::Income)[0].amount,
        Amount::from_cents(10000)
    );
    let expense = &store.ledger().entries(Kind::Expense)[0];
    assert_eq!(expense.amount, Amount::from_cents(4050));
    assert_eq!(expense.note.as_deref(), Some("lunch"));
}
