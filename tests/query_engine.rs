use chrono::NaiveDate;
use spendtrail_core::{
    currency::Amount,
    ledger::{EntryDraft, Kind, TaggedEntry},
    query::{self, DateRange, RECENT_LIMIT},
    store::LedgerStore,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn draft(cents: i64, category: &str, day: u32) -> EntryDraft {
    EntryDraft::new()
        .with_amount(Amount::from_cents(cents))
        .with_category(category)
        .with_date(date(day))
}

fn tags(entries: &[TaggedEntry<'_>]) -> Vec<(Kind, usize)> {
    entries.iter().map(|tag| (tag.kind, tag.position)).collect()
}

/// Salary 100 on day one, food 40 on day one, food 10 on day two.
fn seeded_store() -> LedgerStore {
    let mut store = LedgerStore::in_memory();
    store
        .append(Kind::Income, draft(10000, "Salary", 1))
        .expect("append salary");
    store
        .append(Kind::Expense, draft(4000, "Food", 1))
        .expect("append food");
    store
        .append(Kind::Expense, draft(1000, "Food", 2))
        .expect("append food again");
    store
}

#[test]
fn totals_for_the_seeded_month() {
    let store = seeded_store();
    let totals = query::totals(store.ledger());
    assert_eq!(totals.total_income, Amount::from_cents(10000));
    assert_eq!(totals.total_expense, Amount::from_cents(5000));
    assert_eq!(totals.balance, Amount::from_cents(5000));
}

#[test]
fn recent_leads_with_the_newest_day() {
    let store = seeded_store();
    let recent = query::recent(store.ledger(), RECENT_LIMIT);
    assert_eq!(
        tags(&recent),
        vec![(Kind::Expense, 1), (Kind::Income, 0), (Kind::Expense, 0)]
    );
}

#[test]
fn statement_narrows_to_the_requested_days() {
    let store = seeded_store();
    let range = DateRange::between(date(2), date(2));
    let lines = query::statement(store.ledger(), &range);
    assert_eq!(tags(&lines), vec![(Kind::Expense, 1)]);
    assert_eq!(lines[0].entry.amount, Amount::from_cents(1000));

    let everything = query::statement(store.ledger(), &DateRange::default());
    assert_eq!(everything.len(), store.ledger().count(Kind::Income) + store.ledger().count(Kind::Expense));
    assert_eq!(tags(&everything), tags(&query::recent(store.ledger(), usize::MAX)));
}

#[test]
fn append_then_remove_at_the_tail_is_identity() {
    let mut store = seeded_store();
    let before = store.ledger().clone();

    store
        .append(Kind::Expense, draft(250, "Chai", 3))
        .expect("append");
    let tail = store.ledger().count(Kind::Expense) - 1;
    store.remove_at(Kind::Expense, tail).expect("remove tail");

    assert_eq!(store.ledger(), &before);
}

#[test]
fn positions_reresolve_after_a_removal() {
    let mut store = seeded_store();
    store
        .append(Kind::Expense, draft(7500, "Books", 3))
        .expect("append books");

    // Books sits at position 2 until the head removal shifts it.
    assert_eq!(
        tags(&query::search(store.ledger(), Kind::Expense, "books")),
        vec![(Kind::Expense, 2)]
    );

    store.remove_at(Kind::Expense, 0).expect("remove head");
    assert_eq!(
        tags(&query::search(store.ledger(), Kind::Expense, "books")),
        vec![(Kind::Expense, 1)]
    );
}

#[test]
fn replace_updates_the_category_roll() {
    let mut store = seeded_store();
    assert_eq!(
        query::distinct_categories(store.ledger(), Kind::Expense),
        vec!["Food"]
    );

    store
        .replace_at(Kind::Expense, 1, draft(1000, "Transport", 2))
        .expect("replace");
    assert_eq!(
        query::distinct_categories(store.ledger(), Kind::Expense),
        vec!["Food", "Transport"]
    );
}

#[test]
fn daily_totals_through_the_store() {
    let store = seeded_store();
    let first = query::daily_totals(store.ledger(), date(1));
    assert_eq!(first.income, Amount::from_cents(10000));
    assert_eq!(first.expense, Amount::from_cents(4000));

    let second = query::daily_totals(store.ledger(), date(2));
    assert_eq!(second.income, Amount::ZERO);
    assert_eq!(second.expense, Amount::from_cents(1000));
}

#[test]
fn empty_needle_keeps_the_whole_view() {
    let store = seeded_store();
    let all = query::filter_text(store.ledger(), Kind::Expense, "");
    assert_eq!(all.len(), store.ledger().count(Kind::Expense));
    assert_eq!(tags(&all), tags(&query::of_kind(store.ledger(), Kind::Expense)));
}
