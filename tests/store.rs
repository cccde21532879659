use setcal::construct::{RowGenerator, Set, SetKeeper, GENESIS};
use setcal::store::Store;
use setcal::validate::validate;

#[test]
fn capacity_grows_geometrically() {
    let mut store: Store<usize> = Store::new();
    assert_eq!(store.capacity(), 0);
    let mut growths = 0;
    let mut last_capacity = store.capacity();
    for i in 0..1000 {
        store.push(i).expect("push");
        assert!(store.capacity() >= store.len());
        if store.capacity() != last_capacity {
            assert!(store.capacity() >= 2 * last_capacity);
            growths += 1;
            last_capacity = store.capacity();
        }
    }
    assert_eq!(store.len(), 1000);
    // 4, 8, ..., 1024
    assert!(growths <= 9, "grew {growths} times");
    assert_eq!(store[999], 999);
}

#[test]
fn first_growth_reserves_a_minimum() {
    let mut store: Store<&str> = Store::new();
    store.push("a").expect("push");
    assert!(store.capacity() >= 4);
}

#[test]
fn sets_sort_their_elements() {
    let mut elements = Store::new();
    for token in ["delta", "alpha", "Charlie", "bravo"] {
        elements.push(validate(token, None, 1).expect("valid")).expect("push");
    }
    let set = Set::new(2, elements);
    let sorted: Vec<&str> = set.elements().iter().map(|e| e.as_str()).collect();
    assert_eq!(sorted, vec!["Charlie", "alpha", "bravo", "delta"]);
    assert!(set.contains("bravo"));
    assert!(!set.contains("echo"));
    assert_eq!(set.row(), 2);
}

#[test]
fn keepers_find_by_row() {
    let mut rows = RowGenerator::new();
    assert_eq!(rows.current(), GENESIS);
    let mut keeper = SetKeeper::new();
    for _ in 0..10 {
        let row = rows.generate();
        keeper.keep(Set::new(row, Store::new())).expect("keep");
    }
    assert_eq!(keeper.len(), 10);
    assert_eq!(keeper.find(1).map(Set::row), Some(1));
    assert_eq!(keeper.find(10).map(Set::row), Some(10));
    assert!(keeper.find(GENESIS).is_none());
    assert!(keeper.find(11).is_none());
}
