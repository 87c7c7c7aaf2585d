use hash_bag::{Bag, BagConfig, BagError, HashTable, Hashable};

#[test]
fn honda_scenario_with_five_buckets() {
    let mut cars: Bag<String> = Bag::with_buckets(5).expect("non-zero bucket count");
    cars.insert("Honda Pilot".to_string());
    cars.insert("Honda Fit".to_string());
    cars.insert("Honda Pilot".to_string());

    assert_eq!(cars.num_buckets(), 5);
    assert_eq!(cars.count(&"Honda Pilot".to_string()), 2);
    assert_eq!(cars.count(&"Honda Fit".to_string()), 1);
    assert_eq!(cars.count(&"Yugo".to_string()), 0);
    assert_eq!(cars.len(), 3);

    let mut all = cars.to_vec();
    all.sort();
    assert_eq!(all, vec!["Honda Fit", "Honda Pilot", "Honda Pilot"]);
}

#[test]
fn empty_bag_scenario() {
    let mut bag: Bag<String> = Bag::new();
    let anything = "anything".to_string();
    assert_eq!(bag.len(), 0);
    assert_eq!(bag.to_vec(), Vec::<String>::new());
    assert!(!bag.contains(&anything));
    assert!(!bag.delete(&anything));
    assert_eq!(bag.num_buckets(), 100);
}

#[test]
fn zero_buckets_fail_fast() {
    match Bag::<String>::with_buckets(0) {
        Err(BagError::ZeroBuckets) => {}
        Ok(_) => panic!("expected zero buckets to be rejected"),
    }
    assert!(BagConfig::with_buckets(0).is_err());
}

#[test]
fn delete_one_then_all() {
    let mut bag = Bag::new();
    let v = "Hello";
    bag.insert(v);
    bag.insert(v);

    assert!(bag.delete(&v));
    assert_eq!(bag.count(&v), 1);
    assert!(bag.contains(&v));

    assert!(bag.delete(&v));
    assert!(!bag.contains(&v));
    assert!(!bag.delete(&v));
}

#[test]
fn delete_all_shrinks_len_by_full_count() {
    let mut bag: Bag<u32> = Bag::with_config(BagConfig::default());
    bag.extend([4, 4, 4, 4, 9]);
    let before = bag.len();

    assert!(bag.delete_all(&4));
    assert_eq!(bag.len(), before - 4);
    assert_eq!(bag.count(&4), 0);
    assert!(!bag.contains(&4));
    assert_eq!(bag.count(&9), 1);
}

/// A caller-supplied hash whose maximum value must land in the last bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Percent(u8);

impl Hashable for Percent {
    const MIN_HASH: i64 = 0;
    const MAX_HASH: i64 = 100;

    fn hash_code(&self) -> i64 {
        i64::from(self.0)
    }
}

#[test]
fn custom_hashable_reaches_the_boundary_bucket() {
    let mut bag = Bag::with_buckets(10).unwrap();
    bag.insert(Percent(100));
    bag.insert(Percent(0));
    bag.insert(Percent(100));

    let table: &HashTable<Percent> = bag.table();
    assert_eq!(table.bucket_index(&Percent(100)), 9);
    assert_eq!(table.bucket_index(&Percent(0)), 0);
    assert_eq!(table.bucket(&Percent(100)).count(&Percent(100)), 2);

    // Buckets are visited in index order, so the low value comes first.
    assert_eq!(bag.to_vec(), vec![Percent(0), Percent(100), Percent(100)]);
}

#[test]
fn collect_and_iterate_by_reference() {
    let bag: Bag<char> = "mississippi".chars().collect();
    assert_eq!(bag.len(), 11);
    assert_eq!(bag.distinct_len(), 4);
    assert_eq!(bag.count(&'s'), 4);
    assert_eq!(bag.count(&'i'), 4);
    assert_eq!(bag.count(&'p'), 2);

    let mut seen = 0;
    for c in &bag {
        assert!("misp".contains(*c));
        seen += 1;
    }
    assert_eq!(seen, bag.len());
}
