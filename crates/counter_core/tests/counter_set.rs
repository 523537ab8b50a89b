use counter_core::CounterTypeSet;
use pretty_assertions::assert_eq;

#[test]
fn sorted_is_case_insensitive() {
    let set: CounterTypeSet = ["Shield", "age"].into_iter().collect();
    assert_eq!(set.sorted(), vec!["age", "Shield"]);
}

#[test]
fn sorted_breaks_case_ties_deterministically() {
    let set: CounterTypeSet = ["shield", "Shield", "+1/+1", "Age"].into_iter().collect();
    assert_eq!(set.sorted(), vec!["+1/+1", "Age", "Shield", "shield"]);
}

#[test]
fn uniqueness_is_case_sensitive() {
    let mut set = CounterTypeSet::new();
    assert!(set.insert("ice"));
    assert!(!set.insert("ice"));
    assert!(set.insert("Ice"));
    assert_eq!(set.len(), 2);
}

#[test]
fn merge_is_commutative() {
    let left: CounterTypeSet = ["age", "ice"].into_iter().collect();
    let right: CounterTypeSet = ["ice", "poison", "time"].into_iter().collect();

    assert_eq!(
        left.clone().union(right.clone()),
        right.union(left)
    );
}
