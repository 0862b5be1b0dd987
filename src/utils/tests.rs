use crate::utils::{
    Multiset, UtilsError, validate_max_results, validate_numbers, validate_target,
};

#[test]
fn test_validate_numbers_valid() {
    assert!(validate_numbers(&[1]).is_ok());
    assert!(validate_numbers(&[25, 50, 75, 100, 3, 6]).is_ok());
    assert!(validate_numbers(&[5, 5]).is_ok());
}

#[test]
fn test_validate_numbers_invalid() {
    assert_eq!(validate_numbers(&[]), Err(UtilsError::EmptyNumberList));
    assert_eq!(
        validate_numbers(&[3, 0, 7]),
        Err(UtilsError::NonPositiveNumber(0))
    );
    assert_eq!(
        validate_numbers(&[3, -2]),
        Err(UtilsError::NonPositiveNumber(-2))
    );
}

#[test]
fn test_validate_target_and_max_results() {
    assert!(validate_target(952).is_ok());
    assert_eq!(validate_target(0), Err(UtilsError::NonPositiveTarget(0)));
    assert!(validate_max_results(30).is_ok());
    assert_eq!(validate_max_results(0), Err(UtilsError::ZeroMaxResults));
}

#[test]
fn test_multiset_counts() {
    let set: Multiset<i64> = [5, 5, 7].into_iter().collect();
    assert_eq!(set.count(&5), 2);
    assert_eq!(set.count(&7), 1);
    assert_eq!(set.count(&9), 0);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
    assert!(Multiset::<i64>::from_iter(Vec::new()).is_empty());
}

#[test]
fn test_multiset_contains() {
    let letters: Multiset<char> = "RADAR".chars().collect();
    assert!(letters.contains(&"RAD".chars().collect()));
    assert!(letters.contains(&"RADAR".chars().collect()));
    assert!(!letters.contains(&"RADARR".chars().collect()));
    assert!(!letters.contains(&"X".chars().collect()));
}

#[test]
fn test_multiset_admits_sorted() {
    let numbers: Multiset<i64> = [1, 1, 2, 3].into_iter().collect();
    assert!(numbers.admits_sorted(&[1, 3], &[1, 2]));
    assert!(numbers.admits_sorted(&[1], &[1]));
    assert!(numbers.admits_sorted(&[], &[2]));
    assert!(!numbers.admits_sorted(&[1, 1], &[1]));
    assert!(!numbers.admits_sorted(&[2], &[2]));
    assert!(!numbers.admits_sorted(&[4], &[]));
}
