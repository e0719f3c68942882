/*!
 * Named Value Tests
 */

use bubbles::core::named::NamedValue;
use std::collections::{BTreeSet, HashSet};

struct UserIdTag;
struct OrderIdTag;

type UserId = NamedValue<u64, UserIdTag>;
type OrderId = NamedValue<u64, OrderIdTag>;

fn lookup_order(user: UserId, order: OrderId) -> (u64, u64) {
    (*user.get(), order.into_inner())
}

#[test]
fn test_distinct_tags_keep_arguments_apart() {
    assert_eq!(lookup_order(UserId::new(7), OrderId::new(99)), (7, 99));
}

#[test]
fn test_usable_as_set_keys() {
    let ordered: BTreeSet<UserId> = [5, 1, 3, 1].into_iter().map(UserId::new).collect();
    assert_eq!(ordered.len(), 3);
    assert_eq!(ordered.iter().next(), Some(&UserId::new(1)));

    let hashed: HashSet<UserId> = [2, 2, 4].into_iter().map(UserId::new).collect();
    assert!(hashed.contains(&UserId::new(4)));
    assert_eq!(hashed.len(), 2);
}

#[test]
fn test_serializes_as_bare_value() {
    let id = UserId::new(42);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "42");

    let back: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
