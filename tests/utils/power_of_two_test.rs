/*!
 * Power-of-Two Tests
 */

use bubbles::core::bits::*;
use proptest::prelude::*;

#[test]
fn test_reference_values() {
    assert!(!is_power_of_two(0));
    assert!(is_power_of_two(1));
    assert_eq!(next_power_of_two(3), 4);
    assert_eq!(next_power_of_two(1), 1);
}

#[test]
fn test_every_width() {
    assert_eq!(next_power_of_two(5i8), 8);
    assert_eq!(next_power_of_two(300i16), 512);
    assert_eq!(next_power_of_two(70_000u32), 131_072);
    assert_eq!(next_power_of_two((1u64 << 40) + 1), 1u64 << 41);
    assert_eq!(next_power_of_two(3u128), 4);
    assert!(is_power_of_two(1isize << 20));
}

#[test]
fn test_largest_power_is_fixed_point() {
    assert_eq!(next_power_of_two(1u8 << 7), 128);
    assert_eq!(next_power_of_two(1i32 << 30), 1 << 30);
    assert_eq!(checked_next_power_of_two((1i32 << 30) + 1), None);
}

proptest! {
    #[test]
    fn prop_next_power_is_smallest_upper_bound(x in 1u32..=(1 << 31)) {
        let p = next_power_of_two(x);
        prop_assert!(is_power_of_two(p));
        prop_assert!(p >= x);
        prop_assert!(p / 2 < x);
    }

    #[test]
    fn prop_signed_matches_unsigned(x in 0i64..(1 << 62)) {
        prop_assert_eq!(next_power_of_two(x) as u64, next_power_of_two(x as u64));
        prop_assert_eq!(is_power_of_two(x), is_power_of_two(x as u64));
    }
}
