//! Property tests for the array problems
//!
//! These tests use proptest to check each algorithm against a brute-force
//! or sort-based reference on random inputs, plus the algebraic laws:
//! - Idempotence: merge_intervals(merge_intervals(x)) == merge_intervals(x)
//! - Round-trip: rotating by k then by -k restores the input

use dsa_arrays::{
    Interval, can_partition, find_duplicate, find_kth_largest, find_missing_number, length_of_lis,
    max_subarray_sum, merge_intervals, move_zeros_to_end, product_except_self, rotate_array,
    subarray_sum, two_sum,
};
use proptest::prelude::*;

fn small_nums() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..30)
}

fn intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((-50i64..50, 0i64..20), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(start, len)| Interval::new(start, start + len).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn two_sum_returns_a_valid_pair(nums in small_nums(), target in -40i64..40) {
        match two_sum(&nums, target) {
            Some((i, j)) => {
                prop_assert!(i < j);
                prop_assert_eq!(nums[i] + nums[j], target);
            }
            None => {
                for i in 0..nums.len() {
                    for j in (i + 1)..nums.len() {
                        prop_assert_ne!(nums[i] + nums[j], target);
                    }
                }
            }
        }
    }

    #[test]
    fn max_subarray_sum_matches_brute_force(nums in prop::collection::vec(-20i64..20, 1..30)) {
        let brute = (0..nums.len())
            .flat_map(|i| (i..nums.len()).map(move |j| (i, j)))
            .map(|(i, j)| nums[i..=j].iter().sum::<i64>())
            .max()
            .unwrap();
        prop_assert_eq!(max_subarray_sum(&nums), Ok(brute));
    }

    #[test]
    fn move_zeros_preserves_non_zero_order(mut nums in small_nums()) {
        let non_zero: Vec<i64> = nums.iter().copied().filter(|&n| n != 0).collect();
        let zero_count = nums.len() - non_zero.len();
        move_zeros_to_end(&mut nums);
        prop_assert_eq!(&nums[..non_zero.len()], &non_zero[..]);
        prop_assert!(nums[non_zero.len()..].iter().all(|&n| n == 0));
        prop_assert_eq!(nums.len() - non_zero.len(), zero_count);
    }

    #[test]
    fn missing_number_is_recovered(n in 1i64..60, pick in 0usize..60) {
        let missing = (pick as i64 % n) + 1;
        let nums: Vec<i64> = (1..=n).filter(|&x| x != missing).collect();
        prop_assert_eq!(find_missing_number(&nums), missing);
    }

    #[test]
    fn rotate_round_trip(nums in prop::collection::vec(any::<i64>(), 1..30), k in -100i64..100) {
        let mut rotated = nums.clone();
        rotate_array(&mut rotated, k).unwrap();
        rotate_array(&mut rotated, (-k).rem_euclid(nums.len() as i64)).unwrap();
        prop_assert_eq!(rotated, nums);
    }

    #[test]
    fn merge_intervals_is_idempotent(input in intervals()) {
        let once = merge_intervals(input);
        let twice = merge_intervals(once.clone());
        prop_assert_eq!(&once, &twice);
        for pair in once.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start());
        }
    }

    #[test]
    fn merge_intervals_covers_the_same_points(input in intervals()) {
        let merged = merge_intervals(input.clone());
        for point in -50i64..70 {
            let in_input = input.iter().any(|iv| iv.start() <= point && point <= iv.end());
            let in_merged = merged.iter().any(|iv| iv.start() <= point && point <= iv.end());
            prop_assert_eq!(in_input, in_merged);
        }
    }

    #[test]
    fn find_duplicate_finds_the_repeat(
        n in 1usize..30,
        dup_seed in 0usize..30,
        extra in 0usize..4,
        seed in any::<u64>()
    ) {
        // 1..=n with one value repeated; extra copies replace other values
        let dup = dup_seed % n + 1;
        let mut nums: Vec<usize> = (1..=n).collect();
        nums.push(dup);
        let mut replaced = 0;
        for slot in nums.iter_mut() {
            if replaced == extra {
                break;
            }
            if *slot != dup {
                *slot = dup;
                replaced += 1;
            }
        }
        let len = nums.len();
        nums.rotate_left((seed % len as u64) as usize);
        prop_assert_eq!(find_duplicate(&nums), dup);
    }

    #[test]
    fn subarray_sum_matches_brute_force(nums in small_nums(), k in -30i64..30) {
        let brute = (0..nums.len())
            .flat_map(|i| (i..nums.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| nums[i..=j].iter().sum::<i64>() == k)
            .count();
        prop_assert_eq!(subarray_sum(&nums, k), brute);
    }

    #[test]
    fn product_except_self_matches_division(nums in prop::collection::vec(-9i64..9, 1..10)) {
        let output = product_except_self(&nums);
        let total: i64 = nums.iter().product();
        for (i, &num) in nums.iter().enumerate() {
            if num != 0 {
                prop_assert_eq!(output[i], total / num);
            } else {
                let others: i64 = nums
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &v)| v)
                    .product();
                prop_assert_eq!(output[i], others);
            }
        }
    }

    #[test]
    fn length_of_lis_matches_subsequence_enumeration(
        nums in prop::collection::vec(-10i64..10, 0..12)
    ) {
        // every subsequence is a bitmask over the positions
        let brute = (0u32..(1 << nums.len()))
            .map(|mask| {
                (0..nums.len())
                    .filter(|&i| mask & (1 << i) != 0)
                    .map(|i| nums[i])
                    .collect::<Vec<i64>>()
            })
            .filter(|picked| picked.windows(2).all(|w| w[0] < w[1]))
            .map(|picked| picked.len())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(length_of_lis(&nums), brute);
    }

    #[test]
    fn can_partition_matches_subset_enumeration(
        nums in prop::collection::vec(1u64..20, 0..12)
    ) {
        let total: u64 = nums.iter().sum();
        let brute = (0u32..(1 << nums.len())).any(|mask| {
            let picked: u64 = (0..nums.len())
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| nums[i])
                .sum();
            2 * picked == total
        });
        prop_assert_eq!(can_partition(&nums), brute);
    }

    #[test]
    fn kth_largest_matches_sorted_order(
        nums in prop::collection::vec(-50i64..50, 1..30),
        pick in 0usize..30
    ) {
        let k = pick % nums.len() + 1;
        let mut sorted = nums.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(find_kth_largest(&nums, k), Ok(sorted[k - 1]));
    }
}
