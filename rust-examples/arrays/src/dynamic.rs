//! 동적 계획법 (Dynamic Programming)
//!
//! 작은 부분 문제의 답을 표에 저장하고 재사용합니다
//! (Answers to smaller subproblems are tabulated and reused).

use tracing::debug;

/// 가장 긴 순증가 부분 수열의 길이 (Length of the longest strictly increasing subsequence).
///
/// `dp[i]`는 `nums[i]`에서 끝나는 가장 긴 증가 부분 수열의 길이:
/// `dp[i] = 1 + max(dp[j] | j < i, nums[j] < nums[i])`, 그런 `j`가 없으면 1.
/// O(n²) 시간 (O(n²) time).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::dynamic::length_of_lis;
/// assert_eq!(length_of_lis(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// assert_eq!(length_of_lis(&[]), 0);
/// ```
pub fn length_of_lis(nums: &[i64]) -> usize {
    let mut dp = vec![1; nums.len()];
    for i in 1..nums.len() {
        let longest_before = (0..i)
            .filter(|&j| nums[j] < nums[i])
            .map(|j| dp[j])
            .max()
            .unwrap_or(0);
        dp[i] = 1 + longest_before;
    }
    dp.into_iter().max().unwrap_or(0)
}

/// 양의 정수를 합이 같은 두 부분집합으로 나눌 수 있는지 (Partition equal subset sum).
///
/// 전체 합이 홀수면 즉시 `false`. 그렇지 않으면 크기 `total/2 + 1`의
/// 불리언 도달 가능성 표로 `total/2`를 만들 수 있는지 본다.
/// 각 값은 한 번만 쓰이도록 합을 큰 쪽에서 작은 쪽으로 갱신한다
/// (Sums are updated from high to low so each value is used at most once).
///
/// 빈 입력은 두 빈 부분집합으로 나뉘므로 `true`.
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::dynamic::can_partition;
/// assert!(can_partition(&[1, 5, 11, 5]));
/// assert!(!can_partition(&[1, 2, 3, 5]));
/// ```
pub fn can_partition(nums: &[u64]) -> bool {
    let total: u64 = nums.iter().sum();
    if total % 2 == 1 {
        debug!(total, "can_partition: odd total");
        return false;
    }
    let target = (total / 2) as usize;

    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for &num in nums {
        let num = num as usize;
        if num > target {
            continue;
        }
        for sum in (num..=target).rev() {
            reachable[sum] = reachable[sum] || reachable[sum - num];
        }
    }
    reachable[target]
}
