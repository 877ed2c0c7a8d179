//! 해시 조회 문제 (Hash Lookup Problems)
//!
//! 해시맵으로 "지금까지 본 값"을 기억해 O(n²) 탐색을 O(n)으로 줄입니다
//! (A hash map of values seen so far turns an O(n²) search into O(n)).

use std::collections::HashMap;

use tracing::trace;

/// 합이 `target`인 두 원소의 인덱스 `(i, j)`, `i < j` (Two Sum).
///
/// 왼쪽에서 오른쪽으로 스캔하며 첫 번째 일치에서 반환합니다.
/// `j`가 가장 작은 쌍이 선택되고, 보수가 여러 번 나타나면 가장 앞의 `i`를 쓴다
/// (The pair with the smallest `j` wins; among repeated complements the earliest `i` is used).
/// 쌍이 없으면 `None` (오류가 아님) (`None` when no pair exists; this is not an error).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::hashing::two_sum;
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        // 뺄셈이 넘치면 i64 보수가 존재하지 않는다 (On overflow no i64 complement exists)
        if let Some(&i) = target.checked_sub(num).and_then(|c| seen.get(&c)) {
            trace!(i, j, "two_sum: complement found");
            return Some((i, j));
        }
        seen.entry(num).or_insert(j);
    }
    None
}

/// 합이 정확히 `k`인 연속 부분 배열의 개수 (Subarray Sum Equals K).
///
/// 누적 합 `prefix`에 대해 `prefix - k`가 이전에 몇 번 나왔는지 센다.
/// 빈 접두사를 위해 빈도표는 `{0: 1}`로 시작한다
/// (The frequency table starts at `{0: 1}` for the empty prefix).
/// 누적 합은 `i128`로 넓혀 어떤 `i64` 입력에서도 넘치지 않는다
/// (Prefix sums are widened to `i128` so no `i64` input overflows).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::hashing::subarray_sum;
/// assert_eq!(subarray_sum(&[1, 1, 1], 2), 2);
/// assert_eq!(subarray_sum(&[1, -1, 0], 0), 3);
/// ```
pub fn subarray_sum(nums: &[i64], k: i64) -> usize {
    let k = i128::from(k);
    let mut prefix_counts: HashMap<i128, usize> = HashMap::from([(0, 1)]);
    let mut prefix: i128 = 0;
    let mut count = 0;
    for &num in nums {
        prefix += i128::from(num);
        count += prefix_counts.get(&(prefix - k)).copied().unwrap_or(0);
        *prefix_counts.entry(prefix).or_insert(0) += 1;
    }
    count
}
