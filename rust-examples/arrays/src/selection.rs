//! 선택 (Selection)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::error::{ProblemError, Result};

/// k번째로 큰 값, 1번째는 최댓값 (The k-th largest value; the 1st is the maximum).
///
/// 크기 `k`의 최소 힙을 유지한다: 힙이 넘치면 가장 작은 값을 버리므로
/// 끝나면 힙의 최솟값이 답이다. O(n log k) 시간, O(k) 공간
/// (A size-`k` min-heap keeps the `k` largest values seen; its minimum is the answer).
/// 결과는 내림차순 정렬의 `k-1` 번째 원소와 같다 (Equals `sorted_desc[k - 1]`).
///
/// # 오류 (Errors)
/// `1 <= k <= nums.len()`가 아니면 [`ProblemError::KOutOfRange`].
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::selection::find_kth_largest;
/// assert_eq!(find_kth_largest(&[3, 2, 1, 5, 6, 4], 2), Ok(5));
/// assert!(find_kth_largest(&[3, 2, 1], 4).is_err());
/// ```
pub fn find_kth_largest(nums: &[i64], k: usize) -> Result<i64> {
    if k == 0 || k > nums.len() {
        return Err(ProblemError::KOutOfRange { k, len: nums.len() });
    }

    let mut heap: BinaryHeap<Reverse<i64>> = BinaryHeap::with_capacity(k + 1);
    for &num in nums {
        heap.push(Reverse(num));
        if heap.len() > k {
            let evicted = heap.pop();
            trace!(?evicted, "find_kth_largest: evicted smallest");
        }
    }

    heap.peek()
        .map(|&Reverse(kth)| kth)
        .ok_or(ProblemError::KOutOfRange { k, len: nums.len() })
}
