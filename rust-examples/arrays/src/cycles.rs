//! 사이클 탐지 (Cycle Detection)
//!
//! 값을 "다음 인덱스"로 보면 배열은 함수 `i -> nums[i]`의 그래프가 된다
//! (Reading each value as the next index turns the array into the graph of `i -> nums[i]`).
//! 중복된 값은 그 그래프에서 사이클의 입구이다
//! (A repeated value is the entrance of a cycle in that graph).

use tracing::trace;

/// 길이 `n+1`, 값이 `1..=n`인 배열에서 반복된 값 (Find the duplicate number).
///
/// Floyd의 거북이와 토끼: 첫 단계에서 사이클 안의 만나는 점을 찾고,
/// 두 번째 단계에서 시작점과 만나는 점에서 한 칸씩 걸어 입구를 찾는다.
/// 추가 공간은 O(1) (O(1) extra space).
///
/// 전제 조건은 검사하지 않는다. 값이 `1..=n` 밖이면 인덱스 범위를 벗어나 패닉할 수 있다
/// (The precondition is not checked).
///
/// # 패닉 (Panics)
/// 값이 `nums.len()` 이상이거나 `nums`가 비어 있으면 패닉한다
/// (Panics when a value is `>= nums.len()` or `nums` is empty).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::cycles::find_duplicate;
/// assert_eq!(find_duplicate(&[1, 3, 4, 2, 2]), 2);
/// assert_eq!(find_duplicate(&[3, 1, 3, 4, 2]), 3);
/// ```
pub fn find_duplicate(nums: &[usize]) -> usize {
    // 1단계: 사이클 안에서 만나기 (Phase 1: meet inside the cycle)
    let mut tortoise = nums[0];
    let mut hare = nums[nums[0]];
    while tortoise != hare {
        tortoise = nums[tortoise];
        hare = nums[nums[hare]];
    }
    trace!(meeting_point = tortoise, "find_duplicate: pointers met");

    // 2단계: 사이클 입구 찾기 (Phase 2: find the cycle entrance)
    let mut finder = 0;
    while finder != tortoise {
        finder = nums[finder];
        tortoise = nums[tortoise];
    }
    finder
}
