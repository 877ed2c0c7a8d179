//! 배열 문제편: 고전 알고리즘 (Array Problems: Classic Algorithms)
//!
//! 면접에서 자주 나오는 배열 문제 열두 가지를 순수 함수로 구현합니다:
//! - 해시 조회 (Hash lookups): two-sum, 합이 k인 부분 배열 개수
//! - 선형 스캔 (Linear scans): Kadane, 0 이동, 누락된 수, 회전, 자기 자신을 제외한 곱
//! - 구간 병합 (Interval merging)
//! - 사이클 탐지 (Cycle detection): Floyd의 거북이와 토끼
//! - 동적 계획법 (Dynamic programming): LIS, 부분집합 합 분할
//! - 선택 (Selection): k번째로 큰 값
//!
//! 어떤 함수도 다른 함수를 호출하지 않으며 공유 상태가 없습니다
//! (No function calls another and there is no shared state).

pub mod cycles; // 사이클 탐지 (Cycle Detection)
pub mod dynamic; // 동적 계획법 (Dynamic Programming)
pub mod error;
pub mod hashing; // 해시 조회 (Hash Lookups)
pub mod intervals; // 구간 (Intervals)
pub mod scanning; // 선형 스캔 (Linear Scans)
pub mod selection; // 선택 (Selection)

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use cycles::find_duplicate;
pub use dynamic::{can_partition, length_of_lis};
pub use error::{ProblemError, Result};
pub use hashing::{subarray_sum, two_sum};
pub use intervals::{Interval, merge_intervals};
pub use scanning::{
    find_missing_number, max_subarray_sum, move_zeros_to_end, product_except_self, rotate_array,
};
pub use selection::find_kth_largest;
