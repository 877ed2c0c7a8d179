//! 컴프리헨션 (Comprehensions)
//!
//! 범위에서 리스트와 딕셔너리를 만들어내는 변환들.
//! Rust에서는 이터레이터 결합자가 이 역할을 한다
//! (In Rust, iterator combinators play this role).

use dsa_common::Dict;
use dsa_common::list::{filter, map_filter};

/// `0..n`의 제곱 (Squares of `0..n`).
///
/// # 예시 (Examples)
/// ```
/// use dsa_basics::comprehensions::squares;
/// assert_eq!(squares(5), vec![0, 1, 4, 9, 16]);
/// ```
pub fn squares(n: u64) -> Vec<u64> {
    (0..n).map(|x| x * x).collect()
}

/// `0..n`의 짝수 (Even numbers in `0..n`).
///
/// # 예시 (Examples)
/// ```
/// use dsa_basics::comprehensions::evens;
/// assert_eq!(evens(10), vec![0, 2, 4, 6, 8]);
/// ```
pub fn evens(n: u64) -> Vec<u64> {
    let range: Vec<u64> = (0..n).collect();
    filter(|x| x % 2 == 0, &range)
}

/// 짝수만 골라 제곱한다: 필터와 변환을 한 번에 (Filter and transform in one pass).
pub fn even_squares(n: u64) -> Vec<u64> {
    let range: Vec<u64> = (0..n).collect();
    map_filter(|x| x * x, |x| x % 2 == 0, &range)
}

/// `x -> x²` 딕셔너리, 키는 삽입 순서를 따른다
/// (A `x -> x²` dictionary whose keys follow insertion order).
///
/// # 예시 (Examples)
/// ```
/// use dsa_basics::comprehensions::square_table;
/// let table = square_table(5);
/// assert_eq!(table.get(&4), Some(&16));
/// assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// ```
pub fn square_table(n: u64) -> Dict<u64, u64> {
    (0..n).map(|x| (x, x * x)).collect()
}
