//! 선형 스캔 문제 (Linear Scan Problems)
//!
//! 한두 번의 순회와 상수 개의 누산기로 푸는 문제들
//! (Problems solved with one or two passes and a constant number of accumulators).

use tracing::trace;

use crate::error::{ProblemError, Result};

/// 최대 연속 부분 배열 합, Kadane 알고리즘 (Maximum subarray sum, Kadane's algorithm).
///
/// `current`는 현재 원소에서 끝나는 최선의 합, `best`는 지금까지의 최선이다
/// (`current` is the best sum ending at the current element, `best` the best so far).
///
/// # 오류 (Errors)
/// 빈 입력이면 [`ProblemError::EmptyInput`].
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::scanning::max_subarray_sum;
/// assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
/// ```
pub fn max_subarray_sum(nums: &[i64]) -> Result<i64> {
    let (&first, rest) = nums.split_first().ok_or(ProblemError::EmptyInput {
        operation: "max_subarray_sum",
    })?;
    let (best, _) = rest.iter().fold((first, first), |(best, current), &num| {
        let current = num.max(current + num);
        (best.max(current), current)
    });
    Ok(best)
}

/// 0을 끝으로 옮기고 0이 아닌 원소의 상대 순서를 유지한다, 제자리 (Move zeros, in place).
///
/// `write`는 다음 0이 아닌 원소가 갈 자리를 가리키는 두 포인터 스왑
/// (Two-pointer swap where `write` marks the slot for the next non-zero).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::scanning::move_zeros_to_end;
/// let mut nums = [0, 1, 0, 3, 12];
/// move_zeros_to_end(&mut nums);
/// assert_eq!(nums, [1, 3, 12, 0, 0]);
/// ```
pub fn move_zeros_to_end(nums: &mut [i64]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(write, read);
            write += 1;
        }
    }
}

/// `1..=n+1`에서 정확히 하나가 빠진 길이 `n`의 배열에서 빠진 수 (Missing number).
///
/// 닫힌 형식 `(n+1)(n+2)/2 - sum`을 쓴다.
///
/// 전제 조건은 검사하지 않는다: 입력이 `1..=n+1`에서 정확히 하나가 빠진 값들이
/// 아니면 결과는 수학적으로 일관되지만 의미가 없다
/// (The precondition is not checked: other inputs give a consistent but meaningless result).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::scanning::find_missing_number;
/// assert_eq!(find_missing_number(&[1, 2, 4, 5]), 3);
/// ```
pub fn find_missing_number(nums: &[i64]) -> i64 {
    let n = nums.len() as i64 + 1;
    let expected = n * (n + 1) / 2;
    expected - nums.iter().sum::<i64>()
}

/// 배열을 오른쪽으로 `k`칸 회전한다, 제자리 (Rotate right by `k`, in place).
///
/// `k`는 먼저 `k mod len`으로 정규화되므로 음수 `k`는 왼쪽 회전이 된다
/// (`k` is normalized with `rem_euclid`, so a negative `k` rotates left).
///
/// # 오류 (Errors)
/// 빈 입력이면 [`ProblemError::EmptyInput`].
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::scanning::rotate_array;
/// let mut nums = [1, 2, 3, 4, 5];
/// rotate_array(&mut nums, 2).unwrap();
/// assert_eq!(nums, [4, 5, 1, 2, 3]);
/// ```
pub fn rotate_array(nums: &mut [i64], k: i64) -> Result<()> {
    if nums.is_empty() {
        return Err(ProblemError::EmptyInput {
            operation: "rotate_array",
        });
    }
    let shift = k.rem_euclid(nums.len() as i64) as usize;
    trace!(k, shift, "rotate_array: normalized shift");
    nums.rotate_right(shift);
    Ok(())
}

/// 각 위치에 자기 자신을 제외한 나머지 모든 원소의 곱 (Product of array except self).
///
/// 나눗셈 없이 두 번의 순회로 계산하므로 0이 있어도 올바르다:
/// 왼쪽에서 오른쪽으로 접두사 곱, 오른쪽에서 왼쪽으로 접미사 곱
/// (Prefix products left-to-right, then suffix products right-to-left; no division,
/// so zero entries are handled).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::scanning::product_except_self;
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// assert_eq!(product_except_self(&[0, 4, 0]), vec![0, 0, 0]);
/// ```
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let mut output = vec![1; nums.len()];

    let mut prefix = 1;
    for (slot, &num) in output.iter_mut().zip(nums) {
        *slot = prefix;
        prefix *= num;
    }

    let mut suffix = 1;
    for (slot, &num) in output.iter_mut().zip(nums).rev() {
        *slot *= suffix;
        suffix *= num;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_subarray_sum() {
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
        assert_eq!(max_subarray_sum(&[5, 4, -1, 7, 8]), Ok(23));
        assert_eq!(max_subarray_sum(&[1]), Ok(1));
        // 모두 음수면 가장 큰 단일 원소 (All negative: the largest single element)
        assert_eq!(max_subarray_sum(&[-3, -1, -2]), Ok(-1));
        assert_eq!(
            max_subarray_sum(&[]),
            Err(ProblemError::EmptyInput {
                operation: "max_subarray_sum"
            })
        );
    }

    #[test]
    fn test_move_zeros_to_end() {
        let mut nums = [0, 1, 0, 3, 12];
        move_zeros_to_end(&mut nums);
        assert_eq!(nums, [1, 3, 12, 0, 0]);

        let mut no_zeros = [4, -2, 7];
        move_zeros_to_end(&mut no_zeros);
        assert_eq!(no_zeros, [4, -2, 7]);

        let mut all_zeros = [0, 0];
        move_zeros_to_end(&mut all_zeros);
        assert_eq!(all_zeros, [0, 0]);

        let mut empty: [i64; 0] = [];
        move_zeros_to_end(&mut empty);
    }

    #[test]
    fn test_find_missing_number() {
        assert_eq!(find_missing_number(&[1, 2, 4, 5]), 3);
        assert_eq!(find_missing_number(&[2, 3, 4]), 1);
        assert_eq!(find_missing_number(&[1, 2, 3]), 4);
        assert_eq!(find_missing_number(&[]), 1);
    }

    #[test]
    fn test_rotate_array() {
        let mut nums = [1, 2, 3, 4, 5];
        rotate_array(&mut nums, 2).unwrap();
        assert_eq!(nums, [4, 5, 1, 2, 3]);

        let mut wrapped = [1, 2, 3];
        rotate_array(&mut wrapped, 7).unwrap();
        assert_eq!(wrapped, [3, 1, 2]);

        let mut left = [1, 2, 3, 4];
        rotate_array(&mut left, -1).unwrap();
        assert_eq!(left, [2, 3, 4, 1]);

        let mut empty: [i64; 0] = [];
        assert!(rotate_array(&mut empty, 3).is_err());
    }

    #[test]
    fn test_rotate_round_trip() {
        let original = [9, 8, 7, 6, 5, 4];
        let mut nums = original;
        rotate_array(&mut nums, 4).unwrap();
        rotate_array(&mut nums, (-4_i64).rem_euclid(6)).unwrap();
        assert_eq!(nums, original);
    }

    #[test]
    fn test_product_except_self() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
        assert_eq!(product_except_self(&[-1, 1, 0, -3, 3]), vec![0, 0, 9, 0, 0]);
        assert_eq!(product_except_self(&[7]), vec![1]);
        assert!(product_except_self(&[]).is_empty());
    }
}
