//! 구간 병합 (Merging Intervals)
//!
//! 구간은 `start <= end`를 항상 만족하는 닫힌 구간 `[start, end]`이다
//! (An interval is a closed range `[start, end]` that always satisfies `start <= end`).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProblemError, Result};

/// 닫힌 정수 구간 (A closed integer interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// 새 구간을 만든다 (Creates a new interval).
    ///
    /// # 오류 (Errors)
    /// `start > end`이면 [`ProblemError::InvalidInterval`].
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(ProblemError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// 두 구간이 겹치거나 맞닿는지 (Whether two intervals overlap or touch).
    ///
    /// 병합의 기준이다 (The merge criterion of [`merge_intervals`]).
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = ProblemError;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Interval::new(start, end)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// 겹치는 구간을 합쳐 서로 겹치지 않는 최소 구간 목록을 만든다 (Merge intervals).
///
/// 시작점 기준으로 정렬한 뒤, 현재 구간의 시작이 누적 끝 이하이면 병합한다.
/// 맞닿은 구간(`[1, 4]`와 `[4, 5]`)도 병합된다
/// (Sort by start, then merge whenever the next start is at most the running end;
/// touching intervals merge too). 결과에 다시 적용해도 바뀌지 않는다 (Idempotent).
///
/// # 예시 (Examples)
/// ```
/// use dsa_arrays::intervals::{merge_intervals, Interval};
/// let input = [(1, 3), (2, 6), (8, 10), (15, 18)]
///     .into_iter()
///     .map(Interval::try_from)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let merged: Vec<(i64, i64)> = merge_intervals(input).into_iter().map(Into::into).collect();
/// assert_eq!(merged, vec![(1, 6), (8, 10), (15, 18)]);
/// ```
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if last.overlaps(&interval) => {
                debug!(%last, %interval, "merging overlapping intervals");
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}
