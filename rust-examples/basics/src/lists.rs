//! 리스트 연산 (List Operations)
//!
//! 과일 리스트를 한 단계씩 변경하면서 각 단계의 상태를 기록합니다
//! (Mutates a fruit list step by step, recording the state after each step).
//! 모든 변경은 `dsa_common::list`의 경계 검사 연산을 거칩니다
//! (Every mutation goes through the bounds-checked operations in `dsa_common::list`).

use dsa_common::Result;
use dsa_common::list::{append, delete_at, get, insert, pop_last, remove_value, set, slice};
use serde::Serialize;
use tracing::debug;

/// 워크스루의 각 단계에서 관찰된 값들 (Values observed at each step of the walkthrough).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FruitTrace {
    pub initial: Vec<&'static str>,
    pub after_append: Vec<&'static str>,
    pub after_insert: Vec<&'static str>,
    pub after_remove: Vec<&'static str>,
    pub popped: &'static str,
    pub after_pop: Vec<&'static str>,
    pub after_delete: Vec<&'static str>,
    pub accessed: &'static str,
    pub after_assign: Vec<&'static str>,
    pub sliced: Vec<&'static str>,
}

/// 과일 리스트 워크스루 (Fruit list walkthrough).
///
/// 시작: `[apple, banana, cherry]`, 끝: `[kiwi, mango]`
/// (Starts from `[apple, banana, cherry]` and ends at `[kiwi, mango]`).
///
/// # 예시 (Examples)
/// ```
/// use dsa_basics::lists::fruit_walkthrough;
/// let trace = fruit_walkthrough().unwrap();
/// assert_eq!(trace.popped, "orange");
/// assert_eq!(trace.after_assign, vec!["kiwi", "mango"]);
/// ```
pub fn fruit_walkthrough() -> Result<FruitTrace> {
    let mut fruits = vec!["apple", "banana", "cherry"];
    let initial = fruits.clone();

    // 원소 추가 (Adding elements)
    append(&mut fruits, "orange");
    let after_append = fruits.clone();
    insert(&mut fruits, 1, "kiwi");
    let after_insert = fruits.clone();

    // 원소 제거 (Removing elements)
    let removed_at = remove_value(&mut fruits, &"banana")?;
    debug!(removed_at, "removed first banana");
    let after_remove = fruits.clone();
    let popped = pop_last(&mut fruits)?;
    let after_pop = fruits.clone();
    delete_at(&mut fruits, 0)?;
    let after_delete = fruits.clone();

    // 접근과 수정 (Access and modify)
    let accessed = *get(&fruits, 1)?;
    set(&mut fruits, 1, "mango")?;
    let after_assign = fruits.clone();

    // 슬라이싱: 끝 경계는 길이로 잘린다 (Slicing: the end bound is clamped to the length)
    let sliced = slice(&fruits, 1, 3).to_vec();

    Ok(FruitTrace {
        initial,
        after_append,
        after_insert,
        after_remove,
        popped,
        after_pop,
        after_delete,
        accessed,
        after_assign,
        sliced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_walkthrough_states() {
        let trace = fruit_walkthrough().unwrap();
        assert_eq!(trace.initial, vec!["apple", "banana", "cherry"]);
        assert_eq!(trace.after_append, vec!["apple", "banana", "cherry", "orange"]);
        assert_eq!(
            trace.after_insert,
            vec!["apple", "kiwi", "banana", "cherry", "orange"]
        );
        assert_eq!(trace.after_remove, vec!["apple", "kiwi", "cherry", "orange"]);
        assert_eq!(trace.popped, "orange");
        assert_eq!(trace.after_pop, vec!["apple", "kiwi", "cherry"]);
        assert_eq!(trace.after_delete, vec!["kiwi", "cherry"]);
        assert_eq!(trace.accessed, "cherry");
        assert_eq!(trace.after_assign, vec!["kiwi", "mango"]);
        assert_eq!(trace.sliced, vec!["mango"]);
    }

    #[test]
    fn test_fruit_trace_serializes() {
        let trace = fruit_walkthrough().unwrap();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["popped"], "orange");
        assert_eq!(json["sliced"], serde_json::json!(["mango"]));
    }
}
