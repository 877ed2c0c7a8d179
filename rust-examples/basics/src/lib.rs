//! 기초편: 리스트와 딕셔너리 (Basics: Lists and Dictionaries)
//!
//! 이 크레이트는 순서 있는 시퀀스와 키-유일 매핑의 기본 연산을 보여줍니다:
//! - 리스트 변경 연산 (List mutation: append, insert, remove, pop, delete, slice)
//! - 컴프리헨션 스타일 변환 (Comprehension-style transforms with iterators)
//! - 딕셔너리 연산 (Dictionary operations: get, set, delete, pop, keys/values/items)

pub mod comprehensions; // 컴프리헨션 (Comprehensions)
pub mod dicts; // 딕셔너리 (Dictionaries)
pub mod lists; // 리스트 (Lists)

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use dicts::{PersonTrace, Value, person_walkthrough};
pub use lists::{FruitTrace, fruit_walkthrough};
