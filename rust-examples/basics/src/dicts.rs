//! 딕셔너리 연산 (Dictionary Operations)
//!
//! 사람 레코드를 읽고, 추가하고, 갱신하고, 삭제하는 과정을 보여줍니다
//! (Reads, adds, updates and removes fields of a person record).
//! 값은 동적 타입 대신 명시적인 열거형으로 표현한다
//! (Values are an explicit enum instead of a dynamic type).

use std::fmt;

use dsa_common::{Dict, Result};
use serde::Serialize;
use tracing::debug;

/// 레코드 필드의 값 (A record field value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

pub type Record = Dict<String, Value>;

/// 워크스루의 각 단계에서 관찰된 값들 (Values observed during the walkthrough).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonTrace {
    pub initial: Record,
    /// 첨자 접근 결과 (Result of subscript access)
    pub name: Value,
    /// `get` 결과 (Result of `get`)
    pub age: Option<Value>,
    pub after_update: Record,
    pub after_delete: Record,
    pub popped_city: Value,
    /// 삭제된 키에 대한 기본값 조회 (Default lookup on a deleted key)
    pub age_or_default: Value,
    pub keys: Vec<String>,
    pub values: Vec<Value>,
    pub items: Vec<(String, Value)>,
}

/// 사람 레코드 워크스루 (Person record walkthrough).
///
/// # 예시 (Examples)
/// ```
/// use dsa_basics::dicts::{person_walkthrough, Value};
/// let trace = person_walkthrough().unwrap();
/// assert_eq!(trace.name, Value::from("Alice"));
/// assert_eq!(trace.keys, vec!["name".to_string()]);
/// ```
pub fn person_walkthrough() -> Result<PersonTrace> {
    let mut person: Record = [
        ("name".to_string(), Value::from("Alice")),
        ("age".to_string(), Value::Int(25)),
    ]
    .into_iter()
    .collect();
    let initial = person.clone();

    // 접근 (Access)
    let name = person.index("name")?.clone();
    let age = person.get("age").cloned();

    // 추가 또는 갱신 (Add or update)
    person.set("city".to_string(), Value::from("New York"));
    let previous_age = person.set("age".to_string(), Value::Int(26));
    debug!(?previous_age, "updated age");
    let after_update = person.clone();

    // 제거 (Remove)
    person.delete("age")?;
    let after_delete = person.clone();
    let popped_city = person.pop("city")?;
    let age_or_default = person.get_or("age", Value::Int(0));

    Ok(PersonTrace {
        initial,
        name,
        age,
        after_update,
        after_delete,
        popped_city,
        age_or_default,
        keys: person.keys().cloned().collect(),
        values: person.values().cloned().collect(),
        items: person
            .items()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    })
}
