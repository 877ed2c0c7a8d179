//! # Ordered Sequence Operations
//!
//! Bounds-checked mutation and access helpers over `Vec<T>` and slices.
//!
//! ## Semantics
//!
//! - Insertion shifts subsequent elements right.
//! - Deletion by index shifts subsequent elements left.
//! - Removal by value only removes the first match.
//! - Every operation that can address a missing element returns
//!   [`CollectionError`] instead of panicking.
//!
//! ## Example
//!
//! ```
//! use dsa_common::list::{append, insert, pop_last, remove_value};
//!
//! let mut fruits = vec!["apple", "banana", "cherry"];
//! append(&mut fruits, "orange");
//! insert(&mut fruits, 1, "kiwi");
//! assert_eq!(fruits, ["apple", "kiwi", "banana", "cherry", "orange"]);
//!
//! assert_eq!(remove_value(&mut fruits, &"banana"), Ok(2));
//! assert_eq!(pop_last(&mut fruits), Ok("orange"));
//! assert_eq!(fruits, ["apple", "kiwi", "cherry"]);
//! ```

use crate::error::{CollectionError, Result};
use tracing::trace;

/// Appends an element to the end of the sequence.
#[inline]
pub fn append<T>(list: &mut Vec<T>, item: T) {
    list.push(item);
}

/// Inserts an element before `index`, shifting the tail right.
///
/// An index past the end appends, so insertion never fails.
///
/// # Example
/// ```
/// use dsa_common::list::insert;
/// let mut list = vec![1, 3];
/// insert(&mut list, 1, 2);
/// insert(&mut list, 99, 4);
/// assert_eq!(list, vec![1, 2, 3, 4]);
/// ```
pub fn insert<T>(list: &mut Vec<T>, index: usize, item: T) {
    let index = index.min(list.len());
    list.insert(index, item);
}

/// Removes the first element equal to `item` and returns the index it held.
///
/// # Errors
/// [`CollectionError::ValueNotFound`] when no element matches.
///
/// # Example
/// ```
/// use dsa_common::list::remove_value;
/// let mut list = vec![1, 2, 1];
/// assert_eq!(remove_value(&mut list, &1), Ok(0));
/// assert_eq!(list, vec![2, 1]);
/// assert!(remove_value(&mut list, &7).is_err());
/// ```
pub fn remove_value<T: PartialEq>(list: &mut Vec<T>, item: &T) -> Result<usize> {
    let Some(index) = list.iter().position(|x| x == item) else {
        trace!(len = list.len(), "remove_value: no match");
        return Err(CollectionError::ValueNotFound);
    };
    list.remove(index);
    Ok(index)
}

/// Removes and returns the last element.
///
/// # Errors
/// [`CollectionError::EmptySequence`] when the sequence is empty.
pub fn pop_last<T>(list: &mut Vec<T>) -> Result<T> {
    list.pop().ok_or(CollectionError::EmptySequence)
}

/// Removes the element at `index`, shifting the tail left.
///
/// # Errors
/// [`CollectionError::IndexOutOfRange`] when `index >= len`.
///
/// # Example
/// ```
/// use dsa_common::list::delete_at;
/// let mut list = vec!['a', 'b', 'c'];
/// assert_eq!(delete_at(&mut list, 0), Ok('a'));
/// assert_eq!(list, vec!['b', 'c']);
/// ```
pub fn delete_at<T>(list: &mut Vec<T>, index: usize) -> Result<T> {
    check_index(list, index)?;
    Ok(list.remove(index))
}

/// Bounds-checked read.
///
/// # Example
/// ```
/// use dsa_common::list::get;
/// assert_eq!(get(&['a', 'b', 'c'], 1), Ok(&'b'));
/// assert!(get(&['a', 'b', 'c'], 5).is_err());
/// ```
pub fn get<T>(list: &[T], index: usize) -> Result<&T> {
    list.get(index).ok_or(CollectionError::IndexOutOfRange {
        index,
        len: list.len(),
    })
}

/// Bounds-checked write. Returns the value that was replaced.
pub fn set<T>(list: &mut [T], index: usize, item: T) -> Result<T> {
    check_index(list, index)?;
    Ok(std::mem::replace(&mut list[index], item))
}

/// Half-open slice `[start, end)` with both bounds clamped to the length.
///
/// Never fails: out-of-range or inverted bounds yield a shorter or empty slice.
///
/// # Example
/// ```
/// use dsa_common::list::slice;
/// let list = [10, 20, 30, 40];
/// assert_eq!(slice(&list, 1, 3), &[20, 30]);
/// assert_eq!(slice(&list, 2, 99), &[30, 40]);
/// assert!(slice(&list, 3, 1).is_empty());
/// ```
pub fn slice<T>(list: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(list.len());
    let start = start.min(end);
    &list[start..end]
}

/// Maps a function over a sequence.
///
/// # Note
/// Prefer using `.iter().map(f).collect()` directly in idiomatic Rust.
pub fn map<T, U, F>(f: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    list.iter().map(f).collect()
}

/// Keeps the elements matching a predicate.
///
/// # Example
/// ```
/// use dsa_common::list::filter;
/// let evens = filter(|x| x % 2 == 0, &[1, 2, 3, 4]);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T: Clone, F>(predicate: F, list: &[T]) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    list.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Filters then transforms, the two halves of a comprehension in one pass.
///
/// # Example
/// ```
/// use dsa_common::list::map_filter;
/// let odd_squares = map_filter(|x| x * x, |x| x % 2 == 1, &[1, 2, 3]);
/// assert_eq!(odd_squares, vec![1, 9]);
/// ```
pub fn map_filter<T, U, F, P>(f: F, predicate: P, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
    P: Fn(&T) -> bool,
{
    list.iter().filter(|x| predicate(x)).map(f).collect()
}

fn check_index<T>(list: &[T], index: usize) -> Result<()> {
    if index < list.len() {
        Ok(())
    } else {
        trace!(index, len = list.len(), "index out of range");
        Err(CollectionError::IndexOutOfRange {
            index,
            len: list.len(),
        })
    }
}
