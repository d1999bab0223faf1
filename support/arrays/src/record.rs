use core::hash::Hash;

use hashbrown::{HashMap, hash_map::Entry};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("item at index {index} has the same key as an earlier item")]
    DuplicateKey { index: usize },
}

/// Indexes `source` by the key `key` extracts from each item.
///
/// When several items produce the same key, the last one in iteration order
/// is kept. Pass `slice.iter()` (or `&vec`) to get a map of references and
/// leave the input untouched.
///
/// # Example
///
/// ```
/// use orion_arrays::to_record;
///
/// let record = to_record([(1, "a"), (1, "b"), (2, "c")], |&(id, _)| id);
/// assert_eq!(record.len(), 2);
/// assert_eq!(record[&1], (1, "b"));
/// ```
pub fn to_record<I, K, F>(source: I, mut key: F) -> HashMap<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let iter = source.into_iter();
    let mut record = HashMap::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        if record.insert(key(&item), item).is_some() {
            tracing::trace!(index, "record key overwritten by a later item");
        }
    }
    record
}

/// Like [`to_record`], but fails on the first item whose key was already seen.
pub fn try_to_record<I, K, F>(source: I, mut key: F) -> Result<HashMap<K, I::Item>, RecordError>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let iter = source.into_iter();
    let mut record = HashMap::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        match record.entry(key(&item)) {
            Entry::Occupied(_) => return Err(RecordError::DuplicateKey { index }),
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::{string::String, vec, vec::Vec};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        v: &'static str,
    }

    fn item(id: u32, v: &'static str) -> Item {
        Item { id, v }
    }

    #[test]
    fn test_distinct_keys() {
        let record = to_record(vec![item(1, "a"), item(2, "b")], |it| it.id);
        assert_eq!(record.len(), 2);
        assert_eq!(record[&1], item(1, "a"));
        assert_eq!(record[&2], item(2, "b"));
    }

    #[test]
    fn test_last_write_wins() {
        let record = to_record(vec![item(1, "a"), item(1, "b")], |it| it.id);
        assert_eq!(record.len(), 1);
        assert_eq!(record[&1], item(1, "b"));
    }

    #[test]
    fn test_empty_source() {
        let record = to_record(Vec::<Item>::new(), |it| it.id);
        assert!(record.is_empty());
    }

    #[test]
    fn test_borrowed_source_is_untouched() {
        let items = vec![item(1, "a"), item(2, "b"), item(1, "c")];
        let record = to_record(&items, |it| it.v);
        assert_eq!(record.len(), 3);
        assert_eq!(record["c"].id, 1);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_owned_string_keys() {
        let record = to_record(["x", "yy", "zzz"], |s| String::from(*s));
        assert_eq!(record["yy"], "yy");
    }

    #[test]
    fn test_try_to_record_ok() {
        let record = try_to_record(vec![item(1, "a"), item(2, "b")], |it| it.id).unwrap();
        assert_eq!(record, to_record(vec![item(1, "a"), item(2, "b")], |it| it.id));
    }

    #[test]
    fn test_try_to_record_duplicate() {
        let err = try_to_record(
            vec![item(1, "a"), item(2, "b"), item(3, "c"), item(2, "d")],
            |it| it.id,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::DuplicateKey { index: 3 });
    }
}
