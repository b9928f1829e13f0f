use std::collections::BTreeMap;

/// Elements of two collections partitioned by how they correspond to each other.
#[derive(Debug)]
pub struct Correspondence<'a, T> {
    /// Elements only present in the target collection.
    pub added: Vec<&'a T>,
    /// Elements only present in the source collection.
    pub removed: Vec<&'a T>,
    /// Matched `(source, target)` pairs.
    pub common: Vec<(&'a T, &'a T)>,
}

impl<T> Default for Correspondence<'_, T> {
    fn default() -> Self {
        Correspondence {
            added: Vec::new(),
            removed: Vec::new(),
            common: Vec::new(),
        }
    }
}

/// Match the elements of two sequences with `same`.
///
/// Each source element is paired with the first target element it is the same as. When a
/// sequence holds several elements that are the same, the first one wins and the other ones are
/// matched against that same element, so duplicates are never reported as added or removed.
/// Order follows the source sequence for `removed` and `common`, and the target sequence for
/// `added`.
pub fn match_sequences<'a, T>(
    source: &'a [T],
    target: &'a [T],
    same: impl Fn(&T, &T) -> bool,
) -> Correspondence<'a, T> {
    let mut correspondence = Correspondence::default();

    for source_item in source {
        match target.iter().find(|target_item| same(source_item, target_item)) {
            Some(target_item) => correspondence.common.push((source_item, target_item)),
            None => correspondence.removed.push(source_item),
        }
    }

    correspondence.added.extend(
        target
            .iter()
            .filter(|target_item| !source.iter().any(|source_item| same(source_item, target_item))),
    );

    correspondence
}

/// Match the values of two maps by key, in key order.
pub fn match_maps<'a, K: Ord, V>(source: &'a BTreeMap<K, V>, target: &'a BTreeMap<K, V>) -> Correspondence<'a, V> {
    let mut correspondence = Correspondence::default();

    for (key, source_value) in source {
        match target.get(key) {
            Some(target_value) => correspondence.common.push((source_value, target_value)),
            None => correspondence.removed.push(source_value),
        }
    }

    correspondence.added.extend(
        target
            .iter()
            .filter(|(key, _)| !source.contains_key(key))
            .map(|(_, target_value)| target_value),
    );

    correspondence
}
