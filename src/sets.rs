//! Set-like helpers over ordered sequences.
//!
//! Category and item listings are ordered sequences that behave like sets:
//! adding an already present name is a no-op and removing drops every occurrence.

/// True when every element of `other` is present in `seq`.
pub fn contains_all<T: PartialEq>(seq: &[T], other: &[T]) -> bool {
    other.iter().all(|x| seq.contains(x))
}

/// `seq` with every element of `excluded` removed, order preserved.
pub fn without<T: PartialEq + Clone>(seq: &[T], excluded: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|x| !excluded.contains(x))
        .cloned()
        .collect()
}

/// `seq` followed by the elements of `extra` it does not already hold.
pub fn union<T: PartialEq + Clone>(seq: &[T], extra: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    for x in extra {
        if !result.contains(x) {
            result.push(x.clone());
        }
    }
    result
}
