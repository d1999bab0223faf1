use alloc::{vec, vec::Vec};

/// Either a single value or a vector of them.
///
/// Construct `One` directly; vectors and arrays convert with `.into()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Converts into a vector. `Many` hands back its own allocation.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => core::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(items: [T; N]) -> Self {
        OneOrMany::Many(Vec::from(items))
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Normalizes an optional value-or-vector into a vector.
///
/// `None` becomes an empty vector, `One(x)` becomes `[x]`, and `Many(v)` is
/// returned as `v` without copying its elements.
///
/// # Example
///
/// ```
/// use orion_arrays::{OneOrMany, as_array};
///
/// assert!(as_array::<u8>(None).is_empty());
/// assert_eq!(as_array(Some(OneOrMany::One(7))), [7]);
/// assert_eq!(as_array(Some(vec![1, 2].into())), [1, 2]);
/// ```
pub fn as_array<T>(input: Option<OneOrMany<T>>) -> Vec<T> {
    input.map_or_else(Vec::new, OneOrMany::into_vec)
}
