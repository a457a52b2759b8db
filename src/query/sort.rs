/// A sortable attribute of a record type, convertible to its schema name.
///
/// Implement on a unit-variant enum (or `#[derive(SortKey)]`) so the set of
/// sortable attributes stays closed per record type. Every key must name a
/// real, sortable attribute in the backing schema; a mismatch surfaces as a
/// runtime failure from the backend, not from this crate.
pub trait SortKey: Copy {
    /// The schema-level attribute name.
    fn key(&self) -> &'static str;
}

/// A low-level sort instruction: attribute name plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub key: String,
    pub ascending: bool,
}

impl SortDescriptor {
    pub fn new(key: impl Into<String>, ascending: bool) -> Self {
        SortDescriptor {
            key: key.into(),
            ascending,
        }
    }
}

/// A sort specification in any of its accepted call shapes.
///
/// Callers pass a single `(key, ascending)` pair, an ordered sequence of
/// pairs, or a pre-built descriptor sequence; all three normalize to the
/// same descriptor form. An ordered sequence defines tie-break order, left
/// to right. `()` converts to `Unsorted`.
pub enum SortSpec<K> {
    Unsorted,
    Key(K, bool),
    Keys(Vec<(K, bool)>),
    Descriptors(Vec<SortDescriptor>),
}

impl<K: SortKey> SortSpec<K> {
    /// Normalize to the descriptor sequence backends consume.
    pub fn into_descriptors(self) -> Vec<SortDescriptor> {
        match self {
            SortSpec::Unsorted => Vec::new(),
            SortSpec::Key(key, ascending) => vec![SortDescriptor::new(key.key(), ascending)],
            SortSpec::Keys(pairs) => pairs
                .into_iter()
                .map(|(key, ascending)| SortDescriptor::new(key.key(), ascending))
                .collect(),
            SortSpec::Descriptors(descriptors) => descriptors,
        }
    }
}

impl<K> Default for SortSpec<K> {
    fn default() -> Self {
        SortSpec::Unsorted
    }
}

impl<K> From<()> for SortSpec<K> {
    fn from(_: ()) -> Self {
        SortSpec::Unsorted
    }
}

impl<K: SortKey> From<(K, bool)> for SortSpec<K> {
    fn from((key, ascending): (K, bool)) -> Self {
        SortSpec::Key(key, ascending)
    }
}

impl<K: SortKey> From<Vec<(K, bool)>> for SortSpec<K> {
    fn from(pairs: Vec<(K, bool)>) -> Self {
        SortSpec::Keys(pairs)
    }
}

impl<K: SortKey, const N: usize> From<[(K, bool); N]> for SortSpec<K> {
    fn from(pairs: [(K, bool); N]) -> Self {
        SortSpec::Keys(pairs.to_vec())
    }
}

impl<K> From<Vec<SortDescriptor>> for SortSpec<K> {
    fn from(descriptors: Vec<SortDescriptor>) -> Self {
        SortSpec::Descriptors(descriptors)
    }
}
