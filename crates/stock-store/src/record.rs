use std::fmt::{Debug, Display};

/// A domain entity with a stable unique identifier
///
/// Identity is by `id` equality. The id must never change for the lifetime
/// of a record.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Debug + Display + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}
