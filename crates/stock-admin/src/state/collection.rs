use std::sync::Arc;
use stock_store::Record;

/// State of one feature slice
///
/// `items` is shared behind an `Arc`: reducers build a new vector on every
/// change, so an unchanged `Arc` means unchanged items. Memoized selectors
/// rely on that.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    pub loading: bool,
    pub items: Arc<Vec<R>>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            loading: false,
            items: Arc::new(Vec::new()),
        }
    }
}

impl<R: Record> Collection<R> {
    #[cfg(test)]
    pub fn with_items(items: Vec<R>) -> Self {
        Self {
            loading: false,
            items: Arc::new(items),
        }
    }

    /// Find a record by id
    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.find(id).is_some()
    }
}
