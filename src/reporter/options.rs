//! Observer options

/// What to do when the parser reports a line out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderingPolicy {
    /// Refuse the line with [`ReportError::OutOfOrderLine`](super::ReportError::OutOfOrderLine)
    #[default]
    Reject,
    /// Panic. For hosts that treat a broken parser contract as fatal.
    Abort,
}

/// Options for a [`ParseObserver`](super::ParseObserver)
#[derive(Debug, Clone)]
pub struct ObserverOptions {
    pub ordering: OrderingPolicy,
    /// Number of records to reserve up front, e.g. the document's line count
    pub history_capacity: usize,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            ordering: OrderingPolicy::Reject,
            history_capacity: 0,
        }
    }
}

impl ObserverOptions {
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
