/// A successful match: the produced value plus how much input it claimed.
///
/// For tokens, `consumed` is the byte length of the matched text. For nodes,
/// it is the number of tokens the node (including its branches) covers.
/// Either way it is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<V> {
    pub value: V,
    pub consumed: usize,
}

impl<V> Analysis<V> {
    #[inline]
    pub fn new(value: V, consumed: usize) -> Self {
        Self { value, consumed }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Analysis<U> {
        Analysis {
            value: f(self.value),
            consumed: self.consumed,
        }
    }
}

/// Outcome of one descriptor attempt.
///
/// `Ok(None)` is a plain non-match and lets the next descriptor try.
/// `Err` aborts the whole analysis.
pub type Match<V> = crate::Result<Option<Analysis<V>>>;
