//! One-token nodes.

use strata_core::{Analysis, Branch, Match, NodeDescriptor, TokenSlice};

type MapToken<T, N> = Box<dyn Fn(&T, usize) -> strata_core::Result<Option<N>> + Send + Sync>;

/// Node descriptor that looks at the first token only.
///
/// The closure gets the token and its absolute index, and returns
/// `Ok(None)` for tokens it does not handle. The index is there for
/// [`Error::conversion`](strata_core::Error::conversion).
pub struct LeafDescriptor<T, N> {
    label: String,
    map: MapToken<T, N>,
}

impl<T, N> LeafDescriptor<T, N> {
    pub fn new(
        map: impl Fn(&T, usize) -> strata_core::Result<Option<N>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: "leaf".to_string(),
            map: Box::new(map),
        }
    }

    /// Name reported in traces.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<T, N> NodeDescriptor<T, N> for LeafDescriptor<T, N> {
    fn first<'t>(&self, tokens: TokenSlice<'t, T>, _: &mut Branch<'_, 't, T, N>) -> Match<N> {
        let Some(token) = tokens.first() else {
            return Ok(None);
        };
        let node = (self.map)(token, tokens.start())?;
        Ok(node.map(|node| Analysis::new(node, 1)))
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl<T, N> std::fmt::Debug for LeafDescriptor<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeafDescriptor")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
