//! Descriptor capabilities and the ordered lists that hold them.

use crate::analysis::{Analysis, Match};
use crate::cursor::Cursor;
use crate::slice::TokenSlice;

/// Recognises one kind of token at a cursor position.
///
/// Contract:
/// - `Ok(None)` when the text at the cursor is not this token (an empty
///   remainder is always a non-match)
/// - `Ok(Some(..))` with `consumed ≥ 1` bytes, ending on a char boundary
/// - `Err(..)` when the token is recognisably started but malformed, such as
///   an opened quote with no closing one
///
/// Any `Fn(Cursor) -> Match<T>` is a descriptor as well.
pub trait TokenDescriptor<T>: Send + Sync {
    fn first(&self, cursor: Cursor<'_>) -> Match<T>;

    /// Label used in traces and contract-violation panics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T, F> TokenDescriptor<T> for F
where
    F: Fn(Cursor<'_>) -> Match<T> + Send + Sync,
{
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        self(cursor)
    }
}

/// Callback a node descriptor uses to analyse an inner span.
///
/// The span must lie inside, and be strictly shorter than, the slice the
/// descriptor was given. It yields a single node: the lone node when the
/// span reduces to one, otherwise a [`Node::collection`] of the span's forest.
pub type Branch<'b, 't, T, N> = dyn FnMut(TokenSlice<'t, T>) -> crate::Result<Analysis<N>> + 'b;

/// Recognises one kind of node at the start of a token slice.
///
/// Same three-way contract as [`TokenDescriptor`], counted in tokens.
/// Inner spans go through `branch`, never through the parser directly.
pub trait NodeDescriptor<T, N>: Send + Sync {
    fn first<'t>(&self, tokens: TokenSlice<'t, T>, branch: &mut Branch<'_, 't, T, N>)
    -> Match<N>;

    /// Label used in traces and contract-violation panics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A syntax-tree value that can stand for an ordered sequence of itself.
pub trait Node: Sized {
    fn collection(nodes: Vec<Self>) -> Self;
}

/// Priority-ordered descriptors. Earlier entries win.
pub struct DescriptorList<D: ?Sized> {
    items: Vec<Box<D>>,
}

pub type TokenDescriptors<T> = DescriptorList<dyn TokenDescriptor<T>>;
pub type NodeDescriptors<T, N> = DescriptorList<dyn NodeDescriptor<T, N>>;

impl<D: ?Sized> DescriptorList<D> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.items.iter().map(|item| &**item)
    }

    pub fn push_boxed(&mut self, descriptor: Box<D>) -> &mut Self {
        self.items.push(descriptor);
        self
    }

    /// Panics if `index > len`.
    pub fn insert_boxed(&mut self, index: usize, descriptor: Box<D>) -> &mut Self {
        self.items.insert(index, descriptor);
        self
    }

    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Box<D> {
        self.items.remove(index)
    }
}

impl<D: ?Sized> Default for DescriptorList<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> Extend<Box<D>> for DescriptorList<D> {
    fn extend<I: IntoIterator<Item = Box<D>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<D: ?Sized> FromIterator<Box<D>> for DescriptorList<D> {
    fn from_iter<I: IntoIterator<Item = Box<D>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<D: ?Sized> std::fmt::Debug for DescriptorList<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorList")
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> DescriptorList<dyn TokenDescriptor<T>> {
    pub fn push(&mut self, descriptor: impl TokenDescriptor<T> + 'static) -> &mut Self {
        self.push_boxed(Box::new(descriptor))
    }

    /// Panics if `index > len`.
    pub fn insert(
        &mut self,
        index: usize,
        descriptor: impl TokenDescriptor<T> + 'static,
    ) -> &mut Self {
        self.insert_boxed(index, Box::new(descriptor))
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, descriptor: impl TokenDescriptor<T> + 'static) -> Self {
        self.push(descriptor);
        self
    }
}

impl<T, N> DescriptorList<dyn NodeDescriptor<T, N>> {
    pub fn push(&mut self, descriptor: impl NodeDescriptor<T, N> + 'static) -> &mut Self {
        self.push_boxed(Box::new(descriptor))
    }

    /// Panics if `index > len`.
    pub fn insert(
        &mut self,
        index: usize,
        descriptor: impl NodeDescriptor<T, N> + 'static,
    ) -> &mut Self {
        self.insert_boxed(index, Box::new(descriptor))
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, descriptor: impl NodeDescriptor<T, N> + 'static) -> Self {
        self.push(descriptor);
        self
    }
}
