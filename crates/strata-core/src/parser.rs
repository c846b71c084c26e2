//! Syntactic analysis: tokens to a forest of nodes.
//!
//! # Single-node convention
//!
//! [`Parser::analyse`] always returns the forest, even when it holds a single
//! node. Everything that must produce *one* node from a span (the branch
//! callback handed to descriptors, and [`Parser::analyse_tree`]) returns the
//! lone node bare when the span reduces to exactly one node, and
//! [`Node::collection`] of the forest otherwise. So `a,b` nested inside a
//! collection yields its elements directly rather than one-element wrappers.

use std::fmt::Debug;

use crate::analysis::{Analysis, Match};
use crate::config::{Config, DEFAULT_RECURSION_LIMIT};
use crate::descriptor::{Node, NodeDescriptors};
use crate::slice::TokenSlice;
use crate::trace::{NoopTracer, Tracer};
use crate::{Error, Result};

/// Turns tokens into nodes by ordered-choice dispatch over node descriptors.
///
/// Descriptors recurse into inner spans only through the branch callback
/// they receive; the parser never hands out a reference to itself.
#[derive(Debug)]
pub struct Parser<T, N> {
    descriptors: NodeDescriptors<T, N>,
    recursion_limit: u32,
}

impl<T: Debug, N: Node> Parser<T, N> {
    pub fn new(descriptors: NodeDescriptors<T, N>) -> Self {
        Self {
            descriptors,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Takes the recursion limit from `config`.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.recursion_limit = config.recursion_limit;
        self
    }

    /// Maximum branch nesting. `0` forbids branches altogether.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn descriptors(&self) -> &NodeDescriptors<T, N> {
        &self.descriptors
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    /// Parse `tokens` into a forest, one node per top-level match.
    pub fn analyse(&self, tokens: &[T]) -> Result<Vec<N>> {
        self.analyse_traced(tokens, &mut NoopTracer)
    }

    /// Parse `tokens` into a single node (see the module docs).
    pub fn analyse_tree(&self, tokens: &[T]) -> Result<N> {
        self.analyse(tokens).map(collapse)
    }

    /// [`analyse`](Self::analyse), reporting every step to `tracer`.
    pub fn analyse_traced<Tr: Tracer>(&self, tokens: &[T], tracer: &mut Tr) -> Result<Vec<N>> {
        self.forest(TokenSlice::new(tokens), 0, tracer)
    }

    fn forest<Tr: Tracer>(
        &self,
        window: TokenSlice<'_, T>,
        depth: u32,
        tracer: &mut Tr,
    ) -> Result<Vec<N>> {
        let mut nodes = Vec::new();
        let mut index = 0;

        while index < window.len() {
            let rest = window.skip(index);
            let Some(analysis) = self.first_node(rest, depth, tracer)? else {
                return Err(Error::InvalidToken {
                    index: rest.start(),
                    token: format!("{:?}", rest[0]),
                });
            };

            index += analysis.consumed;
            nodes.push(analysis.value);
        }

        if nodes.is_empty() {
            return Err(Error::NoNodesProduced);
        }

        Ok(nodes)
    }

    /// First descriptor in list order that matches at the start of `rest`.
    fn first_node<'t, Tr: Tracer>(
        &self,
        rest: TokenSlice<'t, T>,
        depth: u32,
        tracer: &mut Tr,
    ) -> Match<N> {
        for descriptor in self.descriptors.iter() {
            let found = {
                let mut branch =
                    |sub: TokenSlice<'t, T>| self.branch(rest, sub, depth, &mut *tracer);
                descriptor.first(rest, &mut branch)?
            };

            match found {
                Some(analysis) => {
                    rest.ensure_node_consumed(analysis.consumed, descriptor.name());
                    tracer.trace_node_match(rest.start(), descriptor.name(), analysis.consumed);
                    return Ok(Some(analysis));
                }
                None => tracer.trace_node_miss(rest.start(), descriptor.name()),
            }
        }
        Ok(None)
    }

    fn branch<Tr: Tracer>(
        &self,
        parent: TokenSlice<'_, T>,
        sub: TokenSlice<'_, T>,
        depth: u32,
        tracer: &mut Tr,
    ) -> Result<Analysis<N>> {
        parent.ensure_branch(&sub);

        let depth = depth + 1;
        if depth > self.recursion_limit {
            return Err(Error::RecursionLimitExceeded { index: sub.start() });
        }

        tracer.trace_enter_branch(sub.start(), sub.end());
        let forest = self.forest(sub, depth, tracer);
        tracer.trace_exit_branch(sub.start(), sub.end());
        let forest = forest?;

        Ok(Analysis::new(collapse(forest), sub.len()))
    }
}

fn collapse<N: Node>(forest: Vec<N>) -> N {
    match <[N; 1]>::try_from(forest) {
        Ok([node]) => node,
        Err(forest) => N::collection(forest),
    }
}
