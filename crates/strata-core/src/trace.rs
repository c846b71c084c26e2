//! Tracing infrastructure for debugging descriptor dispatch.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The plain `analyse` entry points run with [`NoopTracer`], whose methods are
//! `#[inline(always)]` empty functions, so the compiler drops every tracer
//! call and its arguments. The `analyse_traced` variants take any [`Tracer`];
//! [`PrintTracer`] collects one human-readable line per event.
//!
//! Token events carry byte offsets (`@3`); node events carry absolute token
//! indices (`#3`).

use crate::colors::Colors;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Matches and branch boundaries only.
    #[default]
    Default,
    /// Also misses, skipped input and branch exits.
    Verbose,
}

/// Tracer trait for tokenizer and parser instrumentation.
///
/// Each method is called at a specific point of the dispatch loops:
/// - `trace_skip` - an ignored character was stepped over
/// - `trace_token_match/miss` - after a token descriptor was consulted
/// - `trace_node_match/miss` - after a node descriptor was consulted
/// - `trace_enter_branch/exit_branch` - around a descriptor's branch analysis
pub trait Tracer {
    /// Called when the tokenizer skips an ignored character.
    fn trace_skip(&mut self, offset: usize, unit: char);

    /// Called when a token descriptor matched.
    fn trace_token_match(&mut self, offset: usize, descriptor: &str, consumed: usize);

    /// Called when a token descriptor did not match.
    fn trace_token_miss(&mut self, offset: usize, descriptor: &str);

    /// Called when a node descriptor matched.
    fn trace_node_match(&mut self, index: usize, descriptor: &str, consumed: usize);

    /// Called when a node descriptor did not match.
    fn trace_node_miss(&mut self, index: usize, descriptor: &str);

    /// Called before a branch span is analysed.
    fn trace_enter_branch(&mut self, start: usize, end: usize);

    /// Called after a branch span was analysed, whether it succeeded or not.
    fn trace_exit_branch(&mut self, start: usize, end: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_skip(&mut self, _offset: usize, _unit: char) {}

    #[inline(always)]
    fn trace_token_match(&mut self, _offset: usize, _descriptor: &str, _consumed: usize) {}

    #[inline(always)]
    fn trace_token_miss(&mut self, _offset: usize, _descriptor: &str) {}

    #[inline(always)]
    fn trace_node_match(&mut self, _index: usize, _descriptor: &str, _consumed: usize) {}

    #[inline(always)]
    fn trace_node_miss(&mut self, _index: usize, _descriptor: &str) {}

    #[inline(always)]
    fn trace_enter_branch(&mut self, _start: usize, _end: usize) {}

    #[inline(always)]
    fn trace_exit_branch(&mut self, _start: usize, _end: usize) {}
}

/// Tracer that collects one line per event.
///
/// Branch analysis indents nested events by two spaces per level. A failed
/// branch leaves its events in place, so the last line points at the failure,
/// and still closes its indentation level.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined with `\n`.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn push(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }
}

impl Tracer for PrintTracer {
    fn trace_skip(&mut self, offset: usize, unit: char) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(format!("{}skip  @{offset} {unit:?}{}", c.muted, c.reset));
    }

    fn trace_token_match(&mut self, offset: usize, descriptor: &str, consumed: usize) {
        let c = self.colors;
        self.push(format!(
            "{}token{} {}{descriptor}{} {}@{offset} +{consumed}{}",
            c.hit, c.reset, c.name, c.reset, c.muted, c.reset
        ));
    }

    fn trace_token_miss(&mut self, offset: usize, descriptor: &str) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(format!("{}miss  {descriptor} @{offset}{}", c.muted, c.reset));
    }

    fn trace_node_match(&mut self, index: usize, descriptor: &str, consumed: usize) {
        let c = self.colors;
        self.push(format!(
            "{}node{}  {}{descriptor}{} {}#{index} +{consumed}{}",
            c.hit, c.reset, c.name, c.reset, c.muted, c.reset
        ));
    }

    fn trace_node_miss(&mut self, index: usize, descriptor: &str) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(format!("{}miss  {descriptor} #{index}{}", c.muted, c.reset));
    }

    fn trace_enter_branch(&mut self, start: usize, end: usize) {
        let c = self.colors;
        self.push(format!("{}branch{} #{start}..#{end}", c.name, c.reset));
        self.depth += 1;
    }

    fn trace_exit_branch(&mut self, start: usize, end: usize) {
        self.depth = self.depth.saturating_sub(1);
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(format!("{}end   #{start}..#{end}{}", c.muted, c.reset));
    }
}
