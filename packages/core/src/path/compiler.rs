//! Path compiler and entry point
//!
//! Hands out one [`Step`] per dot-separated segment. Segments are decomposed
//! only when pulled, so a resolution that stops early never parses the rest
//! of the path. The empty path has no segments; any other empty segment is
//! the key `""`.

use std::str::Split;

use super::step::Step;

/// Compile a raw dotted path. Never fails.
#[inline]
#[must_use]
pub fn compile(path: &str) -> PathCompiler<'_> {
    PathCompiler::new(path)
}

/// Single-pass step source over a borrowed path
#[derive(Debug, Clone)]
pub struct PathCompiler<'a> {
    path: &'a str,
    segments: Option<Split<'a, char>>,
    position: usize,
}

impl<'a> PathCompiler<'a> {
    /// Create a compiler over `path`
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            segments: (!path.is_empty()).then(|| path.split('.')),
            position: 0,
        }
    }

    /// Pull and decompose the next segment, or `None` once exhausted
    pub fn next_step(&mut self) -> Option<Step> {
        let segment = self.segments.as_mut()?.next()?;
        self.position += 1;
        Some(Step::parse(segment))
    }

    /// Number of segments pulled so far
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The raw path this compiler was built from
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Total number of segments in the path, pulled or not
    #[must_use]
    pub fn segment_count(&self) -> usize {
        if self.path.is_empty() {
            0
        } else {
            self.path.split('.').count()
        }
    }
}

impl Iterator for PathCompiler<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step()
    }
}
