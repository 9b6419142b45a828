//! Stack-based outline construction.

use super::OutlineOptions;
use crate::error::Result;
use crate::model::{DocumentOutline, HeadingRecord, OutlineNode};

/// Builds outlines from flat heading lists.
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    options: OutlineOptions,
}

impl OutlineBuilder {
    /// Create a builder with the given options.
    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Get the builder options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Build a nested outline.
    ///
    /// Each heading becomes a child of the nearest preceding heading with a
    /// strictly smaller level. Level gaps nest directly (a level-3 heading
    /// after a level-1 heading is its child) and equal levels are siblings.
    pub fn build(&self, headings: &[HeadingRecord]) -> Result<DocumentOutline> {
        let filtered = self.filter(headings)?;
        let mut outline = summarize(&filtered);

        // The open ancestor chain is always the rightmost path of the tree,
        // so the stack only needs to remember levels.
        let mut stack: Vec<u8> = Vec::new();
        for heading in filtered {
            while stack.last().is_some_and(|&level| level >= heading.level) {
                stack.pop();
            }
            let node = OutlineNode::from_heading(heading, self.options.include_format);
            attach(&mut outline.nodes, stack.len(), node);
            stack.push(heading.level);
        }

        log::debug!(
            "Built outline: {} headings, {} roots, max depth {}",
            outline.total_headings,
            outline.nodes.len(),
            outline.max_depth
        );
        Ok(outline)
    }

    /// Build a flat outline: same filtering, no nesting.
    pub fn build_flat(&self, headings: &[HeadingRecord]) -> Result<Vec<OutlineNode>> {
        Ok(self
            .filter(headings)?
            .into_iter()
            .map(|h| OutlineNode::from_heading(h, self.options.include_format))
            .collect())
    }

    fn filter<'a>(&self, headings: &'a [HeadingRecord]) -> Result<Vec<&'a HeadingRecord>> {
        self.options.validate()?;
        for heading in headings {
            heading.validate()?;
        }
        Ok(headings
            .iter()
            .filter(|h| self.options.includes(h.level))
            .collect())
    }
}

/// Derived counts for the filtered headings; nodes are filled in later.
fn summarize(headings: &[&HeadingRecord]) -> DocumentOutline {
    let mut outline = DocumentOutline::new();
    for heading in headings {
        *outline.level_counts.entry(heading.level).or_insert(0) += 1;
        outline.max_depth = outline.max_depth.max(heading.level);
    }
    outline.total_headings = headings.len();
    outline
}

/// Append `node` at `depth` along the rightmost path of `roots`.
fn attach(roots: &mut Vec<OutlineNode>, depth: usize, node: OutlineNode) {
    let mut siblings = roots;
    for _ in 0..depth {
        // every open ancestor was pushed as the last child at its depth
        let last = siblings.len() - 1;
        siblings = &mut siblings[last].children;
    }
    siblings.push(node);
}
