//! The FilterPipeline runs several specifications as sequential stages.
//!
//! Running stages one after another is equivalent to filtering once with
//! the AND of all stages; the pipeline exists for the per-stage logging.

use crate::filter::ItemFilter;
use crate::traits::{Filter, Specification};

/// Chains specifications into a staged filter.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_stage(ColorSpecification::new(Color::Green))
///     .add_stage(SizeSpecification::new(Size::Large));
///
/// let matching = pipeline.apply(catalog.products());
/// ```
pub struct FilterPipeline<T: 'static> {
    stages: Vec<Box<dyn Specification<T>>>,
}

impl<T: 'static> FilterPipeline<T> {
    /// Create a new empty FilterPipeline. It keeps every item.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.stages.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply all stages in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with every input item
    /// 2. For each stage in order, keep the items it accepts and log the
    ///    counts before and after
    /// 3. Return what survives, in input order
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
    {
        let engine = ItemFilter;
        let mut current: Vec<&'a T> = items.into_iter().collect();
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.describe(),
                current.len()
            );
            current = engine.filter(current, stage.as_ref());
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.describe(),
                current.len()
            );
        }
        current
    }
}

impl<T: 'static> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
