//! Visibility index
//!
//! Mirrors which elements currently own an attachment body, split by category.

use rustc_hash::FxHashSet;
use springflow_core::{ElementCategory, ElementId};

/// Elements with a live body, kept as two disjoint sets
#[derive(Debug, Default, Clone)]
pub struct VisibilityIndex {
    content: FxHashSet<ElementId>,
    header_footer: FxHashSet<ElementId>,
}

impl VisibilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, category: ElementCategory) -> &FxHashSet<ElementId> {
        match category {
            ElementCategory::Content => &self.content,
            ElementCategory::HeaderFooter => &self.header_footer,
        }
    }

    fn set_mut(&mut self, category: ElementCategory) -> &mut FxHashSet<ElementId> {
        match category {
            ElementCategory::Content => &mut self.content,
            ElementCategory::HeaderFooter => &mut self.header_footer,
        }
    }

    pub fn contains(&self, id: &ElementId, category: ElementCategory) -> bool {
        self.set(category).contains(id)
    }

    pub fn insert(&mut self, id: ElementId, category: ElementCategory) {
        self.set_mut(category).insert(id);
    }

    pub fn remove(&mut self, id: &ElementId, category: ElementCategory) {
        self.set_mut(category).remove(id);
    }

    /// Forget every element
    pub fn reset(&mut self) {
        self.content.clear();
        self.header_footer.clear();
    }

    pub fn content(&self) -> &FxHashSet<ElementId> {
        &self.content
    }

    pub fn header_footer(&self) -> &FxHashSet<ElementId> {
        &self.header_footer
    }

    /// Every tracked element, content first
    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.content.iter().chain(self.header_footer.iter())
    }

    pub fn len(&self) -> usize {
        self.content.len() + self.header_footer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.header_footer.is_empty()
    }
}
