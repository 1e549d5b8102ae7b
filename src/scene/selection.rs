//! Transient selection state.
//!
//! A selection is rebuilt from the op's id list on every interaction and
//! never persisted. It holds section indices in selection order,
//! deduplicated.

/// The current multi-select: section indices in selection order
#[derive(Debug, Clone, Default)]
pub struct Selection {
    sections: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected section indices, in selection order
    pub fn sections(&self) -> &[usize] {
        &self.sections
    }

    /// Add a section to the selection; re-adding is a no-op
    pub fn add_section(&mut self, index: usize) {
        if !self.sections.contains(&index) {
            self.sections.push(index);
        }
    }
}
