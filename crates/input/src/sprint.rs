use std::collections::BTreeSet;

/// A physical input that can hold sprint on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SprintSource {
    LeftShift,
    RightShift,
}

/// Set of sprint sources currently held. Sprint is on iff the set is non-empty,
/// so releasing one shift while the other is down keeps sprinting.
#[derive(Debug, Clone, Default)]
pub struct SprintSources {
    active: BTreeSet<SprintSource>,
}

impl SprintSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `source` held. Returns the resulting sprint state.
    pub fn press(&mut self, source: SprintSource) -> bool {
        self.active.insert(source);
        self.is_active()
    }

    /// Mark `source` released. Releasing an unheld source is harmless.
    pub fn release(&mut self, source: SprintSource) -> bool {
        self.active.remove(&source);
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
