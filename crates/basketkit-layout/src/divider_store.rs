use basketkit_core::{Divider, DividerDraft, DividerId, DividerUpdate};

/// Placed dividers in placement order.
///
/// The configurator is the only owner; dividers are added from drafts,
/// updated through [`DividerUpdate`]s and removed by id.
#[derive(Debug, Clone, Default)]
pub struct DividerStore {
    dividers: Vec<Divider>,
}

impl DividerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a fresh id to `draft` and stores it.
    pub fn insert(&mut self, draft: DividerDraft) -> &Divider {
        let index = self.dividers.len();
        self.dividers.push(draft.into_divider(DividerId::new()));
        &self.dividers[index]
    }

    pub fn get(&self, id: DividerId) -> Option<&Divider> {
        self.dividers.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: DividerId) -> bool {
        self.get(id).is_some()
    }

    /// Applies a span update. Returns false for an unknown id.
    pub fn apply(&mut self, update: &DividerUpdate) -> bool {
        match self.dividers.iter_mut().find(|d| d.id == update.id) {
            Some(divider) => {
                divider.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: DividerId) -> Option<Divider> {
        let index = self.dividers.iter().position(|d| d.id == id)?;
        Some(self.dividers.remove(index))
    }

    pub fn clear(&mut self) {
        self.dividers.clear();
    }

    pub fn as_slice(&self) -> &[Divider] {
        &self.dividers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Divider> {
        self.dividers.iter()
    }

    pub fn len(&self) -> usize {
        self.dividers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dividers.is_empty()
    }
}
