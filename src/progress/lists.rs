//! Progress domain: per-level collected-item lists.

use super::ids::CollectibleId;

/// Ordered list of collected identities belonging to one level.
#[derive(Debug, Clone, Default)]
pub struct CollectedList {
    pub level_id: u32,
    pub items: Vec<CollectibleId>,
}

impl CollectedList {
    pub fn new(level_id: u32) -> Self {
        Self {
            level_id,
            items: Vec::new(),
        }
    }

    pub fn contains(&self, id: CollectibleId) -> bool {
        self.items.contains(&id)
    }
}

/// A group of per-level lists, looked up by linear scan on level id.
/// Levels number in the tens at most, so no map is warranted.
#[derive(Debug, Clone, Default)]
pub struct CollectedLists {
    pub lists: Vec<CollectedList>,
}

impl CollectedLists {
    pub fn get(&self, level_id: u32) -> Option<&CollectedList> {
        self.lists.iter().find(|l| l.level_id == level_id)
    }

    /// Find the list for a level, creating an empty one on first access.
    pub fn get_or_create(&mut self, level_id: u32) -> &mut CollectedList {
        let index = match self.lists.iter().position(|l| l.level_id == level_id) {
            Some(index) => index,
            None => {
                self.lists.push(CollectedList::new(level_id));
                self.lists.len() - 1
            }
        };
        &mut self.lists[index]
    }

    /// Append an identity to the level's list. Duplicates are allowed;
    /// consumers only ever test membership, never count.
    pub fn record(&mut self, level_id: u32, id: CollectibleId) {
        self.get_or_create(level_id).items.push(id);
    }

    pub fn contains(&self, level_id: u32, id: CollectibleId) -> bool {
        self.get(level_id).is_some_and(|l| l.contains(id))
    }

    /// Drain every pending identity for the level, leaving its list empty
    /// and reusable. Returns nothing when the level was never touched.
    pub fn take_items(&mut self, level_id: u32) -> Vec<CollectibleId> {
        match self.lists.iter_mut().find(|l| l.level_id == level_id) {
            Some(list) => std::mem::take(&mut list.items),
            None => Vec::new(),
        }
    }

    pub fn clear_level(&mut self, level_id: u32) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.level_id == level_id) {
            list.items.clear();
        }
    }
}
