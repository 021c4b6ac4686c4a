//! Named entry lists and exclusion state
//!
//! A `Roster` is one wheel's worth of entries; a `RosterStore` holds every
//! roster plus the active one. Excluded entries stay on the roster but are
//! invisible to spins.

use serde::{Deserialize, Serialize};

/// Seed entries for a fresh default roster
pub const DEFAULT_ENTRIES: [&str; 12] = [
    "ALEX", "JORDAN", "CASEY", "MORGAN", "RILEY", "AVERY", "TAYLOR", "SKYLAR", "QUINN", "SAGE",
    "ROWAN", "DAKOTA",
];

/// A single wheel entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    /// Display text (trimmed, uppercased on insert)
    pub value: String,
    /// Creation time (ms since session epoch)
    pub created_at_ms: u64,
    /// Last time this entry was selected, if ever
    pub last_selected_at_ms: Option<u64>,
    /// Times selected; monotone, cleared only by an explicit reset
    pub selection_count: u32,
    /// Excluded entries are never the target of a spin
    pub is_excluded: bool,
}

impl Item {
    fn new(id: u32, value: String, now_ms: u64) -> Self {
        Self {
            id,
            value,
            created_at_ms: now_ms,
            last_selected_at_ms: None,
            selection_count: 0,
            is_excluded: false,
        }
    }
}

/// One named list of entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub id: u32,
    pub title: String,
    items: Vec<Item>,
    /// Next entry ID
    next_item_id: u32,
}

impl Roster {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
            next_item_id: 1,
        }
    }

    /// Add an entry. Input is trimmed and uppercased; blank input is rejected.
    /// Returns the new entry's ID.
    pub fn add(&mut self, value: &str, now_ms: u64) -> Option<u32> {
        let value = value.trim().to_uppercase();
        if value.is_empty() {
            return None;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(Item::new(id, value, now_ms));
        Some(id)
    }

    /// Remove an entry. Returns true if it existed.
    pub fn remove(&mut self, item_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    /// Rename an entry (same trim/uppercase rules as `add`)
    pub fn rename(&mut self, item_id: u32, value: &str) -> bool {
        let value = value.trim().to_uppercase();
        if value.is_empty() {
            return false;
        }
        match self.get_mut(item_id) {
            Some(item) => {
                item.value = value;
                true
            }
            None => false,
        }
    }

    /// Record a selection: bump the counter and stamp the time
    pub fn mark_selected(&mut self, item_id: u32, now_ms: u64) -> bool {
        match self.get_mut(item_id) {
            Some(item) => {
                item.selection_count += 1;
                item.last_selected_at_ms = Some(now_ms);
                true
            }
            None => false,
        }
    }

    /// Flip an entry's exclusion state. Re-including resets no counters.
    pub fn toggle_exclusion(&mut self, item_id: u32) -> bool {
        match self.get_mut(item_id) {
            Some(item) => {
                item.is_excluded = !item.is_excluded;
                true
            }
            None => false,
        }
    }

    /// Set an entry's exclusion state directly
    pub fn set_excluded(&mut self, item_id: u32, excluded: bool) -> bool {
        match self.get_mut(item_id) {
            Some(item) => {
                item.is_excluded = excluded;
                true
            }
            None => false,
        }
    }

    /// Re-include every entry
    pub fn include_all(&mut self) {
        for item in &mut self.items {
            item.is_excluded = false;
        }
    }

    /// Reset selection counters and timestamps for every entry
    pub fn reset_counters(&mut self) {
        for item in &mut self.items {
            item.selection_count = 0;
            item.last_selected_at_ms = None;
        }
    }

    pub fn get(&self, item_id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn get_mut(&mut self, item_id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// All entries in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Non-excluded entries in insertion order (the wheel's render order)
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.is_excluded)
    }

    /// IDs of non-excluded entries in insertion order
    pub fn active_ids(&self) -> Vec<u32> {
        self.active_items().map(|item| item.id).collect()
    }

    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every roster plus the active one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStore {
    rosters: Vec<Roster>,
    active_id: Option<u32>,
    /// Next roster ID
    next_roster_id: u32,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Empty store with no rosters
    pub fn new() -> Self {
        Self {
            rosters: Vec::new(),
            active_id: None,
            next_roster_id: 1,
        }
    }

    /// Store seeded with the default roster, active
    pub fn with_defaults(now_ms: u64) -> Self {
        let mut store = Self::new();
        let id = store.add_roster("Default List");
        if let Some(roster) = store.get_mut(id) {
            for value in DEFAULT_ENTRIES {
                roster.add(value, now_ms);
            }
        }
        store
    }

    /// Create a roster. The first roster becomes active automatically.
    pub fn add_roster(&mut self, title: impl Into<String>) -> u32 {
        let id = self.next_roster_id;
        self.next_roster_id += 1;
        self.rosters.push(Roster::new(id, title));
        if self.active_id.is_none() {
            self.active_id = Some(id);
        }
        id
    }

    /// Remove a roster. If it was active, the first remaining roster takes over.
    pub fn remove_roster(&mut self, roster_id: u32) -> bool {
        let before = self.rosters.len();
        self.rosters.retain(|roster| roster.id != roster_id);
        if self.rosters.len() == before {
            return false;
        }
        if self.active_id == Some(roster_id) {
            self.active_id = self.rosters.first().map(|roster| roster.id);
        }
        true
    }

    /// Switch the active roster. Unknown IDs are ignored.
    pub fn set_active(&mut self, roster_id: u32) -> bool {
        if self.rosters.iter().any(|roster| roster.id == roster_id) {
            self.active_id = Some(roster_id);
            true
        } else {
            false
        }
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active_id
    }

    pub fn active(&self) -> Option<&Roster> {
        self.active_id.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Roster> {
        match self.active_id {
            Some(id) => self.get_mut(id),
            None => None,
        }
    }

    pub fn get(&self, roster_id: u32) -> Option<&Roster> {
        self.rosters.iter().find(|roster| roster.id == roster_id)
    }

    pub fn get_mut(&mut self, roster_id: u32) -> Option<&mut Roster> {
        self.rosters.iter_mut().find(|roster| roster.id == roster_id)
    }

    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_uppercases() {
        let mut roster = Roster::new(1, "Test");
        let id = roster.add("  alex  ", 0).unwrap();
        assert_eq!(roster.get(id).unwrap().value, "ALEX");
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut roster = Roster::new(1, "Test");
        assert!(roster.add("   ", 0).is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_active_filtering() {
        let mut roster = Roster::new(1, "Test");
        let a = roster.add("a", 0).unwrap();
        let b = roster.add("b", 0).unwrap();
        let c = roster.add("c", 0).unwrap();
        roster.set_excluded(b, true);

        assert_eq!(roster.active_count(), 2);
        assert_eq!(roster.active_ids(), vec![a, c]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_reinclude_keeps_counters() {
        let mut roster = Roster::new(1, "Test");
        let id = roster.add("a", 0).unwrap();
        roster.mark_selected(id, 500);
        roster.toggle_exclusion(id);
        roster.toggle_exclusion(id);

        let item = roster.get(id).unwrap();
        assert!(!item.is_excluded);
        assert_eq!(item.selection_count, 1);
        assert_eq!(item.last_selected_at_ms, Some(500));
    }

    #[test]
    fn test_reset_counters() {
        let mut roster = Roster::new(1, "Test");
        let id = roster.add("a", 0).unwrap();
        roster.mark_selected(id, 500);
        roster.reset_counters();

        let item = roster.get(id).unwrap();
        assert_eq!(item.selection_count, 0);
        assert_eq!(item.last_selected_at_ms, None);
    }

    #[test]
    fn test_store_active_fallback() {
        let mut store = RosterStore::new();
        assert!(store.active().is_none());

        let first = store.add_roster("First");
        let second = store.add_roster("Second");
        assert_eq!(store.active_id(), Some(first));

        store.set_active(second);
        assert!(store.remove_roster(second));
        assert_eq!(store.active_id(), Some(first));
    }

    #[test]
    fn test_with_defaults() {
        let store = RosterStore::with_defaults(0);
        let roster = store.active().unwrap();
        assert_eq!(roster.len(), DEFAULT_ENTRIES.len());
        assert_eq!(roster.active_count(), DEFAULT_ENTRIES.len());
    }
}
