//! Append-only selection log
//!
//! One record per completed spin or volunteer pick. Records are never
//! mutated after creation; they can only be removed individually or in bulk.

use serde::{Deserialize, Serialize};

/// How a selection was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    /// Chosen by the spinning wheel
    Wheel,
    /// Manually volunteered, bypassing the randomizer
    Volunteer,
}

impl SelectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMethod::Wheel => "wheel",
            SelectionMethod::Volunteer => "volunteer",
        }
    }
}

/// A single selection log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub id: u32,
    /// Roster the entry belonged to at selection time
    pub roster_id: u32,
    pub item_id: u32,
    /// Display text captured at selection time (survives later renames/deletes)
    pub item_value: String,
    pub timestamp_ms: u64,
    pub method: SelectionMethod,
}

/// The selection log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionHistory {
    records: Vec<SelectionRecord>,
    /// Next record ID
    next_id: u32,
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a record, returning its ID
    pub fn record(
        &mut self,
        roster_id: u32,
        item_id: u32,
        item_value: &str,
        timestamp_ms: u64,
        method: SelectionMethod,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(SelectionRecord {
            id,
            roster_id,
            item_id,
            item_value: item_value.to_string(),
            timestamp_ms,
            method,
        });
        id
    }

    /// Delete one record. Returns true if it existed.
    pub fn remove(&mut self, record_id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != record_id);
        self.records.len() != before
    }

    /// Delete every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in append order (oldest first)
    pub fn records(&self) -> &[SelectionRecord] {
        &self.records
    }

    /// Most recent record, if any
    pub fn latest(&self) -> Option<&SelectionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
