//! Selection lifecycle controller
//!
//! Drives everything that happens around a spin: counter updates, the
//! history record, the announcement to the presentation layer, and the
//! delayed auto-exclusion. Time is a virtual clock the host advances from
//! its own loop; pending exclusions are plain data fired by `advance_to`,
//! so the whole lifecycle is deterministic and testable without real timers.
//!
//! Timers are fire-and-forget: re-selecting an entry arms a second,
//! independent timer rather than rescheduling the first. A timer that finds
//! its work already done (entry excluded, deleted, or on a roster that is
//! no longer active) fires as a silent no-op.

use rand_pcg::Pcg32;

use super::rotation::{RngState, calculate_target_rotation};
use crate::consts::{AUTO_EXCLUDE_DELAY_MS, SPIN_DURATION_MS};
use crate::history::{SelectionHistory, SelectionMethod};
use crate::roster::RosterStore;
use crate::settings::Settings;

/// Everything the animation layer needs to run one spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub roster_id: u32,
    /// Entry that will sit at the marker once the animation finishes
    pub item_id: u32,
    /// Index of that entry within the active pool at draw time
    pub final_index: usize,
    /// Cumulative rotation to animate to
    pub target_rotation: f64,
    pub duration_ms: u64,
}

/// Notifications for the presentation layer, drained via `take_events`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A selection was finalized; show the toast
    SelectionAnnounced {
        item_id: u32,
        value: String,
        timestamp_ms: u64,
    },
    /// An entry left the active pool
    ItemExcluded { item_id: u32 },
    /// The displayed selection should be dismissed
    SelectionCleared,
}

/// A scheduled auto-exclusion. Never cancelled; superseded timers no-op.
#[derive(Debug, Clone, Copy)]
struct PendingExclusion {
    roster_id: u32,
    item_id: u32,
    fires_at_ms: u64,
}

/// One picker session: rosters, history, settings, and the spin lifecycle
#[derive(Debug)]
pub struct Session {
    pub rosters: RosterStore,
    pub history: SelectionHistory,
    pub settings: Settings,
    /// RNG state (seed kept for reproducibility)
    rng_state: RngState,
    rng: Pcg32,
    /// Cumulative wheel rotation in degrees; only ever decreases
    rotation: f64,
    /// Virtual clock (ms); advanced by the host, never by the engine
    now_ms: u64,
    pending: Vec<PendingExclusion>,
    events: Vec<SessionEvent>,
    /// Currently displayed selection, if any
    current_selection: Option<(u32, u32)>,
}

impl Session {
    /// Session with an empty roster store
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let rng = rng_state.to_rng();
        Self {
            rosters: RosterStore::new(),
            history: SelectionHistory::new(),
            settings: Settings::default(),
            rng_state,
            rng,
            rotation: 0.0,
            now_ms: 0,
            pending: Vec::new(),
            events: Vec::new(),
            current_selection: None,
        }
    }

    /// Session seeded with the default roster
    pub fn with_defaults(seed: u64) -> Self {
        let mut session = Self::new(seed);
        session.rosters = RosterStore::with_defaults(0);
        session
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Entry currently shown as selected, if any
    pub fn current_selection(&self) -> Option<u32> {
        self.current_selection.map(|(_, item_id)| item_id)
    }

    /// Dismiss the displayed selection (user closed the toast)
    pub fn clear_selection(&mut self) {
        self.current_selection = None;
    }

    /// Number of armed exclusion timers
    pub fn pending_exclusions(&self) -> usize {
        self.pending.len()
    }

    /// Drain queued presentation events
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the virtual clock forward and fire due exclusion timers in
    /// arming order. Moving backward is ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            return;
        }
        self.now_ms = now_ms;

        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].fires_at_ms <= now_ms {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        for timer in due {
            self.fire_exclusion(timer);
        }
    }

    /// Draw the next spin from the live active pool.
    ///
    /// Returns `None` when the pool is empty - the host must disable the
    /// spin trigger in that state, this is the matching guard.
    pub fn spin(&mut self) -> Option<SpinPlan> {
        let (roster_id, active) = match self.rosters.active() {
            Some(roster) => (roster.id, roster.active_ids()),
            None => return None,
        };
        if active.is_empty() {
            return None;
        }

        let target = calculate_target_rotation(self.rotation, active.len(), &mut self.rng);
        self.rotation = target.target_rotation;
        let item_id = active[target.final_index];

        log::debug!(
            "spin: {} active entries, index {} (item {}) lands at {:.2} deg",
            active.len(),
            target.final_index,
            item_id,
            target.target_rotation
        );

        Some(SpinPlan {
            roster_id,
            item_id,
            final_index: target.final_index,
            target_rotation: target.target_rotation,
            duration_ms: SPIN_DURATION_MS,
        })
    }

    /// Finalize a spin once the animation has genuinely finished.
    ///
    /// `roster_id` and `item_id` come from the `SpinPlan`. Synchronously
    /// bumps the entry's counter and timestamp, appends a history record,
    /// announces the selection, and - when auto-exclusion is enabled right
    /// now - arms a one-shot exclusion timer. Silent no-ops: an unknown
    /// `item_id` (deleted mid-animation), or a plan whose roster is no
    /// longer the active one (entry ids are per-roster counters, so an
    /// aliased id on another roster must never absorb the completion).
    pub fn complete_spin(&mut self, roster_id: u32, item_id: u32) {
        let now = self.now_ms;
        // A list switch mid-animation orphans the spin
        if self.rosters.active_id() != Some(roster_id) {
            return;
        }
        let value = {
            let Some(roster) = self.rosters.active_mut() else {
                return;
            };
            let Some(item) = roster.get(item_id) else {
                return;
            };
            let value = item.value.clone();
            roster.mark_selected(item_id, now);
            value
        };

        self.history
            .record(roster_id, item_id, &value, now, SelectionMethod::Wheel);
        self.events.push(SessionEvent::SelectionAnnounced {
            item_id,
            value,
            timestamp_ms: now,
        });
        self.current_selection = Some((roster_id, item_id));

        if self.settings.auto_exclude_enabled {
            self.pending.push(PendingExclusion {
                roster_id,
                item_id,
                fires_at_ms: now + AUTO_EXCLUDE_DELAY_MS,
            });
        }
    }

    /// Manual selection bypassing the wheel.
    ///
    /// Marks the entry selected, records history with the volunteer method,
    /// and excludes it immediately - no delay and no last-entry guard, an
    /// explicit user action may empty the pool. Returns false if the entry
    /// is missing or already excluded.
    pub fn volunteer_pick(&mut self, item_id: u32) -> bool {
        let now = self.now_ms;
        let (roster_id, value) = {
            let Some(roster) = self.rosters.active_mut() else {
                return false;
            };
            let value = match roster.get(item_id) {
                Some(item) if !item.is_excluded => item.value.clone(),
                _ => return false,
            };
            roster.mark_selected(item_id, now);
            roster.set_excluded(item_id, true);
            (roster.id, value)
        };

        self.history
            .record(roster_id, item_id, &value, now, SelectionMethod::Volunteer);
        self.events.push(SessionEvent::SelectionAnnounced {
            item_id,
            value,
            timestamp_ms: now,
        });
        self.events.push(SessionEvent::ItemExcluded { item_id });
        self.current_selection = Some((roster_id, item_id));
        true
    }

    /// Add an entry to the active roster
    pub fn add_item(&mut self, value: &str) -> Option<u32> {
        let now = self.now_ms;
        self.rosters.active_mut()?.add(value, now)
    }

    /// Delete an entry from the active roster
    pub fn remove_item(&mut self, item_id: u32) -> bool {
        match self.rosters.active_mut() {
            Some(roster) => roster.remove(item_id),
            None => false,
        }
    }

    /// Flip an entry's exclusion state on the active roster
    pub fn toggle_exclusion(&mut self, item_id: u32) -> bool {
        match self.rosters.active_mut() {
            Some(roster) => roster.toggle_exclusion(item_id),
            None => false,
        }
    }

    /// Reset counters and timestamps on the active roster
    pub fn reset_counters(&mut self) {
        if let Some(roster) = self.rosters.active_mut() {
            roster.reset_counters();
        }
    }

    /// Fire one due timer against live state. Every early return here is a
    /// defined steady-state no-op, not a failure - nothing is logged.
    fn fire_exclusion(&mut self, timer: PendingExclusion) {
        // The flag is re-read at fire time, not capture time
        if !self.settings.auto_exclude_enabled {
            return;
        }
        // A list switch orphans the timer
        if self.rosters.active_id() != Some(timer.roster_id) {
            return;
        }
        let Some(roster) = self.rosters.active_mut() else {
            return;
        };
        let Some(item) = roster.get(timer.item_id) else {
            return;
        };
        if item.is_excluded {
            return;
        }
        // Never auto-exclude the last active entry
        if roster.active_count() <= 1 {
            return;
        }

        roster.set_excluded(timer.item_id, true);
        log::debug!("auto-excluded item {} after delay", timer.item_id);
        self.events.push(SessionEvent::ItemExcluded {
            item_id: timer.item_id,
        });

        if self.settings.clear_selection_after_exclude
            && self.current_selection == Some((timer.roster_id, timer.item_id))
        {
            self.current_selection = None;
            self.events.push(SessionEvent::SelectionCleared);
        }
    }
}
