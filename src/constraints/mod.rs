//! Blackout-window constraints and the slot-validity predicate.
//!
//! Three layers of windows remove slots from play: school-wide break times,
//! the school-wide fellowship block, and per-class-arm blackouts. A slot is
//! usable for a class arm iff it falls outside all windows that apply to it.
//! Range checks are inclusive on both ends (`start <= period <= end`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calendar::{DayId, Period, Slot, WeekGrid};
use crate::roster::ClassArmId;

/// A configured blackout range, keyed by day label as it arrives from the
/// surrounding system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutWindow {
    pub day: String,
    pub start: Period,
    pub end: Period,
}

impl BlackoutWindow {
    pub fn new(day: impl Into<String>, start: Period, end: Period) -> Self {
        Self {
            day: day.into(),
            start,
            end,
        }
    }
}

/// Raw constraint input for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRecords {
    /// School-wide break times.
    pub break_times: Vec<BlackoutWindow>,
    /// School-wide fellowship block, if the school observes one.
    pub fellowship_time: Option<BlackoutWindow>,
    /// Additional blackouts per class arm, keyed by arm name.
    pub per_class: HashMap<String, Vec<BlackoutWindow>>,
}

/// A window resolved against the grid's day ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    day: DayId,
    start: Period,
    end: Period,
}

impl Window {
    fn covers(&self, slot: Slot) -> bool {
        slot.day == self.day && self.start <= slot.period && slot.period <= self.end
    }
}

/// Resolved constraints for one scheduling run.
///
/// Built once during assembly; afterwards [`ConstraintSet::allows`] is a
/// pure predicate over `(class arm, slot)`.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    global: Vec<Window>,
    per_arm: Vec<Vec<Window>>,
}

impl ConstraintSet {
    /// Resolves raw records against the grid and the interned arm list.
    ///
    /// Windows naming a day outside the grid, or an arm outside the roster,
    /// can never match a real slot and are dropped here.
    pub fn resolve(records: &ConstraintRecords, grid: &WeekGrid, arm_names: &[String]) -> Self {
        let resolve_one = |w: &BlackoutWindow| {
            grid.day(&w.day).map(|day| Window {
                day,
                start: w.start,
                end: w.end,
            })
        };

        let mut global: Vec<Window> = records.break_times.iter().filter_map(resolve_one).collect();
        if let Some(ft) = &records.fellowship_time {
            if let Some(w) = resolve_one(ft) {
                global.push(w);
            }
        }

        let per_arm = arm_names
            .iter()
            .map(|name| {
                records
                    .per_class
                    .get(name)
                    .map(|windows| windows.iter().filter_map(resolve_one).collect())
                    .unwrap_or_default()
            })
            .collect();

        Self { global, per_arm }
    }

    /// An empty set that allows every slot.
    pub fn unrestricted(arm_count: usize) -> Self {
        Self {
            global: Vec::new(),
            per_arm: vec![Vec::new(); arm_count],
        }
    }

    /// Returns true iff `slot` is usable for `arm`: outside every global
    /// window and every blackout configured for that arm.
    pub fn allows(&self, arm: ClassArmId, slot: Slot) -> bool {
        if self.global.iter().any(|w| w.covers(slot)) {
            return false;
        }
        !self.per_arm[arm.index()].iter().any(|w| w.covers(slot))
    }
}
