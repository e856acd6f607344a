//! Teaching-week calendar: days, periods, and the enumerated slot grid.
//!
//! A week is a short ordered list of day labels, each with its own period
//! list (days may differ, e.g. a shorter Friday). [`WeekGrid`] enumerates
//! every `(day, period)` pair once, in day order then configured period
//! order, and assigns each a stable dense index. The pheromone and
//! visibility tables, and the candidate timetable itself, are all laid out
//! against that index so that iteration order is deterministic.

use std::collections::HashMap;

/// Index into the grid's ordered day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayId(pub(crate) usize);

impl DayId {
    /// Returns the underlying index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A teaching period within a day, as configured by the school (typically
/// 1-based, but any values are accepted).
pub type Period = u32;

/// The atomic schedulable unit: one period on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub day: DayId,
    pub period: Period,
}

impl Slot {
    pub fn new(day: DayId, period: Period) -> Self {
        Self { day, period }
    }
}

/// One day of the request: a label plus its ordered period list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DaySpec {
    pub label: String,
    pub periods: Vec<Period>,
}

impl DaySpec {
    pub fn new(label: impl Into<String>, periods: Vec<Period>) -> Self {
        Self {
            label: label.into(),
            periods,
        }
    }
}

/// The enumerated teaching week.
///
/// Owns the day labels and per-day period lists, plus a flattened slot list
/// giving every slot a dense index in `0..slot_count()`.
#[derive(Debug, Clone)]
pub struct WeekGrid {
    labels: Vec<String>,
    periods: Vec<Vec<Period>>,
    slots: Vec<Slot>,
    offsets: Vec<usize>,
    day_by_label: HashMap<String, DayId>,
}

impl WeekGrid {
    /// Builds a grid from ordered day specs. A duplicate day label keeps the
    /// first occurrence.
    pub fn new(days: &[DaySpec]) -> Self {
        let mut grid = WeekGrid {
            labels: Vec::with_capacity(days.len()),
            periods: Vec::with_capacity(days.len()),
            slots: Vec::new(),
            offsets: Vec::with_capacity(days.len()),
            day_by_label: HashMap::new(),
        };
        for spec in days {
            if grid.day_by_label.contains_key(&spec.label) {
                continue;
            }
            let day = DayId(grid.labels.len());
            grid.day_by_label.insert(spec.label.clone(), day);
            grid.labels.push(spec.label.clone());
            grid.offsets.push(grid.slots.len());
            for &p in &spec.periods {
                grid.slots.push(Slot::new(day, p));
            }
            grid.periods.push(spec.periods.clone());
        }
        grid
    }

    /// Number of days in the week.
    pub fn day_count(&self) -> usize {
        self.labels.len()
    }

    /// Iterates day ids in week order.
    pub fn days(&self) -> impl Iterator<Item = DayId> {
        (0..self.labels.len()).map(DayId)
    }

    /// Returns the label for a day.
    pub fn label(&self, day: DayId) -> &str {
        &self.labels[day.0]
    }

    /// Looks up a day by its label.
    pub fn day(&self, label: &str) -> Option<DayId> {
        self.day_by_label.get(label).copied()
    }

    /// Returns the configured period list for a day.
    pub fn periods(&self, day: DayId) -> &[Period] {
        &self.periods[day.0]
    }

    /// All slots in enumeration order (day order, then period order).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Total number of slots in the week.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the dense index of a slot, or `None` if the period is not
    /// configured for that day. Period lists are short, so a linear scan
    /// suffices.
    pub fn slot_index(&self, slot: Slot) -> Option<usize> {
        let periods = self.periods.get(slot.day.0)?;
        let pos = periods.iter().position(|&p| p == slot.period)?;
        Some(self.offsets[slot.day.0] + pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> WeekGrid {
        WeekGrid::new(&[
            DaySpec::new("Monday", vec![1, 2, 3]),
            DaySpec::new("Tuesday", vec![1, 2]),
        ])
    }

    #[test]
    fn enumerates_slots_in_day_then_period_order() {
        let g = grid();
        assert_eq!(g.slot_count(), 5);
        assert_eq!(g.slots()[0], Slot::new(DayId(0), 1));
        assert_eq!(g.slots()[2], Slot::new(DayId(0), 3));
        assert_eq!(g.slots()[3], Slot::new(DayId(1), 1));
    }

    #[test]
    fn slot_index_round_trips() {
        let g = grid();
        for (idx, &slot) in g.slots().iter().enumerate() {
            assert_eq!(g.slot_index(slot), Some(idx));
        }
    }

    #[test]
    fn slot_index_rejects_unconfigured_period() {
        let g = grid();
        assert_eq!(g.slot_index(Slot::new(DayId(1), 3)), None);
    }

    #[test]
    fn day_lookup_by_label() {
        let g = grid();
        assert_eq!(g.day("Tuesday"), Some(DayId(1)));
        assert_eq!(g.day("Sunday"), None);
        assert_eq!(g.label(DayId(0)), "Monday");
    }

    #[test]
    fn duplicate_day_label_keeps_first() {
        let g = WeekGrid::new(&[
            DaySpec::new("Monday", vec![1, 2]),
            DaySpec::new("Monday", vec![5, 6, 7]),
        ]);
        assert_eq!(g.day_count(), 1);
        assert_eq!(g.periods(DayId(0)), &[1, 2]);
    }

    #[test]
    fn empty_week() {
        let g = WeekGrid::new(&[]);
        assert_eq!(g.day_count(), 0);
        assert_eq!(g.slot_count(), 0);
    }
}
