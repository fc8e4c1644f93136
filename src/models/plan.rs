//! Partial schedule with per-term load accounting.

use std::collections::HashMap;

use super::{CourseId, TermSlot, FIRST_SLOT, LAST_SLOT, MAX_TERM_CREDITS, MIN_TERM_CREDITS};

/// A partial schedule: course-to-slot assignments plus the running
/// credit-hour load of every plannable slot.
///
/// The load table is derived state. [`assign`](Plan::assign) and
/// [`retract`](Plan::retract) keep `load(t)` equal to the credit sum of the
/// courses at `t` for every plannable slot; slot 0 carries no load. The
/// planner clones plans at branch points, so `Clone` stays cheap relative to
/// the search itself and a dropped clone undoes a failed branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    courses: HashMap<CourseId, TermSlot>,
    loads: [u32; LAST_SLOT as usize + 1],
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Plan::default()
    }

    /// Assigns a course to a slot and adds its credits to the slot's load.
    ///
    /// Slot 0 assignments record pre-credited courses and never touch the
    /// load table. The course must not already be assigned; re-assignment
    /// requires a `retract` first.
    pub fn assign(&mut self, id: CourseId, slot: TermSlot, credits: u32) {
        self.courses.insert(id, slot);
        if slot >= FIRST_SLOT {
            self.loads[slot as usize] += credits;
        }
    }

    /// Removes a course, subtracting its credits from its slot's load.
    /// Returns the slot it was assigned to.
    ///
    /// `credits` must match the value passed to `assign`.
    pub fn retract(&mut self, id: &CourseId, credits: u32) -> Option<TermSlot> {
        let slot = self.courses.remove(id)?;
        if slot >= FIRST_SLOT {
            self.loads[slot as usize] -= credits;
        }
        Some(slot)
    }

    /// Builder form of a slot-0 assignment, for courses credited before the
    /// horizon.
    pub fn with_completed(mut self, id: CourseId) -> Self {
        self.assign(id, super::COMPLETED_SLOT, 0);
        self
    }

    /// The slot a course is assigned to, if any.
    pub fn slot_of(&self, id: &CourseId) -> Option<TermSlot> {
        self.courses.get(id).copied()
    }

    /// Whether the course is assigned anywhere, slot 0 included.
    pub fn contains(&self, id: &CourseId) -> bool {
        self.courses.contains_key(id)
    }

    /// Credit-hour load of a slot. Slot 0 is always zero.
    pub fn load(&self, slot: TermSlot) -> u32 {
        self.loads[slot as usize]
    }

    /// Whether adding `credits` to the slot stays within the load cap.
    pub fn fits(&self, slot: TermSlot, credits: u32) -> bool {
        self.load(slot) + credits <= MAX_TERM_CREDITS
    }

    /// Whether every course in the group is assigned strictly before `slot`.
    /// Pre-credited courses (slot 0) count as before every plannable slot.
    pub fn all_before(&self, group: &[CourseId], slot: TermSlot) -> bool {
        group
            .iter()
            .all(|id| self.slot_of(id).is_some_and(|s| s < slot))
    }

    /// Iterates assignments in plannable slots, skipping slot 0.
    pub fn planned(&self) -> impl Iterator<Item = (&CourseId, TermSlot)> {
        self.courses
            .iter()
            .filter(|(_, &slot)| slot >= FIRST_SLOT)
            .map(|(id, &slot)| (id, slot))
    }

    /// Whether every slot that carries any load has reached the credit
    /// floor. Empty slots do not count against the floor.
    pub fn meets_load_floor(&self) -> bool {
        (FIRST_SLOT..=LAST_SLOT)
            .all(|slot| self.load(slot) == 0 || self.load(slot) >= MIN_TERM_CREDITS)
    }

    /// Number of assigned courses, slot 0 included.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course is assigned.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
