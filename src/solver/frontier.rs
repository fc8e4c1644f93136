//! Goal frontier: pending requirements and their deadlines.

use crate::models::{CourseId, TermSlot};

/// Insertion-ordered map from a pending requirement to the latest slot by
/// which it must be satisfied.
///
/// The search always works on the first goal in insertion order, which keeps
/// runs over the same input deterministic. Branches clone the frontier, so a
/// failed branch leaves the parent's copy untouched.
///
/// Deadlines normally sit in `1..=8`. Deadline 0 can arise for prerequisites
/// of a course placed in the first slot; only a pre-credited course can
/// satisfy it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFrontier {
    goals: Vec<(CourseId, TermSlot)>,
}

impl GoalFrontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        GoalFrontier::default()
    }

    /// Builds a frontier giving every goal the same deadline. Duplicate ids
    /// collapse into one entry.
    pub fn from_goals(goals: &[CourseId], deadline: TermSlot) -> Self {
        let mut frontier = GoalFrontier::new();
        for id in goals {
            frontier.tighten(id.clone(), deadline);
        }
        frontier
    }

    /// First pending goal in insertion order.
    pub fn first(&self) -> Option<(&CourseId, TermSlot)> {
        self.goals.first().map(|(id, deadline)| (id, *deadline))
    }

    /// Inserts a goal, or tightens an existing entry's deadline to the
    /// smaller of the two. Insertion position never changes.
    pub fn tighten(&mut self, id: CourseId, deadline: TermSlot) {
        match self.goals.iter_mut().find(|(goal, _)| *goal == id) {
            Some((_, existing)) => *existing = (*existing).min(deadline),
            None => self.goals.push((id, deadline)),
        }
    }

    /// Removes a goal, returning its deadline.
    pub fn remove(&mut self, id: &CourseId) -> Option<TermSlot> {
        let pos = self.goals.iter().position(|(goal, _)| goal == id)?;
        Some(self.goals.remove(pos).1)
    }

    /// Deadline of a pending goal, if present.
    pub fn deadline_of(&self, id: &CourseId) -> Option<TermSlot> {
        self.goals
            .iter()
            .find(|(goal, _)| goal == id)
            .map(|(_, deadline)| *deadline)
    }

    /// Number of pending goals.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether no goal is pending.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Iterates pending goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseId, TermSlot)> {
        self.goals.iter().map(|(id, deadline)| (id, *deadline))
    }
}
