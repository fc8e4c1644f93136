//! Human-facing schedule reports.
//!
//! Converts a finished plan's slot assignments into term and class-year
//! form, dropping pre-credited entries. The report is the serialization
//! surface of the crate: plain vectors, no map keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Catalog, ClassYear, CourseId, Plan, Term, TermSlot};

/// One scheduled course in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// The course.
    pub course: CourseId,
    /// Term of year, from slot parity.
    pub term: Term,
    /// Class year, from the slot pair.
    pub year: ClassYear,
    /// The assigned slot.
    pub slot: TermSlot,
    /// Credit hours, from the catalog.
    pub credits: u32,
}

/// The externally visible schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Scheduled courses, ordered by slot and then course id.
    pub courses: Vec<ScheduledCourse>,
    /// Whether every term that carries load reached the credit floor.
    pub complete: bool,
}

impl PlanReport {
    /// Builds the report for a plan.
    ///
    /// Pre-credited entries (slot 0) are dropped. Credits come from the
    /// catalog; a course the catalog does not list reports zero credits.
    pub fn from_plan(plan: &Plan, catalog: &Catalog) -> Self {
        let mut courses: Vec<ScheduledCourse> = plan
            .planned()
            .map(|(id, slot)| ScheduledCourse {
                course: id.clone(),
                term: Term::of_slot(slot),
                year: ClassYear::of_slot(slot),
                slot,
                credits: catalog.get(id).map_or(0, |info| info.credits),
            })
            .collect();
        courses.sort_by(|a, b| a.slot.cmp(&b.slot).then_with(|| a.course.cmp(&b.course)));

        PlanReport {
            courses,
            complete: plan.meets_load_floor(),
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for course in &self.courses {
            writeln!(
                f,
                "{:<6} {:<9} {} ({} cr)",
                course.term, course.year, course.course, course.credits
            )?;
        }
        if !self.complete {
            writeln!(f, "note: some terms are below the credit floor")?;
        }
        Ok(())
    }
}
