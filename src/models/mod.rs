//! Degree-planning domain models.
//!
//! Provides the core data types for representing planning problems and
//! schedules. The horizon is a fixed eight-slot grid; everything else is
//! catalog data.
//!
//! # Concept Mappings
//!
//! | Type | Planning concept |
//! |------|------------------|
//! | `CourseId` | Course or abstract degree requirement |
//! | `CourseInfo` | Catalog row: credits, offered terms, prerequisite groups |
//! | `Catalog` | Insertion-ordered course collection |
//! | `TermSlot` | Position in the eight-term horizon (0 = pre-credited) |
//! | `Plan` | Course-to-slot assignments with per-term loads |

mod catalog;
mod course;
mod plan;
mod term;

pub use catalog::Catalog;
pub use course::{CourseId, CourseInfo};
pub use plan::Plan;
pub use term::{
    ClassYear, Term, TermSlot, COMPLETED_SLOT, FIRST_SLOT, LAST_SLOT, MAX_TERM_CREDITS,
    MIN_TERM_CREDITS,
};
