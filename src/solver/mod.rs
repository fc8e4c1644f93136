//! Backtracking planner and course-load fill.
//!
//! Provides the depth-first planner that assigns goals and their transitive
//! prerequisites to term slots, and the greedy pass that tops up
//! under-loaded terms afterwards.
//!
//! # Algorithm
//!
//! `Planner` is a branch-copy backtracking search: frontier and plan are
//! cloned at every prerequisite alternative, and a failed branch is undone
//! by dropping its copies. Placement is latest-fit and final within a
//! branch, which keeps the search fast but deliberately incomplete; see
//! `search` for the exact contract.
//!
//! # References
//!
//! - Russell & Norvig (2010), "Artificial Intelligence: A Modern Approach", Ch. 3 and 6
//! - Dechter (2003), "Constraint Processing", Ch. 5: Backtracking Search

mod fill;
mod frontier;
mod search;

pub use fill::fill_course_load;
pub use frontier::GoalFrontier;
pub use search::{PlanError, PlanRequest, Planner};
