//! Input validation for planning problems.
//!
//! Checks structural integrity of catalogs and plan requests before
//! planning. Detects:
//! - Prerequisite references to courses missing from the catalog
//! - Requested goals missing from the catalog
//! - Courses offered in no term
//! - Circular prerequisite chains (DAG validation)
//!
//! Validation is advisory: the planner itself fails fast on unknown ids it
//! actually reaches, and treats everything else as search input. The cycle
//! check flattens prerequisite alternatives, so a cycle through any one
//! alternative is flagged even when another alternative would let the
//! planner succeed.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::HashSet;

use crate::models::{Catalog, CourseId};
use crate::solver::PlanRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A requested goal has no catalog record.
    UnknownGoal,
    /// A prerequisite names a course that doesn't exist.
    UnknownPrereq,
    /// A course is offered in no term and can never be placed.
    NoOfferedTerms,
    /// The prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. Every course is offered in at least one term
/// 2. Every prerequisite reference resolves to a catalog record
/// 3. The prerequisite graph has no cycles
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    for (id, info) in catalog.iter() {
        if info.terms.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoOfferedTerms,
                format!("Course '{id}' has no offered terms"),
            ));
        }
        for group in &info.prereq_groups {
            for prereq in group {
                if !catalog.contains(prereq) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownPrereq,
                        format!("Course '{id}' requires unknown course '{prereq}'"),
                    ));
                }
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(catalog) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a plan request against a catalog.
///
/// Every goal must have a catalog record. Completed courses are not
/// checked: they are taken on faith and never looked up by the planner.
pub fn validate_request(catalog: &Catalog, request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for goal in &request.goals {
        if !catalog.contains(goal) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGoal,
                format!("Requested goal '{goal}' is not in the catalog"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists. Prerequisite
/// alternatives are flattened into one edge set.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(catalog: &Catalog) -> Option<ValidationError> {
    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for (id, _) in catalog.iter() {
        if !visited.contains(id) && has_cycle_dfs(catalog, id, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain detected involving '{id}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    catalog: &'a Catalog,
    node: &'a CourseId,
    visited: &mut HashSet<&'a CourseId>,
    in_stack: &mut HashSet<&'a CourseId>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(info) = catalog.get(node) {
        for next in info.prereq_groups.iter().flatten() {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(catalog, next, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
