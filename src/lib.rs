//! Degree plan construction for university course catalogs.
//!
//! Builds multi-year course plans: given a catalog of courses with credit
//! hours, offered terms, and prerequisite alternatives, the solver assigns
//! each requested course and its transitive prerequisites to one of eight
//! term slots so that prerequisites come earlier, every course lands in a
//! term it is offered, and no term exceeds the credit cap. A fill pass then
//! tops under-loaded terms up toward the credit floor.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Catalog`, `CourseId`, `CourseInfo`,
//!   `Plan`, `Term`, `ClassYear`)
//! - **`solver`**: Backtracking search over prerequisite alternatives, plus
//!   the course-load fill pass
//! - **`validation`**: Advisory input checks (unknown references, missing
//!   offered terms, prerequisite cycles)
//! - **`report`**: Serializable plan summaries ordered by term
//! - **`xlsx`**: Catalog loading from spreadsheet workbooks
//!
//! # Architecture
//!
//! The crate is a pipeline: `xlsx` (or hand-built `Catalog` values) feeds
//! `validation`, the `solver` turns a `PlanRequest` into a `Plan`, and
//! `report` renders the result. Each stage only consumes the models layer,
//! so any stage can be used on its own.
//!
//! # References
//!
//! - Russell & Norvig (2010), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Dechter (2003), "Constraint Processing"

pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
pub mod xlsx;
