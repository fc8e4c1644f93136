//! Backtracking degree planner.
//!
//! # Algorithm
//!
//! 1. Take the first pending goal in insertion order.
//! 2. If it is already scheduled in time, drop it; if it is scheduled later
//!    than its deadline allows, retract it and place it again.
//! 3. Place it in the latest slot at or before its deadline that fits the
//!    load cap and the course's term offerings.
//! 4. Branch over its prerequisite alternatives in declared order, one
//!    frontier copy per group.
//! 5. Recurse. An empty frontier is a solution; an unplaceable goal fails
//!    the whole branch.
//!
//! State is copied at every branch point, so a failed branch is discarded by
//! dropping its copies.
//!
//! # Completeness
//!
//! The search is deliberately incomplete: a goal's slot is fixed once per
//! branch and never reconsidered when a later goal fails, so alternatives
//! are explored only at the prerequisite-group level. "No plan" therefore
//! means "none found by this strategy", not a proof that no schedule exists.
//! Worst-case time is exponential in the number of prerequisite groups.
//!
//! # Reference
//! Russell & Norvig (2010), "Artificial Intelligence: A Modern Approach",
//! Ch. 6: Backtracking Search for CSPs

use std::fmt;

use crate::models::{
    Catalog, CourseId, CourseInfo, Plan, Term, TermSlot, COMPLETED_SLOT, FIRST_SLOT, LAST_SLOT,
};

use super::fill::fill_course_load;
use super::frontier::GoalFrontier;

/// Input container for planning.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Requirements to satisfy by the end of the horizon.
    pub goals: Vec<CourseId>,
    /// Courses credited before the first term.
    pub completed: Vec<CourseId>,
}

impl PlanRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        PlanRequest::default()
    }

    /// Adds a degree requirement.
    pub fn with_goal(mut self, id: CourseId) -> Self {
        self.goals.push(id);
        self
    }

    /// Adds degree requirements.
    pub fn with_goals(mut self, ids: impl IntoIterator<Item = CourseId>) -> Self {
        self.goals.extend(ids);
        self
    }

    /// Adds a course credited before the first term.
    pub fn with_completed(mut self, id: CourseId) -> Self {
        self.completed.push(id);
        self
    }
}

/// Contract violation reported by the planner.
///
/// Infeasibility is not an error; see [`Planner::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A requested goal or a prerequisite of a placed course has no catalog
    /// record.
    UnknownCourse(CourseId),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::UnknownCourse(id) => write!(f, "unknown course '{id}'"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Backtracking planner over a fixed catalog.
///
/// [`search`](Planner::search) runs the backtracking pass alone;
/// [`plan`](Planner::plan) follows it with the course-load fill pass.
///
/// # Example
///
/// ```
/// use degree_plan::models::{Catalog, CourseId, CourseInfo, Term};
/// use degree_plan::solver::{Planner, PlanRequest};
///
/// let catalog = Catalog::new().with_course(
///     CourseId::new("CS", "1101"),
///     CourseInfo::new(3).offered_in(Term::Fall).offered_in(Term::Spring),
/// );
/// let request = PlanRequest::new().with_goal(CourseId::new("CS", "1101"));
///
/// let planner = Planner::new(&catalog);
/// let plan = planner.plan(&request).unwrap().expect("schedulable");
/// assert_eq!(plan.slot_of(&CourseId::new("CS", "1101")), Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Planner<'a> {
    /// Creates a planner over the catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Planner { catalog }
    }

    /// Searches for a schedule satisfying every goal and its transitive
    /// prerequisites.
    ///
    /// Returns `Ok(None)` when no schedule fits the horizon; that is a
    /// normal outcome, not an error. Returns `Err` only when the request or
    /// a reached prerequisite names a course missing from the catalog.
    /// Completed courses are taken on faith and never looked up.
    pub fn search(&self, request: &PlanRequest) -> Result<Option<Plan>, PlanError> {
        let goals = GoalFrontier::from_goals(&request.goals, LAST_SLOT);
        let mut plan = Plan::new();
        for id in &request.completed {
            plan.assign(id.clone(), COMPLETED_SLOT, 0);
        }
        self.satisfy(goals, plan)
    }

    /// Searches, then tops up under-loaded terms with eligible catalog
    /// courses. The fill pass is best-effort; check
    /// [`Plan::meets_load_floor`] for completeness.
    pub fn plan(&self, request: &PlanRequest) -> Result<Option<Plan>, PlanError> {
        let Some(mut plan) = self.search(request)? else {
            return Ok(None);
        };
        fill_course_load(self.catalog, &mut plan);
        Ok(Some(plan))
    }

    fn course(&self, id: &CourseId) -> Result<&CourseInfo, PlanError> {
        self.catalog
            .get(id)
            .ok_or_else(|| PlanError::UnknownCourse(id.clone()))
    }

    /// One search frame: resolve the first pending goal.
    fn satisfy(&self, mut goals: GoalFrontier, mut plan: Plan) -> Result<Option<Plan>, PlanError> {
        let Some((goal, deadline)) = goals.first() else {
            return Ok(Some(plan));
        };
        let goal = goal.clone();

        if let Some(assigned) = plan.slot_of(&goal) {
            if assigned <= deadline {
                goals.remove(&goal);
                return self.satisfy(goals, plan);
            }
            // scheduled too late for this deadline: retract and place again
            let credits = self.course(&goal)?.credits;
            plan.retract(&goal, credits);
        }
        self.place(goal, deadline, goals, plan)
    }

    /// Commits a goal to its latest feasible slot and branches over its
    /// prerequisite groups.
    fn place(
        &self,
        goal: CourseId,
        deadline: TermSlot,
        mut goals: GoalFrontier,
        mut plan: Plan,
    ) -> Result<Option<Plan>, PlanError> {
        let info = self.course(&goal)?;
        let Some(slot) = latest_fit(deadline, &plan, info) else {
            return Ok(None);
        };
        goals.remove(&goal);
        plan.assign(goal.clone(), slot, info.credits);

        // zero-credit rows may share their slot with their prerequisites
        let cutoff = if info.credits > 0 { slot - 1 } else { slot };

        if info.prereq_groups.is_empty() {
            return self.satisfy(goals, plan);
        }
        for group in &info.prereq_groups {
            let mut branch = goals.clone();
            for prereq in group {
                branch.tighten(prereq.clone(), cutoff);
            }
            if branch.is_empty() {
                return Ok(Some(plan));
            }
            if let Some(solution) = self.satisfy(branch, plan.clone())? {
                return Ok(Some(solution));
            }
        }
        Ok(None)
    }
}

/// Latest slot at or before `deadline` whose load stays under the cap and
/// whose term of year the course is offered in.
///
/// Greedy: no rearrangement of committed courses is attempted to free a
/// later slot.
fn latest_fit(deadline: TermSlot, plan: &Plan, info: &CourseInfo) -> Option<TermSlot> {
    (FIRST_SLOT..=deadline)
        .rev()
        .find(|&slot| plan.fits(slot, info.credits) && info.offered(Term::of_slot(slot)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_TERM_CREDITS;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn id(token: &str) -> CourseId {
        CourseId::parse(token).unwrap()
    }

    fn make_course(credits: u32) -> CourseInfo {
        CourseInfo::new(credits)
            .offered_in(Term::Fall)
            .offered_in(Term::Spring)
    }

    /// CS101..CS108, each requiring the previous one.
    fn ladder_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for n in 1..=8 {
            let mut info = make_course(3);
            if n > 1 {
                info = info.with_prereq_group(vec![id(&format!("CS10{}", n - 1))]);
            }
            catalog.insert(id(&format!("CS10{n}")), info);
        }
        catalog
    }

    #[test]
    fn test_single_course_lands_in_last_slot() {
        let catalog = Catalog::new().with_course(id("CS1101"), make_course(3));
        let request = PlanRequest::new().with_goal(id("CS1101"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS1101")), Some(8));
        assert_eq!(plan.load(8), 3);
    }

    #[test]
    fn test_prereq_lands_strictly_earlier() {
        let catalog = Catalog::new()
            .with_course(id("CS1101"), make_course(3))
            .with_course(
                id("CS2201"),
                make_course(3).with_prereq_group(vec![id("CS1101")]),
            );
        let request = PlanRequest::new().with_goal(id("CS2201"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS2201")), Some(8));
        assert_eq!(plan.slot_of(&id("CS1101")), Some(7));
    }

    #[test]
    fn test_completed_goal_needs_no_slot() {
        let catalog = Catalog::new().with_course(id("CS1101"), make_course(3));
        let request = PlanRequest::new()
            .with_goal(id("CS1101"))
            .with_completed(id("CS1101"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS1101")), Some(COMPLETED_SLOT));
        assert_eq!(plan.planned().count(), 0);
    }

    #[test]
    fn test_late_goal_is_retracted_and_replaced() {
        // A is first placed in slot 8, then B's prerequisite edge pulls it
        // forward to slot 7
        let catalog = Catalog::new()
            .with_course(id("CSA"), make_course(3))
            .with_course(id("CSB"), make_course(3).with_prereq_group(vec![id("CSA")]));
        let request = PlanRequest::new()
            .with_goals([id("CSA"), id("CSB")]);

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CSA")), Some(7));
        assert_eq!(plan.slot_of(&id("CSB")), Some(8));
        assert_eq!(plan.load(8), 3);
        assert_eq!(plan.load(7), 3);
    }

    #[test]
    fn test_first_feasible_group_wins() {
        let catalog = Catalog::new()
            .with_course(id("MATH1200"), make_course(4))
            .with_course(id("MATH1300"), make_course(4))
            .with_course(
                id("CS2201"),
                make_course(3)
                    .with_prereq_group(vec![id("MATH1200")])
                    .with_prereq_group(vec![id("MATH1300")]),
            );
        let request = PlanRequest::new().with_goal(id("CS2201"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert!(plan.contains(&id("MATH1200")));
        assert!(!plan.contains(&id("MATH1300")));
    }

    #[test]
    fn test_falls_back_to_second_group() {
        // the preferred alternative is Summer-only and can never be placed
        let catalog = Catalog::new()
            .with_course(id("MATH1200"), CourseInfo::new(4).offered_in(Term::Summer))
            .with_course(id("MATH1300"), make_course(4))
            .with_course(
                id("CS2201"),
                make_course(3)
                    .with_prereq_group(vec![id("MATH1200")])
                    .with_prereq_group(vec![id("MATH1300")]),
            );
        let request = PlanRequest::new().with_goal(id("CS2201"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert!(!plan.contains(&id("MATH1200")));
        assert!(plan.contains(&id("MATH1300")));
    }

    #[test]
    fn test_zero_credit_requirement_shares_its_slot() {
        let catalog = Catalog::new()
            .with_course(id("CS1101"), make_course(3))
            .with_course(
                id("CSmathematics"),
                make_course(0).with_prereq_group(vec![id("CS1101")]),
            );
        let request = PlanRequest::new().with_goal(id("CSmathematics"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CSmathematics")), Some(8));
        assert_eq!(plan.slot_of(&id("CS1101")), Some(8));
        assert_eq!(plan.load(8), 3);
    }

    #[test]
    fn test_chain_fills_every_slot() {
        let catalog = ladder_catalog();
        let request = PlanRequest::new().with_goal(id("CS108"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        for n in 1..=8u8 {
            assert_eq!(plan.slot_of(&id(&format!("CS10{n}"))), Some(n));
        }
    }

    #[test]
    fn test_nine_deep_chain_needs_precredit() {
        let mut catalog = ladder_catalog();
        catalog.insert(id("CS100"), make_course(3));
        catalog.insert(
            id("CS101"),
            make_course(3).with_prereq_group(vec![id("CS100")]),
        );

        let planner = Planner::new(&catalog);
        let bare = PlanRequest::new().with_goal(id("CS108"));
        assert_eq!(planner.search(&bare).unwrap(), None);

        let credited = PlanRequest::new()
            .with_goal(id("CS108"))
            .with_completed(id("CS100"));
        let plan = planner.search(&credited).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS101")), Some(1));
        assert_eq!(plan.slot_of(&id("CS100")), Some(COMPLETED_SLOT));
    }

    #[test]
    fn test_oversized_course_is_infeasible() {
        let catalog = Catalog::new().with_course(id("CS9000"), make_course(20));
        let request = PlanRequest::new().with_goal(id("CS9000"));

        assert_eq!(Planner::new(&catalog).search(&request).unwrap(), None);
    }

    #[test]
    fn test_summer_only_course_is_infeasible() {
        let catalog =
            Catalog::new().with_course(id("CS1101"), CourseInfo::new(3).offered_in(Term::Summer));
        let request = PlanRequest::new().with_goal(id("CS1101"));

        assert_eq!(Planner::new(&catalog).search(&request).unwrap(), None);
    }

    #[test]
    fn test_unknown_goal_errors() {
        let catalog = Catalog::new().with_course(id("CS1101"), make_course(3));
        let request = PlanRequest::new().with_goal(id("CS9999"));

        let err = Planner::new(&catalog).search(&request).unwrap_err();
        assert_eq!(err, PlanError::UnknownCourse(id("CS9999")));
    }

    #[test]
    fn test_unknown_prereq_errors() {
        let catalog = Catalog::new().with_course(
            id("CS2201"),
            make_course(3).with_prereq_group(vec![id("CS9999")]),
        );
        let request = PlanRequest::new().with_goal(id("CS2201"));

        let err = Planner::new(&catalog).search(&request).unwrap_err();
        assert_eq!(err, PlanError::UnknownCourse(id("CS9999")));
        assert_eq!(err.to_string(), "unknown course 'CS9999'");
    }

    #[test]
    fn test_unknown_completed_course_is_tolerated() {
        let catalog = Catalog::new().with_course(id("CS1101"), make_course(3));
        let request = PlanRequest::new()
            .with_goal(id("CS1101"))
            .with_completed(id("XX999"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS1101")), Some(8));
    }

    #[test]
    fn test_load_cap_pushes_goal_earlier() {
        let catalog = Catalog::new()
            .with_course(id("CSA"), make_course(15))
            .with_course(id("CSB"), make_course(4));
        let request = PlanRequest::new().with_goals([id("CSA"), id("CSB")]);

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CSA")), Some(8));
        assert_eq!(plan.slot_of(&id("CSB")), Some(7));
    }

    #[test]
    fn test_shared_prereq_is_placed_once() {
        let catalog = Catalog::new()
            .with_course(id("MATH1200"), make_course(4))
            .with_course(
                id("CSA"),
                make_course(3).with_prereq_group(vec![id("MATH1200")]),
            )
            .with_course(
                id("CSB"),
                make_course(3).with_prereq_group(vec![id("MATH1200")]),
            );
        let request = PlanRequest::new().with_goals([id("CSA"), id("CSB")]);

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.slot_of(&id("MATH1200")), Some(7));
    }

    #[test]
    fn test_empty_prereq_group_is_trivially_satisfied() {
        let catalog = Catalog::new()
            .with_course(id("CS1101"), make_course(3).with_prereq_group(Vec::new()));
        let request = PlanRequest::new().with_goal(id("CS1101"));

        let plan = Planner::new(&catalog).search(&request).unwrap().unwrap();
        assert_eq!(plan.slot_of(&id("CS1101")), Some(8));
    }

    #[test]
    fn test_plan_tops_up_to_the_load_floor() {
        let mut catalog = Catalog::new().with_course(id("CS1101"), make_course(3));
        for n in 1..=5 {
            catalog.insert(id(&format!("HUM10{n}")), make_course(3));
        }
        let request = PlanRequest::new().with_goal(id("CS1101"));

        let plan = Planner::new(&catalog).plan(&request).unwrap().unwrap();
        assert_eq!(plan.load(8), 12);
        assert!(plan.meets_load_floor());
    }

    /// Random layered catalogs: whatever the search returns must respect
    /// prerequisite order, term offerings and the load cap.
    #[test]
    fn test_random_catalogs_yield_sound_plans() {
        const LAYERS: u32 = 4;
        const PER_LAYER: u32 = 6;

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut catalog = Catalog::new();
            for layer in 0..LAYERS {
                for k in 0..PER_LAYER {
                    let mut info = CourseInfo::new(rng.random_range(3..=4));
                    info = match rng.random_range(0..3) {
                        0 => info.offered_in(Term::Fall),
                        1 => info.offered_in(Term::Spring),
                        _ => info.offered_in(Term::Fall).offered_in(Term::Spring),
                    };
                    if layer > 0 {
                        for _ in 0..rng.random_range(0..=2) {
                            let group = (0..rng.random_range(1..=2))
                                .map(|_| {
                                    let k = rng.random_range(0..PER_LAYER);
                                    id(&format!("T{}{}", layer - 1, k))
                                })
                                .collect();
                            info = info.with_prereq_group(group);
                        }
                    }
                    catalog.insert(id(&format!("T{layer}{k}")), info);
                }
            }

            let goals: Vec<CourseId> = (0..3)
                .map(|_| id(&format!("T{}{}", LAYERS - 1, rng.random_range(0..PER_LAYER))))
                .collect();
            let request = PlanRequest::new().with_goals(goals.clone());

            let Some(plan) = Planner::new(&catalog).search(&request).unwrap() else {
                continue;
            };
            for goal in &goals {
                assert!(plan.contains(goal), "seed {seed}: goal {goal} unscheduled");
            }
            for slot in FIRST_SLOT..=LAST_SLOT {
                assert!(plan.load(slot) <= MAX_TERM_CREDITS, "seed {seed}: overload");
            }
            for (course, slot) in plan.planned() {
                let info = catalog.get(course).unwrap();
                assert!(
                    info.offered(Term::of_slot(slot)),
                    "seed {seed}: {course} placed in a term it is not offered in"
                );
                assert!(
                    !info.has_prereqs()
                        || info
                            .prereq_groups
                            .iter()
                            .any(|group| plan.all_before(group, slot)),
                    "seed {seed}: {course} scheduled before its prerequisites"
                );
            }
        }
    }
}
