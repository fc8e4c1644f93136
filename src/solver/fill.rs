//! Course-load fill pass.
//!
//! The search places only required courses, so terms it touched may sit
//! below the credit floor. This pass tops them up with arbitrary eligible
//! catalog courses. It moves through slots strictly forward and never
//! removes or relocates anything the plan already holds.

use crate::models::{
    Catalog, CourseId, CourseInfo, Plan, Term, TermSlot, FIRST_SLOT, LAST_SLOT, MIN_TERM_CREDITS,
};

/// Tops up under-loaded slots to the credit floor.
///
/// Starts at the first slot whose load is nonzero but below the floor and
/// scans the catalog in insertion order, committing any course eligible at
/// the current slot: unscheduled, within the load cap, offered in the slot's
/// term, and with some prerequisite group fully scheduled strictly earlier.
/// Once a slot reaches the floor the pass advances, skipping slots already
/// there; empty slots past the starting point become fill targets too. The
/// pass ends past the last slot, or leaves a slot short when the catalog has
/// no eligible filler left for it.
///
/// A short slot is a partial result reported by [`Plan::meets_load_floor`],
/// not an error. Re-running the pass on its own output changes nothing.
pub fn fill_course_load(catalog: &Catalog, plan: &mut Plan) {
    let Some(mut slot) = first_underloaded(plan) else {
        return;
    };
    while slot <= LAST_SLOT {
        let mut progressed = false;
        for (id, info) in catalog.iter() {
            if !eligible(plan, slot, id, info) {
                continue;
            }
            plan.assign(id.clone(), slot, info.credits);
            progressed = true;
            if plan.load(slot) >= MIN_TERM_CREDITS {
                slot = next_open_slot(plan, slot);
                if slot > LAST_SLOT {
                    return;
                }
            }
        }
        if !progressed {
            // nothing in the catalog can raise this slot: leave it short
            slot = next_open_slot(plan, slot);
        }
    }
}

/// First slot carrying some load but less than the floor.
fn first_underloaded(plan: &Plan) -> Option<TermSlot> {
    (FIRST_SLOT..=LAST_SLOT).find(|&slot| {
        let load = plan.load(slot);
        load > 0 && load < MIN_TERM_CREDITS
    })
}

/// Next slot after `slot` that still needs hours. Slots at or above the
/// floor are skipped; empty slots are not.
fn next_open_slot(plan: &Plan, mut slot: TermSlot) -> TermSlot {
    slot += 1;
    while slot <= LAST_SLOT && plan.load(slot) >= MIN_TERM_CREDITS {
        slot += 1;
    }
    slot
}

/// Whether a catalog course can be added to the slot right now.
fn eligible(plan: &Plan, slot: TermSlot, id: &CourseId, info: &CourseInfo) -> bool {
    !plan.contains(id)
        && plan.fits(slot, info.credits)
        && info.offered(Term::of_slot(slot))
        && (info.prereq_groups.is_empty()
            || info
                .prereq_groups
                .iter()
                .any(|group| plan.all_before(group, slot)))
}
