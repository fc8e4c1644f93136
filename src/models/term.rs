//! Term grid and horizon constants.
//!
//! The planning horizon is a fixed grid of eight term slots covering four
//! academic years. Slot parity determines the term of year: odd slots are
//! Fall, even slots are Spring. Slot 0 is reserved for courses credited
//! before the horizon begins and carries no load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot in the planning horizon.
///
/// Slots `1..=8` are plannable; slot `0` marks pre-credited courses.
pub type TermSlot = u8;

/// Slot for courses credited before the planning horizon.
pub const COMPLETED_SLOT: TermSlot = 0;

/// First plannable slot (Fall of the first year).
pub const FIRST_SLOT: TermSlot = 1;

/// Last plannable slot (Spring of the fourth year).
pub const LAST_SLOT: TermSlot = 8;

/// Minimum credit hours for a term that carries any load.
pub const MIN_TERM_CREDITS: u32 = 12;

/// Maximum credit hours for any term.
pub const MAX_TERM_CREDITS: u32 = 18;

/// Term of the academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Spring,
    /// Legal in catalog data but never produced by the slot grid, so a
    /// Summer-only course is unschedulable.
    Summer,
}

impl Term {
    /// Term of year implied by a slot's parity (odd = Fall, even = Spring).
    pub fn of_slot(slot: TermSlot) -> Term {
        if slot % 2 == 1 {
            Term::Fall
        } else {
            Term::Spring
        }
    }

    /// Parses a term name as it appears in catalog data.
    pub fn parse(name: &str) -> Option<Term> {
        match name {
            "Fall" => Some(Term::Fall),
            "Spring" => Some(Term::Spring),
            "Summer" => Some(Term::Summer),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
        };
        f.pad(name)
    }
}

/// Class year covering a pair of adjacent slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassYear {
    Frosh,
    Sophomore,
    Junior,
    Senior,
}

impl ClassYear {
    /// Class year containing a plannable slot: slots 1-2 are Frosh,
    /// 3-4 Sophomore, 5-6 Junior, 7-8 Senior.
    pub fn of_slot(slot: TermSlot) -> ClassYear {
        match (slot + 1) / 2 {
            1 => ClassYear::Frosh,
            2 => ClassYear::Sophomore,
            3 => ClassYear::Junior,
            _ => ClassYear::Senior,
        }
    }
}

impl fmt::Display for ClassYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassYear::Frosh => "Frosh",
            ClassYear::Sophomore => "Sophomore",
            ClassYear::Junior => "Junior",
            ClassYear::Senior => "Senior",
        };
        f.pad(name)
    }
}
