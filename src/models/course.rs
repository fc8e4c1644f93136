//! Course identity and catalog record.
//!
//! A course is keyed by its program code and designation, e.g. `CS` + `1101`.
//! Degree requirements share the same key space: an abstract requirement such
//! as `CS` + `mathematics` is an ordinary zero-credit catalog row whose
//! prerequisite groups route to concrete courses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Term;

/// Identifies a course or abstract requirement by program and designation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId {
    /// Program code, e.g. `"CS"` or `"EECE-B"`.
    pub program: String,
    /// Designation within the program, e.g. `"1101"` or `"mathematics"`.
    pub designation: String,
}

impl CourseId {
    /// Creates a course id.
    pub fn new(program: impl Into<String>, designation: impl Into<String>) -> Self {
        CourseId {
            program: program.into(),
            designation: designation.into(),
        }
    }

    /// Splits a concatenated course token such as `"CS1101"` into program
    /// and designation.
    ///
    /// The program is a run of uppercase letters, optionally two runs joined
    /// by a single hyphen (`"EECE-B101"` splits as `EECE-B` + `101`). The
    /// split point lies as far right as possible while leaving a non-empty
    /// designation, so an all-uppercase token splits before its final
    /// character. Returns `None` when the token cannot yield both parts.
    pub fn parse(token: &str) -> Option<CourseId> {
        let chars: Vec<char> = token.chars().collect();
        let first = upper_run(&chars, 0);
        if first == 0 {
            return None;
        }
        // Candidate split points, longest first. A split inside the second
        // run must keep at least one letter after the hyphen; a split in the
        // first run must keep at least one letter overall.
        let mut candidates = Vec::new();
        if first < chars.len() && chars[first] == '-' {
            let second = upper_run(&chars, first + 1);
            let mut split = second;
            while split >= first + 2 {
                candidates.push(split);
                split -= 1;
            }
        }
        let mut split = first;
        while split > 0 {
            candidates.push(split);
            split -= 1;
        }
        let split = candidates.into_iter().find(|&s| s < chars.len())?;
        Some(CourseId::new(
            chars[..split].iter().collect::<String>(),
            chars[split..].iter().collect::<String>(),
        ))
    }
}

fn upper_run(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_uppercase() {
        end += 1;
    }
    end
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.program, self.designation)
    }
}

/// Catalog record for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInfo {
    /// Credit hours earned on completion. Zero for linking rows such as
    /// abstract requirements.
    pub credits: u32,
    /// Terms of year in which the course is offered.
    pub terms: Vec<Term>,
    /// Prerequisite alternatives: completing every course in any one group
    /// satisfies the requirement. Empty means no prerequisites.
    pub prereq_groups: Vec<Vec<CourseId>>,
}

impl CourseInfo {
    /// Creates a record with the given credit hours, no offered terms and
    /// no prerequisites.
    pub fn new(credits: u32) -> Self {
        CourseInfo {
            credits,
            terms: Vec::new(),
            prereq_groups: Vec::new(),
        }
    }

    /// Adds a term of year in which the course is offered.
    pub fn offered_in(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }

    /// Adds a prerequisite alternative. Groups are tried in the order they
    /// were added.
    pub fn with_prereq_group(mut self, group: Vec<CourseId>) -> Self {
        self.prereq_groups.push(group);
        self
    }

    /// Whether the course is offered in the given term of year.
    pub fn offered(&self, term: Term) -> bool {
        self.terms.contains(&term)
    }

    /// Whether the course has any prerequisite groups.
    pub fn has_prereqs(&self) -> bool {
        !self.prereq_groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_program_and_designation() {
        assert_eq!(CourseId::parse("CS1101"), Some(CourseId::new("CS", "1101")));
        assert_eq!(
            CourseId::parse("MATH2410"),
            Some(CourseId::new("MATH", "2410"))
        );
        assert_eq!(
            CourseId::parse("CSmathematics"),
            Some(CourseId::new("CS", "mathematics"))
        );
    }

    #[test]
    fn test_parses_hyphenated_program() {
        assert_eq!(
            CourseId::parse("EECE-B101"),
            Some(CourseId::new("EECE-B", "101"))
        );
    }

    #[test]
    fn test_all_uppercase_splits_before_last_char() {
        assert_eq!(CourseId::parse("CS"), Some(CourseId::new("C", "S")));
        assert_eq!(CourseId::parse("AB-CD"), Some(CourseId::new("AB-C", "D")));
    }

    #[test]
    fn test_hyphen_without_second_run_stays_in_designation() {
        assert_eq!(CourseId::parse("A-1"), Some(CourseId::new("A", "-1")));
        // the single letter after the hyphen cannot shrink, so the program
        // falls back to the first run
        assert_eq!(CourseId::parse("AB-C"), Some(CourseId::new("AB", "-C")));
    }

    #[test]
    fn test_rejects_unsplittable_tokens() {
        assert_eq!(CourseId::parse("C"), None);
        assert_eq!(CourseId::parse("cs1101"), None);
        assert_eq!(CourseId::parse(""), None);
        assert_eq!(CourseId::parse("1101"), None);
    }

    #[test]
    fn test_displays_concatenated() {
        assert_eq!(CourseId::new("CS", "1101").to_string(), "CS1101");
        assert_eq!(CourseId::new("EECE-B", "101").to_string(), "EECE-B101");
    }

    #[test]
    fn test_builds_course_info() {
        let info = CourseInfo::new(3)
            .offered_in(Term::Fall)
            .offered_in(Term::Spring)
            .with_prereq_group(vec![CourseId::new("CS", "1101")]);

        assert_eq!(info.credits, 3);
        assert!(info.offered(Term::Fall));
        assert!(info.offered(Term::Spring));
        assert!(!info.offered(Term::Summer));
        assert!(info.has_prereqs());
        assert_eq!(info.prereq_groups.len(), 1);
    }
}
