//! In-memory filtering of the student roster.

use std::collections::BTreeSet;

use crate::types::Student;

/// Conjunction of the roster drop-downs and the free-text search box.
///
/// `None` (or an empty search) leaves that criterion off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterFilter {
    pub search: String,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub section: Option<String>,
}

impl RosterFilter {
    pub fn matches(&self, student: &Student) -> bool {
        self.course.as_ref().is_none_or(|c| *c == student.course)
            && self.year.is_none_or(|y| y == student.year)
            && self.section.as_ref().is_none_or(|s| *s == student.section)
            && self.matches_search(student)
    }

    /// Students passing the filter, in roster order.
    pub fn apply<'a>(&self, roster: &'a [Student]) -> Vec<&'a Student> {
        roster.iter().filter(|s| self.matches(s)).collect()
    }

    /// Case-insensitive substring match against every field.
    fn matches_search(&self, student: &Student) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let year = student.year.to_string();
        let id = student.id.to_string();
        [
            id.as_str(),
            student.student_id.as_str(),
            student.name.as_str(),
            student.rfid_tag.as_str(),
            student.course.as_str(),
            year.as_str(),
            student.section.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Distinct values for the course and section drop-downs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub courses: Vec<String>,
    pub sections: Vec<String>,
}

impl FilterOptions {
    /// Sorted, de-duplicated courses and sections present in `roster`.
    pub fn from_roster(roster: &[Student]) -> Self {
        let courses: BTreeSet<&str> = roster.iter().map(|s| s.course.as_str()).collect();
        let sections: BTreeSet<&str> = roster.iter().map(|s| s.section.as_str()).collect();
        Self {
            courses: courses.into_iter().map(String::from).collect(),
            sections: sections.into_iter().map(String::from).collect(),
        }
    }
}
