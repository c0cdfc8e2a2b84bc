//! Directory search.
//!
//! A deliberately naive linear filter: the directory is small, so a scan per
//! query is cheaper than maintaining an index.

use crate::domain::employee::Employee;

/// Return the records whose case-folded `name` or `department` contains the
/// case-folded `query`.
///
/// The result is a new sequence preserving the input order; `records` is never
/// mutated. An empty query matches every record. `role` never participates in
/// matching.
pub fn filter_directory(records: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    use crate::domain::employee::EmployeeId;

    fn record(name: &str, role: &str, department: &str) -> Employee {
        Employee {
            id: EmployeeId::random(),
            name: name.to_owned(),
            role: role.to_owned(),
            department: department.to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn directory() -> Vec<Employee> {
        vec![
            record("Alice", "Recruiter", "HR"),
            record("Bob", "Engineer", "Engineering"),
            record("Carol", "Engineer", "Platform"),
        ]
    }

    #[rstest]
    fn empty_query_returns_all_records_in_order() {
        let records = directory();
        let matches = filter_directory(&records, "");
        assert_eq!(matches, records);
    }

    #[rstest]
    fn department_substring_matches_case_insensitively() {
        let records = directory();
        let matches = filter_directory(&records, "eng");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Bob");
    }

    #[rstest]
    fn name_matches_case_insensitively() {
        let records = directory();
        let matches = filter_directory(&records, "ALICE");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Alice");
    }

    #[rstest]
    fn role_is_never_matched() {
        let records = directory();
        // "Recruiter" only appears in a role field.
        assert!(filter_directory(&records, "recruiter").is_empty());
    }

    #[rstest]
    fn order_is_stable_across_multiple_matches() {
        let records = directory();
        let matches = filter_directory(&records, "o");
        let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Carol"]);
    }

    #[rstest]
    fn input_is_left_untouched() {
        let records = directory();
        let before = records.clone();
        let _matches = filter_directory(&records, "hr");
        assert_eq!(records, before);
    }
}
