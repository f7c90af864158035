//! Flat parent-pointer records.
//!
//! Anything stored as `(id, parent_id, sort)` rows can be turned into a [crate::forest::Forest]
//! by implementing [TreeRecord].

use crate::error::AdminError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait TreeRecord {
    type Id: Clone + Ord + fmt::Debug + fmt::Display;

    fn id(&self) -> &Self::Id;
    fn parent_id(&self) -> &Self::Id;
    /// Ascending sibling order.
    fn sort_key(&self) -> i32;
    fn name(&self) -> &str;

    /// Status flag used by [RecordFilter]. Records without one are never filtered on status.
    fn status(&self) -> Option<i32> {
        None
    }
}

/// Listing filter mirroring the `name LIKE %x%` / `status = y` conditions of the admin tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl RecordFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        RecordFilter {
            name: Some(name.into()),
            status: None,
        }
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    /// Blank names match everything; non-blank names match case-insensitive substrings.
    pub fn matches<R: TreeRecord>(&self, record: &R) -> bool {
        let name_ok = match self.name.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => record
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        let status_ok = match (self.status, record.status()) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        };
        name_ok && status_ok
    }

    pub fn apply<R: TreeRecord + Clone>(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Stable ascending sort on [TreeRecord::sort_key]; equal keys keep their load order.
pub fn sort_records<R: TreeRecord>(records: &mut [R]) {
    records.sort_by_key(|r| r.sort_key());
}

/// Parse a comma-separated id list such as `"1,2, 3"`. Empty segments are skipped; an empty
/// list or a segment that is not an integer is rejected.
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, AdminError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|e| AdminError::InvalidRecord(format!("invalid id '{part}': {e}")))
        })
        .collect::<Result<Vec<i64>, AdminError>>()?;
    if ids.is_empty() {
        return Err(AdminError::InvalidRecord(format!("no ids in '{raw}'")));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[derive(Debug, Clone)]
    struct Row {
        id: u32,
        parent: u32,
        sort: i32,
        name: &'static str,
        status: Option<i32>,
    }

    impl TreeRecord for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn parent_id(&self) -> &u32 {
            &self.parent
        }

        fn sort_key(&self) -> i32 {
            self.sort
        }

        fn name(&self) -> &str {
            self.name
        }

        fn status(&self) -> Option<i32> {
            self.status
        }
    }

    fn row(id: u32, sort: i32, name: &'static str, status: Option<i32>) -> Row {
        Row {
            id,
            parent: 0,
            sort,
            name,
            status,
        }
    }

    #[test]
    fn test_blank_name_filter_matches_everything() {
        let filter = RecordFilter::by_name("   ");
        assert!(filter.matches(&row(1, 0, "System", None)));
        assert!(RecordFilter::default().matches(&row(1, 0, "System", Some(0))));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = RecordFilter::by_name("user");
        assert!(filter.matches(&row(1, 0, "Users", None)));
        assert!(filter.matches(&row(2, 0, "Online USER list", None)));
        assert!(!filter.matches(&row(3, 0, "Roles", None)));
    }

    #[test]
    fn test_status_filter_ignores_records_without_status() {
        let filter = RecordFilter::default().with_status(1);
        assert!(filter.matches(&row(1, 0, "a", Some(1))));
        assert!(!filter.matches(&row(2, 0, "b", Some(0))));
        assert!(filter.matches(&row(3, 0, "c", None)));
    }

    #[test]
    fn test_sort_records_is_stable() {
        let mut rows = vec![
            row(1, 2, "a", None),
            row(2, 1, "b", None),
            row(3, 2, "c", None),
            row(4, 1, "d", None),
        ];
        sort_records(&mut rows);
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids("1,2, 3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_ids(" 7 ,,").unwrap(), vec![7]);
        assert!(matches!(parse_ids(" , "), Err(AdminError::InvalidRecord(_))));
        assert!(matches!(parse_ids("1,x"), Err(AdminError::InvalidRecord(_))));
    }
}
