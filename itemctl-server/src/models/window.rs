//! Offset/limit window for item listing

use serde::Deserialize;

/// Default number of items skipped
const DEFAULT_SKIP: u64 = 0;

/// Default maximum number of items returned
const DEFAULT_LIMIT: u64 = 100;

/// Query parameters for `GET /items`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Resolved listing window.
///
/// `limit` has no upper bound; a caller may ask for the whole table.
// TODO: cap `limit` once existing clients stop relying on unbounded pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    pub skip: u64,
    pub limit: u64,
}

impl ListWindow {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// SQL OFFSET value, saturated to what SQLite accepts.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// SQL LIMIT value, saturated to what SQLite accepts.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<ListParams> for ListWindow {
    fn from(params: ListParams) -> Self {
        Self::new(
            params.skip.unwrap_or(DEFAULT_SKIP),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let w = ListWindow::from(ListParams::default());
        assert_eq!(w, ListWindow::new(0, 100));
    }

    #[test]
    fn explicit_values_pass_through() {
        let w = ListWindow::from(ListParams {
            skip: Some(5),
            limit: Some(100_000),
        });
        assert_eq!(w.offset(), 5);
        assert_eq!(w.limit(), 100_000);
    }

    #[test]
    fn saturates_huge_values() {
        let w = ListWindow::new(u64::MAX, u64::MAX);
        assert_eq!(w.offset(), i64::MAX);
        assert_eq!(w.limit(), i64::MAX);
    }
}
