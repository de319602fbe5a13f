use chrono::NaiveDate;
use crewdesk_core::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Inclusive date range used by history queries.
///
/// The start bound is optional; a window without one covers everything up
/// to and including `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::validation(format!(
                "window start {start} is after its end {end}"
            )));
        }
        Ok(Self {
            start: Some(start),
            end,
        })
    }

    /// Open-ended window covering everything up to `end`.
    pub fn up_to(end: NaiveDate) -> Self {
        Self { start: None, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if date > self.end {
            return false;
        }
        match self.start {
            Some(start) => date >= start,
            None => true,
        }
    }
}
