//! Date-interval conflict checking for the availability filter.

use chrono::NaiveDate;

use crate::models::project::EndBound;

/// A calendar-date interval with a possibly open end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: EndBound,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: EndBound) -> Self {
        DateSpan { start, end }
    }

    /// Whether a candidate project span conflicts with an already-booked
    /// assignment span. Explicit match over all four end-bound combinations:
    ///
    /// - booked open-ended: conflicts with every open-ended project, and with
    ///   any bounded project that does not start strictly after the booking;
    /// - project open-ended: conflicts with any booking that ends on or after
    ///   the project start;
    /// - both bounded: conflicts unless the intervals are disjoint.
    ///
    /// `self` is the candidate project span; the check is directional.
    pub fn conflicts_with(&self, booked: &DateSpan) -> bool {
        match (self.end, booked.end) {
            (EndBound::Unbounded, EndBound::Unbounded) => true,
            (EndBound::Bounded(_), EndBound::Unbounded) => self.start <= booked.start,
            (EndBound::Unbounded, EndBound::Bounded(booked_end)) => booked_end >= self.start,
            (EndBound::Bounded(project_end), EndBound::Bounded(booked_end)) => {
                !(project_end < booked.start || self.start > booked_end)
            }
        }
    }
}
