#![allow(dead_code)]

//! Per-run booking record for every programmer.

use std::collections::HashMap;

use crate::assignment::interval::DateSpan;
use crate::models::profile::Profile;
use crate::models::project::Assignment;

/// Maps programmer id to the assignments made so far during one engine run.
/// Starts empty, grows monotonically, and is discarded at the end of the run
/// — only the denormalized `assigned_programmers` lists on the projects are
/// persisted. Never reused across independent generation runs.
#[derive(Debug, Default)]
pub struct AssignmentLedger {
    entries: HashMap<u32, Vec<Assignment>>,
}

impl AssignmentLedger {
    /// Seeds an empty booking list for every programmer in the pool.
    pub fn new(profiles: &[Profile]) -> Self {
        AssignmentLedger {
            entries: profiles.iter().map(|p| (p.id, Vec::new())).collect(),
        }
    }

    /// Whether the programmer has no booking that conflicts with the span.
    pub fn is_available(&self, programmer_id: u32, span: DateSpan) -> bool {
        let Some(assignments) = self.entries.get(&programmer_id) else {
            return true;
        };
        assignments.iter().all(|booked| {
            let booked_span = DateSpan::new(booked.assignment_start_date, booked.assignment_end_date);
            !span.conflicts_with(&booked_span)
        })
    }

    /// Books an assignment against its programmer.
    pub fn record(&mut self, assignment: Assignment) {
        self.entries
            .entry(assignment.programmer_id)
            .or_default()
            .push(assignment);
    }

    pub fn assignments_for(&self, programmer_id: u32) -> &[Assignment] {
        self.entries
            .get(&programmer_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn programmer_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}
