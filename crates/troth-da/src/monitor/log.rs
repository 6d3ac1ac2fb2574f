// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::monitor::match_monitor::MatchMonitor;
use crate::stats::MatchStatistics;
use troth_model::index::{HospitalIndex, StudentIndex};
use troth_model::instance::Instance;

const TABLE_WIDTH: usize = 80;

/// A monitor that prints one console line per decided proposal.
///
/// Proposal counts are bounded by `n * n`, so unlike long-running search
/// engines there is no need for interval throttling; every decision is
/// logged as it happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposalLogMonitor;

impl ProposalLogMonitor {
    /// Creates a new `ProposalLogMonitor`.
    pub fn new() -> Self {
        Self
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<18} | {:<18} | {:<26}",
            "Proposal", "Hospital", "Student", "Outcome"
        );
        println!("{}", "-".repeat(TABLE_WIDTH));
    }

    #[inline(always)]
    fn log_line(
        &self,
        hospital: HospitalIndex,
        student: StudentIndex,
        outcome: &str,
        statistics: &MatchStatistics,
    ) {
        println!(
            "{:<9} | {:<18} | {:<18} | {:<26}",
            statistics.proposals,
            hospital.to_string(),
            student.to_string(),
            outcome
        );
    }
}

impl MatchMonitor for ProposalLogMonitor {
    fn name(&self) -> &str {
        "ProposalLogMonitor"
    }

    fn on_enter_matching(&mut self, instance: &Instance, _statistics: &MatchStatistics) {
        println!("Matching {} agents per side.", instance.num_agents());
        self.print_header();
    }

    fn on_engagement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        self.log_line(hospital, student, "engaged", statistics);
    }

    fn on_displacement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        displaced: HospitalIndex,
        statistics: &MatchStatistics,
    ) {
        let outcome = format!("displaced {}", displaced);
        self.log_line(hospital, student, &outcome, statistics);
    }

    fn on_rejection(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        self.log_line(hospital, student, "rejected", statistics);
    }

    fn on_exit_matching(&mut self, _statistics: &MatchStatistics) {
        println!("{}", "-".repeat(TABLE_WIDTH));
        println!("Matching finished.");
    }
}
