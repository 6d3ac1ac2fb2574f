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

/// A no-operation monitor that implements the `MatchMonitor` trait but
/// does nothing on any of the events.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    /// Creates a new `NoOpMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl MatchMonitor for NoOpMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_enter_matching(&mut self, _instance: &Instance, _statistics: &MatchStatistics) {}

    #[inline(always)]
    fn on_proposal(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_engagement(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_displacement(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _displaced: HospitalIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_rejection(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    #[inline(always)]
    fn on_exit_matching(&mut self, _statistics: &MatchStatistics) {}
}
