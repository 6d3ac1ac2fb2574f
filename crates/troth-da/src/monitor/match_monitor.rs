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

use crate::stats::MatchStatistics;
use troth_model::index::{HospitalIndex, StudentIndex};
use troth_model::instance::Instance;

/// Trait for observing the deferred acceptance engine.
///
/// The engine invokes the callbacks in proposal order: every `on_proposal`
/// is followed by exactly one of `on_engagement`, `on_displacement`, or
/// `on_rejection` for the same hospital-student pair. Monitors are purely
/// observational; nothing they do can alter the computed matching.
pub trait MatchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the proposal loop begins.
    fn on_enter_matching(&mut self, _instance: &Instance, _statistics: &MatchStatistics) {}

    /// Called when a hospital offers to a student, before the student
    /// decides.
    fn on_proposal(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    /// Called when a previously unmatched student accepts an offer.
    fn on_engagement(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    /// Called when a student trades up, unmatching `displaced`.
    fn on_displacement(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _displaced: HospitalIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    /// Called when a student declines an offer in favor of the current
    /// match.
    fn on_rejection(
        &mut self,
        _hospital: HospitalIndex,
        _student: StudentIndex,
        _statistics: &MatchStatistics,
    ) {
    }

    /// Called once after the last hospital is matched.
    fn on_exit_matching(&mut self, _statistics: &MatchStatistics) {}
}

/// Mutable references forward to the referenced monitor, so callers can
/// hand the engine a `&mut` and inspect the monitor after the run.
impl<M> MatchMonitor for &mut M
where
    M: MatchMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_matching(&mut self, instance: &Instance, statistics: &MatchStatistics) {
        (**self).on_enter_matching(instance, statistics);
    }

    #[inline(always)]
    fn on_proposal(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        (**self).on_proposal(hospital, student, statistics);
    }

    #[inline(always)]
    fn on_engagement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        (**self).on_engagement(hospital, student, statistics);
    }

    #[inline(always)]
    fn on_displacement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        displaced: HospitalIndex,
        statistics: &MatchStatistics,
    ) {
        (**self).on_displacement(hospital, student, displaced, statistics);
    }

    #[inline(always)]
    fn on_rejection(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        (**self).on_rejection(hospital, student, statistics);
    }

    #[inline(always)]
    fn on_exit_matching(&mut self, statistics: &MatchStatistics) {
        (**self).on_exit_matching(statistics);
    }
}

impl std::fmt::Debug for dyn MatchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn MatchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchMonitor({})", self.name())
    }
}
