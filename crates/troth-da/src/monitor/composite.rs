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

//! Monitoring combinators for deferred acceptance
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, metrics collection,
//! and custom diagnostics without coupling them to the engine.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - All callbacks fan out to all children; monitors cannot suppress
//!   events for one another.

use crate::monitor::match_monitor::MatchMonitor;
use crate::stats::MatchStatistics;
use troth_model::index::{HospitalIndex, StudentIndex};
use troth_model::instance::Instance;

/// A monitor that aggregates multiple monitors and forwards events to all
/// of them. This allows combining different monitoring behaviors into a
/// single monitor.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn MatchMonitor + 'a>>,
}

impl Default for CompositeMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    /// This pre-allocates space for the given number of monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline(always)]
    pub fn from_vec(monitors: Vec<Box<dyn MatchMonitor + 'a>>) -> Self {
        Self { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: MatchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn MatchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn MatchMonitor + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors,
    /// `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn MatchMonitor + 'a>> for CompositeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn MatchMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl MatchMonitor for CompositeMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    #[inline(always)]
    fn on_enter_matching(&mut self, instance: &Instance, statistics: &MatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_matching(instance, statistics);
        }
    }

    #[inline(always)]
    fn on_proposal(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_proposal(hospital, student, statistics);
        }
    }

    #[inline(always)]
    fn on_engagement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_engagement(hospital, student, statistics);
        }
    }

    #[inline(always)]
    fn on_displacement(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        displaced: HospitalIndex,
        statistics: &MatchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_displacement(hospital, student, displaced, statistics);
        }
    }

    #[inline(always)]
    fn on_rejection(
        &mut self,
        hospital: HospitalIndex,
        student: StudentIndex,
        statistics: &MatchStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_rejection(hospital, student, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_matching(&mut self, statistics: &MatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_matching(statistics);
        }
    }
}
