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

//! Hospital-proposing deferred acceptance engine.
//!
//! This module implements a stateful matching engine that pairs hospitals
//! with students by iterated proposal. The `DaSolver` manages reusable
//! internal structures (the work queue of unmatched hospitals and the
//! per-hospital proposal cursors); a preallocation path minimizes memory
//! churn across repeated solves, and a fast `reset` keeps capacities while
//! clearing per-run state.
//!
//! A session object encapsulates per-run state, statistics, and timing,
//! enabling reproducible and debuggable runs. Each hospital walks its
//! preference list through a cursor that only ever advances, so every
//! hospital-student pair is offered at most once and the loop terminates
//! after at most `n * n` proposals. Students always hold their best offer
//! so far and only trade up, which yields the hospital-optimal stable
//! matching regardless of the order hospitals leave the queue.

use crate::{
    monitor::{match_monitor::MatchMonitor, no_op::NoOpMonitor},
    queue::HospitalQueue,
    result::MatchOutcome,
    stats::MatchStatistics,
};
use troth_model::index::HospitalIndex;
use troth_model::instance::Instance;
use troth_model::matching::Matching;

/// A deferred acceptance solver for the stable matching problem.
///
/// The solver owns the reusable work queue and cursor buffer; each call to
/// `solve` runs a fresh session over them and resets them afterwards, so a
/// single solver instance can serve many instances without reallocating.
#[derive(Debug, Clone)]
pub struct DaSolver {
    queue: HospitalQueue,
    cursors: Vec<usize>,
}

impl Default for DaSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DaSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: HospitalQueue::new(),
            cursors: Vec::new(),
        }
    }

    /// Creates a new solver instance with preallocated storage for the
    /// given number of agents per side.
    ///
    /// # Note
    ///
    /// When you invoke the solver it will internally ensure that the queue
    /// and cursor buffer have sufficient capacity for the given instance.
    /// Preallocating only moves the cost of the memory allocations to the
    /// construction time of the solver.
    #[inline]
    pub fn preallocated(num_agents: usize) -> Self {
        Self {
            queue: HospitalQueue::preallocated(num_agents),
            cursors: Vec::with_capacity(num_agents),
        }
    }

    /// Computes the hospital-optimal stable matching for the instance.
    ///
    /// The result is deterministic: equal instances produce equal matchings
    /// and equal statistics (up to timing).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_da::da::DaSolver;
    /// # use troth_model::loading::InstanceLoader;
    /// let instance = InstanceLoader::new()
    ///     .from_str("2\n1 2\n1 2\n2 1\n1 2\n")
    ///     .unwrap();
    /// let mut solver = DaSolver::new();
    /// let outcome = solver.solve(&instance);
    /// assert!(outcome.matching().is_complete());
    /// assert_eq!(format!("{}", outcome.matching()), "1 2\n2 1\n");
    /// ```
    #[inline]
    pub fn solve(&mut self, instance: &Instance) -> MatchOutcome {
        self.solve_with_monitor(instance, NoOpMonitor::new())
    }

    /// Computes the hospital-optimal stable matching while reporting every
    /// engine event to the provided `MatchMonitor`.
    ///
    /// Monitors observe only; the computed matching is identical to the one
    /// `solve` produces.
    #[inline]
    pub fn solve_with_monitor<M>(&mut self, instance: &Instance, mut monitor: M) -> MatchOutcome
    where
        M: MatchMonitor,
    {
        let session = MatchSession::new(self, instance, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Reset the internal state of the solver, clearing the work queue and
    /// proposal cursors.
    ///
    /// # Note
    ///
    /// This does not deallocate any memory used by the queue or cursors,
    /// but only resets their logical state.
    #[inline]
    fn reset(&mut self) {
        self.queue.clear();
        self.cursors.clear();
    }
}

/// A matching session for the deferred acceptance solver.
/// This struct encapsulates the state and logic of a single run.
struct MatchSession<'a, M> {
    solver: &'a mut DaSolver,
    instance: &'a Instance,
    monitor: &'a mut M,
    matching: Matching,
    stats: MatchStatistics,
    start_time: std::time::Instant,
}

impl<M> std::fmt::Debug for MatchSession<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSession")
            .field("instance", &self.instance)
            .field("matching", &self.matching)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, M> MatchSession<'a, M>
where
    M: MatchMonitor,
{
    /// Create a new matching session, preparing the solver's reusable
    /// buffers: all hospitals start unmatched in the work queue and every
    /// proposal cursor starts at the top of its preference list.
    #[inline]
    fn new(solver: &'a mut DaSolver, instance: &'a Instance, monitor: &'a mut M) -> Self {
        let num_agents = instance.num_agents();

        solver.queue.clear();
        solver.queue.extend((0..num_agents).map(HospitalIndex::new));
        solver.cursors.clear();
        solver.cursors.resize(num_agents, 0);

        Self {
            solver,
            instance,
            monitor,
            matching: Matching::empty(num_agents),
            stats: MatchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the matching session.
    #[inline]
    fn run(mut self) -> MatchOutcome {
        self.monitor.on_enter_matching(self.instance, &self.stats);

        while let Some(hospital) = self.solver.queue.pop_front() {
            self.propose(hospital);
        }

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_matching(&self.stats);
        self.finalize()
    }

    /// Let `hospital` offer down its preference list until a student takes
    /// the offer. A displaced incumbent re-enters the queue at the back and
    /// resumes from its own cursor later.
    fn propose(&mut self, hospital: HospitalIndex) {
        // SAFETY: hospital indices come from the queue, which only ever
        // holds indices in 0..num_agents.
        let preferences = unsafe { self.instance.hospital_preferences_unchecked(hospital) };
        let index = hospital.get();

        loop {
            let position = self.solver.cursors[index];
            debug_assert!(
                position < preferences.len(),
                "called `MatchSession::propose` with an exhausted preference list for {}",
                hospital
            );

            let student = preferences[position];
            self.solver.cursors[index] = position + 1;
            self.stats.on_proposal();
            self.monitor.on_proposal(hospital, student, &self.stats);

            match self.matching.hospital_of(student) {
                None => {
                    self.matching.bind(hospital, student);
                    self.stats.on_engagement();
                    self.monitor.on_engagement(hospital, student, &self.stats);
                    return;
                }
                Some(incumbent) => {
                    // SAFETY: both indices originate from validated
                    // instance data and are in 0..num_agents.
                    let offered = unsafe {
                        self.instance.student_rank_of_unchecked(student, hospital)
                    };
                    let current = unsafe {
                        self.instance.student_rank_of_unchecked(student, incumbent)
                    };

                    if offered < current {
                        self.matching.release_student(student);
                        self.matching.bind(hospital, student);
                        self.solver.queue.push_back(incumbent);
                        self.stats.on_displacement();
                        self.monitor
                            .on_displacement(hospital, student, incumbent, &self.stats);
                        return;
                    }

                    self.stats.on_rejection();
                    self.monitor.on_rejection(hospital, student, &self.stats);
                }
            }
        }
    }

    /// Finalize the outcome after the queue has drained.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize(self) -> MatchOutcome {
        debug_assert!(
            self.matching.is_consistent(),
            "deferred acceptance produced mutually inconsistent partner arrays"
        );

        MatchOutcome::new(self.matching, self.stats)
    }
}
