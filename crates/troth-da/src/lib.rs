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

//! Troth-DA: deferred acceptance for stable matching
//!
//! High-level crate implementing the hospital-proposing deferred acceptance
//! algorithm. Given a validated `troth_model::instance::Instance`, the
//! solver produces the hospital-optimal stable matching together with run
//! statistics. Monitoring is separated from the core loop so diagnostics
//! can be attached without touching engine logic.
//!
//! Core flow
//! - Provide a `troth_model::instance::Instance`.
//! - Run `da::DaSolver::solve`, or attach a `monitor::MatchMonitor` via
//!   `da::DaSolver::solve_with_monitor`.
//! - Inspect the `result::MatchOutcome` (matching + statistics).
//!
//! Design highlights
//! - Deterministic: proposal order is fixed by the work queue and the
//!   preference lists, so equal inputs give equal outputs.
//! - Tight inner loop: per-hospital cursors ensure every preference entry
//!   is offered at most once, bounding work at `n * n` proposals.
//! - Monitors observe; they never influence the computed matching.
//!
//! Module map
//! - `da`: the engine and session orchestration.
//! - `queue`: FIFO work queue of unmatched hospitals.
//! - `monitor`: event observers (log, composite, no-op).
//! - `result`: outcome container.
//! - `stats`: lightweight counters/timing.

pub mod da;
pub mod monitor;
pub mod queue;
pub mod result;
pub mod stats;
