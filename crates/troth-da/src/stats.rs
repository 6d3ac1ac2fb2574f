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

use std::time::Duration;

/// Statistics collected during a deferred acceptance run.
///
/// Every proposal ends in exactly one of engagement, displacement, or
/// rejection, so `proposals` always equals the sum of the other three
/// event counters. The proposal count is bounded by `n * n` because each
/// hospital offers to each student at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStatistics {
    /// Total offers made by hospitals.
    pub proposals: u64,
    /// Proposals accepted by a previously unmatched student.
    pub engagements: u64,
    /// Proposals accepted by trading up, unmatching the incumbent hospital.
    pub displacements: u64,
    /// Proposals declined in favor of the current match.
    pub rejections: u64,
    /// Total time spent in the engine.
    pub time_total: Duration,
}

impl Default for MatchStatistics {
    fn default() -> Self {
        Self {
            proposals: 0,
            engagements: 0,
            displacements: 0,
            rejections: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl MatchStatistics {
    #[inline]
    pub fn on_proposal(&mut self) {
        self.proposals = self.proposals.saturating_add(1);
    }

    #[inline]
    pub fn on_engagement(&mut self) {
        self.engagements = self.engagements.saturating_add(1);
    }

    #[inline]
    pub fn on_displacement(&mut self) {
        self.displacements = self.displacements.saturating_add(1);
    }

    #[inline]
    pub fn on_rejection(&mut self) {
        self.rejections = self.rejections.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for MatchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deferred Acceptance Statistics:")?;
        writeln!(f, "  Proposals:      {}", self.proposals)?;
        writeln!(f, "  Engagements:    {}", self.engagements)?;
        writeln!(f, "  Displacements:  {}", self.displacements)?;
        writeln!(f, "  Rejections:     {}", self.rejections)?;
        writeln!(f, "  Total time:     {:.2?}", self.time_total)?;
        Ok(())
    }
}
