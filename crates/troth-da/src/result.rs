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
use troth_model::matching::Matching;

/// Result of the engine after termination.
///
/// Deferred acceptance over complete preference lists always terminates
/// with every agent matched, so the outcome carries exactly one complete
/// matching plus the statistics of the run that produced it.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    matching: Matching,
    statistics: MatchStatistics,
}

impl MatchOutcome {
    /// Creates a new outcome from a finished run.
    ///
    /// # Panics
    ///
    /// Panics if the matching is not complete; an incomplete matching means
    /// the engine terminated early, which the algorithm never does.
    #[inline]
    pub fn new(matching: Matching, statistics: MatchStatistics) -> Self {
        assert!(
            matching.is_complete(),
            "called `MatchOutcome::new` with an incomplete matching: {} of {} agents matched",
            matching.num_matched(),
            matching.num_agents()
        );

        Self {
            matching,
            statistics,
        }
    }

    /// Returns the computed matching.
    #[inline]
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &MatchStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the matching.
    #[inline]
    pub fn into_matching(self) -> Matching {
        self.matching
    }

    /// Consumes the outcome and returns matching and statistics.
    #[inline]
    pub fn into_parts(self) -> (Matching, MatchStatistics) {
        (self.matching, self.statistics)
    }
}
