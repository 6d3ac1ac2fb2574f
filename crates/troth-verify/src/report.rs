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

//! Audit outcome container.

use crate::violation::Violation;
use std::fmt;
use troth_model::index::{HospitalIndex, StudentIndex};

/// The findings of one audit run.
///
/// Violations are stored in the order the checks recorded them, so the
/// rendered report always lists structural defects before the stability
/// verdict. An empty report certifies the matching.
///
/// # Example
///
/// ```
/// use troth_verify::report::AuditReport;
///
/// let report = AuditReport::new();
/// assert!(report.is_valid());
/// assert_eq!(report.to_string(), "VALID STABLE\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditReport {
    violations: Vec<Violation>,
}

impl AuditReport {
    /// Creates an empty report.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Records a finding. Order of recording is preserved.
    #[inline]
    pub(crate) fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns `true` if no violation was recorded.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// All recorded findings, in check order.
    #[inline]
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The blocking pair the stability scan stopped at, if any.
    #[must_use]
    pub fn blocking_pair(&self) -> Option<(HospitalIndex, StudentIndex)> {
        self.violations.iter().find_map(|violation| match violation {
            Violation::BlockingPair { hospital, student } => Some((*hospital, *student)),
            _ => None,
        })
    }

    /// Consumes the report and returns the recorded findings.
    #[inline]
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return writeln!(f, "VALID STABLE");
        }
        for violation in &self.violations {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}
