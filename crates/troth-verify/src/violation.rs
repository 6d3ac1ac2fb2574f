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

//! Audit findings.
//!
//! A `Violation` is a single defect the auditor found in a proposed
//! matching. Its `Display` output is the canonical one-line report form,
//! with agents numbered from 1 as they appear in instance files.

use std::fmt;
use troth_model::index::{HospitalIndex, StudentIndex};

/// A single defect in a proposed matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The matching does not pair every agent exactly once.
    WrongSize {
        /// Number of assignments found.
        found: usize,
        /// Number of agents per side in the instance.
        expected: usize,
    },
    /// Some hospital appears in more than one assignment.
    DuplicateHospitals,
    /// Some student appears in more than one assignment.
    DuplicateStudents,
    /// The pair would rather be matched with each other than with their
    /// assigned partners.
    BlockingPair {
        /// Hospital of the blocking pair.
        hospital: HospitalIndex,
        /// Student of the blocking pair.
        student: StudentIndex,
    },
}

impl Violation {
    /// Returns `true` if this finding is a stability defect rather than
    /// a structural one.
    #[inline]
    #[must_use]
    pub const fn is_stability_violation(&self) -> bool {
        matches!(self, Violation::BlockingPair { .. })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::WrongSize { found, expected } => {
                write!(f, "INVALID: Found {} matches instead of {}.", found, expected)
            }
            Violation::DuplicateHospitals => {
                write!(f, "INVALID: Duplicate hospitals in matching.")
            }
            Violation::DuplicateStudents => {
                write!(f, "INVALID: Duplicate students in matching.")
            }
            Violation::BlockingPair { hospital, student } => {
                write!(f, "UNSTABLE: ({}, {})", hospital.get() + 1, student.get() + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_size_display() {
        let violation = Violation::WrongSize {
            found: 2,
            expected: 3,
        };
        assert_eq!(
            violation.to_string(),
            "INVALID: Found 2 matches instead of 3."
        );
    }

    #[test]
    fn test_duplicate_display() {
        assert_eq!(
            Violation::DuplicateHospitals.to_string(),
            "INVALID: Duplicate hospitals in matching."
        );
        assert_eq!(
            Violation::DuplicateStudents.to_string(),
            "INVALID: Duplicate students in matching."
        );
    }

    #[test]
    fn test_blocking_pair_display_is_one_based() {
        let violation = Violation::BlockingPair {
            hospital: HospitalIndex::new(0),
            student: StudentIndex::new(2),
        };
        assert_eq!(violation.to_string(), "UNSTABLE: (1, 3)");
    }

    #[test]
    fn test_is_stability_violation() {
        let blocking = Violation::BlockingPair {
            hospital: HospitalIndex::new(0),
            student: StudentIndex::new(0),
        };
        assert!(blocking.is_stability_violation());
        assert!(!Violation::DuplicateHospitals.is_stability_violation());
    }
}
