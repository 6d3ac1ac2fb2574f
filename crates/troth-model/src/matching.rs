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

use crate::index::{HospitalIndex, HospitalIndexTag, StudentIndex, StudentIndexTag};
use crate::slot::Slot;

/// A single hospital-student pair of a matching.
///
/// Both indices are 0-based; `Matching::assignments` produces these in
/// ascending hospital order. Conversion to the 1-based external ids happens
/// only when formatting for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub hospital: HospitalIndex,
    pub student: StudentIndex,
}

/// A (possibly partial) assignment of students to hospitals.
///
/// Both directions of the relation are stored explicitly, one `Slot` per
/// agent, so that partner lookups are O(1) from either side. The two arrays
/// are kept mutually consistent by `bind` and `release_student`; a hospital
/// points at a student if and only if that student points back.
///
/// A freshly created matching is empty. The proposal loop of the solver
/// fills it pair by pair, displacing along the way, until every agent is
/// matched.
#[derive(Clone, PartialEq, Eq)]
pub struct Matching {
    partner_of_hospital: Vec<Slot<StudentIndexTag>>,
    partner_of_student: Vec<Slot<HospitalIndexTag>>,
}

impl Matching {
    /// Creates an empty matching for `num_agents` hospitals and students.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::matching::Matching;
    /// let matching = Matching::empty(3);
    /// assert_eq!(matching.num_agents(), 3);
    /// assert_eq!(matching.num_matched(), 0);
    /// assert!(!matching.is_complete());
    /// ```
    pub fn empty(num_agents: usize) -> Self {
        Matching {
            partner_of_hospital: vec![Slot::vacant(); num_agents],
            partner_of_student: vec![Slot::vacant(); num_agents],
        }
    }

    /// Returns the number of agents per side.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.partner_of_hospital.len()
    }

    /// Returns the number of currently matched pairs.
    pub fn num_matched(&self) -> usize {
        self.partner_of_hospital
            .iter()
            .filter(|slot| slot.is_occupied())
            .count()
    }

    /// Returns `true` if every agent is matched.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.num_matched() == self.num_agents()
    }

    /// Returns the student currently matched to `hospital`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::matching::Matching;
    /// let mut matching = Matching::empty(2);
    /// matching.bind(HospitalIndex::new(0), StudentIndex::new(1));
    /// assert_eq!(matching.student_of(HospitalIndex::new(0)), Some(StudentIndex::new(1)));
    /// assert_eq!(matching.student_of(HospitalIndex::new(1)), None);
    /// ```
    #[inline]
    pub fn student_of(&self, hospital: HospitalIndex) -> Option<StudentIndex> {
        debug_assert!(
            hospital.get() < self.num_agents(),
            "called `Matching::student_of` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            hospital.get()
        );

        self.partner_of_hospital[hospital.get()].get()
    }

    /// Returns the hospital currently matched to `student`, if any.
    #[inline]
    pub fn hospital_of(&self, student: StudentIndex) -> Option<HospitalIndex> {
        debug_assert!(
            student.get() < self.num_agents(),
            "called `Matching::hospital_of` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            student.get()
        );

        self.partner_of_student[student.get()].get()
    }

    /// Matches `hospital` with `student`.
    ///
    /// Both agents must be unmatched when this is called; displacing an
    /// incumbent requires an explicit `release_student` first. Keeping the
    /// two steps separate lets callers observe the freed hospital.
    ///
    /// # Panics
    ///
    /// Panics if either agent is already matched.
    pub fn bind(&mut self, hospital: HospitalIndex, student: StudentIndex) {
        debug_assert!(
            hospital.get() < self.num_agents(),
            "called `Matching::bind` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            hospital.get()
        );
        debug_assert!(
            student.get() < self.num_agents(),
            "called `Matching::bind` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            student.get()
        );
        assert!(
            self.partner_of_hospital[hospital.get()].is_vacant(),
            "called `Matching::bind` on already matched {}",
            hospital
        );
        assert!(
            self.partner_of_student[student.get()].is_vacant(),
            "called `Matching::bind` on already matched {}",
            student
        );

        self.partner_of_hospital[hospital.get()] = Slot::occupied(student);
        self.partner_of_student[student.get()] = Slot::occupied(hospital);
    }

    /// Unmatches `student` from its current hospital, if any, and returns
    /// the hospital that lost its match.
    ///
    /// Returns `None` (and changes nothing) if the student was unmatched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::matching::Matching;
    /// let mut matching = Matching::empty(2);
    /// matching.bind(HospitalIndex::new(0), StudentIndex::new(0));
    /// assert_eq!(matching.release_student(StudentIndex::new(0)), Some(HospitalIndex::new(0)));
    /// assert_eq!(matching.release_student(StudentIndex::new(0)), None);
    /// ```
    pub fn release_student(&mut self, student: StudentIndex) -> Option<HospitalIndex> {
        debug_assert!(
            student.get() < self.num_agents(),
            "called `Matching::release_student` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents(),
            student.get()
        );

        let freed = self.partner_of_student[student.get()].get();
        if let Some(hospital) = freed {
            self.partner_of_hospital[hospital.get()] = Slot::vacant();
            self.partner_of_student[student.get()] = Slot::vacant();
        }
        freed
    }

    /// Returns `true` if the two partner arrays are mutually consistent.
    ///
    /// Every occupied hospital slot must be mirrored by the student side and
    /// vice versa. The mutation methods preserve this at all times, so this
    /// check is mainly useful as a test oracle.
    pub fn is_consistent(&self) -> bool {
        for (h, slot) in self.partner_of_hospital.iter().enumerate() {
            if let Some(student) = slot.get() {
                if student.get() >= self.num_agents() {
                    return false;
                }
                if self.partner_of_student[student.get()].get() != Some(HospitalIndex::new(h)) {
                    return false;
                }
            }
        }
        for (s, slot) in self.partner_of_student.iter().enumerate() {
            if let Some(hospital) = slot.get() {
                if hospital.get() >= self.num_agents() {
                    return false;
                }
                if self.partner_of_hospital[hospital.get()].get() != Some(StudentIndex::new(s)) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns all matched pairs in ascending hospital order.
    ///
    /// Unmatched hospitals are skipped, so the result of a partial matching
    /// has fewer than `num_agents()` entries.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.partner_of_hospital
            .iter()
            .enumerate()
            .filter_map(|(h, slot)| {
                slot.get().map(|student| Assignment {
                    hospital: HospitalIndex::new(h),
                    student,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matching")
            .field("partner_of_hospital", &self.partner_of_hospital)
            .field("partner_of_student", &self.partner_of_student)
            .finish()
    }
}

impl std::fmt::Display for Matching {
    /// Formats the matching as one `<hospital> <student>` line per pair,
    /// ascending by hospital, using 1-based external ids.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for assignment in self.assignments() {
            writeln!(
                f,
                "{} {}",
                assignment.hospital.get() + 1,
                assignment.student.get() + 1
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hi(i: usize) -> HospitalIndex {
        HospitalIndex::new(i)
    }

    fn si(i: usize) -> StudentIndex {
        StudentIndex::new(i)
    }

    #[test]
    fn test_empty_matching() {
        let matching = Matching::empty(3);
        assert_eq!(matching.num_agents(), 3);
        assert_eq!(matching.num_matched(), 0);
        assert!(!matching.is_complete());
        assert!(matching.is_consistent());
        assert!(matching.assignments().is_empty());
        for i in 0..3 {
            assert_eq!(matching.student_of(hi(i)), None);
            assert_eq!(matching.hospital_of(si(i)), None);
        }
    }

    #[test]
    fn test_bind_updates_both_sides() {
        let mut matching = Matching::empty(2);
        matching.bind(hi(0), si(1));

        assert_eq!(matching.student_of(hi(0)), Some(si(1)));
        assert_eq!(matching.hospital_of(si(1)), Some(hi(0)));
        assert_eq!(matching.student_of(hi(1)), None);
        assert_eq!(matching.hospital_of(si(0)), None);
        assert_eq!(matching.num_matched(), 1);
        assert!(matching.is_consistent());
    }

    #[test]
    fn test_release_and_rebind() {
        let mut matching = Matching::empty(2);
        matching.bind(hi(0), si(0));
        matching.bind(hi(1), si(1));
        assert!(matching.is_complete());

        let freed = matching.release_student(si(0));
        assert_eq!(freed, Some(hi(0)));
        assert_eq!(matching.student_of(hi(0)), None);
        assert_eq!(matching.hospital_of(si(0)), None);
        assert_eq!(matching.num_matched(), 1);

        matching.bind(hi(0), si(0));
        assert!(matching.is_complete());
        assert!(matching.is_consistent());
    }

    #[test]
    fn test_release_unmatched_student_is_noop() {
        let mut matching = Matching::empty(2);
        assert_eq!(matching.release_student(si(1)), None);
        assert_eq!(matching.num_matched(), 0);
    }

    #[test]
    #[should_panic(expected = "called `Matching::bind` on already matched HospitalIndex(0)")]
    fn test_bind_rejects_matched_hospital() {
        let mut matching = Matching::empty(2);
        matching.bind(hi(0), si(0));
        matching.bind(hi(0), si(1));
    }

    #[test]
    #[should_panic(expected = "called `Matching::bind` on already matched StudentIndex(1)")]
    fn test_bind_rejects_matched_student() {
        let mut matching = Matching::empty(2);
        matching.bind(hi(0), si(1));
        matching.bind(hi(1), si(1));
    }

    #[test]
    fn test_assignments_ascend_by_hospital() {
        let mut matching = Matching::empty(3);
        matching.bind(hi(2), si(0));
        matching.bind(hi(0), si(2));

        let assignments = matching.assignments();
        assert_eq!(assignments.len(), 2);
        assert_eq!(
            assignments[0],
            Assignment {
                hospital: hi(0),
                student: si(2)
            }
        );
        assert_eq!(
            assignments[1],
            Assignment {
                hospital: hi(2),
                student: si(0)
            }
        );
    }

    #[test]
    fn test_display_uses_one_based_ids() {
        let mut matching = Matching::empty(2);
        matching.bind(hi(0), si(1));
        matching.bind(hi(1), si(0));
        assert_eq!(format!("{}", matching), "1 2\n2 1\n");
    }

    #[test]
    fn test_display_skips_unmatched_hospitals() {
        let mut matching = Matching::empty(3);
        matching.bind(hi(1), si(2));
        assert_eq!(format!("{}", matching), "2 3\n");
    }
}
