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

use crate::index::{HospitalIndex, StudentIndex};
use troth_core::math::permutation;

#[inline(always)]
fn flatten_index(num_agents: usize, row: usize, column: usize) -> usize {
    row * num_agents + column
}

/// The immutable data model describing both agent sets and their preferences.
///
/// This struct holds all pre-validated, queryable data in flattened
/// (row-per-agent) layout:
/// - `hospital_prefs[h * n + r]`: the student that hospital `h` ranks at
///   position `r` (0 = most preferred).
/// - `student_prefs[s * n + r]`: the hospital that student `s` ranks at
///   position `r`.
/// - `hospital_ranks[h * n + s]`: the rank hospital `h` assigns to student
///   `s`. This is the inverse of `hospital_prefs`, precomputed so that
///   preference comparisons are O(1).
/// - `student_ranks[s * n + h]`: the rank student `s` assigns to hospital
///   `h`, symmetric to the above. This is the table the acceptance test of
///   the proposal loop reads on every offer.
///
/// Invariant: every preference list is a permutation of the full opposite
/// index space: total, strict, no ties, no omissions. `InstanceBuilder`
/// establishes this at construction; an `Instance` that violates it cannot
/// exist.
///
/// Construction:
/// - Use `InstanceBuilder` and call `InstanceBuilder::build` to obtain a
///   validated `Instance`, or go through `loading::InstanceLoader` for the
///   text format.
#[derive(Clone)]
pub struct Instance {
    num_agents: usize,
    hospital_prefs: Vec<StudentIndex>, // len = n * n
    student_prefs: Vec<HospitalIndex>, // len = n * n
    hospital_ranks: Vec<usize>,        // len = n * n
    student_ranks: Vec<usize>,         // len = n * n
}

impl Instance {
    /// Returns the number of agents per side.
    ///
    /// Hospitals and students always come in equal numbers, so a single
    /// count covers both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(1);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(0)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(0)]);
    /// let instance = builder.build();
    /// assert_eq!(instance.num_agents(), 1);
    /// ```
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Returns the preference list of the specified hospital, most preferred
    /// student first.
    ///
    /// # Panics
    ///
    /// Panics if `hospital` is not in `0..num_agents()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(2);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(1), StudentIndex::new(0)]);
    /// builder.set_hospital_preferences(HospitalIndex::new(1), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(0), HospitalIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(1), &[HospitalIndex::new(1), HospitalIndex::new(0)]);
    /// let instance = builder.build();
    /// assert_eq!(
    ///     instance.hospital_preferences(HospitalIndex::new(0)),
    ///     &[StudentIndex::new(1), StudentIndex::new(0)]
    /// );
    /// ```
    #[inline]
    pub fn hospital_preferences(&self, hospital: HospitalIndex) -> &[StudentIndex] {
        let index = hospital.get();
        debug_assert!(
            index < self.num_agents,
            "called `Instance::hospital_preferences` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );

        let start = flatten_index(self.num_agents, index, 0);
        &self.hospital_prefs[start..start + self.num_agents]
    }

    /// Returns the preference list of the specified hospital without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `hospital`. The caller must ensure that `hospital` is in
    /// `0..num_agents()`. Undefined behavior may occur if this precondition
    /// is violated.
    #[inline]
    pub unsafe fn hospital_preferences_unchecked(&self, hospital: HospitalIndex) -> &[StudentIndex] {
        let index = hospital.get();
        debug_assert!(
            index < self.num_agents,
            "called `Instance::hospital_preferences_unchecked` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );

        let start = flatten_index(self.num_agents, index, 0);
        unsafe { self.hospital_prefs.get_unchecked(start..start + self.num_agents) }
    }

    /// Returns the preference list of the specified student, most preferred
    /// hospital first.
    ///
    /// # Panics
    ///
    /// Panics if `student` is not in `0..num_agents()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(2);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_hospital_preferences(HospitalIndex::new(1), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(1), HospitalIndex::new(0)]);
    /// builder.set_student_preferences(StudentIndex::new(1), &[HospitalIndex::new(0), HospitalIndex::new(1)]);
    /// let instance = builder.build();
    /// assert_eq!(
    ///     instance.student_preferences(StudentIndex::new(0)),
    ///     &[HospitalIndex::new(1), HospitalIndex::new(0)]
    /// );
    /// ```
    #[inline]
    pub fn student_preferences(&self, student: StudentIndex) -> &[HospitalIndex] {
        let index = student.get();
        debug_assert!(
            index < self.num_agents,
            "called `Instance::student_preferences` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );

        let start = flatten_index(self.num_agents, index, 0);
        &self.student_prefs[start..start + self.num_agents]
    }

    /// Returns the preference list of the specified student without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `student`. The caller must ensure that `student` is in
    /// `0..num_agents()`. Undefined behavior may occur if this precondition
    /// is violated.
    #[inline]
    pub unsafe fn student_preferences_unchecked(&self, student: StudentIndex) -> &[HospitalIndex] {
        let index = student.get();
        debug_assert!(
            index < self.num_agents,
            "called `Instance::student_preferences_unchecked` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );

        let start = flatten_index(self.num_agents, index, 0);
        unsafe { self.student_prefs.get_unchecked(start..start + self.num_agents) }
    }

    /// Returns the rank hospital `hospital` assigns to student `student`
    /// (0 = most preferred).
    ///
    /// Lower ranks are better; comparing two ranks answers "which student
    /// does this hospital prefer" without scanning the preference list.
    ///
    /// # Panics
    ///
    /// Panics if `hospital` or `student` is not in `0..num_agents()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(2);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(1), StudentIndex::new(0)]);
    /// builder.set_hospital_preferences(HospitalIndex::new(1), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(0), HospitalIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(1), &[HospitalIndex::new(1), HospitalIndex::new(0)]);
    /// let instance = builder.build();
    /// assert_eq!(instance.hospital_rank_of(HospitalIndex::new(0), StudentIndex::new(1)), 0);
    /// assert_eq!(instance.hospital_rank_of(HospitalIndex::new(0), StudentIndex::new(0)), 1);
    /// ```
    #[inline]
    pub fn hospital_rank_of(&self, hospital: HospitalIndex, student: StudentIndex) -> usize {
        debug_assert!(
            hospital.get() < self.num_agents,
            "called `Instance::hospital_rank_of` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            hospital.get()
        );
        debug_assert!(
            student.get() < self.num_agents,
            "called `Instance::hospital_rank_of` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            student.get()
        );

        self.hospital_ranks[flatten_index(self.num_agents, hospital.get(), student.get())]
    }

    /// Returns the rank hospital `hospital` assigns to student `student`
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `hospital` and `student`. The caller must ensure both are in
    /// `0..num_agents()`. Undefined behavior may occur if this precondition
    /// is violated.
    #[inline]
    pub unsafe fn hospital_rank_of_unchecked(
        &self,
        hospital: HospitalIndex,
        student: StudentIndex,
    ) -> usize {
        debug_assert!(
            hospital.get() < self.num_agents,
            "called `Instance::hospital_rank_of_unchecked` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            hospital.get()
        );
        debug_assert!(
            student.get() < self.num_agents,
            "called `Instance::hospital_rank_of_unchecked` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            student.get()
        );

        let flat = flatten_index(self.num_agents, hospital.get(), student.get());
        unsafe { *self.hospital_ranks.get_unchecked(flat) }
    }

    /// Returns the rank student `student` assigns to hospital `hospital`
    /// (0 = most preferred).
    ///
    /// This is the lookup behind every acceptance decision: a student trades
    /// up exactly when the proposing hospital's rank is strictly lower than
    /// the incumbent's.
    ///
    /// # Panics
    ///
    /// Panics if `student` or `hospital` is not in `0..num_agents()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(2);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_hospital_preferences(HospitalIndex::new(1), &[StudentIndex::new(0), StudentIndex::new(1)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(1), HospitalIndex::new(0)]);
    /// builder.set_student_preferences(StudentIndex::new(1), &[HospitalIndex::new(0), HospitalIndex::new(1)]);
    /// let instance = builder.build();
    /// assert_eq!(instance.student_rank_of(StudentIndex::new(0), HospitalIndex::new(1)), 0);
    /// assert_eq!(instance.student_rank_of(StudentIndex::new(0), HospitalIndex::new(0)), 1);
    /// ```
    #[inline]
    pub fn student_rank_of(&self, student: StudentIndex, hospital: HospitalIndex) -> usize {
        debug_assert!(
            student.get() < self.num_agents,
            "called `Instance::student_rank_of` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            student.get()
        );
        debug_assert!(
            hospital.get() < self.num_agents,
            "called `Instance::student_rank_of` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            hospital.get()
        );

        self.student_ranks[flatten_index(self.num_agents, student.get(), hospital.get())]
    }

    /// Returns the rank student `student` assigns to hospital `hospital`
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `student` and `hospital`. The caller must ensure both are in
    /// `0..num_agents()`. Undefined behavior may occur if this precondition
    /// is violated.
    #[inline]
    pub unsafe fn student_rank_of_unchecked(
        &self,
        student: StudentIndex,
        hospital: HospitalIndex,
    ) -> usize {
        debug_assert!(
            student.get() < self.num_agents,
            "called `Instance::student_rank_of_unchecked` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            student.get()
        );
        debug_assert!(
            hospital.get() < self.num_agents,
            "called `Instance::student_rank_of_unchecked` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            hospital.get()
        );

        let flat = flatten_index(self.num_agents, student.get(), hospital.get());
        unsafe { *self.student_ranks.get_unchecked(flat) }
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("num_agents", &self.num_agents)
            .field("hospital_prefs", &self.hospital_prefs)
            .field("student_prefs", &self.student_prefs)
            .finish()
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance(num_agents: {})", self.num_agents)
    }
}

/// A mutable builder producing validated `Instance` values.
///
/// The builder starts with every preference list unset; each list must be
/// provided exactly once via `set_hospital_preferences` /
/// `set_student_preferences` before calling `build`. Unset lists are
/// rejected at build time, which prevents half-configured instances from
/// silently reaching the solver.
#[derive(Clone)]
pub struct InstanceBuilder {
    num_agents: usize,
    hospital_prefs: Vec<StudentIndex>,
    student_prefs: Vec<HospitalIndex>,
}

impl InstanceBuilder {
    /// Creates a new `InstanceBuilder` for `num_agents` hospitals and the
    /// same number of students.
    ///
    /// All preference lists start unset and must be filled before `build`.
    ///
    /// # Panics
    ///
    /// Panics if `num_agents` is zero; a matching instance needs at least
    /// one agent per side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::instance::InstanceBuilder;
    /// let builder = InstanceBuilder::new(4);
    /// assert_eq!(builder.num_agents(), 4);
    /// ```
    pub fn new(num_agents: usize) -> Self {
        assert!(
            num_agents >= 1,
            "called `InstanceBuilder::new` with zero agents: an instance needs at least one agent per side"
        );

        InstanceBuilder {
            num_agents,
            hospital_prefs: vec![StudentIndex::new(usize::MAX); num_agents * num_agents],
            student_prefs: vec![HospitalIndex::new(usize::MAX); num_agents * num_agents],
        }
    }

    /// Returns the number of agents per side.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Sets the preference list for the specified hospital, most preferred
    /// student first.
    ///
    /// # Panics
    ///
    /// Panics if `preferences` does not contain exactly `num_agents()`
    /// entries, or (in debug builds) if `hospital` is out of bounds.
    #[inline]
    pub fn set_hospital_preferences(
        &mut self,
        hospital: HospitalIndex,
        preferences: &[StudentIndex],
    ) -> &mut Self {
        let index = hospital.get();
        debug_assert!(
            index < self.num_agents,
            "called `InstanceBuilder::set_hospital_preferences` with hospital index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );
        assert_eq!(
            preferences.len(),
            self.num_agents,
            "called `InstanceBuilder::set_hospital_preferences` with a list of length {} but the instance has {} agents",
            preferences.len(),
            self.num_agents
        );

        let start = flatten_index(self.num_agents, index, 0);
        self.hospital_prefs[start..start + self.num_agents].copy_from_slice(preferences);
        self
    }

    /// Sets the preference list for the specified student, most preferred
    /// hospital first.
    ///
    /// # Panics
    ///
    /// Panics if `preferences` does not contain exactly `num_agents()`
    /// entries, or (in debug builds) if `student` is out of bounds.
    #[inline]
    pub fn set_student_preferences(
        &mut self,
        student: StudentIndex,
        preferences: &[HospitalIndex],
    ) -> &mut Self {
        let index = student.get();
        debug_assert!(
            index < self.num_agents,
            "called `InstanceBuilder::set_student_preferences` with student index out of bounds: the len is {} but the index is {}",
            self.num_agents,
            index
        );
        assert_eq!(
            preferences.len(),
            self.num_agents,
            "called `InstanceBuilder::set_student_preferences` with a list of length {} but the instance has {} agents",
            preferences.len(),
            self.num_agents
        );

        let start = flatten_index(self.num_agents, index, 0);
        self.student_prefs[start..start + self.num_agents].copy_from_slice(preferences);
        self
    }

    /// Validates the configured preference lists and produces the immutable
    /// `Instance`, including the precomputed rank tables.
    ///
    /// # Panics
    ///
    /// Panics if any preference list was left unset or is not a permutation
    /// of the full opposite index space. Inputs arriving through
    /// `loading::InstanceLoader` are validated beforehand and report
    /// `LoadError`s instead of panicking here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::index::{HospitalIndex, StudentIndex};
    /// # use troth_model::instance::InstanceBuilder;
    /// let mut builder = InstanceBuilder::new(1);
    /// builder.set_hospital_preferences(HospitalIndex::new(0), &[StudentIndex::new(0)]);
    /// builder.set_student_preferences(StudentIndex::new(0), &[HospitalIndex::new(0)]);
    /// let instance = builder.build();
    /// assert_eq!(instance.num_agents(), 1);
    /// ```
    pub fn build(self) -> Instance {
        let n = self.num_agents;
        let mut hospital_ranks = vec![0usize; n * n];
        let mut student_ranks = vec![0usize; n * n];
        let mut scratch = vec![0usize; n];

        for hospital in 0..n {
            let start = flatten_index(n, hospital, 0);
            for (position, student) in self.hospital_prefs[start..start + n].iter().enumerate() {
                scratch[position] = student.get();
            }
            assert!(
                permutation::is_permutation(&scratch),
                "called `InstanceBuilder::build` with a missing or non-permutation preference list for hospital {}",
                hospital
            );
            hospital_ranks[start..start + n].copy_from_slice(&permutation::inverse(&scratch));
        }

        for student in 0..n {
            let start = flatten_index(n, student, 0);
            for (position, hospital) in self.student_prefs[start..start + n].iter().enumerate() {
                scratch[position] = hospital.get();
            }
            assert!(
                permutation::is_permutation(&scratch),
                "called `InstanceBuilder::build` with a missing or non-permutation preference list for student {}",
                student
            );
            student_ranks[start..start + n].copy_from_slice(&permutation::inverse(&scratch));
        }

        Instance {
            num_agents: n,
            hospital_prefs: self.hospital_prefs,
            student_prefs: self.student_prefs,
            hospital_ranks,
            student_ranks,
        }
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

    fn sample() -> Instance {
        // Hospitals: h0: [1, 0, 2], h1: [0, 1, 2], h2: [0, 2, 1]
        // Students:  s0: [0, 1, 2], s1: [2, 0, 1], s2: [1, 2, 0]
        let mut builder = InstanceBuilder::new(3);
        builder
            .set_hospital_preferences(hi(0), &[si(1), si(0), si(2)])
            .set_hospital_preferences(hi(1), &[si(0), si(1), si(2)])
            .set_hospital_preferences(hi(2), &[si(0), si(2), si(1)])
            .set_student_preferences(si(0), &[hi(0), hi(1), hi(2)])
            .set_student_preferences(si(1), &[hi(2), hi(0), hi(1)])
            .set_student_preferences(si(2), &[hi(1), hi(2), hi(0)]);
        builder.build()
    }

    #[test]
    fn test_build_and_preference_rows() {
        let instance = sample();
        assert_eq!(instance.num_agents(), 3);
        assert_eq!(instance.hospital_preferences(hi(0)), &[si(1), si(0), si(2)]);
        assert_eq!(instance.hospital_preferences(hi(2)), &[si(0), si(2), si(1)]);
        assert_eq!(instance.student_preferences(si(1)), &[hi(2), hi(0), hi(1)]);
    }

    #[test]
    fn test_rank_tables_invert_preferences() {
        let instance = sample();

        // Spot checks.
        assert_eq!(instance.hospital_rank_of(hi(0), si(1)), 0);
        assert_eq!(instance.hospital_rank_of(hi(0), si(2)), 2);
        assert_eq!(instance.student_rank_of(si(1), hi(2)), 0);
        assert_eq!(instance.student_rank_of(si(1), hi(1)), 2);

        // Rank must equal the position in the preference list, everywhere.
        for h in 0..3 {
            for (position, &student) in instance.hospital_preferences(hi(h)).iter().enumerate() {
                assert_eq!(instance.hospital_rank_of(hi(h), student), position);
            }
        }
        for s in 0..3 {
            for (position, &hospital) in instance.student_preferences(si(s)).iter().enumerate() {
                assert_eq!(instance.student_rank_of(si(s), hospital), position);
            }
        }
    }

    #[test]
    fn test_unchecked_accessors_agree_with_checked() {
        let instance = sample();
        for h in 0..3 {
            // SAFETY: h and s are in 0..num_agents.
            unsafe {
                assert_eq!(
                    instance.hospital_preferences_unchecked(hi(h)),
                    instance.hospital_preferences(hi(h))
                );
                assert_eq!(
                    instance.student_preferences_unchecked(si(h)),
                    instance.student_preferences(si(h))
                );
            }
            for s in 0..3 {
                // SAFETY: same bounds as above.
                unsafe {
                    assert_eq!(
                        instance.hospital_rank_of_unchecked(hi(h), si(s)),
                        instance.hospital_rank_of(hi(h), si(s))
                    );
                    assert_eq!(
                        instance.student_rank_of_unchecked(si(s), hi(h)),
                        instance.student_rank_of(si(s), hi(h))
                    );
                }
            }
        }
    }

    #[test]
    fn test_display_and_debug() {
        let instance = sample();
        assert_eq!(format!("{}", instance), "Instance(num_agents: 3)");

        let dbg = format!("{:?}", instance);
        assert!(dbg.contains("Instance"));
        assert!(dbg.contains("num_agents"));
        assert!(dbg.contains("hospital_prefs"));
    }

    #[test]
    #[should_panic(expected = "called `InstanceBuilder::new` with zero agents")]
    fn test_builder_rejects_zero_agents() {
        let _ = InstanceBuilder::new(0);
    }

    #[test]
    #[should_panic(expected = "with a list of length 2 but the instance has 3 agents")]
    fn test_builder_rejects_wrong_list_length() {
        let mut builder = InstanceBuilder::new(3);
        builder.set_hospital_preferences(hi(0), &[si(0), si(1)]);
    }

    #[test]
    #[should_panic(expected = "non-permutation preference list for hospital 0")]
    fn test_build_rejects_duplicate_entries() {
        let mut builder = InstanceBuilder::new(2);
        builder
            .set_hospital_preferences(hi(0), &[si(1), si(1)])
            .set_hospital_preferences(hi(1), &[si(0), si(1)])
            .set_student_preferences(si(0), &[hi(0), hi(1)])
            .set_student_preferences(si(1), &[hi(0), hi(1)]);
        let _ = builder.build();
    }

    #[test]
    #[should_panic(expected = "preference list for student 1")]
    fn test_build_rejects_unset_list() {
        let mut builder = InstanceBuilder::new(2);
        builder
            .set_hospital_preferences(hi(0), &[si(0), si(1)])
            .set_hospital_preferences(hi(1), &[si(1), si(0)])
            .set_student_preferences(si(0), &[hi(1), hi(0)]);
        let _ = builder.build();
    }
}
