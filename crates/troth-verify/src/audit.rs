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

//! Matching audit.
//!
//! The auditor re-derives every property it certifies from the preference
//! tables alone. It never assumes a matching came from the solver, so the
//! raw entry point accepts arbitrary assignment lists: incomplete ones,
//! lists with repeated agents, even ids outside the instance.
//!
//! Checks run in a fixed order. The size check and both duplicate checks
//! each record at most one finding and never short-circuit the rest; the
//! stability scan runs last, on whatever partial partner relation the
//! assignments describe, and stops at the first blocking pair it proves.
//! A hospital and a student block a matching when both strictly prefer
//! each other over their current partners, with an unmatched agent
//! preferring any partner at all.

use crate::report::AuditReport;
use crate::violation::Violation;
use fixedbitset::FixedBitSet;
use troth_model::index::{HospitalIndex, HospitalIndexTag, StudentIndex, StudentIndexTag};
use troth_model::instance::Instance;
use troth_model::matching::{Assignment, Matching};
use troth_model::slot::Slot;

/// Checks proposed matchings against one instance.
///
/// The auditor borrows the instance and can be reused for any number of
/// audits. Each audit walks the checks described in the module
/// documentation and returns an [`AuditReport`] with every finding.
///
/// # Examples
///
/// ```rust
/// use troth_model::index::{HospitalIndex, StudentIndex};
/// use troth_model::loading::InstanceLoader;
/// use troth_model::matching::Matching;
/// use troth_verify::audit::MatchAuditor;
///
/// let instance = InstanceLoader::new()
///     .from_str("2\n1 2\n1 2\n2 1\n1 2\n")
///     .unwrap();
///
/// let mut matching = Matching::empty(2);
/// matching.bind(HospitalIndex::new(0), StudentIndex::new(1));
/// matching.bind(HospitalIndex::new(1), StudentIndex::new(0));
///
/// let auditor = MatchAuditor::new(&instance);
/// assert!(auditor.audit(&matching).is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatchAuditor<'a> {
    instance: &'a Instance,
}

impl<'a> MatchAuditor<'a> {
    /// Creates an auditor for `instance`.
    #[inline]
    #[must_use]
    pub const fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Returns the instance this auditor checks against.
    #[inline]
    #[must_use]
    pub const fn instance(&self) -> &Instance {
        self.instance
    }

    /// Audits a matching held in the bidirectional representation.
    ///
    /// The `Matching` type already rules out repeated agents, so on this
    /// path only the size check and the stability scan can record
    /// findings.
    #[must_use]
    pub fn audit(&self, matching: &Matching) -> AuditReport {
        self.audit_assignments(&matching.assignments())
    }

    /// Audits a raw assignment list.
    ///
    /// This is the entry point for matchings of unknown provenance, for
    /// example ones read back from a file. Entries whose ids fall outside
    /// the instance count towards the size check but cannot take part in
    /// the partner relation the stability scan works on.
    #[must_use]
    pub fn audit_assignments(&self, assignments: &[Assignment]) -> AuditReport {
        let mut report = AuditReport::new();
        self.check_size(assignments, &mut report);
        self.check_duplicates(assignments, &mut report);
        self.check_stability(assignments, &mut report);
        report
    }

    /// Records a finding unless the list pairs every agent exactly once by
    /// count. Content is checked separately.
    fn check_size(&self, assignments: &[Assignment], report: &mut AuditReport) {
        let expected = self.instance.num_agents();
        if assignments.len() != expected {
            report.record(Violation::WrongSize {
                found: assignments.len(),
                expected,
            });
        }
    }

    /// Records one finding per side that repeats an agent.
    ///
    /// Only ids the instance can hold are tracked; an out-of-range entry is
    /// excluded from the partner relation instead, which the stability scan
    /// then flags through the agents it left unmatched.
    fn check_duplicates(&self, assignments: &[Assignment], report: &mut AuditReport) {
        let num_agents = self.instance.num_agents();
        let mut seen_hospitals = FixedBitSet::with_capacity(num_agents);
        let mut seen_students = FixedBitSet::with_capacity(num_agents);
        let mut duplicate_hospitals = false;
        let mut duplicate_students = false;

        for assignment in assignments {
            let hospital = assignment.hospital.get();
            let student = assignment.student.get();

            if hospital < num_agents {
                duplicate_hospitals |= seen_hospitals.put(hospital);
            }
            if student < num_agents {
                duplicate_students |= seen_students.put(student);
            }
        }

        if duplicate_hospitals {
            report.record(Violation::DuplicateHospitals);
        }
        if duplicate_students {
            report.record(Violation::DuplicateStudents);
        }
    }

    /// Scans for a blocking pair and records the first one found.
    ///
    /// Hospitals are visited in ascending order and, within each hospital,
    /// students in ascending order, so the reported pair is deterministic
    /// for a given instance and assignment list. The scan runs even when
    /// earlier checks already failed; a structurally broken matching still
    /// gets a stability verdict on the partner relation it does describe.
    fn check_stability(&self, assignments: &[Assignment], report: &mut AuditReport) {
        let num_agents = self.instance.num_agents();
        let (partner_of_hospital, partner_of_student) = self.partner_maps(assignments);

        for h in 0..num_agents {
            let hospital = HospitalIndex::new(h);
            let current_student = partner_of_hospital[h].get();

            for s in 0..num_agents {
                let student = StudentIndex::new(s);
                if current_student == Some(student) {
                    continue;
                }

                let hospital_prefers = match current_student {
                    None => true,
                    Some(matched) => {
                        self.instance.hospital_rank_of(hospital, student)
                            < self.instance.hospital_rank_of(hospital, matched)
                    }
                };
                if !hospital_prefers {
                    continue;
                }

                let student_prefers = match partner_of_student[s].get() {
                    None => true,
                    Some(matched) => {
                        self.instance.student_rank_of(student, hospital)
                            < self.instance.student_rank_of(student, matched)
                    }
                };
                if student_prefers {
                    report.record(Violation::BlockingPair { hospital, student });
                    return;
                }
            }
        }
    }

    /// Builds both partner maps from the assignment list.
    ///
    /// When an agent appears more than once the later entry wins, matching
    /// how repeated keys behave in a map. Entries with out-of-range ids
    /// are dropped; the duplicate check has already accounted for them.
    fn partner_maps(
        &self,
        assignments: &[Assignment],
    ) -> (Vec<Slot<StudentIndexTag>>, Vec<Slot<HospitalIndexTag>>) {
        let num_agents = self.instance.num_agents();
        let mut partner_of_hospital = vec![Slot::vacant(); num_agents];
        let mut partner_of_student = vec![Slot::vacant(); num_agents];

        for assignment in assignments {
            let hospital = assignment.hospital.get();
            let student = assignment.student.get();
            if hospital >= num_agents || student >= num_agents {
                continue;
            }
            partner_of_hospital[hospital] = Slot::occupied(assignment.student);
            partner_of_student[student] = Slot::occupied(assignment.hospital);
        }

        (partner_of_hospital, partner_of_student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use troth_da::da::DaSolver;
    use troth_model::generate::InstanceGenerator;
    use troth_model::instance::InstanceBuilder;

    fn hi(i: usize) -> HospitalIndex {
        HospitalIndex::new(i)
    }

    fn si(i: usize) -> StudentIndex {
        StudentIndex::new(i)
    }

    fn canonical_instance() -> Instance {
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

    fn cascade_instance() -> Instance {
        let mut builder = InstanceBuilder::new(3);
        for h in 0..3 {
            builder.set_hospital_preferences(hi(h), &[si(0), si(1), si(2)]);
        }
        for s in 0..3 {
            builder.set_student_preferences(si(s), &[hi(2), hi(1), hi(0)]);
        }
        builder.build()
    }

    fn matching_from(num_agents: usize, pairs: &[(usize, usize)]) -> Matching {
        let mut matching = Matching::empty(num_agents);
        for &(h, s) in pairs {
            matching.bind(hi(h), si(s));
        }
        matching
    }

    fn assignments_from(pairs: &[(usize, usize)]) -> Vec<Assignment> {
        pairs
            .iter()
            .map(|&(h, s)| Assignment {
                hospital: hi(h),
                student: si(s),
            })
            .collect()
    }

    fn permutations(n: usize) -> Vec<Vec<usize>> {
        fn recurse(current: &mut Vec<usize>, used: &mut [bool], n: usize, out: &mut Vec<Vec<usize>>) {
            if current.len() == n {
                out.push(current.clone());
                return;
            }
            for value in 0..n {
                if !used[value] {
                    used[value] = true;
                    current.push(value);
                    recurse(current, used, n, out);
                    current.pop();
                    used[value] = false;
                }
            }
        }

        let mut out = Vec::new();
        recurse(&mut Vec::new(), &mut vec![false; n], n, &mut out);
        out
    }

    #[test]
    fn test_stable_matching_passes() {
        let instance = canonical_instance();
        let matching = matching_from(3, &[(0, 1), (1, 0), (2, 2)]);
        let report = MatchAuditor::new(&instance).audit(&matching);

        assert!(report.is_valid());
        assert_eq!(report.to_string(), "VALID STABLE\n");
    }

    #[test]
    fn test_identity_matching_is_unstable() {
        let instance = canonical_instance();
        let matching = matching_from(3, &[(0, 0), (1, 1), (2, 2)]);
        let report = MatchAuditor::new(&instance).audit(&matching);

        assert!(!report.is_valid());
        assert_eq!(
            report.violations(),
            &[Violation::BlockingPair {
                hospital: hi(0),
                student: si(1)
            }]
        );
        assert_eq!(report.to_string(), "UNSTABLE: (1, 2)\n");
    }

    #[test]
    fn test_first_blocking_pair_in_scan_order() {
        // The identity matching on this instance has the blocking pairs
        // (2, 1), (3, 1) and (3, 2); the scan must stop at (2, 1).
        let instance = cascade_instance();
        let matching = matching_from(3, &[(0, 0), (1, 1), (2, 2)]);
        let report = MatchAuditor::new(&instance).audit(&matching);

        assert_eq!(
            report.violations(),
            &[Violation::BlockingPair {
                hospital: hi(1),
                student: si(0)
            }]
        );
        assert_eq!(report.to_string(), "UNSTABLE: (2, 1)\n");
    }

    #[test]
    fn test_partial_matching_reports_size_and_instability() {
        let instance = canonical_instance();
        let assignments = assignments_from(&[(0, 0), (1, 1)]);
        let report = MatchAuditor::new(&instance).audit_assignments(&assignments);

        assert_eq!(
            report.violations(),
            &[
                Violation::WrongSize {
                    found: 2,
                    expected: 3
                },
                Violation::BlockingPair {
                    hospital: hi(0),
                    student: si(1)
                }
            ]
        );
        assert_eq!(
            report.to_string(),
            "INVALID: Found 2 matches instead of 3.\nUNSTABLE: (1, 2)\n"
        );
    }

    #[test]
    fn test_unmatched_student_blocks_with_any_admirer() {
        let instance = canonical_instance();
        let assignments = assignments_from(&[(0, 0)]);
        let report = MatchAuditor::new(&instance).audit_assignments(&assignments);

        // Hospital 1 prefers the unmatched student 2 over its current
        // student 1; an unmatched student accepts any hospital.
        assert_eq!(
            report.violations(),
            &[
                Violation::WrongSize {
                    found: 1,
                    expected: 3
                },
                Violation::BlockingPair {
                    hospital: hi(0),
                    student: si(1)
                }
            ]
        );
    }

    #[test]
    fn test_empty_assignment_list() {
        let instance = canonical_instance();
        let report = MatchAuditor::new(&instance).audit_assignments(&[]);

        // With everyone unmatched the very first pair inspected blocks.
        assert_eq!(
            report.violations(),
            &[
                Violation::WrongSize {
                    found: 0,
                    expected: 3
                },
                Violation::BlockingPair {
                    hospital: hi(0),
                    student: si(0)
                }
            ]
        );
    }

    #[test]
    fn test_duplicate_hospitals_detected() {
        let instance = canonical_instance();
        let assignments = assignments_from(&[(0, 0), (0, 1), (1, 2)]);
        let report = MatchAuditor::new(&instance).audit_assignments(&assignments);

        // The doubled hospital 1 keeps its later partner. Hospital 3 never
        // appears in the list, so it is unmatched and blocks with student 2.
        assert_eq!(
            report.violations(),
            &[
                Violation::DuplicateHospitals,
                Violation::BlockingPair {
                    hospital: hi(2),
                    student: si(1)
                }
            ]
        );
    }

    #[test]
    fn test_duplicate_students_detected() {
        let instance = canonical_instance();
        let assignments = assignments_from(&[(0, 0), (1, 0), (2, 2)]);
        let report = MatchAuditor::new(&instance).audit_assignments(&assignments);

        assert_eq!(report.violations()[0], Violation::DuplicateStudents);
        assert_eq!(
            report.violations()[1],
            Violation::BlockingPair {
                hospital: hi(0),
                student: si(1)
            }
        );
    }

    #[test]
    fn test_out_of_range_ids_do_not_panic() {
        let instance = canonical_instance();
        let assignments = assignments_from(&[(5, 0), (1, 1), (2, 2)]);
        let report = MatchAuditor::new(&instance).audit_assignments(&assignments);

        assert!(!report.is_valid());
        assert_eq!(report.blocking_pair(), Some((hi(0), si(0))));
    }

    #[test]
    fn test_audit_agrees_with_audit_assignments() {
        let instance = canonical_instance();
        let matching = matching_from(3, &[(0, 0), (1, 1), (2, 2)]);
        let auditor = MatchAuditor::new(&instance);

        assert_eq!(
            auditor.audit(&matching),
            auditor.audit_assignments(&matching.assignments())
        );
    }

    #[test]
    fn test_auditing_twice_yields_identical_reports() {
        let instance = canonical_instance();
        let auditor = MatchAuditor::new(&instance);

        let stable = matching_from(3, &[(0, 1), (1, 0), (2, 2)]);
        assert_eq!(auditor.audit(&stable), auditor.audit(&stable));

        let broken = assignments_from(&[(0, 0), (0, 1)]);
        let first = auditor.audit_assignments(&broken);
        let second = auditor.audit_assignments(&broken);
        assert_eq!(first, second);
        assert!(!first.is_valid());
    }

    #[test]
    fn test_single_agent_matching_is_valid_stable() {
        let mut builder = InstanceBuilder::new(1);
        builder
            .set_hospital_preferences(hi(0), &[si(0)])
            .set_student_preferences(si(0), &[hi(0)]);
        let instance = builder.build();

        let outcome = DaSolver::new().solve(&instance);
        let report = MatchAuditor::new(&instance).audit(outcome.matching());
        assert_eq!(report.to_string(), "VALID STABLE\n");
    }

    #[test]
    fn test_solver_outcomes_pass_the_audit() {
        let mut solver = DaSolver::new();
        for seed in 0..20 {
            for num_agents in 1..=8 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let instance = InstanceGenerator::new(num_agents).generate_with(&mut rng);
                let outcome = solver.solve(&instance);
                let report = MatchAuditor::new(&instance).audit(outcome.matching());

                assert!(
                    report.is_valid(),
                    "audit failed for seed {} and {} agents: {}",
                    seed,
                    num_agents,
                    report
                );
            }
        }
    }

    #[test]
    fn test_solver_matching_is_hospital_optimal() {
        // Every stable matching must rank at or below the solver's from
        // each hospital's point of view. Checked by enumerating all
        // bijections of small instances.
        let mut solver = DaSolver::new();
        for seed in 0..5 {
            for num_agents in 2..=5 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let instance = InstanceGenerator::new(num_agents).generate_with(&mut rng);
                let auditor = MatchAuditor::new(&instance);
                let outcome = solver.solve(&instance);
                let solved = outcome.matching();
                assert!(auditor.audit(solved).is_valid());

                for permutation in permutations(num_agents) {
                    let mut candidate = Matching::empty(num_agents);
                    for (h, &s) in permutation.iter().enumerate() {
                        candidate.bind(hi(h), si(s));
                    }
                    if !auditor.audit(&candidate).is_valid() {
                        continue;
                    }
                    for h in 0..num_agents {
                        let hospital = hi(h);
                        let solved_rank = instance
                            .hospital_rank_of(hospital, solved.student_of(hospital).unwrap());
                        let candidate_rank = instance
                            .hospital_rank_of(hospital, candidate.student_of(hospital).unwrap());
                        assert!(
                            solved_rank <= candidate_rank,
                            "hospital {} prefers a rival stable matching (seed {}, {} agents)",
                            hospital,
                            seed,
                            num_agents
                        );
                    }
                }
            }
        }
    }
}
