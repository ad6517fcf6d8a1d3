use std::collections::BTreeSet;
use std::fmt::Write;

use crate::cyclic::{cyclic_subgroup, full_cycle};
use crate::interfaces::Classification;
use crate::permutation::{Error, Permutation, Point, Result};
use crate::stabilizer::{check_point, coset_decomposition, stabilizer};
use crate::symmetric_group::{factorial, SymmetricGroup};

// The slot protected by mutual exclusion. The original correspondence always
// guards slot 1; per-call overrides go through is_mutex_admissible.
const CRITICAL_SLOT: Point = 1;

// Represents the scheduling space for n processes as S_n, with membership
// queries for the three constraint subgroups. A schedule is a permutation of
// the process slots; no actual scheduling behavior lives here, only
// classification against subgroup structure.
#[derive(Debug)]
pub struct SchedulerModel {
    n: usize,

    // All n! schedules.
    group: SymmetricGroup,

    // Stab(1): the mutex-admissible schedules.
    stabilizer: BTreeSet<Permutation>,

    // ⟨(1 2 ... n)⟩: the round-robin schedules.
    cyclic: BTreeSet<Permutation>,

    // The identity: the deadlock state, where nothing moves.
    identity: Permutation,
}

impl SchedulerModel {
    // One process has no scheduling space, so the model starts at n = 2.
    pub fn new(n: usize) -> Result<SchedulerModel> {
        if n < 2 {
            return Err(Error::BadDegree(n));
        }
        let group = SymmetricGroup::new(n)?;
        let stab = stabilizer(&group, CRITICAL_SLOT)?;
        let cyclic = cyclic_subgroup(&full_cycle(n)?);
        let identity = group.identity();
        Ok(SchedulerModel {
            n,
            group,
            stabilizer: stab,
            cyclic,
            identity,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn schedule_count(&self) -> usize {
        self.group.size()
    }

    pub fn schedules(&self) -> impl Iterator<Item = &Permutation> {
        self.group.iter()
    }

    // A schedule respects mutual exclusion on a slot iff it fixes that slot,
    // i.e. it belongs to Stab(slot).
    pub fn is_mutex_admissible(&self, sigma: &Permutation, slot: Point) -> Result<bool> {
        check_point(self.n, slot)?;
        Ok(sigma.apply(slot) == slot)
    }

    pub fn mutex_admissible_schedules(&self) -> &BTreeSet<Permutation> {
        &self.stabilizer
    }

    // A schedule is round-robin iff it is a rotation, i.e. a power of the
    // full cycle.
    pub fn is_round_robin(&self, sigma: &Permutation) -> bool {
        self.cyclic.contains(sigma)
    }

    pub fn round_robin_schedules(&self) -> &BTreeSet<Permutation> {
        &self.cyclic
    }

    // Deadlock is the identity schedule: no process makes forward progress.
    pub fn is_deadlock(&self, sigma: &Permutation) -> bool {
        sigma == &self.identity
    }

    pub fn deadlock_state(&self) -> &Permutation {
        &self.identity
    }

    pub fn classify(&self, sigma: &Permutation) -> Classification {
        Classification {
            permutation: sigma.to_string(),
            is_deadlock: self.is_deadlock(sigma),
            is_mutex: sigma.apply(CRITICAL_SLOT) == CRITICAL_SLOT,
            is_round_robin: self.is_round_robin(sigma),
        }
    }

    pub fn classify_all(&self) -> Vec<Classification> {
        self.group.iter().map(|s| self.classify(s)).collect()
    }

    // A structural summary of the model: the sizes of the full space and of
    // each constraint subgroup, plus the subgroup chains.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let n = self.n;
        writeln!(out, "Scheduler model, n = {} processes", n).unwrap();
        writeln!(
            out,
            "  full space  S_{}      : {} schedules ({}! = {})",
            n,
            self.group.size(),
            n,
            factorial(n)
        )
        .unwrap();
        writeln!(
            out,
            "  mutex space Stab({})  : {} schedules (({}-1)! = {})",
            CRITICAL_SLOT,
            self.stabilizer.len(),
            n,
            factorial(n - 1)
        )
        .unwrap();
        writeln!(
            out,
            "  round-robin <c>     : {} schedules",
            self.cyclic.len()
        )
        .unwrap();
        writeln!(out, "  deadlock    {{e}}     : 1 schedule").unwrap();
        writeln!(out, "  subgroup chains: {{e}} <= <c> <= S_{}", n).unwrap();
        writeln!(out, "                   {{e}} <= Stab({}) <= S_{}", CRITICAL_SLOT, n).unwrap();
        out
    }

    // A table classifying every schedule in the space. Only sensible for
    // small n; the caller picks the degree.
    pub fn classification_table(&self) -> String {
        let mut out = String::new();
        writeln!(
            out,
            "  {:<20} {:<10} {:<10} {}",
            "permutation", "deadlock", "mutex", "round-robin"
        )
        .unwrap();
        for c in self.classify_all() {
            writeln!(
                out,
                "  {:<20} {:<10} {:<10} {}",
                c.permutation,
                if c.is_deadlock { "yes" } else { "-" },
                if c.is_mutex { "yes" } else { "-" },
                if c.is_round_robin { "yes" } else { "-" },
            )
            .unwrap();
        }
        out
    }

    // The left cosets of the mutex subgroup. The leading coset is Stab(1)
    // itself; every other coset pins some other process into the critical
    // slot, which is exactly a mutex violation.
    pub fn coset_table(&self) -> String {
        let mut out = String::new();
        let cosets = coset_decomposition(&self.group, &self.stabilizer);
        writeln!(
            out,
            "Coset decomposition of S_{} by Stab({}):",
            self.n, CRITICAL_SLOT
        )
        .unwrap();
        for (idx, coset) in cosets.iter().enumerate() {
            if idx == 0 {
                writeln!(out, "  Stab({})  (admissible, mutex respected)", CRITICAL_SLOT).unwrap();
            } else {
                let representative = coset.iter().next().unwrap();
                let occupant = representative.apply(CRITICAL_SLOT);
                writeln!(
                    out,
                    "  coset {}  (violation: process {} in slot {})",
                    idx, occupant, CRITICAL_SLOT
                )
                .unwrap();
            }
            let elements: Vec<String> = coset.iter().map(|s| s.to_string()).collect();
            writeln!(out, "    {{ {} }}", elements.join(", ")).unwrap();
        }
        out
    }
}
