use std::collections::BTreeSet;

use crate::interfaces::CyclicReport;
use crate::permutation::{Error, Permutation, Point, Result};
use crate::symmetric_group::{is_subgroup, verify_lagrange, MAX_DEGREE};

// The cyclic subgroup ⟨c⟩ generated by the full rotation c = (1 2 ... n).
// In the scheduling interpretation its elements are the round-robin
// schedules: every process shifts by the same amount.

// The canonical n-cycle (1 2 ... n): each point moves to its successor,
// the last wraps around to 1.
pub fn full_cycle(degree: usize) -> Result<Permutation> {
    if degree < 1 || degree > MAX_DEGREE {
        return Err(Error::BadDegree(degree));
    }
    let mut map: Vec<Point> = (2..=degree as Point).collect();
    map.push(1);
    Ok(Permutation::from_parts(map))
}

// All powers of the generator, duplicates collapsed, so the size equals the
// generator's multiplicative order. Works for any generator, not just full
// cycles.
pub fn cyclic_subgroup(generator: &Permutation) -> BTreeSet<Permutation> {
    let mut elements = BTreeSet::new();
    let mut current = Permutation::identity(generator.degree());
    while elements.insert(current.clone()) {
        current = generator.compose(&current);
    }
    elements
}

// Verifies the round-robin correspondence for one degree: ⟨c⟩ is a subgroup
// of order exactly n, and that order divides n!.
pub fn verify_cyclic(degree: usize) -> Result<CyclicReport> {
    let generator = full_cycle(degree)?;
    let subgroup = cyclic_subgroup(&generator);
    Ok(CyclicReport {
        degree,
        generator: generator.to_string(),
        subgroup_ok: is_subgroup(&subgroup, degree),
        order: subgroup.len(),
        expected_order: degree,
        order_ok: subgroup.len() == degree,
        divides_group_order: verify_lagrange(subgroup.len(), degree),
    })
}
