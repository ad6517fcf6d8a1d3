use std::collections::BTreeSet;

use crate::interfaces::StabilizerReport;
use crate::permutation::{Error, Permutation, Point, Result};
use crate::symmetric_group::{factorial, is_subgroup, SymmetricGroup};

// The stabilizer of x is the subgroup of permutations that fix x:
// Stab(x) = { σ ∈ S_n | σ(x) = x }.
// In the scheduling interpretation these are the schedules that leave the
// process in slot x alone.

pub(crate) fn check_point(degree: usize, x: Point) -> Result<()> {
    if x < 1 || x as usize > degree {
        return Err(Error::BadPoint(x, degree));
    }
    Ok(())
}

pub fn stabilizer(group: &SymmetricGroup, x: Point) -> Result<BTreeSet<Permutation>> {
    check_point(group.degree(), x)?;
    Ok(group.iter().filter(|s| s.apply(x) == x).cloned().collect())
}

// The orbit of x under the natural action. S_n acts transitively,
// so this is always the whole domain.
pub fn orbit(group: &SymmetricGroup, x: Point) -> Result<BTreeSet<Point>> {
    check_point(group.degree(), x)?;
    Ok(group.iter().map(|s| s.apply(x)).collect())
}

// The left coset σ·H = { σ ∘ h | h ∈ H }.
pub fn left_coset(sigma: &Permutation, subgroup: &BTreeSet<Permutation>) -> BTreeSet<Permutation> {
    subgroup.iter().map(|h| sigma.compose(h)).collect()
}

// Decomposes S_n into the distinct left cosets of the subgroup.
// The identity is the minimum of the group in one-line order, so the first
// representative is always e and the subgroup itself leads the list.
pub fn coset_decomposition(
    group: &SymmetricGroup,
    subgroup: &BTreeSet<Permutation>,
) -> Vec<BTreeSet<Permutation>> {
    let mut covered: BTreeSet<Permutation> = BTreeSet::new();
    let mut cosets = Vec::new();
    for sigma in group.iter() {
        if covered.contains(sigma) {
            continue;
        }
        let coset = left_coset(sigma, subgroup);
        for element in &coset {
            covered.insert(element.clone());
        }
        cosets.push(coset);
    }
    cosets
}

// The orbit-stabilizer identity: |S_n| = |Orb(x)| * |Stab(x)|.
pub fn verify_orbit_stabilizer(degree: usize, x: Point) -> Result<bool> {
    let group = SymmetricGroup::new(degree)?;
    let stab = stabilizer(&group, x)?;
    let orb = orbit(&group, x)?;
    Ok(group.size() == orb.len() * stab.len())
}

// Verifies everything the stabilizer correspondence claims for one degree:
// subgroup axioms, order (n-1)!, orbit-stabilizer, index n, and that the
// cosets tile the whole group.
pub fn verify_stabilizer(degree: usize, x: Point) -> Result<StabilizerReport> {
    let group = SymmetricGroup::new(degree)?;
    let stab = stabilizer(&group, x)?;
    let orb = orbit(&group, x)?;
    let cosets = coset_decomposition(&group, &stab);

    let expected_order = factorial(degree - 1);
    let index = group.size() / stab.len();
    let covered: usize = cosets.iter().map(|c| c.len()).sum();

    Ok(StabilizerReport {
        degree,
        fixed_point: x,
        subgroup_ok: is_subgroup(&stab, degree),
        stabilizer_order: stab.len(),
        expected_order,
        order_ok: stab.len() == expected_order,
        orbit_size: orb.len(),
        orbit_stabilizer_ok: group.size() == orb.len() * stab.len(),
        index,
        index_ok: index == degree,
        coset_count: cosets.len(),
        cosets_cover_group: cosets.len() == degree && covered == group.size(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stabilizer_of_one_in_s3() {
        let group = SymmetricGroup::new(3).unwrap();
        let stab = stabilizer(&group, 1).unwrap();

        let mut expected = BTreeSet::new();
        expected.insert(Permutation::identity(3));
        expected.insert(Permutation::parse(3, "(2 3)").unwrap());
        assert_eq!(stab, expected);
        assert!(is_subgroup(&stab, 3));
    }

    #[test]
    fn test_stabilizer_orders() {
        for n in 2..=5 {
            let group = SymmetricGroup::new(n).unwrap();
            for x in 1..=n as Point {
                let stab = stabilizer(&group, x).unwrap();
                assert_eq!(stab.len(), factorial(n - 1));
            }
        }
    }

    #[test]
    fn test_point_bounds() {
        let group = SymmetricGroup::new(3).unwrap();
        assert!(stabilizer(&group, 0).is_err());
        assert!(stabilizer(&group, 4).is_err());
        assert!(orbit(&group, 4).is_err());
    }

    #[test]
    fn test_orbit_is_whole_domain() {
        let group = SymmetricGroup::new(4).unwrap();
        let orb = orbit(&group, 2).unwrap();
        let whole_domain: BTreeSet<Point> = (1..=4).collect();
        assert_eq!(orb, whole_domain);
    }

    #[test]
    fn test_orbit_stabilizer_identity() {
        for n in 1..=5 {
            assert!(verify_orbit_stabilizer(n, 1).unwrap());
        }
    }

    #[test]
    fn test_coset_decomposition_tiles_the_group() {
        let group = SymmetricGroup::new(4).unwrap();
        let stab = stabilizer(&group, 1).unwrap();
        let cosets = coset_decomposition(&group, &stab);

        assert_eq!(cosets.len(), 4);
        assert_eq!(cosets[0], stab);
        let covered: usize = cosets.iter().map(|c| c.len()).sum();
        assert_eq!(covered, group.size());
        for coset in &cosets {
            assert_eq!(coset.len(), stab.len());
        }
    }

    #[test]
    fn test_full_stabilizer_report() {
        let report = verify_stabilizer(3, 1).unwrap();
        assert!(report.passed());
        assert_eq!(report.stabilizer_order, 2);
        assert_eq!(report.orbit_size, 3);
        assert_eq!(report.index, 3);

        // A second run returns the identical report.
        assert_eq!(report, verify_stabilizer(3, 1).unwrap());
    }
}
