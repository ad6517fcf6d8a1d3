use std::collections::BTreeSet;

use crate::permutation::{Error, Permutation, Point, Result};

// Materializing S_n costs n! elements, so enumeration is only supported up
// to this degree. 10! is about 3.6 million elements, which is still
// comfortable to hold in memory; anything past that is rejected outright.
pub const MAX_DEGREE: usize = 10;

pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

// The symmetric group S_n: every permutation of the points 1..=n,
// materialized eagerly at construction.
#[derive(Debug)]
pub struct SymmetricGroup {
    degree: usize,

    // All permutations in the group.
    elements: BTreeSet<Permutation>,
}

impl SymmetricGroup {
    pub fn new(degree: usize) -> Result<SymmetricGroup> {
        if degree < 1 || degree > MAX_DEGREE {
            return Err(Error::BadDegree(degree));
        }
        let mut points: Vec<Point> = (1..=degree as Point).collect();
        let mut elements = BTreeSet::new();
        enumerate(degree, &mut points, &mut elements);
        Ok(SymmetricGroup { degree, elements })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn identity(&self) -> Permutation {
        Permutation::identity(self.degree)
    }

    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.elements.contains(permutation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permutation> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &BTreeSet<Permutation> {
        &self.elements
    }
}

// Heap's recursive-swap enumeration. Emits each arrangement of the points
// exactly once.
fn enumerate(k: usize, points: &mut [Point], out: &mut BTreeSet<Permutation>) {
    if k <= 1 {
        out.insert(Permutation::from_parts(points.to_vec()));
        return;
    }
    enumerate(k - 1, points, out);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            points.swap(i, k - 1);
        } else {
            points.swap(0, k - 1);
        }
        enumerate(k - 1, points, out);
    }
}

// Checks the three subgroup axioms for a finite candidate subset of S_n:
// the identity is present, the set is closed under composition, and every
// element's inverse is present. Answers on the first violation found.
// An element of the wrong degree is not an element of S_n at all, so any
// such candidate is simply not a subgroup.
pub fn is_subgroup(candidate: &BTreeSet<Permutation>, degree: usize) -> bool {
    for sigma in candidate {
        if sigma.degree() != degree {
            return false;
        }
    }
    if !candidate.contains(&Permutation::identity(degree)) {
        return false;
    }
    for sigma in candidate {
        for tau in candidate {
            if !candidate.contains(&sigma.compose(tau)) {
                return false;
            }
        }
    }
    for sigma in candidate {
        if !candidate.contains(&sigma.invert()) {
            return false;
        }
    }
    true
}

// Lagrange's theorem says a subgroup's order divides the group's order,
// which for S_n is n!.
pub fn verify_lagrange(subgroup_size: usize, degree: usize) -> bool {
    subgroup_size > 0 && factorial(degree) % subgroup_size == 0
}
