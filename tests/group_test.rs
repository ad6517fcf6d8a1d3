#[cfg(test)]
mod group_test {
    use std::collections::BTreeSet;

    use symsched::cyclic::{cyclic_subgroup, full_cycle};
    use symsched::permutation::{Permutation, Point};
    use symsched::stabilizer::{
        coset_decomposition, orbit, stabilizer, verify_orbit_stabilizer, verify_stabilizer,
    };
    use symsched::symmetric_group::{factorial, is_subgroup, verify_lagrange, SymmetricGroup};

    fn perm(degree: usize, s: &str) -> Permutation {
        Permutation::parse(degree, s).expect("bad cycle string in test")
    }

    #[test]
    fn test_symmetric_group_has_factorial_many_bijections() {
        for n in 1..=6 {
            let group = SymmetricGroup::new(n).unwrap();
            // The element set is a BTreeSet, so distinctness comes with size.
            assert_eq!(group.size(), factorial(n));
            for sigma in group.iter() {
                let image: BTreeSet<Point> = (1..=n as Point).map(|i| sigma.apply(i)).collect();
                assert_eq!(image.len(), n, "{} is not a bijection", sigma);
            }
        }
    }

    #[test]
    fn test_stabilizer_of_one_in_s3_is_exactly_two_elements() {
        let group = SymmetricGroup::new(3).unwrap();
        let stab = stabilizer(&group, 1).unwrap();

        assert_eq!(stab.len(), factorial(2));
        assert!(stab.contains(&group.identity()));
        assert!(stab.contains(&perm(3, "(2 3)")));
        assert!(is_subgroup(&stab, 3));
    }

    #[test]
    fn test_transposition_pair_is_a_subgroup_but_not_a_stabilizer_candidate() {
        // {e, (1 2)} satisfies all three subgroup axioms...
        let mut pair = BTreeSet::new();
        pair.insert(Permutation::identity(3));
        pair.insert(perm(3, "(1 2)"));
        assert!(is_subgroup(&pair, 3));

        // ...but it is not contained in Stab(1), since (1 2) moves 1.
        let group = SymmetricGroup::new(3).unwrap();
        let stab = stabilizer(&group, 1).unwrap();
        assert!(!pair.is_subset(&stab));
    }

    #[test]
    fn test_cyclic_subgroup_of_the_canonical_three_cycle() {
        let c = full_cycle(3).unwrap();
        assert_eq!(c, perm(3, "(1 2 3)"));

        let subgroup = cyclic_subgroup(&c);
        assert_eq!(subgroup.len(), 3);
        assert!(subgroup.contains(&Permutation::identity(3)));
        assert!(subgroup.contains(&c));
        assert!(subgroup.contains(&c.compose(&c)));
        assert!(is_subgroup(&subgroup, 3));
    }

    #[test]
    fn test_orbit_stabilizer_for_small_degrees() {
        for n in 1..=5 {
            for x in 1..=n as Point {
                assert!(verify_orbit_stabilizer(n, x).unwrap());
            }
        }
        // 3! = 3 x 2, spelled out.
        let group = SymmetricGroup::new(3).unwrap();
        let orb = orbit(&group, 1).unwrap();
        let stab = stabilizer(&group, 1).unwrap();
        assert_eq!(group.size(), 6);
        assert_eq!(orb.len(), 3);
        assert_eq!(stab.len(), 2);
    }

    #[test]
    fn test_trivial_subgroup_and_lagrange() {
        for n in 1..=6 {
            let trivial: BTreeSet<Permutation> =
                std::iter::once(Permutation::identity(n)).collect();
            assert!(is_subgroup(&trivial, n));
            assert!(verify_lagrange(trivial.len(), n));
        }
    }

    #[test]
    fn test_cosets_partition_s4() {
        let group = SymmetricGroup::new(4).unwrap();
        let stab = stabilizer(&group, 1).unwrap();
        let cosets = coset_decomposition(&group, &stab);

        assert_eq!(cosets.len(), 4);
        assert_eq!(cosets[0], stab);

        // Pairwise disjoint and jointly exhaustive.
        let mut seen: BTreeSet<Permutation> = BTreeSet::new();
        for coset in &cosets {
            for sigma in coset {
                assert!(seen.insert(sigma.clone()), "{} appears in two cosets", sigma);
            }
        }
        assert_eq!(seen.len(), group.size());
    }

    #[test]
    fn test_full_stabilizer_verification_across_degrees() {
        for n in 2..=6 {
            let report = verify_stabilizer(n, 1).unwrap();
            assert!(report.passed(), "stabilizer verification failed for n={}", n);
            assert_eq!(report.stabilizer_order, factorial(n - 1));
            assert_eq!(report.orbit_size, n);
            assert_eq!(report.index, n);
        }
    }

    #[test]
    fn test_malformed_inputs_are_rejected() {
        assert!(SymmetricGroup::new(0).is_err());
        assert!(SymmetricGroup::new(11).is_err());
        let group = SymmetricGroup::new(3).unwrap();
        assert!(stabilizer(&group, 0).is_err());
        assert!(stabilizer(&group, 4).is_err());
        assert!(verify_orbit_stabilizer(3, 7).is_err());
        assert!(Permutation::from_mapping(vec![1, 2, 2]).is_err());
    }
}
