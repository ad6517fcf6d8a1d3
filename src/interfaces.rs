// Report structs produced by the verification layer and consumed by the
// CLI binaries. `check --json` prints a SuiteReport in exactly this shape,
// so field renames here change the output format.

use serde::{Deserialize, Serialize};

use crate::permutation::Point;

// The result of verifying the stabilizer correspondence for one degree:
// Stab(x) is a subgroup of order (n-1)!, the orbit-stabilizer identity
// holds, the index is n, and the cosets tile the whole group.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilizerReport {
    pub degree: usize,
    pub fixed_point: Point,
    pub subgroup_ok: bool,
    pub stabilizer_order: usize,
    pub expected_order: usize,
    pub order_ok: bool,
    pub orbit_size: usize,
    pub orbit_stabilizer_ok: bool,
    pub index: usize,
    pub index_ok: bool,
    pub coset_count: usize,
    pub cosets_cover_group: bool,
}

impl StabilizerReport {
    pub fn passed(&self) -> bool {
        self.subgroup_ok
            && self.order_ok
            && self.orbit_stabilizer_ok
            && self.index_ok
            && self.cosets_cover_group
    }
}

// The result of verifying the cyclic correspondence for one degree:
// the subgroup generated by the full cycle has order n and divides n!.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclicReport {
    pub degree: usize,
    pub generator: String,
    pub subgroup_ok: bool,
    pub order: usize,
    pub expected_order: usize,
    pub order_ok: bool,
    pub divides_group_order: bool,
}

impl CyclicReport {
    pub fn passed(&self) -> bool {
        self.subgroup_ok && self.order_ok && self.divides_group_order
    }
}

// All four claims for a single degree.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReport {
    pub degree: usize,
    pub group_order: usize,
    pub group_order_ok: bool,
    pub stabilizer: StabilizerReport,
    pub cyclic: CyclicReport,
    pub identity_unique: bool,
}

impl ClaimReport {
    pub fn passed(&self) -> bool {
        self.group_order_ok
            && self.stabilizer.passed()
            && self.cyclic.passed()
            && self.identity_unique
    }
}

// A whole run of the suite, one ClaimReport per degree.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    pub degrees: Vec<usize>,
    pub claims: Vec<ClaimReport>,
    pub all_passed: bool,
}

// How one schedule relates to each of the three constraint subgroups.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    // Cycle notation, "e" for the identity.
    pub permutation: String,
    pub is_deadlock: bool,
    pub is_mutex: bool,
    pub is_round_robin: bool,
}
