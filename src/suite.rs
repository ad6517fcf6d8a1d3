use crate::cyclic::verify_cyclic;
use crate::interfaces::{ClaimReport, SuiteReport};
use crate::permutation::Result;
use crate::stabilizer::verify_stabilizer;
use crate::symmetric_group::{factorial, SymmetricGroup};

// The suite checks four claims per degree:
//   1. the scheduling space has exactly n! schedules
//   2. the mutex correspondence (stabilizer subgroup of order (n-1)!)
//   3. the round-robin correspondence (cyclic subgroup of order n)
//   4. the deadlock state is unique (exactly one schedule fixes every slot)

// The suite emits a stream of these while it runs.
#[derive(Debug)]
pub struct CheckEvent {
    // Human-readable
    pub message: String,

    // Some(passed) for a check line, None for an informational line.
    pub outcome: Option<bool>,

    // Current progress is done / total, counted in degrees.
    pub progress: Option<(usize, usize)>,
}

impl CheckEvent {
    pub fn default() -> CheckEvent {
        CheckEvent {
            message: String::new(),
            outcome: None,
            progress: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SuiteStatus {
    Pass,
    Fail,
}

// Runs the verification suite and reports what happened through a
// caller-supplied event handler. A single Suite is used across all degrees.
pub struct Suite {
    pub status: SuiteStatus,
}

impl Suite {
    pub fn new() -> Suite {
        Suite {
            status: SuiteStatus::Pass,
        }
    }

    fn check(
        &mut self,
        handler: &mut impl FnMut(CheckEvent),
        message: String,
        passed: bool,
    ) -> bool {
        if !passed {
            self.status = SuiteStatus::Fail;
        }
        handler(CheckEvent {
            message,
            outcome: Some(passed),
            ..CheckEvent::default()
        });
        passed
    }

    fn info(&mut self, handler: &mut impl FnMut(CheckEvent), message: String) {
        handler(CheckEvent {
            message,
            ..CheckEvent::default()
        });
    }

    // Verifies every claim for every degree. Malformed degrees surface as
    // errors before any event fires for them; claim failures only flip the
    // status and the per-check outcome.
    pub fn run(
        &mut self,
        degrees: &[usize],
        handler: &mut impl FnMut(CheckEvent),
    ) -> Result<SuiteReport> {
        let mut claims = Vec::new();
        for (done, &n) in degrees.iter().enumerate() {
            self.info(handler, format!("verifying claims for n = {}", n));
            let claim = self.run_degree(n, handler)?;
            claims.push(claim);
            handler(CheckEvent {
                progress: Some((done + 1, degrees.len())),
                ..CheckEvent::default()
            });
        }
        let all_passed = self.status == SuiteStatus::Pass;
        Ok(SuiteReport {
            degrees: degrees.to_vec(),
            claims,
            all_passed,
        })
    }

    fn run_degree(&mut self, n: usize, handler: &mut impl FnMut(CheckEvent)) -> Result<ClaimReport> {
        let group = SymmetricGroup::new(n)?;

        // Claim 1: the space is all of S_n.
        let group_order_ok = group.size() == factorial(n);
        self.check(
            handler,
            format!("|S_{}| = {} (expected {}! = {})", n, group.size(), n, factorial(n)),
            group_order_ok,
        );

        // Claim 2: mutual exclusion is the stabilizer subgroup.
        let stab = verify_stabilizer(n, 1)?;
        self.check(
            handler,
            format!("Stab(1) is a subgroup of S_{}", n),
            stab.subgroup_ok,
        );
        self.check(
            handler,
            format!(
                "|Stab(1)| = {} (expected ({}-1)! = {})",
                stab.stabilizer_order, n, stab.expected_order
            ),
            stab.order_ok,
        );
        self.check(
            handler,
            format!(
                "orbit-stabilizer: {} = {} x {}",
                group.size(),
                stab.orbit_size,
                stab.stabilizer_order
            ),
            stab.orbit_stabilizer_ok,
        );
        self.check(
            handler,
            format!("index [S_{} : Stab(1)] = {} (expected {})", n, stab.index, n),
            stab.index_ok,
        );
        self.check(
            handler,
            format!(
                "coset decomposition: {} cosets x {} elements = {}",
                stab.coset_count,
                stab.stabilizer_order,
                group.size()
            ),
            stab.cosets_cover_group,
        );

        // Claim 3: round-robin is the cyclic subgroup.
        let cyclic = verify_cyclic(n)?;
        self.check(
            handler,
            format!("<{}> is a subgroup of S_{}", cyclic.generator, n),
            cyclic.subgroup_ok,
        );
        self.check(
            handler,
            format!(
                "|<c>| = {} (expected {}), divides {}!",
                cyclic.order, cyclic.expected_order, n
            ),
            cyclic.order_ok && cyclic.divides_group_order,
        );

        // Claim 4: deadlock is unique. Exactly one schedule fixes every slot,
        // and it is the identity.
        let fixed_all: Vec<_> = group.iter().filter(|s| s.is_identity()).collect();
        let identity_unique = fixed_all.len() == 1 && *fixed_all[0] == group.identity();
        self.check(
            handler,
            format!("the identity is the unique everywhere-fixed schedule in S_{}", n),
            identity_unique,
        );

        Ok(ClaimReport {
            degree: n,
            group_order: group.size(),
            group_order_ok,
            stabilizer: stab,
            cyclic,
            identity_unique,
        })
    }
}
