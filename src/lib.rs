pub mod cyclic;
pub mod interfaces;
pub mod permutation;
pub mod scheduler;
pub mod stabilizer;
pub mod suite;
pub mod symmetric_group;
