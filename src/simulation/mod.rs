//! Random scenario generation for tests and benchmarks.

pub mod random_group;
