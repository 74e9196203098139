// Each integration test binary uses a different subset of the mocks.
#![allow(dead_code)]

pub mod mocks;
