//! Types shared by the voting dashboard crates.

pub mod voting;
