//! Data types for the job extraction library.

pub mod analysis;
pub mod company;
pub mod config;
pub mod directory;
pub mod page;
