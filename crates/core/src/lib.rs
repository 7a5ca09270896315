//! Domain logic for the NeuroLattice savings calculator.
//!
//! Everything in this crate is pure: no I/O, no shared state. The API and
//! report crates call into it so on-screen numbers and the PDF report always
//! come from the same computation.

pub mod catalog;
pub mod contact;
pub mod display;
pub mod error;
pub mod format;
pub mod projection;
pub mod savings;
pub mod traffic;
pub mod workload;
