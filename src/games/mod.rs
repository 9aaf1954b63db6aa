//! Game implementations.

pub mod landlord;
