//! Attack simulations against the authority gate and transfer consent.

pub mod authority;
pub mod signatures;
