//! End-to-end registry flows.

pub mod lifecycle;
