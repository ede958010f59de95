//! Data fetching and filter-state synchronization for the archive frontend.
//!
//! Everything in this crate is UI-free: the Dioxus layer owns signals and
//! timers and drives these state machines from its hooks.

pub mod api;
pub mod debounce;
pub mod filter_sync;
pub mod fingerprint;
pub mod locale;
pub mod locked_subjects;
