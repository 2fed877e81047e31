//! Integration test suite for habits.
//!
//! These tests drive the [`Tracker`](habits::Tracker) facade and the lower
//! level pool and engine against real on-disk stores, checking that state
//! survives process restarts and day boundaries.
//!
//! # Test Categories
//!
//! - `daily_cycle`: Selection lifetime across days, refresh and toggling
//! - `selection_bounds`: Class counts over many draws
//! - `pool_management`: Pool editing and its effect on selections
//! - `recovery`: Corrupt or legacy records on disk
//!
//! Randomness is pinned with seeded sources and dates with a fixed clock,
//! so every test is deterministic.

mod fixtures;

mod pool_management;
mod recovery;
mod selection_bounds;
