//! Client-side scheduling engine for the clinic booking grid.
//!
//! The remote API owns the appointment records; this crate holds a cached
//! snapshot and derives every view (week window, bookable cells, sorted and
//! filtered listings) as a pure function of that snapshot.
pub mod booking;
pub mod cli;
pub mod client;
pub mod core;
pub mod schedule;
