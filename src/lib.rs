//! Sessionizer - Event-Stream Sessionization
//!
//! This crate groups raw interaction events (taps, swipes, check-in/check-out
//! markers) into discrete sessions: contiguous spans of activity bounded by
//! periods of inactivity or by explicit open/close marker events.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
