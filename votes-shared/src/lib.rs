//! # Votes Shared
//! This crate defines shared data structures and types used across the voting ecosystem.
//! It includes common definitions for vote types, vote targets, vote records, user
//! scores, and the fixed payout table applied to every vote transition.
pub mod types;
