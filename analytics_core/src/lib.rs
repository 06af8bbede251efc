//! # dialstat analytics core
//!
//! Multi-clock temporal analytics for discrete, user-adjustable controls
//! (switches, selectors, six-state sliders). The core measures how long
//! each control sits in each state and how often a person corrects it,
//! resolved per clock representation.
//!
//! ## Features
//!
//! - **Bucket arithmetic**: 2016 five-minute time-of-week buckets and their
//!   cyclic/aggregation math
//! - **Clock mappers**: UTC, civil/local, mean solar, apparent solar and
//!   unequal (temporal) hours, each mapping a real instant to a bucket or
//!   an explicit "undefined"
//! - **Interval splitting**: allocating a holding interval's milliseconds
//!   onto the buckets it overlaps, exactly, per clock
//! - **Dense array indexing**: the flat `N² × 10080` per-control layout
//!   shared with persisted blobs and downstream consumers
//! - **Ingestion**: applying one committed state change to a control's
//!   array
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: value types (buckets, clocks, controls, instants)
//! - [`solar`]: the injectable sunrise/sunset provider and its NOAA default
//! - [`clocks`]: the five clock mappers behind one exhaustive dispatch
//! - [`algorithms`]: the boundary-searching interval splitter
//! - [`analytics`]: dense array index arithmetic and blob helpers
//! - [`services`]: committed-change ingestion
//! - [`config`]: site configuration from the environment
//!
//! Everything is pure, synchronous and free of shared state; the caller
//! owns array persistence and mutation discipline.

pub mod algorithms;
pub mod analytics;
pub mod clocks;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod solar;
