//! Core logic for the column slider
//!
//! This crate has no UI dependencies. It provides:
//! - `SliderRange`: value bounds and step granularity
//! - `map_displacement_to_value`: pixel displacement to clamped, stepped value
//! - `DragController`: single-contact gesture state machine with change/commit output
//! - `ValueStore`: one-way resync of the live value from an external input
//! - `SliderConfig`: YAML-backed configuration
//!
//! # Architecture
//!
//! ```text
//! pointer events → GestureEvent → DragController → SliderOutput → callbacks / iced messages
//!                                       ↑
//!                    external value → ValueStore::reconcile_external
//! ```
//!
//! The renderer only reads `RenderState` (value + fill ratio) and holds no logic.

pub mod callbacks;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod mapping;
pub mod range;
pub mod store;

pub use callbacks::SliderCallbacks;
pub use config::{load_yaml_or_default, save_yaml, SliderConfig};
pub use controller::{DragController, RenderState, SliderOutput, SliderProps};
pub use error::SliderError;
pub use gesture::{AdmissionPolicy, GestureEvent, GestureSample};
pub use mapping::{map_displacement_to_value, truncate_to_hundredths};
pub use range::SliderRange;
pub use store::{ExternalResetPolicy, ValueStore};
