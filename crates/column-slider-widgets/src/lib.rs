//! iced widgets for the column slider
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct**: `ColumnSlider` owns the core `DragController` plus
//!   pointer bookkeeping and appearance
//! - **View function**: `ColumnSlider::view` takes an event-to-message closure
//!   and returns `Element<Message>`
//! - **Update**: the app passes `ColumnSliderEvent`s back to
//!   `ColumnSlider::handle_event`, which yields change/commit outputs
//!
//! No Canvas is used; the track is two nested containers.

pub mod column_slider;
pub mod theme;

pub use column_slider::{Appearance, AppearanceConfig, ColumnSlider, ColumnSliderEvent};
pub use theme::parse_hex_color;

// Core types most callers need alongside the widget
pub use column_slider_core::{
    ExternalResetPolicy, RenderState, SliderConfig, SliderOutput, SliderProps, SliderRange,
};
