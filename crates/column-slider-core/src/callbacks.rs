//! Caller-supplied change/commit callbacks
//!
//! Callbacks are trusted code: a panic inside one propagates to the caller of
//! `dispatch`.

use std::fmt;

use crate::controller::SliderOutput;

type ValueCallback = Box<dyn FnMut(f64)>;

#[derive(Default)]
pub struct SliderCallbacks {
    on_change: Option<ValueCallback>,
    on_complete: Option<ValueCallback>,
}

impl fmt::Debug for SliderCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl SliderCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired on every accepted move
    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Fired once when a gesture ends
    pub fn on_complete(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Route a controller output to the matching callback, if any
    pub fn dispatch(&mut self, output: SliderOutput) {
        let (callback, value) = match output {
            SliderOutput::Changed(value) => (self.on_change.as_mut(), value),
            SliderOutput::Completed(value) => (self.on_complete.as_mut(), value),
        };
        if let Some(callback) = callback {
            callback(value);
        }
    }
}
