//! Drag controller: single-contact gesture state machine
//!
//! ```text
//!            start (admitted)             move → Changed(v)
//!   Idle ───────────────────────► Armed ◄─────────────────┐
//!    ▲   start while Armed: ignored  │ └──────────────────┘
//!    └───────────────────────────────┘ end / terminate → Completed(v)
//! ```
//!
//! Disablement is checked per event, not latched at start: moves and ends
//! while disabled are dropped but the gesture stays armed, so re-enabling
//! before release resumes the drag from the original start value.

use crate::callbacks::SliderCallbacks;
use crate::gesture::{AdmissionPolicy, GestureEvent, GestureSample};
use crate::mapping::map_displacement_to_value;
use crate::range::SliderRange;
use crate::store::{ExternalResetPolicy, ValueStore};

/// Construction parameters for a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderProps {
    /// Seeds the live value; feed later changes through `reconcile_external`
    pub initial_value: f64,
    /// Freezes the value against gestures
    pub disabled: bool,
    pub range: SliderRange,
    /// Pixel length mapped to the full range
    pub track_height: f32,
    pub reset_policy: ExternalResetPolicy,
}

impl SliderProps {
    /// Defaults: value 0, enabled, range `[0, 1]` continuous
    pub fn new(track_height: f32) -> Self {
        Self {
            initial_value: 0.0,
            disabled: false,
            range: SliderRange::default(),
            track_height,
            reset_policy: ExternalResetPolicy::default(),
        }
    }

    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range.min = min;
        self.range.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.range.step = step;
        self
    }

    pub fn reset_policy(mut self, policy: ExternalResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }
}

/// Values reported to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderOutput {
    /// In-flight update from a move
    Changed(f64),
    /// Final value at gesture end
    Completed(f64),
}

impl SliderOutput {
    pub fn value(&self) -> f64 {
        match *self {
            SliderOutput::Changed(v) | SliderOutput::Completed(v) => v,
        }
    }
}

/// What the renderer needs, nothing more
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub value: f64,
    /// `(value - min) / (max - min)`, 0.0 for empty or inverted ranges
    pub fill_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct DragController {
    range: SliderRange,
    track_height: f32,
    disabled: bool,
    store: ValueStore,
    /// Value captured at gesture start; `Some` while a gesture is active
    drag_start_value: Option<f64>,
    admission: AdmissionPolicy,
}

impl DragController {
    pub fn new(props: SliderProps) -> Self {
        if let Err(e) = props.range.validate() {
            log::warn!("DragController: {} (values will clamp to min)", e);
        }
        if props.track_height.is_nan() || props.track_height <= 0.0 {
            log::warn!(
                "DragController: track height {} is not positive, drags will not move the value",
                props.track_height
            );
        }

        Self {
            range: props.range,
            track_height: props.track_height,
            disabled: props.disabled,
            store: ValueStore::new(props.initial_value, &props.range, props.reset_policy),
            drag_start_value: None,
            admission: AdmissionPolicy,
        }
    }

    pub fn value(&self) -> f64 {
        self.store.value()
    }

    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    /// Replace the range; the live value is re-clamped
    pub fn set_range(&mut self, range: SliderRange) {
        self.range = range;
        self.store.reclamp(&self.range);
    }

    pub fn track_height(&self) -> f32 {
        self.track_height
    }

    pub fn set_track_height(&mut self, track_height: f32) {
        self.track_height = track_height;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Takes effect on the next event, including for an active gesture
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start_value.is_some()
    }

    pub fn drag_start_value(&self) -> Option<f64> {
        self.drag_start_value
    }

    pub fn admission(&self) -> &AdmissionPolicy {
        &self.admission
    }

    pub fn reset_policy(&self) -> ExternalResetPolicy {
        self.store.policy()
    }

    pub fn set_reset_policy(&mut self, policy: ExternalResetPolicy) {
        self.store.set_policy(policy);
    }

    pub fn render_state(&self) -> RenderState {
        let value = self.value();
        RenderState {
            value,
            fill_ratio: self.range.fill_ratio(value),
        }
    }

    /// Feed the host's current external value (see `ValueStore`)
    pub fn reconcile_external(&mut self, external: f64) -> bool {
        let dragging = self.is_dragging();
        self.store.reconcile_external(external, &self.range, dragging)
    }

    /// Arm the controller for a new gesture
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn on_gesture_start(&mut self) -> bool {
        if !self.admission.should_capture_on_start() {
            return false;
        }
        if let Some(start) = self.drag_start_value {
            log::trace!("on_gesture_start: ignored, gesture from {} still active", start);
            return false;
        }

        let start = self.value();
        self.drag_start_value = Some(start);
        log::debug!("on_gesture_start: drag armed at {}", start);
        true
    }

    /// Returns the new value if the move was applied
    pub fn on_gesture_move(&mut self, sample: GestureSample) -> Option<f64> {
        self.apply(sample)
    }

    /// Returns the committed value and disarms, unless disabled or idle
    pub fn on_gesture_end(&mut self, sample: GestureSample) -> Option<f64> {
        let value = self.apply(sample)?;
        self.drag_start_value = None;
        log::debug!("on_gesture_end: committed {}", value);
        Some(value)
    }

    /// Host revoked the gesture; treated exactly like a release
    pub fn on_gesture_terminate(&mut self, sample: GestureSample) -> Option<f64> {
        self.on_gesture_end(sample)
    }

    /// Another responder asks to take over the active gesture
    ///
    /// Always refused while our gesture is active.
    pub fn request_termination(&self) -> bool {
        let allowed = !self.is_dragging() || self.admission.allow_termination_request();
        if !allowed {
            log::trace!("request_termination: refused");
        }
        allowed
    }

    /// Disarm without committing (for hosts that lost the end event)
    pub fn cancel_gesture(&mut self) {
        if self.drag_start_value.take().is_some() {
            log::debug!("cancel_gesture: gesture dropped at {}", self.value());
        }
    }

    /// Dispatch one event, returning what the host should report
    pub fn handle_event(&mut self, event: GestureEvent) -> Option<SliderOutput> {
        match event {
            GestureEvent::Start => {
                self.on_gesture_start();
                None
            }
            GestureEvent::Move(sample) => self.on_gesture_move(sample).map(SliderOutput::Changed),
            GestureEvent::End(sample) => self.on_gesture_end(sample).map(SliderOutput::Completed),
            GestureEvent::Terminate(sample) => {
                self.on_gesture_terminate(sample).map(SliderOutput::Completed)
            }
        }
    }

    /// `handle_event` plus callback invocation
    pub fn handle_event_with(
        &mut self,
        event: GestureEvent,
        callbacks: &mut SliderCallbacks,
    ) -> Option<SliderOutput> {
        let output = self.handle_event(event)?;
        callbacks.dispatch(output);
        Some(output)
    }

    fn apply(&mut self, sample: GestureSample) -> Option<f64> {
        if self.disabled {
            return None;
        }
        let start = self.drag_start_value?;
        let value = map_displacement_to_value(
            sample.vertical_displacement,
            start,
            &self.range,
            self.track_height,
        );
        self.store.set_live(value);
        Some(value)
    }
}
