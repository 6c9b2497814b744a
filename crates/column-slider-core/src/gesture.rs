//! Gesture input types and capture arbitration

/// Pointer position relative to the gesture origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureSample {
    /// Cumulative vertical offset in pixels (negative = up = larger value)
    pub vertical_displacement: f32,
}

impl GestureSample {
    pub fn new(vertical_displacement: f32) -> Self {
        Self {
            vertical_displacement,
        }
    }
}

/// Events delivered by the host for the single active contact
///
/// For one gesture the host guarantees `Start`, then zero or more `Move`,
/// then `End` or `Terminate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Contact went down on the track
    Start,
    /// Contact moved
    Move(GestureSample),
    /// Contact released
    End(GestureSample),
    /// Host revoked the gesture (handled exactly like `End`)
    Terminate(GestureSample),
}

/// How the slider answers the host's gesture arbitration questions
///
/// The slider captures on touch-down, never steals an in-flight move from
/// another responder, and never lets another responder take over its own
/// gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionPolicy;

impl AdmissionPolicy {
    /// Should a touch-down on the track become our gesture?
    pub fn should_capture_on_start(&self) -> bool {
        true
    }

    /// Should a move that started elsewhere be promoted to our drag?
    pub fn should_capture_on_move(&self) -> bool {
        false
    }

    /// May another responder take over our in-progress gesture?
    pub fn allow_termination_request(&self) -> bool {
        false
    }
}
