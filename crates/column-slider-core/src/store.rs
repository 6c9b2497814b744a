//! Live value plus one-way resync from an external input
//!
//! The host owns an "external" value (e.g. a model field) and pushes it in via
//! `reconcile_external` whenever it may have changed. The store only reacts
//! when the pushed value differs from the last one it saw, so a host can call
//! it on every frame without clobbering drag results. Nothing is ever written
//! back to the external side.

use serde::{Deserialize, Serialize};

use crate::range::SliderRange;

/// What an external value change does while a drag is in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalResetPolicy {
    /// Overwrite the live value immediately. The next move still measures from
    /// the value captured at gesture start, so the drag "snaps back" onto its
    /// own track.
    #[default]
    Overwrite,
    /// Remember the external value but leave the live value alone until the
    /// gesture ends.
    DeferWhileDragging,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueStore {
    /// Value shown and reported by the slider
    value: f64,
    /// Last external value observed
    last_external: f64,
    policy: ExternalResetPolicy,
}

impl ValueStore {
    /// Seed from the external value (clamped into `range`)
    pub fn new(external: f64, range: &SliderRange, policy: ExternalResetPolicy) -> Self {
        Self {
            value: range.clamp(external),
            last_external: external,
            policy,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn last_external(&self) -> f64 {
        self.last_external
    }

    pub fn policy(&self) -> ExternalResetPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ExternalResetPolicy) {
        self.policy = policy;
    }

    /// Set the live value from a gesture (caller clamps)
    pub(crate) fn set_live(&mut self, value: f64) {
        self.value = value;
    }

    /// Re-clamp after the range changed
    pub(crate) fn reclamp(&mut self, range: &SliderRange) {
        self.value = range.clamp(self.value);
    }

    /// Feed the current external value
    ///
    /// Returns `true` if the live value was overwritten.
    pub fn reconcile_external(&mut self, external: f64, range: &SliderRange, dragging: bool) -> bool {
        // NaN != NaN would retrigger forever
        if external == self.last_external || (external.is_nan() && self.last_external.is_nan()) {
            return false;
        }
        self.last_external = external;

        if dragging && self.policy == ExternalResetPolicy::DeferWhileDragging {
            log::debug!(
                "reconcile_external: deferring external value {} until gesture ends",
                external
            );
            return false;
        }

        log::debug!("reconcile_external: live value {} -> {}", self.value, external);
        self.value = range.clamp(external);
        true
    }
}
