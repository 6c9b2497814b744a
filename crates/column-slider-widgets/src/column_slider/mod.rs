//! Vertical column slider widget
//!
//! A rectangular track filled from the bottom up to the current value, with
//! the value printed above it and an optional icon below. Dragging anywhere on
//! the track moves the value relative to where the press happened.
//!
//! # Usage
//!
//! ```rust,ignore
//! // Create once, in your app state
//! let mut slider = ColumnSlider::new(
//!     SliderProps::new(300.0).range(0.0, 50.0).step(1.0),
//!     Appearance::default(),
//! );
//!
//! // In your view function
//! slider.view(None, Message::Slider)
//!
//! // In your update function
//! match slider.handle_event(event) {
//!     Some(SliderOutput::Changed(v)) => { /* live update */ }
//!     Some(SliderOutput::Completed(v)) => { /* commit */ }
//!     None => {}
//! }
//! ```

mod appearance;

use column_slider_core::{
    DragController, GestureEvent, GestureSample, RenderState, SliderOutput, SliderProps,
};
use iced::widget::{column, container, mouse_area, text, Space};
use iced::{Background, Border, Element, Length, Point, Shadow, Vector};

pub use appearance::{Appearance, AppearanceConfig};

use crate::theme;

/// Pointer events emitted by the slider view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSliderEvent {
    /// Mouse button pressed on the track
    Pressed,
    /// Mouse button released over the track
    Released,
    /// Cursor moved over the track (widget-local coordinates)
    Moved(Point),
    /// Cursor left the track
    Exited,
}

/// A column slider: core drag state plus pointer bookkeeping and looks
#[derive(Debug, Clone)]
pub struct ColumnSlider {
    controller: DragController,
    appearance: Appearance,
    /// Last cursor position seen over the track
    cursor: Option<Point>,
    /// Where the active press happened
    press_origin: Option<Point>,
    /// Displacement of the latest move, reused at release
    last_displacement: f32,
}

impl ColumnSlider {
    pub fn new(props: SliderProps, appearance: Appearance) -> Self {
        Self {
            controller: DragController::new(props),
            appearance,
            cursor: None,
            press_origin: None,
            last_displacement: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragController {
        &mut self.controller
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    /// Feed the externally bound value (call whenever it may have changed)
    pub fn reconcile_external(&mut self, external: f64) -> bool {
        self.controller.reconcile_external(external)
    }

    pub fn render_state(&self) -> RenderState {
        self.controller.render_state()
    }

    /// Handle a slider event and return what should be reported, if anything
    pub fn handle_event(&mut self, event: ColumnSliderEvent) -> Option<SliderOutput> {
        match event {
            ColumnSliderEvent::Pressed => {
                if self.controller.on_gesture_start() {
                    self.press_origin = self.cursor;
                    self.last_displacement = 0.0;
                }
                None
            }
            ColumnSliderEvent::Moved(position) => {
                self.cursor = Some(position);
                if !self.controller.is_dragging() {
                    return None;
                }
                // No hover position before the press: anchor on the first move
                let origin = *self.press_origin.get_or_insert(position);
                self.last_displacement = position.y - origin.y;
                self.controller
                    .handle_event(GestureEvent::Move(GestureSample::new(self.last_displacement)))
            }
            ColumnSliderEvent::Released => {
                let sample = GestureSample::new(self.last_displacement);
                let output = self.controller.handle_event(GestureEvent::End(sample));
                self.end_contact();
                output
            }
            ColumnSliderEvent::Exited => {
                self.cursor = None;
                if !self.controller.is_dragging() {
                    return None;
                }
                // Release events outside the track never reach us
                let sample = GestureSample::new(self.last_displacement);
                let output = self.controller.handle_event(GestureEvent::Terminate(sample));
                self.end_contact();
                output
            }
        }
    }

    /// The button is up: whatever the controller did with the end event,
    /// this contact can no longer drive the value
    fn end_contact(&mut self) {
        if self.controller.is_dragging() {
            // End was dropped (disabled); a later hover must not resume it
            self.controller.cancel_gesture();
        }
        self.press_origin = None;
        self.last_displacement = 0.0;
    }

    /// Value label text, e.g. `25%`
    pub fn label(&self) -> String {
        format!("{}{}", self.value(), self.appearance.suffix)
    }

    /// Height of the filled part of the track in pixels
    pub fn fill_height(&self) -> f32 {
        let track_height = self.controller.track_height().max(0.0);
        (self.render_state().fill_ratio as f32 * track_height).clamp(0.0, track_height)
    }

    /// Create the view Element for this slider
    ///
    /// The `on_event` callback receives `ColumnSliderEvent`s that should be
    /// passed to `handle_event` in your update function.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        icon: Option<Element<'a, Message>>,
        on_event: impl Fn(ColumnSliderEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let appearance = &self.appearance;
        let track_height = self.controller.track_height().max(0.0);
        let radius = appearance.border_radius;
        let fill_color = appearance.minimum_track_tint;
        let track_color = appearance.maximum_track_tint;

        let label = text(self.label())
            .size(appearance.text_size)
            .color(appearance.text_color);

        let fill = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(self.fill_height()))
            .style(move |_theme| container::Style {
                background: Some(Background::Color(fill_color)),
                ..Default::default()
            });

        // Spacer on top pushes the fill to the bottom of the track
        let track = container(column![Space::new().height(Length::Fill), fill])
            .width(Length::Fixed(appearance.width))
            .height(Length::Fixed(track_height))
            .clip(true)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(track_color)),
                border: Border {
                    radius: radius.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: theme::SHADOW_COLOR,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
                ..Default::default()
            });

        let on_press = on_event(ColumnSliderEvent::Pressed);
        let on_release = on_event(ColumnSliderEvent::Released);
        let on_exit = on_event(ColumnSliderEvent::Exited);

        let interactive_track = mouse_area(track)
            .on_press(on_press)
            .on_release(on_release)
            .on_exit(on_exit)
            .on_move(move |position| on_event(ColumnSliderEvent::Moved(position)));

        let mut content = column![label, interactive_track]
            .spacing(theme::SPACING)
            .align_x(iced::Center);

        if let Some(icon) = icon {
            content = content.push(icon);
        }

        content.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_slider(initial: f64) -> ColumnSlider {
        ColumnSlider::new(
            SliderProps::new(300.0)
                .range(0.0, 50.0)
                .step(1.0)
                .initial_value(initial),
            Appearance::default(),
        )
    }

    #[test]
    fn test_press_drag_release() {
        let mut slider = demo_slider(10.0);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 200.0)));
        assert_eq!(slider.handle_event(ColumnSliderEvent::Pressed), None);

        let moved = slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 140.0)));
        assert_eq!(moved, Some(SliderOutput::Changed(20.0)));

        slider.handle_event(ColumnSliderEvent::Moved(Point::new(55.0, 110.0)));
        let released = slider.handle_event(ColumnSliderEvent::Released);
        assert_eq!(released, Some(SliderOutput::Completed(25.0)));
        assert_eq!(slider.value(), 25.0);
        assert!(!slider.controller().is_dragging());
    }

    #[test]
    fn test_hover_without_press_does_nothing() {
        let mut slider = demo_slider(10.0);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Moved(Point::new(0.0, 0.0))), None);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Moved(Point::new(0.0, 100.0))), None);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn test_first_move_anchors_when_press_position_unknown() {
        let mut slider = demo_slider(10.0);
        slider.handle_event(ColumnSliderEvent::Pressed);
        assert_eq!(
            slider.handle_event(ColumnSliderEvent::Moved(Point::new(10.0, 150.0))),
            Some(SliderOutput::Changed(10.0))
        );
        assert_eq!(
            slider.handle_event(ColumnSliderEvent::Moved(Point::new(10.0, 120.0))),
            Some(SliderOutput::Changed(15.0))
        );
    }

    #[test]
    fn test_exit_while_dragging_commits() {
        let mut slider = demo_slider(10.0);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 200.0)));
        slider.handle_event(ColumnSliderEvent::Pressed);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 170.0)));

        assert_eq!(
            slider.handle_event(ColumnSliderEvent::Exited),
            Some(SliderOutput::Completed(15.0))
        );
        assert!(!slider.controller().is_dragging());
        // A stray release afterwards reports nothing
        assert_eq!(slider.handle_event(ColumnSliderEvent::Released), None);
    }

    #[test]
    fn test_label_and_fill() {
        let mut slider = demo_slider(25.0);
        assert_eq!(slider.label(), "25");
        assert_eq!(slider.fill_height(), 150.0);

        slider.set_appearance(Appearance {
            suffix: "%".to_string(),
            ..Appearance::default()
        });
        assert_eq!(slider.label(), "25%");
    }

    #[test]
    fn test_disabled_drag_keeps_value() {
        let mut slider = demo_slider(10.0);
        slider.set_disabled(true);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 200.0)));
        slider.handle_event(ColumnSliderEvent::Pressed);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 100.0))), None);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Released), None);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn test_disabled_release_does_not_leave_slider_armed() {
        let mut slider = demo_slider(10.0);
        slider.set_disabled(true);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 200.0)));
        slider.handle_event(ColumnSliderEvent::Pressed);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Released), None);
        assert!(!slider.controller().is_dragging());

        // Hovering with the button up after re-enabling changes nothing
        slider.set_disabled(false);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 80.0))), None);
        assert_eq!(slider.value(), 10.0);

        // A new press is admitted and measures from where it happened
        slider.handle_event(ColumnSliderEvent::Pressed);
        assert_eq!(slider.controller().drag_start_value(), Some(10.0));
        assert_eq!(
            slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 50.0))),
            Some(SliderOutput::Changed(15.0))
        );
        assert_eq!(
            slider.handle_event(ColumnSliderEvent::Released),
            Some(SliderOutput::Completed(15.0))
        );
    }

    #[test]
    fn test_disabled_exit_does_not_leave_slider_armed() {
        let mut slider = demo_slider(10.0);
        slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 200.0)));
        slider.handle_event(ColumnSliderEvent::Pressed);
        slider.set_disabled(true);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Exited), None);
        assert!(!slider.controller().is_dragging());

        slider.set_disabled(false);
        assert_eq!(slider.handle_event(ColumnSliderEvent::Moved(Point::new(50.0, 20.0))), None);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn test_reconcile_external() {
        let mut slider = demo_slider(10.0);
        assert!(!slider.reconcile_external(10.0));
        assert!(slider.reconcile_external(30.0));
        assert_eq!(slider.value(), 30.0);
    }
}
