//! Demo application state
//!
//! One column slider bound to an app-owned value. The binding is one-way
//! unless `two_way_binding` is set, in which case every commit is written
//! back to the bound value before it is reconciled.

use column_slider_core::SliderOutput;
use column_slider_widgets::{ColumnSlider, ColumnSliderEvent};
use iced::widget::{button, column, container, row, text, toggler};
use iced::{Center, Element, Fill, Task, Theme};

use crate::config::DemoConfig;

#[derive(Debug, Clone)]
pub enum Message {
    Slider(ColumnSliderEvent),
    /// Put the bound value back to its configured initial value
    ResetBoundValue,
    SetDisabled(bool),
    SetTwoWayBinding(bool),
}

pub struct DemoApp {
    slider: ColumnSlider,
    /// App-owned value the slider is bound to
    bound_value: f64,
    initial_value: f64,
    two_way_binding: bool,
    disabled: bool,
    /// Latest in-flight value from a drag
    last_change: Option<f64>,
    /// Latest committed value
    last_commit: Option<f64>,
}

impl DemoApp {
    pub fn new(config: &DemoConfig) -> Self {
        let slider = ColumnSlider::new(config.slider.to_props(), config.appearance.to_appearance());
        Self {
            slider,
            bound_value: config.slider.initial_value,
            initial_value: config.slider.initial_value,
            two_way_binding: config.two_way_binding,
            disabled: config.slider.disabled,
            last_change: None,
            last_commit: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(event) => match self.slider.handle_event(event) {
                Some(SliderOutput::Changed(value)) => {
                    log::trace!("slider changed: {}", value);
                    self.last_change = Some(value);
                }
                Some(SliderOutput::Completed(value)) => {
                    log::info!("slider committed: {}", value);
                    self.last_commit = Some(value);
                    if self.two_way_binding {
                        self.bound_value = value;
                    }
                }
                None => {}
            },
            Message::ResetBoundValue => {
                log::info!("bound value reset to {}", self.initial_value);
                self.bound_value = self.initial_value;
            }
            Message::SetDisabled(disabled) => {
                self.disabled = disabled;
                self.slider.set_disabled(disabled);
            }
            Message::SetTwoWayBinding(enabled) => {
                self.two_way_binding = enabled;
            }
        }

        // Host-side resync: the slider ignores values it has already seen
        self.slider.reconcile_external(self.bound_value);
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = column![
            status("Bound", Some(self.bound_value)),
            status("Change", self.last_change),
            status("Commit", self.last_commit),
            toggler(self.disabled)
                .label("Disabled")
                .on_toggle(Message::SetDisabled),
            toggler(self.two_way_binding)
                .label("Two-way binding")
                .on_toggle(Message::SetTwoWayBinding),
            button(text("Reset bound value")).on_press(Message::ResetBoundValue),
        ]
        .spacing(10);

        let content = row![self.slider.view(None, Message::Slider), controls]
            .spacing(40)
            .align_y(Center);

        container(content).center_x(Fill).center_y(Fill).into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// `Label: value` line, `-` when nothing was reported yet
fn status<'a>(label: &str, value: Option<f64>) -> Element<'a, Message> {
    let shown = value.map_or_else(|| "-".to_string(), |v| v.to_string());
    text(format!("{}: {}", label, shown)).size(14).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn drag(app: &mut DemoApp, from_y: f32, to_y: f32) {
        let _ = app.update(Message::Slider(ColumnSliderEvent::Moved(Point::new(50.0, from_y))));
        let _ = app.update(Message::Slider(ColumnSliderEvent::Pressed));
        let _ = app.update(Message::Slider(ColumnSliderEvent::Moved(Point::new(50.0, to_y))));
        let _ = app.update(Message::Slider(ColumnSliderEvent::Released));
    }

    #[test]
    fn test_one_way_binding_keeps_bound_value() {
        let mut app = DemoApp::new(&DemoConfig::default());
        drag(&mut app, 200.0, 140.0);

        assert_eq!(app.slider.value(), 10.0);
        assert_eq!(app.last_commit, Some(10.0));
        assert_eq!(app.bound_value, 0.0);

        // Bound value never changed, so reset is a no-op for the slider
        let _ = app.update(Message::ResetBoundValue);
        assert_eq!(app.slider.value(), 10.0);
    }

    #[test]
    fn test_two_way_binding_allows_reset() {
        let mut app = DemoApp::new(&DemoConfig::default());
        let _ = app.update(Message::SetTwoWayBinding(true));
        drag(&mut app, 200.0, 140.0);
        assert_eq!(app.bound_value, 10.0);

        let _ = app.update(Message::ResetBoundValue);
        assert_eq!(app.bound_value, 0.0);
        assert_eq!(app.slider.value(), 0.0);
    }

    #[test]
    fn test_disabled_toggle() {
        let mut app = DemoApp::new(&DemoConfig::default());
        let _ = app.update(Message::SetDisabled(true));
        drag(&mut app, 200.0, 140.0);
        assert_eq!(app.slider.value(), 0.0);
        assert_eq!(app.last_commit, None);

        // Re-enabled: hovering does nothing, a fresh drag commits
        let _ = app.update(Message::SetDisabled(false));
        let _ = app.update(Message::Slider(ColumnSliderEvent::Moved(Point::new(50.0, 80.0))));
        assert_eq!(app.slider.value(), 0.0);
        assert_eq!(app.last_change, None);

        drag(&mut app, 200.0, 140.0);
        assert_eq!(app.last_commit, Some(10.0));
    }
}
