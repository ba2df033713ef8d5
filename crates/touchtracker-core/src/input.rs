//! Input events delivered by the host's touch and gesture dispatch.

use crate::menu::MenuCommand;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one physical contact, assigned by the host for the
/// lifetime of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact#{}", self.0)
    }
}

/// Raw contact lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TouchEvent {
    Began { contact: ContactId, position: Point },
    Moved { contact: ContactId, position: Point },
    Ended { contact: ContactId, position: Point },
    /// The host took the contacts away (e.g. a system gesture).
    Cancelled { contacts: Vec<ContactId> },
}

/// Phase of a pan (move) gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A gesture recognized by the host.
///
/// The host is responsible for precedence, e.g. a double tap must suppress
/// the single tap it is made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    Tap { position: Point },
    DoubleTap,
    LongPressBegan { position: Point },
    LongPressEnded,
    /// `translation` is relative to the previous pan event.
    Pan { phase: PanPhase, translation: Vec2 },
}

/// Anything the host can feed into a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceEvent {
    Touch(TouchEvent),
    Gesture(GestureEvent),
    /// An action chosen from the contextual menu.
    Menu(MenuCommand),
}

impl From<TouchEvent> for SurfaceEvent {
    fn from(event: TouchEvent) -> Self {
        SurfaceEvent::Touch(event)
    }
}

impl From<GestureEvent> for SurfaceEvent {
    fn from(event: GestureEvent) -> Self {
        SurfaceEvent::Gesture(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_event_json_shape() {
        let event: SurfaceEvent = serde_json::from_str(
            r#"{ "touch": { "type": "began", "contact": 7, "position": { "x": 1.0, "y": 2.0 } } }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            SurfaceEvent::Touch(TouchEvent::Began {
                contact: ContactId(7),
                position: Point::new(1.0, 2.0),
            })
        );
    }

    #[test]
    fn test_gesture_and_menu_json_shape() {
        let events: Vec<SurfaceEvent> = serde_json::from_str(
            r#"[
                { "gesture": { "type": "double_tap" } },
                { "gesture": { "type": "pan", "phase": "changed", "translation": { "x": 5.0, "y": -5.0 } } },
                { "menu": "delete_selected" }
            ]"#,
        )
        .unwrap();
        assert_eq!(events[0], SurfaceEvent::Gesture(GestureEvent::DoubleTap));
        assert_eq!(
            events[1],
            SurfaceEvent::Gesture(GestureEvent::Pan {
                phase: PanPhase::Changed,
                translation: Vec2::new(5.0, -5.0),
            })
        );
        assert_eq!(events[2], SurfaceEvent::Menu(MenuCommand::DeleteSelected));
    }

    #[test]
    fn test_contact_display() {
        assert_eq!(ContactId(3).to_string(), "contact#3");
    }
}
