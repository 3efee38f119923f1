//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking and
//! the drag-active flag). It is the only thing that sits between raw window
//! events and the engine's [`execute`](crate::SplatRenderEngine::execute)
//! method, which keeps the camera state machine pure and unit-testable.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::command::ViewerCommand;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// Cursor motion only produces a rotation command while the primary button
/// is held; the press captures the anchor position and the release clears
/// the drag flag.
pub struct InputProcessor {
    last_cursor_pos: Option<(f32, f32)>,
    mouse_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with no cursor history and no active drag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor_pos: None,
            mouse_pressed: false,
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(ViewerCommand::Zoom { delta })
            }
        }
    }

    /// Cursor moved — compute delta, possibly produce a rotate command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let delta = self
            .last_cursor_pos
            .map(|(lx, ly)| Vec2::new(x - lx, y - ly));
        self.last_cursor_pos = Some((x, y));

        if !self.mouse_pressed {
            return None;
        }
        delta
            .filter(|d| *d != Vec2::ZERO)
            .map(|delta| ViewerCommand::RotateCamera { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_without_press_is_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 40.0, y: 20.0 }),
            None
        );
    }

    #[test]
    fn drag_produces_rotate_with_pixel_delta() {
        let mut input = InputProcessor::new();
        let _ = input
            .handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 104.0, y: 97.0 });
        assert_eq!(
            cmd,
            Some(ViewerCommand::RotateCamera {
                delta: Vec2::new(4.0, -3.0)
            })
        );
    }

    #[test]
    fn release_ends_the_drag() {
        let mut input = InputProcessor::new();
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 9.0, y: 9.0 }),
            None
        );
    }

    #[test]
    fn first_motion_after_press_needs_an_anchor() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        // No cursor history yet — nothing to diff against.
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 3.0, y: 4.0 }),
            None
        );
        // Second motion has a delta.
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 5.0, y: 4.0 })
            .is_some());
    }

    #[test]
    fn non_primary_buttons_do_not_start_a_drag() {
        let mut input = InputProcessor::new();
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn scroll_always_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 40.0 }),
            Some(ViewerCommand::Zoom { delta: 40.0 })
        );
    }
}
