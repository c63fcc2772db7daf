//! Key mapping from terminal events to camera actions.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to camera actions.
///
/// Letter keys are case-insensitive. Unmapped keys yield `None` (no-op tick).
pub fn handle_key_event(key: KeyEvent) -> Option<CameraAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Rotation
        KeyCode::Char('q') | KeyCode::Left => Some(CameraAction::RotateLeft),
        KeyCode::Char('e') | KeyCode::Right => Some(CameraAction::RotateRight),

        // Translation
        KeyCode::Char('w') | KeyCode::Up => Some(CameraAction::MoveForward),
        KeyCode::Char('s') | KeyCode::Down => Some(CameraAction::MoveBack),
        KeyCode::Char('a') => Some(CameraAction::StrafeLeft),
        KeyCode::Char('d') => Some(CameraAction::StrafeRight),

        // Field of view
        KeyCode::Char('z') => Some(CameraAction::NarrowFov),
        KeyCode::Char('x') => Some(CameraAction::WidenFov),
        KeyCode::Char('c') => Some(CameraAction::ResetFov),

        // View radius
        KeyCode::Char('-') => Some(CameraAction::ShrinkRadius),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(CameraAction::GrowRadius),
        KeyCode::Char('0') => Some(CameraAction::ResetRadius),

        _ => None,
    }
}

/// Check if key should quit.
///
/// `q` rotates, so quitting is Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key switches between first-person and top-down view.
pub fn is_view_toggle(key: KeyEvent) -> bool {
    key.code == KeyCode::Tab
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(CameraAction::RotateLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('E'))),
            Some(CameraAction::RotateRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(CameraAction::RotateLeft)
        );
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(CameraAction::MoveForward)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(CameraAction::MoveBack)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(CameraAction::StrafeLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(CameraAction::StrafeRight)
        );
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('z'))),
            Some(CameraAction::NarrowFov)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(CameraAction::ResetFov)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(CameraAction::GrowRadius)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(CameraAction::ResetRadius)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_view_toggle() {
        assert!(is_view_toggle(KeyEvent::from(KeyCode::Tab)));
        assert!(!is_view_toggle(KeyEvent::from(KeyCode::Char('t'))));
    }
}
