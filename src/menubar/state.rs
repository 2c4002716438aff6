//! Settings window bookkeeping.

use std::fmt;

/// Identity of a window, used only for equality checks.
///
/// Holding a `WindowId` never keeps the window alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    /// Build an id from a raw value such as an object address.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Identity of the object behind `object`, taken from its address.
    pub fn of<T: ?Sized>(object: &T) -> Self {
        Self(object as *const T as *const () as usize)
    }

    #[allow(dead_code)]
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowId({:#x})", self.0)
    }
}

/// Whether a settings window is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsWindowState {
    /// No settings window is tracked.
    #[default]
    Unset,
    /// The most recently opened settings window.
    Tracking(WindowId),
}

impl SettingsWindowState {
    /// Start tracking `window`, replacing any previous one.
    pub fn track(&mut self, window: WindowId) {
        *self = SettingsWindowState::Tracking(window);
    }

    /// Handle a window closing.
    ///
    /// Returns `true` if `window` was the tracked settings window and the
    /// state moved back to `Unset`.
    pub fn window_closed(&mut self, window: WindowId) -> bool {
        match self {
            SettingsWindowState::Tracking(tracked) if *tracked == window => {
                *self = SettingsWindowState::Unset;
                true
            }
            _ => false,
        }
    }

    /// The tracked window, if any.
    pub fn window(&self) -> Option<WindowId> {
        match self {
            SettingsWindowState::Unset => None,
            SettingsWindowState::Tracking(window) => Some(*window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_id_from_address() {
        let a = String::from("a");
        let b = String::from("b");
        assert_eq!(WindowId::of(&a), WindowId::of(&a));
        assert_ne!(WindowId::of(&a), WindowId::of(&b));
        assert_eq!(WindowId::from_raw(0x10).raw(), 0x10);
    }

    #[test]
    fn test_settings_window_state() {
        let w = WindowId::from_raw(1);
        let w2 = WindowId::from_raw(2);

        let mut state = SettingsWindowState::default();
        assert_eq!(state.window(), None);
        assert!(!state.window_closed(w));

        state.track(w);
        assert_eq!(state.window(), Some(w));

        assert!(!state.window_closed(w2));
        assert_eq!(state, SettingsWindowState::Tracking(w));

        assert!(state.window_closed(w));
        assert_eq!(state, SettingsWindowState::Unset);
    }

    #[test]
    fn test_track_replaces_previous_window() {
        let mut state = SettingsWindowState::default();
        state.track(WindowId::from_raw(1));
        state.track(WindowId::from_raw(2));

        assert!(!state.window_closed(WindowId::from_raw(1)));
        assert_eq!(state.window(), Some(WindowId::from_raw(2)));
    }
}
