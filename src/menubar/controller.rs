//! Menu bar controller.
//!
//! Translates menu selections into [`MenuEvent`]s and keeps track of the
//! open settings window. Platform independent: the AppKit glue in
//! [`super::delegate`] owns a controller and forwards selectors to it.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::events::{EventSink, MenuEvent};
use crate::menubar::model::{MenuAction, MenuModel};
use crate::menubar::state::{SettingsWindowState, WindowId};

pub struct MenuBarController {
    sink: Arc<dyn EventSink>,
    menu: MenuModel,
    settings_window: SettingsWindowState,
}

impl MenuBarController {
    /// Create a controller publishing to `sink`, with the standard menu.
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            menu: MenuModel::standard(),
            settings_window: SettingsWindowState::Unset,
        }
    }

    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    /// Run the handler bound to `action`.
    pub fn handle(&self, action: MenuAction) {
        match action {
            MenuAction::About => self.on_about(),
            MenuAction::Settings => self.on_settings(),
            MenuAction::Quit => self.on_quit_requested(),
        }
    }

    pub fn on_about(&self) {
        info!("About clicked");
        self.publish(MenuEvent::ShowAboutPage);
    }

    pub fn on_settings(&self) {
        info!("Settings clicked");
        self.publish(MenuEvent::ShowSettingsPage);
    }

    /// Publish a quit request. The process keeps running; whoever presents
    /// the quit page decides whether to terminate.
    pub fn on_quit_requested(&self) {
        info!("Quit clicked");
        self.publish(MenuEvent::ShowQuitPage);
    }

    /// Forget the settings window if `window` is the one being tracked.
    pub fn on_window_closed(&mut self, window: WindowId) {
        if self.settings_window.window_closed(window) {
            debug!("Settings window {:?} closed", window);
        }
    }

    /// Record `window` as the open settings window.
    pub fn track_settings_window(&mut self, window: WindowId) {
        debug!("Tracking settings window {:?}", window);
        self.settings_window.track(window);
    }

    #[allow(dead_code)]
    pub fn settings_window(&self) -> Option<WindowId> {
        self.settings_window.window()
    }

    fn publish(&self, event: MenuEvent) {
        self.sink.emit(event);
    }
}

impl fmt::Debug for MenuBarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBarController")
            .field("menu", &self.menu)
            .field("settings_window", &self.settings_window)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::menubar::model::MenuEntry;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<MenuEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<MenuEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: MenuEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn controller() -> (MenuBarController, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (MenuBarController::new(sink.clone()), sink)
    }

    #[test]
    fn test_about_emits_single_event() {
        let (controller, sink) = controller();

        controller.on_about();

        assert_eq!(sink.take(), vec![MenuEvent::ShowAboutPage]);
        assert_eq!(controller.settings_window(), None);
    }

    #[test]
    fn test_settings_emits_single_event() {
        let (controller, sink) = controller();

        controller.on_settings();

        assert_eq!(sink.take(), vec![MenuEvent::ShowSettingsPage]);
    }

    #[test]
    fn test_quit_only_publishes_request() {
        let (controller, sink) = controller();

        controller.on_quit_requested();

        // Still running, and nothing but the request went out.
        assert_eq!(sink.take(), vec![MenuEvent::ShowQuitPage]);
    }

    #[test]
    fn test_handle_dispatches_each_menu_item() {
        let (controller, sink) = controller();

        for item in controller.menu().items() {
            controller.handle(item.action);
            assert_eq!(sink.take(), vec![item.action.event()]);
        }
    }

    #[test]
    fn test_initial_menu() {
        let (controller, sink) = controller();

        let entries = controller.menu().entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].as_item().unwrap().label, "About");
        assert_eq!(entries[1].as_item().unwrap().label, "Settings");
        assert_eq!(entries[2].as_item().unwrap().label, "Quit");
        assert_eq!(entries[3], MenuEntry::Separator);

        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_settings_window_closed() {
        let (mut controller, sink) = controller();
        let w = WindowId::from_raw(0x1000);

        controller.track_settings_window(w);
        assert_eq!(controller.settings_window(), Some(w));

        controller.on_window_closed(w);
        assert_eq!(controller.settings_window(), None);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_other_window_closed() {
        let (mut controller, _sink) = controller();
        let w = WindowId::from_raw(0x1000);
        let w2 = WindowId::from_raw(0x2000);

        controller.track_settings_window(w);
        controller.on_window_closed(w2);

        assert_eq!(controller.settings_window(), Some(w));
    }

    #[test]
    fn test_window_closed_when_unset() {
        let (mut controller, _sink) = controller();

        controller.on_window_closed(WindowId::from_raw(0x1000));

        assert_eq!(controller.settings_window(), None);
    }

    #[test]
    fn test_publishes_on_event_bus() {
        let bus = Arc::new(EventBus::new());
        let mut rx = bus.subscribe();
        let controller = MenuBarController::new(bus.clone());

        controller.handle(MenuAction::Settings);

        assert_eq!(rx.try_recv().unwrap(), MenuEvent::ShowSettingsPage);
        assert!(rx.try_recv().is_err());
    }
}
