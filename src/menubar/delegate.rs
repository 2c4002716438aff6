//! Menu item action target.
//!
//! Receives the menu item selectors and window-close notifications and
//! forwards them to the [`MenuBarController`] it owns.

use std::cell::RefCell;

use objc2::mutability::MainThreadOnly;
use objc2::rc::Retained;
use objc2::{declare_class, msg_send_id, ClassType, DeclaredClass};
use objc2_app_kit::{NSMenuDelegate, NSWindow};
use objc2_foundation::{MainThreadMarker, NSNotification, NSObject, NSObjectProtocol};
use tracing::warn;

use crate::menubar::controller::MenuBarController;
use crate::menubar::model::MenuAction;
use crate::menubar::state::WindowId;

declare_class!(
    pub struct MenuActionTarget;

    unsafe impl ClassType for MenuActionTarget {
        type Super = NSObject;
        type Mutability = MainThreadOnly;
        const NAME: &'static str = "DiskJockeyMenuActionTarget";
    }

    impl DeclaredClass for MenuActionTarget {
        type Ivars = RefCell<MenuBarController>;
    }

    unsafe impl NSObjectProtocol for MenuActionTarget {}

    unsafe impl MenuActionTarget {
        #[method(showAbout:)]
        fn show_about(&self, _sender: &NSObject) {
            self.dispatch(MenuAction::About);
        }

        #[method(showSettings:)]
        fn show_settings(&self, _sender: &NSObject) {
            self.dispatch(MenuAction::Settings);
        }

        #[method(showQuitPanel:)]
        fn show_quit_panel(&self, _sender: &NSObject) {
            self.dispatch(MenuAction::Quit);
        }

        #[method(windowClosed:)]
        fn window_closed(&self, notification: &NSNotification) {
            let Some(object) = (unsafe { notification.object() }) else {
                return;
            };
            match self.ivars().try_borrow_mut() {
                Ok(mut controller) => controller.on_window_closed(WindowId::of(&*object)),
                Err(_) => warn!("Controller busy, ignoring window close"),
            }
        }
    }

    unsafe impl NSMenuDelegate for MenuActionTarget {}
);

impl MenuActionTarget {
    /// Create a target that owns `controller`.
    pub fn new(mtm: MainThreadMarker, controller: MenuBarController) -> Retained<Self> {
        let this = mtm.alloc::<Self>().set_ivars(RefCell::new(controller));
        unsafe { msg_send_id![super(this), init] }
    }

    /// Record `window` as the open settings window.
    ///
    /// Called by whoever presents the settings page.
    #[allow(dead_code)]
    pub fn track_settings_window(&self, window: &NSWindow) {
        match self.ivars().try_borrow_mut() {
            Ok(mut controller) => controller.track_settings_window(WindowId::of(window)),
            Err(_) => warn!("Controller busy, ignoring settings window"),
        }
    }

    /// Run `f` with the controller borrowed.
    pub fn with_controller<R>(&self, f: impl FnOnce(&MenuBarController) -> R) -> R {
        f(&self.ivars().borrow())
    }

    fn dispatch(&self, action: MenuAction) {
        match self.ivars().try_borrow() {
            Ok(controller) => controller.handle(action),
            Err(_) => warn!("Controller busy, dropping {:?}", action),
        }
    }
}
