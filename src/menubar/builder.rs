//! Status item and menu construction using AppKit.

use crate::config::StatusItemConfig;
use crate::menubar::controller::MenuBarController;
use crate::menubar::delegate::MenuActionTarget;
use crate::menubar::model::{MenuAction, MenuEntry, MenuItemSpec, MenuModel};
use objc2::rc::Retained;
use objc2::runtime::{ProtocolObject, Sel};
use objc2::sel;
use objc2_app_kit::{
    NSImage, NSMenu, NSMenuItem, NSSquareStatusItemLength, NSStatusBar, NSStatusItem,
};
use objc2_foundation::{MainThreadMarker, NSNotificationCenter, NSString};
use tracing::{info, warn};

/// Name of the notification AppKit posts when a window is about to close.
const WINDOW_WILL_CLOSE: &str = "NSWindowWillCloseNotification";

/// Owned handle to the status item in the system status bar.
///
/// Dropping the handle removes the icon from the menu bar.
pub struct StatusItemHandle {
    item: Retained<NSStatusItem>,
}

impl StatusItemHandle {
    /// Allocate a square status item showing the configured glyph.
    fn new(mtm: MainThreadMarker, config: &StatusItemConfig) -> Self {
        unsafe {
            let status_bar = NSStatusBar::systemStatusBar();
            let item = status_bar.statusItemWithLength(NSSquareStatusItemLength);

            if let Some(button) = item.button(mtm) {
                let symbol_name = NSString::from_str(&config.symbol);
                let description = NSString::from_str(&config.accessibility_description);

                if let Some(image) = NSImage::imageWithSystemSymbolName_accessibilityDescription(
                    &symbol_name,
                    Some(&description),
                ) {
                    // Template images adapt to dark/light menu bar
                    image.setTemplate(true);
                    button.setImage(Some(&image));
                } else {
                    warn!("SF Symbol '{}' not available, using title", config.symbol);
                    button.setTitle(&NSString::from_str(&config.fallback_title));
                }
            } else {
                warn!("Status item has no button, icon will not be shown");
            }

            Self { item }
        }
    }
}

impl Drop for StatusItemHandle {
    fn drop(&mut self) {
        unsafe {
            NSStatusBar::systemStatusBar().removeStatusItem(&self.item);
        }
        info!("Status item removed");
    }
}

/// The status item, its menu and the target that receives menu actions.
///
/// All three are retained only to stay alive for the lifetime of the app.
pub struct MenuBar {
    _status_item: StatusItemHandle,
    _menu: Retained<NSMenu>,
    _action_target: Retained<MenuActionTarget>,
}

impl MenuBar {
    /// Create the status item and attach the menu described by the controller.
    pub fn init(
        mtm: MainThreadMarker,
        config: &StatusItemConfig,
        controller: MenuBarController,
    ) -> Self {
        info!("Creating menu bar");

        let action_target = MenuActionTarget::new(mtm, controller);
        let status_item = StatusItemHandle::new(mtm, config);

        let (menu, item_count) = action_target.with_controller(|c| {
            let model = c.menu();
            (build_menu(mtm, model, &action_target), model.entries().len())
        });
        unsafe {
            menu.setDelegate(Some(ProtocolObject::from_ref(&*action_target)));
            status_item.item.setMenu(Some(&menu));
        }

        observe_window_close(&action_target);

        info!("Menu bar initialized with {} items", item_count);

        Self {
            _status_item: status_item,
            _menu: menu,
            _action_target: action_target,
        }
    }
}

/// Build an `NSMenu` from the model, targeting `target` for every item.
fn build_menu(
    mtm: MainThreadMarker,
    model: &MenuModel,
    target: &MenuActionTarget,
) -> Retained<NSMenu> {
    let menu = NSMenu::new(mtm);

    for entry in model.entries() {
        match entry {
            MenuEntry::Item(spec) => {
                let item = create_menu_item(mtm, spec, target);
                menu.addItem(&item);
            }
            MenuEntry::Separator => {
                let separator = NSMenuItem::separatorItem(mtm);
                menu.addItem(&separator);
            }
        }
    }

    menu
}

/// Create a menu item for `spec` with its action sent to `target`.
fn create_menu_item(
    mtm: MainThreadMarker,
    spec: &MenuItemSpec,
    target: &MenuActionTarget,
) -> Retained<NSMenuItem> {
    let ns_title = NSString::from_str(spec.label);
    let key_equiv = NSString::from_str(spec.key_equivalent);

    let item = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc(),
            &ns_title,
            Some(selector(spec.action)),
            &key_equiv,
        )
    };
    unsafe {
        item.setTarget(Some(target));
    }

    item
}

/// Selector bound to each menu action.
fn selector(action: MenuAction) -> Sel {
    match action {
        MenuAction::About => sel!(showAbout:),
        MenuAction::Settings => sel!(showSettings:),
        MenuAction::Quit => sel!(showQuitPanel:),
    }
}

/// Subscribe `target` to window-close notifications from any window.
fn observe_window_close(target: &MenuActionTarget) {
    let name = NSString::from_str(WINDOW_WILL_CLOSE);
    unsafe {
        NSNotificationCenter::defaultCenter().addObserver_selector_name_object(
            target,
            sel!(windowClosed:),
            Some(&name),
            None,
        );
    }
}
