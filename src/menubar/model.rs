//! Declarative description of the status bar menu.
//!
//! The model is plain data so it can be built and inspected without AppKit.
//! The macOS builder turns each entry into an `NSMenuItem`.

use crate::events::MenuEvent;

/// Action bound to a menu item at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    About,
    Settings,
    Quit,
}

impl MenuAction {
    /// The event published when this action fires.
    pub fn event(&self) -> MenuEvent {
        match self {
            MenuAction::About => MenuEvent::ShowAboutPage,
            MenuAction::Settings => MenuEvent::ShowSettingsPage,
            MenuAction::Quit => MenuEvent::ShowQuitPage,
        }
    }

    /// Objective-C selector the menu item sends to its target.
    pub fn selector_name(&self) -> &'static str {
        match self {
            MenuAction::About => "showAbout:",
            MenuAction::Settings => "showSettings:",
            MenuAction::Quit => "showQuitPanel:",
        }
    }
}

/// A clickable menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemSpec {
    pub label: &'static str,
    /// Key equivalent used with Command; empty for none.
    pub key_equivalent: &'static str,
    pub action: MenuAction,
}

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItemSpec),
    Separator,
}

impl MenuEntry {
    fn item(label: &'static str, key_equivalent: &'static str, action: MenuAction) -> Self {
        MenuEntry::Item(MenuItemSpec {
            label,
            key_equivalent,
            action,
        })
    }

    /// Returns the item spec, or `None` for a separator.
    pub fn as_item(&self) -> Option<&MenuItemSpec> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }
}

/// Ordered, immutable list of menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    /// The menu shown under the status item: About, Settings, Quit and a
    /// trailing separator.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                MenuEntry::item("About", "", MenuAction::About),
                MenuEntry::item("Settings", ",", MenuAction::Settings),
                MenuEntry::item("Quit", "q", MenuAction::Quit),
                MenuEntry::Separator,
            ],
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Iterate over clickable items, skipping separators.
    #[cfg(test)]
    pub fn items(&self) -> impl Iterator<Item = &MenuItemSpec> {
        self.entries.iter().filter_map(MenuEntry::as_item)
    }

    /// Find the item bound to `action`.
    #[cfg(test)]
    pub fn item_for(&self, action: MenuAction) -> Option<&MenuItemSpec> {
        self.items().find(|item| item.action == action)
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::standard()
    }
}
