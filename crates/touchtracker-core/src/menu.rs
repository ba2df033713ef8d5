//! Contextual menu collaborator.
//!
//! The menu belongs to the host. The surface only asks it to show or hide,
//! and the host sends the chosen [`MenuCommand`] back to the surface.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Size of the anchor rectangle placed under a tap.
pub const MENU_ANCHOR_SIZE: f64 = 2.0;

/// What a menu action does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    /// Delete the selected line.
    DeleteSelected,
}

impl MenuCommand {
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::DeleteSelected => "Delete",
        }
    }
}

/// One entry of the contextual menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAction {
    pub label: String,
    pub command: MenuCommand,
}

impl From<MenuCommand> for MenuAction {
    fn from(command: MenuCommand) -> Self {
        Self {
            label: command.label().to_string(),
            command,
        }
    }
}

/// Anchor rectangle for a menu shown at `point`.
pub fn anchor_at(point: Point) -> Rect {
    Rect::from_origin_size(point, (MENU_ANCHOR_SIZE, MENU_ANCHOR_SIZE))
}

/// Host-side contextual menu.
pub trait MenuController {
    /// Show the menu next to `anchor` with the given actions.
    fn show_menu(&mut self, anchor: Rect, actions: Vec<MenuAction>);

    /// Hide the menu if it is showing.
    fn hide_menu(&mut self);

    /// Whether the menu is currently on screen.
    fn is_menu_visible(&self) -> bool;
}

/// A menu that only remembers what it was asked to do.
///
/// Used by headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingMenu {
    visible: bool,
    anchor: Option<Rect>,
    actions: Vec<MenuAction>,
    show_count: usize,
    hide_count: usize,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor of the last shown menu, while visible.
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Actions of the last shown menu, empty while hidden.
    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }

    pub fn hide_count(&self) -> usize {
        self.hide_count
    }
}

impl MenuController for RecordingMenu {
    fn show_menu(&mut self, anchor: Rect, actions: Vec<MenuAction>) {
        self.visible = true;
        self.anchor = Some(anchor);
        self.actions = actions;
        self.show_count += 1;
    }

    fn hide_menu(&mut self) {
        self.visible = false;
        self.anchor = None;
        self.actions.clear();
        self.hide_count += 1;
    }

    fn is_menu_visible(&self) -> bool {
        self.visible
    }
}
