//! The drawing surface: in-progress contacts, finished lines and selection.

use crate::input::{ContactId, GestureEvent, PanPhase, SurfaceEvent, TouchEvent};
use crate::line::{Line, LineId};
use crate::menu::{anchor_at, MenuAction, MenuCommand, MenuController};
use crate::render_data::RenderData;
use crate::style::LineColor;
use kurbo::{Point, Vec2};
use std::collections::BTreeMap;

/// Reconciles touch and gesture events into a collection of lines.
///
/// Events are handled one at a time, to completion. Operations that can
/// change the selection take the host's menu so the surface can show or
/// hide it; the surface never keeps hold of the menu.
#[derive(Debug, Clone, Default)]
pub struct GestureSurface {
    /// One line per contact that is currently down.
    in_progress: BTreeMap<ContactId, Line>,
    /// Completed lines, back to front.
    finished: Vec<Line>,
    /// Selected finished line.
    selected: Option<LineId>,
}

impl GestureSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Contact lifecycle ---

    /// Start a zero-length line under a new contact.
    pub fn on_contact_begin(&mut self, contact: ContactId, point: Point) {
        if self.in_progress.insert(contact, Line::at(point)).is_some() {
            log::debug!("{contact} began again, restarting its line");
        }
    }

    /// Stretch the contact's line to `point`.
    pub fn on_contact_move(&mut self, contact: ContactId, point: Point) {
        match self.in_progress.get_mut(&contact) {
            Some(line) => line.end = point,
            None => log::debug!("Ignoring move for untracked {contact}"),
        }
    }

    /// Finish the contact's line at `point` and commit it.
    pub fn on_contact_end(&mut self, contact: ContactId, point: Point) {
        match self.in_progress.remove(&contact) {
            Some(mut line) => {
                line.end = point;
                self.finished.push(line);
            }
            None => log::debug!("Ignoring end for untracked {contact}"),
        }
    }

    /// Drop every in-progress line without committing any of them.
    pub fn on_contact_cancel(&mut self, contacts: &[ContactId]) {
        log::debug!(
            "Touches cancelled ({} reported, {} in progress)",
            contacts.len(),
            self.in_progress.len()
        );
        self.in_progress.clear();
    }

    // --- Gestures ---

    /// Select the line under `point` and offer to delete it.
    pub fn on_tap(&mut self, point: Point, menu: &mut dyn MenuController) {
        log::debug!("Recognized a tap at ({}, {})", point.x, point.y);

        match self.hit_test(point) {
            Some(index) => {
                self.selected = Some(self.finished[index].id());
                menu.show_menu(
                    anchor_at(point),
                    vec![MenuAction::from(MenuCommand::DeleteSelected)],
                );
            }
            None => self.select(None, menu),
        }
    }

    /// Clear everything.
    pub fn on_double_tap(&mut self, menu: &mut dyn MenuController) {
        log::info!(
            "Recognized a double tap, clearing {} lines",
            self.finished.len() + self.in_progress.len()
        );

        self.select(None, menu);
        self.in_progress.clear();
        self.finished.clear();
    }

    /// Select the line under `point` for as long as the press lasts.
    pub fn on_long_press_begin(&mut self, point: Point, menu: &mut dyn MenuController) {
        log::debug!("Recognized a long press at ({}, {})", point.x, point.y);

        let hit = self.hit_test(point).map(|index| self.finished[index].id());
        self.select(hit, menu);
        if hit.is_some() {
            // The press itself started a contact; don't let it draw.
            self.in_progress.clear();
        }
    }

    pub fn on_long_press_end(&mut self, menu: &mut dyn MenuController) {
        self.select(None, menu);
    }

    /// Move the selected line by `translation`.
    ///
    /// The translation is relative: the caller resets its accumulator after
    /// every call. Returns whether a line moved.
    pub fn on_move_gesture_change(&mut self, translation: Vec2) -> bool {
        match self.selected_index() {
            Some(index) => {
                self.finished[index].translate(translation);
                true
            }
            None => false,
        }
    }

    /// A pan gesture reported any phase other than a change.
    ///
    /// Finishing a drag while the menu is up deselects.
    pub fn on_move_gesture_other_state(&mut self, menu: &mut dyn MenuController) {
        if self.selected.is_some() && menu.is_menu_visible() {
            self.select(None, menu);
        }
    }

    /// Remove the selected line. Returns it, or `None` if nothing was selected.
    pub fn delete_selected(&mut self, menu: &mut dyn MenuController) -> Option<Line> {
        let index = self.selected_index()?;
        let line = self.finished.remove(index);
        self.select(None, menu);
        log::info!("Deleted line {}", line.id());
        Some(line)
    }

    /// Run an action the user picked from the contextual menu.
    pub fn handle_menu_command(&mut self, command: MenuCommand, menu: &mut dyn MenuController) {
        match command {
            MenuCommand::DeleteSelected => {
                self.delete_selected(menu);
            }
        }
    }

    // --- Event dispatch ---

    /// Process a raw touch event.
    pub fn handle_touch_event(&mut self, event: &TouchEvent) {
        match event {
            TouchEvent::Began { contact, position } => self.on_contact_begin(*contact, *position),
            TouchEvent::Moved { contact, position } => self.on_contact_move(*contact, *position),
            TouchEvent::Ended { contact, position } => self.on_contact_end(*contact, *position),
            TouchEvent::Cancelled { contacts } => self.on_contact_cancel(contacts),
        }
    }

    /// Process a recognized gesture.
    pub fn handle_gesture_event(&mut self, event: &GestureEvent, menu: &mut dyn MenuController) {
        match event {
            GestureEvent::Tap { position } => self.on_tap(*position, menu),
            GestureEvent::DoubleTap => self.on_double_tap(menu),
            GestureEvent::LongPressBegan { position } => self.on_long_press_begin(*position, menu),
            GestureEvent::LongPressEnded => self.on_long_press_end(menu),
            GestureEvent::Pan {
                phase: PanPhase::Changed,
                translation,
            } => {
                self.on_move_gesture_change(*translation);
            }
            GestureEvent::Pan { .. } => self.on_move_gesture_other_state(menu),
        }
    }

    /// Process any surface event.
    pub fn handle_event(&mut self, event: &SurfaceEvent, menu: &mut dyn MenuController) {
        match event {
            SurfaceEvent::Touch(touch) => self.handle_touch_event(touch),
            SurfaceEvent::Gesture(gesture) => self.handle_gesture_event(gesture, menu),
            SurfaceEvent::Menu(command) => self.handle_menu_command(*command, menu),
        }
    }

    // --- Queries ---

    /// Index of the first finished line near `point`.
    ///
    /// Earlier lines win over later ones, even if a later line is closer.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.finished.iter().position(|line| line.hit_test(point))
    }

    /// Lines to draw, with their color roles.
    pub fn render_data(&self) -> RenderData {
        RenderData {
            finished: self
                .finished
                .iter()
                .map(|line| (*line, LineColor::for_angle(line.angle())))
                .collect(),
            in_progress: self.in_progress.values().copied().collect(),
            selected: self.selected_line().copied(),
        }
    }

    /// Position of the selected line in the finished lines.
    ///
    /// # Panics
    ///
    /// Panics if the selection refers to a line that is no longer finished,
    /// which means a mutation forgot to clear it.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        let index = self.finished.iter().position(|line| line.id() == id);
        assert!(index.is_some(), "selected line {id} is not a finished line");
        index
    }

    pub fn selected_id(&self) -> Option<LineId> {
        self.selected
    }

    pub fn selected_line(&self) -> Option<&Line> {
        self.selected_index().map(|index| &self.finished[index])
    }

    /// Finished lines, back to front.
    pub fn finished_lines(&self) -> &[Line] {
        &self.finished
    }

    /// The line a contact is currently drawing.
    pub fn in_progress_line(&self, contact: ContactId) -> Option<&Line> {
        self.in_progress.get(&contact)
    }

    /// Number of contacts currently drawing.
    pub fn in_progress_count(&self) -> usize {
        self.in_progress.len()
    }

    /// Check if the surface has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.finished.is_empty() && self.in_progress.is_empty()
    }

    /// Set the selection, hiding the menu when it becomes empty.
    fn select(&mut self, selection: Option<LineId>, menu: &mut dyn MenuController) {
        self.selected = selection;
        if selection.is_none() {
            menu.hide_menu();
        }
    }
}
