//! Application state: one surface, its menu and a renderer.

use std::path::PathBuf;
use thiserror::Error;
use touchtracker_core::{
    ConfigError, GestureSurface, MenuController, RecordingMenu, SerializableColor, SurfaceConfig,
    SurfaceEvent,
};
use touchtracker_render::{RenderContext, Renderer, RendererError, StrokeCommand, StrokeListRenderer};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid event script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub surface: SurfaceConfig,
}

/// A headless host: feeds events into a surface and renders stroke lists.
pub struct App {
    config: AppConfig,
    surface: GestureSurface,
    menu: RecordingMenu,
    renderer: StrokeListRenderer,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            surface: GestureSurface::new(),
            menu: RecordingMenu::new(),
            renderer: StrokeListRenderer::new(),
        }
    }

    /// Deliver one event to the surface.
    ///
    /// Menu actions only reach the surface while the menu is on screen.
    pub fn dispatch(&mut self, event: &SurfaceEvent) {
        if let SurfaceEvent::Menu(command) = event {
            if !self.menu.is_menu_visible() {
                log::warn!("Ignoring menu action {command:?} while the menu is hidden");
                return;
            }
        }
        self.surface.handle_event(event, &mut self.menu);
    }

    /// Deliver every event in order, then render.
    pub fn replay(&mut self, events: &[SurfaceEvent]) -> AppResult<&[StrokeCommand]> {
        for event in events {
            self.dispatch(event);
        }
        log::info!(
            "Replayed {} events: {} finished lines, {} in progress",
            events.len(),
            self.surface.finished_lines().len(),
            self.surface.in_progress_count()
        );
        self.render()
    }

    /// Build the stroke list for the current state.
    pub fn render(&mut self) -> AppResult<&[StrokeCommand]> {
        let data = self.surface.render_data();
        let ctx = RenderContext::new(&data, &self.config.surface);
        self.renderer.build_scene(&ctx)?;
        Ok(self.renderer.commands())
    }

    pub fn surface(&self) -> &GestureSurface {
        &self.surface
    }

    pub fn menu(&self) -> &RecordingMenu {
        &self.menu
    }
}

/// One-line description of a stroke, e.g. `blue #0000ffff (0, 0) -> (0, 100)`.
pub fn describe_stroke(command: &StrokeCommand) -> String {
    let segment = command.segment;
    format!(
        "{} {} ({}, {}) -> ({}, {})",
        command.role.name(),
        SerializableColor::from(command.color).to_hex(),
        segment.p0.x,
        segment.p0.y,
        segment.p1.x,
        segment.p1.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use touchtracker_core::{ContactId, GestureEvent, LineColor, MenuCommand, TouchEvent};

    fn draw(contact: u64, begin: Point, end: Point) -> Vec<SurfaceEvent> {
        let contact = ContactId(contact);
        vec![
            TouchEvent::Began { contact, position: begin }.into(),
            TouchEvent::Moved { contact, position: end }.into(),
            TouchEvent::Ended { contact, position: end }.into(),
        ]
    }

    #[test]
    fn test_replay_draws_lines() {
        let mut app = App::new(AppConfig::default());
        let mut events = draw(1, Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        events.extend(draw(2, Point::new(0.0, 200.0), Point::new(100.0, 200.0)));

        let commands = app.replay(&events).unwrap();
        let roles: Vec<_> = commands.iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![LineColor::Blue, LineColor::Green]);
    }

    #[test]
    fn test_menu_action_ignored_while_hidden() {
        let mut app = App::new(AppConfig::default());
        let mut events = draw(1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        events.push(SurfaceEvent::Menu(MenuCommand::DeleteSelected));
        app.replay(&events).unwrap();
        assert_eq!(app.surface().finished_lines().len(), 1);
    }

    #[test]
    fn test_tap_then_delete_from_menu() {
        let mut app = App::new(AppConfig::default());
        let mut events = draw(1, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        events.push(GestureEvent::Tap { position: Point::new(50.0, 0.0) }.into());
        for event in &events {
            app.dispatch(event);
        }
        assert!(app.menu().is_menu_visible());

        app.dispatch(&SurfaceEvent::Menu(MenuCommand::DeleteSelected));
        assert!(app.surface().finished_lines().is_empty());
        assert!(!app.menu().is_menu_visible());
        assert!(app.render().unwrap().is_empty());
    }

    #[test]
    fn test_describe_stroke() {
        let mut app = App::new(AppConfig::default());
        let commands = app
            .replay(&draw(1, Point::new(0.0, 0.0), Point::new(0.0, 100.0)))
            .unwrap();
        assert_eq!(describe_stroke(&commands[0]), "blue #0000ffff (0, 0) -> (0, 100)");
    }
}
