//! Snapshot of what a surface wants drawn.

use crate::line::Line;
use crate::style::LineColor;

/// Lines to draw for one frame, with their color roles.
#[derive(Debug, Clone, Default)]
pub struct RenderData {
    /// Finished lines in z-order, classified by angle.
    pub finished: Vec<(Line, LineColor)>,
    /// Lines still being drawn, ordered by contact.
    pub in_progress: Vec<Line>,
    /// The selected line, also present in `finished`.
    pub selected: Option<Line>,
}

impl RenderData {
    /// Lines in paint order with the role each is stroked with.
    ///
    /// Finished lines come first, then in-progress lines, then the selected
    /// line on top. The selected line is emitted once, in
    /// [`LineColor::Selected`].
    pub fn strokes(&self) -> impl Iterator<Item = (&Line, LineColor)> + '_ {
        let selected_id = self.selected.map(|line| line.id());
        self.finished
            .iter()
            .filter(move |(line, _)| Some(line.id()) != selected_id)
            .map(|(line, color)| (line, *color))
            .chain(self.in_progress.iter().map(|line| (line, LineColor::Current)))
            .chain(self.selected.iter().map(|line| (line, LineColor::Selected)))
    }

    pub fn is_empty(&self) -> bool {
        self.finished.is_empty() && self.in_progress.is_empty()
    }
}
