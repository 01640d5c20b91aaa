use crate::coords::Vec2;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::SceneRenderer` how to batch it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_circle(&self) -> Option<&CircleCmd> {
        if let DrawCmd::Circle(c) = self { Some(c) } else { None }
    }

    #[inline]
    pub fn as_line(&self) -> Option<&LineCmd> {
        if let DrawCmd::Line(l) = self { Some(l) } else { None }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        if let DrawCmd::Text(t) = self { Some(t) } else { None }
    }

    /// Moves the command by `by` in logical pixels.
    pub fn translate(&mut self, by: Vec2) {
        match self {
            DrawCmd::Circle(c) => c.center = c.center + by,
            DrawCmd::Line(l) => {
                l.start = l.start + by;
                l.end = l.end + by;
            }
            DrawCmd::Text(t) => t.origin = t.origin + by,
        }
    }
}
