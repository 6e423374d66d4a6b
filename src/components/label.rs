use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Default font size of the location label, in pixels.
pub const LABEL_FONT_SIZE: i32 = 40;

#[derive(Component, Clone, Debug)]
/// Floating text attached to a point in the scene.
///
/// The label's scene position comes from its own
/// [`Transform3D`](crate::components::transform3d::Transform3D), usually kept
/// in place by a [`StuckTo`](crate::components::stuckto::StuckTo).
pub struct Label {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: i32,
    /// Color of the text.
    pub color: Color,
}

impl Label {
    pub fn new(content: impl Into<String>, font_size: i32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }
}
