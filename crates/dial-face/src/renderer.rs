use dial_engine::coords::Vec2;
use dial_engine::paint::Color;
use dial_engine::scene::DrawList;

use crate::config::{ClockConfig, HandStyle};
use crate::geometry::FaceGeometry;
use crate::metrics::GlyphMetrics;
use crate::time::TimeSample;

/// Z layers of the face, back to front.
pub mod layers {
    use dial_engine::scene::ZIndex;

    pub const FACE: ZIndex = ZIndex::new(0);
    /// Markers and the numerals drawn alongside them.
    pub const MARKERS: ZIndex = FACE.above();
    pub const HANDS: ZIndex = MARKERS.above();
    pub const HUB: ZIndex = HANDS.above();
}

/// Numeral size per unit of configured text size and face radius.
const TEXT_SCALE: f32 = 0.003;
const HUB_OUTER: f32 = 0.04;
const HUB_INNER: f32 = 0.02;
const HUB_SHADE: f32 = 0.3;

/// Turns a configuration and a time into the face's draw commands.
///
/// Rendering is pure: the same surface, configuration, time and metrics
/// always produce the same command sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockFaceRenderer;

impl ClockFaceRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        surface: Vec2,
        config: &ClockConfig,
        time: TimeSample,
        metrics: &dyn GlyphMetrics,
    ) -> DrawList {
        let mut out = DrawList::new();
        self.render_into(surface, config, time, metrics, &mut out);
        out
    }

    /// Clears `out` and records the face into it.
    pub fn render_into(
        &self,
        surface: Vec2,
        config: &ClockConfig,
        time: TimeSample,
        metrics: &dyn GlyphMetrics,
        out: &mut DrawList,
    ) {
        out.clear();
        let geo = FaceGeometry::from_surface(surface);

        out.push_circle(layers::FACE, geo.center, geo.radius, config.background());
        self.markers(&geo, config, metrics, out);
        self.hands(&geo, config, time, out);
    }

    fn markers(
        &self,
        geo: &FaceGeometry,
        config: &ClockConfig,
        metrics: &dyn GlyphMetrics,
        out: &mut DrawList,
    ) {
        let minute = config.minute_markers();
        let hour = config.hour_markers();
        let numerals = config.numerals();

        let font_size = numerals.size * geo.radius * TEXT_SCALE;
        let numeral_distance = geo.radius - (hour.length.of(geo.radius) + font_size / 1.5);

        for index in 1..=60u32 {
            let angle = index as f32 * 6.0;
            let on_hour = index % 5 == 0;

            // Hour positions fall back to a minute marker when hour markers are off.
            let marker = if on_hour && hour.visible {
                Some(hour)
            } else if minute.visible {
                Some(minute)
            } else {
                None
            };
            if let Some(style) = marker {
                let start = geo.point_at(angle, geo.radius - style.length.of(geo.radius));
                let end = geo.point_at(angle, geo.radius);
                out.push_line(layers::MARKERS, start, end, style.stroke, style.color);
            }

            if on_hour && numerals.visible {
                let label = (index / 5).to_string();
                let ink = metrics.ink_bounds(&label, numerals.font, font_size);
                let anchor = geo.point_at(angle, numeral_distance);
                out.push_text(
                    layers::MARKERS,
                    label,
                    numerals.font,
                    font_size,
                    numerals.color,
                    anchor - ink.center(),
                );
            }
        }
    }

    fn hands(
        &self,
        geo: &FaceGeometry,
        config: &ClockConfig,
        time: TimeSample,
        out: &mut DrawList,
    ) {
        let angles = time.angles();
        let hands = [
            (config.hour_hand(), angles.hour),
            (config.minute_hand(), angles.minute),
            (config.second_hand(), angles.second),
        ];

        for (style, angle) in hands {
            if style.visible {
                Self::hand(geo, style, angle, out);
            }
        }

        if config.any_hand_visible() {
            let bg = config.background();
            let outer = bg.blend(Color::BLACK, HUB_SHADE);
            let inner = bg.blend(Color::WHITE, HUB_SHADE);
            out.push_circle(layers::HUB, geo.center, geo.radius * HUB_OUTER, outer);
            out.push_circle(layers::HUB, geo.center, geo.radius * HUB_INNER, inner);
        }
    }

    /// Counterweight first, then the hand itself.
    fn hand(geo: &FaceGeometry, style: &HandStyle, angle: f32, out: &mut DrawList) {
        let dir = FaceGeometry::direction(angle);
        let length = style.length.of(geo.radius);
        let width = style.width.of(geo.radius);

        let tail = geo.center - dir * (length * style.tail);
        out.push_line(layers::HANDS, geo.center, tail, width, style.color);
        out.push_line(layers::HANDS, geo.center, geo.center + dir * length, width, style.color);
    }
}
