use dial_engine::coords::Vec2;
use dial_engine::scene::DrawList;

use crate::config::ClockConfig;
use crate::error::ConfigError;
use crate::metrics::GlyphMetrics;
use crate::renderer::ClockFaceRenderer;
use crate::tick::{AudioCue, TickGate, TickSound};
use crate::time::TimeSample;

/// A clock face with its configuration, draw buffer and tick sound.
pub struct ClockFace<C> {
    config: ClockConfig,
    renderer: ClockFaceRenderer,
    list: DrawList,
    gate: TickGate,
    sound: TickSound<C>,
}

impl<C: AudioCue> ClockFace<C> {
    pub fn new(config: ClockConfig, sound: TickSound<C>) -> Self {
        let mut face = Self {
            config,
            renderer: ClockFaceRenderer::new(),
            list: DrawList::new(),
            gate: TickGate::new(),
            sound,
        };
        face.sound.set_volume(face.config.sound().volume.get());
        face
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Changes take effect on the next frame. Call [`ClockFace::sync_volume`]
    /// after changing the volume through here.
    pub fn config_mut(&mut self) -> &mut ClockConfig {
        &mut self.config
    }

    /// Replaces the configuration wholesale and applies its volume.
    pub fn set_config(&mut self, config: ClockConfig) {
        self.config = config;
        self.sync_volume();
    }

    /// Sets the volume (fraction or percentage) and forwards it to the cues.
    pub fn set_volume(&mut self, volume: f32) -> Result<(), ConfigError> {
        self.config.set_volume(volume)?;
        self.sync_volume();
        Ok(())
    }

    pub fn sync_volume(&mut self) {
        self.sound.set_volume(self.config.sound().volume.get());
    }

    pub fn sound_mut(&mut self) -> &mut TickSound<C> {
        &mut self.sound
    }

    /// The commands recorded by the last [`ClockFace::frame`].
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Renders the face for `time` and plays the tick for a new second.
    ///
    /// The tick only advances while the second hand is shown, and only
    /// sounds when sound is enabled.
    pub fn frame(
        &mut self,
        surface: Vec2,
        time: TimeSample,
        metrics: &dyn GlyphMetrics,
    ) -> &DrawList {
        self.renderer.render_into(surface, &self.config, time, metrics, &mut self.list);

        if self.config.second_hand().visible
            && self.gate.advance(time.second())
            && self.config.sound().enabled
            && self.sound.play(time.second())
        {
            log::trace!("tick {}", time.second());
        }

        &self.list
    }
}
