use dial_engine::core::{App, AppControl, FrameCtx};
use dial_engine::input::{InputEvent, InputState};
use dial_engine::render::SceneRenderer;
use dial_engine::scene::DrawList;
use dial_engine::text::{FontId, FontSystem};
use dial_face::{ClockConfig, ClockFace, ClockSource, TickSound};
use winit::window::WindowId;

use crate::cue::{fill_empty_slots, BellCue};
use crate::frame::{push_ring, FaceSlot};
use crate::prefs::{PreferenceFile, Preferences, PreferencesError};
use crate::settings::{status_line, Action};

/// The desktop clock: one face, its frame ring and the keyboard settings.
pub struct ClockApp {
    prefs: Preferences,
    store: PreferenceFile,
    clock: Box<dyn ClockSource>,

    face: ClockFace<BellCue>,
    fonts: FontSystem,
    font: Option<FontId>,

    scene: SceneRenderer,
    list: DrawList,
    title_dirty: bool,
}

impl ClockApp {
    pub fn new(
        prefs: Preferences,
        store: PreferenceFile,
        clock: Box<dyn ClockSource>,
        fonts: FontSystem,
        font: Option<FontId>,
    ) -> Result<Self, PreferencesError> {
        let config = config_for(&prefs, font)?;

        let mut sound = TickSound::default();
        if prefs.sound {
            fill_empty_slots(&mut sound, BellCue::open);
        }

        Ok(Self {
            prefs,
            store,
            clock,
            face: ClockFace::new(config, sound),
            fonts,
            font,
            scene: SceneRenderer::new(),
            list: DrawList::new(),
            title_dirty: true,
        })
    }

    fn reload_config(&mut self) {
        match config_for(&self.prefs, self.font) {
            Ok(config) => self.face.set_config(config),
            Err(e) => log::warn!("keeping previous face settings: {e}"),
        }

        // Sound switched on after starting without cues.
        if self.prefs.sound {
            fill_empty_slots(self.face.sound_mut(), BellCue::open);
            self.face.sync_volume();
        }
        self.title_dirty = true;
    }

    fn handle(&mut self, action: Action) -> AppControl {
        match action {
            Action::Quit => AppControl::Exit,
            Action::Save => {
                if let Err(e) = self.store.save(&self.prefs) {
                    log::error!("{e}");
                }
                AppControl::Continue
            }
            _ if action.apply(&mut self.prefs) => {
                log::debug!("{action:?}: {}", status_line(&self.prefs));
                self.reload_config();
                AppControl::Redraw
            }
            _ => AppControl::Continue,
        }
    }
}

fn config_for(
    prefs: &Preferences,
    font: Option<FontId>,
) -> Result<ClockConfig, PreferencesError> {
    let mut config = prefs.to_clock_config()?;
    if let Some(id) = font {
        config.set_typeface(id);
    }
    Ok(config)
}

impl App for ClockApp {
    fn on_input(
        &mut self,
        _window_id: WindowId,
        event: &InputEvent,
        _input: &InputState,
    ) -> AppControl {
        match Action::from_event(event) {
            Some(action) => self.handle(action),
            None => AppControl::Continue,
        }
    }

    fn on_visibility_changed(&mut self, _window_id: WindowId, visible: bool) {
        log::debug!("clock {}", if visible { "visible" } else { "hidden" });
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.title_dirty {
            ctx.window.set_title(&status_line(&self.prefs));
            self.title_dirty = false;
        }

        let window = ctx.window.logical_size().size();
        let palette = self.prefs.theme.palette();
        let slot = FaceSlot::for_window(window, self.prefs.frame);

        // ── Build ─────────────────────────────────────────────────────────
        self.list.clear();
        if self.prefs.frame {
            push_ring(&mut self.list, window, &palette);
        }
        let face = self.face.frame(slot.size, self.clock.now(), &self.fonts);
        self.list.extend_translated(face, slot.offset);

        // ── Render ────────────────────────────────────────────────────────
        let list = &mut self.list;
        let fonts = &self.fonts;
        let scene = &mut self.scene;

        ctx.render(palette.window, |rctx, target| {
            scene.render(rctx, target, list, fonts);
        })
    }
}
