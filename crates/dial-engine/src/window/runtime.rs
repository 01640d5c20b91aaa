use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{translate_keyboard, InputState};
use crate::time::RepeatingTimer;

use super::visibility::Visibility;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub min_size: Option<LogicalSize<f64>>,
    /// Period of the redraw timer; `None` redraws only on demand.
    pub redraw_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "dial".to_string(),
            initial_size: LogicalSize::new(480.0, 480.0),
            min_size: Some(LogicalSize::new(64.0, 64.0)),
            redraw_interval: Some(Duration::from_secs(1)),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the initial window and runs the event loop until the app exits
    /// or its last window is closed.
    pub fn run<A>(initial: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(initial, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    timer: Option<RepeatingTimer>,
    visibility: Visibility,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    windows: HashMap<WindowId, WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            initial,
            gpu_init,
            app,
            windows: HashMap::new(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn create_window_entry(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: RuntimeConfig,
    ) -> Result<WindowId> {
        let mut attrs = Window::default_attributes()
            .with_title(config.title)
            .with_inner_size(config.initial_size);
        if let Some(min) = config.min_size {
            attrs = attrs.with_min_inner_size(min);
        }

        let window = event_loop.create_window(attrs).context("failed to create window")?;
        let id = window.id();
        let gpu_init = self.gpu_init.clone();

        let mut timer = config.redraw_interval.map(RepeatingTimer::new);
        if let Some(t) = timer.as_mut() {
            t.start(Instant::now());
        }

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            timer,
            visibility: Visibility::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        log::info!("window {id:?} created");
        entry.request_redraw();
        self.windows.insert(id, entry);
        Ok(id)
    }

    fn close_window(&mut self, event_loop: &ActiveEventLoop, id: WindowId) {
        if self.windows.remove(&id).is_some() {
            log::debug!("window {id:?} closed");
        }
        if self.windows.is_empty() {
            self.exit(event_loop);
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn apply_control(&mut self, event_loop: &ActiveEventLoop, id: WindowId, control: AppControl) {
        match control {
            AppControl::Continue => {}
            AppControl::Redraw => {
                if let Some(entry) = self.windows.get(&id) {
                    entry.request_redraw();
                }
            }
            AppControl::Exit => self.exit(event_loop),
        }
    }

    /// Pauses or resumes the window's timer and tells the app.
    fn visibility_changed(&mut self, id: WindowId, visible: bool) {
        let Some(entry) = self.windows.get_mut(&id) else { return };

        entry.with_timer_mut(|timer| {
            if let Some(t) = timer.as_mut() {
                if visible {
                    t.start(Instant::now());
                } else {
                    t.stop();
                }
            }
        });
        if visible {
            entry.request_redraw();
        }

        log::debug!("window {id:?} {}", if visible { "visible" } else { "hidden" });
        self.app.on_visibility_changed(id, visible);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop, self.initial.clone()) {
            log::error!("failed to create initial window: {e:#}");
            self.fatal = Some(e);
            self.exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        let mut wake: Option<Instant> = None;

        for entry in self.windows.values_mut() {
            let fired = entry.with_timer_mut(|timer| timer.as_mut().is_some_and(|t| t.poll(now)));
            if fired {
                entry.request_redraw();
            }
            let deadline =
                entry.with_timer(|t| t.as_ref().and_then(RepeatingTimer::next_deadline));
            if let Some(deadline) = deadline {
                wake = Some(wake.map_or(deadline, |w| w.min(deadline)));
            }
        }

        event_loop.set_control_flow(match wake {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.exit(event_loop);
            return;
        }

        // Keyboard input goes to the app immediately.
        let mut input_control = AppControl::Continue;
        if let Some(entry) = self.windows.get_mut(&window_id) {
            let app = &mut self.app;
            entry.with_input_state_mut(|input| {
                if let Some(ev) = translate_keyboard(input, &event) {
                    input.apply_event(&ev);
                    input_control = app.on_input(window_id, &ev, input);
                }
            });
        } else {
            return;
        }
        self.apply_control(event_loop, window_id, input_control);
        if self.exit_requested {
            return;
        }

        match &event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.close_window(event_loop, window_id);
            }

            WindowEvent::Occluded(occluded) => {
                let changed = self
                    .windows
                    .get_mut(&window_id)
                    .and_then(|e| e.with_visibility_mut(|v| v.set_occluded(*occluded)));
                if let Some(visible) = changed {
                    self.visibility_changed(window_id, visible);
                }
            }

            WindowEvent::Resized(new_size) => {
                let Some(entry) = self.windows.get_mut(&window_id) else { return };
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                let changed =
                    entry.with_visibility_mut(|v| v.set_size(new_size.width, new_size.height));
                entry.request_redraw();
                if let Some(visible) = changed {
                    self.visibility_changed(window_id, visible);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.windows.get_mut(&window_id) {
                    let size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(size));
                    entry.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                let Some(entry) = self.windows.get_mut(&window_id) else { return };
                if !entry.with_visibility(|v| v.is_visible()) {
                    return;
                }

                let control = entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx { id: window_id, window: fields.window },
                        gpu: fields.gpu,
                        input: fields.input_state,
                        now: Instant::now(),
                    };
                    app.on_frame(&mut ctx)
                });
                self.apply_control(event_loop, window_id, control);
            }

            _ => {}
        }
    }
}
