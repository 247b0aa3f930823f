use anyhow::Context;
use cubes_core::{CubeCount, LoopControl, SceneConfig, ViewportState, Visualization};
use cubes_render::GpuRenderer;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

mod input;

use input::{count_step_for_key, wheel_steps, DragMode, PointerTracker};

fn title(count: CubeCount) -> String {
    format!("Interactive Cubes: {} cubes (arrows to change, drag to orbit, scroll to zoom)", count.get())
}

/// Defaults with `CUBES_COUNT` / `CUBES_SEED` overrides; bad values are logged and skipped.
fn config_from_env() -> SceneConfig {
    let mut config = SceneConfig::default();
    for (var, key) in [("CUBES_COUNT", "count"), ("CUBES_SEED", "seed")] {
        if let Ok(value) = std::env::var(var) {
            match config.clone().with_override(key, &value) {
                Ok(c) => config = c,
                Err(e) => log::warn!("ignoring {}: {}", var, e),
            }
        }
    }
    config
}

/// Tear the view down and leave the event loop.
fn shutdown(viz: &mut Visualization<GpuRenderer<'_>>, elwt: &EventLoopWindowTarget<()>) {
    viz.teardown();
    let leaked = viz.renderer().live_meshes();
    if leaked > 0 {
        log::warn!("{} GPU meshes still alive after teardown", leaked);
    }
    elwt.exit();
}

fn run_frame(viz: &mut Visualization<GpuRenderer<'_>>, elwt: &EventLoopWindowTarget<()>) {
    match viz.tick() {
        Ok(LoopControl::Continue) => {}
        Ok(LoopControl::Stop) => elwt.exit(),
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            viz.renderer_mut().reconfigure();
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("render error: out of GPU memory");
            shutdown(viz, elwt);
        }
        Err(e) => log::warn!("frame skipped: {:?}", e),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_env();
    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(title(config.cube_count))
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .context("window")?;
    let window = &window;

    let size = window.inner_size();
    let renderer = pollster::block_on(GpuRenderer::new(window, size.width, size.height))
        .context("gpu init")?;
    let mut viz = Visualization::mount(
        renderer,
        config,
        ViewportState::new(size.width, size.height),
    );
    let mut tracker = PointerTracker::default();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => shutdown(&mut viz, elwt),
                WindowEvent::Resized(size) => viz.resized(size.width, size.height),
                WindowEvent::ModifiersChanged(m) => tracker.shift = m.state().shift_key(),
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    viz.pointer_moved(x, y);
                    match tracker.moved(x, y) {
                        Some((DragMode::Rotate, dx, dy)) => viz.orbit_rotate(dx, dy),
                        Some((DragMode::Pan, dx, dy)) => viz.orbit_pan(dx, dy),
                        None => {}
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => match state {
                    ElementState::Pressed => tracker.pressed(button),
                    ElementState::Released => tracker.released(button),
                },
                WindowEvent::MouseWheel { delta, .. } => viz.orbit_zoom(wheel_steps(delta)),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(named),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    if named == NamedKey::Escape {
                        shutdown(&mut viz, elwt);
                    } else if let Some(step) = count_step_for_key(named, tracker.shift) {
                        let next = viz.cube_count().step(step);
                        if viz.set_cube_count(next) {
                            window.set_title(&title(next));
                        }
                    }
                }
                WindowEvent::RedrawRequested => run_frame(&mut viz, elwt),
                _ => {}
            },
            Event::AboutToWait => {
                if !viz.is_torn_down() {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .context("event loop")?;
    Ok(())
}
