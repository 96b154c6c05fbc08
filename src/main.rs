//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and starts the frame timer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::driver::frame_interval_ms;
    use canvas_pong::renderer::{RenderState, VertexBatch};
    use canvas_pong::{FrameDriver, Settings};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        batch: VertexBatch,
        render_state: RenderState,
    }

    impl Game {
        /// Simulate and present one frame
        fn frame(&mut self) {
            self.driver.frame(&mut self.batch);

            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.batch.clear();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the viewport; later resizes are not tracked
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => render_state,
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        };

        let batch = VertexBatch::new(width as f32, height as f32);
        let seed = js_sys::Date::now() as u64;
        let driver = FrameDriver::from_surface(&batch, seed, Settings::load());

        let game = Rc::new(RefCell::new(Game {
            driver,
            batch,
            render_state,
        }));

        setup_input_handlers(&canvas, game.clone());
        start_frame_timer(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let pointer_y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().driver.user_paddle().follow_pointer(pointer_y);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_frame_timer(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for frame timer");
            return;
        };

        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().frame();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            frame_interval_ms(),
        ) {
            log::error!("Failed to start frame timer: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::consts::FRAMES_PER_SEC;
    use canvas_pong::renderer::VertexBatch;
    use canvas_pong::{FrameDriver, Settings};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("No window on native - running a headless match; use the web build to play");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut batch = VertexBatch::new(1280.0, 720.0);
    let mut driver = FrameDriver::from_surface(&batch, seed, Settings::load());
    driver.run_paced(&mut batch, 10 * FRAMES_PER_SEC as u64);

    let state = driver.state();
    log::info!(
        "Final score after {} frames: {} - {}",
        state.time_ticks,
        state.user.score,
        state.com.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
