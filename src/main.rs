//! Prize wheel entry point
//!
//! Wires the wheel session to the page: canvas painting, control buttons,
//! winner modal and the animation loop. The native build runs one spin
//! headless as a smoke check.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Names preloaded at startup so the wheel renders populated
const DEMO_ROSTER: [&str; 12] = [
    "Avery", "Blake", "Casey", "Devon", "Emery", "Finley", "Harper", "Jordan", "Kendall", "Logan",
    "Morgan", "Quinn",
];

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
        HtmlElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent, Window,
    };

    use prize_wheel::render::palette::ui;
    use prize_wheel::render::{CanvasPainter, Viewport, build_scene, segment_color};
    use prize_wheel::wheel::{FeedbackSink, SpinTick, WheelSession};

    /// Everything the browser shell owns
    struct App {
        session: WheelSession,
        painter: CanvasPainter,
        canvas: HtmlCanvasElement,
        viewport: Viewport,
        rng: Pcg32,
        feedback: PageFeedback,
        /// Redraw on the next frame even without spin progress
        dirty: bool,
    }

    impl App {
        /// One animation frame: resize check, session tick, redraw when needed
        fn frame(&mut self) {
            if let Some(window) = web_sys::window() {
                let client_w = self.canvas.client_width() as f32;
                let client_h = self.canvas.client_height() as f32;
                if (client_w - self.viewport.width).abs() > 0.5
                    || (client_h - self.viewport.height).abs() > 0.5
                {
                    self.viewport = fit_canvas(&window, &self.canvas, self.painter.context());
                    self.dirty = true;
                }
            }

            let advanced = !matches!(self.session.tick(&mut self.feedback), SpinTick::Idle);
            if advanced || self.dirty {
                self.redraw();
                self.dirty = false;
            }
        }

        fn redraw(&self) {
            let scene = build_scene(
                self.session.roster().names(),
                self.session.wheel_angle(),
                self.viewport,
            );
            self.painter.paint(&scene);
        }

        fn roster_changed(&mut self) {
            self.feedback.update_roster_view(self.session.roster().names());
            self.dirty = true;
        }

        fn request_spin(&mut self) {
            if self.session.request_spin(&mut self.rng, &mut self.feedback) {
                log::info!(
                    "Spin accepted: requested rotation {:.1} rad",
                    self.session.requested_rotation()
                );
            }
        }

        fn add_from_input(&mut self, input: &str) -> usize {
            let added = self.session.add_names(input);
            if added > 0 {
                self.roster_changed();
            }
            added
        }

        fn shuffle(&mut self) {
            if self.session.shuffle_participants(&mut self.rng) {
                self.roster_changed();
            }
        }

        fn clear_all(&mut self) {
            if self.session.clear_participants() {
                self.roster_changed();
            }
        }

        /// Drop the last winner from the wheel and dismiss the modal
        fn remove_winner(&mut self) {
            if let Some(name) = self.feedback.pending_winner.take() {
                if self.session.remove_participant(&name) {
                    self.roster_changed();
                }
            }
            self.feedback.close_modal();
        }
    }

    /// DOM side of the session: spin button, pointer color, winner modal
    /// and the participant list
    struct PageFeedback {
        document: Document,
        /// Winner shown in the open modal, if any
        pending_winner: Option<String>,
    }

    impl PageFeedback {
        fn new(document: Document) -> Self {
            Self {
                document,
                pending_winner: None,
            }
        }

        fn set_spin_button_state(&self, spinning: bool) {
            if let Some(btn) = self.document.get_element_by_id("spin-btn") {
                if let Ok(btn) = btn.dyn_into::<HtmlButtonElement>() {
                    btn.set_disabled(spinning);
                    let caption = if spinning { "SPINNING..." } else { "SPIN THE WHEEL" };
                    btn.set_text_content(Some(caption));
                }
            }
        }

        fn set_pointer_color(&self, css: &str) {
            if let Some(el) = self.document.get_element_by_id("wheel-pointer") {
                if let Ok(el) = el.dyn_into::<HtmlElement>() {
                    let _ = el.style().set_property("border-top-color", css);
                }
            }
        }

        fn show_winner_modal(&mut self, name: &str) {
            self.pending_winner = Some(name.to_string());
            if let Some(el) = self.document.get_element_by_id("winner-name") {
                el.set_text_content(Some(name));
            }
            if let Some(modal) = self.document.get_element_by_id("winner-modal") {
                let _ = modal.class_list().add_1("show");
            }
        }

        fn close_modal(&mut self) {
            self.pending_winner = None;
            if let Some(modal) = self.document.get_element_by_id("winner-modal") {
                let _ = modal.class_list().remove_1("show");
            }
        }

        /// Rebuild the participant list panel and count
        fn update_roster_view(&self, names: &[String]) {
            if let Some(el) = self.document.get_element_by_id("participant-count") {
                el.set_text_content(Some(&names.len().to_string()));
            }
            let Some(list) = self.document.get_element_by_id("participants-list") else {
                return;
            };
            list.set_text_content(None);
            for name in names {
                if let Ok(item) = self.document.create_element("div") {
                    item.set_class_name("participant-item");
                    item.set_text_content(Some(name));
                    let _ = list.append_child(&item);
                }
            }
        }
    }

    impl FeedbackSink for PageFeedback {
        fn spin_started(&mut self) {
            self.set_spin_button_state(true);
            self.set_pointer_color(&ui::WHEEL_RING.css());
        }

        fn winner_selected(&mut self, name: &str, index: usize) {
            log::info!("Winner: {} (segment {})", name, index);
            self.set_spin_button_state(false);
            self.set_pointer_color(&segment_color(index).css());
            self.show_winner_modal(name);
        }
    }

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
    }

    /// Match the backing store to the CSS size times device pixel ratio and
    /// scale the context so painting stays in logical pixels.
    fn fit_canvas(
        window: &Window,
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
    ) -> Viewport {
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width().max(1) as f64;
        let client_h = canvas.client_height().max(1) as f64;
        canvas.set_width((client_w * dpr) as u32);
        canvas.set_height((client_h * dpr) as u32);
        // resizing resets the transform, so rescale afterwards
        let _ = ctx.scale(dpr, dpr);
        Viewport::new(client_w as f32, client_h as f32)
    }

    /// Read the textarea, feed it to the session, clear it on success
    fn add_names_from_page(app: &Rc<RefCell<App>>) {
        let document = app.borrow().feedback.document.clone();
        let Some(input) = document.get_element_by_id("participant-input") else {
            return;
        };
        let Ok(input) = input.dyn_into::<HtmlTextAreaElement>() else {
            return;
        };
        let value = input.value();
        if app.borrow_mut().add_from_input(&value) > 0 {
            input.set_value("");
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|_| JsValue::from_str("logger init failed"))?;

        log::info!("Prize wheel starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = element(&document, "wheel-canvas")?.dyn_into()?;
        let painter = CanvasPainter::new(&canvas)?;
        let viewport = fit_canvas(&window, &canvas, painter.context());

        let seed = js_sys::Date::now() as u64;
        let mut session = WheelSession::new();
        session.set_participants(super::DEMO_ROSTER);

        let feedback = PageFeedback::new(document.clone());
        feedback.update_roster_view(session.roster().names());

        let app = Rc::new(RefCell::new(App {
            session,
            painter,
            canvas,
            viewport,
            rng: Pcg32::seed_from_u64(seed),
            feedback,
            dirty: true,
        }));

        setup_controls(&document, app.clone())?;
        request_animation_frame(app);

        log::info!("Prize wheel running (seed {seed})");
        Ok(())
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Spin
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().request_spin();
            });
            element(document, "spin-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Add names from the textarea
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                add_names_from_page(&app);
            });
            element(document, "add-names-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Shuffle
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().shuffle();
            });
            element(document, "shuffle-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Clear all, behind a confirm dialog
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if app.borrow().session.roster().is_empty() {
                    return;
                }
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Clear all participants?").ok())
                    .unwrap_or(false);
                if confirmed {
                    app.borrow_mut().clear_all();
                }
            });
            element(document, "clear-all-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Winner modal: remove the winner from the wheel
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().remove_winner();
            });
            element(document, "remove-winner-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Winner modal: keep the winner on the wheel
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().feedback.close_modal();
            });
            element(document, "keep-winner-btn")?
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard: Escape closes the modal, Ctrl/Cmd+Enter adds names
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "Escape" => app.borrow_mut().feedback.close_modal(),
                    "Enter" if event.ctrl_key() || event.meta_key() => add_names_from_page(&app),
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use prize_wheel::wheel::{FeedbackSink, SpinTick, WheelSession};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct LogSink;

    impl FeedbackSink for LogSink {
        fn spin_started(&mut self) {
            log::info!("Spin started");
        }

        fn winner_selected(&mut self, name: &str, index: usize) {
            log::info!("Winner: {name} (segment {index})");
        }
    }

    env_logger::init();
    log::info!("Prize wheel (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = WheelSession::new();
    session.set_participants(DEMO_ROSTER);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sink = LogSink;

    if !session.request_spin(&mut rng, &mut sink) {
        log::error!("Spin request rejected");
        return;
    }
    log::info!(
        "Requested rotation: {:.1} rad (seed {seed})",
        session.requested_rotation()
    );

    let mut ticks = 0u32;
    loop {
        match session.tick(&mut sink) {
            SpinTick::Advanced { .. } => ticks += 1,
            SpinTick::Finished {
                winner,
                wheel_angle,
            } => {
                log::info!(
                    "Settled after {ticks} ticks at {wheel_angle:.2} rad on segment {winner}"
                );
                break;
            }
            SpinTick::Idle => break,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Real entry point is wasm_main; the bin target still wants a main
}
