use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::frame::{CancellationToken, FrameDriver, FrameError, FrameStatus, FrameTask};
use crate::particles::{FieldParams, ParticleField};
use crate::state::{AppState, ThemedValue};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(slot: &FrameSlot) -> Result<i32> {
    let slot = slot.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| SiteError::Js("frame callback already released".into()))?;
    Ok(dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Drive `task` from `requestAnimationFrame` until it finishes or the returned
/// token is cancelled. A failing frame is logged and the loop keeps going.
pub fn spawn<T: FrameTask + 'static>(task: T) -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let mut driver = FrameDriver::new(task, token.clone());

    // `f` holds the animation-frame closure so that it can re-request itself.
    // Storing it inside an `Option` lets us create the `Closure` first and
    // then hand a reference to it to the closure's own body.
    let f: FrameSlot = Rc::new(RefCell::new(None));
    let g = Rc::clone(&f);
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !driver.tick(now) {
            log::debug!("frame loop stopped after {} frames", driver.frames());
            let _ = f.borrow_mut().take();
            return;
        }
        if let Err(err) = request_frame(&f) {
            log::error!("could not schedule next frame: {err}");
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g)?;
    Ok(token)
}

/// Background particle drawing, one field step per frame.
struct ParticleBackdrop {
    ctx: CanvasRenderingContext2d,
    field: Rc<RefCell<ParticleField>>,
    window: Window,
    root: Element,
    accent_property: String,
    state: Rc<RefCell<AppState>>,
    accent: ThemedValue<String>,
}

fn computed_property(
    window: &Window,
    root: &Element,
    name: &str,
) -> std::result::Result<String, FrameError> {
    let style = window
        .get_computed_style(root)?
        .ok_or_else(|| FrameError("no computed style for <html>".into()))?;
    Ok(style.get_property_value(name)?.trim().to_string())
}

impl FrameTask for ParticleBackdrop {
    fn frame(&mut self, _now: f64) -> std::result::Result<FrameStatus, FrameError> {
        let mut field = self.field.borrow_mut();
        self.ctx.clear_rect(0.0, 0.0, field.width(), field.height());
        field.step();

        // Re-read from computed style only after a theme switch.
        let theme = self.state.borrow().theme;
        let accent = self.accent.get_or_refresh(theme, || {
            computed_property(&self.window, &self.root, &self.accent_property)
        })?;
        self.ctx.set_fill_style_str(accent);
        for p in field.particles() {
            self.ctx.begin_path();
            self.ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(FrameStatus::Continue)
    }
}

fn viewport(window: &Window) -> Result<(f64, f64)> {
    let dim = |v: wasm_bindgen::JsValue, name: &str| {
        v.as_f64()
            .map(f64::floor)
            .ok_or_else(|| SiteError::Js(format!("{name} is not a number")))
    };
    Ok((
        dim(window.inner_width()?, "innerWidth")?,
        dim(window.inner_height()?, "innerHeight")?,
    ))
}

fn size_canvas(canvas: &HtmlCanvasElement, (w, h): (f64, f64)) {
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

/// Append the fixed full-viewport canvas and start animating particles on it.
pub fn start_background(
    cfg: &SiteConfig,
    state: &Rc<RefCell<AppState>>,
) -> Result<CancellationToken> {
    let document = dom::document()?;
    let window = dom::window()?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| SiteError::UnexpectedType {
            selector: "canvas".into(),
            expected: "HtmlCanvasElement",
        })?;
    dom::set_styles(
        &canvas,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "-1"),
            ("opacity", "0.1"),
        ],
    )?;
    document
        .body()
        .ok_or_else(|| SiteError::MissingElement("<body>".into()))?
        .append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| SiteError::Js("2d canvas context not supported".into()))?
        .dyn_into()
        .map_err(|_| SiteError::UnexpectedType {
            selector: "canvas".into(),
            expected: "CanvasRenderingContext2d",
        })?;

    let size = viewport(&window)?;
    size_canvas(&canvas, size);
    let field = Rc::new(RefCell::new(ParticleField::from_entropy(
        size.0,
        size.1,
        FieldParams::from(cfg),
    )));

    {
        let field = Rc::clone(&field);
        let win = window.clone();
        dom::listen(&window, "resize", move |_: Event| match viewport(&win) {
            Ok(size) => {
                size_canvas(&canvas, size);
                field.borrow_mut().resize(size.0, size.1);
            }
            Err(err) => log::warn!("resize ignored: {err}"),
        })?;
    }

    spawn(ParticleBackdrop {
        ctx,
        field,
        window,
        root: dom::root_element()?,
        accent_property: cfg.accent_property.clone(),
        state: Rc::clone(state),
        accent: ThemedValue::new(),
    })
}
