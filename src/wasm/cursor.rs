use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlElement, MouseEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::pointer::{GlowPlacement, GlowTracker};

fn place(glow: &HtmlElement, p: GlowPlacement) -> std::result::Result<(), JsValue> {
    let style = glow.style();
    style.set_property("left", &format!("{}px", p.left))?;
    style.set_property("top", &format!("{}px", p.top))?;
    style.set_property("opacity", if p.visible { "1" } else { "0" })
}

pub fn init(cfg: &SiteConfig) -> Result<()> {
    let glow: HtmlElement = dom::by_id("cursor-glow")?;
    let tracker = Rc::new(RefCell::new(GlowTracker::new(cfg.glow_offset)));
    let document = dom::document()?;

    {
        let glow = glow.clone();
        let tracker = Rc::clone(&tracker);
        dom::listen(&document, "mousemove", move |e: MouseEvent| {
            let p = tracker
                .borrow_mut()
                .on_move(f64::from(e.client_x()), f64::from(e.client_y()));
            if let Err(err) = place(&glow, p) {
                log::warn!("cursor glow: {err:?}");
            }
        })?;
    }

    dom::listen(&document, "mouseleave", move |_: Event| {
        let p = tracker.borrow_mut().on_leave();
        if let Err(err) = place(&glow, p) {
            log::warn!("cursor glow: {err:?}");
        }
    })
}
