use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::reveal::{stagger_delay_ms, RevealSet, VISIBLE_CLASS};

fn observe_reveals(cfg: &SiteConfig) -> Result<()> {
    let watched = Rc::new(dom::query_all(".glass-card, .project-card")?);
    let threshold = cfg.reveal_threshold;
    let mut seen = RevealSet::new(watched.len(), threshold);

    let callback = {
        let watched = Rc::clone(&watched);
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                if seen.on_intersection(index, entry.intersection_ratio().max(threshold)) {
                    if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                        log::warn!("reveal failed: {err:?}");
                    }
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in watched.iter() {
        observer.observe(el);
    }
    log::debug!("reveal: watching {} elements", watched.len());
    Ok(())
}

/// Fade the glass cards in one after another on load.
fn stagger_cards(cfg: &SiteConfig) -> Result<()> {
    let cards = dom::query_all(".glass-card")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok());
    for (index, card) in cards.enumerate() {
        dom::set_styles(
            &card,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)"),
            ],
        )?;
        dom::set_timeout(stagger_delay_ms(index, cfg.card_stagger_ms), move || {
            let shown = [("opacity", "1"), ("transform", "translateY(0)")];
            if let Err(err) = dom::set_styles(&card, &shown) {
                log::warn!("card stagger failed: {err}");
            }
        })?;
    }
    Ok(())
}

pub fn init(cfg: &SiteConfig) -> Result<()> {
    observe_reveals(cfg)?;
    stagger_cards(cfg)
}
