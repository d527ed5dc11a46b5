use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, SvgElement,
};

use super::{dom, render};
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::frame::{FrameError, FrameStatus, FrameTask};
use crate::indicator::{parse_percentage, SkillIndicator};

struct SkillCard {
    element: Element,
    ring: SvgElement,
    label: Element,
    indicator: RefCell<SkillIndicator>,
}

impl SkillCard {
    fn from_element(element: Element, cfg: &SiteConfig) -> Result<Self> {
        let progress: Element = dom::query_in(&element, ".circular-progress")?;
        let raw = progress.get_attribute("data-percentage").unwrap_or_default();
        let percentage = parse_percentage(&raw)
            .ok_or(SiteError::InvalidAttribute {
                attribute: "data-percentage",
                value: raw,
            })
            .unwrap_or_else(|err| {
                log::warn!("{err}, using 0");
                0
            });
        Ok(Self {
            ring: dom::query_in(&progress, ".progress-ring-circle")?,
            label: dom::query_in(&progress, ".percentage-text")?,
            indicator: RefCell::new(SkillIndicator::new(percentage, cfg.counter_duration_ms)),
            element,
        })
    }
}

/// Counts the label up to the target, one eased step per frame.
struct Counter(Rc<SkillCard>);

impl FrameTask for Counter {
    fn frame(&mut self, now: f64) -> std::result::Result<FrameStatus, FrameError> {
        let mut indicator = self.0.indicator.borrow_mut();
        let shown = indicator.counter_frame(now);
        self.0.label.set_text_content(Some(&format!("{shown}%")));
        Ok(if indicator.is_done() {
            FrameStatus::Finished
        } else {
            FrameStatus::Continue
        })
    }
}

fn animate(card: &Rc<SkillCard>, cfg: &SiteConfig) -> Result<()> {
    let (offset, target) = {
        let indicator = card.indicator.borrow();
        (indicator.ring_offset(cfg.ring_radius), indicator.target())
    };
    log::info!("skill indicator triggered: {target}%");

    let ring = card.ring.clone();
    let stroke = format!("var({})", cfg.accent_property);
    dom::set_timeout(cfg.ring_delay_ms, move || {
        let style = ring.style();
        let applied = style
            .set_property("stroke-dashoffset", &offset.to_string())
            .and_then(|_| style.set_property("stroke", &stroke));
        if let Err(err) = applied {
            log::warn!("ring fill failed: {err:?}");
        }
    })?;

    let card = Rc::clone(card);
    dom::set_timeout(cfg.counter_delay_ms, move || {
        if let Err(err) = render::spawn(Counter(card)) {
            log::warn!("counter did not start: {err}");
        }
    })?;
    Ok(())
}

pub fn init(cfg: &SiteConfig) -> Result<()> {
    let cards: Rc<Vec<Rc<SkillCard>>> = Rc::new(
        dom::query_all(".skill-card")?
            .into_iter()
            .map(|el| SkillCard::from_element(el, cfg).map(Rc::new))
            .collect::<Result<_>>()?,
    );
    log::debug!("skills: {} indicators", cards.len());

    let threshold = cfg.indicator_threshold;
    let callback = {
        let cards = Rc::clone(&cards);
        let cfg = cfg.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(card) = cards.iter().find(|c| c.element == target) else {
                    continue;
                };
                // Entries are only delivered past a threshold; the reported
                // ratio can round to just under it.
                let ratio = entry.intersection_ratio().max(threshold);
                if card.indicator.borrow_mut().on_visibility(ratio, threshold) {
                    if let Err(err) = animate(card, &cfg) {
                        log::warn!("skill animation failed: {err}");
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in cards.iter() {
        observer.observe(&card.element);
        card.indicator.borrow_mut().observe();
    }
    Ok(())
}
