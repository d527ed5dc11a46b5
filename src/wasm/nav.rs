use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::navigator::{link_target, Region, ScrollNavigator};

fn regions(sections: &[HtmlElement]) -> Vec<Region> {
    sections
        .iter()
        .map(|s| {
            Region::new(
                s.id(),
                f64::from(s.offset_top()),
                f64::from(s.offset_height()),
            )
        })
        .collect()
}

fn mark_active(links: &[Element], id: &str) {
    let href = format!("#{id}");
    for link in links {
        let classes = link.class_list();
        let result = if link.get_attribute("href").as_deref() == Some(href.as_str()) {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
        if let Err(err) = result {
            log::warn!("nav link class update failed: {err:?}");
        }
    }
}

fn scroll_to(id: &str) {
    let Some(target) = dom::document().ok().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("no section #{id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn init(cfg: &SiteConfig) -> Result<()> {
    let sections: Vec<HtmlElement> = dom::query_all("section[id]")?
        .into_iter()
        .filter_map(|e| e.dyn_into().ok())
        .collect();
    let links = Rc::new(dom::query_all(".nav-links a")?);
    log::debug!("navigation: {} sections, {} links", sections.len(), links.len());

    let navigator = RefCell::new(ScrollNavigator::new(cfg.scroll_offset));
    let window = dom::window()?;
    {
        let links = Rc::clone(&links);
        let win = window.clone();
        dom::listen(&window, "scroll", move |_: Event| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            let regions = regions(&sections);
            if let Some(id) = navigator.borrow_mut().on_scroll(&regions, scroll_y) {
                mark_active(&links, id);
            }
        })?;
    }

    for link in links.iter() {
        let href = link.get_attribute("href");
        dom::listen(link, "click", move |e: Event| {
            e.prevent_default();
            if let Some(id) = href.as_deref().and_then(link_target) {
                scroll_to(id);
            }
        })?;
    }
    Ok(())
}
