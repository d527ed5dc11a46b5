//! Thin helpers over `web_sys` lookups, listeners and timers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::MissingElement("document".into()))
}

pub fn root_element() -> Result<Element> {
    document()?
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("<html>".into()))
}

/// `document.getElementById(id)` cast to `T`.
pub fn by_id<T: JsCast>(id: &str) -> Result<T> {
    let selector = format!("#{id}");
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(selector.clone()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::UnexpectedType {
            selector,
            expected: std::any::type_name::<T>(),
        })
}

/// First descendant of `parent` matching `selector`, cast to `T`.
pub fn query_in<T: JsCast>(parent: &Element, selector: &str) -> Result<T> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::UnexpectedType {
            selector: selector.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot `setTimeout`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(f);
    let handle = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(handle)
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<()> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Defaults overridden by `data-*` attributes on `<html>`.
pub fn site_config() -> Result<SiteConfig> {
    let root: HtmlElement = root_element()?
        .dyn_into()
        .map_err(|_| SiteError::UnexpectedType {
            selector: "<html>".into(),
            expected: "HtmlElement",
        })?;
    let dataset = root.dataset();
    Ok(SiteConfig::default().apply_overrides(|key| dataset.get(key)))
}
