//! Playground wiring and the in-page JavaScript evaluator.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{Element, Event, HtmlElement, HtmlTextAreaElement};

use super::dom;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::playground::{
    self, load_sample, prepare_run, EvalError, Evaluator, CLEARED_MESSAGE, EXECUTING_HTML,
};
use crate::state::AppState;

/// Replaces `console.log` with a capturing function for as long as it lives.
/// Dropping it puts the original logger back.
struct ConsoleCapture {
    console: JsValue,
    original: JsValue,
}

impl ConsoleCapture {
    fn install(lines: Rc<RefCell<Vec<String>>>) -> std::result::Result<Self, JsValue> {
        let console = Reflect::get(&js_sys::global(), &"console".into())?;
        let original = Reflect::get(&console, &"log".into())?;

        let to_string = Function::new_with_args("value", "return String(value);");
        // Left to the JS GC, not the guard. A logger kept by evaluated code
        // stays callable after restore; its lines land in an unread buffer.
        let sink = Closure::wrap(Box::new(move |args: Array| {
            let line = args
                .iter()
                .map(|arg| format_arg(&arg, &to_string))
                .collect::<Vec<_>>()
                .join(" ");
            lines.borrow_mut().push(line);
        }) as Box<dyn FnMut(Array)>)
        .into_js_value();

        // Collect variadic arguments into one array for the Rust sink.
        let adapter = Function::new_with_args(
            "sink",
            "return function () { sink(Array.prototype.slice.call(arguments)); };",
        );
        let logger = adapter.call1(&JsValue::UNDEFINED, &sink)?;
        Reflect::set(&console, &"log".into(), &logger)?;

        Ok(Self { console, original })
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        if Reflect::set(&self.console, &"log".into(), &self.original).is_err() {
            log::error!("failed to restore console.log");
        }
    }
}

/// Objects are pretty-printed as JSON, everything else goes through `String()`.
fn format_arg(arg: &JsValue, to_string: &Function) -> String {
    if arg.is_object() {
        let space = JsValue::from_f64(2.0);
        if let Ok(json) = JSON::stringify_with_replacer_and_space(arg, &JsValue::NULL, &space) {
            if let Some(text) = json.as_string() {
                return text;
            }
        }
    }
    to_string
        .call1(&JsValue::UNDEFINED, arg)
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{arg:?}"))
}

fn eval_error(err: JsValue) -> EvalError {
    let message = Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    EvalError::new(message)
}

/// Evaluates source with the page's own JavaScript engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsEvaluator;

impl Evaluator for JsEvaluator {
    fn evaluate(&self, source: &str) -> std::result::Result<Vec<String>, EvalError> {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let capture = ConsoleCapture::install(Rc::clone(&lines)).map_err(eval_error)?;
        let result = js_sys::eval(source);
        drop(capture);
        result.map_err(eval_error)?;
        Ok(lines.take())
    }
}

fn select_tab(tabs: &[Element], active: &Element) {
    for tab in tabs {
        let classes = tab.class_list();
        let result = if tab == active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
        if let Err(err) = result {
            log::warn!("tab class update failed: {err:?}");
        }
    }
}

pub fn init(cfg: &SiteConfig, state: &Rc<RefCell<AppState>>) -> Result<()> {
    let editor: HtmlTextAreaElement = dom::by_id("codeEditor")?;
    let output: HtmlElement = dom::by_id("output")?;
    let run_button: HtmlElement = dom::by_id("runCode")?;
    let clear_button: HtmlElement = dom::by_id("clearCode")?;
    let tabs = Rc::new(dom::query_all(".tab-btn")?);

    editor.set_value(load_sample(&state.borrow().language));

    for tab in tabs.iter() {
        let tabs = Rc::clone(&tabs);
        let tab_el = tab.clone();
        let editor = editor.clone();
        let state = Rc::clone(state);
        dom::listen(tab, "click", move |_: Event| {
            select_tab(&tabs, &tab_el);
            let tag = tab_el.get_attribute("data-lang").unwrap_or_default();
            editor.set_value(load_sample(&tag));
            log::debug!("playground language: {tag}");
            state.borrow_mut().language = tag;
        })?;
    }

    {
        let editor = editor.clone();
        let output = output.clone();
        let state = Rc::clone(state);
        let latency = cfg.playground_latency_ms;
        dom::listen(&run_button, "click", move |_: Event| {
            let source = match prepare_run(&editor.value()) {
                Ok(source) => source.to_string(),
                Err(message) => {
                    output.set_text_content(Some(message));
                    return;
                }
            };
            output.set_inner_html(EXECUTING_HTML);

            let tag = state.borrow().language.clone();
            let output = output.clone();
            let scheduled = dom::set_timeout(latency, move || {
                let result = playground::run(&tag, &source, &JsEvaluator);
                output.set_inner_html(&result.to_html());
            });
            if let Err(err) = scheduled {
                log::warn!("could not schedule run: {err}");
            }
        })?;
    }

    dom::listen(&clear_button, "click", move |_: Event| {
        editor.set_value("");
        output.set_text_content(Some(CLEARED_MESSAGE));
    })
}
