use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, HtmlElement, Storage};

use super::dom;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::state::AppState;
use crate::theme::{KeyValueStore, PreferenceStore, Theme, ThemeManager, ThemeTarget};

/// `window.localStorage`.
pub struct LocalStorage(Storage);

impl LocalStorage {
    pub fn open() -> Result<Self> {
        dom::window()?
            .local_storage()?
            .map(Self)
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| SiteError::Storage(format!("get {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("set {key}: {e:?}")))
    }
}

/// Attribute on `<html>` that stylesheets key their palette on.
pub struct RootAttribute {
    root: Element,
    name: String,
}

impl RootAttribute {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            root: dom::root_element()?,
            name: name.into(),
        })
    }
}

impl ThemeTarget for RootAttribute {
    fn apply(&self, theme: Theme) -> Result<()> {
        self.root.set_attribute(&self.name, theme.as_str())?;
        Ok(())
    }
}

pub fn init(cfg: &SiteConfig, state: &Rc<RefCell<AppState>>) -> Result<()> {
    let prefs = PreferenceStore::new(LocalStorage::open()?, cfg.theme_storage_key.clone());
    let target = RootAttribute::new(cfg.theme_attribute.as_str())?;
    let manager = ThemeManager::init(prefs, target)?;
    state.borrow_mut().theme = manager.current();

    let toggle: HtmlElement = dom::by_id("themeToggle")?;
    let manager = RefCell::new(manager);
    let state = Rc::clone(state);
    dom::listen(&toggle, "click", move |_: Event| {
        match manager.borrow_mut().toggle() {
            Ok(theme) => state.borrow_mut().theme = theme,
            Err(err) => log::warn!("theme toggle failed: {err}"),
        }
    })
}
