use std::cell::RefCell;

use portfolio_wasm::error::{Result, SiteError};
use portfolio_wasm::theme::{
    KeyValueStore, MemoryStore, PreferenceStore, Theme, ThemeManager, ThemeTarget,
};

const KEY: &str = "theme";

/// Stand-in for the `data-theme` attribute on `<html>`.
#[derive(Default)]
struct Attribute(RefCell<Option<Theme>>);

impl ThemeTarget for Attribute {
    fn apply(&self, theme: Theme) -> Result<()> {
        *self.0.borrow_mut() = Some(theme);
        Ok(())
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(Some("dark".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(SiteError::Storage("quota exceeded".into()))
    }
}

#[test]
fn first_load_defaults_to_light() {
    let store = MemoryStore::new();
    let attr = Attribute::default();
    let manager = ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(*attr.0.borrow(), Some(Theme::Light));
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn dark_survives_reload() {
    let store = MemoryStore::new();
    {
        let attr = Attribute::default();
        let mut manager = ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
        assert_eq!(manager.toggle().unwrap(), Theme::Dark);
        assert_eq!(*attr.0.borrow(), Some(Theme::Dark));
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));
    }

    let attr = Attribute::default();
    let manager = ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(*attr.0.borrow(), Some(Theme::Dark));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn toggle_flips_and_persists_every_time() {
    let store = MemoryStore::new();
    let attr = Attribute::default();
    let mut manager = ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
    for expected in [Theme::Dark, Theme::Light, Theme::Dark] {
        assert_eq!(manager.toggle().unwrap(), expected);
        assert_eq!(*attr.0.borrow(), Some(expected));
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn garbage_preference_falls_back_to_light() {
    let store = MemoryStore::new();
    store.set(KEY, "solarized").unwrap();
    assert_eq!(PreferenceStore::new(&store, KEY).load(), Theme::Light);
}

#[test]
fn unrecognised_preference_is_rewritten_on_init() {
    let store = MemoryStore::new();
    store.set(KEY, "solarized").unwrap();
    let attr = Attribute::default();
    let manager = ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(*attr.0.borrow(), Some(Theme::Light));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn valid_preference_is_not_rewritten() {
    let store = MemoryStore::new();
    store.set(KEY, "dark").unwrap();
    let attr = Attribute::default();
    ThemeManager::init(PreferenceStore::new(&store, KEY), &attr).unwrap();
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(*attr.0.borrow(), Some(Theme::Dark));
}

#[test]
fn failed_write_leaves_attribute_alone() {
    let attr = Attribute::default();
    let mut manager = ThemeManager::init(PreferenceStore::new(ReadOnlyStore, KEY), &attr).unwrap();
    assert_eq!(manager.current(), Theme::Dark);
    assert!(manager.toggle().is_err());
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(*attr.0.borrow(), Some(Theme::Dark));
}

#[test]
fn theme_strings() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::default(), Theme::Light);
}
