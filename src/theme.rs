//! Theme preference: a single persisted light/dark flag mirrored onto the
//! document root.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key/value surface (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for non-browser targets and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Where the active theme is made visible (the `data-theme` attribute).
pub trait ThemeTarget {
    fn apply(&self, theme: Theme) -> Result<()>;
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for &T {
    fn apply(&self, theme: Theme) -> Result<()> {
        (**self).apply(theme)
    }
}

/// Reads and writes the one persisted preference.
pub struct PreferenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Raw stored value.
    pub fn read(&self) -> Result<Option<String>> {
        self.store.get(&self.key)
    }

    /// Stored preference, or `Light` when absent or unrecognised.
    pub fn load(&self) -> Theme {
        match self.read() {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("unknown stored theme {value:?}, using light");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                Theme::Light
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        self.store.set(&self.key, theme.as_str())
    }
}

/// Couples the preference with its document attribute so the two never
/// diverge: every mutation persists first, then applies.
pub struct ThemeManager<S, T> {
    prefs: PreferenceStore<S>,
    target: T,
    current: Theme,
}

impl<S: KeyValueStore, T: ThemeTarget> ThemeManager<S, T> {
    /// Load the stored preference and apply it. An unrecognised stored value
    /// is overwritten with the fallback so storage and attribute agree.
    pub fn init(prefs: PreferenceStore<S>, target: T) -> Result<Self> {
        let current = prefs.load();
        if matches!(prefs.read(), Ok(Some(ref v)) if Theme::parse(v).is_none()) {
            prefs.save(current)?;
        }
        target.apply(current)?;
        log::debug!("theme initialised: {current}");
        Ok(Self {
            prefs,
            target,
            current,
        })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> Result<Theme> {
        self.prefs.save(theme)?;
        self.target.apply(theme)?;
        self.current = theme;
        log::info!("theme set to {theme}");
        Ok(theme)
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.current.toggled())
    }
}
