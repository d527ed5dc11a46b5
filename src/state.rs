use crate::playground::Language;
use crate::theme::Theme;

/// Page state shared between components, held in one place instead of in
/// ambient globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub theme: Theme,
    /// `data-lang` of the selected playground tab. Kept as the raw tag so an
    /// unrecognised tab still runs and reports the fallback output.
    pub language: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::JavaScript.tag().to_string(),
        }
    }
}

/// A value derived from the active theme, recomputed only when the theme it
/// was computed under changes.
#[derive(Debug)]
pub struct ThemedValue<V> {
    cached: Option<(Theme, V)>,
}

impl<V> Default for ThemedValue<V> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<V> ThemedValue<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `theme`, calling `compute` on first use and after a
    /// theme change. A failed computation leaves nothing cached.
    pub fn get_or_refresh<E>(
        &mut self,
        theme: Theme,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        let entry = match self.cached.take() {
            Some((cached, value)) if cached == theme => (cached, value),
            _ => (theme, compute()?),
        };
        Ok(&self.cached.insert(entry).1)
    }

    pub fn theme(&self) -> Option<Theme> {
        self.cached.as_ref().map(|(theme, _)| *theme)
    }
}
