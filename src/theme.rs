// Dark/light theme as an explicit value with one mutator.
//
// The controller is built once during init and moved into the toggle
// button's closure; there is no global theme state. Persistence is a single
// `localStorage` key, read at startup with `prefers-color-scheme` as the
// fallback.

use crate::constants::{THEME_DARK_CLASS, THEME_STORAGE_KEY};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    /// Stored preference first, then the OS preference, then dark.
    pub fn load(window: &web::Window) -> Self {
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|s| Theme::parse(&s));
        let current = stored.unwrap_or_else(|| {
            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mql| mql.matches())
                .unwrap_or(true);
            if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        });
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// The single mutator: flips the document class and persists.
    pub fn set(&mut self, window: &web::Window, document: &web::Document, theme: Theme) {
        self.current = theme;
        if let Some(root) = document.document_element() {
            let cl = root.class_list();
            match theme {
                Theme::Dark => _ = cl.add_1(THEME_DARK_CLASS),
                Theme::Light => _ = cl.remove_1(THEME_DARK_CLASS),
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }

    pub fn toggle(&mut self, window: &web::Window, document: &web::Document) {
        self.set(window, document, self.current.toggled());
    }
}
