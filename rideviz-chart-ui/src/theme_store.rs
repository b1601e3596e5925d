//! Persisted light/dark/system theme store.
//!
//! The tri-state choice and the last observed OS dark flag live in
//! localStorage; the resolved value is written to `<html data-theme="…">`
//! for the stylesheet to consume. An OS scheme-change subscription keeps
//! `isSystemDark` current for the page lifetime.

use dioxus::prelude::*;
use rideviz_core::theme::{self, ResolvedTheme, Theme, SYSTEM_DARK_KEY, THEME_KEY};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Storage};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Single source of truth for the presentation theme.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: Signal<Theme>,
    system_dark: Signal<bool>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            theme: Signal::new(Theme::System),
            system_dark: Signal::new(false),
        }
    }

    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn resolved(&self) -> ResolvedTheme {
        theme::resolve((self.theme)(), (self.system_dark)())
    }

    /// Rehydrate the persisted state, correct `isSystemDark` from the live
    /// media query, subscribe to OS scheme changes for the page lifetime,
    /// and apply the resolved theme immediately. Call once on mount.
    pub fn init(&mut self) {
        if let Some(storage) = local_storage() {
            let stored_theme = storage.get_item(THEME_KEY).ok().flatten();
            self.theme.set(Theme::parse(stored_theme.as_deref()));
            let stored_dark = storage.get_item(SYSTEM_DARK_KEY).ok().flatten();
            self.system_dark
                .set(theme::parse_system_dark(stored_dark.as_deref()));
        }

        if let Some(query) = dark_scheme_query() {
            self.system_dark.set(query.matches());

            let mut store = *self;
            let on_change =
                Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |evt: MediaQueryListEvent| {
                    // Updates isSystemDark unconditionally; the resolution
                    // rule only changes the visual outcome in system mode.
                    store.system_dark.set(evt.matches());
                    store.persist_and_apply();
                });
            query.set_onchange(Some(on_change.as_ref().unchecked_ref()));
            // Subscription lives for the page lifetime
            on_change.forget();
        }

        self.persist_and_apply();
    }

    pub fn set_dark(&mut self) {
        self.theme.set(Theme::Dark);
        self.persist_and_apply();
    }

    pub fn set_light(&mut self) {
        self.theme.set(Theme::Light);
        self.persist_and_apply();
    }

    pub fn set_auto(&mut self) {
        self.theme.set(Theme::System);
        self.persist_and_apply();
    }

    fn persist_and_apply(&self) {
        let current = *self.theme.peek();
        let system_dark = *self.system_dark.peek();
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, current.as_str());
            let _ = storage.set_item(SYSTEM_DARK_KEY, theme::encode_system_dark(system_dark));
        }
        apply_theme(theme::resolve(current, system_dark));
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Write the resolved theme onto `<html>` for the stylesheet to consume.
fn apply_theme(resolved: ResolvedTheme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(html) = document.document_element() {
                let _ = html.set_attribute("data-theme", resolved.as_str());
            }
        }
    }
}
