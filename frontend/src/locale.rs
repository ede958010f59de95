//! Locale context: the one writer of the document-level `lang`/`dir`
//! attributes.

use client::locale::{DirectionSink, LocaleController, TextDirection, UiLang};
use common::archive_query::FilterUpdate;
use dioxus::prelude::*;

/// Writes `document.documentElement`'s `lang` and `dir` attributes so the
/// whole page flips between LTR and RTL rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSink;

impl DirectionSink for DocumentSink {
    fn apply(&mut self, lang: UiLang, direction: TextDirection) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        let Some(root) = root else {
            return;
        };
        let _ = root.set_attribute("lang", lang.tag());
        let _ = root.set_attribute("dir", direction.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct LocaleState {
    controller: Signal<LocaleController<DocumentSink>>,
}

impl LocaleState {
    pub fn current(&self) -> UiLang {
        self.controller.read().current()
    }

    /// Reads without subscribing; for effects that must not re-run when the
    /// locale changes.
    pub fn peek(&self) -> UiLang {
        self.controller.peek().current()
    }

    /// Switches the locale and returns the filter update the caller pushes
    /// into its filter state (language is itself a filter dimension).
    pub fn set(&self, lang: UiLang) -> FilterUpdate {
        let mut controller = self.controller;
        controller.write().set(lang)
    }

    pub fn toggle(&self) -> FilterUpdate {
        let mut controller = self.controller;
        controller.write().toggle()
    }

    /// URL-driven switch; unsupported tags are an error the caller must
    /// surface, never silently default.
    pub fn set_from_tag(&self, tag: &str) -> anyhow::Result<FilterUpdate> {
        let mut controller = self.controller;
        let update = controller.write().set_from_tag(tag)?;
        Ok(update)
    }
}

pub fn provide_locale(initial: UiLang) -> LocaleState {
    use_context_provider(|| LocaleState {
        controller: Signal::new(LocaleController::new(DocumentSink, initial)),
    })
}

pub fn use_locale() -> LocaleState {
    use_context::<LocaleState>()
}
