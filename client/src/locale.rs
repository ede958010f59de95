//! Interface language and text direction.
//!
//! The document-level `lang`/`dir` attributes are process-wide state with a
//! single writer: [`LocaleController`]. The controller talks to an injected
//! [`DirectionSink`] so the browser write (on `document.documentElement`)
//! stays in the UI layer and tests can observe an in-memory one.

use common::archive_query::{ApiLang, FilterUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLang {
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl UiLang {
    /// Parses a URL/i18n language tag. Anything but the two supported tags is
    /// an error; callers must not fall back silently.
    pub fn from_tag(tag: &str) -> anyhow::Result<UiLang> {
        match tag {
            "en" => Ok(UiLang::En),
            "ar" => Ok(UiLang::Ar),
            other => anyhow::bail!("language {other} is not supported"),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            UiLang::En => "en",
            UiLang::Ar => "ar",
        }
    }

    pub fn toggled(&self) -> UiLang {
        match self {
            UiLang::En => UiLang::Ar,
            UiLang::Ar => UiLang::En,
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            UiLang::En => TextDirection::Ltr,
            UiLang::Ar => TextDirection::Rtl,
        }
    }

    /// The value the archive API expects in the `lang` filter.
    pub fn api_lang(&self) -> ApiLang {
        match self {
            UiLang::En => ApiLang::English,
            UiLang::Ar => ApiLang::Arabic,
        }
    }
}

impl Default for UiLang {
    fn default() -> Self {
        UiLang::En
    }
}

/// Receives the document-level language/direction writes.
pub trait DirectionSink {
    fn apply(&mut self, lang: UiLang, direction: TextDirection);
}

#[derive(Debug)]
pub struct LocaleController<S> {
    sink: S,
    current: UiLang,
}

impl<S: DirectionSink> LocaleController<S> {
    /// Applies the initial locale to the document immediately.
    pub fn new(mut sink: S, initial: UiLang) -> Self {
        sink.apply(initial, initial.direction());
        Self {
            sink,
            current: initial,
        }
    }

    pub fn current(&self) -> UiLang {
        self.current
    }

    /// Switches to `lang`, writes the document attributes, and returns the
    /// filter update the caller pushes into its filter state.
    pub fn set(&mut self, lang: UiLang) -> FilterUpdate {
        self.current = lang;
        self.sink.apply(lang, lang.direction());
        FilterUpdate::lang(lang.api_lang())
    }

    /// en→ar / ar→en.
    pub fn toggle(&mut self) -> FilterUpdate {
        self.set(self.current.toggled())
    }

    /// URL-driven switch: the tag comes from a route query parameter and is
    /// the source of truth. Unsupported tags fail.
    pub fn set_from_tag(&mut self, tag: &str) -> anyhow::Result<FilterUpdate> {
        let lang = UiLang::from_tag(tag)?;
        Ok(self.set(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(&'static str, &'static str)>,
    }

    impl DirectionSink for RecordingSink {
        fn apply(&mut self, lang: UiLang, direction: TextDirection) {
            self.writes.push((lang.tag(), direction.as_str()));
        }
    }

    #[test]
    fn toggling_to_arabic_sets_rtl_and_the_arabic_filter_value() {
        let mut controller = LocaleController::new(RecordingSink::default(), UiLang::En);
        let update = controller.toggle();
        assert_eq!(controller.current(), UiLang::Ar);
        assert_eq!(update.lang, Some(ApiLang::Arabic));
        assert_eq!(
            controller.sink.writes,
            vec![("en", "ltr"), ("ar", "rtl")],
            "initial locale applied at start, toggle writes ar/rtl"
        );
    }

    #[test]
    fn toggling_back_restores_ltr_english() {
        let mut controller = LocaleController::new(RecordingSink::default(), UiLang::Ar);
        let update = controller.toggle();
        assert_eq!(update.lang, Some(ApiLang::English));
        assert_eq!(controller.sink.writes.last(), Some(&("en", "ltr")));
    }

    #[test]
    fn url_tags_drive_the_locale() {
        let mut controller = LocaleController::new(RecordingSink::default(), UiLang::En);
        let update = controller.set_from_tag("ar").unwrap();
        assert_eq!(update.lang, Some(ApiLang::Arabic));
        assert_eq!(controller.current(), UiLang::Ar);
    }

    #[test]
    fn unsupported_tags_are_an_error() {
        let mut controller = LocaleController::new(RecordingSink::default(), UiLang::En);
        assert!(controller.set_from_tag("fr").is_err());
        assert!(UiLang::from_tag("").is_err());
        // the failed switch left no partial write behind
        assert_eq!(controller.sink.writes, vec![("en", "ltr")]);
        assert_eq!(controller.current(), UiLang::En);
    }
}
