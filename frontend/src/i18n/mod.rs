use std::collections::HashMap;
use leptos::*;
use shared::RunStatus;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// I18n context that provides translation functions
#[derive(Clone)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: String) -> Self {
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .get()
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Human-readable label for a run status
    pub fn status_label(&self, status: RunStatus) -> String {
        self.t(&status_key(status))
    }

    /// Change the current language
    /// Translations are swapped first so anything tracking `language` reads the new table.
    pub fn set_language(&self, lang: &str) {
        let translations = load_translations(lang);
        self.translations.set(translations);
        self.language.set(lang.to_string());
    }

    /// Get the current language code
    pub fn current_language(&self) -> String {
        self.language.get()
    }
}

fn status_key(status: RunStatus) -> String {
    format!("status.{}", status.as_str())
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_else(|err| {
        log::error!("invalid translation table for {}: {}", lang, err);
        Translations::default()
    })
}

/// Provide I18n context to the application
pub fn provide_i18n(language: String) {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

/// Get the list of supported languages
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("de", "Deutsch"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_load_translations_en() {
        let translations = load_translations("en");
        assert!(!translations.is_empty());
        assert_eq!(translations.get("job_run.outputs").unwrap(), "Outputs");
    }

    #[test]
    fn test_load_translations_de() {
        let translations = load_translations("de");
        assert!(!translations.is_empty());
        assert_eq!(translations.get("job_run.outputs").unwrap(), "Ausgaben");
    }

    #[test]
    fn test_load_translations_fallback() {
        let translations = load_translations("invalid");
        assert!(!translations.is_empty());
        // Should fallback to English
        assert_eq!(translations.get("job_run.outputs").unwrap(), "Outputs");
    }

    #[test]
    fn test_every_status_has_a_label() {
        for lang in ["en", "de"] {
            let translations = load_translations(lang);
            for status in RunStatus::ALL {
                assert!(
                    translations.contains_key(&status_key(status)),
                    "{} is missing {}",
                    lang,
                    status_key(status)
                );
            }
        }
    }

    #[test]
    fn test_languages_share_keys() {
        let en = load_translations("en");
        let de = load_translations("de");
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut de_keys: Vec<_> = de.keys().collect();
        en_keys.sort();
        de_keys.sort();
        assert_eq!(en_keys, de_keys);
    }

    #[test]
    fn test_set_language_switches_translations() {
        let runtime = create_runtime();
        let ctx = I18nContext::new("en".to_string());
        assert_eq!(ctx.t("job_run.outputs"), "Outputs");

        ctx.set_language("de");
        assert_eq!(ctx.current_language(), "de");
        assert_eq!(ctx.t("job_run.outputs"), "Ausgaben");
        runtime.dispose();
    }

    #[test]
    fn test_language_observers_see_current_translations() {
        let runtime = create_runtime();
        let ctx = I18nContext::new("en".to_string());
        let seen = Rc::new(RefCell::new(Vec::new()));

        create_effect({
            let ctx = ctx.clone();
            let seen = Rc::clone(&seen);
            move |_| {
                let _ = ctx.current_language();
                seen.borrow_mut().push(untrack(|| ctx.t("job_run.outputs")));
            }
        });

        ctx.set_language("de");
        ctx.set_language("en");
        assert_eq!(*seen.borrow(), vec!["Outputs", "Ausgaben", "Outputs"]);
        runtime.dispose();
    }

    #[test]
    fn test_supported_languages() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 2);
        assert!(langs.iter().any(|(code, _)| *code == "en"));
        assert!(langs.iter().any(|(code, _)| *code == "de"));
    }
}
