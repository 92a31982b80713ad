//! Fluent bundle management and message formatting

use crate::Locale;
use fluent_bundle::{concurrent::FluentBundle, FluentArgs, FluentResource};
use std::fmt;
use tracing::{debug, error, warn};
use yamato_common::{YamatoError, YamatoResult};

/// Formats messages for one locale.
///
/// Built on the concurrent bundle flavour so a single translator can be
/// shared across gateway event tasks.
pub struct Translator {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("bundle", &"FluentBundle<FluentResource>")
            .finish()
    }
}

impl Translator {
    /// Loads the embedded resource for `locale`.
    pub fn new(locale: Locale) -> YamatoResult<Self> {
        let lang_id = locale.to_language_identifier()?;

        let resource =
            FluentResource::try_new(locale.resource().to_string()).map_err(|(_, errors)| {
                let messages: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();
                error!("Failed to parse Fluent resource: {:?}", messages);
                YamatoError::localization(
                    format!("Failed to parse resource: {}", messages.join("; ")),
                    locale.code(),
                )
            })?;

        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
        // Discord renders the isolation marks literally.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();
            error!("Failed to add resource to bundle: {:?}", messages);
            YamatoError::localization(
                format!("Conflicting messages: {}", messages.join("; ")),
                locale.code(),
            )
        })?;

        debug!("Loaded Fluent bundle for locale: {}", locale);
        Ok(Self { locale, bundle })
    }

    /// The locale this translator formats for.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Check if a message exists in the bundle
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Formats a message without arguments.
    pub fn message(&self, id: &str) -> YamatoResult<String> {
        self.format(id, None)
    }

    /// Format a message with the given arguments
    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> YamatoResult<String> {
        let missing = || {
            YamatoError::localization(format!("Message '{id}' not found"), self.locale.code())
        };

        let message = self.bundle.get_message(id).ok_or_else(missing)?;
        let pattern = message.value().ok_or_else(missing)?;

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();
            warn!("Formatting errors for message '{}': {:?}", id, messages);
            return Err(YamatoError::localization(
                format!("Failed to format '{id}': {}", messages.join("; ")),
                self.locale.code(),
            ));
        }

        Ok(formatted.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locales_load() {
        for locale in Locale::all() {
            let translator = Translator::new(locale).unwrap();
            assert_eq!(translator.locale(), locale);
            assert!(translator.has_message("usage"));
        }
    }

    #[test]
    fn test_no_isolation_marks() {
        let translator = Translator::new(Locale::English).unwrap();
        let title = translator.message("overview-title").unwrap();
        assert_eq!(title, "Overall Stats");
        assert!(!title.contains('\u{2068}'));
    }

    #[test]
    fn test_missing_message() {
        let translator = Translator::new(Locale::Japanese).unwrap();
        let err = translator.message("does-not-exist").unwrap_err();
        assert!(matches!(err, YamatoError::Localization { .. }));
        assert!(!translator.has_message("does-not-exist"));
    }
}
