use jb_core::{ErrorMessageKey, LabelKey, ResourceNamespace};

use super::ResourceLookup;

/// A value whose display label may be a label resource key
pub trait Labelled {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
}

/// Resolves resource keys for one locale
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    resources: &'a dyn ResourceLookup,
    locale: &'a str,
}

impl<'a> Translator<'a> {
    pub fn new(resources: &'a dyn ResourceLookup, locale: &'a str) -> Self {
        Self { resources, locale }
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Text of `key` in `namespace`; empty when the key is blank or has no entry
    pub fn translate(&self, key: &str, namespace: ResourceNamespace) -> String {
        if key.trim().is_empty() {
            return String::new();
        }
        self.resources
            .lookup(namespace, key, self.locale)
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn translate_error(&self, key: ErrorMessageKey) -> String {
        self.translate(key.as_str(), ResourceNamespace::Error)
    }

    pub fn translate_label(&self, key: LabelKey) -> String {
        self.translate(key.as_str(), ResourceNamespace::Label)
    }

    /// Replace each label that names a label resource with its translation.
    /// Blank labels and labels without a non-blank translation are kept.
    pub fn translate_labels<L: Labelled>(&self, fields: &mut [L]) {
        for field in fields.iter_mut() {
            let translated = self.translate(field.label().trim(), ResourceNamespace::Label);
            if !translated.trim().is_empty() {
                field.set_label(translated);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ResourceCatalog;

    const SAMPLE: &str = r#"
        [error.InvalidUserId]
        en = "The user identifier is not valid."
        es = "El identificador del usuario no es válido."

        [label.ZipCode]
        en = "Zip Code"
        es = "Código postal"

        [label.Blank]
        en = "   "
    "#;

    struct Field {
        label: String,
    }

    impl Labelled for Field {
        fn label(&self) -> &str {
            &self.label
        }

        fn set_label(&mut self, label: String) {
            self.label = label;
        }
    }

    fn field(label: &str) -> Field {
        Field {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_translate_error_uses_locale() {
        let catalog = ResourceCatalog::from_toml(SAMPLE).unwrap();
        let translator = Translator::new(&catalog, "es");
        assert_eq!(
            translator.translate_error(ErrorMessageKey::InvalidUserId),
            "El identificador del usuario no es válido."
        );
        assert_eq!(translator.translate_label(LabelKey::ZipCode), "Código postal");
    }

    #[test]
    fn test_blank_and_missing_keys_are_empty() {
        let catalog = ResourceCatalog::from_toml(SAMPLE).unwrap();
        let translator = Translator::new(&catalog, "en");
        assert_eq!(translator.translate("", ResourceNamespace::Error), "");
        assert_eq!(translator.translate("   ", ResourceNamespace::Error), "");
        assert_eq!(translator.translate("NoSuchKey", ResourceNamespace::Error), "");
        assert_eq!(translator.translate_error(ErrorMessageKey::UserNotFound), "");
    }

    #[test]
    fn test_translate_labels_replaces_only_known_labels() {
        let catalog = ResourceCatalog::from_toml(SAMPLE).unwrap();
        let translator = Translator::new(&catalog, "es");
        let mut fields = vec![field(" ZipCode "), field("Free text"), field(""), field("Blank")];

        translator.translate_labels(&mut fields);

        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Código postal", "Free text", "", "Blank"]);
    }
}
