use serde::{Deserialize, Serialize};

use jb_core::LabelKey;

use crate::i18n::Labelled;

/// Descriptor of one job posting form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobField {
    pub name: String,
    /// Display label; a label resource key until translated
    pub label: String,
    pub required: bool,
}

impl JobField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required,
        }
    }

    /// One field per label key, labelled with the untranslated key
    pub fn standard() -> Vec<JobField> {
        LabelKey::ALL
            .iter()
            .map(|key| JobField::new(key.as_str(), key.as_str(), is_required(*key)))
            .collect()
    }
}

fn is_required(key: LabelKey) -> bool {
    matches!(
        key,
        LabelKey::CompanyName | LabelKey::JobCategory | LabelKey::JobDescription | LabelKey::Country
    )
}

impl Labelled for JobField {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
