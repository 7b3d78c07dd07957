//! A base file paired with a target file.
//!
//! Read flows (diff, key listing, raw view, export) recompute everything from
//! the stored documents on each call. The write flow, [`TranslationProject::apply_edits`],
//! gates every value on placeholder validation and only touches the target
//! once all values passed.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use lingo_diff::{compare, DiffReport, Difference};
use lingo_flat::{
    flatten, skeleton_object, to_pretty_json, unflatten_with, ConflictPolicy, FlatError, FlatMap,
    JsonObject,
};
use lingo_placeholder::{audit_placeholders, validate_placeholders, PlaceholderViolation};

use crate::config::{LingoConfig, ViewMode};
use crate::error::{SdkError, SdkResult};
use crate::file::{FileType, TranslationFile};

/// The result of a successful [`TranslationProject::apply_edits`].
#[derive(Clone, Debug, PartialEq)]
pub struct EditOutcome {
    /// Keys written, sorted.
    pub applied: Vec<String>,
    /// Completion after the edits.
    pub completion: f64,
}

/// A translation project: one base file and one target file.
#[derive(Clone, Debug)]
pub struct TranslationProject {
    base: TranslationFile,
    target: TranslationFile,
    base_doc: JsonObject,
    target_doc: JsonObject,
    conflict_policy: ConflictPolicy,
}

impl TranslationProject {
    /// Pair a base file with a target file.
    ///
    /// Both must carry the matching [`FileType`] and hold a non-empty JSON
    /// object.
    pub fn new(base: TranslationFile, target: TranslationFile) -> SdkResult<Self> {
        let base_doc = load_role(&base, FileType::Base)?;
        let target_doc = load_role(&target, FileType::Target)?;
        debug!(
            base_lang = %base.language_code,
            target_lang = %target.language_code,
            "opened translation project"
        );
        Ok(Self {
            base,
            target,
            base_doc,
            target_doc,
            conflict_policy: ConflictPolicy::default(),
        })
    }

    /// Start a translation of `base` into `target_lang`.
    ///
    /// The target is a blank copy of the base: same keys and array lengths,
    /// every leaf an empty string.
    pub fn from_base(base: TranslationFile, target_lang: impl Into<String>) -> SdkResult<Self> {
        let base_doc = load_role(&base, FileType::Base)?;
        let content = to_pretty_json(&skeleton_object(&base_doc))?;
        let target = TranslationFile::target(target_lang, content);
        debug!(base_lang = %base.language_code, "built blank target from base");
        Self::new(base, target)
    }

    /// Build a project from a project's stored files.
    ///
    /// The first file of each role is used.
    pub fn from_files(files: impl IntoIterator<Item = TranslationFile>) -> SdkResult<Self> {
        let mut base = None;
        let mut target = None;
        for file in files {
            let slot = match file.file_type {
                FileType::Base => &mut base,
                FileType::Target => &mut target,
            };
            if slot.is_none() {
                *slot = Some(file);
            }
        }
        let base = base.ok_or(SdkError::MissingFile(FileType::Base))?;
        let target = target.ok_or(SdkError::MissingFile(FileType::Target))?;
        Self::new(base, target)
    }

    /// Set how edits are reassembled into nested JSON.
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Apply the project-level settings of `config`.
    pub fn with_config(self, config: &LingoConfig) -> Self {
        self.with_conflict_policy(config.conflict_policy)
    }

    pub fn base(&self) -> &TranslationFile {
        &self.base
    }

    pub fn target(&self) -> &TranslationFile {
        &self.target
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }

    // ---- Read flows ----

    pub fn flat_base(&self) -> FlatMap {
        flatten(&self.base_doc, "")
    }

    pub fn flat_target(&self) -> FlatMap {
        flatten(&self.target_doc, "")
    }

    pub fn diff(&self) -> Difference {
        compare(&self.flat_base(), &self.flat_target())
    }

    pub fn report(&self) -> DiffReport {
        DiffReport::compute(&self.flat_base(), &self.flat_target())
    }

    /// Translated keys whose value dropped a base placeholder.
    pub fn placeholder_violations(&self) -> Vec<PlaceholderViolation> {
        audit_placeholders(&self.flat_base(), &self.flat_target())
    }

    /// Keys an editor should list, sorted.
    pub fn editor_keys(&self, view: ViewMode) -> Vec<String> {
        match view {
            ViewMode::Full => self.flat_base().into_keys().collect(),
            ViewMode::Missing => self.diff().missing_keys,
        }
    }

    /// The target rebuilt from its flat view, pretty-printed.
    ///
    /// This is what the target would be stored as after an edit, so primitive
    /// leaves already show as strings.
    pub fn raw_target_json(&self) -> SdkResult<String> {
        let nested = unflatten_with(&self.flat_target(), self.conflict_policy)?;
        Ok(to_pretty_json(&nested)?)
    }

    /// Content of the file with language `lang`, or of the target file when
    /// `lang` is `None`.
    pub fn export(&self, lang: Option<&str>) -> SdkResult<&str> {
        let file = match lang {
            None => &self.target,
            Some(code) => [&self.base, &self.target]
                .into_iter()
                .find(|f| f.language_code == code)
                .ok_or_else(|| SdkError::LanguageNotFound(code.to_string()))?,
        };
        Ok(&file.content)
    }

    // ---- Write flow ----

    /// Write `edits` (dotted key to new value) into the target.
    ///
    /// Each value must keep every placeholder of the base value for the same
    /// key. The first rejected value aborts the whole batch and the target is
    /// left untouched. On success the target is reassembled under the
    /// project's [`ConflictPolicy`] and stored pretty-printed.
    pub fn apply_edits(&mut self, edits: &BTreeMap<String, String>) -> SdkResult<EditOutcome> {
        let base_flat = self.flat_base();

        for (key, value) in edits {
            let base_val = base_flat.get(key).map(String::as_str).unwrap_or_default();
            if let Err(source) = validate_placeholders(base_val, value) {
                warn!(key = %key, token = source.token(), "rejected translation edit");
                return Err(SdkError::FieldRejected {
                    key: key.clone(),
                    base: base_val.to_string(),
                    value: value.clone(),
                    source,
                });
            }
        }

        let mut target_flat = self.flat_target();
        for (key, value) in edits {
            target_flat.insert(key.clone(), value.clone());
        }

        let nested = unflatten_with(&target_flat, self.conflict_policy)?;
        let content = to_pretty_json(&nested)?;

        self.target.content = content;
        self.target_doc = nested;

        let report = DiffReport::compute(&base_flat, &target_flat);
        info!(
            edits = edits.len(),
            completion = report.completion,
            "applied translation edits"
        );
        Ok(EditOutcome {
            applied: edits.keys().cloned().collect(),
            completion: report.completion,
        })
    }

    /// Apply a single edit. See [`TranslationProject::apply_edits`].
    pub fn set_translation(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> SdkResult<EditOutcome> {
        let mut edits = BTreeMap::new();
        edits.insert(key.into(), value.into());
        self.apply_edits(&edits)
    }
}

fn load_role(file: &TranslationFile, expected: FileType) -> SdkResult<JsonObject> {
    if file.file_type != expected {
        return Err(SdkError::WrongFileType {
            expected,
            actual: file.file_type,
        });
    }
    let invalid = |source: FlatError| SdkError::InvalidFile {
        role: expected,
        source,
    };
    let doc = file.parse().map_err(invalid)?;
    if doc.is_empty() {
        return Err(invalid(FlatError::EmptyDocument));
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_placeholder::PlaceholderError;
    use serde_json::{json, Value};

    const BASE: &str = r#"{
        "greeting": "Hello {name}",
        "menu": {"file": "File", "edit": "Edit", "items": ["new", "open"]},
        "count": 3
    }"#;

    const TARGET: &str = r#"{
        "greeting": "Hola {name}",
        "menu": {"file": "Archivo", "edit": ""},
        "legacy": "old"
    }"#;

    fn project() -> TranslationProject {
        TranslationProject::new(
            TranslationFile::base("en", BASE),
            TranslationFile::target("es", TARGET),
        )
        .unwrap()
    }

    fn edits(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flat_views() {
        let p = project();
        let base = p.flat_base();
        assert_eq!(base.len(), 5);
        assert_eq!(base["menu.items"], "[\"new\",\"open\"]");
        assert_eq!(base["count"], "3");
        assert_eq!(p.flat_target()["menu.file"], "Archivo");
    }

    #[test]
    fn diff_and_report() {
        let p = project();
        let diff = p.diff();
        assert_eq!(diff.missing_keys, vec!["count", "menu.edit", "menu.items"]);
        assert_eq!(diff.extra_keys, vec!["legacy"]);
        assert!(diff.different_values.contains_key("greeting"));

        let report = p.report();
        assert_eq!(report.difference, diff);
        assert_eq!(report.completion, 40.0);
    }

    #[test]
    fn editor_keys_by_view() {
        let p = project();
        assert_eq!(
            p.editor_keys(ViewMode::Full),
            vec!["count", "greeting", "menu.edit", "menu.file", "menu.items"]
        );
        assert_eq!(
            p.editor_keys(ViewMode::Missing),
            vec!["count", "menu.edit", "menu.items"]
        );
    }

    #[test]
    fn apply_edits_updates_target() {
        let mut p = project();
        let outcome = p
            .apply_edits(&edits(&[
                ("menu.edit", "Editar"),
                ("menu.items", "[\"nuevo\",\"abrir\"]"),
            ]))
            .unwrap();

        assert_eq!(outcome.applied, vec!["menu.edit", "menu.items"]);
        assert_eq!(outcome.completion, 80.0);

        let stored: Value = serde_json::from_str(&p.target().content).unwrap();
        assert_eq!(
            stored,
            json!({
                "greeting": "Hola {name}",
                "legacy": "old",
                "menu": {"edit": "Editar", "file": "Archivo", "items": ["nuevo", "abrir"]},
            })
        );
        assert!(p.target().content.starts_with("{\n  \"greeting\""));
        assert_eq!(p.diff().missing_keys, vec!["count"]);
    }

    #[test]
    fn rejected_edit_leaves_target_untouched() {
        let mut p = project();
        let before = p.target().content.clone();

        let err = p
            .apply_edits(&edits(&[("menu.edit", "Editar"), ("greeting", "Hola")]))
            .unwrap_err();

        match err {
            SdkError::FieldRejected {
                key,
                base,
                value,
                source,
            } => {
                assert_eq!(key, "greeting");
                assert_eq!(base, "Hello {name}");
                assert_eq!(value, "Hola");
                assert_eq!(source, PlaceholderError::MissingPlaceholder("{name}".into()));
            }
            other => panic!("expected FieldRejected, got {other:?}"),
        }
        assert_eq!(p.target().content, before);
        assert_eq!(p.flat_target()["menu.edit"], "");
    }

    #[test]
    fn extra_placeholders_in_edit_are_accepted() {
        let mut p = project();
        p.set_translation("greeting", "Hola {name} {extra}").unwrap();
        assert_eq!(p.flat_target()["greeting"], "Hola {name} {extra}");
    }

    #[test]
    fn unknown_key_edit_is_accepted() {
        let mut p = project();
        p.set_translation("brand.new", "{anything}").unwrap();
        assert_eq!(p.flat_target()["brand.new"], "{anything}");
        assert!(p.diff().extra_keys.contains(&"brand.new".to_string()));
    }

    #[test]
    fn reject_policy_blocks_conflicting_edit() {
        let mut p = project().with_conflict_policy(ConflictPolicy::Reject);
        let before = p.target().content.clone();
        let err = p.set_translation("legacy.child", "x").unwrap_err();
        assert!(matches!(
            err,
            SdkError::Flat(FlatError::ConflictingPath { .. })
        ));
        assert_eq!(p.target().content, before);
    }

    #[test]
    fn overwrite_policy_replaces_conflicting_leaf() {
        let mut p = project();
        p.set_translation("legacy.child", "x").unwrap();
        let stored: Value = serde_json::from_str(&p.target().content).unwrap();
        assert_eq!(stored["legacy"], json!({"child": "x"}));
    }

    #[test]
    fn raw_target_json_is_rebuilt_from_flat_view() {
        let p = TranslationProject::new(
            TranslationFile::base("en", r#"{"n": 1}"#),
            TranslationFile::target("es", r#"{"n": 1, "list": [1, 2]}"#),
        )
        .unwrap();
        let raw: Value = serde_json::from_str(&p.raw_target_json().unwrap()).unwrap();
        assert_eq!(raw, json!({"n": "1", "list": [1, 2]}));
    }

    #[test]
    fn export_by_language() {
        let p = project();
        assert_eq!(p.export(None).unwrap(), TARGET);
        assert_eq!(p.export(Some("es")).unwrap(), TARGET);
        assert_eq!(p.export(Some("en")).unwrap(), BASE);
        assert!(matches!(
            p.export(Some("fr")),
            Err(SdkError::LanguageNotFound(lang)) if lang == "fr"
        ));
    }

    #[test]
    fn from_files_picks_roles() {
        let p = TranslationProject::from_files(vec![
            TranslationFile::target("es", TARGET),
            TranslationFile::base("en", BASE),
        ])
        .unwrap();
        assert_eq!(p.base().language_code, "en");
        assert_eq!(p.target().language_code, "es");
    }

    #[test]
    fn from_files_requires_both_roles() {
        let err = TranslationProject::from_files(vec![TranslationFile::base("en", BASE)])
            .unwrap_err();
        assert!(matches!(err, SdkError::MissingFile(FileType::Target)));

        let err = TranslationProject::from_files(Vec::new()).unwrap_err();
        assert!(matches!(err, SdkError::MissingFile(FileType::Base)));
    }

    #[test]
    fn new_checks_roles_and_content() {
        let err = TranslationProject::new(
            TranslationFile::target("en", BASE),
            TranslationFile::target("es", TARGET),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SdkError::WrongFileType {
                expected: FileType::Base,
                actual: FileType::Target
            }
        ));

        let err = TranslationProject::new(
            TranslationFile::base("en", BASE),
            TranslationFile::target("es", "{}"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidFile {
                role: FileType::Target,
                source: FlatError::EmptyDocument
            }
        ));
    }

    #[test]
    fn new_reports_malformed_target() {
        let err = TranslationProject::new(
            TranslationFile::base("en", BASE),
            TranslationFile::target("es", "{\"a\":"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidFile {
                role: FileType::Target,
                source: FlatError::InvalidJson(_)
            }
        ));
    }

    #[test]
    fn from_base_starts_untranslated() {
        let p = TranslationProject::from_base(
            TranslationFile::base("en", r#"{"greeting": "Hello {name}", "menu": {"file": "File", "count": 2}}"#),
            "de",
        )
        .unwrap();

        assert_eq!(p.target().language_code, "de");
        let stored: Value = serde_json::from_str(&p.target().content).unwrap();
        assert_eq!(stored, json!({"greeting": "", "menu": {"file": "", "count": ""}}));

        let report = p.report();
        assert_eq!(report.completion, 0.0);
        assert_eq!(report.difference.missing_keys, p.editor_keys(ViewMode::Full));
        assert!(report.difference.extra_keys.is_empty());
    }

    #[test]
    fn from_base_blanks_array_elements() {
        let p = TranslationProject::from_base(TranslationFile::base("en", BASE), "fr").unwrap();
        assert_eq!(p.flat_target()["menu.items"], "[\"\",\"\"]");
        assert!(p.target().content.starts_with("{\n  \"count\": \"\""));
    }

    #[test]
    fn from_base_rejects_empty_base() {
        let err = TranslationProject::from_base(TranslationFile::base("en", "{}"), "fr").unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidFile {
                role: FileType::Base,
                source: FlatError::EmptyDocument
            }
        ));
    }

    #[test]
    fn config_sets_conflict_policy() {
        let config = LingoConfig {
            conflict_policy: ConflictPolicy::Reject,
            ..Default::default()
        };
        assert_eq!(project().with_config(&config).conflict_policy(), ConflictPolicy::Reject);
    }

    #[test]
    fn placeholder_violations_in_stored_target() {
        let p = TranslationProject::new(
            TranslationFile::base("en", r#"{"a": "{x} items", "b": "{y}"}"#),
            TranslationFile::target("es", r#"{"a": "articulos", "b": "{y}"}"#),
        )
        .unwrap();
        let violations = p.placeholder_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].key, "a");
        assert_eq!(violations[0].token, "{x}");
    }
}
