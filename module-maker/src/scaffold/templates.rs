//! Stub loading and placeholder substitution
//!
//! Substitution is literal: every occurrence of a token is replaced by its
//! value in one left-to-right pass. Replacement text is never rescanned, and
//! tokens without an entry are left as they are.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::fs::{already_exists, ensure_parent_dir};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::stubs::Stub;

/// Every placeholder token the built-in stubs use
pub const PLACEHOLDER_TOKENS: [&str; 9] = [
    "DummyNamespace",
    "DummyRootNamespace",
    "DummyClass",
    "DummyFullModelClass",
    "DummyModelClass",
    "DummyModelVariable",
    "DummyRoutePrefix",
    "DummyTable",
    "DummyView",
];

/// Token to replacement mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: BTreeMap<String, String>,
}

impl SubstitutionMap {
    /// Empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, builder style
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Add or replace an entry
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Replacement for a token
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the map to `template`
    ///
    /// At each position the longest matching token wins, so
    /// `DummyModelClass` is never split into a shorter token plus trailing text.
    ///
    /// ```
    /// # use module_maker::scaffold::templates::SubstitutionMap;
    /// let map = SubstitutionMap::new()
    ///     .with("DummyClass", "OrderController")
    ///     .with("DummyModelClass", "Order");
    /// assert_eq!(map.render("DummyClass uses DummyModelClass"), "OrderController uses Order");
    /// ```
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        let mut tokens: Vec<(&str, &str)> = self
            .entries
            .iter()
            .filter(|(token, _)| !token.is_empty())
            .map(|(token, value)| (token.as_str(), value.as_str()))
            .collect();
        if tokens.is_empty() {
            return template.to_string();
        }
        tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut output = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(ch) = rest.chars().next() {
            if let Some((token, value)) = tokens.iter().find(|(token, _)| rest.starts_with(token)) {
                output.push_str(value);
                rest = &rest[token.len()..];
            } else {
                output.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        output
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, value) in iter {
            map.insert(token, value);
        }
        map
    }
}

/// Known placeholder tokens still present in rendered output
#[must_use]
pub fn leftover_tokens(rendered: &str) -> Vec<&'static str> {
    PLACEHOLDER_TOKENS
        .into_iter()
        .filter(|token| rendered.contains(token))
        .collect()
}

/// Where a stub was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// User's copy in the stubs directory
    Customized(PathBuf),
    /// Copy compiled into the binary
    Builtin,
}

/// Resolves stubs to their content
///
/// A file in the stubs directory always takes precedence over the built-in
/// copy. With built-in stubs disabled a missing file is an error.
#[derive(Debug, Clone)]
pub struct StubStore {
    stubs_dir: PathBuf,
    builtin: bool,
}

impl StubStore {
    /// Store reading from the configured stubs directory
    #[must_use]
    pub fn new(config: &ScaffoldConfig) -> Self {
        Self {
            stubs_dir: config.stubs_path(),
            builtin: config.builtin_stubs,
        }
    }

    /// Directory holding customised stubs
    #[must_use]
    pub const fn stubs_dir(&self) -> &PathBuf {
        &self.stubs_dir
    }

    /// Path a customised copy of `stub` would live at
    #[must_use]
    pub fn customized_path(&self, stub: Stub) -> PathBuf {
        self.stubs_dir.join(stub.file_name())
    }

    /// Returns true if the user has a copy of `stub`
    #[must_use]
    pub fn is_customized(&self, stub: Stub) -> bool {
        self.customized_path(stub).is_file()
    }

    /// Where `stub` would be loaded from, if anywhere
    #[must_use]
    pub fn source(&self, stub: Stub) -> Option<StubSource> {
        if self.is_customized(stub) {
            Some(StubSource::Customized(self.customized_path(stub)))
        } else if self.builtin {
            Some(StubSource::Builtin)
        } else {
            None
        }
    }

    /// Stub content
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] when no copy is available,
    /// or [`ScaffoldError::TemplateRead`] if the customised copy is unreadable.
    pub fn load(&self, stub: Stub) -> Result<String> {
        match self.source(stub) {
            Some(StubSource::Customized(path)) => {
                debug!(stub = %stub, path = %path.display(), "loading customised stub");
                fs::read_to_string(&path).map_err(|source| ScaffoldError::TemplateRead { path, source })
            }
            Some(StubSource::Builtin) => Ok(stub.builtin().to_string()),
            None => Err(ScaffoldError::TemplateNotFound {
                stub,
                searched: self.customized_path(stub),
            }),
        }
    }

    /// Load `stub` and apply `map`
    ///
    /// # Errors
    ///
    /// Propagates [`StubStore::load`] errors.
    pub fn render(&self, stub: Stub, map: &SubstitutionMap) -> Result<String> {
        let template = self.load(stub)?;
        Ok(map.render(&template))
    }

    /// Copy a built-in stub into the stubs directory
    ///
    /// An existing copy is kept unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn publish(&self, stub: Stub, force: bool) -> Result<Published> {
        let path = self.customized_path(stub);
        if already_exists(&path) && !force {
            return Ok(Published::Kept(path));
        }

        ensure_parent_dir(&path)?;
        fs::write(&path, stub.builtin()).map_err(|source| ScaffoldError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        Ok(Published::Written(path))
    }
}

/// Result of publishing one stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    /// Built-in content written to this path
    Written(PathBuf),
    /// A customised copy was already there and left alone
    Kept(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn controller_map() -> SubstitutionMap {
        [
            ("DummyNamespace", "App\\Modules\\Shop\\Order\\Controllers"),
            ("DummyRootNamespace", "App\\"),
            ("DummyClass", "OrderController"),
            ("DummyFullModelClass", "App\\Modules\\Shop\\Order\\Models\\Order"),
            ("DummyModelClass", "Order"),
            ("DummyModelVariable", "order"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_map_entries() {
        let mut map = SubstitutionMap::new();
        assert!(map.is_empty());

        map.insert("DummyClass", "Post");
        map.insert("DummyClass", "Comment");
        map.insert("DummyTable", "comments");

        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.get("DummyClass"), Some("Comment"));
        assert_eq!(map.get("DummyView"), None);
        assert_eq!(controller_map().len(), 6);
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        let map = SubstitutionMap::new().with("DummyClass", "Post");
        assert_eq!(map.render("DummyClass DummyClass"), "Post Post");
    }

    #[test]
    fn test_render_is_single_pass() {
        let map = SubstitutionMap::new()
            .with("DummyClass", "DummyTable")
            .with("DummyTable", "posts");
        assert_eq!(map.render("DummyClass DummyTable"), "DummyTable posts");
    }

    #[test]
    fn test_render_longest_token_wins() {
        let map = SubstitutionMap::new()
            .with("Dummy", "X")
            .with("DummyModelClass", "Order");
        assert_eq!(map.render("DummyModelClass Dummy"), "Order X");
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let map = SubstitutionMap::new().with("DummyClass", "Post");
        assert_eq!(map.render("DummyClass DummyTable"), "Post DummyTable");
    }

    #[test]
    fn test_render_empty_map_and_token() {
        let template = "naïve DummyClass";
        assert_eq!(SubstitutionMap::new().render(template), template);
        assert_eq!(SubstitutionMap::new().with("", "x").render(template), template);
    }

    #[test]
    fn test_render_preserves_multibyte_text() {
        let map = SubstitutionMap::new().with("DummyClass", "Café");
        assert_eq!(map.render("→ DummyClass ←"), "→ Café ←");
    }

    #[test]
    fn test_controller_stub_has_no_leftovers() {
        let rendered = controller_map().render(Stub::Controller.builtin());

        assert!(leftover_tokens(&rendered).is_empty());
        assert!(rendered.contains("namespace App\\Modules\\Shop\\Order\\Controllers;"));
        assert!(rendered.contains("use App\\Http\\Controllers\\Controller;"));
        assert!(rendered.contains("class OrderController extends Controller"));
        assert!(rendered.contains("public function show(Order $order)"));
    }

    #[test]
    fn test_leftover_tokens_reports_missing_entries() {
        let map = SubstitutionMap::new().with("DummyClass", "OrderController");
        let leftovers = leftover_tokens(&map.render(Stub::Controller.builtin()));

        assert!(leftovers.contains(&"DummyNamespace"));
        assert!(leftovers.contains(&"DummyModelVariable"));
        assert!(!leftovers.contains(&"DummyClass"));
    }

    #[test]
    fn test_store_prefers_customized() {
        let temp_dir = TempDir::new().unwrap();
        let store = StubStore::new(&ScaffoldConfig::for_root(temp_dir.path()));
        assert_eq!(store.source(Stub::View), Some(StubSource::Builtin));

        let path = store.customized_path(Stub::View);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "custom DummyView").unwrap();

        assert!(store.is_customized(Stub::View));
        assert_eq!(store.load(Stub::View).unwrap(), "custom DummyView");
    }

    #[test]
    fn test_store_unreadable_customized_stub() {
        let temp_dir = TempDir::new().unwrap();
        let store = StubStore::new(&ScaffoldConfig::for_root(temp_dir.path()));

        let path = store.customized_path(Stub::View);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        match store.load(Stub::View) {
            Err(ScaffoldError::TemplateRead { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected TemplateRead, got {other:?}"),
        }
    }

    #[test]
    fn test_store_without_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScaffoldConfig {
            builtin_stubs: false,
            ..ScaffoldConfig::for_root(temp_dir.path())
        };
        let store = StubStore::new(&config);

        let result = store.load(Stub::Model);
        assert!(matches!(
            result,
            Err(ScaffoldError::TemplateNotFound { stub: Stub::Model, .. })
        ));
    }

    #[test]
    fn test_publish_keeps_existing_unless_forced() {
        let temp_dir = TempDir::new().unwrap();
        let store = StubStore::new(&ScaffoldConfig::for_root(temp_dir.path()));

        assert!(matches!(store.publish(Stub::Model, false).unwrap(), Published::Written(_)));
        fs::write(store.customized_path(Stub::Model), "edited").unwrap();

        assert!(matches!(
            store.publish(Stub::Model, false).unwrap(),
            Published::Kept(_)
        ));
        assert_eq!(store.load(Stub::Model).unwrap(), "edited");

        assert!(matches!(store.publish(Stub::Model, true).unwrap(), Published::Written(_)));
        assert_eq!(store.load(Stub::Model).unwrap(), Stub::Model.builtin());
    }
}
