//! `kbind.json` configuration.
//!
//! Every field is optional. [`KbindConfig::resolve`] applies defaults and
//! validates what was given.

use anyhow::{Context, Result, bail};
use kbind_common::{LIB_ROOT, NameEntity};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Package that receives synthesized DOM declarations unless configured otherwise.
pub const DEFAULT_LIB_ROOT_PACKAGE: &str = "<LIBROOT>.org.w3c.dom";

/// Parse a textual pass switch (`"on"`, `"false"`, `"1"`, ...).
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `passes.*` switches accept a JSON boolean or a string parsed by [`parse_switch`].
fn deserialize_switch<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Switch {
        Flag(bool),
        Text(String),
    }

    match Option::<Switch>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Switch::Flag(flag)) => Ok(Some(flag)),
        Some(Switch::Text(text)) => parse_switch(&text).map(Some).ok_or_else(|| {
            Error::custom(format!(
                "invalid passes.itemArrayLike value '{text}': expected a boolean or one of \
                 \"on\", \"off\", \"yes\", \"no\", \"1\", \"0\""
            ))
        }),
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KbindConfig {
    /// Package holding synthesized library declarations.
    #[serde(default)]
    pub lib_root_package: Option<String>,
    /// Directory relative file names are resolved against.
    #[serde(default)]
    pub working_directory: Option<String>,
    /// Names to reserve in addition to the Kotlin standard library.
    #[serde(default)]
    pub reserved_names: Option<Vec<String>>,
    #[serde(default)]
    pub passes: Option<PassOptions>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PassOptions {
    #[serde(default, deserialize_with = "deserialize_switch")]
    pub item_array_like: Option<bool>,
}

/// Configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub lib_root_package: NameEntity,
    pub working_directory: PathBuf,
    pub reserved_names: Vec<String>,
    pub item_array_like: bool,
}

impl KbindConfig {
    /// Apply defaults. `current_dir` is used when no working directory is configured.
    pub fn resolve(&self, current_dir: &Path) -> Result<ResolvedConfig> {
        let lib_root_package = self
            .lib_root_package
            .as_deref()
            .unwrap_or(DEFAULT_LIB_ROOT_PACKAGE);
        if lib_root_package
            .split('.')
            .any(|segment| segment.trim().is_empty())
        {
            bail!("invalid libRootPackage '{}': empty path segment", lib_root_package);
        }

        let working_directory = match self.working_directory.as_deref() {
            Some(dir) if dir.trim().is_empty() => bail!("workingDirectory must not be empty"),
            Some(dir) => current_dir.join(dir),
            None => current_dir.to_path_buf(),
        };

        let reserved_names = self.reserved_names.clone().unwrap_or_default();
        if let Some(name) = reserved_names
            .iter()
            .find(|name| name.split('.').any(str::is_empty))
        {
            bail!("invalid reservedNames entry '{}'", name);
        }

        Ok(ResolvedConfig {
            lib_root_package: NameEntity::from_dotted(lib_root_package),
            working_directory,
            reserved_names,
            item_array_like: self
                .passes
                .as_ref()
                .and_then(|passes| passes.item_array_like)
                .unwrap_or(true),
        })
    }
}

impl ResolvedConfig {
    /// Whether the library root sits under the `<LIBROOT>` pseudo package.
    pub fn is_under_lib_root(&self) -> bool {
        self.lib_root_package.left_most() == LIB_ROOT
    }
}

pub fn parse_config(source: &str) -> Result<KbindConfig> {
    let config = serde_json::from_str(source).context("failed to parse kbind config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<KbindConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read kbind config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse kbind config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boolean_true() {
        let json = r#"{"itemArrayLike": true}"#;
        let opts: PassOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.item_array_like, Some(true));
    }

    #[test]
    fn test_parse_string_false() {
        let json = r#"{"itemArrayLike": "false"}"#;
        let opts: PassOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.item_array_like, Some(false));
    }

    #[test]
    fn test_parse_invalid_string_names_the_field() {
        let json = r#"{"itemArrayLike": "maybe"}"#;
        let error = serde_json::from_str::<PassOptions>(json).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("passes.itemArrayLike"), "{message}");
        assert!(message.contains("'maybe'"), "{message}");
    }

    #[test]
    fn test_parse_switch_words() {
        assert_eq!(parse_switch(" ON "), Some(true));
        assert_eq!(parse_switch("no"), Some(false));
        assert_eq!(parse_switch("0"), Some(false));
        assert_eq!(parse_switch("maybe"), None);
    }

    #[test]
    fn test_defaults() {
        let resolved = KbindConfig::default().resolve(Path::new("/work")).unwrap();

        assert_eq!(resolved.lib_root_package.translate(), DEFAULT_LIB_ROOT_PACKAGE);
        assert!(resolved.is_under_lib_root());
        assert_eq!(resolved.working_directory, PathBuf::from("/work"));
        assert!(resolved.reserved_names.is_empty());
        assert!(resolved.item_array_like);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = parse_config(
            r#"{
                "libRootPackage": "dom",
                "workingDirectory": "types",
                "reservedNames": ["Event", "kotlin.js.Json"],
                "passes": { "itemArrayLike": "off" }
            }"#,
        )
        .unwrap();

        let resolved = config.resolve(Path::new("/work")).unwrap();

        assert_eq!(resolved.lib_root_package, NameEntity::identifier("dom"));
        assert!(!resolved.is_under_lib_root());
        assert_eq!(resolved.working_directory, PathBuf::from("/work/types"));
        assert_eq!(resolved.reserved_names, vec!["Event", "kotlin.js.Json"]);
        assert!(!resolved.item_array_like);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let empty_segment = parse_config(r#"{"libRootPackage": "a..b"}"#).unwrap();
        assert!(empty_segment.resolve(Path::new("/")).is_err());

        let blank_dir = parse_config(r#"{"workingDirectory": " "}"#).unwrap();
        assert!(blank_dir.resolve(Path::new("/")).is_err());

        let bad_name = parse_config(r#"{"reservedNames": ["a."]}"#).unwrap();
        assert!(bad_name.resolve(Path::new("/")).is_err());

        assert!(parse_config("{ not json").is_err());
    }
}
