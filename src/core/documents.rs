use crate::domain::model::ConfigTree;
use crate::utils::error::{FileError, Result};
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use serde_yaml::Value as YamlValue;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

const JSON_INDENT: &[u8] = b"    ";

/// Reads a YAML document into a [`ConfigTree`].
///
/// Aliases and `<<` merge keys are resolved. A document with no content (empty,
/// comments only, or an explicit `null`) is rejected with [`FileError::EmptyDocument`],
/// a root that is not a mapping with [`FileError::NotAMapping`]. Parse errors are
/// returned as-is.
pub fn read_structured_config<P: AsRef<Path>>(path: P) -> Result<ConfigTree> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let tree = parse_yaml(path, &content)?;
    tracing::info!("YAML file '{}' loaded successfully", path.display());
    Ok(tree)
}

/// Like [`read_structured_config`], but expands `${VAR}` placeholders from the
/// environment before parsing.
pub fn read_structured_config_with_env<P: AsRef<Path>>(path: P) -> Result<ConfigTree> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let tree = parse_yaml(path, &substitute_env_vars(&content))?;
    tracing::info!(
        "YAML file '{}' loaded successfully (environment expanded)",
        path.display()
    );
    Ok(tree)
}

/// Replaces `${VAR}` with the value of `VAR`. Unset variables are left verbatim.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::debug!("environment variable '{}' is not set", var_name);
                caps[0].to_string()
            })
        })
        .into_owned()
}

fn parse_yaml(path: &Path, content: &str) -> Result<ConfigTree> {
    let empty = || FileError::EmptyDocument {
        path: path.display().to_string(),
    };

    if is_blank_yaml(content) {
        return Err(empty());
    }

    let mut yaml: YamlValue = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Err(empty());
    }
    yaml.apply_merge()?;

    if !yaml.is_mapping() {
        return Err(FileError::NotAMapping {
            path: path.display().to_string(),
            found: yaml_kind(&yaml).to_string(),
        });
    }
    // serde_json has no NaN or infinity and would turn them into null.
    if let Some(key) = find_non_finite(&yaml, "") {
        return Err(FileError::NonFiniteNumber { key });
    }

    Ok(ConfigTree::new(serde_json::to_value(yaml)?))
}

fn find_non_finite(value: &YamlValue, key: &str) -> Option<String> {
    match value {
        YamlValue::Number(n) if n.is_nan() || n.is_infinite() => Some(key.to_string()),
        YamlValue::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &join_key(key, &i.to_string()))),
        YamlValue::Mapping(map) => map.iter().find_map(|(k, v)| {
            let segment = k.as_str().map_or_else(|| format!("{:?}", k), str::to_string);
            find_non_finite(v, &join_key(key, &segment))
        }),
        YamlValue::Tagged(tagged) => find_non_finite(&tagged.value, key),
        _ => None,
    }
}

fn join_key(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

// Whitespace, comments and document markers only.
fn is_blank_yaml(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Reads a TOML document into a [`ConfigTree`]. An empty TOML file is an empty table.
pub fn read_toml_config<P: AsRef<Path>>(path: P) -> Result<ConfigTree> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)?;
    tracing::info!("TOML file '{}' loaded successfully", path.display());
    Ok(ConfigTree::new(value))
}

/// Writes `data` as pretty-printed JSON with a 4-space indent.
pub fn save_structured_data<P, T>(path: P, data: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    data.serialize(&mut serializer)?;
    writer.flush()?;

    tracing::info!("JSON file saved at: {}", path.display());
    Ok(())
}

/// Reads a JSON document whose root is an object.
pub fn load_structured_data<P: AsRef<Path>>(path: P) -> Result<ConfigTree> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    if !value.is_object() {
        return Err(FileError::NotAMapping {
            path: path.display().to_string(),
            found: json_kind(&value).to_string(),
        });
    }

    tracing::info!("JSON file loaded successfully from: {}", path.display());
    Ok(ConfigTree::new(value))
}
