// Docmosis Rust Library for the Docmosis Cloud Services
// Copyright 2025 Docmosis.com or its affiliates.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Named request parameters with required-field enforcement

use crate::cloud::error::ValidationErr;
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Value held by a single parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Number(i64),
    /// Local file sent as a multipart part.
    File(PathBuf),
    /// In-memory content sent as a multipart part under the given file name.
    Bytes { file_name: String, content: Bytes },
}

impl ParamValue {
    /// A value counts as set when it carries something to send.
    pub fn is_set(&self) -> bool {
        match self {
            ParamValue::Text(s) => !s.is_empty(),
            ParamValue::List(v) => v.iter().any(|s| !s.is_empty()),
            ParamValue::File(p) => !p.as_os_str().is_empty(),
            ParamValue::Bytes { file_name, .. } => !file_name.is_empty(),
            ParamValue::Flag(_) | ParamValue::Number(_) => true,
        }
    }

    /// Whether the value must travel as a multipart part.
    pub fn is_part(&self) -> bool {
        matches!(self, ParamValue::File(_) | ParamValue::Bytes { .. })
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_owned())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<PathBuf> for ParamValue {
    fn from(v: PathBuf) -> Self {
        ParamValue::File(v)
    }
}

impl From<&Path> for ParamValue {
    fn from(v: &Path) -> Self {
        ParamValue::File(v.to_path_buf())
    }
}

/// Ordered set of named parameters for one service request.
///
/// The set of required names is fixed when the owning request type is
/// constructed. Names are kept in lexical order so that the encoded request
/// is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    required: &'static [&'static str],
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new(required: &'static [&'static str]) -> Self {
        Self {
            required,
            values: BTreeMap::new(),
        }
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(&name)
    }

    /// Returns the string value of `name`.
    ///
    /// A list yields its first element, flags and numbers their decimal text.
    /// An absent optional parameter yields an empty string; an absent required
    /// parameter is an error.
    pub fn get(&self, name: &str) -> Result<Cow<'_, str>, ValidationErr> {
        match self.values.get(name) {
            Some(ParamValue::Text(s)) => Ok(Cow::Borrowed(s)),
            Some(ParamValue::List(v)) => Ok(v
                .first()
                .map_or(Cow::Borrowed(""), |s| Cow::Borrowed(s.as_str()))),
            Some(ParamValue::Flag(b)) => Ok(Cow::Owned(b.to_string())),
            Some(ParamValue::Number(n)) => Ok(Cow::Owned(n.to_string())),
            Some(ParamValue::File(p)) => Ok(p.to_string_lossy()),
            Some(ParamValue::Bytes { file_name, .. }) => Ok(Cow::Borrowed(file_name)),
            None if self.is_required(name) => {
                Err(ValidationErr::MissingParameter(name.to_owned()))
            }
            None => Ok(Cow::Borrowed("")),
        }
    }

    /// Returns every string held by `name`, in insertion order.
    pub fn get_list(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(ParamValue::List(v)) => v,
            Some(ParamValue::Text(s)) => std::slice::from_ref(s),
            _ => &[],
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ParamValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ParamValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn file(&self, name: &str) -> Option<&Path> {
        match self.values.get(name) {
            Some(ParamValue::File(p)) => Some(p),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Replaces any existing value of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Appends `value` to the list held by `name`, creating the list if absent.
    ///
    /// A single string already held by `name` becomes the first list element.
    /// Any other kind of value is replaced.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let list = match self.values.remove(&name) {
            Some(ParamValue::List(mut v)) => {
                v.push(value);
                v
            }
            Some(ParamValue::Text(s)) => vec![s, value],
            _ => vec![value],
        };
        self.values.insert(name, ParamValue::List(list));
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(ParamValue::is_set)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Required names that currently hold no usable value, in declaration order.
    pub fn missing(&self) -> Vec<String> {
        self.required
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationErr::MissingParameters(missing))
        }
    }

    pub fn has_parts(&self) -> bool {
        self.values.values().any(ParamValue::is_part)
    }

    /// Flattens every non-part parameter into name/value pairs, one pair per
    /// list element.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.values.len());
        for (name, value) in &self.values {
            match value {
                ParamValue::Text(s) => fields.push((name.clone(), s.clone())),
                ParamValue::List(v) => {
                    fields.extend(v.iter().map(|s| (name.clone(), s.clone())));
                }
                ParamValue::Flag(b) => fields.push((name.clone(), b.to_string())),
                ParamValue::Number(n) => fields.push((name.clone(), n.to_string())),
                ParamValue::File(_) | ParamValue::Bytes { .. } => {}
            }
        }
        fields
    }

    /// Names of the parameters present, for logging.
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.values {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match value {
                ParamValue::Text(s) => write!(f, "{name}={s}")?,
                ParamValue::List(v) => write!(f, "{name}=[{}]", v.join(", "))?,
                ParamValue::Flag(b) => write!(f, "{name}={b}")?,
                ParamValue::Number(n) => write!(f, "{name}={n}")?,
                ParamValue::File(p) => write!(f, "{name}=<file {}>", p.display())?,
                ParamValue::Bytes { file_name, content } => {
                    write!(f, "{name}=<{} bytes as {file_name}>", content.len())?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: &[&str] = &["templateName", "outputName"];

    #[test]
    fn test_add_is_cumulative_and_order_preserving() {
        let mut params = ParameterSet::new(&[]);
        params.add("imageName", "a");
        params.add("imageName", "b");
        params.add("imageName", "a");
        assert_eq!(params.get_list("imageName"), ["a", "b", "a"]);
    }

    #[test]
    fn test_set_replaces_existing_list() {
        let mut params = ParameterSet::new(&[]);
        params.add("imageName", "a");
        params.add("imageName", "b");
        params.set("imageName", vec!["c".to_string()]);
        assert_eq!(params.get_list("imageName"), ["c"]);
    }

    #[test]
    fn test_add_after_set_text_promotes_to_list() {
        let mut params = ParameterSet::new(&[]);
        params.set("fileName", "first.pdf");
        params.add("fileName", "second.pdf");
        assert_eq!(params.get_list("fileName"), ["first.pdf", "second.pdf"]);
        assert_eq!(params.get("fileName").unwrap(), "first.pdf");
    }

    #[test]
    fn test_get_missing_required_fails() {
        let params = ParameterSet::new(REQUIRED);
        let err = params.get("templateName").unwrap_err();
        assert!(matches!(err, ValidationErr::MissingParameter(ref n) if n == "templateName"));
    }

    #[test]
    fn test_get_missing_optional_is_empty() {
        let params = ParameterSet::new(REQUIRED);
        assert_eq!(params.get("outputFormat").unwrap(), "");
        assert!(params.get_list("outputFormat").is_empty());
    }

    #[test]
    fn test_validate_names_every_missing_parameter() {
        let mut params = ParameterSet::new(REQUIRED);
        match params.validate() {
            Err(ValidationErr::MissingParameters(names)) => {
                assert_eq!(names, vec!["templateName", "outputName"]);
            }
            other => panic!("unexpected: {other:?}"),
        }

        params.set("templateName", "samples/WelcomeTemplate.docx");
        match params.validate() {
            Err(ValidationErr::MissingParameters(names)) => assert_eq!(names, vec!["outputName"]),
            other => panic!("unexpected: {other:?}"),
        }

        params.set("outputName", "welcome.pdf");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_empty_values_do_not_satisfy_required() {
        let mut params = ParameterSet::new(&["templateName"]);
        params.set("templateName", "");
        assert!(params.validate().is_err());
        params.set("templateName", Vec::<String>::new());
        assert!(params.validate().is_err());
        params.set("templateName", vec![String::new()]);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_form_fields_flatten_lists_and_skip_parts() {
        let mut params = ParameterSet::new(&[]);
        params.add("imageName", "logo.png");
        params.add("imageName", "banner.png");
        params.set("isSystemImage", false);
        params.set("imageFile", PathBuf::from("/tmp/logo.png"));
        assert!(params.has_parts());
        assert_eq!(
            params.form_fields(),
            vec![
                ("imageName".to_string(), "logo.png".to_string()),
                ("imageName".to_string(), "banner.png".to_string()),
                ("isSystemImage".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_typed_accessors() {
        let mut params = ParameterSet::new(&[]);
        params.set("devMode", true);
        params.set("pageSize", 50i64);
        params.set("templateFile", PathBuf::from("a.docx"));
        assert_eq!(params.flag("devMode"), Some(true));
        assert_eq!(params.number("pageSize"), Some(50));
        assert_eq!(params.file("templateFile"), Some(Path::new("a.docx")));
        assert_eq!(params.get("devMode").unwrap(), "true");
        assert_eq!(params.flag("pageSize"), None);
    }
}
