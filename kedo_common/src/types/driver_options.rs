use ::std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};

/// Option bag supplied by the host for create and update calls.
///
/// Values are grouped by kind. Every lookup takes the candidate key names of one
/// logical option, usually the hyphenated name followed by its camel-case alias,
/// and returns the value of the first key present. `None` means the option was
/// not supplied under any of its names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverOptions {
    pub bool_options: BTreeMap<String, bool>,
    pub string_options: BTreeMap<String, String>,
    pub int_options: BTreeMap<String, i64>,
    pub string_slice_options: BTreeMap<String, Vec<String>>,
}

impl DriverOptions {
    pub fn get_string(&self, keys: &[&str]) -> Option<&str> {
        find(&self.string_options, keys).map(String::as_str)
    }

    pub fn get_bool(&self, keys: &[&str]) -> Option<bool> {
        find(&self.bool_options, keys).copied()
    }

    pub fn get_int(&self, keys: &[&str]) -> Option<i64> {
        find(&self.int_options, keys).copied()
    }

    pub fn get_string_slice(&self, keys: &[&str]) -> Option<&[String]> {
        find(&self.string_slice_options, keys).map(Vec::as_slice)
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.string_options.insert(key.into(), value.into());
        self
    }

    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.bool_options.insert(key.into(), value);
        self
    }

    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.int_options.insert(key.into(), value);
        self
    }

    pub fn with_string_slice<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.string_slice_options
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

fn find<'a, T>(options: &'a BTreeMap<String, T>, keys: &[&str]) -> Option<&'a T> {
    keys.iter().find_map(|key| options.get(*key))
}
