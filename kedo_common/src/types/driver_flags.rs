use ::std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};

/// Value kind of a driver option, named the way the host names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "bool")]
    Bool,
    /// Tri-state boolean, unset unless the user supplies it.
    #[serde(rename = "boolPtr")]
    BoolPointer,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "stringSlice")]
    StringSlice,
}

/// Description of one option accepted by a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    /// Whether the value is a secret the host must mask.
    #[serde(default)]
    pub password: bool,
    pub usage: String,
}

impl Flag {
    pub fn new(flag_type: FlagType, usage: impl Into<String>) -> Self {
        Self {
            flag_type,
            password: false,
            usage: usage.into(),
        }
    }

    pub fn secret(mut self) -> Self {
        self.password = true;
        self
    }
}

/// Every option a driver accepts, keyed by option name.
/// The host renders its UI and CLI flags from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverFlags {
    pub options: BTreeMap<String, Flag>,
}

#[cfg(test)]
mod tests {
    use ::serde_json::json;

    use super::*;

    #[test]
    fn serialize_flag_with_host_kind_names() -> anyhow::Result<()> {
        let flag = Flag::new(FlagType::BoolPointer, "enable auto upgrade");
        assert_eq!(
            serde_json::to_value(&flag)?,
            json!({"type": "boolPtr", "password": false, "usage": "enable auto upgrade"})
        );
        let flag = Flag::new(FlagType::StringSlice, "tags").secret();
        assert_eq!(
            serde_json::to_value(&flag)?,
            json!({"type": "stringSlice", "password": true, "usage": "tags"})
        );
        Ok(())
    }
}
