//! Configuration loading shared by the kedo binaries.

use ::std::{fs::File, io::BufReader, path::Path};

use ::serde::de::DeserializeOwned;
use ::serde_json::from_reader;

use crate::error::{DriverError, Result};

/// Read a JSON config file into `T`.
pub fn load_config<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).map_err(DriverError::fail_to_load_config)?;
    let reader = BufReader::new(file);
    let config = from_reader(reader).map_err(DriverError::fail_to_load_config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use ::serde::Deserialize;
    use ::std::io::Write;

    use super::*;
    use crate::error::DriverErrorType;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn missing_config_file() {
        let result = load_config::<Sample, _>("/not/exist/config.json");
        assert!(result.is_err_and(|e| e.get_error_type() == DriverErrorType::FailToLoadConfig));
    }

    #[test]
    fn load_config_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("kedo-config-{}.json", std::process::id()));
        File::create(&path)?.write_all(br#"{"name": "kedo"}"#)?;
        let config: Sample = load_config(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(
            config,
            Sample {
                name: "kedo".to_owned()
            }
        );
        Ok(())
    }

    #[test]
    fn invalid_config_file() -> anyhow::Result<()> {
        let path =
            std::env::temp_dir().join(format!("kedo-bad-config-{}.json", std::process::id()));
        File::create(&path)?.write_all(b"{")?;
        let result = load_config::<Sample, _>(&path);
        std::fs::remove_file(&path)?;
        assert!(result.is_err_and(|e| e.get_error_type() == DriverErrorType::FailToLoadConfig));
        Ok(())
    }
}
