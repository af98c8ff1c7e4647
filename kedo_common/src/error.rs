use ::core::fmt::Display;

pub type Result<T> = std::result::Result<T, DriverError>;

/// Kinds of failure the driver reports to its host.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DriverErrorType {
    /// An option value cannot be coerced into the field it configures.
    IllegalOption,
    /// The API token is missing from the options.
    MissingCredential,
    /// The cloud provider rejected or failed the request.
    Provider,
    /// The cluster-info record carries no persisted state.
    StateNotFound,
    FailToSerializeState,
    FailToDeserializeState,
    FailToLoadConfig,
}

impl Display for DriverErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::IllegalOption => "Illegal option",
            Self::MissingCredential => "Missing credential",
            Self::Provider => "Provider error",
            Self::StateNotFound => "State not found",
            Self::FailToSerializeState => "Fail to serialize state",
            Self::FailToDeserializeState => "Fail to deserialize state",
            Self::FailToLoadConfig => "Fail to load config",
        };
        write!(f, "{}", kind)
    }
}

#[derive(Debug)]
pub struct DriverError {
    error_type: DriverErrorType,
    source: anyhow::Error,
}

impl DriverError {
    fn new<E: Into<anyhow::Error>>(error_type: DriverErrorType, source: E) -> Self {
        Self {
            error_type,
            source: source.into(),
        }
    }

    pub fn get_error_type(&self) -> DriverErrorType {
        self.error_type
    }

    pub fn illegal_option<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::IllegalOption, e)
    }

    pub fn missing_credential<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::MissingCredential, e)
    }

    pub fn provider<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::Provider, e)
    }

    pub fn state_not_found<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::StateNotFound, e)
    }

    pub fn fail_to_serialize_state<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::FailToSerializeState, e)
    }

    pub fn fail_to_deserialize_state<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::FailToDeserializeState, e)
    }

    pub fn fail_to_load_config<E: Into<anyhow::Error>>(e: E) -> Self {
        Self::new(DriverErrorType::FailToLoadConfig, e)
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_type, self.source)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

#[cfg(test)]
mod tests {
    use ::anyhow::anyhow;

    use super::*;

    #[test]
    fn display_error() {
        let error = DriverError::missing_credential(anyhow!("token was not reported"));
        assert_eq!(
            error.to_string(),
            "Missing credential: token was not reported"
        );
        assert_eq!(error.get_error_type(), DriverErrorType::MissingCredential);
    }

    #[test]
    fn keep_message_of_source_error() {
        let source = serde_json::from_str::<u32>("x").unwrap_err();
        let message = source.to_string();
        let error = DriverError::fail_to_deserialize_state(source);
        assert_eq!(
            error.to_string(),
            format!("Fail to deserialize state: {}", message)
        );
    }
}
