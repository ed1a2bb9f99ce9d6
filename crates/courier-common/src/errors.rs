#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config write error: {0}")]
    WriteError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("account already exists for provider '{provider_type_id}' with label '{label}'")]
    Duplicate {
        provider_type_id: String,
        label: String,
    },

    #[error("account store error: {0}")]
    Store(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("{0}")]
    Other(String),
}
