use thiserror::Error;

#[derive(Error, Debug)]
pub enum MelodyforgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Pitch {pitch} is outside the MIDI range 0-127")]
    PitchOutOfRange { pitch: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, MelodyforgeError>;
