//! System-wide default constants.

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ORGAN_ROUTE_CONFIG";

/// Config file picked up from the working directory when the env var is unset.
pub const LOCAL_CONFIG_FILE: &str = "transport_config.toml";

/// Default number of synthesized samples per run.
pub const DEFAULT_SYNTHESIS_SAMPLES: usize = 5_000;
