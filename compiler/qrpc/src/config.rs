//! Driver configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable          | Field         | Default |
//! |-------------------|---------------|---------|
//! | `QRP_STRUCTURE`   | `structure`   | off     |
//! | `QRP_RECOVER`     | `recover`     | off     |
//! | `QRP_KEEP_TRIVIA` | `keep_trivia` | on      |
//! | `QRP_PARALLEL`    | `parallel`    | on      |
//!
//! Values are `1/0`, `true/false`, `yes/no` or `on/off`, case-insensitive.
//! Anything else logs a warning and leaves the default in place.

use qrp_structure::StructureConfig;

/// How the driver processes each file.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DriverConfig {
    /// Structure the classified stream after classification.
    pub structure: bool,
    /// Use recovering structuring instead of strict.
    pub recover: bool,
    /// Keep whitespace and comments in the structure.
    pub keep_trivia: bool,
    /// Process several files at once.
    pub parallel: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            structure: false,
            recover: false,
            keep_trivia: true,
            parallel: true,
        }
    }
}

impl DriverConfig {
    pub const STRUCTURE_VAR: &'static str = "QRP_STRUCTURE";
    pub const RECOVER_VAR: &'static str = "QRP_RECOVER";
    pub const KEEP_TRIVIA_VAR: &'static str = "QRP_KEEP_TRIVIA";
    pub const PARALLEL_VAR: &'static str = "QRP_PARALLEL";

    /// Defaults overridden by `QRP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = DriverConfig::default();
        let read = |key: &str, field: &mut bool| {
            let Some(value) = lookup(key) else {
                return;
            };
            match parse_flag(&value) {
                Some(flag) => *field = flag,
                None => tracing::warn!(key, value = value.as_str(), "ignoring unrecognised boolean"),
            }
        };
        read(Self::STRUCTURE_VAR, &mut config.structure);
        read(Self::RECOVER_VAR, &mut config.recover);
        read(Self::KEEP_TRIVIA_VAR, &mut config.keep_trivia);
        read(Self::PARALLEL_VAR, &mut config.parallel);
        config
    }

    #[must_use]
    pub fn with_structure(mut self, structure: bool) -> Self {
        self.structure = structure;
        self
    }

    #[must_use]
    pub fn with_recover(mut self, recover: bool) -> Self {
        self.recover = recover;
        self
    }

    #[must_use]
    pub fn with_keep_trivia(mut self, keep_trivia: bool) -> Self {
        self.keep_trivia = keep_trivia;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn structure_config(&self) -> StructureConfig {
        StructureConfig::default().with_keep_trivia(self.keep_trivia)
    }
}

/// Parse a boolean environment word.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
