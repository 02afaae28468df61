use std::fmt;

/// Identity of the platform executing this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// The compiler toolchain this binary was built with.
pub const CURRENT: RuntimeInfo = RuntimeInfo {
    name: "Rust",
    version: env!("HELLO_ENV_RUSTC_VERSION"),
};

impl RuntimeInfo {
    pub fn current() -> Self {
        CURRENT
    }
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} version: {}", self.name, self.version)
    }
}
