use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, Write};

use crate::environment::Environment;
use crate::runtime::RuntimeInfo;

/// Local date-time rendering used on the `Time now:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Where the process believes it is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Container,
    Host,
}

impl Placement {
    pub fn detect(env: &Environment) -> Self {
        if env.running_in_container {
            Placement::Container
        } else {
            Placement::Host
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Container => write!(f, "Docker container"),
            Placement::Host => write!(f, "Host JVM"),
        }
    }
}

/// The four lines printed on startup.
#[derive(Debug, Clone)]
pub struct Greeting {
    pub name: String,
    pub now: DateTime<Local>,
    pub runtime: RuntimeInfo,
    pub placement: Placement,
}

impl Greeting {
    pub fn new(env: Environment, now: DateTime<Local>, runtime: RuntimeInfo) -> Self {
        let placement = Placement::detect(&env);
        Self {
            name: env.name,
            now,
            runtime,
            placement,
        }
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("Hello, {}", self.name),
            format!("Time now: {}", self.now.format(TIMESTAMP_FORMAT)),
            self.runtime.to_string(),
            format!("Running inside: {}", self.placement),
        ]
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
