pub mod environment;
pub mod greeter;
pub mod runtime;

pub use environment::Environment;
pub use greeter::{Greeting, Placement};
pub use runtime::RuntimeInfo;
