use std::env;

/// Variable holding the name to greet.
pub const NAME_VAR: &str = "NAME";
/// Variable set to `true` (any case) by the container image.
pub const CONTAINER_VAR: &str = "RUNNING_IN_CONTAINER";
/// Name used when `NAME` is unset or empty.
pub const DEFAULT_NAME: &str = "World";

/// One-shot snapshot of the variables the greeter cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub running_in_container: bool,
}

impl Environment {
    /// Reads the process environment. Non-UTF-8 values are decoded lossily.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Builds the snapshot from an arbitrary lookup, each key queried once.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup(NAME_VAR)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let running_in_container = lookup(CONTAINER_VAR)
            .map(|flag| flag.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            name,
            running_in_container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let env = snapshot(&[]);
        assert_eq!(env.name, "World");
        assert!(!env.running_in_container);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let env = snapshot(&[("NAME", "")]);
        assert_eq!(env.name, "World");
    }

    #[test]
    fn test_name_is_taken_verbatim() {
        assert_eq!(snapshot(&[("NAME", "Haneen")]).name, "Haneen");
        assert_eq!(snapshot(&[("NAME", "  spaced  ")]).name, "  spaced  ");
    }

    #[test]
    fn test_container_flag_is_case_insensitive() {
        for value in ["true", "True", "TRUE", "tRuE"] {
            let env = snapshot(&[("RUNNING_IN_CONTAINER", value)]);
            assert!(env.running_in_container, "{value} should enable the flag");
        }
    }

    #[test]
    fn test_container_flag_rejects_other_values() {
        for value in ["", "false", "1", "yes", " true", "true\n"] {
            let env = snapshot(&[("RUNNING_IN_CONTAINER", value)]);
            assert!(!env.running_in_container, "{value:?} should not enable the flag");
        }
    }

    #[test]
    fn test_each_key_read_once() {
        use std::cell::RefCell;

        let seen = RefCell::new(Vec::new());
        Environment::from_lookup(|key| {
            seen.borrow_mut().push(key.to_string());
            None
        });
        assert_eq!(*seen.borrow(), vec![NAME_VAR, CONTAINER_VAR]);
    }
}
