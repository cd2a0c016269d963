//! Map-backed environment for testing probes.

use std::collections::HashMap;
use std::io;

use crate::collector::traits::Environment;

/// Environment with explicit variables and host name.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
    hostname: Option<String>,
}

impl MockEnv {
    /// Creates an environment with no variables and no host name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    pub fn unset(&mut self, name: &str) {
        self.vars.remove(name);
    }

    pub fn set_hostname(&mut self, hostname: &str) {
        self.hostname = Some(hostname.to_string());
    }
}

impl Environment for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn hostname(&self) -> io::Result<String> {
        self.hostname
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no hostname"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_env_empty_is_unset() {
        let mut env = MockEnv::new();
        env.set("USER", "");
        assert!(env.var("USER").is_none());

        env.set("USER", "alice");
        assert_eq!(env.var("USER").as_deref(), Some("alice"));

        env.unset("USER");
        assert!(env.var("USER").is_none());
    }

    #[test]
    fn test_mock_env_hostname() {
        let mut env = MockEnv::new();
        assert!(env.hostname().is_err());
        env.set_hostname("devbox");
        assert_eq!(env.hostname().unwrap(), "devbox");
    }
}
