use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// LanderEnv lets us read environment variables through a store that tests
/// can replace with an in-memory map. That way tests run in parallel without
/// the local development environment leaking into them.
#[derive(Debug, Clone)]
pub struct LanderEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for LanderEnv {
    fn default() -> LanderEnv {
        LanderEnv::new()
    }
}

impl LanderEnv {
    /// creates a new environment variable store
    pub fn new() -> LanderEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        LanderEnv { mock_store }
    }

    /// creates a store backed by the given variables instead of the process
    /// environment
    #[cfg(test)]
    pub fn mocked<'a>(vars: impl IntoIterator<Item = (LanderEnvKey, &'a str)>) -> LanderEnv {
        let mock_store = vars
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LanderEnv {
            mock_store: Some(mock_store),
        }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: LanderEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(e) => match e {
                    env::VarError::NotPresent => Ok(None),
                    env::VarError::NotUnicode(_) => Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    )),
                },
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read environment variable ${} = {}", &key_str, result);
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }
}

/// LanderEnvKey defines all of the environment variables that are respected
/// by Lander. Any time a new environment variable is added to the public
/// contract, it should be defined here. Each variable is prefixed with
/// `LANDER_` and the suffix is the name of the key defined here, converted
/// from CamelCase to SHOUTY_SNAKE_CASE. For example,
/// `LanderEnvKey::EngineBin.to_string()` becomes `LANDER_ENGINE_BIN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LanderEnvKey {
    EngineBin,
}

impl fmt::Display for LanderEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        fmt.write_str(&format!("LANDER_{}", &dbg))
    }
}
