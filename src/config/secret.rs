//! Account credential handling
//!
//! Account keys and connection strings are held as [`SecretString`]: the
//! memory is zeroed on drop, `Debug` output is redacted, and reading the value
//! requires an explicit `expose_secret()`.
//!
//! ```rust
//! use docdb_binding::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("account-key".to_string());
//! assert_eq!(key.expose_secret(), "account-key");
//! assert!(!format!("{key:?}").contains("account-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a [`SecretString`]
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// Whether the secret is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Zeroizing, redacted string secret
pub type SecretString = Secret<SecretValue>;

/// Wrap a String as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_blank_secret() {
        assert!(secret_string("  ".to_string()).expose_secret().is_blank());
        assert!(!secret_string("key".to_string()).expose_secret().is_blank());
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Account {
            key: SecretString,
        }

        let account: Account = toml::from_str(r#"key = "c2VjcmV0""#).unwrap();
        assert_eq!(account.key.expose_secret(), "c2VjcmV0");
        assert!(!format!("{:?}", account.key).contains("c2VjcmV0"));
    }

    #[test]
    fn test_secret_into_string() {
        let value = SecretValue::from("abc".to_string());
        let s: String = value.into();
        assert_eq!(s, "abc");
    }
}
