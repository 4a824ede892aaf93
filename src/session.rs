//! Credentials used for mutating requests

use std::fmt::{Debug, Formatter};

/// Just a wrapper around a session ID
#[derive(Clone, PartialEq)]
pub struct Session {
    sid: String,
}

impl Session {
    pub fn new<S: ToString>(sid: S) -> Self {
        Self { sid: sid.to_string() }
    }

    pub fn sid(&self) -> &str { &self.sid }

    /// Read a session ID from the given environment variable, if it is set and not empty
    pub fn from_env(var: &str) -> Option<Self> {
        match std::env::var(var) {
            Ok(sid) if sid.is_empty() == false => Some(Self::new(sid)),
            _ => None,
        }
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("sid", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_hides_the_sid() {
        let session = Session::new("very-secret");
        let printed = format!("{:?}", session);
        assert!(printed.contains("redacted"));
        assert!(printed.contains("very-secret") == false);
    }
}
