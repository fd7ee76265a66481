use std::fmt;

/// Capability tier read from the session token. Used for UI gating only;
/// the server authorizes every privileged call on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Free,
    Premium,
    Other(String),
}

impl Role {
    pub fn is_premium(&self) -> bool {
        matches!(self, Role::Premium)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Free => "free",
            Role::Premium => "premium",
            Role::Other(raw) => raw,
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "" | "free" => Role::Free,
            "premium" => Role::Premium,
            other => Role::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
