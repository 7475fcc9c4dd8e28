use serde::{Deserialize, Serialize};

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyModifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        control: false,
        shift: false,
        alt: false,
    };

    pub const CONTROL: Self = Self {
        control: true,
        shift: false,
        alt: false,
    };
}

/// Key press delivered by the host's input dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyModifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Key binding: a key name plus the exact modifier set required.
///
/// Key names compare case-insensitively so `"z"` matches `"Z"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    pub key: String,
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyModifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_control(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.modifiers == press.modifiers && self.key.eq_ignore_ascii_case(&press.key)
    }
}
