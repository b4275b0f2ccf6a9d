//! Shared error vocabulary.
//!
//! Each action owns a `thiserror` enum next to its transition (see
//! [`crate::action::MineError`]). Those enums implement [`GameError`] so the
//! engine can log and classify rejections without knowing the action type.
//! The `Display` text of a rejection is the message shown to the player.

/// How a caller should react to a rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later, e.g. once a rock has recovered or
    /// the player has crafted another pickaxe.
    Recoverable,

    /// The request refers to something that does not exist on this land.
    Validation,

    /// The reducer produced a state that breaks its own postconditions.
    Internal,

    /// The environment lacks an oracle the reducer needs.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label used as a structured log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for failures that point at a bug or a misconfigured host rather
    /// than at the player's request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification shared by every land-core error.
pub trait GameError: std::fmt::Display + std::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable, screaming-snake identifier such as `MINE_NO_PICKAXES`.
    ///
    /// Falls back to the Rust type name for errors without variant codes.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
