use crate::modules::cart::core::decision::DecideError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    UpdateAmount,
}

/// Transient message shown to the shopper when an operation does not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    InsufficientStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notification {
    pub fn generic_failure(operation: Operation) -> Self {
        match operation {
            Operation::Add => Self::AddFailed,
            Operation::Remove => Self::RemoveFailed,
            Operation::UpdateAmount => Self::UpdateFailed,
        }
    }

    /// Stock shortfalls get their own message; everything else falls back to the
    /// operation's generic failure.
    pub fn for_rejection(operation: Operation, reason: &DecideError) -> Self {
        match reason {
            DecideError::InsufficientStock { .. } => Self::InsufficientStock,
            DecideError::NotInCart(_) => Self::generic_failure(operation),
        }
    }

    /// The kind as consumers see it, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientStock => "insufficient_stock",
            Self::AddFailed => "add_failed",
            Self::RemoveFailed => "remove_failed",
            Self::UpdateFailed => "update_failed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InsufficientStock => "Quantidade solicitada fora de estoque",
            Self::AddFailed => "Erro na adição do produto",
            Self::RemoveFailed => "Erro na remoção do produto",
            Self::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}
