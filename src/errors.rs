// Copyright 2024-2025 Irreducible Inc.

use thiserror::Error;

/// Errors returned when a record is used in a way its shape doesn't allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    #[error("label count mismatch: record has {expected} values, got {actual} labels")]
    LabelCount { expected: usize, actual: usize },
}

// use this instead of tracing::warn! for caller mistakes
macro_rules! misuse {
    ($($arg:tt)*) => {{
        tracing::warn!($($arg)*);
        assert!(cfg!(not(feature = "panic")), $($arg)*)
    }};
}

pub(crate) use misuse;
