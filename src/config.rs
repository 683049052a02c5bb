// Copyright 2024-2025 Irreducible Inc.

use std::{borrow::Cow, sync::OnceLock};

use crate::env_utils::{get_bool_env_var, get_separator_env_var};

const DEFAULT_FIELD_SEP: &str = ", ";
const DEFAULT_KV_SEP: &str = " = ";

/// How a record is laid out when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Written between two `label = value` entries.
    /// Corresponds to the `DUMP_FIELD_SEP` environment variable.
    pub field_sep: Cow<'static, str>,

    /// Written between a label and its value.
    /// Corresponds to the `DUMP_KV_SEP` environment variable.
    pub kv_sep: Cow<'static, str>,

    /// Whether to wrap the whole record in `{` and `}`.
    /// Corresponds to the `DUMP_BRACES` environment variable.
    pub braces: bool,
}

impl RenderConfig {
    /// The built-in layout: `{a = 1, b = 2}`.
    pub const fn standard() -> Self {
        Self {
            field_sep: Cow::Borrowed(DEFAULT_FIELD_SEP),
            kv_sep: Cow::Borrowed(DEFAULT_KV_SEP),
            braces: true,
        }
    }

    /// The built-in layout with any overrides found in the environment.
    pub fn from_env() -> Self {
        Self {
            field_sep: get_separator_env_var("DUMP_FIELD_SEP", DEFAULT_FIELD_SEP).into(),
            kv_sep: get_separator_env_var("DUMP_KV_SEP", DEFAULT_KV_SEP).into(),
            braces: get_bool_env_var("DUMP_BRACES", true),
        }
    }

    /// Layout every new record starts with. The environment is read on first use only.
    pub fn global() -> &'static RenderConfig {
        static GLOBAL: OnceLock<RenderConfig> = OnceLock::new();

        GLOBAL.get_or_init(RenderConfig::from_env)
    }

    /// A copy that borrows the strings of a `'static` config instead of cloning them.
    pub(crate) fn share(&'static self) -> Self {
        Self {
            field_sep: Cow::Borrowed(&self.field_sep),
            kv_sep: Cow::Borrowed(&self.kv_sep),
            braces: self.braces,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
