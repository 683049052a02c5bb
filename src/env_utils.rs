// Copyright 2024-2025 Irreducible Inc.

use std::{env, fmt::Display};

fn report_invalid(name: &str, val: impl std::fmt::Debug, default: impl Display) {
    eprintln!("invalid '{name}' environment value: {val:?}, using the default value '{default}'");
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

pub fn get_bool_env_var(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(val) => parse_flag(&val).unwrap_or_else(|| {
            report_invalid(name, &val, default);

            default
        }),
        Err(env::VarError::NotPresent) => default,
        Err(env::VarError::NotUnicode(val)) => {
            report_invalid(name, val, default);

            default
        }
    }
}

/// Separators are taken verbatim, except that `\n` and `\t` escapes are
/// expanded so a shell can pass multi-line layouts.
pub fn get_separator_env_var(name: &str, default: &'static str) -> String {
    match env::var(name) {
        Ok(val) => val.replace("\\n", "\n").replace("\\t", "\t"),
        Err(env::VarError::NotPresent) => default.to_string(),
        Err(env::VarError::NotUnicode(val)) => {
            report_invalid(name, val, default.escape_debug());

            default.to_string()
        }
    }
}
