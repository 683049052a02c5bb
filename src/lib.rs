// Copyright 2024-2025 Irreducible Inc.

//! Key-value dumps of expressions for log and error messages.
//!
//! # Overview
//! [`dump!`] captures up to 8 expressions together with their source text and
//! returns a [`Dump`], which renders them as `{expr = value, ...}` whenever it
//! is formatted. It is meant to be the tail of a log line:
//!
//! ```
//! use field_dump::dump;
//!
//! let src = "/tmp/in.txt";
//! let attempts = 3;
//! let message = format!("Can't copy file: {}", dump!(src, attempts, attempts * 2));
//! assert_eq!(message, "Can't copy file: {src = /tmp/in.txt, attempts = 3, attempts * 2 = 6}");
//! ```
//!
//! A `Dump` is an ordinary `Display` value, so it works with any logging
//! facade, e.g. `tracing::info!(context = %dump!(a, b), "request processed")`.
//!
//! # Binding rules
//! - A bare identifier, or a field path on one such as `req.name`, is borrowed
//!   and read at every render.
//! - Any other expression is evaluated once, when the dump is created, and its
//!   value is stored in the dump.
//! - `dump!(bind(x, y); exprs...)` evaluates every expression at every render,
//!   borrowing the listed names.
//!
//! A dump can be created once and formatted many times, e.g. as shared context
//! for several checks in the same function.
//!
//! # Value text
//! Values are printed with `Display` when their type has it, otherwise with
//! `Debug`, otherwise as `<type name @ address>`. Printing never fails on a
//! missing implementation.
//!
//! # Layout
//! Fields are separated with `", "` and labels from values with `" = "`, and
//! the whole dump is wrapped in braces. Per dump, use [`Dump::sep`],
//! [`Dump::seps`], [`Dump::kv_sep`] and [`Dump::braces`]. The process-wide
//! defaults come from the `DUMP_FIELD_SEP`, `DUMP_KV_SEP` and `DUMP_BRACES`
//! environment variables, read once (see [`RenderConfig`]), so the default
//! output of a dump depends on the process environment.
//!
//! # Features
//! The `panic` feature turns misuse warnings (e.g. a relabel with the wrong
//! number of labels) into panics.

mod config;
mod data;
mod dump;
mod env_utils;
mod errors;
mod macros;

pub use config::RenderConfig;
pub use data::{Binding, FieldWriter, Render, Slot};
pub use dump::Dump;
pub use errors::DumpError;

#[doc(hidden)]
pub mod __private {
    pub use crate::data::probe::{DebugKind, DisplayKind, OpaqueKind, Probe};
}

#[cfg(test)]
mod tests {
    use std::env;

    use rusty_fork::rusty_fork_test;

    // The default layout is read from the environment once per process.
    rusty_fork_test! {
        #[test]
        fn dumps_use_layout_from_env() {
            env::set_var("DUMP_FIELD_SEP", "\\n");
            env::set_var("DUMP_KV_SEP", ": ");
            env::set_var("DUMP_BRACES", "0");

            let (a, b) = (1, "two");
            assert_eq!(crate::dump!(a, b).to_string(), "a: 1\nb: two");
            assert_eq!(crate::dump!(a, b).sep(", ").braces(true).to_string(), "{a: 1, b: two}");
        }

        #[test]
        fn dumps_use_standard_layout_without_env() {
            env::remove_var("DUMP_FIELD_SEP");
            env::remove_var("DUMP_KV_SEP");
            env::remove_var("DUMP_BRACES");

            let a = 42;
            let dump = crate::dump!(a);
            assert_eq!(dump.config(), &crate::RenderConfig::standard());
            assert_eq!(dump.to_string(), "{a = 42}");
        }
    }
}
