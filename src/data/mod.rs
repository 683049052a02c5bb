// Copyright 2024-2025 Irreducible Inc.

mod field_writer;
pub(crate) mod probe;
mod slot;

pub use field_writer::FieldWriter;
pub use slot::{Binding, Render, Slot};
pub(crate) use slot::{DebugValue, DisplayValue, OpaqueRef, OpaqueValue};
