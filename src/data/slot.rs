// Copyright 2024-2025 Irreducible Inc.

use std::{any::type_name, fmt, rc::Rc};

/// Something that can write its value as text.
pub trait Render {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

pub struct DisplayValue<T>(pub T);

impl<T: fmt::Display> Render for DisplayValue<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

pub struct DebugValue<T>(pub T);

impl<T: fmt::Debug> Render for DebugValue<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{:?}", self.0)
    }
}

/// Fallback for owned values without `Display` or `Debug`: type name and storage address.
pub struct OpaqueValue<T>(pub T);

impl<T> Render for OpaqueValue<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_opaque(&self.0, out)
    }
}

/// Same as [`OpaqueValue`], but reports the address of the referent.
pub struct OpaqueRef<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Render for OpaqueRef<'_, T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_opaque(self.0, out)
    }
}

fn write_opaque<T: ?Sized>(value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
    write!(out, "<{} @ {:p}>", type_name::<T>(), value as *const T as *const ())
}

/// How a captured value is held by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Borrows a named location and reads it on every render.
    Borrowed,
    /// Holds the value computed at capture time.
    Owned,
    /// Evaluates the expression on every render.
    Deferred,
}

/// One captured value.
#[derive(Clone)]
pub enum Slot<'a> {
    Borrowed(Rc<dyn Render + 'a>),
    Owned(Rc<dyn Render + 'a>),
}

impl<'a> Slot<'a> {
    pub fn binding(&self) -> Binding {
        match self {
            Slot::Borrowed(_) => Binding::Borrowed,
            Slot::Owned(_) => Binding::Owned,
        }
    }

    pub fn value(&self) -> &(dyn Render + 'a) {
        match self {
            Slot::Borrowed(value) | Slot::Owned(value) => value.as_ref(),
        }
    }
}
