// Copyright 2024-2025 Irreducible Inc.

//! Compile-time choice of how a captured value is turned into text.
//!
//! `(&&&Probe(&value)).dump_kind()` resolves to the first of `Display`,
//! `Debug` or nothing that the value's type implements, because method lookup
//! tries the receiver with the most references first. The returned tag then
//! wraps the value in the matching [`Render`] implementation.

use std::{any::type_name, fmt, rc::Rc};

use super::{DebugValue, DisplayValue, OpaqueRef, OpaqueValue, Render, Slot};

pub struct Probe<'a, T: ?Sized>(pub &'a T);

pub struct DisplayTag;
pub struct DebugTag;
pub struct OpaqueTag;

pub trait DisplayKind {
    #[inline]
    fn dump_kind(&self) -> DisplayTag {
        DisplayTag
    }
}

impl<T: fmt::Display + ?Sized> DisplayKind for &&Probe<'_, T> {}

pub trait DebugKind {
    #[inline]
    fn dump_kind(&self) -> DebugTag {
        DebugTag
    }
}

impl<T: fmt::Debug + ?Sized> DebugKind for &Probe<'_, T> {}

pub trait OpaqueKind {
    #[inline]
    fn dump_kind(&self) -> OpaqueTag {
        OpaqueTag
    }
}

impl<T: ?Sized> OpaqueKind for Probe<'_, T> {}

impl DisplayTag {
    pub fn owned<'a, T: fmt::Display + 'a>(self, value: T) -> Slot<'a> {
        Slot::Owned(Rc::new(DisplayValue(value)))
    }

    pub fn borrowed<'a, T: fmt::Display + ?Sized>(self, value: &'a T) -> Slot<'a> {
        Slot::Borrowed(Rc::new(DisplayValue(value)))
    }

    pub fn view<T: fmt::Display + ?Sized>(self, value: &T) -> impl Render + '_ {
        DisplayValue(value)
    }
}

impl DebugTag {
    pub fn owned<'a, T: fmt::Debug + 'a>(self, value: T) -> Slot<'a> {
        Slot::Owned(Rc::new(DebugValue(value)))
    }

    pub fn borrowed<'a, T: fmt::Debug + ?Sized>(self, value: &'a T) -> Slot<'a> {
        Slot::Borrowed(Rc::new(DebugValue(value)))
    }

    pub fn view<T: fmt::Debug + ?Sized>(self, value: &T) -> impl Render + '_ {
        DebugValue(value)
    }
}

impl OpaqueTag {
    pub fn owned<'a, T: 'a>(self, value: T) -> Slot<'a> {
        tracing::trace!(
            type_name = type_name::<T>(),
            "captured value has no text conversion, rendering it opaquely"
        );
        Slot::Owned(Rc::new(OpaqueValue(value)))
    }

    pub fn borrowed<'a, T: ?Sized>(self, value: &'a T) -> Slot<'a> {
        tracing::trace!(
            type_name = type_name::<T>(),
            "captured value has no text conversion, rendering it opaquely"
        );
        Slot::Borrowed(Rc::new(OpaqueRef(value)))
    }

    pub fn view<T: ?Sized>(self, value: &T) -> impl Render + '_ {
        OpaqueRef(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OnlyDebug(u8);

    struct Nothing;

    fn render(slot: &Slot<'_>) -> String {
        let mut out = String::new();
        slot.value().render(&mut out).unwrap();
        out
    }

    #[test]
    fn test_display_wins_over_debug() {
        let value = String::from("plain");
        let slot = (&&&Probe(&value)).dump_kind().borrowed(&value);
        assert_eq!(render(&slot), "plain");
    }

    #[test]
    fn test_debug_when_no_display() {
        let value = OnlyDebug(4);
        let slot = (&&&Probe(&value)).dump_kind().borrowed(&value);
        assert_eq!(render(&slot), "OnlyDebug(4)");
        drop(slot);

        let kind = (&&&Probe(&value)).dump_kind();
        let slot = kind.owned(value);
        assert_eq!(render(&slot), "OnlyDebug(4)");
    }

    #[test]
    fn test_opaque_when_nothing_else() {
        let value = Nothing;
        let slot = (&&&Probe(&value)).dump_kind().borrowed(&value);
        assert!(render(&slot).contains("Nothing @ "));
    }
}
