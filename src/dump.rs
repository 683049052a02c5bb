// Copyright 2024-2025 Irreducible Inc.

use std::{borrow::Cow, fmt, rc::Rc};

use crate::{
    data::{Binding, FieldWriter, Slot},
    errors::{misuse, DumpError},
    RenderConfig,
};

type DeferredFn<'a> = dyn Fn(&mut FieldWriter<'_>) -> fmt::Result + 'a;

#[derive(Clone)]
enum Values<'a, const N: usize> {
    Captured([Slot<'a>; N]),
    Deferred(Rc<DeferredFn<'a>>),
}

/// Labelled values captured by [`dump!`](crate::dump), rendered as
/// `{label = value, ...}` every time it is formatted.
///
/// `N` is the number of captured expressions; labels and values always have
/// that length. Clones share the captured values, so clones of a record that
/// borrows locals borrow the same locals.
#[derive(Clone)]
pub struct Dump<'a, const N: usize> {
    names: [Cow<'static, str>; N],
    values: Values<'a, N>,
    config: RenderConfig,
}

impl<'a, const N: usize> Dump<'a, N> {
    fn new(names: [&'static str; N], values: Values<'a, N>) -> Self {
        Self {
            names: names.map(Cow::Borrowed),
            values,
            config: RenderConfig::global().share(),
        }
    }

    #[doc(hidden)]
    pub fn from_slots(names: [&'static str; N], slots: [Slot<'a>; N]) -> Self {
        Self::new(names, Values::Captured(slots))
    }

    #[doc(hidden)]
    pub fn deferred<F>(names: [&'static str; N], render: F) -> Self
    where
        F: Fn(&mut FieldWriter<'_>) -> fmt::Result + 'a,
    {
        Self::new(names, Values::Deferred(Rc::new(render)))
    }

    /// Number of captured expressions.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current labels, in capture order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_ref())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// How the value at `index` is held, or `None` if out of range.
    pub fn binding(&self, index: usize) -> Option<Binding> {
        match &self.values {
            Values::Captured(slots) => slots.get(index).map(Slot::binding),
            Values::Deferred(_) => (index < N).then_some(Binding::Deferred),
        }
    }

    /// Replace all labels. The count is checked at compile time.
    ///
    /// ```
    /// use field_dump::dump;
    ///
    /// let (foo, bar) = (24, 42);
    /// assert_eq!(dump!(foo, bar).rename(["x", "y"]).to_string(), "{x = 24, y = 42}");
    /// ```
    ///
    /// ```compile_fail
    /// use field_dump::dump;
    ///
    /// let (foo, bar) = (24, 42);
    /// let _ = dump!(foo, bar).rename(["x"]);
    /// ```
    pub fn rename<S: Into<Cow<'static, str>>>(mut self, names: [S; N]) -> Self {
        self.names = names.map(Into::into);
        self
    }

    /// Replace all labels from a list whose length is only known at runtime.
    ///
    /// Fails if the list doesn't have exactly one label per captured value;
    /// labels are never truncated or padded.
    pub fn try_rename<I>(mut self, names: I) -> Result<Self, DumpError>
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        let names: Vec<Cow<'static, str>> = names.into_iter().map(Into::into).collect();

        self.names = names.try_into().map_err(|names: Vec<_>| {
            let err = DumpError::LabelCount {
                expected: N,
                actual: names.len(),
            };
            misuse!("failed to rename dumped fields: {err}");

            err
        })?;

        Ok(self)
    }

    /// Set the field separator, keeping the key-value separator.
    pub fn sep(mut self, field_sep: impl Into<Cow<'static, str>>) -> Self {
        self.config.field_sep = field_sep.into();
        self
    }

    /// Set both the field separator and the key-value separator.
    pub fn seps(
        self,
        field_sep: impl Into<Cow<'static, str>>,
        kv_sep: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.sep(field_sep).kv_sep(kv_sep)
    }

    /// Set the key-value separator, keeping the field separator.
    pub fn kv_sep(mut self, kv_sep: impl Into<Cow<'static, str>>) -> Self {
        self.config.kv_sep = kv_sep.into();
        self
    }

    /// Whether to wrap the output in `{` and `}`.
    pub fn braces(mut self, braces: bool) -> Self {
        self.config.braces = braces;
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render into any text sink.
    pub fn write_to<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let mut out = DynWriter(out);
        let mut fields = FieldWriter::new(&mut out, &self.names, &self.config);

        fields.open()?;
        match &self.values {
            Values::Captured(slots) => {
                for slot in slots {
                    fields.field(slot.value())?;
                }
            }
            Values::Deferred(render) => render(&mut fields)?,
        }
        fields.close()
    }

    /// Render into a new string.
    pub fn str(&self) -> String {
        self.to_string()
    }
}

// Lets `write_to` accept unsized writers such as `dyn fmt::Write`.
struct DynWriter<'w, W: ?Sized>(&'w mut W);

impl<W: fmt::Write + ?Sized> fmt::Write for DynWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.0.write_char(c)
    }
}

impl<const N: usize> fmt::Display for Dump<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl<const N: usize> fmt::Debug for Dump<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::probe::{DisplayKind, Probe};
    use std::cell::Cell;

    fn standard<const N: usize>(dump: Dump<'_, N>) -> Dump<'_, N> {
        dump.with_config(RenderConfig::standard())
    }

    #[test]
    fn test_empty_record() {
        let dump = standard(Dump::from_slots([], []));
        assert!(dump.is_empty());
        assert_eq!(dump.to_string(), "{}");
        assert_eq!(dump.binding(0), None);
    }

    #[test]
    fn test_captured_slots() {
        let a = 1;
        let dump = standard(Dump::from_slots(
            ["a", "2 + 2"],
            [
                (&&&Probe(&a)).dump_kind().borrowed(&a),
                (&&&Probe(&4)).dump_kind().owned(4),
            ],
        ));

        assert_eq!(dump.len(), 2);
        assert_eq!(dump.str(), "{a = 1, 2 + 2 = 4}");
        assert_eq!(dump.binding(0), Some(Binding::Borrowed));
        assert_eq!(dump.binding(1), Some(Binding::Owned));
        assert_eq!(dump.binding(2), None);
    }

    #[test]
    fn test_deferred_renders_each_time() {
        let calls = Cell::new(0);
        let dump = standard(Dump::deferred(["calls"], |fields: &mut FieldWriter<'_>| {
            calls.set(calls.get() + 1);
            let value = calls.get();
            let result = fields.field(&(&&&Probe(&value)).dump_kind().view(&value));
            result
        }));

        assert_eq!(dump.to_string(), "{calls = 1}");
        assert_eq!(dump.to_string(), "{calls = 2}");
        assert_eq!(dump.binding(0), Some(Binding::Deferred));
        assert_eq!(dump.binding(1), None);
    }

    #[cfg(not(feature = "panic"))]
    #[test]
    fn test_try_rename_rejects_wrong_count() {
        let dump = standard(Dump::from_slots(["a"], [(&&&Probe(&1)).dump_kind().owned(1)]));

        let err = dump.clone().try_rename(["x", "y"]).err();
        assert_eq!(
            err,
            Some(DumpError::LabelCount {
                expected: 1,
                actual: 2
            })
        );
        assert!(dump.clone().try_rename(Vec::<String>::new()).is_err());

        let renamed = dump.try_rename(vec![String::from("x")]).unwrap();
        assert_eq!(renamed.to_string(), "{x = 1}");
    }

    #[cfg(feature = "panic")]
    #[test]
    #[should_panic(expected = "label count mismatch")]
    fn test_try_rename_wrong_count_panics() {
        let dump = standard(Dump::from_slots(["a"], [(&&&Probe(&1)).dump_kind().owned(1)]));
        let _ = dump.try_rename(["x", "y"]);
    }

    #[test]
    fn test_write_to_dyn_sink() {
        let dump = standard(Dump::from_slots(["a"], [(&&&Probe(&1)).dump_kind().owned(1)]));
        let mut out = String::from("context: ");
        let sink: &mut dyn fmt::Write = &mut out;
        dump.write_to(sink).unwrap();
        assert_eq!(out, "context: {a = 1}");
    }
}
