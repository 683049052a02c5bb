// Copyright 2024-2025 Irreducible Inc.

use std::{borrow::Cow, fmt};

use super::Render;
use crate::{errors::misuse, RenderConfig};

/// Writes `label = value` entries one at a time, taking labels in order and
/// putting the field separator between entries.
pub struct FieldWriter<'a> {
    is_first: bool,
    index: usize,
    writer: &'a mut dyn fmt::Write,
    names: &'a [Cow<'static, str>],
    config: &'a RenderConfig,
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new(
        writer: &'a mut dyn fmt::Write,
        names: &'a [Cow<'static, str>],
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            is_first: true,
            index: 0,
            writer,
            names,
            config,
        }
    }

    fn write_separator(&mut self) -> fmt::Result {
        if self.is_first {
            self.is_first = false;
            Ok(())
        } else {
            self.writer.write_str(&self.config.field_sep)
        }
    }

    /// Write the next entry, labelled with the next unused name.
    ///
    /// Values past the last label are dropped rather than written unlabelled.
    pub fn field(&mut self, value: &dyn Render) -> fmt::Result {
        let names = self.names;
        let Some(name) = names.get(self.index) else {
            misuse!(
                "record has {} labels, dropping value #{}",
                names.len(),
                self.index + 1
            );
            return Ok(());
        };
        self.index += 1;

        self.write_separator()?;

        self.writer.write_str(name)?;
        self.writer.write_str(&self.config.kv_sep)?;
        value.render(&mut *self.writer)
    }

    pub(crate) fn open(&mut self) -> fmt::Result {
        if self.config.braces {
            self.writer.write_char('{')?;
        }
        Ok(())
    }

    pub(crate) fn close(&mut self) -> fmt::Result {
        if self.config.braces {
            self.writer.write_char('}')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DisplayValue;

    #[test]
    fn test_fields_are_labelled_in_order() {
        let names = [Cow::Borrowed("a"), Cow::Owned("b".to_string())];
        let config = RenderConfig::standard();
        let mut out = String::new();

        let mut writer = FieldWriter::new(&mut out, &names, &config);
        writer.open().unwrap();
        writer.field(&DisplayValue(1)).unwrap();
        writer.field(&DisplayValue("two")).unwrap();
        writer.close().unwrap();

        assert_eq!(out, "{a = 1, b = two}");
    }

    #[test]
    fn test_custom_separators_without_braces() {
        let names = [Cow::Borrowed("x"), Cow::Borrowed("y")];
        let config = RenderConfig {
            field_sep: "; ".into(),
            kv_sep: ":".into(),
            braces: false,
        };
        let mut out = String::new();

        let mut writer = FieldWriter::new(&mut out, &names, &config);
        writer.open().unwrap();
        writer.field(&DisplayValue(true)).unwrap();
        writer.field(&DisplayValue(2.5)).unwrap();
        writer.close().unwrap();

        assert_eq!(out, "x:true; y:2.5");
    }

    #[cfg(not(feature = "panic"))]
    #[test]
    fn test_values_past_last_label_are_dropped() {
        let names = [Cow::Borrowed("a")];
        let config = RenderConfig::standard();
        let mut out = String::new();

        let mut writer = FieldWriter::new(&mut out, &names, &config);
        writer.open().unwrap();
        writer.field(&DisplayValue(1)).unwrap();
        writer.field(&DisplayValue(2)).unwrap();
        writer.close().unwrap();

        assert_eq!(out, "{a = 1}");
    }

    #[cfg(feature = "panic")]
    #[test]
    #[should_panic(expected = "record has 1 labels")]
    fn test_values_past_last_label_panic() {
        let names = [Cow::Borrowed("a")];
        let config = RenderConfig::standard();
        let mut out = String::new();

        let mut writer = FieldWriter::new(&mut out, &names, &config);
        writer.field(&DisplayValue(1)).unwrap();
        let _ = writer.field(&DisplayValue(2));
    }
}
