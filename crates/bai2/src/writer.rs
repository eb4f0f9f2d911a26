//! Буферизованный writer для BAI2.
//!
//! Предоставляет [`Bai2Writer`] для записи целых файлов или отдельных
//! записей в любой тип, реализующий [`Write`].

use std::io::{BufWriter, Write};

use crate::{error::Result, model::File, record::Record};

/// Буферизованный BAI2 writer.
///
/// Записи разделяются `\n`, после последней записи ничего не пишется.
///
/// # Пример
///
/// ```
/// use bai2::writer::Bai2Writer;
///
/// let input = "01,0004,12345,060321,0829,001,,,2/\n99,0,0,2/";
/// let file = bai2::read(input.as_bytes()).unwrap();
///
/// let mut writer = Bai2Writer::new(Vec::new());
/// writer.write_file(&file).unwrap();
/// assert_eq!(writer.records_written(), 2);
/// assert_eq!(writer.into_inner().unwrap(), input.as_bytes());
/// ```
pub struct Bai2Writer<W: Write> {
    inner: BufWriter<W>,
    /// Ширина переноса; при `None` берётся из заголовка файла.
    width: Option<usize>,
    /// Количество записанных логических записей.
    records_written: usize,
}

impl<W: Write> Bai2Writer<W> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self { inner: BufWriter::new(writer), width: None, records_written: 0 }
    }

    /// Создаёт writer с заданным размером буфера.
    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self { inner: BufWriter::with_capacity(capacity, writer), width: None, records_written: 0 }
    }

    /// Переносит длинные записи по ширине `width` вместо физической длины
    /// записи из заголовка. `0` отключает перенос.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Записывает все записи `file`.
    pub fn write_file(&mut self, file: &File) -> Result<()> {
        let width = self.width.or_else(|| file.header.line_width());
        for record in file.records(width) {
            self.write_text(&record)?;
        }
        Ok(())
    }

    /// Записывает одну запись.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.write_text(&record.to_bai2(self.width))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.records_written > 0 {
            self.inner.write_all(b"\n")?;
        }
        self.inner.write_all(text.as_bytes())?;
        self.records_written += 1;
        Ok(())
    }

    /// Сбрасывает буфер.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных логических записей.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Возвращает ссылку на внутренний writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Возвращает внутренний writer, предварительно сбросив буфер.
    pub fn into_inner(self) -> std::result::Result<W, std::io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }
}
