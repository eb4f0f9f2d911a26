//! Модуль ошибок чтения, валидации и записи BAI2.

use std::fmt;

use thiserror::Error;

/// Ошибка чтения одного поля логической записи.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Курсор стоит в конце записи или за ним.
    #[error("not enough input")]
    NotEnoughInput,

    /// Поле не завершается ни `,`, ни `/`, ни переводом строки.
    #[error("no delimiter")]
    NoDelimiter,

    /// Поле не является десятичным целым со знаком.
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
}

/// Ошибка кодека записи.
///
/// Каждое сообщение начинается с имени записи, например
/// `FileHeader: invalid Sender`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Текст не соответствует грамматике записи.
    #[error("{record}: unable to parse {field}")]
    Parse {
        /// Имя записи.
        record: &'static str,
        /// Поле, которое не удалось прочитать.
        field: &'static str,
    },

    /// Поле прочитано, но нарушает правило формата.
    #[error("{record}: invalid {field}")]
    Invalid {
        /// Имя записи.
        record: &'static str,
        /// Некорректное поле.
        field: &'static str,
    },
}

impl RecordError {
    pub(crate) const fn parse(record: &'static str, field: &'static str) -> Self {
        Self::Parse { record, field }
    }

    pub(crate) const fn invalid(record: &'static str, field: &'static str) -> Self {
        Self::Invalid { record, field }
    }
}

/// Открытый конверт в момент появления неожиданного кода записи.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Группа не открыта.
    File,
    /// Открыта группа, счёт не открыт.
    Group,
    /// Открыт счёт.
    Account,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Group => "group",
            Self::Account => "account",
        })
    }
}

/// Главная ошибка крейта.
#[derive(Debug, Error)]
pub enum Bai2Error {
    // === I/O ошибки ===
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Логическая запись не является корректным UTF-8.
    #[error("Invalid UTF-8 in record: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // === Ошибки структуры ===
    /// Код записи недопустим в текущем конверте.
    #[error("ERROR parsing {scope} on line {line} (unsupported record type {code})")]
    UnsupportedRecord {
        /// Самый вложенный открытый конверт.
        scope: Scope,
        /// Номер логической записи (1-based).
        line: usize,
        /// Прочитанный двухсимвольный код.
        code: String,
    },

    /// Кодек отклонил запись при чтении.
    #[error("ERROR parsing {context} on line {line} ({source})")]
    Record {
        /// Название записи, например `file header`.
        context: &'static str,
        /// Номер логической записи (1-based).
        line: usize,
        /// Ошибка кодека.
        source: RecordError,
    },

    // === Ошибки валидации ===
    /// Запись собранного файла нарушает правило формата.
    #[error(transparent)]
    Validation(#[from] RecordError),
}

/// Сокращение для результатов с [`Bai2Error`].
pub type Result<T> = std::result::Result<T, Bai2Error>;
