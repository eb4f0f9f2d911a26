//! # e2e-tests - End-to-end тесты бинарника `bai2`
//!
//! Тесты из `tests/` запускают бинарник из `tools/bai2-cli` на выписках
//! из `fixtures/`:
//! - `continuations.txt`: записи, перенесённые в строки `88` по 80 колонкам
//! - `simple.txt`: короткие записи без физической длины записи
//! - `bad_header_date.txt`: заголовок файла с 13-м месяцем
//! - `version_three.txt`: заголовок файла с версией 3

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
