//! Проверки формата полей, общие для кодеков записей.

use std::sync::LazyLock;

use regex::Regex;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])$").expect("valid date regex")
});
static TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid time regex"));
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid amount regex"));
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{3}$").expect("valid currency regex"));
static TYPE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("valid type code regex"));

/// `YYMMDD`: месяц 01-12, день 01-31.
pub fn is_date(input: &str) -> bool {
    DATE.is_match(input)
}

/// `HHMM`, четыре цифры.
pub fn is_time(input: &str) -> bool {
    TIME.is_match(input)
}

/// Строка целого со знаком, например `+000000000000` или `-150`.
pub fn is_amount(input: &str) -> bool {
    AMOUNT.is_match(input)
}

/// Трёхбуквенный ISO код валюты.
pub fn is_currency_code(input: &str) -> bool {
    CURRENCY.is_match(input)
}

/// Трёхзначный BAI2 код типа.
pub fn is_type_code(input: &str) -> bool {
    TYPE_CODE.is_match(input)
}
