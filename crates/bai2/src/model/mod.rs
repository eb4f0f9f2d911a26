//! Типизированная иерархия BAI2: [`File`] владеет [`Group`], те владеют
//! [`Account`], а счета владеют деталями транзакций.
//!
//! Значения получаются из [`read`](crate::reader::read) или собираются
//! поле за полем; в обоих случаях [`File::validate`] их проверяет,
//! а `Display` для [`File`] записывает обратно.

mod display;
mod types;
mod validation;

pub use types::{Account, File, Group};
