//! Сборка логических записей в [`File`].
//!
//! Записи читаются по одной из [`RecordScanner`]. Сборщик держит не более
//! одной открытой группы, одного открытого счёта и одной сырой записи,
//! к которой ещё могут прийти продолжения `88`. Каждая запись попадает
//! в самый вложенный открытый конверт.

use std::io::{BufReader, Read};

use tracing::{debug, trace};

use crate::{
    error::{Bai2Error, RecordError, Result, Scope},
    model::{Account, File, Group},
    record::{
        AccountIdentifier, AccountTrailer, FileHeader, FileTrailer, GroupHeader, GroupTrailer,
        RecordCode, RecordCodec, TransactionDetail,
    },
    scanner::RecordScanner,
};

/// Опции для [`read_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Принимать заголовки файла с версией, отличной от 2.
    pub ignore_version: bool,
}

/// Читает BAI2 поток целиком.
///
/// Останавливается на первой ошибке структуры, парсинга или валидации.
///
/// ```
/// let input = "01,0004,12345,060321,0829,001,80,1,2/\n\
///              02,12345,0004,1,060317,,CAD,/\n\
///              03,10200123456,CAD,040,+000000000000,,/\n\
///              49,+000000000000,2/\n\
///              98,+000000000000,1,4/\n\
///              99,+000000000000,1,6/";
///
/// let file = bai2::read(input.as_bytes()).unwrap();
/// assert_eq!(file.groups[0].accounts[0].identifier.account_number, "10200123456");
/// assert_eq!(file.to_string(), input);
/// ```
pub fn read<R: Read>(reader: R) -> Result<File> {
    read_with_options(reader, ReadOptions::default())
}

/// Читает BAI2 поток целиком с явными опциями.
pub fn read_with_options<R: Read>(reader: R, options: ReadOptions) -> Result<File> {
    let mut scanner = RecordScanner::new(BufReader::new(reader));
    let mut assembler = Assembler::new(options);

    while let Some(record) = scanner.next_record()? {
        let line = scanner.line_index();
        trace!(line, record = %record, "logical record");
        if assembler.push(&record, line)?.is_done() {
            return Ok(assembler.file);
        }
    }

    assembler.finish(scanner.line_index())
}

enum Flow {
    Continue,
    Done,
}

impl Flow {
    fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Запись, которая хранится текстом, пока не известны её продолжения.
///
/// Ошибки парсинга сообщаются с номером записи, которая её закрыла.
struct Pending {
    raw: String,
}

impl Pending {
    fn new(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }

    /// Присоединяет `88,...` к записи, заменяя её терминатор запятой.
    fn append(&mut self, continuation: &str) {
        let body = continuation.get(3..).filter(|b| !b.is_empty()).unwrap_or("/");
        if self.raw.ends_with('/') {
            self.raw.pop();
        }
        self.raw.push(',');
        self.raw.push_str(body);
    }
}

struct Assembler {
    options: ReadOptions,
    file: File,
    group: Option<Group>,
    account: Option<Account>,
    identifier: Option<Pending>,
    detail: Option<Pending>,
}

impl Assembler {
    fn new(options: ReadOptions) -> Self {
        Self {
            options,
            file: File::default(),
            group: None,
            account: None,
            identifier: None,
            detail: None,
        }
    }

    fn scope(&self) -> Scope {
        if self.account.is_some() {
            Scope::Account
        } else if self.group.is_some() {
            Scope::Group
        } else {
            Scope::File
        }
    }

    fn push(&mut self, record: &str, line: usize) -> Result<Flow> {
        if record.len() < 3 {
            return Ok(Flow::Continue);
        }

        let scope = self.scope();
        let unsupported = || Bai2Error::UnsupportedRecord {
            scope,
            line,
            code: record.get(..2).unwrap_or(record).to_string(),
        };
        let Some(code) = RecordCode::from_prefix(record) else {
            return Err(unsupported());
        };

        match (scope, code) {
            (Scope::File, RecordCode::FileHeader) => {
                let (header, _) = FileHeader::parse_with_options(record, &self.options)
                    .map_err(|source| wrap_error(code, line, source))?;
                self.file.header = header;
            }
            (Scope::File, RecordCode::GroupHeader) => {
                let header: GroupHeader = parse(record, line)?;
                debug!(line, originator = %header.originator, "group opened");
                self.group = Some(Group { header, ..Group::default() });
            }
            (Scope::File, RecordCode::FileTrailer) => {
                self.file.trailer = parse::<FileTrailer>(record, line)?;
                debug!(line, groups = self.file.groups.len(), "file trailer reached");
                return Ok(Flow::Done);
            }
            (Scope::Group | Scope::Account, RecordCode::AccountIdentifier) => {
                self.close_account(line)?;
                debug!(line, "account opened");
                self.account = Some(Account::default());
                self.identifier = Some(Pending::new(record));
            }
            (Scope::Group, RecordCode::GroupTrailer) => {
                let trailer: GroupTrailer = parse(record, line)?;
                if let Some(mut group) = self.group.take() {
                    group.trailer = trailer;
                    debug!(line, accounts = group.accounts.len(), "group closed");
                    self.file.groups.push(group);
                }
            }
            (Scope::Account, RecordCode::TransactionDetail) => {
                self.resolve_identifier(line)?;
                self.resolve_detail(line)?;
                self.detail = Some(Pending::new(record));
            }
            (Scope::Account, RecordCode::Continuation) => {
                match (self.detail.as_mut(), self.identifier.as_mut()) {
                    (Some(detail), _) => detail.append(record),
                    (None, Some(identifier)) => identifier.append(record),
                    (None, None) => return Err(unsupported()),
                }
            }
            (Scope::Account, RecordCode::AccountTrailer) => {
                self.resolve_identifier(line)?;
                self.resolve_detail(line)?;
                let trailer: AccountTrailer = parse(record, line)?;
                if let Some(account) = self.account.as_mut() {
                    account.trailer = trailer;
                }
                self.close_account(line)?;
            }
            _ => return Err(unsupported()),
        }

        Ok(Flow::Continue)
    }

    fn resolve_identifier(&mut self, line: usize) -> Result<()> {
        let Some(pending) = self.identifier.take() else {
            return Ok(());
        };
        let identifier: AccountIdentifier = parse(&pending.raw, line)?;
        if let Some(account) = self.account.as_mut() {
            account.identifier = identifier;
        }
        Ok(())
    }

    fn resolve_detail(&mut self, line: usize) -> Result<()> {
        let Some(pending) = self.detail.take() else {
            return Ok(());
        };
        let detail: TransactionDetail = parse(&pending.raw, line)?;
        if let Some(account) = self.account.as_mut() {
            account.details.push(detail);
        }
        Ok(())
    }

    /// Переносит открытый счёт (если есть) в открытую группу.
    fn close_account(&mut self, line: usize) -> Result<()> {
        self.resolve_identifier(line)?;
        self.resolve_detail(line)?;
        if let Some(account) = self.account.take() {
            debug!(
                account = %account.identifier.account_number,
                details = account.details.len(),
                "account closed"
            );
            if let Some(group) = self.group.as_mut() {
                group.accounts.push(account);
            }
        }
        Ok(())
    }

    /// Сбрасывает всё открытое, если вход закончился без `99`.
    /// В `line` передаётся номер последней прочитанной записи.
    fn finish(mut self, line: usize) -> Result<File> {
        self.close_account(line)?;
        if let Some(group) = self.group.take() {
            debug!(accounts = group.accounts.len(), "unterminated group flushed");
            self.file.groups.push(group);
        }
        Ok(self.file)
    }
}

fn parse<T: RecordCodec>(record: &str, line: usize) -> Result<T> {
    T::parse(record).map(|(value, _)| value).map_err(|source| wrap_error(T::CODE, line, source))
}

fn wrap_error(code: RecordCode, line: usize, source: RecordError) -> Bai2Error {
    Bai2Error::Record { context: code.context(), line, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FundsType;

    const HEADER: &str = "01,0004,12345,060321,0829,001,80,1,2/";
    const GROUP: &str = "02,12345,0004,1,060321,0829,USD,2/";

    fn read_str(input: &str) -> Result<File> {
        read(input.as_bytes())
    }

    #[test]
    fn assembles_hierarchy() {
        let input = [
            HEADER,
            GROUP,
            "03,0001,USD,010,500000,,/",
            "16,409,100,0,BANK1,CUST1,FIRST/",
            "16,409,200,1,BANK2,CUST2,SECOND/",
            "49,300,4/",
            "03,0002,USD,010,0,,/",
            "49,0,2/",
            "98,300,2,8/",
            "99,300,1,10/",
        ]
        .join("\n");

        let file = read_str(&input).unwrap();
        assert_eq!(file.header.physical_record_length, Some(80));
        assert_eq!(file.groups.len(), 1);

        let group = &file.groups[0];
        assert_eq!(group.trailer.number_of_accounts, 2);
        assert_eq!(group.accounts.len(), 2);
        assert_eq!(group.accounts[0].details.len(), 2);
        assert_eq!(group.accounts[0].details[1].funds_type, FundsType::OneDay);
        assert_eq!(group.accounts[0].trailer.number_of_records, 4);
        assert_eq!(group.accounts[1].identifier.account_number, "0002");
        assert!(group.accounts[1].details.is_empty());
        assert_eq!(file.trailer.number_of_records, 10);
    }

    #[test]
    fn continuations_fold_into_detail_text() {
        let input = [
            HEADER,
            GROUP,
            "03,0001,USD,010,500000,,/",
            "16,409,100,0,BANK1,CUST1,PAYMENT FOR/",
            "88,INVOICE 1/",
            "88,INVOICE 2/",
            "49,100,5/",
            "98,100,1,7/",
            "99,100,1,9/",
        ]
        .join("\n");

        let file = read_str(&input).unwrap();
        let detail = &file.groups[0].accounts[0].details[0];
        assert_eq!(detail.text, "PAYMENT FOR,INVOICE 1,INVOICE 2");
    }

    #[test]
    fn continuations_fold_into_identifier_summaries() {
        let input = [
            HEADER,
            GROUP,
            "03,10200123456,CAD,040,+000000000000,,/",
            "88,045,+000000000000,4,0/",
            "16,409,100,0,,,TEXT/",
            "49,100,4/",
        ]
        .join("\n");

        let file = read_str(&input).unwrap();
        let account = &file.groups[0].accounts[0];
        assert_eq!(account.identifier.summaries.len(), 2);
        assert_eq!(account.identifier.summaries[1].type_code, "045");
        assert_eq!(account.identifier.summaries[1].item_count, Some(4));
        assert_eq!(account.details.len(), 1);
    }

    #[test]
    fn unknown_code_at_file_scope() {
        let err = read_str("00,abc/").unwrap_err();
        assert_eq!(err.to_string(), "ERROR parsing file on line 1 (unsupported record type 00)");
    }

    #[test]
    fn detail_outside_account_is_rejected() {
        let input = [HEADER, GROUP, "16,409,100,0,,,TEXT/"].join("\n");
        let err = read_str(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR parsing group on line 3 (unsupported record type 16)"
        );
    }

    #[test]
    fn orphan_continuation_is_rejected() {
        let input = [HEADER, GROUP, "03,0001,USD,010,5,,/", "49,5,2/", "88,X/"].join("\n");
        let err = read_str(&input).unwrap_err();
        assert!(matches!(err, Bai2Error::UnsupportedRecord { scope: Scope::Group, line: 5, .. }));
    }

    #[test]
    fn codec_errors_carry_line_and_context() {
        let input = [HEADER, GROUP, "03,0001,USD,010,5,,/", "49,5,2/", "98,5,1,x/"].join("\n");
        let err = read_str(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR parsing group trailer on line 5 (GroupTrailer: unable to parse NumberOfRecords)"
        );
    }

    #[test]
    fn held_records_report_the_resolving_line() {
        let input = [HEADER, GROUP, "03,0001,US,010,5,,/", "16,409,5,0,,,T/"].join("\n");
        let err = read_str(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR parsing account identifier on line 4 (AccountIdentifier: invalid CurrencyCode)"
        );

        let input = [
            HEADER,
            GROUP,
            "03,0001,USD,010,5,,/",
            "16,40,5,0,,,T/",
            "88,MORE/",
            "88,TEXT/",
            "49,5,5/",
        ]
        .join("\n");
        let err = read_str(&input).unwrap_err();
        assert!(matches!(err, Bai2Error::Record { context: "transaction detail", line: 7, .. }));
    }

    #[test]
    fn held_record_at_eof_reports_last_line() {
        let input = [HEADER, GROUP, "03,0001,USD,010,5,,/", "16,409,x,0,,,T/", "88,MORE/"].join("\n");
        let err = read_str(&input).unwrap_err();
        assert!(matches!(err, Bai2Error::Record { line: 5, .. }));
    }

    #[test]
    fn stops_at_file_trailer() {
        let input = format!("{HEADER}\n99,0,0,2/\ngarbage that is never read");
        let file = read_str(&input).unwrap();
        assert_eq!(file.trailer.number_of_records, 2);
    }

    #[test]
    fn open_envelopes_flushed_at_eof() {
        let input = [HEADER, GROUP, "03,0001,USD,010,5,,/", "16,409,5,0,,,T/"].join("\n");
        let file = read_str(&input).unwrap();
        assert_eq!(file.groups.len(), 1);
        assert_eq!(file.groups[0].accounts[0].details.len(), 1);
    }

    #[test]
    fn version_option() {
        let input = "01,0004,12345,060321,0829,001,80,1,3/";
        let err = read_str(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR parsing file header on line 1 (FileHeader: invalid VersionNumber)"
        );

        let file = read_with_options(input.as_bytes(), ReadOptions { ignore_version: true }).unwrap();
        assert_eq!(file.header.version_number, 3);
    }
}
