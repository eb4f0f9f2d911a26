//! Reader, validator and writer for BAI2 bank balance reporting files.
//!
//! A BAI2 file is a nested set of envelopes:
//!
//! - **File** (`01` ... `99`) holds groups
//! - **Group** (`02` ... `98`) holds accounts
//! - **Account** (`03` ... `49`) holds transaction details (`16`)
//!
//! Any record may overflow onto `88` continuation records. [`read`] folds
//! them back into their owner; [`File`]'s `Display` folds long records
//! again at the header's physical record length.
//!
//! # Quick start
//!
//! ```
//! let input = "01,0004,12345,060321,0829,001,80,1,2/\n\
//!              02,12345,0004,1,060321,0829,,/\n\
//!              03,10200123456,CAD,040,+000000000000,,/\n\
//!              16,409,000000000002500,V,060316,,,,RETURNED CHEQUE/\n\
//!              49,+000000000002500,3/\n\
//!              98,+000000000002500,1,5/\n\
//!              99,+000000000002500,1,7/";
//!
//! let file = bai2::read(input.as_bytes()).unwrap();
//! file.validate().unwrap();
//!
//! let detail = &file.groups[0].accounts[0].details[0];
//! assert_eq!(detail.text, "RETURNED CHEQUE");
//! assert_eq!(file.to_string(), input);
//! ```

pub mod error;
pub mod field;
pub mod model;
pub mod reader;
pub mod record;
pub mod scanner;
pub mod validate;
pub mod writer;

mod wrap;

pub use error::{Bai2Error, Result};
pub use model::{Account, File, Group};
pub use reader::{ReadOptions, read, read_with_options};
pub use writer::Bai2Writer;
