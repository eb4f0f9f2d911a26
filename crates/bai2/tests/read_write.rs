use std::{fs, path::PathBuf};

use bai2::{
    Bai2Error, ReadOptions,
    record::{FundsType, RecordCodec, TransactionDetail},
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn read_fixture(name: &str) -> bai2::Result<bai2::File> {
    let file = fs::File::open(fixture(name)).expect("fixture exists");
    bai2::read(file)
}

#[test]
fn continuation_file_is_refolded_at_header_width() {
    let file = read_fixture("continuations.txt").unwrap();
    file.validate().unwrap();

    let account = &file.groups[0].accounts[0];
    assert_eq!(account.identifier.summaries.len(), 10);
    assert_eq!(account.details.len(), 2);
    assert_eq!(account.details[0].text, "RETURNED CHEQUE     ");

    let expected = "\
01,0004,12345,060321,0829,001,80,1,2/
02,12345,0004,1,060317,,CAD,/
03,10200123456,CAD,040,+000000000000,,,045,+000000000000,,,046,+000000000000,,/
88,047,+000000000000,,,048,+000000000000,,,049,+000000000000,,,050/
88,+000000000000,,,051,+000000000000,,,052,+000000000000,,,053,+000000000000,,/
16,409,000000000002500,V,060316,1300,,,RETURNED CHEQUE     /
16,409,000000000090000,V,060316,1300,,,RTN-UNKNOWN         /
49,+00000000000834000,14/
98,+00000000001280000,2,25/
99,+00000000001280000,1,27/";
    assert_eq!(file.to_string(), expected);
}

#[test]
fn unwrapped_file_round_trips_byte_for_byte() {
    let input = fs::read_to_string(fixture("simple.txt")).unwrap();
    let file = bai2::read(input.as_bytes()).unwrap();
    file.validate().unwrap();

    assert_eq!(file.header.physical_record_length, None);
    assert_eq!(file.to_string(), input);
}

#[test]
fn lockbox_continuations_fold_into_text() {
    let file = read_fixture("lockbox.txt").unwrap();
    file.validate().unwrap();

    let group = &file.groups[0];
    assert_eq!(group.header.as_of_time.as_deref(), Some("2359"));
    assert_eq!(group.header.as_of_date_modifier, 2);

    let account = &group.accounts[0];
    assert_eq!(account.identifier.account_number, "0975312468");
    assert_eq!(account.identifier.summaries[1].item_count, Some(4));
    assert_eq!(account.identifier.summaries[1].funds_type, FundsType::Immediate);

    let lockbox = &account.details[1];
    assert_eq!(
        lockbox.funds_type,
        FundsType::Distributed {
            immediate_amount: 5_000_000,
            one_day_amount: 4_000_000,
            two_day_amount: 1_000_000,
            lowercase: false,
        }
    );
    assert_eq!(
        lockbox.text,
        "AX13612,B096132,AMALGAMATED CORP. LOCKBOX,DEPOSIT-MISC. RECEIVABLES"
    );
    assert_eq!(file.trailer.number_of_records, 10);
}

#[test]
fn newline_terminated_records() {
    let file = read_fixture("newline_delimited.txt").unwrap();
    file.validate().unwrap();

    let details = &file.groups[0].accounts[0].details;
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].text, "RETURNED CHEQUE,SECOND LINE OF TEXT");
    assert_eq!(details[1].text, "PAYMENT TEXT THAT CONTINUES ON A NEW LINE");
    assert_eq!(file.trailer.number_of_records, 9);
}

#[test]
fn rewrapping_at_the_same_width_is_idempotent() {
    for name in ["continuations.txt", "lockbox.txt", "simple.txt"] {
        let file = read_fixture(name).unwrap();
        for width in [40, 50, 80] {
            let once = file.to_string_with_width(Some(width));
            let reread = bai2::read(once.as_bytes()).unwrap();
            assert_eq!(reread, file, "{name} at {width}");
            assert_eq!(reread.to_string_with_width(Some(width)), once, "{name} at {width}");
        }
    }
}

#[test]
fn long_detail_wraps_within_fifty_columns() {
    let detail = TransactionDetail {
        type_code: "409".into(),
        amount: "+000000000123456".into(),
        funds_type: FundsType::ValueDated {
            date: "230912".into(),
            time: "1530".into(),
            lowercase: false,
        },
        bank_reference_number: "BANKREF000000001".into(),
        customer_reference_number: "CUSTREF000000001".into(),
        text: "PAYMENT FOR INVOICE 2023-0001,PAYMENT FOR INVOICE 2023-0002,\
               PAYMENT FOR INVOICE 2023-0003,REMITTANCE ADVICE TO FOLLOW,THANK YOU"
            .into(),
    };
    let flat = detail.to_bai2(None);
    assert!(flat.len() > 175);

    let wrapped = detail.to_bai2(Some(50));
    let lines: Vec<&str> = wrapped.lines().collect();
    assert!(lines.len() >= 4);
    assert!(lines.iter().all(|line| line.len() <= 50), "{wrapped}");
    assert!(lines[1..].iter().all(|line| line.starts_with("88,")));

    let rejoined = lines[1..].iter().fold(lines[0].trim_end_matches('/').to_string(), |acc, line| {
        format!("{acc},{}", line[3..].trim_end_matches('/'))
    });
    assert_eq!(format!("{rejoined}/"), flat);
}

#[test]
fn lowercase_funds_types_round_trip() {
    let input = "01,0004,12345,060321,0829,001,,,2/\n\
                 02,12345,0004,1,060321,,USD,/\n\
                 03,0001,USD,010,500,,d,1,0,500/\n\
                 16,409,5,v,060316,,,,T/\n\
                 16,409,6,s,1,2,3,,,T/\n\
                 16,409,7,z,,,T/\n\
                 49,18,6/\n\
                 98,18,1,8/\n\
                 99,18,1,10/";
    let file = bai2::read(input.as_bytes()).unwrap();
    file.validate().unwrap();

    let details = &file.groups[0].accounts[0].details;
    assert!(details.iter().all(|detail| detail.funds_type.is_lowercase()));
    assert_eq!(details[0].funds_type.code(), "V");
    assert_eq!(file.to_string(), input);
}

#[test]
fn unknown_first_record() {
    let err = read_fixture("bad_record_code.txt").unwrap_err();
    assert_eq!(err.to_string(), "ERROR parsing file on line 1 (unsupported record type 00)");
}

#[test]
fn invalid_header_date() {
    let err = read_fixture("bad_header_date.txt").unwrap_err();
    assert!(matches!(err, Bai2Error::Record { line: 1, .. }));
    assert_eq!(
        err.to_string(),
        "ERROR parsing file header on line 1 (FileHeader: invalid FileCreatedDate)"
    );
}

#[test]
fn file_trailer_scenario() {
    let input = "01,0004,12345,060321,0829,001,,,2/\n99,+00000000001280000,1,27/";
    let file = bai2::read(input.as_bytes()).unwrap();
    assert_eq!(file.trailer.file_control_total, "+00000000001280000");
    assert_eq!(file.trailer.number_of_groups, 1);
    assert_eq!(file.trailer.number_of_records, 27);
    assert_eq!(file.to_string(), input);
}

#[test]
fn ignore_version_reads_other_versions() {
    let input = "01,0004,12345,060321,0829,001,,,3/\n99,0,0,2/";
    assert!(bai2::read(input.as_bytes()).is_err());

    let options = ReadOptions { ignore_version: true };
    let file = bai2::read_with_options(input.as_bytes(), options).unwrap();
    assert!(file.validate().is_err());
    file.validate_with_options(&options).unwrap();
}

#[test]
fn json_projection_shape() {
    let file = read_fixture("simple.txt").unwrap();
    let json = serde_json::to_value(&file).unwrap();

    assert_eq!(json["sender"], "GSBI");
    assert_eq!(json["fileCreatedDate"], "210706");
    assert_eq!(json["numberOfGroups"], 1);
    let account = &json["Groups"][0]["Accounts"][0];
    assert_eq!(account["accountNumber"], "107049924");
    assert_eq!(account["summaries"][1]["typeCode"], "015");
    assert_eq!(account["Details"][1]["fundsType"]["type_code"], "Z");
    assert_eq!(account["Details"][0]["bankReferenceNumber"], "REF-1");

    let back: bai2::File = serde_json::from_value(json).unwrap();
    assert_eq!(back, file);
}
