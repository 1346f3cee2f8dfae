//! Property tests for the ledger CSV codec.

use proptest::prelude::*;
use tally_codec::{from_csv, to_csv, CsvTranscoder, FormatTag, Ledger, Transcoder};
use tally_testkit::{
    entry_strategy, example_ledger, ledger_strategy, movement_strategy, EXAMPLE_CSV,
};

proptest! {
    #[test]
    fn csv_roundtrip(ledger in ledger_strategy(16)) {
        let decoded = from_csv(&to_csv(&ledger)).unwrap();
        prop_assert_eq!(decoded.entries(), ledger.entries());
    }

    #[test]
    fn unbalanced_entries_roundtrip(entries in prop::collection::vec(entry_strategy(), 0..16)) {
        let ledger = Ledger::from_entries(entries);
        prop_assert_eq!(from_csv(&to_csv(&ledger)).unwrap(), ledger);
    }

    #[test]
    fn movement_appends_balanced_pair(
        prefix in ledger_strategy(4),
        movement in movement_strategy(),
    ) {
        let mut ledger = prefix.clone();
        movement.apply(&mut ledger);

        prop_assert_eq!(&ledger.entries()[..prefix.len()], prefix.entries());
        let new = &ledger.entries()[prefix.len()..];
        prop_assert_eq!(new.len(), 2);

        prop_assert_eq!(new[0].debit, movement.amount);
        prop_assert_eq!(new[0].credit, 0);
        prop_assert_eq!(&new[0].account, &movement.to_account);

        prop_assert_eq!(new[1].debit, 0);
        prop_assert_eq!(new[1].credit, movement.amount);
        prop_assert_eq!(&new[1].account, &movement.from_account);

        for entry in new {
            prop_assert_eq!(&entry.date, &movement.date);
            prop_assert_eq!(&entry.description, &movement.description);
        }
    }

    #[test]
    fn header_content_is_irrelevant(header in "[^\n]{0,40}", ledger in ledger_strategy(4)) {
        let csv = to_csv(&ledger);
        let body = &csv[csv.iter().position(|&b| b == b'\n').unwrap() + 1..];
        let mut input = header.into_bytes();
        input.push(b'\n');
        input.extend_from_slice(body);
        prop_assert_eq!(from_csv(&input).unwrap(), ledger);
    }

    #[test]
    fn non_binary_tags_are_rejected(ledger in ledger_strategy(2)) {
        let encoded = CsvTranscoder::encode(&ledger).unwrap();
        for tag in FormatTag::ALL {
            let retagged = tally_codec::EncodedValue::new(encoded.data.clone(), tag);
            prop_assert_eq!(CsvTranscoder::decode(&retagged).is_ok(), tag == FormatTag::Binary);
        }
    }
}

#[test]
fn example_ledger_matches_documented_csv() {
    assert_eq!(to_csv(&example_ledger()), EXAMPLE_CSV.as_bytes());
}

#[test]
fn documented_single_movement() {
    let mut ledger = Ledger::new();
    ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
    assert_eq!(
        to_csv(&ledger),
        b"Date,Description,Account,Debit,Credit\n\
          2024-08-30,Payment received,Cash,1500,0\n\
          2024-08-30,Payment received,Accounts Receivable,0,1500\n"
    );
}
