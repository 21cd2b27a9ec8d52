//! Property-based tests for the data file and the report pipeline.

use carlog::{parse_records, Makers, NumberFormat, Outcome, Pipeline, Record};
use carlog_seeker::LinkedSequence;
use proptest::prelude::*;

const SUMMARY_PREFIX: &str = "The biggest mileage from the ";

fn text_field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,12}"
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        text_field(),
        text_field(),
        text_field(),
        text_field(),
        1900i32..2030,
        0u32..3_000_000,
    )
        .prop_map(|(owner, plate, maker, model, year, tenths)| {
            Record::new(owner, plate, maker, model, year, f64::from(tenths) / 10.0)
        })
}

fn render_line(record: &Record, format: &NumberFormat) -> String {
    [
        record.owner_name().to_string(),
        record.plate_number().to_string(),
        record.maker().to_string(),
        record.model().to_string(),
        record.year().to_string(),
        format.format(record.mileage()),
    ]
    .join("; ")
}

proptest! {
    #[test]
    fn well_formed_lines_parse_back(
        records in prop::collection::vec(record_strategy(), 0..20),
        separator in prop::sample::select(vec!['.', ',']),
    ) {
        let format = NumberFormat::new(separator);
        let content: String = records
            .iter()
            .map(|record| render_line(record, &format) + "\n")
            .collect();

        let parsed = parse_records(&content, &format).unwrap();
        let parsed: Vec<&Record> = parsed.iter().collect();

        prop_assert_eq!(parsed.len(), records.len());
        for (got, want) in parsed.into_iter().zip(&records) {
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn matching_makers_end_with_two_summary_lines(
        records in prop::collection::vec(record_strategy(), 1..20),
        first_pick in any::<prop::sample::Index>(),
        second_pick in any::<prop::sample::Index>(),
    ) {
        let first = records[first_pick.index(records.len())].maker().to_string();
        let second = records[second_pick.index(records.len())].maker().to_string();
        let list: LinkedSequence<Record> = records.into_iter().collect();

        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || {
                Ok(Makers::new(Some(first.clone()), Some(second.clone())))
            })
            .unwrap();

        let is_completed = matches!(outcome, Outcome::Completed { .. });
        prop_assert!(is_completed);
        let summaries: Vec<&str> = report
            .lines()
            .filter(|line| line.starts_with(SUMMARY_PREFIX))
            .collect();
        prop_assert_eq!(summaries.len(), 2);

        let tail: Vec<&str> = report.lines().rev().take(2).collect();
        let second_line = format!("{}third list: ", SUMMARY_PREFIX);
        let first_line = format!("{}second list: ", SUMMARY_PREFIX);
        prop_assert!(tail[0].starts_with(&second_line));
        let second_suffix = format!(" made by {}", second);
        prop_assert!(tail[0].ends_with(&second_suffix));
        prop_assert!(tail[1].starts_with(&first_line));
        let first_suffix = format!(" made by {}", first);
        prop_assert!(tail[1].ends_with(&first_suffix));
    }
}
