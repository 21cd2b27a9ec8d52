//! The four-list report pipeline.
//!
//! 1. List one: every record, in file order.
//! 2. Lists two and three: records of the first and of the second maker.
//! 3. List four: records of list one whose mileage lies between the two
//!    lists' peak mileages, ranked by mileage.
//!
//! Each stage only runs when the previous one produced records. Output is
//! appended stage by stage and never rolled back.

use carlog_render::tabular::Table;
use carlog_seeker::{filter, peak_value, LinkedSequence};
use tracing::{debug, info};

use crate::error::Result;
use crate::number::NumberFormat;
use crate::record::Record;
use crate::report::{vehicle_table, ReportSink};

pub const FIRST_TITLE: &str = "First list";
pub const SECOND_TITLE: &str = "Second list";
pub const THIRD_TITLE: &str = "Third list";
pub const FOURTH_TITLE: &str = "Fourth list";

pub const FIRST_LIST_EMPTY: &str = "The first list lacks data";
pub const MAKER_LISTS_EMPTY: &str = "The second or third list lacks data";

/// The two maker names. `None` matches no record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Makers {
    pub first: Option<String>,
    pub second: Option<String>,
}

impl Makers {
    pub fn new(first: Option<String>, second: Option<String>) -> Self {
        Self { first, second }
    }
}

/// How far the pipeline got.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The input had no records.
    FirstListEmpty,
    /// A maker selected no records.
    MakerListsEmpty,
    /// Every gate passed. `fourth_len` may be zero.
    Completed {
        peak_first: f64,
        peak_second: f64,
        fourth_len: usize,
    },
}

/// Renders the report for one set of records.
#[derive(Debug, Clone)]
pub struct Pipeline {
    table: Table,
    format: NumberFormat,
}

impl Pipeline {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            table: vehicle_table(),
            format,
        }
    }

    /// Run every stage, writing into `sink`.
    ///
    /// `ask_makers` is called once, after list one has been written, and
    /// only when list one has records.
    pub fn run<S, F>(
        &self,
        first: &LinkedSequence<Record>,
        sink: &mut S,
        ask_makers: F,
    ) -> Result<Outcome>
    where
        S: ReportSink + ?Sized,
        F: FnOnce() -> Result<Makers>,
    {
        if first.is_empty() {
            info!("no records in input");
            sink.append(&line(FIRST_LIST_EMPTY))?;
            return Ok(Outcome::FirstListEmpty);
        }
        sink.append(&self.section(FIRST_TITLE, first.iter()))?;

        let makers = ask_makers()?;
        let second = filter(first, makers.first.as_deref(), None);
        let third = filter(first, None, makers.second.as_deref());
        debug!(
            first_maker = ?makers.first,
            second_maker = ?makers.second,
            second = second.len(),
            third = third.len(),
            "filtered by maker"
        );

        if second.is_empty() || third.is_empty() {
            info!("a maker matched no records");
            sink.append(&line(MAKER_LISTS_EMPTY))?;
            return Ok(Outcome::MakerListsEmpty);
        }
        sink.append(&self.section(SECOND_TITLE, second.iter().copied()))?;
        sink.append(&self.section(THIRD_TITLE, third.iter().copied()))?;

        let peak_first: f64 = peak_value(&second);
        let peak_second: f64 = peak_value(&third);
        let (low, high) = if peak_first > peak_second {
            (peak_second, peak_first)
        } else {
            (peak_first, peak_second)
        };

        let mut fourth = filter(first, low, high);
        debug!(low, high, fourth = fourth.len(), "filtered by mileage");
        if !fourth.is_empty() {
            fourth.sort();
            sink.append(&self.section(FOURTH_TITLE, fourth.iter().copied()))?;
        }

        let first_maker = makers.first.as_deref().unwrap_or_default();
        let second_maker = makers.second.as_deref().unwrap_or_default();
        sink.append(&line(&format!(
            "The biggest mileage from the second list: {} made by {}",
            self.format.format(peak_first),
            first_maker
        )))?;
        sink.append(&line(&format!(
            "The biggest mileage from the third list: {} made by {}",
            self.format.format(peak_second),
            second_maker
        )))?;

        info!(peak_first, peak_second, "report complete");
        Ok(Outcome::Completed {
            peak_first,
            peak_second,
            fourth_len: fourth.len(),
        })
    }

    fn section<'r>(&self, title: &str, records: impl Iterator<Item = &'r Record>) -> String {
        let rows: Vec<Vec<String>> = records.map(|record| record.to_row(&self.format)).collect();
        self.table.render_section(title, &rows)
    }
}

fn line(text: &str) -> String {
    format!("{}\n", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn records(rows: &[(&str, &str, f64)]) -> LinkedSequence<Record> {
        rows.iter()
            .map(|(owner, maker, mileage)| {
                Record::new(*owner, "AAA000", *maker, "Model", 2010, *mileage)
            })
            .collect()
    }

    fn makers(first: &str, second: &str) -> Makers {
        Makers::new(Some(first.to_string()), Some(second.to_string()))
    }

    fn titles(report: &str) -> Vec<&str> {
        report
            .lines()
            .filter(|line| line.ends_with(" list"))
            .collect()
    }

    #[test]
    fn empty_input_writes_single_diagnostic() {
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&LinkedSequence::new(), &mut report, || {
                panic!("makers must not be requested")
            })
            .unwrap();

        assert_eq!(outcome, Outcome::FirstListEmpty);
        assert_eq!(report, "The first list lacks data\n");
    }

    #[test]
    fn unmatched_maker_stops_after_first_list() {
        let list = records(&[("A", "Audi", 100.0), ("B", "BMW", 50.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("Audi", "Volvo")))
            .unwrap();

        assert_eq!(outcome, Outcome::MakerListsEmpty);
        assert_eq!(titles(&report), vec!["First list"]);
        assert!(report.ends_with("\n\nThe second or third list lacks data\n"));
    }

    #[test]
    fn absent_maker_matches_nothing() {
        let list = records(&[("A", "Audi", 100.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(Makers::new(Some("Audi".into()), None)))
            .unwrap();

        assert_eq!(outcome, Outcome::MakerListsEmpty);
    }

    #[test]
    fn padded_maker_does_not_match() {
        let list = records(&[("A", "Audi", 100.0), ("B", "BMW", 50.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers(" Audi", "BMW")))
            .unwrap();

        assert_eq!(outcome, Outcome::MakerListsEmpty);
    }

    #[test]
    fn completed_run_writes_four_sections_and_summary() {
        let list = records(&[
            ("Jonas", "Audi", 210000.5),
            ("Petras", "BMW", 150000.0),
            ("Ona", "audi", 90000.0),
            ("Rasa", "Toyota", 160000.0),
        ]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("Audi", "bmw")))
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                peak_first: 210000.5,
                peak_second: 150000.0,
                fourth_len: 3,
            }
        );
        assert_eq!(
            titles(&report),
            vec!["First list", "Second list", "Third list", "Fourth list"]
        );

        let tail: Vec<&str> = report.lines().rev().take(2).collect();
        assert_eq!(
            tail,
            vec![
                "The biggest mileage from the third list: 150000 made by bmw",
                "The biggest mileage from the second list: 210000.5 made by Audi",
            ]
        );
    }

    #[test]
    fn fourth_list_is_ranked_by_mileage() {
        let list = records(&[
            ("Low", "BMW", 150000.0),
            ("High", "Audi", 210000.5),
            ("Mid", "Toyota", 160000.0),
        ]);
        let mut report = String::new();
        Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("Audi", "BMW")))
            .unwrap();

        let fourth = report
            .split("Fourth list\n")
            .nth(1)
            .expect("fourth section");
        let owners: Vec<&str> = fourth
            .lines()
            .skip(3)
            .take_while(|line| !line.starts_with('-'))
            .map(|line| line.split(' ').next().unwrap_or(""))
            .collect();
        assert_eq!(owners, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn equal_peaks_still_select_matching_mileage() {
        let list = records(&[("A", "Audi", 100.0), ("B", "BMW", 100.0), ("C", "Kia", 99.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("Audi", "BMW")))
            .unwrap();

        assert!(matches!(outcome, Outcome::Completed { fourth_len: 2, .. }));
    }

    #[test]
    fn same_maker_twice_is_allowed() {
        let list = records(&[("A", "Audi", 10.0), ("B", "Audi", 20.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("audi", "AUDI")))
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                peak_first: 20.0,
                peak_second: 20.0,
                fourth_len: 1,
            }
        );
    }

    #[test]
    fn non_positive_mileage_leaves_fourth_list_out() {
        let list = records(&[("A", "Audi", -5.0), ("B", "BMW", -1.0)]);
        let mut report = String::new();
        let outcome = Pipeline::new(NumberFormat::default())
            .run(&list, &mut report, || Ok(makers("Audi", "BMW")))
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                peak_first: 0.0,
                peak_second: 0.0,
                fourth_len: 0,
            }
        );
        assert_eq!(
            titles(&report),
            vec!["First list", "Second list", "Third list"]
        );
        assert!(report.ends_with("made by BMW\n"));
    }

    #[test]
    fn summary_uses_decimal_separator() {
        let list = records(&[("A", "Audi", 12.5), ("B", "BMW", 3.0)]);
        let mut report = String::new();
        Pipeline::new(NumberFormat::new(','))
            .run(&list, &mut report, || Ok(makers("Audi", "BMW")))
            .unwrap();

        assert!(report.contains("The biggest mileage from the second list: 12,5 made by Audi\n"));
    }

    #[test]
    fn first_list_is_written_before_makers_are_requested() {
        struct CountingSink(Rc<Cell<usize>>);

        impl ReportSink for CountingSink {
            fn append(&mut self, _text: &str) -> Result<()> {
                self.0.set(self.0.get() + 1);
                Ok(())
            }
        }

        let writes = Rc::new(Cell::new(0));
        let mut sink = CountingSink(writes.clone());
        let list = records(&[("A", "Audi", 1.0)]);

        let seen = writes.clone();
        Pipeline::new(NumberFormat::default())
            .run(&list, &mut sink, move || {
                assert_eq!(seen.get(), 1);
                Ok(Makers::default())
            })
            .unwrap();
    }
}
