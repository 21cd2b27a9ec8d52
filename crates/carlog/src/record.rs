//! Vehicle records and the capabilities the seeker algorithms need.

use std::cmp::Ordering;

use carlog_seeker::{MakerMembership, MileageRange, PeakSearch, Ranking};

use crate::number::NumberFormat;

/// One owner and vehicle entry from the input file.
///
/// Records are immutable once built. Mileage doubles as the peak-search
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    owner_name: String,
    plate_number: String,
    maker: String,
    model: String,
    year: i32,
    mileage: f64,
}

impl Record {
    pub fn new(
        owner_name: impl Into<String>,
        plate_number: impl Into<String>,
        maker: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
    ) -> Self {
        Self {
            owner_name: owner_name.into(),
            plate_number: plate_number.into(),
            maker: maker.into(),
            model: model.into(),
            year,
            mileage,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn plate_number(&self) -> &str {
        &self.plate_number
    }

    pub fn maker(&self) -> &str {
        &self.maker
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Cells for one report row, in column order.
    pub fn to_row(&self, format: &NumberFormat) -> Vec<String> {
        vec![
            self.owner_name.clone(),
            self.plate_number.clone(),
            self.maker.clone(),
            self.model.clone(),
            self.year.to_string(),
            format.format(self.mileage),
        ]
    }

    fn same_maker(&self, other: Option<&str>) -> bool {
        other.is_some_and(|other| other.to_lowercase() == self.maker.to_lowercase())
    }
}

impl Ranking for Record {
    /// Higher mileage first; equal mileage falls back to maker order.
    fn compare(&self, other: Option<&Self>) -> Ordering {
        let Some(other) = other else {
            return Ordering::Greater;
        };
        match other
            .mileage
            .partial_cmp(&self.mileage)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self.maker.cmp(&other.maker),
            ordering => ordering,
        }
    }
}

impl PeakSearch for Record {
    type Value = f64;

    fn peak_search_value(&self) -> f64 {
        self.mileage
    }
}

impl MakerMembership for Record {
    // Equality with either endpoint, not lexical betweenness.
    fn maker_in_inclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool {
        self.same_maker(from) || self.same_maker(to)
    }

    fn maker_outside_exclusive_range(&self, from: Option<&str>, to: Option<&str>) -> bool {
        !self.same_maker(from) || !self.same_maker(to)
    }
}

impl MileageRange for Record {
    fn mileage_in_inclusive_range(&self, from: f64, to: f64) -> bool {
        from <= self.mileage && self.mileage <= to
    }

    fn mileage_outside_exclusive_range(&self, from: f64, to: f64) -> bool {
        self.mileage <= from || self.mileage >= to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlog_seeker::{filter, filter_outside, peak_value, LinkedSequence};

    fn car(maker: &str, mileage: f64) -> Record {
        Record::new("Owner", "AAA000", maker, "Model", 2010, mileage)
    }

    #[test]
    fn higher_mileage_ranks_first() {
        assert_eq!(car("Audi", 200.0).compare(Some(&car("Audi", 100.0))), Ordering::Less);
        assert_eq!(car("Audi", 100.0).compare(Some(&car("Audi", 200.0))), Ordering::Greater);
    }

    #[test]
    fn equal_mileage_ranks_by_maker() {
        assert_eq!(car("Audi", 5.0).compare(Some(&car("BMW", 5.0))), Ordering::Less);
        assert_eq!(car("BMW", 5.0).compare(Some(&car("BMW", 5.0))), Ordering::Equal);
        // Ordinal: uppercase sorts before lowercase.
        assert_eq!(car("audi", 5.0).compare(Some(&car("Audi", 5.0))), Ordering::Greater);
    }

    #[test]
    fn absent_other_ranks_below() {
        assert_eq!(car("Audi", 0.0).compare(None), Ordering::Greater);
    }

    #[test]
    fn maker_range_matches_either_endpoint() {
        let toyota = car("Toyota", 1.0);
        assert!(toyota.maker_in_inclusive_range(Some("TOYOTA"), None));
        assert!(toyota.maker_in_inclusive_range(None, Some("toyota")));
        assert!(toyota.maker_in_inclusive_range(Some("Audi"), Some("Toyota")));
        // Lexically between, but equal to neither endpoint.
        assert!(!toyota.maker_in_inclusive_range(Some("Saab"), Some("Volvo")));
        assert!(!toyota.maker_in_inclusive_range(None, None));
    }

    #[test]
    fn maker_range_ignores_unicode_case() {
        let skoda = car("Škoda", 1.0);
        assert!(skoda.maker_in_inclusive_range(Some("šKODA"), None));
    }

    #[test]
    fn maker_outside_is_true_unless_both_endpoints_match() {
        let audi = car("Audi", 1.0);
        assert!(audi.maker_outside_exclusive_range(Some("Audi"), Some("BMW")));
        assert!(audi.maker_outside_exclusive_range(None, None));
        assert!(!audi.maker_outside_exclusive_range(Some("audi"), Some("AUDI")));
    }

    #[test]
    fn mileage_ranges() {
        let record = car("Audi", 100.0);
        assert!(record.mileage_in_inclusive_range(100.0, 200.0));
        assert!(record.mileage_in_inclusive_range(50.0, 100.0));
        assert!(!record.mileage_in_inclusive_range(100.5, 200.0));
        assert!(record.mileage_outside_exclusive_range(100.0, 200.0));
        assert!(!record.mileage_outside_exclusive_range(50.0, 150.0));
    }

    #[test]
    fn peak_of_records() {
        let records: LinkedSequence<Record> = [10.0, 250.5, 87.3]
            .into_iter()
            .map(|m| car("Audi", m))
            .collect();
        assert_eq!(peak_value(&records), 250.5);
    }

    #[test]
    fn maker_filter_is_case_insensitive_and_ordered() {
        let records: LinkedSequence<Record> = vec![
            Record::new("A", "1", "toyota", "Yaris", 2001, 1.0),
            Record::new("B", "2", "Honda", "Civic", 2002, 2.0),
            Record::new("C", "3", "TOYOTA", "Corolla", 2003, 3.0),
        ]
        .into_iter()
        .collect();

        let toyotas = filter(&records, Some("Toyota"), None);
        let owners: Vec<&str> = toyotas.iter().map(|r| r.owner_name()).collect();
        assert_eq!(owners, vec!["A", "C"]);
    }

    #[test]
    fn maker_filter_outside_keeps_everything_for_distinct_makers() {
        let records: LinkedSequence<Record> =
            vec![car("Audi", 1.0), car("BMW", 2.0)].into_iter().collect();
        assert_eq!(filter_outside(&records, Some("Audi"), Some("BMW")).len(), 2);
    }

    #[test]
    fn to_row_uses_number_format() {
        let record = Record::new("Jonas Jonaitis", "ABC123", "Audi", "A4", 2009, 87.3);
        assert_eq!(
            record.to_row(&NumberFormat::new(',')),
            vec!["Jonas Jonaitis", "ABC123", "Audi", "A4", "2009", "87,3"]
        );
    }
}
