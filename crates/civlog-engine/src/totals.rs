use civlog_types::{FlightRecord, PageTotals};

use crate::classify::{DutyBucket, classify};

pub(crate) fn aggregate(records: &[FlightRecord]) -> PageTotals {
    let mut totals = PageTotals::default();

    for record in records {
        let total = record.total();

        totals.landings += u64::from(record.landings);
        totals.navigation += record.navigation;
        totals.day += record.day;
        totals.night += record.night;
        totals.instrument += record.instrument;
        totals.captain += record.captain;
        totals.total += total;

        match classify(&record.function) {
            Some(DutyBucket::Command) => totals.command += total,
            Some(DutyBucket::Dual) => totals.dual += total,
            Some(DutyBucket::CoPilot) => totals.copilot += total,
            None => {}
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum_totals;
    use civlog_types::{Hours, RecordId};

    fn record(function: &str, day: u64, night: u64, landings: u32) -> FlightRecord {
        FlightRecord {
            id: RecordId::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            aircraft: "PR-EJQ".to_string(),
            crew: String::new(),
            crew_id: String::new(),
            departure: String::new(),
            arrival: String::new(),
            day: Hours::from_tenths(day),
            night: Hours::from_tenths(night),
            navigation: Hours::from_tenths(day),
            instrument: Hours::ZERO,
            captain: Hours::from_tenths(1),
            landings,
            distance: 0.0,
            function: function.to_string(),
            observation: String::new(),
            status: String::new(),
            registration: String::new(),
            exclusion_date: String::new(),
            excluded_by: String::new(),
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(aggregate(&[]).is_zero());
    }

    #[test]
    fn test_buckets_take_total() {
        let records = vec![
            record("Piloto em comando", 10, 5, 1),
            record("Instrutor de voo", 7, 0, 2),
            record("Co-piloto", 0, 3, 1),
            record("Aluno", 4, 4, 1),
        ];
        let totals = aggregate(&records);

        assert_eq!(totals.command, Hours::from_tenths(15));
        assert_eq!(totals.dual, Hours::from_tenths(7));
        assert_eq!(totals.copilot, Hours::from_tenths(3));
        assert_eq!(totals.total, Hours::from_tenths(33));
        assert_eq!(totals.day + totals.night, totals.total);
        assert_eq!(totals.landings, 5);
        assert_eq!(totals.navigation, Hours::from_tenths(21));
        assert_eq!(totals.captain, Hours::from_tenths(4));
    }

    #[test]
    fn test_split_then_sum_matches_whole() {
        let records: Vec<FlightRecord> = (0..7)
            .map(|i| record(["Solo", "Instrução", "Co-piloto"][i % 3], i as u64, 1, 1))
            .collect();
        let whole = aggregate(&records);

        for split in 0..=records.len() {
            let (a, b) = records.split_at(split);
            let parts = [aggregate(a), aggregate(b)];
            assert_eq!(sum_totals(&parts), whole, "split at {}", split);
        }
    }

    #[test]
    fn test_sum_associative_and_commutative() {
        let a = aggregate(&[record("Solo", 3, 1, 1)]);
        let b = aggregate(&[record("Instrutor", 9, 0, 2)]);
        let c = aggregate(&[record("Co-piloto", 1, 6, 0)]);

        assert_eq!(sum_totals(&[a, b, c]), sum_totals(&[c, a, b]));
        assert_eq!(
            sum_totals(&[sum_totals(&[a, b]), c]),
            sum_totals(&[a, sum_totals(&[b, c])])
        );
        let none: [PageTotals; 0] = [];
        assert!(sum_totals(&none).is_zero());
    }
}
