//! Sorted views of every stay, parked and departed.
//!
//! Both listings sort a copy with a stable sort, so stays with equal keys keep
//! their arrival order. The registry itself is never reordered.

use crate::billing::Tariff;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::StayStore;

use super::helpers::stay_views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOrder {
    EntryDate,
    Registration,
}

pub fn run<S: StayStore>(store: &S, tariff: &Tariff, order: HistoryOrder) -> Result<CmdResult> {
    let mut views = stay_views(store, tariff)?;
    match order {
        HistoryOrder::EntryDate => views.sort_by(|a, b| a.entry_date.cmp(&b.entry_date)),
        HistoryOrder::Registration => views.sort_by(|a, b| a.registration.cmp(&b.registration)),
    }
    Ok(CmdResult::default().with_listed_stays(views))
}

pub fn by_entry_date<S: StayStore>(store: &S, tariff: &Tariff) -> Result<CmdResult> {
    run(store, tariff, HistoryOrder::EntryDate)
}

pub fn by_registration<S: StayStore>(store: &S, tariff: &Tariff) -> Result<CmdResult> {
    run(store, tariff, HistoryOrder::Registration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::depart;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn sample() -> InMemoryStore {
        StoreFixture::new()
            .with_parked("MMM222", "2024-03-01", false)
            .with_departed("ZZZ999", "2024-01-15", "2024-01-20", true)
            .with_parked("AAA111", "2024-02-10", false)
            .with_departed("MMM222", "2024-01-01", "2024-01-11", false)
            .store
    }

    #[test]
    fn sorts_by_entry_date() {
        let result = by_entry_date(&sample(), &Tariff::default()).unwrap();
        let dates: Vec<_> = result
            .listed_stays
            .iter()
            .map(|v| v.entry_date.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-15", "2024-02-10", "2024-03-01"]);
    }

    #[test]
    fn sorts_by_registration_stably() {
        let result = by_registration(&sample(), &Tariff::default()).unwrap();
        let rows: Vec<_> = result
            .listed_stays
            .iter()
            .map(|v| (v.registration.as_str(), v.entry_date.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("AAA111", "2024-02-10"),
                ("MMM222", "2024-03-01"),
                ("MMM222", "2024-01-01"),
                ("ZZZ999", "2024-01-15"),
            ]
        );
    }

    #[test]
    fn both_orders_hold_the_same_stays() {
        let store = sample();
        let mut by_date: Vec<_> = by_entry_date(&store, &Tariff::default())
            .unwrap()
            .listed_stays
            .into_iter()
            .map(|v| v.id)
            .collect();
        let mut by_reg: Vec<_> = by_registration(&store, &Tariff::default())
            .unwrap()
            .listed_stays
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_ne!(by_date, by_reg);
        by_date.sort();
        by_reg.sort();
        assert_eq!(by_date, by_reg);
    }

    #[test]
    fn departed_rows_carry_cost() {
        let result = by_entry_date(&sample(), &Tariff::default()).unwrap();
        let first = &result.listed_stays[0];
        assert_eq!(first.days, Some(10));
        assert_eq!(first.cost, Some(1200));
        let parked = &result.listed_stays[3];
        assert_eq!(parked.cost, None);
    }

    #[test]
    fn listing_does_not_reorder_registry() {
        let mut store = sample();
        by_registration(&store, &Tariff::default()).unwrap();

        // MMM222 arrived first on 2024-03-01 and is still the open stay
        let result = depart::run(&mut store, &Tariff::default(), "MMM222", "2024-03-02").unwrap();
        assert_eq!(result.receipt.unwrap().entry_date.as_str(), "2024-03-01");
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(by_entry_date(&store, &Tariff::default())
            .unwrap()
            .listed_stays
            .is_empty());
    }
}
