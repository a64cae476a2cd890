//! Works ("obras") page tests
//!
//! Tests for project tracking including:
//! - Budget validation on create and on budget edit
//! - Search over name, location, responsible and status
//! - Budget totals

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{AutoConfirm, NewObra, ObraStatus, ObraTotals, ObrasPage, ValidationError};

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_obra(name: &str, budget: i64, spent: i64) -> NewObra {
    NewObra {
        name: name.to_string(),
        location: "Arequipa".to_string(),
        responsible: "Ing. Paredes".to_string(),
        budget: dec(budget),
        spent: dec(spent),
        ..NewObra::starting(date(2025, 9, 1))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_search_fields() {
        let mut page = ObrasPage::with_demo_data();

        page.set_search("lima");
        assert_eq!(page.filtered().len(), 1);

        page.set_search("salazar");
        assert_eq!(page.filtered()[0].name, "Colegio San Pedro");

        page.set_search("finalizada");
        assert_eq!(page.filtered()[0].name, "Plaza de Huanchaco");

        page.set_search(" ");
        assert_eq!(page.filtered().len(), 3);
    }

    #[test]
    fn test_add_validates_budget() {
        let mut page = ObrasPage::with_demo_data();

        assert_eq!(
            page.add(new_obra("Puente", 100, 101)).unwrap_err(),
            ValidationError::SpentExceedsBudget
        );
        assert_eq!(
            page.add(new_obra("Puente", -100, 0)).unwrap_err(),
            ValidationError::Negative { field: "budget" }
        );
        assert_eq!(
            page.add(new_obra("", 100, 0)).unwrap_err(),
            ValidationError::Required { field: "name" }
        );
        assert_eq!(page.obras().len(), 3);

        let obra = page.add(new_obra(" Puente ", 100, 100)).unwrap();
        assert_eq!(obra.id, 4);
        assert_eq!(obra.name, "Puente");
        assert_eq!(obra.status, ObraStatus::Active);
        assert_eq!(page.obras()[0].id, 4);
    }

    #[test]
    fn test_add_form_starts_active_without_end_date() {
        let mut page = ObrasPage::with_demo_data();
        page.toggle_add_form();

        let draft = page.draft_mut().unwrap();
        assert_eq!(draft.status, ObraStatus::Active);
        assert_eq!(draft.end_date, None);
        draft.name = "Hospital Chimbote".to_string();
        draft.budget = dec(10);

        page.submit_add_form().unwrap();
        assert!(!page.is_add_form_open());
        assert_eq!(page.obras()[0].name, "Hospital Chimbote");
    }

    #[test]
    fn test_budget_edit_below_spent_is_rejected() {
        let mut page = ObrasPage::with_demo_data();

        page.begin_edit(2).unwrap();
        page.buffer_mut().unwrap().budget = dec(400_000);
        assert_eq!(page.commit_edit().unwrap_err(), ValidationError::SpentExceedsBudget);

        assert_eq!(page.editing_id(), None);
        let colegio = page.obras().iter().find(|o| o.id == 2).unwrap();
        assert_eq!(colegio.budget, dec(800_000));
    }

    #[test]
    fn test_budget_edit_keeps_status() {
        let mut page = ObrasPage::with_demo_data();

        page.begin_edit(3).unwrap();
        assert_eq!(page.buffer_mut().unwrap().budget, dec(500_000));
        page.buffer_mut().unwrap().budget = dec(600_000);
        let plaza = page.commit_edit().unwrap();

        assert_eq!(plaza.budget, dec(600_000));
        assert_eq!(plaza.status, ObraStatus::Finished);
        assert_eq!(plaza.balance().unwrap(), dec(101_500));
    }

    #[test]
    fn test_delete_edited_obra_clears_marker() {
        let mut page = ObrasPage::with_demo_data();
        page.begin_edit(1).unwrap();

        assert!(page.delete(1, &AutoConfirm(true)).unwrap());
        assert_eq!(page.editing_id(), None);
        assert_eq!(page.obras().len(), 2);
    }

    #[test]
    fn test_totals_follow_filter() {
        let mut page = ObrasPage::with_demo_data();
        page.set_search("trujillo");

        let totals = page.totals().unwrap();
        assert_eq!(totals.budget, dec(500_000));
        assert_eq!(totals.spent, dec(498_500));
        assert_eq!(totals.balance, dec(1_500));
    }

    #[test]
    fn test_budget_totals_overflow_is_reported() {
        let mut page = ObrasPage::new(Vec::new());
        let budget = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        for name in ["Torre Norte", "Torre Sur"] {
            let mut input = new_obra(name, 0, 0);
            input.budget = budget;
            page.add(input).unwrap();
        }

        assert_eq!(
            page.totals(),
            Err(ValidationError::OutOfRange { field: "budget" })
        );

        page.set_search("norte");
        assert_eq!(page.totals().unwrap().budget, budget);
    }

    #[test]
    fn test_active_count() {
        let mut page = ObrasPage::with_demo_data();
        assert_eq!(page.active_count(), 1);
        page.add(new_obra("Puente", 10, 0)).unwrap();
        assert_eq!(page.active_count(), 2);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn amount_strategy() -> impl Strategy<Value = i64> {
        0i64..10_000_000
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A work is accepted exactly when spent <= budget
        #[test]
        fn prop_create_enforces_spent_within_budget(
            budget in amount_strategy(),
            spent in amount_strategy()
        ) {
            let mut page = ObrasPage::new(Vec::new());
            let accepted = page.add(new_obra("Puente", budget, spent)).is_ok();
            prop_assert_eq!(accepted, spent <= budget);
            prop_assert_eq!(page.obras().len(), usize::from(accepted));
        }

        /// Balance is always budget minus spent
        #[test]
        fn prop_balance_is_budget_minus_spent(
            pairs in prop::collection::vec((amount_strategy(), amount_strategy()), 0..10)
        ) {
            let mut page = ObrasPage::new(Vec::new());
            for (budget, spent) in pairs {
                let (budget, spent) = (budget.max(spent), budget.min(spent));
                page.add(new_obra("Puente", budget, spent)).unwrap();
            }
            let totals = ObraTotals::compute(page.obras()).unwrap();
            prop_assert_eq!(totals.balance, totals.budget - totals.spent);
            prop_assert!(totals.balance >= Decimal::ZERO);
        }

        /// The budget edit never leaves spent above budget
        #[test]
        fn prop_budget_edit_keeps_invariant(new_budget in amount_strategy()) {
            let mut page = ObrasPage::with_demo_data();
            page.begin_edit(1).unwrap();
            page.buffer_mut().unwrap().budget = dec(new_budget);
            let _ = page.commit_edit();

            let obra = page.obras().iter().find(|o| o.id == 1).unwrap();
            prop_assert!(obra.spent <= obra.budget);
            prop_assert_eq!(page.editing_id(), None);
        }
    }
}
