//! Property tests for salary derivation and the payroll ledger.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use staff_payroll::hiring::EmployeeBuilder;
use staff_payroll::models::{PayModifier, VariantTag};
use staff_payroll::payroll::{ManualClock, PayrollLedger};

/// Amounts in cents, up to one million.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn modifier() -> impl Strategy<Value = PayModifier> {
    prop_oneof![
        (money(), "[a-z]{1,12}").prop_map(|(amount, reason)| PayModifier::bonus(amount, reason)),
        ((0i64..2_000).prop_map(|h| Decimal::new(h, 1)), money())
            .prop_map(|(hours, rate)| PayModifier::overtime(hours, rate)),
        ("[A-Z][a-z]{1,12}", money())
            .prop_map(|(name, allowance)| PayModifier::certification(name, allowance)),
    ]
}

fn variant() -> impl Strategy<Value = VariantTag> {
    prop_oneof![
        Just(VariantTag::Salaried),
        Just(VariantTag::Hourly),
        Just(VariantTag::Contract),
    ]
}

fn hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

proptest! {
    #[test]
    fn salary_is_base_pay_plus_contributions(
        variant in variant(),
        base in money(),
        modifiers in prop::collection::vec(modifier(), 0..6),
    ) {
        let plain = EmployeeBuilder::new(1, "Prop", "Test")
            .variant(variant)
            .base_salary(base)
            .hire_date(hire_date())
            .build();
        let decorated = modifiers
            .iter()
            .cloned()
            .fold(plain.clone(), |employee, modifier| employee.with_modifier(modifier));

        let contributions: Decimal = modifiers.iter().map(PayModifier::contribution).sum();
        prop_assert_eq!(decorated.calculate_salary(), plain.calculate_salary() + contributions);
        prop_assert_eq!(decorated.salary_breakdown().unwrap().total, decorated.calculate_salary());
    }

    #[test]
    fn modifier_order_does_not_change_salary(
        base in money(),
        modifiers in prop::collection::vec(modifier(), 0..6),
    ) {
        let forward = modifiers
            .iter()
            .cloned()
            .fold(EmployeeBuilder::new(1, "A", "B").base_salary(base), |b, m| b.modifier(m))
            .build();
        let reversed = modifiers
            .iter()
            .rev()
            .cloned()
            .fold(EmployeeBuilder::new(1, "A", "B").base_salary(base), |b, m| b.modifier(m))
            .build();

        prop_assert_eq!(forward.calculate_salary(), reversed.calculate_salary());
    }

    #[test]
    fn benefits_list_every_modifier_in_order(
        modifiers in prop::collection::vec(modifier(), 1..6),
    ) {
        let employee = modifiers
            .iter()
            .cloned()
            .fold(EmployeeBuilder::new(1, "A", "B").hire_date(hire_date()), |b, m| b.modifier(m))
            .build();
        let benefits = employee.benefits();

        let mut cursor = 0;
        for modifier in &modifiers {
            let line = modifier.description();
            let found = benefits[cursor..].find(&line);
            prop_assert!(found.is_some(), "{} missing from {}", line, benefits);
            cursor += found.unwrap_or(0) + line.len();
        }
    }

    #[test]
    fn hourly_pay_ignores_base_salary(
        hours in 0u32..80,
        rate_cents in 0i64..20_000,
        base in money(),
    ) {
        let rate = Decimal::new(rate_cents, 2);
        let employee = EmployeeBuilder::new(1, "A", "B")
            .variant(VariantTag::Hourly)
            .hours_per_week(hours)
            .hourly_rate(rate)
            .base_salary(base)
            .build();

        prop_assert_eq!(employee.calculate_salary(), rate * Decimal::from(hours) * Decimal::from(4));
    }

    #[test]
    fn ledger_pays_once_per_day(
        salary in money(),
        runs_per_day in prop::collection::vec(1usize..4, 1..8),
    ) {
        let clock = Arc::new(ManualClock::new(hire_date()));
        let ledger = PayrollLedger::new(clock.clone());
        let employee = EmployeeBuilder::new(7, "A", "B").base_salary(salary).build();

        for runs in &runs_per_day {
            let mut paid = 0;
            for _ in 0..*runs {
                if ledger.process_payroll(&employee).unwrap().is_processed() {
                    paid += 1;
                }
            }
            prop_assert_eq!(paid, 1);
            clock.advance_days(1);
        }

        let days = Decimal::from(runs_per_day.len());
        prop_assert_eq!(ledger.get_total_paid(7), salary * days);
        prop_assert_eq!(ledger.history(7).len(), runs_per_day.len());
    }
}
