//! Property-based checks of the quoting core against the linear test oracle.
//!
//! 1. **Percent round trip**: encoding the anchor delta of a percent
//!    evaluation recovers the percent within one unit.
//! 2. **Boundary ordering**: every debt target inside the admissible range
//!    quotes; every target outside it fails with its leg's code.
//! 3. **Slippage containment**: guarantees never fall on the wrong side
//!    of the quoted amount.
//! 4. **Aggregation additivity**: totals ignore batching and ordering.
//! 5. **Full repayment conservation**: repaying every debt releases every
//!    unit of collateral.

use futures::executor::block_on;
use proptest::prelude::*;

use crate::aggregate::{plan_repayment, sum_dues, RepaymentChoice};
use crate::domain::{Due, Percent, Position, PositionId, Slippage, Uint112};
use crate::error::FailureCode;
use crate::message::{BorrowGiven, LendGiven};
use crate::testing::{borrow_query, context, engine, lend_query, LinearOracle, Mode};
use crate::traits::CurveOracle;

use super::Boundaries;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn asset_strategy() -> impl Strategy<Value = u64> {
    10u64..=50_000u64
}

fn percent_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

fn slippage_strategy() -> impl Strategy<Value = Slippage> {
    let ppm = (0u32..=1_000_000u32).prop_map(|ppm| {
        let Ok(s) = Slippage::from_ppm(ppm) else {
            panic!("ppm within range");
        };
        s
    });
    let fraction = (0.0f64..=1.0f64).prop_map(|f| {
        let Ok(s) = Slippage::from_fraction(f) else {
            panic!("fraction within range");
        };
        s
    });
    prop_oneof![ppm, fraction]
}

fn due_strategy() -> impl Strategy<Value = Position<Due>> {
    (any::<u64>(), 0u64..=1u64 << 48, 0u64..=1u64 << 48).prop_map(|(id, debt, collateral)| {
        Position::new(
            PositionId::new(id),
            Due::new(Uint112::from_u64(debt), Uint112::from_u64(collateral)),
        )
    })
}

// ---------------------------------------------------------------------------
// Property 1: percent round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_percent_round_trip(a in asset_strategy(), p in percent_strategy()) {
        let oracle = LinearOracle::new(Mode::Normal);
        let point = context().point();
        let asset = Uint112::from_u64(a);
        let Ok(bounds) = block_on(Boundaries::borrow(&oracle, point, asset, Percent::MAX)) else {
            panic!("boundaries evaluate");
        };
        let Ok(codec) = bounds.codec() else {
            panic!("anchors differ");
        };
        let evaluation = oracle.borrow_given_percent(point, asset, Percent::new(p));
        let Ok(outcome) = block_on(evaluation) else {
            panic!("evaluation succeeds");
        };
        let Ok(encoded) = codec.encode(outcome.anchor()) else {
            panic!("anchor encodes");
        };
        prop_assert!(
            encoded.get().abs_diff(p) <= 1,
            "percent {} encoded back as {}",
            p, encoded
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: boundary ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_debt_targets_inside_range_quote(a in asset_strategy(), t in 0u64..=1_000u64) {
        // one year out: debt spans A + A/10 ..= A + A/2
        let low = a + a / 10;
        let high = a + a / 2;
        let target = low + (high - low) * t / 1_000;
        let engine = engine();
        let query = borrow_query(a, BorrowGiven::Debt { debt_in: Uint112::from_u64(target) });
        let result = block_on(engine.quote_borrow(&query));
        prop_assert!(result.is_ok(), "debt {} in [{}, {}] failed: {:?}", target, low, high, result);
    }

    #[test]
    fn prop_debt_targets_outside_range_fail(a in asset_strategy(), gap in 1u64..=1_000u64) {
        let engine = engine();
        let debt = |v| BorrowGiven::Debt {
            debt_in: Uint112::from_u64(v),
        };
        let below = borrow_query(a, debt(a + a / 10 - 1));
        let above = borrow_query(a, debt(a + a / 2 + gap));
        let Err(low) = block_on(engine.quote_borrow(&below)) else {
            panic!("below range must fail");
        };
        let Err(high) = block_on(engine.quote_borrow(&above)) else {
            panic!("above range must fail");
        };
        prop_assert_eq!(low.failure_code(), FailureCode::DebtTooLow);
        prop_assert_eq!(high.failure_code(), FailureCode::DebtTooHigh);
    }
}

// ---------------------------------------------------------------------------
// Property 3: slippage containment
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_borrow_bounds_contain_quote(
        a in asset_strategy(),
        p in percent_strategy(),
        slippage in slippage_strategy(),
    ) {
        let engine = engine();
        let mut query = borrow_query(a, BorrowGiven::Percent { percent: Percent::new(p) });
        query.context.slippage = slippage;
        let Ok(q) = block_on(engine.quote_borrow(&query)) else {
            panic!("percent query quotes");
        };
        let (Some(max_debt), Some(max_collateral)) = (q.max_debt, q.max_collateral) else {
            panic!("bounds present");
        };
        prop_assert!(max_debt >= q.debt);
        prop_assert!(max_collateral >= q.collateral);
    }

    #[test]
    fn prop_lend_guarantees_below_quote(
        a in asset_strategy(),
        p in percent_strategy(),
        slippage in slippage_strategy(),
    ) {
        let engine = engine();
        let mut query = lend_query(a, LendGiven::Percent { percent: Percent::new(p) });
        query.context.slippage = slippage;
        let Ok(q) = block_on(engine.quote_lend(&query)) else {
            panic!("percent query quotes");
        };
        let (Some(min_bond), Some(min_insurance)) = (q.min_bond, q.min_insurance) else {
            panic!("guarantees present");
        };
        prop_assert!(min_bond <= q.bond);
        prop_assert!(min_insurance <= q.insurance);
    }
}

// ---------------------------------------------------------------------------
// Property 4: aggregation additivity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sum_dues_is_additive(
        left in prop::collection::vec(due_strategy(), 0..8),
        right in prop::collection::vec(due_strategy(), 0..8),
    ) {
        let (Ok(l), Ok(r)) = (sum_dues(&left), sum_dues(&right)) else {
            panic!("48-bit dues never overflow");
        };
        let mut all = left.clone();
        all.extend(right.iter().copied());
        let Ok(total) = sum_dues(&all) else {
            panic!("48-bit dues never overflow");
        };
        prop_assert_eq!(total.debt.get(), l.debt.get() + r.debt.get());
        prop_assert_eq!(total.collateral.get(), l.collateral.get() + r.collateral.get());

        all.reverse();
        prop_assert_eq!(sum_dues(&all), Ok(total));
    }
}

// ---------------------------------------------------------------------------
// Property 5: full repayment conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_full_repayment_releases_everything(
        dues in prop::collection::vec(due_strategy(), 0..8),
    ) {
        let choices: Vec<RepaymentChoice> = dues
            .iter()
            .map(|p| RepaymentChoice::new(p.id, p.value, p.value.debt))
            .collect();
        let Ok(plan) = plan_repayment(&choices) else {
            panic!("full repayment is always valid");
        };
        let Ok(total) = sum_dues(&dues) else {
            panic!("48-bit dues never overflow");
        };
        // a zero debt secures nothing and releases nothing
        let securing: u128 = dues
            .iter()
            .filter(|p| !p.value.debt.is_zero())
            .map(|p| p.value.collateral.get())
            .sum();
        prop_assert_eq!(plan.total_debt_paid, total.debt);
        prop_assert_eq!(plan.total_collateral_released.get(), securing);
    }
}
