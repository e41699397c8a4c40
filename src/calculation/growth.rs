use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::{crawler::screener::table::Statement, util::map::LabeledMap};

/// 營收列在銀行股叫 Revenue
pub const SALES_ROWS: [&str; 2] = ["Sales", "Revenue"];
pub const PROFIT_ROWS: [&str; 1] = ["Net Profit"];
/// 年複合成長率的區間
pub const YEAR_SPANS: [usize; 3] = [10, 5, 3];

const TTM: &str = "TTM";

/// heading => span ("10 Years", "TTM") => percentage
pub type ComputedGrowth = LabeledMap<LabeledMap<Option<Decimal>>>;

/// Compounded annual growth rate in percent, rounded to 2 decimals.
///
/// `None` when there is no span, the start value isn't positive or the end value is negative.
pub fn cagr(start: Decimal, end: Decimal, years: u32) -> Option<Decimal> {
    if years == 0 || start <= Decimal::ZERO || end < Decimal::ZERO {
        return None;
    }

    let ratio = end.checked_div(start)?.to_f64()?;
    let rate = (ratio.powf(1.0 / years as f64) - 1.0) * 100.0;
    if !rate.is_finite() {
        return None;
    }

    Decimal::from_f64(rate).map(|r| r.round_dp(2))
}

/// Growth of the last four quarters over the four before them, in percent.
pub fn trailing_growth(quarters: &[Option<Decimal>]) -> Option<Decimal> {
    if quarters.len() < 8 {
        return None;
    }

    let recent = &quarters[quarters.len() - 4..];
    let previous = &quarters[quarters.len() - 8..quarters.len() - 4];
    let recent = checked_sum(recent)?;
    let previous = checked_sum(previous)?;

    if previous <= Decimal::ZERO {
        return None;
    }

    let growth = recent
        .checked_div(previous)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    Some(growth.round_dp(2))
}

/// 任一季缺值或相加溢位都回傳 None
fn checked_sum(values: &[Option<Decimal>]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add((*v)?))
}

/// CAGR over `years` ending at the last annual column (the `TTM` column is left out).
pub fn compounded_growth(periods: &[String], values: &[Option<Decimal>], years: usize) -> Option<Decimal> {
    let annual: Vec<Option<Decimal>> = periods
        .iter()
        .zip(values)
        .filter(|(period, _)| !period.trim().eq_ignore_ascii_case(TTM))
        .map(|(_, value)| *value)
        .collect();

    let last = annual.len().checked_sub(1)?;
    let first = last.checked_sub(years)?;
    cagr(annual[first]?, annual[last]?, u32::try_from(years).ok()?)
}

fn growth_of(
    profit_loss: Option<&Statement>,
    quarters: Option<&Statement>,
    rows: &[&str],
) -> LabeledMap<Option<Decimal>> {
    let mut spans = LabeledMap::new();

    for years in YEAR_SPANS {
        let value = profit_loss.and_then(|pl| {
            compounded_growth(&pl.periods, pl.find_series(rows)?, years)
        });
        spans.insert(format!("{} Years", years), value);
    }

    let ttm = quarters.and_then(|q| trailing_growth(q.find_series(rows)?));
    spans.insert(TTM, ttm);

    spans
}

/// Sales and net profit growth derived from the profit & loss and quarterly tables.
pub fn compute(profit_loss: Option<&Statement>, quarters: Option<&Statement>) -> ComputedGrowth {
    let mut growth = ComputedGrowth::new();
    growth.insert(
        "Compounded Sales Growth",
        growth_of(profit_loss, quarters, &SALES_ROWS),
    );
    growth.insert(
        "Compounded Profit Growth",
        growth_of(profit_loss, quarters, &PROFIT_ROWS),
    );
    growth
}
