//! Per-month cost table

use std::io::Write;

use super::Renderer;
use super::colors::{date_fg, money_fg, subheader_fg, text_fg};
use super::formatting::{event_count, format_money, pad_left, pad_right};
use crate::constants::layout::{BUDGET_COST_WIDTH, BUDGET_NAME_WIDTH};
use crate::error::AppError;
use crate::pipeline::BudgetSummary;

/// Renders the budget of a season: one table per month and the season total.
pub fn render_budget<W: Write>(
    renderer: &mut Renderer<W>,
    season: &str,
    summary: &BudgetSummary,
) -> Result<(), AppError> {
    renderer.header(&format!("BUDGET {season}"))?;

    for month in &summary.months {
        renderer.blank()?;
        renderer.line(
            0,
            &[
                (subheader_fg(), &pad_right(&month.key.title(month.month_name.as_deref()), BUDGET_NAME_WIDTH + 2)),
                (text_fg(), &pad_left(&event_count(month.lines.len()), 14)),
                (money_fg(), &pad_left(&format_money(month.total), BUDGET_COST_WIDTH)),
            ],
        )?;

        for line in &month.lines {
            renderer.line(
                2,
                &[
                    (text_fg(), &pad_right(&line.name, BUDGET_NAME_WIDTH)),
                    (date_fg(), &pad_right(line.date.as_deref().unwrap_or(""), 14)),
                    (money_fg(), &pad_left(&format_money(line.cost), BUDGET_COST_WIDTH)),
                ],
            )?;

            let payment = match (line.payment_deadline.as_deref(), line.payee.as_deref()) {
                (Some(deadline), Some(payee)) => Some(format!("Betala senast {deadline} till {payee}")),
                (Some(deadline), None) => Some(format!("Betala senast {deadline}")),
                (None, Some(payee)) => Some(format!("Betalas till {payee}")),
                (None, None) => None,
            };
            if let Some(payment) = payment {
                renderer.line(4, &[(text_fg(), &payment)])?;
            }
        }
    }

    renderer.blank()?;
    renderer.line(
        0,
        &[
            (subheader_fg(), &pad_right("Totalt för säsongen", BUDGET_NAME_WIDTH + 16)),
            (money_fg(), &pad_left(&format_money(summary.total), BUDGET_COST_WIDTH)),
        ],
    )?;
    renderer.flush()
}
