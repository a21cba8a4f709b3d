use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::currency::format_usd;
use super::error::BillingError;
use super::pricing::PricingRules;
use super::types::{Invoice, PlayLookup};

/// Line separator used for every line of a rendered statement.
pub const LINE_SEPARATOR: &str = "\n";

/// One priced performance on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Name of the play performed.
    pub play_name: String,
    /// Seats sold.
    pub audience: u32,
    /// Charge in cents.
    pub amount: u64,
    /// Volume credits earned.
    pub credits: u64,
}

/// A fully priced invoice, ready to be rendered.
///
/// Totals are accumulated in the same pass that prices each line, so they
/// always equal the sums of [`StatementLine::amount`] and
/// [`StatementLine::credits`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,
    /// Lines in invoice order.
    pub lines: Vec<StatementLine>,
    /// Sum of all line amounts, in cents.
    pub total_amount: u64,
    /// Sum of all line credits.
    pub total_credits: u64,
    /// Scale factor used when formatting amounts.
    pub cents_per_unit: NonZeroU64,
}

impl Statement {
    /// Price every performance on `invoice`.
    ///
    /// Fails on the first performance whose play is missing from `plays` or
    /// whose genre is unsupported; no partial statement is returned.
    pub fn compute<L>(
        invoice: &Invoice,
        plays: &L,
        rules: &PricingRules,
    ) -> Result<Self, BillingError>
    where
        L: PlayLookup + ?Sized,
    {
        tracing::debug!(
            customer = %invoice.customer,
            performances = invoice.performances.len(),
            "pricing statement"
        );

        let mut lines = Vec::with_capacity(invoice.performances.len());
        let mut total_amount: u64 = 0;
        let mut total_credits: u64 = 0;

        for (index, performance) in invoice.performances.iter().enumerate() {
            let charge = plays
                .require(&performance.play_id)
                .and_then(|play| Ok((play, rules.price(performance, play)?)));
            let (play, charge) = match charge {
                Ok(priced) => priced,
                Err(err) => {
                    tracing::warn!(
                        customer = %invoice.customer,
                        index,
                        play_id = %performance.play_id,
                        error = %err,
                        "statement aborted"
                    );
                    return Err(err);
                }
            };

            tracing::trace!(
                index,
                play_id = %performance.play_id,
                audience = performance.audience,
                amount = charge.amount,
                credits = charge.credits,
                "priced performance"
            );

            total_amount = total_amount.checked_add(charge.amount).ok_or_else(|| {
                BillingError::Arithmetic(format!(
                    "total amount for '{}' overflows",
                    invoice.customer
                ))
            })?;
            total_credits = total_credits.checked_add(charge.credits).ok_or_else(|| {
                BillingError::Arithmetic(format!(
                    "total credits for '{}' overflow",
                    invoice.customer
                ))
            })?;

            lines.push(StatementLine {
                play_name: play.name.clone(),
                audience: performance.audience,
                amount: charge.amount,
                credits: charge.credits,
            });
        }

        Ok(Self {
            customer: invoice.customer.clone(),
            lines,
            total_amount,
            total_credits,
            cents_per_unit: rules.cents_per_unit,
        })
    }

    /// Render as plain text, one `\n`-terminated line per row.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statement for {}{LINE_SEPARATOR}", self.customer)?;
        for line in &self.lines {
            write!(
                f,
                "  {}: {} ({} seats){LINE_SEPARATOR}",
                line.play_name,
                format_usd(line.amount, self.cents_per_unit),
                line.audience
            )?;
        }
        write!(
            f,
            "Amount owed is {}{LINE_SEPARATOR}",
            format_usd(self.total_amount, self.cents_per_unit)
        )?;
        write!(f, "You earned {} credits{LINE_SEPARATOR}", self.total_credits)
    }
}

/// Render the statement for `invoice` under the default price list.
pub fn render_statement<L>(invoice: &Invoice, plays: &L) -> Result<String, BillingError>
where
    L: PlayLookup + ?Sized,
{
    render_statement_with(invoice, plays, &PricingRules::default())
}

/// Render the statement for `invoice` under `rules`.
pub fn render_statement_with<L>(
    invoice: &Invoice,
    plays: &L,
    rules: &PricingRules,
) -> Result<String, BillingError>
where
    L: PlayLookup + ?Sized,
{
    Statement::compute(invoice, plays, rules).map(|statement| statement.to_text())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::types::{Performance, Play};

    fn catalog() -> HashMap<String, Play> {
        HashMap::from([
            ("hamlet".to_string(), Play::new("Hamlet", "tragedy")),
            ("as-like".to_string(), Play::new("As You Like It", "comedy")),
            ("othello".to_string(), Play::new("Othello", "tragedy")),
        ])
    }

    fn invoice(performances: Vec<Performance>) -> Invoice {
        Invoice {
            customer: "BigCo".into(),
            performances,
        }
    }

    #[test]
    fn single_tragedy_statement() {
        let text =
            render_statement(&invoice(vec![Performance::new("hamlet", 55)]), &catalog()).unwrap();
        assert_eq!(
            text,
            "Statement for BigCo\n  Hamlet: $650.00 (55 seats)\nAmount owed is $650.00\nYou earned 25 credits\n"
        );
    }

    #[test]
    fn empty_invoice_renders_zero_totals() {
        let text = render_statement(&invoice(vec![]), &catalog()).unwrap();
        assert_eq!(
            text,
            "Statement for BigCo\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
    }

    #[test]
    fn totals_are_line_sums() {
        let statement = Statement::compute(
            &invoice(vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ]),
            &catalog(),
            &PricingRules::default(),
        )
        .unwrap();

        let amounts: Vec<u64> = statement.lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![65_000, 58_000, 50_000]);
        assert_eq!(statement.total_amount, 173_000);
        assert_eq!(statement.total_credits, 25 + 12 + 10);
    }

    #[test]
    fn missing_play_aborts() {
        let result = render_statement(
            &invoice(vec![
                Performance::new("hamlet", 55),
                Performance::new("macbeth", 10),
            ]),
            &catalog(),
        );
        assert_eq!(result, Err(BillingError::PlayNotFound("macbeth".into())));
    }

    #[test]
    fn unknown_genre_aborts() {
        let mut plays = catalog();
        plays.insert("henry-v".into(), Play::new("Henry V", "history"));
        let result = render_statement(
            &invoice(vec![
                Performance::new("henry-v", 53),
                Performance::new("hamlet", 55),
            ]),
            &plays,
        );
        assert_eq!(result, Err(BillingError::UnknownGenre("history".into())));
    }

    #[test]
    fn custom_scale_factor_used_for_formatting() {
        let rules = PricingRules {
            cents_per_unit: NonZeroU64::new(1000).unwrap(),
            ..PricingRules::default()
        };
        let text = render_statement_with(
            &invoice(vec![Performance::new("hamlet", 55)]),
            &catalog(),
            &rules,
        )
        .unwrap();
        assert!(text.contains("  Hamlet: $65.00 (55 seats)\n"));
    }
}
