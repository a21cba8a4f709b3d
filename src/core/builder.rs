use super::error::BillingError;
use super::types::*;
use super::validation;

/// Builder for constructing invoices.
///
/// ```
/// use std::collections::HashMap;
/// use playbill::core::*;
///
/// let plays = HashMap::from([
///     ("hamlet".to_string(), Play::new("Hamlet", "tragedy")),
/// ]);
///
/// let invoice = InvoiceBuilder::new("BigCo")
///     .performance("hamlet", 55)
///     .build(&plays)
///     .unwrap();
/// assert_eq!(invoice.performances.len(), 1);
/// ```
pub struct InvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl InvoiceBuilder {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Append a performance of `play_id` with `audience` seats sold.
    pub fn performance(mut self, play_id: impl Into<String>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    pub fn add_performance(mut self, performance: Performance) -> Self {
        self.performances.push(performance);
        self
    }

    /// Build the invoice, validating every performance against `plays`.
    /// Returns all validation errors (not just the first).
    pub fn build<L>(self, plays: &L) -> Result<Invoice, BillingError>
    where
        L: PlayLookup + ?Sized,
    {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice, plays);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BillingError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without checking plays against a catalog.
    pub fn build_unchecked(self) -> Result<Invoice, BillingError> {
        if self.customer.trim().is_empty() {
            return Err(BillingError::Builder("customer name is required".into()));
        }

        Ok(Invoice {
            customer: self.customer,
            performances: self.performances,
        })
    }
}
