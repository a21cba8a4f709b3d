use super::error::ValidationError;
use super::types::*;

/// Check an invoice against a play catalog before pricing it.
/// Returns all validation errors found (not just the first).
///
/// An invoice with no errors here renders without
/// [`BillingError::PlayNotFound`](super::BillingError::PlayNotFound) or
/// [`BillingError::UnknownGenre`](super::BillingError::UnknownGenre).
pub fn validate_invoice<L>(invoice: &Invoice, plays: &L) -> Vec<ValidationError>
where
    L: PlayLookup + ?Sized,
{
    let mut errors = Vec::new();

    if invoice.customer.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer",
            "customer name must not be empty",
        ));
    }

    for (i, performance) in invoice.performances.iter().enumerate() {
        validate_performance(performance, i, plays, &mut errors);
    }

    errors
}

fn validate_performance<L>(
    performance: &Performance,
    index: usize,
    plays: &L,
    errors: &mut Vec<ValidationError>,
) where
    L: PlayLookup + ?Sized,
{
    let prefix = format!("performances[{index}]");

    let Some(play) = plays.play(&performance.play_id) else {
        errors.push(ValidationError::new(
            format!("{prefix}.play_id"),
            format!("no play with id '{}' in catalog", performance.play_id),
        ));
        return;
    };

    if play.genre().is_err() {
        errors.push(ValidationError::new(
            format!("{prefix}.genre"),
            format!(
                "play '{}' has unsupported genre '{}'",
                play.name, play.genre
            ),
        ));
    }
}
