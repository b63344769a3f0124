//! Recommendation Filter: picks catalog entries for a classified vibe and a budget answer.
//!
//! Pure and deterministic. Never fails: the worst case is the whole catalog.

use tracing::debug;

use crate::catalog::budget::BudgetRange;
use crate::catalog::products::Product;
use crate::style::classifier::ClassificationResult;

/// Selects products matching both the vibe and the budget, in catalog order.
///
/// Fallbacks when nothing matches both:
/// 1. finite budget → every product in the budget, vibe ignored
/// 2. `Flexible` budget → the whole catalog
///
/// The vibe is not checked against the known tags; an unknown vibe simply matches nothing.
pub fn select(
    catalog: &[Product],
    classification: &ClassificationResult,
    budget_answer: &str,
) -> Vec<Product> {
    let budget = BudgetRange::from_answer(budget_answer);

    let primary: Vec<Product> = catalog
        .iter()
        .filter(|p| p.vibe.eq_ignore_ascii_case(&classification.vibe))
        .filter(|p| budget.contains(p.price_value()))
        .cloned()
        .collect();

    if !primary.is_empty() {
        return primary;
    }

    if budget.is_unrestricted() {
        debug!(vibe = %classification.vibe, "No vibe matches, returning full catalog");
        return catalog.to_vec();
    }

    debug!(vibe = %classification.vibe, ?budget, "No vibe matches, falling back to budget only");
    catalog
        .iter()
        .filter(|p| budget.contains(p.price_value()))
        .cloned()
        .collect()
}
