//! Pure validation rules for tender creation and update.
//!
//! The creation rules run in a fixed order and short-circuit on the first
//! violation. The order is an observable contract: callers rely on
//! receiving the first applicable code, so it must never be rearranged.

use crate::domain::tender::{
    Currency, EvaluationMethod, TenderDraft, TenderType, MAX_AWARD_CRITERIA_LEN, MAX_CRITERIA_LEN,
    MAX_DELIVERY_TERMS_LEN, MAX_DESCRIPTION_LEN, MAX_ELIGIBILITY_LEN, MAX_LOCATION_LEN,
    MAX_PAYMENT_TERMS_LEN,
};
use crate::error::RuleViolation;

fn text_in_range(text: &str, max: usize) -> bool {
    !text.is_empty() && text.chars().count() <= max
}

/// Field-level creation checks (capacity through delivery terms).
///
/// The remaining creation rules need collaborators or registry state and
/// run in the orchestrator, after these and in this order: agency
/// verification, description uniqueness, owner readiness.
pub fn validate_creation(
    draft: &TenderDraft,
    now: u64,
    next_id: u64,
    max_tenders: u64,
) -> Result<(), RuleViolation> {
    if next_id >= max_tenders {
        return Err(RuleViolation::MaxTendersExceeded);
    }
    if !text_in_range(&draft.description, MAX_DESCRIPTION_LEN) {
        return Err(RuleViolation::InvalidDescription);
    }
    if draft.submission_deadline <= now {
        return Err(RuleViolation::InvalidDeadline);
    }
    if !text_in_range(&draft.evaluation_criteria, MAX_CRITERIA_LEN) {
        return Err(RuleViolation::InvalidCriteria);
    }
    if draft.budget == 0 {
        return Err(RuleViolation::InvalidBudget);
    }
    if !text_in_range(&draft.eligibility_requirements, MAX_ELIGIBILITY_LEN) {
        return Err(RuleViolation::InvalidEligibility);
    }
    draft.tender_type.parse::<TenderType>()?;
    draft.evaluation_method.parse::<EvaluationMethod>()?;
    if draft.contract_duration == 0 {
        return Err(RuleViolation::InvalidContractDuration);
    }
    if !text_in_range(&draft.location, MAX_LOCATION_LEN) {
        return Err(RuleViolation::InvalidLocation);
    }
    draft.currency.parse::<Currency>()?;
    if draft.min_bid == 0 {
        return Err(RuleViolation::InvalidMinBid);
    }
    if draft.max_bid == 0 {
        return Err(RuleViolation::InvalidMaxBid);
    }
    if draft.start_date < now {
        return Err(RuleViolation::InvalidStartDate);
    }
    if draft.end_date <= draft.start_date {
        return Err(RuleViolation::InvalidEndDate);
    }
    if !text_in_range(&draft.award_criteria, MAX_AWARD_CRITERIA_LEN) {
        return Err(RuleViolation::InvalidAwardCriteria);
    }
    if !text_in_range(&draft.payment_terms, MAX_PAYMENT_TERMS_LEN) {
        return Err(RuleViolation::InvalidPaymentTerms);
    }
    if !text_in_range(&draft.delivery_terms, MAX_DELIVERY_TERMS_LEN) {
        return Err(RuleViolation::InvalidDeliveryTerms);
    }
    Ok(())
}

/// Field checks for `update_tender`. All three fields share one code.
pub fn validate_update_fields(
    description: &str,
    submission_deadline: u64,
    budget: u64,
    now: u64,
) -> Result<(), RuleViolation> {
    if !text_in_range(description, MAX_DESCRIPTION_LEN) {
        return Err(RuleViolation::InvalidUpdateParam);
    }
    if submission_deadline <= now {
        return Err(RuleViolation::InvalidUpdateParam);
    }
    if budget == 0 {
        return Err(RuleViolation::InvalidUpdateParam);
    }
    Ok(())
}
