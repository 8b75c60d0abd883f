use crate::error::RuleViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_CRITERIA_LEN: usize = 300;
pub const MAX_ELIGIBILITY_LEN: usize = 300;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_AWARD_CRITERIA_LEN: usize = 200;
pub const MAX_PAYMENT_TERMS_LEN: usize = 200;
pub const MAX_DELIVERY_TERMS_LEN: usize = 200;

/// The reserved burn identity. Never a valid registry owner.
pub const BURN_PRINCIPAL: &str = "SP000000000000000000002Q6VF78";

/// An agency or account identity, as supplied by the surrounding runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn burn() -> Self {
        Self(BURN_PRINCIPAL.to_string())
    }

    pub fn is_burn(&self) -> bool {
        self.0 == BURN_PRINCIPAL
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenderType {
    Open,
    Restricted,
    Negotiated,
}

impl FromStr for TenderType {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "restricted" => Ok(Self::Restricted),
            "negotiated" => Ok(Self::Negotiated),
            _ => Err(RuleViolation::InvalidTenderType),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationMethod {
    LowestPrice,
    BestValue,
    Scored,
}

impl FromStr for EvaluationMethod {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowest-price" => Ok(Self::LowestPrice),
            "best-value" => Ok(Self::BestValue),
            "scored" => Ok(Self::Scored),
            _ => Err(RuleViolation::InvalidEvaluationMethod),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl FromStr for Currency {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STX" => Ok(Self::Stx),
            "USD" => Ok(Self::Usd),
            "BTC" => Ok(Self::Btc),
            _ => Err(RuleViolation::InvalidCurrency),
        }
    }
}

/// The caller-supplied fields of a tender creation request.
///
/// The three enumerated fields stay raw strings here: parsing them is a
/// validation rule with a fixed position in the rule order, so it must not
/// happen during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderDraft {
    pub description: String,
    pub submission_deadline: u64,
    pub evaluation_criteria: String,
    pub budget: u64,
    pub eligibility_requirements: String,
    pub tender_type: String,
    pub evaluation_method: String,
    pub contract_duration: u64,
    pub location: String,
    pub currency: String,
    pub min_bid: u64,
    pub max_bid: u64,
    pub start_date: u64,
    pub end_date: u64,
    pub award_criteria: String,
    pub payment_terms: String,
    pub delivery_terms: String,
}

/// A stored tender record. Value-like: updates replace the whole record at
/// a given id rather than mutating fields in place from outside the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tender {
    /// Sequential identifier, assigned by the store. Immutable.
    pub id: u64,
    pub description: String,
    pub submission_deadline: u64,
    pub evaluation_criteria: String,
    pub budget: u64,
    pub eligibility_requirements: String,
    pub created_at: u64,
    pub last_modified_at: u64,
    /// The agency that created the tender. Immutable; the sole authority
    /// for updates.
    pub creator: Principal,
    pub tender_type: TenderType,
    pub evaluation_method: EvaluationMethod,
    pub contract_duration: u64,
    pub location: String,
    pub currency: Currency,
    /// Always `true`: no close or cancel transition is exposed.
    pub status: bool,
    pub min_bid: u64,
    pub max_bid: u64,
    pub start_date: u64,
    pub end_date: u64,
    pub award_criteria: String,
    pub payment_terms: String,
    pub delivery_terms: String,
}

impl Tender {
    /// Builds the record for a validated draft. The id is a placeholder
    /// until the store assigns the real one on insert.
    pub fn from_draft(
        draft: &TenderDraft,
        creator: Principal,
        now: u64,
    ) -> Result<Self, RuleViolation> {
        Ok(Self {
            id: 0,
            description: draft.description.clone(),
            submission_deadline: draft.submission_deadline,
            evaluation_criteria: draft.evaluation_criteria.clone(),
            budget: draft.budget,
            eligibility_requirements: draft.eligibility_requirements.clone(),
            created_at: now,
            last_modified_at: now,
            creator,
            tender_type: draft.tender_type.parse()?,
            evaluation_method: draft.evaluation_method.parse()?,
            contract_duration: draft.contract_duration,
            location: draft.location.clone(),
            currency: draft.currency.parse()?,
            status: true,
            min_bid: draft.min_bid,
            max_bid: draft.max_bid,
            start_date: draft.start_date,
            end_date: draft.end_date,
            award_criteria: draft.award_criteria.clone(),
            payment_terms: draft.payment_terms.clone(),
            delivery_terms: draft.delivery_terms.clone(),
        })
    }
}

/// The mutable subset of a tender: the only fields `update_tender` touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderRevision {
    pub description: String,
    pub submission_deadline: u64,
    pub budget: u64,
}

/// The single most-recent update applied to a tender. One slot per id,
/// overwritten on each update; deliberately not a history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderUpdateRecord {
    pub description: String,
    pub submission_deadline: u64,
    pub budget: u64,
    pub timestamp: u64,
    pub updater: Principal,
}
