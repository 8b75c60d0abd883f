use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// A violated registry rule.
///
/// This is a closed taxonomy: callers distinguish failures purely by kind,
/// never by message text. Every variant carries a stable numeric code so
/// API consumers can switch on codes rather than parse messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("caller is not authorized")]
    NotAuthorized,
    #[error("description must be 1-500 characters")]
    InvalidDescription,
    #[error("submission deadline must be in the future")]
    InvalidDeadline,
    #[error("evaluation criteria must be 1-300 characters")]
    InvalidCriteria,
    #[error("budget must be positive")]
    InvalidBudget,
    #[error("eligibility requirements must be 1-300 characters")]
    InvalidEligibility,
    #[error("a tender with this description already exists")]
    TenderAlreadyExists,
    #[error("tender not found")]
    TenderNotFound,
    #[error("registry owner already configured")]
    AlreadyConfigured,
    #[error("registry owner is not configured")]
    RegistryNotReady,
    #[error("minimum bid must be positive")]
    InvalidMinBid,
    #[error("maximum bid must be positive")]
    InvalidMaxBid,
    #[error("registry owner cannot be the burn identity")]
    InvalidOwner,
    #[error("update parameters are invalid")]
    InvalidUpdateParam,
    #[error("maximum number of tenders reached")]
    MaxTendersExceeded,
    #[error("unknown tender type")]
    InvalidTenderType,
    #[error("unknown evaluation method")]
    InvalidEvaluationMethod,
    #[error("contract duration must be positive")]
    InvalidContractDuration,
    #[error("location must be 1-100 characters")]
    InvalidLocation,
    #[error("unknown currency")]
    InvalidCurrency,
    #[error("creation fee transfer failed")]
    FeeTransferFailed,
    #[error("start date must not be in the past")]
    InvalidStartDate,
    #[error("end date must be after start date")]
    InvalidEndDate,
    #[error("award criteria must be 1-200 characters")]
    InvalidAwardCriteria,
    #[error("payment terms must be 1-200 characters")]
    InvalidPaymentTerms,
    #[error("delivery terms must be 1-200 characters")]
    InvalidDeliveryTerms,
}

impl RuleViolation {
    /// Stable numeric code for this violation.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidDescription => 101,
            Self::InvalidDeadline => 102,
            Self::InvalidCriteria => 103,
            Self::InvalidBudget => 104,
            Self::InvalidEligibility => 105,
            Self::TenderAlreadyExists => 106,
            Self::TenderNotFound => 107,
            Self::AlreadyConfigured => 108,
            Self::RegistryNotReady => 109,
            Self::InvalidMinBid => 110,
            Self::InvalidMaxBid => 111,
            Self::InvalidOwner => 112,
            Self::InvalidUpdateParam => 113,
            Self::MaxTendersExceeded => 114,
            Self::InvalidTenderType => 115,
            Self::InvalidEvaluationMethod => 116,
            Self::InvalidContractDuration => 117,
            Self::InvalidLocation => 118,
            Self::InvalidCurrency => 119,
            Self::FeeTransferFailed => 120,
            Self::InvalidStartDate => 121,
            Self::InvalidEndDate => 122,
            Self::InvalidAwardCriteria => 123,
            Self::InvalidPaymentTerms => 124,
            Self::InvalidDeliveryTerms => 125,
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
