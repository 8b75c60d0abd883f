use crate::domain::ports::{AgencyAuthorizerBox, FeeTransferBox, TenderStoreBox};
use crate::domain::tender::{Principal, Tender, TenderDraft, TenderRevision, TenderUpdateRecord};
use crate::domain::validation;
use crate::error::RuleViolation;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_TENDERS: u64 = 10_000;
pub const DEFAULT_CREATION_FEE: u64 = 5_000;

/// The tender registry state machine.
///
/// Owns the store and the process-scoped configuration (owner, fee,
/// capacity) and drives every operation through validation and
/// authorization before any mutation. Calls are processed one at a time to
/// completion; each storage operation is awaited, so every mutating call is
/// transactional as observed by the next call.
pub struct TenderRegistry {
    store: TenderStoreBox,
    authorizer: AgencyAuthorizerBox,
    transfer: FeeTransferBox,
    owner: Option<Principal>,
    creation_fee: u64,
    max_tenders: u64,
}

impl TenderRegistry {
    pub fn new(
        store: TenderStoreBox,
        authorizer: AgencyAuthorizerBox,
        transfer: FeeTransferBox,
    ) -> Self {
        Self {
            store,
            authorizer,
            transfer,
            owner: None,
            creation_fee: DEFAULT_CREATION_FEE,
            max_tenders: DEFAULT_MAX_TENDERS,
        }
    }

    pub fn with_max_tenders(mut self, max_tenders: u64) -> Self {
        self.max_tenders = max_tenders;
        self
    }

    /// Designates the fee recipient. Settable exactly once; creation is
    /// refused while unset.
    pub fn configure_owner(&mut self, principal: Principal) -> Result<bool, RuleViolation> {
        if principal.is_burn() {
            return Err(RuleViolation::InvalidOwner);
        }
        if self.owner.is_some() {
            return Err(RuleViolation::AlreadyConfigured);
        }
        info!(owner = %principal, "registry owner configured");
        self.owner = Some(principal);
        Ok(true)
    }

    /// Overwrites the creation fee. No bounds beyond requiring a configured
    /// owner first.
    pub fn configure_fee(&mut self, amount: u64) -> Result<bool, RuleViolation> {
        if self.owner.is_none() {
            return Err(RuleViolation::RegistryNotReady);
        }
        self.creation_fee = amount;
        Ok(true)
    }

    /// Creates a tender at logical time `now`, charging the creation fee
    /// from `caller` to the registry owner.
    ///
    /// Rules run in their fixed order: the field checks, then agency
    /// verification, description uniqueness, and owner readiness. The fee
    /// is transferred before the record is committed; if the transfer
    /// fails, nothing is persisted.
    pub async fn create_tender(
        &self,
        caller: &Principal,
        draft: TenderDraft,
        now: u64,
    ) -> Result<u64, RuleViolation> {
        let next_id = self.store.count().await;
        validation::validate_creation(&draft, now, next_id, self.max_tenders)?;

        if !self.authorizer.is_verified(caller).await {
            debug!(caller = %caller, "tender creation rejected: caller is not a verified agency");
            return Err(RuleViolation::NotAuthorized);
        }
        if self.store.exists(&draft.description).await {
            return Err(RuleViolation::TenderAlreadyExists);
        }
        let Some(owner) = self.owner.as_ref() else {
            return Err(RuleViolation::RegistryNotReady);
        };

        let tender = Tender::from_draft(&draft, caller.clone(), now)?;

        if let Err(cause) = self.transfer.send(self.creation_fee, caller, owner).await {
            warn!(%cause, caller = %caller, "creation fee transfer failed");
            return Err(RuleViolation::FeeTransferFailed);
        }

        let id = self.store.insert(tender).await;
        info!(id, caller = %caller, "tender created");
        Ok(id)
    }

    /// Applies a revision to an existing tender. Only the creator may
    /// update, only description, deadline, and budget are mutable, and the
    /// new description must not belong to a different tender. No fee is
    /// charged.
    pub async fn update_tender(
        &self,
        caller: &Principal,
        id: u64,
        revision: TenderRevision,
        now: u64,
    ) -> Result<bool, RuleViolation> {
        let tender = self.store.get(id).await.ok_or(RuleViolation::TenderNotFound)?;
        if &tender.creator != caller {
            debug!(id, caller = %caller, "tender update rejected: caller is not the creator");
            return Err(RuleViolation::NotAuthorized);
        }
        validation::validate_update_fields(
            &revision.description,
            revision.submission_deadline,
            revision.budget,
            now,
        )?;
        if let Some(holder) = self.store.id_for_description(&revision.description).await
            && holder != id
        {
            return Err(RuleViolation::TenderAlreadyExists);
        }

        self.store.replace(id, revision, caller.clone(), now).await;
        info!(id, caller = %caller, "tender updated");
        Ok(true)
    }

    pub async fn get_tender(&self, id: u64) -> Option<Tender> {
        self.store.get(id).await
    }

    pub async fn get_tender_update(&self, id: u64) -> Option<TenderUpdateRecord> {
        self.store.get_update(id).await
    }

    pub async fn get_tender_count(&self) -> u64 {
        self.store.count().await
    }

    pub async fn check_tender_existence(&self, description: &str) -> bool {
        self.store.exists(description).await
    }

    /// Snapshot of all tenders, ordered by id.
    pub async fn all_tenders(&self) -> Vec<Tender> {
        self.store.all().await
    }

    pub fn creation_fee(&self) -> u64 {
        self.creation_fee
    }
}
