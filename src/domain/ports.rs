use super::tender::{Principal, Tender, TenderRevision, TenderUpdateRecord};
use crate::error::RuleViolation;
use async_trait::async_trait;

pub type TenderStoreBox = Box<dyn TenderStore>;
pub type AgencyAuthorizerBox = Box<dyn AgencyAuthorizer>;
pub type FeeTransferBox = Box<dyn FeeTransfer>;

/// The authoritative tender map, its description uniqueness index, and the
/// sequential id allocator.
///
/// Operations are infallible at this level: the orchestrator validates
/// before it mutates, and calls are serialized by construction.
#[async_trait]
pub trait TenderStore: Send + Sync {
    /// Stores a pre-validated record, assigning `id = next_id` and indexing
    /// its description. Returns the assigned id.
    async fn insert(&self, tender: Tender) -> u64;

    async fn get(&self, id: u64) -> Option<Tender>;

    /// Rewrites the record at `id` with the revised fields, preserving its
    /// id, creator, and creation time. Atomically swaps the description
    /// index entry and overwrites the single update slot for the id.
    /// Returns `false` when the id does not exist.
    async fn replace(
        &self,
        id: u64,
        revision: TenderRevision,
        updater: Principal,
        now: u64,
    ) -> bool;

    /// The number of tenders ever created (equal to the next id).
    async fn count(&self) -> u64;

    /// Membership check against the description index only.
    async fn exists(&self, description: &str) -> bool;

    /// The id currently holding `description`, if any.
    async fn id_for_description(&self, description: &str) -> Option<u64>;

    /// The most recent update applied to `id`, if it was ever updated.
    async fn get_update(&self, id: u64) -> Option<TenderUpdateRecord>;

    /// All stored tenders, ordered by id.
    async fn all(&self) -> Vec<Tender>;
}

/// External authority answering whether a principal is a verified agency.
/// Unreachability must surface as `false` (deny by default).
#[async_trait]
pub trait AgencyAuthorizer: Send + Sync {
    async fn is_verified(&self, principal: &Principal) -> bool;
}

/// External atomic value transfer. Any non-success fails the enclosing
/// operation.
#[async_trait]
pub trait FeeTransfer: Send + Sync {
    async fn send(&self, amount: u64, from: &Principal, to: &Principal)
        -> Result<(), RuleViolation>;
}
