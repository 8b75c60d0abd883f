use crate::domain::ports::{AgencyAuthorizer, FeeTransfer, TenderStore};
use crate::domain::tender::{Principal, Tender, TenderRevision, TenderUpdateRecord};
use crate::error::RuleViolation;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    tenders: HashMap<u64, Tender>,
    updates: HashMap<u64, TenderUpdateRecord>,
    by_description: HashMap<String, u64>,
    next_id: u64,
}

/// The authoritative in-memory tender store.
///
/// `by_description` is kept exactly inverse to the stored records'
/// descriptions: every mutation swaps both under one write lock.
#[derive(Default, Clone)]
pub struct InMemoryTenderStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryTenderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenderStore for InMemoryTenderStore {
    async fn insert(&self, mut tender: Tender) -> u64 {
        let mut state = self.state.write().await;
        let id = state.next_id;
        tender.id = id;
        state.by_description.insert(tender.description.clone(), id);
        state.tenders.insert(id, tender);
        state.next_id += 1;
        id
    }

    async fn get(&self, id: u64) -> Option<Tender> {
        let state = self.state.read().await;
        state.tenders.get(&id).cloned()
    }

    async fn replace(
        &self,
        id: u64,
        revision: TenderRevision,
        updater: Principal,
        now: u64,
    ) -> bool {
        let mut state = self.state.write().await;
        let Some(old) = state.tenders.get(&id).cloned() else {
            return false;
        };

        let mut tender = old.clone();
        tender.description = revision.description.clone();
        tender.submission_deadline = revision.submission_deadline;
        tender.budget = revision.budget;
        tender.last_modified_at = now;

        state.by_description.remove(&old.description);
        state.by_description.insert(revision.description.clone(), id);
        state.tenders.insert(id, tender);
        state.updates.insert(
            id,
            TenderUpdateRecord {
                description: revision.description,
                submission_deadline: revision.submission_deadline,
                budget: revision.budget,
                timestamp: now,
                updater,
            },
        );
        true
    }

    async fn count(&self) -> u64 {
        self.state.read().await.next_id
    }

    async fn exists(&self, description: &str) -> bool {
        self.state.read().await.by_description.contains_key(description)
    }

    async fn id_for_description(&self, description: &str) -> Option<u64> {
        self.state.read().await.by_description.get(description).copied()
    }

    async fn get_update(&self, id: u64) -> Option<TenderUpdateRecord> {
        self.state.read().await.updates.get(&id).cloned()
    }

    async fn all(&self) -> Vec<Tender> {
        let state = self.state.read().await;
        let mut tenders: Vec<Tender> = state.tenders.values().cloned().collect();
        tenders.sort_by_key(|t| t.id);
        tenders
    }
}

/// Allow-list agency authorizer: a principal is verified iff it was seeded.
#[derive(Default, Clone)]
pub struct InMemoryAgencyRegistry {
    agencies: HashSet<Principal>,
}

impl InMemoryAgencyRegistry {
    pub fn new<I>(agencies: I) -> Self
    where
        I: IntoIterator<Item = Principal>,
    {
        Self {
            agencies: agencies.into_iter().collect(),
        }
    }
}

#[async_trait]
impl AgencyAuthorizer for InMemoryAgencyRegistry {
    async fn is_verified(&self, principal: &Principal) -> bool {
        self.agencies.contains(principal)
    }
}

/// A single recorded fee transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: Principal,
    pub to: Principal,
}

/// A fee transfer adapter that records every movement and always succeeds.
/// Clones share the ledger, so callers can keep a handle for inspection
/// after boxing one for the registry.
#[derive(Default, Clone)]
pub struct RecordingFeeTransfer {
    ledger: Arc<RwLock<Vec<TransferRecord>>>,
}

impl RecordingFeeTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn transfers(&self) -> Vec<TransferRecord> {
        self.ledger.read().await.clone()
    }
}

#[async_trait]
impl FeeTransfer for RecordingFeeTransfer {
    async fn send(
        &self,
        amount: u64,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), RuleViolation> {
        let mut ledger = self.ledger.write().await;
        ledger.push(TransferRecord {
            amount,
            from: from.clone(),
            to: to.clone(),
        });
        Ok(())
    }
}
