use crate::domain::tender::{Currency, EvaluationMethod, Principal, Tender, TenderType};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the final tender table.
#[derive(Serialize)]
struct TenderRow {
    id: u64,
    description: String,
    submission_deadline: u64,
    budget: u64,
    creator: Principal,
    tender_type: TenderType,
    evaluation_method: EvaluationMethod,
    location: String,
    currency: Currency,
    status: bool,
}

impl From<&Tender> for TenderRow {
    fn from(tender: &Tender) -> Self {
        Self {
            id: tender.id,
            description: tender.description.clone(),
            submission_deadline: tender.submission_deadline,
            budget: tender.budget,
            creator: tender.creator.clone(),
            tender_type: tender.tender_type,
            evaluation_method: tender.evaluation_method,
            location: tender.location.clone(),
            currency: tender.currency,
            status: tender.status,
        }
    }
}

/// Writes the registry snapshot as CSV, one row per tender.
pub struct TenderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TenderWriter<W> {
    pub fn new(dest: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(dest),
        }
    }

    pub fn write_tenders(&mut self, tenders: &[Tender]) -> Result<()> {
        for tender in tenders {
            self.writer.serialize(TenderRow::from(tender))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
