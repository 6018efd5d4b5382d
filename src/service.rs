// 🔁 Receipt Service - Submission and retrieval
// Validator → Scoring Engine → Score Store, and back out by identifier

use crate::error::{ServiceError, ServiceResult};
use crate::receipt::Receipt;
use crate::rules::ScoringEngine;
use crate::schema::ReceiptValidator;
use crate::store::{ReceiptId, ScoreStore};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct ReceiptService {
    validator: ReceiptValidator,
    engine: ScoringEngine,
    store: ScoreStore,
}

impl ReceiptService {
    pub fn new() -> Self {
        Self::with_store(ScoreStore::new())
    }

    pub fn with_store(store: ScoreStore) -> Self {
        ReceiptService {
            validator: ReceiptValidator::new(),
            engine: ScoringEngine::new(),
            store,
        }
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Validate, score and record a receipt.
    ///
    /// An invalid receipt leaves the store untouched.
    pub fn submit(&self, receipt: Receipt) -> ServiceResult<ReceiptId> {
        let valid = self.validator.validate(receipt).map_err(|errors| {
            warn!(problems = errors.len(), "rejected receipt");
            ServiceError::InvalidReceipt(errors)
        })?;

        let points = self.engine.score(&valid);
        let id = self.store.insert(points);

        info!(%id, points, "receipt scored");
        Ok(id)
    }

    /// Points for a previously issued identifier.
    ///
    /// Strings that are not identifiers at all are reported as not found too.
    pub fn retrieve(&self, id: &str) -> ServiceResult<u64> {
        let points = id
            .parse::<ReceiptId>()
            .ok()
            .and_then(|receipt_id| self.store.lookup(&receipt_id));

        points.ok_or_else(|| {
            debug!(id, "no receipt for id");
            ServiceError::NotFound(id.to_string())
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Item;
    use crate::schema::ReceiptValidator;

    fn morning_receipt() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
            total: "2.65".to_string(),
        }
    }

    #[test]
    fn test_submit_then_retrieve_matches_score() {
        let service = ReceiptService::new();
        let receipt = morning_receipt();

        let expected = ScoringEngine::new().score(&ReceiptValidator::new().validate(receipt.clone()).unwrap());
        let id = service.submit(receipt).unwrap();

        assert_eq!(service.retrieve(&id.to_string()).unwrap(), expected);
    }

    #[test]
    fn test_retrieve_is_repeatable() {
        let service = ReceiptService::new();
        let id = service.submit(morning_receipt()).unwrap().to_string();

        let first = service.retrieve(&id).unwrap();
        let second = service.retrieve(&id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_receipt_creates_nothing() {
        let service = ReceiptService::new();
        let mut receipt = morning_receipt();
        receipt.items.clear();

        let result = service.submit(receipt);

        assert!(matches!(result, Err(ServiceError::InvalidReceipt(_))));
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_retrieve_never_issued_id() {
        let service = ReceiptService::new();
        service.submit(morning_receipt()).unwrap();

        let unknown = ReceiptId::new().to_string();
        assert_eq!(service.retrieve(&unknown), Err(ServiceError::NotFound(unknown.clone())));
    }

    #[test]
    fn test_retrieve_other_spellings_of_issued_id() {
        let service = ReceiptService::new();
        let id = service.submit(morning_receipt()).unwrap();

        let spellings = [
            id.to_string().to_uppercase(),
            id.as_uuid().simple().to_string(),
            id.as_uuid().braced().to_string(),
            id.as_uuid().urn().to_string(),
        ];
        for spelling in spellings {
            assert!(matches!(service.retrieve(&spelling), Err(ServiceError::NotFound(_))));
        }
        assert!(service.retrieve(&id.to_string()).is_ok());
    }

    #[test]
    fn test_retrieve_malformed_id_is_not_found() {
        let service = ReceiptService::new();
        assert!(matches!(service.retrieve("abc"), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_each_submission_gets_its_own_record() {
        let service = ReceiptService::new();
        let a = service.submit(morning_receipt()).unwrap();
        let b = service.submit(morning_receipt()).unwrap();

        assert_ne!(a, b);
        assert_eq!(service.store().len(), 2);
    }
}
