// 📐 Shape Layer - Receipt Validation
// Structural gate in front of the scoring engine

use crate::receipt::Receipt;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn required(field: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: "Required field is empty".to_string(),
        }
    }
}

pub type ValidationResult = Result<ValidReceipt, Vec<ValidationError>>;

/// A receipt that passed structural validation.
///
/// Only [`ReceiptValidator::validate`] constructs one, so holding a
/// `ValidReceipt` means every required field is present. Numeric and date
/// fields are still raw strings here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReceipt(Receipt);

impl ValidReceipt {
    pub fn receipt(&self) -> &Receipt {
        &self.0
    }

    pub fn into_inner(self) -> Receipt {
        self.0
    }
}

impl AsRef<Receipt> for ValidReceipt {
    fn as_ref(&self) -> &Receipt {
        &self.0
    }
}

// ============================================================================
// RECEIPT VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn new() -> Self {
        ReceiptValidator
    }

    /// Check required fields, reporting every missing one
    pub fn validate(&self, receipt: Receipt) -> ValidationResult {
        let errors = self.check(&receipt);

        if errors.is_empty() {
            Ok(ValidReceipt(receipt))
        } else {
            Err(errors)
        }
    }

    /// Collect structural errors without consuming the receipt
    pub fn check(&self, receipt: &Receipt) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let required = [
            ("retailer", &receipt.retailer),
            ("purchaseDate", &receipt.purchase_date),
            ("purchaseTime", &receipt.purchase_time),
            ("total", &receipt.total),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.push(ValidationError::required(field));
            }
        }

        if receipt.items.is_empty() {
            errors.push(ValidationError {
                field: "items".to_string(),
                message: "At least one item is required".to_string(),
            });
        }

        for (index, item) in receipt.items.iter().enumerate() {
            if item.description.is_empty() {
                errors.push(ValidationError::required(format!("items[{}].shortDescription", index)));
            }
            if item.price.is_empty() {
                errors.push(ValidationError::required(format!("items[{}].price", index)));
            }
        }

        errors
    }
}

// ============================================================================
// TESTS
// ============================================================================
