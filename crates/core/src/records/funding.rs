//! External funding records.

use chrono::{DateTime, NaiveDate, Utc};
use cosa_shared::types::{EntityId, ExternalFundingId};
use cosa_shared::{Action, Viewer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::RecordError;
use super::status::ReviewStatus;

/// Sponsorship or grant money received by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFunding {
    /// Record identifier.
    pub id: ExternalFundingId,
    /// Club or council that received the money.
    pub entity_id: EntityId,
    /// Council the entity belongs to, if any.
    pub council_name: Option<String>,
    /// Sponsor or grant name.
    pub source: String,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Date received.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// Document store reference for the proof of receipt.
    pub proof_url: Option<String>,
    /// Review status.
    #[serde(default)]
    pub status: ReviewStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// External funding as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExternalFunding {
    /// Club or council that received the money.
    pub entity_id: EntityId,
    /// Council the entity belongs to, if any.
    pub council_name: Option<String>,
    /// Sponsor or grant name.
    pub source: String,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Date received.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// Document store reference for the proof of receipt.
    pub proof_url: Option<String>,
}

impl NewExternalFunding {
    /// Stamps the submission into a record pending review.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotPermitted` if the viewer may not record
    /// funding, or `RecordError::NonPositiveAmount` for a zero or negative amount.
    pub fn into_record(self, viewer: &Viewer) -> Result<ExternalFunding, RecordError> {
        if !viewer.can(Action::SubmitExternalFunding) {
            return Err(RecordError::NotPermitted {
                role: viewer.role,
                action: Action::SubmitExternalFunding,
            });
        }
        if self.amount <= Decimal::ZERO {
            return Err(RecordError::NonPositiveAmount(self.amount));
        }

        let funding = ExternalFunding {
            id: ExternalFundingId::new(),
            entity_id: self.entity_id,
            council_name: self.council_name,
            source: self.source,
            amount: self.amount,
            date: self.date,
            description: self.description,
            proof_url: self.proof_url,
            status: ReviewStatus::Pending,
            created_at: Utc::now(),
        };

        info!(
            funding_id = %funding.id,
            entity = %funding.entity_id,
            source = %funding.source,
            submitted_by = %viewer.user_id,
            "External funding submitted"
        );

        Ok(funding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosa_shared::Role;
    use cosa_shared::types::UserId;
    use rust_decimal_macros::dec;

    fn sponsorship() -> NewExternalFunding {
        NewExternalFunding {
            entity_id: "ecell".into(),
            council_name: None,
            source: "Startup Fund".to_string(),
            amount: dec!(25000),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            description: None,
            proof_url: Some("proofs/startup-fund.pdf".to_string()),
        }
    }

    #[test]
    fn test_into_record_is_pending() {
        let viewer = Viewer::new(UserId::new(), Role::Admin);
        let funding = sponsorship().into_record(&viewer).unwrap();
        assert_eq!(funding.status, ReviewStatus::Pending);
        assert_eq!(funding.source, "Startup Fund");
    }

    #[test]
    fn test_viewer_cannot_submit_funding() {
        let viewer = Viewer::from_claim(UserId::new(), "treasurer");
        let err = sponsorship().into_record(&viewer).unwrap_err();
        assert!(matches!(
            err,
            RecordError::NotPermitted {
                action: Action::SubmitExternalFunding,
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let viewer = Viewer::new(UserId::new(), Role::SuperAdmin);
        let mut funding = sponsorship();
        funding.amount = Decimal::ZERO;
        assert!(matches!(
            funding.into_record(&viewer),
            Err(RecordError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_status_defaults_to_pending_when_missing() {
        let json = r#"{
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "entity_id": "nirvana",
            "council_name": null,
            "source": "Alumni",
            "amount": 5000,
            "date": "2025-07-15",
            "description": null,
            "proof_url": null,
            "created_at": "2025-07-15T08:30:00Z"
        }"#;
        let funding: ExternalFunding = serde_json::from_str(json).unwrap();
        assert_eq!(funding.status, ReviewStatus::Pending);
        assert_eq!(funding.amount, dec!(5000));
    }
}
