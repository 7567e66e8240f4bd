//! Salary model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay schedule for a salary record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Monthly,
    BiWeekly,
    Weekly,
    Quarterly,
    Annually,
}

/// Salary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub id: i64,
    /// Serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub pay_frequency: PayFrequency,
    pub employee_id: i64,
    pub effective_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create salary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryCreate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub pay_frequency: PayFrequency,
    pub employee_id: i64,
    pub effective_date: DateTime<Utc>,
}

/// Update salary payload. The amount is immutable once recorded; only
/// the schedule fields can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<PayFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_amount_serializes_as_number() {
        let salary = SalaryCreate {
            amount: Decimal::from_f64(4250.50).unwrap(),
            pay_frequency: PayFrequency::Monthly,
            employee_id: 7,
            effective_date: "2026-01-01T00:00:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&salary).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["payFrequency"], "Monthly");
        assert_eq!(value["employeeId"], 7);
    }

    #[test]
    fn test_update_never_carries_amount() {
        let patch = SalaryUpdate {
            pay_frequency: Some(PayFrequency::BiWeekly),
            effective_date: None,
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert!(value.get("amount").is_none());
        assert!(value.get("effectiveDate").is_none());
        assert_eq!(value["payFrequency"], "BiWeekly");
    }
}
