use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Transaction channel/instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    WireTransfer,
    Ach,
    Crypto,
    Cash,
    Check,
    Card,
    TradeFinance,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::WireTransfer => "WIRE_TRANSFER",
            TransactionType::Ach => "ACH",
            TransactionType::Crypto => "CRYPTO",
            TransactionType::Cash => "CASH",
            TransactionType::Check => "CHECK",
            TransactionType::Card => "CARD",
            TransactionType::TradeFinance => "TRADE_FINANCE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerType {
    Individual,
    Corporate,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Individual => f.write_str("INDIVIDUAL"),
            CustomerType::Corporate => f.write_str("CORPORATE"),
        }
    }
}

/// A single transaction under assessment. Immutable, caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Money,
    pub currency: String,
    pub origin_country: String,
    pub destination_country: String,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The customer profile behind the transaction. Immutable, caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub customer_type: CustomerType,
    pub account_age_days: u32,
}

/// Severity of a single factor and the overall assessment level share
/// one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Geographic,
    Transaction,
    Behavioral,
    Sanctions,
    Pep,
    Customer,
    Crypto,
}

/// One triggered rule. The score is the rule's raw contribution; the
/// clamp applies only to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub code: String,
    pub description: String,
    pub severity: RiskLevel,
    pub score: u32,
    pub category: RiskCategory,
}

/// Alert kinds surfaced to the caller. Subset of the factor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    HighRiskJurisdiction,
    TaxHaven,
    LargeTransaction,
    Structuring,
    SanctionsAlert,
    NewAccountActivity,
    CryptoRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_type: AlertType,
    pub severity: RiskLevel,
    pub title: String,
    pub description: String,
    pub confidence: Decimal,
}

/// Ordered audit trace of `stage:status` markers. Append-only;
/// insertion order is evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionPath(Vec<String>);

impl DecisionPath {
    pub fn new() -> Self {
        DecisionPath(Vec::new())
    }

    pub fn push(&mut self, stage: &str, status: &str) {
        self.0.push(format!("{}:{}", stage, status));
    }

    pub fn markers(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendedAction {
    Approve,
    Review,
    Escalate,
    Block,
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecommendedAction::Approve => "APPROVE",
            RecommendedAction::Review => "REVIEW",
            RecommendedAction::Escalate => "ESCALATE",
            RecommendedAction::Block => "BLOCK",
        };
        f.write_str(s)
    }
}

/// Engine output. Immutable once constructed; every field is a pure
/// function of the input and the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub decision_path: DecisionPath,
    pub alerts: Vec<Alert>,
    pub recommended_action: RecommendedAction,
    pub sar_required: bool,
    pub action_required: bool,
    pub reasoning: String,
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_wire_names() {
        let t: TransactionType = serde_json::from_str("\"WIRE_TRANSFER\"").unwrap();
        assert_eq!(t, TransactionType::WireTransfer);
        assert_eq!(t.to_string(), "WIRE_TRANSFER");
        assert_eq!(
            serde_json::to_string(&TransactionType::TradeFinance).unwrap(),
            "\"TRADE_FINANCE\""
        );
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn risk_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::Geographic).unwrap(),
            "\"geographic\""
        );
        assert_eq!(serde_json::to_string(&RiskCategory::Pep).unwrap(), "\"pep\"");
    }

    #[test]
    fn decision_path_preserves_insertion_order() {
        let mut path = DecisionPath::new();
        path.push("entry", "initial_screening");
        path.push("geographic_risk", "analyzing");
        path.push("geographic_risk", "clear");
        assert_eq!(
            path.markers(),
            [
                "entry:initial_screening",
                "geographic_risk:analyzing",
                "geographic_risk:clear"
            ]
        );
    }

    #[test]
    fn decision_path_serializes_as_plain_array() {
        let mut path = DecisionPath::new();
        path.push("decision", "block");
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            "[\"decision:block\"]"
        );
    }
}
