use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::reference::ReferenceData;
use crate::types::{
    Alert, AlertType, Customer, CustomerType, DecisionPath, RiskCategory, RiskFactor, RiskLevel,
    Transaction, TransactionType,
};

use super::narrative::format_amount;

pub(super) const STAGE_GEOGRAPHIC: &str = "geographic_risk";
pub(super) const STAGE_AMOUNT: &str = "amount_analysis";
pub(super) const STAGE_CUSTOMER: &str = "customer_analysis";
pub(super) const STAGE_TRANSACTION_TYPE: &str = "transaction_type";

/// Amounts above this are flagged as large (USD-equivalent).
const LARGE_TRANSACTION_THRESHOLD: Decimal = dec!(100_000);

/// Closed band just under the USD 10,000 cash-reporting threshold.
const STRUCTURING_BAND_LOW: Decimal = dec!(9_000);
const STRUCTURING_BAND_HIGH: Decimal = dec!(10_000);

/// Accounts younger than this are treated as new.
const NEW_ACCOUNT_AGE_DAYS: u32 = 90;

/// Accumulator threaded through the rule stages. Factors and alerts
/// keep insertion order; the path records every stage transition.
pub(super) struct Evaluation {
    pub factors: Vec<RiskFactor>,
    pub alerts: Vec<Alert>,
    pub path: DecisionPath,
}

impl Evaluation {
    pub(super) fn new() -> Self {
        let mut path = DecisionPath::new();
        path.push("entry", "initial_screening");
        Evaluation {
            factors: Vec::new(),
            alerts: Vec::new(),
            path,
        }
    }

    fn open_stage(&mut self, stage: &str) -> usize {
        self.path.push(stage, "analyzing");
        self.factors.len()
    }

    fn close_stage(&mut self, stage: &str, factors_before: usize) {
        let status = if self.factors.len() > factors_before {
            "flagged"
        } else {
            "clear"
        };
        self.path.push(stage, status);
    }
}

// ---------------------------------------------------------------------------
// Stage 1: geographic
// ---------------------------------------------------------------------------

/// All four geographic checks are independent; scores add.
pub(super) fn geographic_stage(
    tx: &Transaction,
    reference: &ReferenceData,
    eval: &mut Evaluation,
) {
    let mark = eval.open_stage(STAGE_GEOGRAPHIC);

    let origin = tx.origin_country.trim().to_uppercase();
    let dest = tx.destination_country.trim().to_uppercase();

    if reference.high_risk_countries.contains(&origin) {
        eval.factors.push(RiskFactor {
            code: "HIGH_RISK_ORIGIN".to_string(),
            description: format!("High-risk origin country: {}", origin),
            severity: RiskLevel::High,
            score: 25,
            category: RiskCategory::Geographic,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::HighRiskJurisdiction,
            severity: RiskLevel::High,
            title: "High-Risk Origin Country".to_string(),
            description: format!(
                "Transaction originates from {}, classified as high-risk for money laundering.",
                origin
            ),
            confidence: dec!(0.95),
        });
    }

    if reference.high_risk_countries.contains(&dest) {
        eval.factors.push(RiskFactor {
            code: "HIGH_RISK_DESTINATION".to_string(),
            description: format!("High-risk destination country: {}", dest),
            severity: RiskLevel::High,
            score: 25,
            category: RiskCategory::Geographic,
        });
    }

    if reference.tax_havens.contains(&dest) {
        eval.factors.push(RiskFactor {
            code: "TAX_HAVEN_DESTINATION".to_string(),
            description: format!("Destination is known tax haven: {}", dest),
            severity: RiskLevel::Medium,
            score: 15,
            category: RiskCategory::Geographic,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::TaxHaven,
            severity: RiskLevel::Medium,
            title: "Tax Haven Destination".to_string(),
            description: format!(
                "Funds being transferred to {}, commonly used for tax avoidance.",
                dest
            ),
            confidence: dec!(0.90),
        });
    }

    if reference.grey_list_countries.contains(&origin)
        || reference.grey_list_countries.contains(&dest)
    {
        eval.factors.push(RiskFactor {
            code: "GREY_LIST_JURISDICTION".to_string(),
            description: "Transaction involves FATF grey list country".to_string(),
            severity: RiskLevel::Medium,
            score: 10,
            category: RiskCategory::Geographic,
        });
    }

    eval.close_stage(STAGE_GEOGRAPHIC, mark);
}

// ---------------------------------------------------------------------------
// Stage 2: amount
// ---------------------------------------------------------------------------

pub(super) fn amount_stage(tx: &Transaction, eval: &mut Evaluation) {
    let mark = eval.open_stage(STAGE_AMOUNT);

    if tx.amount > LARGE_TRANSACTION_THRESHOLD {
        eval.factors.push(RiskFactor {
            code: "LARGE_TRANSACTION".to_string(),
            description: format!("Large transaction amount: ${}", format_amount(tx.amount)),
            severity: RiskLevel::Medium,
            score: 15,
            category: RiskCategory::Transaction,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::LargeTransaction,
            severity: RiskLevel::Medium,
            title: "Large Value Transaction".to_string(),
            description: format!(
                "Transaction amount of ${} exceeds monitoring threshold.",
                format_amount(tx.amount)
            ),
            confidence: dec!(0.85),
        });
    }

    // Closed interval: 9,000 and 10,000 both count.
    if tx.amount >= STRUCTURING_BAND_LOW && tx.amount <= STRUCTURING_BAND_HIGH {
        eval.factors.push(RiskFactor {
            code: "STRUCTURING_INDICATOR".to_string(),
            description: "Amount near reporting threshold - possible structuring".to_string(),
            severity: RiskLevel::High,
            score: 20,
            category: RiskCategory::Behavioral,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::Structuring,
            severity: RiskLevel::High,
            title: "Possible Structuring".to_string(),
            description: "Transaction amount suspiciously close to $10,000 reporting threshold."
                .to_string(),
            confidence: dec!(0.88),
        });
    }

    eval.close_stage(STAGE_AMOUNT, mark);
}

// ---------------------------------------------------------------------------
// Stage 3: customer
// ---------------------------------------------------------------------------

pub(super) fn customer_stage(
    customer: &Customer,
    reference: &ReferenceData,
    eval: &mut Evaluation,
) {
    let mark = eval.open_stage(STAGE_CUSTOMER);

    let name_lower = customer.name.to_lowercase();

    // First match wins; at most one sanctions factor per assessment.
    if let Some(keyword) = reference
        .sanctions_keywords
        .iter()
        .find(|k| name_lower.contains(k.as_str()))
    {
        eval.factors.push(RiskFactor {
            code: "SANCTIONS_KEYWORD_MATCH".to_string(),
            description: format!(
                "Customer name contains sanctions-related keyword: '{}'",
                keyword
            ),
            severity: RiskLevel::Critical,
            score: 30,
            category: RiskCategory::Sanctions,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::SanctionsAlert,
            severity: RiskLevel::Critical,
            title: "Potential Sanctions Concern".to_string(),
            description: format!(
                "Customer name '{}' contains keywords associated with sanctioned jurisdictions.",
                customer.name
            ),
            confidence: dec!(0.92),
        });
    }

    // Runs regardless of the sanctions outcome; also first match only.
    if let Some(keyword) = reference
        .pep_indicator_keywords
        .iter()
        .find(|k| name_lower.contains(k.as_str()))
    {
        eval.factors.push(RiskFactor {
            code: "PEP_INDICATOR".to_string(),
            description: format!(
                "Customer name contains PEP indicator keyword: '{}'",
                keyword
            ),
            severity: RiskLevel::Medium,
            score: 15,
            category: RiskCategory::Pep,
        });
    }

    if customer.customer_type == CustomerType::Corporate {
        eval.factors.push(RiskFactor {
            code: "CORPORATE_ENTITY".to_string(),
            description: "Corporate entities require enhanced due diligence".to_string(),
            severity: RiskLevel::Low,
            score: 5,
            category: RiskCategory::Customer,
        });
    }

    if customer.account_age_days < NEW_ACCOUNT_AGE_DAYS {
        eval.factors.push(RiskFactor {
            code: "NEW_ACCOUNT".to_string(),
            description: format!("Account is only {} days old", customer.account_age_days),
            severity: RiskLevel::Medium,
            score: 10,
            category: RiskCategory::Behavioral,
        });
        eval.alerts.push(Alert {
            alert_type: AlertType::NewAccountActivity,
            severity: RiskLevel::Medium,
            title: "New Account High Activity".to_string(),
            description: format!(
                "Large transaction on account that is only {} days old.",
                customer.account_age_days
            ),
            confidence: dec!(0.80),
        });
    }

    eval.close_stage(STAGE_CUSTOMER, mark);
}

// ---------------------------------------------------------------------------
// Stage 4: transaction type
// ---------------------------------------------------------------------------

pub(super) fn transaction_type_stage(tx: &Transaction, eval: &mut Evaluation) {
    let mark = eval.open_stage(STAGE_TRANSACTION_TYPE);

    match tx.transaction_type {
        TransactionType::Crypto => {
            eval.factors.push(RiskFactor {
                code: "CRYPTO_TRANSACTION".to_string(),
                description: "Cryptocurrency transactions carry elevated risk".to_string(),
                severity: RiskLevel::Medium,
                score: 15,
                category: RiskCategory::Crypto,
            });
            eval.alerts.push(Alert {
                alert_type: AlertType::CryptoRisk,
                severity: RiskLevel::Medium,
                title: "Cryptocurrency Transaction".to_string(),
                description: "Virtual asset transactions require enhanced monitoring."
                    .to_string(),
                confidence: dec!(0.85),
            });
        }
        TransactionType::Cash => {
            eval.factors.push(RiskFactor {
                code: "CASH_TRANSACTION".to_string(),
                description: "Cash transactions have higher AML risk".to_string(),
                severity: RiskLevel::Medium,
                score: 10,
                category: RiskCategory::Transaction,
            });
        }
        _ => {}
    }

    eval.close_stage(STAGE_TRANSACTION_TYPE, mark);
}
