pub mod decision;
mod narrative;
mod rules;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SentinelError;
use crate::reference::ReferenceData;
use crate::types::{Assessment, Customer, Transaction};
use crate::SentinelResult;

use rules::Evaluation;

/// The aggregate score is clamped to this ceiling; factor scores are
/// non-negative, so no lower clamp is needed.
const MAX_RISK_SCORE: u32 = 100;

/// One transaction plus the customer profile behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub transaction: Transaction,
    pub customer: Customer,
}

/// Evaluate a transaction against the builtin reference tables.
///
/// Pure and stateless: identical input yields an identical
/// `Assessment`, and invocations never share mutable state.
pub fn evaluate(input: &AssessmentInput) -> SentinelResult<Assessment> {
    evaluate_with_reference(input, ReferenceData::builtin())
}

/// Evaluate against caller-supplied reference tables.
pub fn evaluate_with_reference(
    input: &AssessmentInput,
    reference: &ReferenceData,
) -> SentinelResult<Assessment> {
    validate(input)?;

    let tx = &input.transaction;
    let customer = &input.customer;

    let mut eval = Evaluation::new();
    rules::geographic_stage(tx, reference, &mut eval);
    rules::amount_stage(tx, &mut eval);
    rules::customer_stage(customer, reference, &mut eval);
    rules::transaction_type_stage(tx, &mut eval);

    eval.path.push("risk_scoring", "calculating");
    let raw_score: u32 = eval.factors.iter().map(|f| f.score).sum();
    let risk_score = raw_score.min(MAX_RISK_SCORE);

    let risk_level = decision::risk_level_for(risk_score);
    let (recommended_action, sar_required) = decision::decide(risk_score);
    eval.path
        .push("decision", &recommended_action.to_string().to_lowercase());

    let reasoning = narrative::build_reasoning(tx, customer, risk_level, risk_score, &eval.factors);
    let next_steps = decision::next_steps_for(recommended_action);

    Ok(Assessment {
        risk_score,
        risk_level,
        risk_factors: eval.factors,
        decision_path: eval.path,
        alerts: eval.alerts,
        recommended_action,
        sar_required,
        action_required: decision::action_required(risk_score),
        reasoning,
        next_steps,
    })
}

/// All input failures are reported before any rule runs; a partial
/// assessment is never returned.
fn validate(input: &AssessmentInput) -> SentinelResult<()> {
    let tx = &input.transaction;

    if tx.amount <= Decimal::ZERO {
        return Err(SentinelError::InvalidInput {
            field: "amount".to_string(),
            reason: "Amount must be a positive number".to_string(),
        });
    }
    if tx.origin_country.trim().is_empty() {
        return Err(SentinelError::InvalidInput {
            field: "origin_country".to_string(),
            reason: "Origin country code must not be empty".to_string(),
        });
    }
    if tx.destination_country.trim().is_empty() {
        return Err(SentinelError::InvalidInput {
            field: "destination_country".to_string(),
            reason: "Destination country code must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerType, TransactionType};
    use rust_decimal_macros::dec;

    fn valid_input() -> AssessmentInput {
        AssessmentInput {
            transaction: Transaction {
                amount: dec!(1_500),
                currency: "USD".to_string(),
                origin_country: "US".to_string(),
                destination_country: "GB".to_string(),
                transaction_type: TransactionType::WireTransfer,
                timestamp: None,
            },
            customer: Customer {
                name: "Jane Doe".to_string(),
                customer_type: CustomerType::Individual,
                account_age_days: 730,
            },
        }
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut input = valid_input();
        input.transaction.amount = Decimal::ZERO;
        let err = evaluate(&input).unwrap_err();
        match err {
            SentinelError::InvalidInput { field, .. } => assert_eq!(field, "amount"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut input = valid_input();
        input.transaction.amount = dec!(-10);
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn blank_country_codes_are_rejected() {
        let mut input = valid_input();
        input.transaction.origin_country = "   ".to_string();
        let err = evaluate(&input).unwrap_err();
        match err {
            SentinelError::InvalidInput { field, .. } => assert_eq!(field, "origin_country"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut input = valid_input();
        input.transaction.destination_country = String::new();
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn unknown_transaction_type_fails_at_parse() {
        let json = r#"{
            "transaction": {
                "amount": "100",
                "currency": "USD",
                "origin_country": "US",
                "destination_country": "GB",
                "transaction_type": "BARTER"
            },
            "customer": {
                "name": "Jane Doe",
                "customer_type": "INDIVIDUAL",
                "account_age_days": 730
            }
        }"#;
        assert!(serde_json::from_str::<AssessmentInput>(json).is_err());
    }

    #[test]
    fn clean_input_produces_full_decision_path() {
        let assessment = evaluate(&valid_input()).unwrap();
        assert_eq!(
            assessment.decision_path.markers(),
            [
                "entry:initial_screening",
                "geographic_risk:analyzing",
                "geographic_risk:clear",
                "amount_analysis:analyzing",
                "amount_analysis:clear",
                "customer_analysis:analyzing",
                "customer_analysis:clear",
                "transaction_type:analyzing",
                "transaction_type:clear",
                "risk_scoring:calculating",
                "decision:approve"
            ]
        );
    }
}
