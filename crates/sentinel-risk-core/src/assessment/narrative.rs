use rust_decimal::Decimal;

use crate::types::{Customer, RiskCategory, RiskFactor, RiskLevel, Transaction};

/// Assemble the deterministic reasoning report. No model call; every
/// line is a function of the factors already collected.
pub(super) fn build_reasoning(
    tx: &Transaction,
    customer: &Customer,
    risk_level: RiskLevel,
    risk_score: u32,
    factors: &[RiskFactor],
) -> String {
    let origin = tx.origin_country.trim().to_uppercase();
    let dest = tx.destination_country.trim().to_uppercase();

    let mut lines = vec![
        "RULE-BASED ANALYSIS SUMMARY".to_string(),
        "============================".to_string(),
        format!(
            "Transaction: ${} {}",
            format_amount(tx.amount),
            tx.transaction_type
        ),
        format!("Route: {} -> {}", origin, dest),
        format!("Customer: {} ({})", customer.name, customer.customer_type),
        String::new(),
        format!("RISK ASSESSMENT: {} (Score: {}/100)", risk_level, risk_score),
        String::new(),
        format!("KEY RISK INDICATORS ({}):", factors.len()),
    ];

    if factors.is_empty() {
        lines.push("  No significant risk indicators detected.".to_string());
    } else {
        for (i, factor) in factors.iter().enumerate() {
            lines.push(format!(
                "  {}. [{}] {}",
                i + 1,
                factor.severity,
                factor.description
            ));
        }
    }

    let count = |categories: &[RiskCategory]| {
        factors
            .iter()
            .filter(|f| categories.contains(&f.category))
            .count()
    };

    lines.push(String::new());
    lines.push("RISK CATEGORY BREAKDOWN:".to_string());
    lines.push(format!(
        "  Geographic: {}",
        count(&[RiskCategory::Geographic])
    ));
    lines.push(format!(
        "  Transaction: {}",
        count(&[RiskCategory::Transaction, RiskCategory::Crypto])
    ));
    lines.push(format!(
        "  Customer/Behavioral: {}",
        count(&[RiskCategory::Customer, RiskCategory::Behavioral])
    ));
    lines.push(format!(
        "  Sanctions/PEP: {}",
        count(&[RiskCategory::Sanctions, RiskCategory::Pep])
    ));

    lines.join("\n")
}

/// Thousands-separated, two-decimal rendering of a monetary amount.
pub(crate) fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerType, TransactionType};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(500_000)), "500,000.00");
        assert_eq!(format_amount(dec!(9_500)), "9,500.00");
        assert_eq!(format_amount(dec!(1_234_567.5)), "1,234,567.50");
        assert_eq!(format_amount(dec!(999)), "999.00");
        assert_eq!(format_amount(dec!(0)), "0.00");
    }

    #[test]
    fn format_amount_rounds_to_cents() {
        assert_eq!(format_amount(dec!(1000.006)), "1,000.01");
        assert_eq!(format_amount(dec!(1000.004)), "1,000.00");
    }

    fn sample_tx() -> Transaction {
        Transaction {
            amount: dec!(9_500),
            currency: "USD".to_string(),
            origin_country: "us".to_string(),
            destination_country: "pa".to_string(),
            transaction_type: TransactionType::Cash,
            timestamp: None,
        }
    }

    fn sample_customer() -> Customer {
        Customer {
            name: "John Smith".to_string(),
            customer_type: CustomerType::Individual,
            account_age_days: 15,
        }
    }

    #[test]
    fn report_with_no_factors_says_so() {
        let report = build_reasoning(
            &sample_tx(),
            &sample_customer(),
            RiskLevel::Low,
            0,
            &[],
        );
        assert!(report.contains("KEY RISK INDICATORS (0):"));
        assert!(report.contains("No significant risk indicators detected."));
        assert!(report.contains("RISK ASSESSMENT: LOW (Score: 0/100)"));
    }

    #[test]
    fn report_enumerates_factors_in_order() {
        let factors = vec![
            RiskFactor {
                code: "STRUCTURING_INDICATOR".to_string(),
                description: "Amount near reporting threshold - possible structuring".to_string(),
                severity: RiskLevel::High,
                score: 20,
                category: RiskCategory::Behavioral,
            },
            RiskFactor {
                code: "CASH_TRANSACTION".to_string(),
                description: "Cash transactions have higher AML risk".to_string(),
                severity: RiskLevel::Medium,
                score: 10,
                category: RiskCategory::Transaction,
            },
        ];
        let report = build_reasoning(
            &sample_tx(),
            &sample_customer(),
            RiskLevel::Low,
            30,
            &factors,
        );
        assert!(report.contains("Transaction: $9,500.00 CASH"));
        assert!(report.contains("Route: US -> PA"));
        assert!(report.contains("Customer: John Smith (INDIVIDUAL)"));
        assert!(report.contains("  1. [HIGH] Amount near reporting threshold"));
        assert!(report.contains("  2. [MEDIUM] Cash transactions have higher AML risk"));
        let first = report.find("1. [HIGH]").unwrap();
        let second = report.find("2. [MEDIUM]").unwrap();
        assert!(first < second);
    }

    #[test]
    fn report_counts_categories_in_fixed_buckets() {
        let factors = vec![
            RiskFactor {
                code: "CRYPTO_TRANSACTION".to_string(),
                description: "Cryptocurrency transactions carry elevated risk".to_string(),
                severity: RiskLevel::Medium,
                score: 15,
                category: RiskCategory::Crypto,
            },
            RiskFactor {
                code: "NEW_ACCOUNT".to_string(),
                description: "Account is only 15 days old".to_string(),
                severity: RiskLevel::Medium,
                score: 10,
                category: RiskCategory::Behavioral,
            },
            RiskFactor {
                code: "PEP_INDICATOR".to_string(),
                description: "Customer name contains PEP indicator keyword: 'minister'"
                    .to_string(),
                severity: RiskLevel::Medium,
                score: 15,
                category: RiskCategory::Pep,
            },
        ];
        let report = build_reasoning(
            &sample_tx(),
            &sample_customer(),
            RiskLevel::Medium,
            40,
            &factors,
        );
        assert!(report.contains("  Geographic: 0"));
        assert!(report.contains("  Transaction: 1"));
        assert!(report.contains("  Customer/Behavioral: 1"));
        assert!(report.contains("  Sanctions/PEP: 1"));
    }
}
