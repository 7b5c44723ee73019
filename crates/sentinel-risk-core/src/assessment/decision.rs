use crate::types::{RecommendedAction, RiskLevel};

/// Fixed thresholds, evaluated highest-first.
pub fn risk_level_for(score: u32) -> RiskLevel {
    if score >= 80 {
        RiskLevel::Critical
    } else if score >= 60 {
        RiskLevel::High
    } else if score >= 40 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Action and SAR requirement from the clamped score.
///
/// SAR is not a pure function of the action: in [50,60) the engine
/// escalates without a mandatory SAR, while [60,75) escalates with
/// one. This reproduces the observed behavior and is deliberate.
pub fn decide(score: u32) -> (RecommendedAction, bool) {
    if score >= 75 {
        (RecommendedAction::Block, true)
    } else if score >= 50 {
        (RecommendedAction::Escalate, score >= 60)
    } else if score >= 30 {
        (RecommendedAction::Review, false)
    } else {
        (RecommendedAction::Approve, false)
    }
}

/// Caller-facing flag: anything at or above the REVIEW threshold
/// needs a human in the loop.
pub fn action_required(score: u32) -> bool {
    score >= 30
}

/// Fixed follow-up playbook per action.
pub fn next_steps_for(action: RecommendedAction) -> Vec<String> {
    let steps: &[&str] = match action {
        RecommendedAction::Block => &[
            "Immediately block transaction",
            "File Suspicious Activity Report (SAR)",
            "Escalate to compliance officer",
            "Freeze related accounts for review",
        ],
        RecommendedAction::Escalate => &[
            "Escalate to senior analyst",
            "Gather additional documentation",
            "Review customer history",
            "Consider enhanced due diligence",
        ],
        RecommendedAction::Review => &[
            "Manual review required",
            "Verify customer documentation",
            "Check transaction purpose",
        ],
        RecommendedAction::Approve => &["Transaction may proceed", "Standard monitoring applies"],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(risk_level_for(0), RiskLevel::Low);
        assert_eq!(risk_level_for(39), RiskLevel::Low);
        assert_eq!(risk_level_for(40), RiskLevel::Medium);
        assert_eq!(risk_level_for(59), RiskLevel::Medium);
        assert_eq!(risk_level_for(60), RiskLevel::High);
        assert_eq!(risk_level_for(79), RiskLevel::High);
        assert_eq!(risk_level_for(80), RiskLevel::Critical);
        assert_eq!(risk_level_for(100), RiskLevel::Critical);
    }

    #[test]
    fn risk_level_is_monotonic() {
        let mut previous = risk_level_for(0);
        for score in 1..=100 {
            let level = risk_level_for(score);
            assert!(level >= previous, "level regressed at score {}", score);
            previous = level;
        }
    }

    #[test]
    fn block_boundary_at_75() {
        assert_eq!(decide(75), (RecommendedAction::Block, true));
        // 74 escalates, and at 74 the SAR sub-threshold (60) is met.
        assert_eq!(decide(74), (RecommendedAction::Escalate, true));
    }

    #[test]
    fn escalate_without_sar_window() {
        assert_eq!(decide(50), (RecommendedAction::Escalate, false));
        assert_eq!(decide(59), (RecommendedAction::Escalate, false));
        assert_eq!(decide(60), (RecommendedAction::Escalate, true));
    }

    #[test]
    fn review_and_approve_never_require_sar() {
        assert_eq!(decide(30), (RecommendedAction::Review, false));
        assert_eq!(decide(49), (RecommendedAction::Review, false));
        assert_eq!(decide(29), (RecommendedAction::Approve, false));
        assert_eq!(decide(0), (RecommendedAction::Approve, false));
    }

    #[test]
    fn action_required_tracks_review_threshold() {
        assert!(!action_required(29));
        assert!(action_required(30));
    }

    #[test]
    fn next_steps_per_action() {
        assert_eq!(next_steps_for(RecommendedAction::Block).len(), 4);
        assert_eq!(next_steps_for(RecommendedAction::Escalate).len(), 4);
        assert_eq!(next_steps_for(RecommendedAction::Review).len(), 3);
        assert_eq!(
            next_steps_for(RecommendedAction::Approve),
            ["Transaction may proceed", "Standard monitoring applies"]
        );
        assert_eq!(
            next_steps_for(RecommendedAction::Block)[1],
            "File Suspicious Activity Report (SAR)"
        );
    }
}
