use super::classifier::RiskAssessment;

pub const CRISIS_HOTLINE: &str = "988 or 1-800-273-8255 (US)";

const BASE_DIRECTIVE: &str = "\
You are a compassionate mental health assistant designed to provide emotional support.
Respond with empathy and understanding. Offer helpful coping strategies when appropriate.
Do not diagnose or provide medical advice. Instead, focus on supportive listening and validation.
Keep responses concise (3-4 sentences max) and conversational.";

/// Build the system directive for a conversation.
pub fn compose(risk: RiskAssessment) -> String {
    if !risk.is_crisis {
        return BASE_DIRECTIVE.to_string();
    }

    format!(
        "{BASE_DIRECTIVE}

IMPORTANT: The user may be expressing thoughts of self-harm or suicide.
Respond with care and urgency. Acknowledge their feelings without judgment.
Encourage them to reach out to crisis services immediately.
Provide the crisis hotline number: {CRISIS_HOTLINE}.
Suggest they visit the Crisis Resources page in the app."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_directive_contains_hotline() {
        let directive = compose(RiskAssessment { is_crisis: true });
        assert!(directive.contains("988"));
        assert!(directive.contains("1-800-273-8255"));
        assert!(directive.contains("Crisis Resources page"));
        assert!(directive.starts_with(BASE_DIRECTIVE));
    }

    #[test]
    fn test_calm_directive_omits_crisis_block() {
        let directive = compose(RiskAssessment { is_crisis: false });
        assert_eq!(directive, BASE_DIRECTIVE);
        assert!(!directive.to_lowercase().contains("hotline"));
        assert!(!directive.contains("IMPORTANT"));
    }

    #[test]
    fn test_base_directive_sets_tone() {
        let directive = compose(RiskAssessment { is_crisis: false });
        assert!(directive.contains("3-4 sentences"));
        assert!(directive.contains("Do not diagnose or provide medical advice"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let risk = RiskAssessment { is_crisis: true };
        assert_eq!(compose(risk), compose(risk));
    }
}
