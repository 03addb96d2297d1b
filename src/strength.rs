//! Advisory password strength meter.
//!
//! The score is a rough hint rendered under the password field on every
//! keystroke. It is looser than the registration acceptance rules: a
//! special character counts toward strength but is never required, and a
//! password can be "Strong" here while still being rejected on submit.

use serde::Serialize;

const STRENGTH_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];
const STRENGTH_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthTier::None,
            1 => StrengthTier::Weak,
            2 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    pub fn score(self) -> u8 {
        match self {
            StrengthTier::None => 0,
            StrengthTier::Weak => 1,
            StrengthTier::Medium => 2,
            StrengthTier::Strong => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Fill color of the lit meter segments.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::None => "bg-transparent",
            StrengthTier::Weak => "bg-red-500",
            StrengthTier::Medium => "bg-yellow-500",
            StrengthTier::Strong => "bg-green-500",
        }
    }

    /// Text color of the label.
    pub fn text_class(self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "text-red-500",
            StrengthTier::Medium => "text-yellow-500",
            StrengthTier::Strong => "text-green-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    pub tier: StrengthTier,
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub text_class: &'static str,
}

impl StrengthResult {
    fn from_tier(tier: StrengthTier) -> Self {
        Self {
            tier,
            score: tier.score(),
            label: tier.label(),
            color: tier.color(),
            text_class: tier.text_class(),
        }
    }

    /// Whether meter segment `level` (1 to 3) is lit.
    pub fn lights(&self, level: u8) -> bool {
        level >= 1 && self.score >= level
    }
}

/// One point each for length >= 8, mixed ASCII case, and a digit or one
/// of `!@#$%^&*`. An empty password scores nothing.
pub fn score_password(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::from_tier(StrengthTier::None);
    }

    let mut score = 0u8;
    if crate::forms::fields::form_len(password) >= STRENGTH_MIN_CHARS {
        score += 1;
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        score += 1;
    }
    if password
        .chars()
        .any(|c| c.is_ascii_digit() || STRENGTH_SPECIALS.contains(&c))
    {
        score += 1;
    }

    StrengthResult::from_tier(StrengthTier::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_has_no_tier() {
        let result = score_password("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, "");
        assert_eq!(result.color, "bg-transparent");
        assert_eq!(result.text_class, "");
    }

    #[test]
    fn test_documented_tiers() {
        assert_eq!(score_password("abcdefgh").label, "Weak");
        assert_eq!(score_password("abcdefgh").score, 1);
        assert_eq!(score_password("Abcdefgh").label, "Medium");
        assert_eq!(score_password("Abcdefgh").score, 2);
        assert_eq!(score_password("Abcdef1!").label, "Strong");
        assert_eq!(score_password("Abcdef1!").score, 3);
    }

    #[test]
    fn test_short_lowercase_scores_zero_but_non_empty() {
        let result = score_password("abc");
        assert_eq!(result.tier, StrengthTier::None);
        assert_eq!(result.label, "");
    }

    #[test]
    fn test_single_case_does_not_count_as_mixed() {
        assert_eq!(score_password("ABCDEFGH").score, 1);
        assert_eq!(score_password("abcdefgh").score, 1);
    }

    #[test]
    fn test_special_character_counts_like_a_digit() {
        assert_eq!(score_password("ab!").score, 1);
        assert_eq!(score_password("ab7").score, 1);
        assert_eq!(score_password("ab~").score, 0);
    }

    #[test]
    fn test_strong_can_still_fail_acceptance() {
        // No digit: strong meter, rejected on submit.
        let password = "Abcdefg!";
        assert_eq!(score_password(password).tier, StrengthTier::Strong);
        assert!(crate::forms::fields::validate_new_password(password).is_err());
    }

    #[test]
    fn test_adding_a_feature_never_lowers_score() {
        let bases = ["", "a", "ab", "abcdefgh", "ABC", "Ab", "1", "!!!!"];
        let additions = ["abcdefgh", "Aa", "1", "!"];
        for base in bases {
            let before = score_password(base).score;
            for extra in additions {
                let after = score_password(&format!("{base}{extra}")).score;
                assert!(after >= before, "{base:?} + {extra:?} lowered the score");
            }
        }
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Three emoji are six UTF-16 units, so this reaches the length point.
        assert_eq!(score_password("Aa1😀😀😀").score, 3);
        assert_eq!(score_password("😀😀😀").score, 0);
        assert_eq!(score_password("😀😀😀😀").score, 1);
    }

    #[test]
    fn test_meter_segments() {
        let medium = score_password("Abcdefgh");
        assert!(medium.lights(1));
        assert!(medium.lights(2));
        assert!(!medium.lights(3));
        assert!(!medium.lights(0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(score_password("Abcdef1!")).unwrap();
        assert_eq!(json["tier"], "strong");
        assert_eq!(json["textClass"], "text-green-500");
        assert_eq!(json["color"], "bg-green-500");
    }
}
