// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Symbol set counted as the "symbol" character class, both for generation
/// and for analysis. Fixed for the lifetime of the process.
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?/~";

/// Options controlling password generation.
#[derive(Debug, Clone)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Per-check results of a password analysis. The two message fields are
/// empty strings whenever the corresponding finding did not trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysis {
    /// Password is at least 12 characters long
    pub length: bool,
    /// Contains at least one uppercase letter
    pub uppercase: bool,
    /// Contains at least one lowercase letter
    pub lowercase: bool,
    /// Contains at least one digit
    pub number: bool,
    /// Contains at least one symbol from the fixed symbol set
    pub symbol: bool,
    /// Lowercased password is absent from the common-password set
    pub not_common: bool,
    /// No sequential run (e.g. "abc", "321") was found
    pub sequential: bool,
    /// Advisory shown when a sequential run was found
    pub sequential_message: String,
    /// Password appears in the breach corpus
    pub pwned: bool,
    /// Advisory shown when the password was found in a breach
    pub pwned_message: String,
}

/// Qualitative strength category derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Map a clamped [0,100] score onto its label. Bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => StrengthLabel::VeryWeak,
            26..=45 => StrengthLabel::Weak,
            46..=65 => StrengthLabel::Moderate,
            66..=90 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

/// Complete result of analyzing one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub analysis: PasswordAnalysis,
    pub strength_label: StrengthLabel,
    pub strength_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds_are_inclusive() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(25), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(26), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(45), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(46), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(65), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(66), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(90), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(91), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(100), StrengthLabel::VeryStrong);
    }

    #[test]
    fn labels_serialize_with_spaces() {
        assert_eq!(
            serde_json::to_string(&StrengthLabel::VeryWeak).unwrap(),
            "\"Very Weak\""
        );
        assert_eq!(
            serde_json::to_string(&StrengthLabel::Moderate).unwrap(),
            "\"Moderate\""
        );
    }
}
