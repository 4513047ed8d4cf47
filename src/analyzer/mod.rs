// src/analyzer/mod.rs
pub mod sequential;

use std::sync::Arc;

use crate::breach::BreachChecker;
use crate::models::{AnalysisReport, PasswordAnalysis, StrengthLabel, SYMBOLS};
use crate::wordlist::CommonPasswordSet;

const SEQUENTIAL_MESSAGE: &str =
    "Avoid sequential characters like 'abcd' or '1234' for better security.";
const PWNED_MESSAGE: &str = "This password has appeared in data breaches. \
    For better security, it is recommended to use a different password.";

/// Orchestrates the individual checks into a single scored report.
/// Stateless per request; the common-password set is shared and read-only.
pub struct PasswordAnalyzer<B> {
    common: Arc<CommonPasswordSet>,
    breach: B,
}

impl<B: BreachChecker> PasswordAnalyzer<B> {
    pub fn new(common: Arc<CommonPasswordSet>, breach: B) -> Self {
        Self { common, breach }
    }

    /// Run every check against the password and fold the results into a
    /// clamped [0,100] score and label. Performs exactly one outbound
    /// breach lookup per call (none for the empty password).
    pub async fn analyze(&self, password: &str) -> AnalysisReport {
        if password.is_empty() {
            return empty_report();
        }

        let char_count = password.chars().count();
        let length = char_count >= 12;
        let uppercase = password.chars().any(char::is_uppercase);
        let lowercase = password.chars().any(char::is_lowercase);
        let number = password.chars().any(|c| c.is_ascii_digit());
        let symbol = password.chars().any(|c| SYMBOLS.contains(c));
        let not_common = !self.common.contains(password);

        let mut score: i32 = 0;

        // Length (0-30)
        if char_count >= 12 {
            score += 30;
        } else if char_count >= 8 {
            score += 20;
        }

        // Character diversity (0-40)
        for present in [uppercase, lowercase, number, symbol] {
            if present {
                score += 10;
            }
        }

        // Not a common password (0-20)
        if not_common {
            score += 20;
        }

        let has_run = sequential::has_sequential_run(password, sequential::DEFAULT_WINDOW);
        let (sequential, sequential_message) = if has_run {
            score -= 5;
            (false, SEQUENTIAL_MESSAGE.to_string())
        } else {
            score += 5;
            (true, String::new())
        };

        let (pwned, pwned_message) = if self.breach.is_breached(password).await {
            score -= 50;
            (true, PWNED_MESSAGE.to_string())
        } else {
            score += 5;
            (false, String::new())
        };

        let strength_score = score.clamp(0, 100) as u8;
        let strength_label = StrengthLabel::from_score(strength_score);
        log::debug!(
            "Analysis complete: score={} label={}",
            strength_score,
            strength_label.as_str()
        );

        AnalysisReport {
            analysis: PasswordAnalysis {
                length,
                uppercase,
                lowercase,
                number,
                symbol,
                not_common,
                sequential,
                sequential_message,
                pwned,
                pwned_message,
            },
            strength_label,
            strength_score,
        }
    }
}

// Fixed result for the empty password; not derived from the scoring path.
fn empty_report() -> AnalysisReport {
    AnalysisReport {
        analysis: PasswordAnalysis {
            length: false,
            uppercase: false,
            lowercase: false,
            number: false,
            symbol: false,
            not_common: true,
            sequential: true,
            sequential_message: String::new(),
            pwned: false,
            pwned_message: String::new(),
        },
        strength_label: StrengthLabel::VeryWeak,
        strength_score: 0,
    }
}
