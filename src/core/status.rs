// src/core/status.rs

use strum::{Display, EnumIter};

/// Five-bucket classification of a trust score, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum StatusLabel {
    #[strum(to_string = "Highly Trustworthy Site")]
    HighlyTrustworthy,
    #[strum(to_string = "Trustworthy Site")]
    Trustworthy,
    #[strum(to_string = "Moderately Suspicious")]
    ModeratelySuspicious,
    #[strum(to_string = "Suspicious Site")]
    Suspicious,
    #[strum(to_string = "Phishing Suspected")]
    PhishingSuspected,
}

/// Coarse colour bucket for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Caution,
    Danger,
}

impl StatusLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => StatusLabel::HighlyTrustworthy,
            7..=8 => StatusLabel::Trustworthy,
            5..=6 => StatusLabel::ModeratelySuspicious,
            3..=4 => StatusLabel::Suspicious,
            _ => StatusLabel::PhishingSuspected,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StatusLabel::HighlyTrustworthy | StatusLabel::Trustworthy => Tone::Safe,
            StatusLabel::ModeratelySuspicious => Tone::Caution,
            StatusLabel::Suspicious | StatusLabel::PhishingSuspected => Tone::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn buckets_at_every_boundary() {
        let expected = [
            (0, StatusLabel::PhishingSuspected),
            (1, StatusLabel::PhishingSuspected),
            (2, StatusLabel::PhishingSuspected),
            (3, StatusLabel::Suspicious),
            (4, StatusLabel::Suspicious),
            (5, StatusLabel::ModeratelySuspicious),
            (6, StatusLabel::ModeratelySuspicious),
            (7, StatusLabel::Trustworthy),
            (8, StatusLabel::Trustworthy),
            (9, StatusLabel::HighlyTrustworthy),
            (10, StatusLabel::HighlyTrustworthy),
        ];
        for (score, label) in expected {
            assert_eq!(StatusLabel::from_score(score), label, "score {}", score);
        }
    }

    #[test]
    fn labels_render_as_display_text() {
        let texts: Vec<String> = StatusLabel::iter().map(|l| l.to_string()).collect();
        assert_eq!(
            texts,
            vec![
                "Highly Trustworthy Site",
                "Trustworthy Site",
                "Moderately Suspicious",
                "Suspicious Site",
                "Phishing Suspected",
            ]
        );
    }

    #[test]
    fn tone_splits_at_seven_and_five() {
        assert_eq!(StatusLabel::from_score(7).tone(), Tone::Safe);
        assert_eq!(StatusLabel::from_score(6).tone(), Tone::Caution);
        assert_eq!(StatusLabel::from_score(5).tone(), Tone::Caution);
        assert_eq!(StatusLabel::from_score(4).tone(), Tone::Danger);
    }
}
