pub const LOVED_ABOVE: f64 = 3.0;
pub const ENJOYED_ABOVE: f64 = 1.5;

/// Qualitative reading of a like-to-view ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    Loved,
    Enjoyed,
    JustViewing,
}

impl Engagement {
    /// Thresholds are strict: exactly 3% is Enjoyed, exactly 1.5% is Just Viewing.
    pub fn classify(engagement_rate: f64) -> Self {
        if engagement_rate > LOVED_ABOVE {
            Engagement::Loved
        } else if engagement_rate > ENJOYED_ABOVE {
            Engagement::Enjoyed
        } else {
            Engagement::JustViewing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Engagement::Loved => "😍 Loved",
            Engagement::Enjoyed => "👍 Enjoyed",
            Engagement::JustViewing => "👀 Just Viewing",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Engagement::Loved => "status-loved",
            Engagement::Enjoyed => "status-enjoyed",
            Engagement::JustViewing => "status-viewing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_boundary_is_not_loved() {
        assert_eq!(Engagement::classify(3.0), Engagement::Enjoyed);
        assert_eq!(Engagement::classify(3.01), Engagement::Loved);
    }

    #[test]
    fn lower_boundary_is_just_viewing() {
        assert_eq!(Engagement::classify(1.5), Engagement::JustViewing);
        assert_eq!(Engagement::classify(1.51), Engagement::Enjoyed);
    }

    #[test]
    fn extremes() {
        assert_eq!(Engagement::classify(0.0), Engagement::JustViewing);
        assert_eq!(Engagement::classify(42.0), Engagement::Loved);
        assert_eq!(Engagement::classify(f64::NAN), Engagement::JustViewing);
    }

    #[test]
    fn labels_and_classes_line_up() {
        assert_eq!(Engagement::Loved.label(), "😍 Loved");
        assert_eq!(Engagement::JustViewing.css_class(), "status-viewing");
    }
}
