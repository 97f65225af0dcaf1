use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Landing quality
// ---------------------------------------------------------------------------

/// Verdict on a touchdown, graded by impact speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingQuality {
    Perfect,
    Excellent,
    Good,
    Moderate,
    Hard,
    Dangerous,
}

impl LandingQuality {
    pub fn from_speed(speed: f64) -> Self {
        if speed <= 3.0 {
            LandingQuality::Perfect
        } else if speed <= 5.0 {
            LandingQuality::Excellent
        } else if speed <= 8.0 {
            LandingQuality::Good
        } else if speed <= 12.0 {
            LandingQuality::Moderate
        } else if speed <= 20.0 {
            LandingQuality::Hard
        } else {
            LandingQuality::Dangerous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LandingQuality::Perfect => "Perfect",
            LandingQuality::Excellent => "Excellent",
            LandingQuality::Good => "Good",
            LandingQuality::Moderate => "Moderate",
            LandingQuality::Hard => "Hard",
            LandingQuality::Dangerous => "Dangerous",
        }
    }
}

impl fmt::Display for LandingQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// First-contact latch over the per-step ground signal
// ---------------------------------------------------------------------------

/// Turns the repeating ground-hit signal into a single landing event.
#[derive(Debug, Clone, Default)]
pub struct LandingDetector {
    impact_speed: Option<f64>,
}

impl LandingDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one ground-hit. Returns the impact speed only on the first call
    /// since construction or the last `reset`.
    pub fn observe(&mut self, speed: f64) -> Option<f64> {
        if self.impact_speed.is_some() {
            return None;
        }
        self.impact_speed = Some(speed);
        Some(speed)
    }

    pub fn impact_speed(&self) -> Option<f64> {
        self.impact_speed
    }

    pub fn has_landed(&self) -> bool {
        self.impact_speed.is_some()
    }

    pub fn reset(&mut self) {
        self.impact_speed = None;
    }
}
