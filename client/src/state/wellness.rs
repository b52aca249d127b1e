//! Wellness mood and simulated gauges.

#[cfg(test)]
#[path = "wellness_test.rs"]
mod wellness_test;

use rand::Rng;

use crate::util::classify::{self, WellnessLevel};
use crate::util::random_walk::{self, ENERGY, FOCUS, SLEEP, STRESS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Neutral,
    Tired,
}

impl Mood {
    pub const ALL: [Self; 3] = [Self::Happy, Self::Neutral, Self::Tired];

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Tired => "Tired",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Neutral => "😐",
            Self::Tired => "😔",
        }
    }
}

/// The four wellness center gauges, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellnessGauges {
    pub energy: f64,
    pub stress: f64,
    pub focus: f64,
    pub sleep: f64,
}

impl Default for WellnessGauges {
    fn default() -> Self {
        Self { energy: 85.0, stress: 20.0, focus: 78.0, sleep: 92.0 }
    }
}

impl WellnessGauges {
    /// Advance every gauge by one random-walk step within its bounds.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self {
            energy: random_walk::random_walk(self.energy, ENERGY, rng),
            stress: random_walk::random_walk(self.stress, STRESS, rng),
            focus: random_walk::random_walk(self.focus, FOCUS, rng),
            sleep: random_walk::random_walk(self.sleep, SLEEP, rng),
        }
    }

    pub fn level(&self) -> WellnessLevel {
        classify::wellness_center_level(self.energy, self.stress, self.focus, self.sleep)
    }

    pub fn score(&self) -> f64 {
        classify::wellness_center_score(self.energy, self.stress, self.focus, self.sleep)
    }

    pub fn suggestion(&self) -> &'static str {
        classify::wellness_suggestion(self.energy, self.stress, self.focus, self.sleep)
    }
}

/// One static metric row on the dashboard wellness hub card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HubMetric {
    pub label: &'static str,
    pub value: f64,
    pub icon: &'static str,
}

pub const HUB_METRICS: [HubMetric; 4] = [
    HubMetric { label: "Energy Level", value: 75.0, icon: "⚡" },
    HubMetric { label: "Focus", value: 82.0, icon: "🧠" },
    HubMetric { label: "Stress Level", value: 35.0, icon: "❤" },
    HubMetric { label: "Sleep Quality", value: 68.0, icon: "👁" },
];

/// Plain average of hub metric values.
#[allow(clippy::cast_precision_loss)]
pub fn hub_average(metrics: &[HubMetric]) -> f64 {
    if metrics.is_empty() {
        return 0.0;
    }
    metrics.iter().map(|m| m.value).sum::<f64>() / metrics.len() as f64
}
