// ABOUTME: Closed mood catalog with titles, categories, and templated diagnostic texts
// ABOUTME: The Mood enum keeps the text catalog and the scorer set in lock-step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcast Contributors

//! Mood catalog
//!
//! Each mood is one variant of the closed [`Mood`] enum. Text lookup and
//! scorer dispatch are both exhaustive matches over the same enum, so the
//! two registries cannot drift apart — adding a mood without its texts or
//! its scorer is a compile error, not a runtime surprise.
//!
//! The catalog is `'static` data: process-wide, immutable, shared read-only
//! by all requests without locking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The seven diagnostic moods, keyed by stable snake_case strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Low Battery Human — maximize sunlight and warmth
    LowBattery,
    /// Posture Emergency — crisp, dry, upright-walking weather
    PostureEmergency,
    /// Doomscroll Detox — calm and sensory-rich
    DoomscrollDetox,
    /// Burnout Recovery Protocol — low stimulation, soft light
    BurnoutRecovery,
    /// Long Term Health Investment — stable and sustainable
    LongTermHealth,
    /// Natural Hygiene Intervention — the wettest window available
    HygieneIntervention,
    /// Character Development Arc — the worst safe window of the day
    CharacterDevelopment,
}

impl Mood {
    /// Every mood, in catalog order
    pub const ALL: [Self; 7] = [
        Self::LowBattery,
        Self::PostureEmergency,
        Self::DoomscrollDetox,
        Self::BurnoutRecovery,
        Self::LongTermHealth,
        Self::HygieneIntervention,
        Self::CharacterDevelopment,
    ];

    /// Stable string key for this mood
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LowBattery => "low_battery",
            Self::PostureEmergency => "posture_emergency",
            Self::DoomscrollDetox => "doomscroll_detox",
            Self::BurnoutRecovery => "burnout_recovery",
            Self::LongTermHealth => "long_term_health",
            Self::HygieneIntervention => "hygiene_intervention",
            Self::CharacterDevelopment => "character_development",
        }
    }

    /// Catalog entry for this mood
    #[must_use]
    pub const fn definition(self) -> &'static MoodDefinition {
        match self {
            Self::LowBattery => &LOW_BATTERY,
            Self::PostureEmergency => &POSTURE_EMERGENCY,
            Self::DoomscrollDetox => &DOOMSCROLL_DETOX,
            Self::BurnoutRecovery => &BURNOUT_RECOVERY,
            Self::LongTermHealth => &LONG_TERM_HEALTH,
            Self::HygieneIntervention => &HYGIENE_INTERVENTION,
            Self::CharacterDevelopment => &CHARACTER_DEVELOPMENT,
        }
    }

    fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|mood| mood.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.key() == s)
            .ok_or_else(|| EngineError::UnknownMood {
                mood: s.to_owned(),
                valid_moods: Self::valid_keys(),
            })
    }
}

/// Static catalog entry for one mood
///
/// The three text fields may contain a `{human}` placeholder, replaced with
/// `"name (your relationship)"` when rendered into a response.
#[derive(Debug, Clone, Copy)]
pub struct MoodDefinition {
    /// Human-readable title
    pub title: &'static str,
    /// Catalog category
    pub category: &'static str,
    /// Templated diagnosis text
    pub diagnosis: &'static str,
    /// Templated prescription text
    pub prescription: &'static str,
    /// Templated expert tip text
    pub experts_recommend: &'static str,
}

/// Catalog texts rendered for a concrete human
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTexts {
    /// Diagnosis with `{human}` substituted
    pub diagnosis: String,
    /// Prescription text
    pub prescription: String,
    /// Expert tip text
    pub experts_recommend: String,
}

impl MoodDefinition {
    /// Render the templated texts for a concrete human
    #[must_use]
    pub fn render(&self, human_name: &str, relationship: &str) -> RenderedTexts {
        let human = format!("{human_name} (your {relationship})");
        RenderedTexts {
            diagnosis: self.diagnosis.replace("{human}", &human),
            prescription: self.prescription.replace("{human}", &human),
            experts_recommend: self.experts_recommend.replace("{human}", &human),
        }
    }
}

static LOW_BATTERY: MoodDefinition = MoodDefinition {
    title: "Low Battery Human",
    category: "diagnostic",
    diagnosis: "Acute Vitamin D Deficiency & Circadian Dysregulation.\n\n\
        Prolonged rotting leads to \"The Fog.\" If {human} isn't manually \
        dragged into the light, they may eventually become one with the mattress. \
        Following this protocol is the only way to restart their serotonin production.",
    prescription: "To properly reboot the system, we need direct sunlight and maximum UV exposure. \
        The optimal window for our 20\u{2013}30 minute \"Low-Impact Sun-Soak\" is below. \
        Sticking to flat pavement \u{2014} their legs are currently made of jelly.",
    experts_recommend: "At least 5 minutes of standing perfectly still in a sun-patch. \
        End the walk at an outdoor coffee shop for a \"liquid battery\" \
        (caffeine) for them and a pup cup for you.",
};

static POSTURE_EMERGENCY: MoodDefinition = MoodDefinition {
    title: "Posture Emergency",
    category: "diagnostic",
    diagnosis: "Advanced Kyphosis (aka \"The Shrimp Effect\").\n\n\
        {human}'s vertebrae are currently screaming in a language only dogs can hear. \
        If they continue to fold, they will eventually lose the ability to reach \
        the high shelf where the treats are kept.",
    prescription: "We need clear visibility and a crisp atmosphere to encourage upright movement. \
        Initiating 45 minutes of Structural Realignment Therapy. \
        Seek out \"High-Resistance Terrain\" (hills or stairs) to force them to look up.",
    experts_recommend: "Find a sturdy tree or a fence. Pretend to sniff something very high up \
        so they have to stretch their neck to see what you're looking at.",
};

static DOOMSCROLL_DETOX: MoodDefinition = MoodDefinition {
    title: "Doomscroll Detox",
    category: "diagnostic",
    diagnosis: "Vertical-Swipe Psychosis & Dopamine Fried-Circuitry.\n\n\
        Excessive consumption of \"POV\" videos has caused {human}'s brain to turn \
        into digital sludge. They have forgotten that the world exists in 3D. \
        This intervention is mandatory for their sanity.",
    prescription: "The goal is a high-sensory environment that makes screens impossible to read. \
        The best time for our 40-minute \"Analog Sensory Overload\" is below. \
        Heading to a \"Distraction Zone\" (the park or a busy street) \
        to drown out the digital noise.",
    experts_recommend: "Touching grass. Specifically, find some damp lawn and walk across it. \
        Force them to navigate uneven ground so they have to put the phone \
        in their pocket or risk a \"Major L.\"",
};

static BURNOUT_RECOVERY: MoodDefinition = MoodDefinition {
    title: "Burnout Recovery Protocol",
    category: "diagnostic",
    diagnosis: "Cognitive Overload & System Glitch.\n\n\
        {human}'s brain has too many tabs open and the cooling fan is broken. \
        They are currently a \"Glass Battery\" \u{2014} one more email \
        and they might actually shatter.",
    prescription: "We need low-stimulation, dim lighting, and minimal noise to clear the cache. \
        Our 50-minute \"Silent-Mode Decompression\" is best performed below \
        in a \"Zero-Noise\" environment like a botanical garden or quiet suburb.",
    experts_recommend: "Finding a bench and sitting on their feet for 10 minutes. \
        This provides \"Deep Pressure Therapy\" and forces them to stare at a tree \
        instead of thinking about their \"Inbox Zero\" goal.",
};

static LONG_TERM_HEALTH: MoodDefinition = MoodDefinition {
    title: "Long Term Health Investment",
    category: "diagnostic",
    diagnosis: "Sedentary Lifestyle Syndrome.\n\n\
        {human} is acting like they have nine lives. They do not. \
        To ensure maximum \"Fetch Years,\" we must initiate \
        preventative maintenance immediately.",
    prescription: "We require moderate temperatures and stable conditions to maintain \
        a consistent heart rate. Our 60-minute \"Longevity Loop\" is scheduled below. \
        Soft trails or forest paths are best to save their aging human joints.",
    experts_recommend: "A tactical hydration break. Stop at a water fountain or a stream. \
        Show them how refreshing it is to just drink water and exist in nature \
        without a \"deliverable.\"",
};

static HYGIENE_INTERVENTION: MoodDefinition = MoodDefinition {
    title: "Natural Hygiene Intervention",
    category: "diagnostic",
    diagnosis: "Gamer-Musk Saturation & Olfactory Offense.\n\n\
        The scent profile of {human} has moved from \"Owner\" to \"Locker Room.\" \
        This is an affront to your 300 million scent receptors. \
        Atmospheric rinsing is now the only option.",
    prescription: "We are waiting for high humidity or actual precipitation to facilitate \
        a \"Nature's Power-Wash.\" The optimal rinse-cycle window is below. \
        We're doing 15\u{2013}20 minutes in an open field for maximum coverage.",
    experts_recommend: "Performing a \"Big Shake\" right next to their legs upon return. \
        They need to understand that being wet is a shared experience. \
        Suggest a warm shower for them immediately after.",
};

static CHARACTER_DEVELOPMENT: MoodDefinition = MoodDefinition {
    title: "Character Development Arc",
    category: "diagnostic",
    diagnosis: "Chronic Comfort-Zone Sequestration.\n\n\
        {human} has become \"soft.\" They are afraid of a light breeze \
        and a little dampness. Without regular exposure to minor inconvenience, \
        they will lose their \"Main Character\" energy.",
    prescription: "We are looking for the most \"challenging\" weather window of the day \
        to build some actual grit. We are heading out for 30 minutes of \
        \"Adversity Training\" below. Choose the windiest route possible \
        and go through the mud, not around it.",
    experts_recommend: "No shortcuts. Even if they sigh or pull their hood up, you must stop \
        to sniff every single vertical surface. \
        They need to learn patience through suffering.",
};
