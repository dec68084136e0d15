use serde::{Deserialize, Serialize};
use std::fmt;

/// Notes stored on an entry when the caregiver leaves the notes field empty
pub const DEFAULT_NOTES: &str = "No extra notes provided.";

/// Time label given to entries created during the current session
pub const NEW_ENTRY_TIME_LABEL: &str = "Just now";

/// Identifier of one of the fixed child profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChildId {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl ChildId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildId::One => "1",
            ChildId::Two => "2",
        }
    }

    /// Profile metadata for this id
    pub fn profile(&self) -> &'static ChildProfile {
        match self {
            ChildId::One => &CHILD_PROFILES[0],
            ChildId::Two => &CHILD_PROFILES[1],
        }
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child the journal can attribute entries to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildProfile {
    pub id: ChildId,
    pub name: &'static str,
    pub age_years: u8,
}

impl ChildProfile {
    /// Dropdown label, e.g. "Aarav · 7 yrs"
    pub fn label(&self) -> String {
        format!("{} · {} yrs", self.name, self.age_years)
    }
}

/// The fixed set of child profiles. Not editable from the UI.
pub static CHILD_PROFILES: [ChildProfile; 2] = [
    ChildProfile { id: ChildId::One, name: "Aarav", age_years: 7 },
    ChildProfile { id: ChildId::Two, name: "Mia", age_years: 9 },
];

/// Caregiver-observed stress rating, 1 (very calm) to 5 (meltdown / shutdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Levels at or above this count as high stress
    pub const HIGH_THRESHOLD: u8 = 4;

    /// All levels in ascending order, for building selectors
    pub const ALL: [StressLevel; 5] = [
        StressLevel(1),
        StressLevel(2),
        StressLevel(3),
        StressLevel(4),
        StressLevel(5),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_high(&self) -> bool {
        self.0 >= Self::HIGH_THRESHOLD
    }

    /// Short description shown next to the number in the selector
    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Very calm",
            2 => "Mildly tense",
            3 => "Noticeable stress",
            4 => "Escalating",
            _ => "Meltdown / shutdown",
        }
    }

    /// Selector option label, e.g. "3 · Noticeable stress"
    pub fn option_label(&self) -> String {
        format!("{} · {}", self.0, self.description())
    }

    /// Timeline chip label, e.g. "Stress · 4/5"
    pub fn chip_label(&self) -> String {
        format!("Stress · {}/{}", self.0, Self::MAX)
    }
}

impl Default for StressLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "Stress level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )
        })
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

/// Qualitative environment descriptors attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub noise: String,
    pub brightness: String,
    pub crowd: String,
}

impl Environment {
    /// Mock descriptors for a freshly logged entry. Only noise depends on input.
    pub fn derived_from(stress_level: StressLevel) -> Self {
        let noise = if stress_level.is_high() { "High" } else { "Moderate" };
        Self {
            noise: noise.to_string(),
            brightness: "Mixed".to_string(),
            crowd: "Varies".to_string(),
        }
    }
}

/// One caregiver-logged observation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Session-unique id, assigned as `existing entries + 1`
    pub id: usize,
    pub child_id: ChildId,
    /// Display-only time label ("Just now", "Today · 09:15")
    pub time: String,
    pub activity: String,
    pub location: String,
    pub stress_level: StressLevel,
    pub notes: String,
    pub environment: Environment,
}

impl JournalEntry {
    /// Build a new entry from the submitted form.
    ///
    /// Empty notes are replaced with [`DEFAULT_NOTES`]; non-empty notes are kept verbatim.
    pub fn from_form(id: usize, child_id: ChildId, form: &FormState) -> Self {
        let notes = if form.notes.is_empty() {
            DEFAULT_NOTES.to_string()
        } else {
            form.notes.clone()
        };

        Self {
            id,
            child_id,
            time: NEW_ENTRY_TIME_LABEL.to_string(),
            activity: form.activity.clone(),
            location: form.location.clone(),
            stress_level: form.stress_level,
            notes,
            environment: Environment::derived_from(form.stress_level),
        }
    }
}

/// Entries present when the app starts, newest first
pub fn seed_entries() -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: 1,
            child_id: ChildId::One,
            time: "Today · 09:15".to_string(),
            activity: "Grocery store".to_string(),
            location: "Supermarket".to_string(),
            stress_level: StressLevel(4),
            notes: "Fluorescent lights + loud announcements, visible discomfort.".to_string(),
            environment: Environment {
                noise: "High".to_string(),
                brightness: "Harsh".to_string(),
                crowd: "Busy".to_string(),
            },
        },
        JournalEntry {
            id: 2,
            child_id: ChildId::One,
            time: "Yesterday · 19:30".to_string(),
            activity: "Reading time".to_string(),
            location: "Living room".to_string(),
            stress_level: StressLevel(1),
            notes: "Dim lights, white noise machine, very calm.".to_string(),
            environment: Environment {
                noise: "Low".to_string(),
                brightness: "Soft".to_string(),
                crowd: "Family only".to_string(),
            },
        },
    ]
}

/// Transient state of the new-entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub activity: String,
    pub location: String,
    pub stress_level: StressLevel,
    /// Minutes, captured as typed. Not used beyond the form.
    pub duration: String,
    pub notes: String,
    pub consent_given: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            activity: String::new(),
            location: String::new(),
            stress_level: StressLevel::default(),
            duration: "15".to_string(),
            notes: String::new(),
            consent_given: false,
        }
    }
}

/// A single field change reported by the journal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Activity(String),
    Location(String),
    StressLevel(StressLevel),
    Duration(String),
    Notes(String),
    ConsentGiven(bool),
}

/// Form fields that must be filled before an entry can be saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Activity,
    Location,
    Consent,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Activity => "Activity",
            RequiredField::Location => "Location",
            RequiredField::Consent => "Consent",
        }
    }
}

impl FormState {
    /// Merge one field change into the form, leaving the other fields untouched
    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::Activity(value) => self.activity = value,
            FormUpdate::Location(value) => self.location = value,
            FormUpdate::StressLevel(level) => self.stress_level = level,
            FormUpdate::Duration(value) => self.duration = value,
            FormUpdate::Notes(value) => self.notes = value,
            FormUpdate::ConsentGiven(checked) => self.consent_given = checked,
        }
    }

    /// First required field left blank, in form order.
    ///
    /// Mirrors a browser's `required` check: only an empty value counts as missing.
    pub fn first_missing_required(&self) -> Option<RequiredField> {
        if self.activity.is_empty() {
            Some(RequiredField::Activity)
        } else if self.location.is_empty() {
            Some(RequiredField::Location)
        } else if !self.consent_given {
            Some(RequiredField::Consent)
        } else {
            None
        }
    }
}

// Simulated analytics. These are demo constants and are never derived from entries.

/// Share of higher-stress entries (level 4–5) said to contain loud noise
pub const HIGH_STRESS_RATE_PERCENT: u32 = 68;
pub const NOISE_CORRELATION: f64 = 0.74;
pub const BRIGHTNESS_CORRELATION: f64 = 0.61;
pub const CROWD_MOTION_CORRELATION: f64 = 0.55;

/// A labeled correlation rendered as a bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationMetric {
    pub label: &'static str,
    pub value: f64,
}

pub const CORRELATIONS: [CorrelationMetric; 3] = [
    CorrelationMetric { label: "Noise spikes vs stress", value: NOISE_CORRELATION },
    CorrelationMetric { label: "Brightness changes vs stress", value: BRIGHTNESS_CORRELATION },
    CorrelationMetric { label: "Crowd motion vs stress", value: CROWD_MOTION_CORRELATION },
];

/// Badge shown in front of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    HighImpact,
    Consistent,
    Protective,
}

impl InsightKind {
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::HighImpact => "High impact",
            InsightKind::Consistent => "Consistent",
            InsightKind::Protective => "Protective",
        }
    }
}

/// A narrative trigger pattern: bold headline followed by plain detail text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInsight {
    pub kind: InsightKind,
    pub headline: &'static str,
    pub detail: String,
}

pub fn pattern_insights() -> Vec<PatternInsight> {
    vec![
        PatternInsight {
            kind: InsightKind::HighImpact,
            headline: "Loud, unpredictable noise",
            detail: format!(
                "appears in {}% of higher-stress entries (level 4–5).",
                HIGH_STRESS_RATE_PERCENT
            ),
        },
        PatternInsight {
            kind: InsightKind::Consistent,
            headline: "Harsh fluorescent lighting + crowd motion",
            detail: "strongly co-occur with stress escalations.".to_string(),
        },
        PatternInsight {
            kind: InsightKind::Protective,
            headline: "Dim lighting + predictable low noise",
            detail: "are present in most calm entries.".to_string(),
        },
    ]
}

/// Whether a profile tag marks a trigger or something that helps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Risk,
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTag {
    pub tone: TagTone,
    pub text: &'static str,
}

/// Demo sensory profile, keyed by display name rather than child id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensoryProfile {
    pub label: &'static str,
    pub tags: &'static [ProfileTag],
}

pub const SENSORY_PROFILES: [SensoryProfile; 2] = [
    SensoryProfile {
        label: "Aarav · 7 yrs",
        tags: &[
            ProfileTag { tone: TagTone::Risk, text: "High sensitivity to sudden noise" },
            ProfileTag { tone: TagTone::Risk, text: "Crowded indoor spaces" },
            ProfileTag { tone: TagTone::Safe, text: "Predictable routines" },
        ],
    },
    SensoryProfile {
        label: "Mia · 9 yrs",
        tags: &[
            ProfileTag { tone: TagTone::Risk, text: "Visual clutter" },
            ProfileTag { tone: TagTone::Safe, text: "Soft lighting" },
            ProfileTag { tone: TagTone::Safe, text: "Movement breaks" },
        ],
    },
];

/// Convert a 0–1 fraction into a whole percentage, rounding half up.
///
/// The product is first snapped to six decimal places so that values such as
/// `0.605`, which are stored as `0.60499999...`, round the way they read.
pub fn bar_percentage(fraction: f64) -> u32 {
    let scaled = fraction.clamp(0.0, 1.0) * 100.0;
    let snapped = (scaled * 1_000_000.0).round() / 1_000_000.0;
    (snapped + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            activity: "Playground".to_string(),
            location: "Park".to_string(),
            stress_level: StressLevel::new(2).unwrap(),
            duration: "20".to_string(),
            notes: "Swings were busy".to_string(),
            consent_given: true,
        }
    }

    #[test]
    fn test_bar_percentage_rounding() {
        assert_eq!(bar_percentage(0.74), 74);
        assert_eq!(bar_percentage(0.61), 61);
        assert_eq!(bar_percentage(0.55), 55);
        assert_eq!(bar_percentage(0.605), 61);
        assert_eq!(bar_percentage(0.615), 62);
        assert_eq!(bar_percentage(0.604), 60);
    }

    #[test]
    fn test_bar_percentage_clamps_out_of_range() {
        assert_eq!(bar_percentage(-0.2), 0);
        assert_eq!(bar_percentage(1.7), 100);
        assert_eq!(bar_percentage(0.0), 0);
        assert_eq!(bar_percentage(1.0), 100);
    }

    #[test]
    fn test_stress_level_bounds() {
        assert!(StressLevel::new(0).is_none());
        assert!(StressLevel::new(6).is_none());
        assert_eq!(StressLevel::new(5).unwrap().value(), 5);
        assert_eq!(StressLevel::default().value(), 3);
        assert!(StressLevel::try_from(9).is_err());
    }

    #[test]
    fn test_stress_level_labels() {
        let level = StressLevel::new(4).unwrap();
        assert_eq!(level.option_label(), "4 · Escalating");
        assert_eq!(level.chip_label(), "Stress · 4/5");
        assert_eq!(StressLevel::ALL.len(), 5);
        assert_eq!(StressLevel::ALL[0].description(), "Very calm");
        assert_eq!(StressLevel::ALL[4].description(), "Meltdown / shutdown");
    }

    #[test]
    fn test_environment_noise_follows_stress_threshold() {
        for level in StressLevel::ALL {
            let environment = Environment::derived_from(level);
            let expected = if level.value() >= 4 { "High" } else { "Moderate" };
            assert_eq!(environment.noise, expected);
            assert_eq!(environment.brightness, "Mixed");
            assert_eq!(environment.crowd, "Varies");
        }
    }

    #[test]
    fn test_entry_from_form_defaults_empty_notes() {
        let mut form = filled_form();
        form.notes.clear();

        let entry = JournalEntry::from_form(3, ChildId::Two, &form);

        assert_eq!(entry.id, 3);
        assert_eq!(entry.child_id, ChildId::Two);
        assert_eq!(entry.time, "Just now");
        assert_eq!(entry.notes, DEFAULT_NOTES);
        assert_eq!(entry.environment.noise, "Moderate");
    }

    #[test]
    fn test_entry_from_form_keeps_notes_verbatim() {
        let mut form = filled_form();
        form.notes = "  Hand dryer went off  ".to_string();
        form.stress_level = StressLevel::new(5).unwrap();

        let entry = JournalEntry::from_form(7, ChildId::One, &form);

        assert_eq!(entry.notes, "  Hand dryer went off  ");
        assert_eq!(entry.activity, "Playground");
        assert_eq!(entry.location, "Park");
        assert_eq!(entry.environment.noise, "High");
    }

    #[test]
    fn test_seed_entries_order() {
        let seeds = seed_entries();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].time, "Today · 09:15");
        assert_eq!(seeds[1].time, "Yesterday · 19:30");
        assert_eq!(seeds[0].environment.brightness, "Harsh");
        assert_eq!(seeds[1].environment.crowd, "Family only");
    }

    #[test]
    fn test_form_default_values() {
        let form = FormState::default();
        assert_eq!(form.activity, "");
        assert_eq!(form.location, "");
        assert_eq!(form.stress_level.value(), 3);
        assert_eq!(form.duration, "15");
        assert_eq!(form.notes, "");
        assert!(!form.consent_given);
    }

    #[test]
    fn test_form_apply_merges_single_field() {
        let mut form = filled_form();
        form.apply(FormUpdate::Location("Classroom".to_string()));
        form.apply(FormUpdate::ConsentGiven(false));

        assert_eq!(form.location, "Classroom");
        assert!(!form.consent_given);
        assert_eq!(form.activity, "Playground");
        assert_eq!(form.duration, "20");
    }

    #[test]
    fn test_first_missing_required() {
        let mut form = FormState::default();
        assert_eq!(form.first_missing_required(), Some(RequiredField::Activity));

        form.apply(FormUpdate::Activity("Bus ride".to_string()));
        assert_eq!(form.first_missing_required(), Some(RequiredField::Location));

        form.apply(FormUpdate::Location("School bus".to_string()));
        assert_eq!(form.first_missing_required(), Some(RequiredField::Consent));

        form.apply(FormUpdate::ConsentGiven(true));
        assert_eq!(form.first_missing_required(), None);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled_form();
        form.activity = " ".to_string();
        assert_eq!(form.first_missing_required(), None);
    }

    #[test]
    fn test_child_profiles() {
        assert_eq!(ChildId::default(), ChildId::One);
        assert_eq!(ChildId::One.as_str(), "1");
        assert_eq!(ChildId::Two.profile().label(), "Mia · 9 yrs");
        assert_eq!(CHILD_PROFILES[0].label(), "Aarav · 7 yrs");
    }

    #[test]
    fn test_simulated_analytics_are_fixed() {
        let insights = pattern_insights();
        assert_eq!(insights.len(), 3);
        assert!(insights[0].detail.contains("68%"));
        assert_eq!(insights[2].kind.label(), "Protective");

        let percentages: Vec<u32> = CORRELATIONS.iter().map(|c| bar_percentage(c.value)).collect();
        assert_eq!(percentages, vec![74, 61, 55]);

        assert_eq!(SENSORY_PROFILES[0].tags.len(), 3);
        assert_eq!(SENSORY_PROFILES[1].tags[0].tone, TagTone::Risk);
    }
}
