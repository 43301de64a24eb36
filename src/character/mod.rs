//! Characters: identity, visible stats, hidden attributes and life history

pub mod factory;
pub mod hidden;
pub mod stats;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::types::{
    CharacterId, EducationLevel, Gender, HousingType, JobSector, LifeValue, Ownership,
    ParentingStyle, PersonalityTrait, RelationshipStatus, SexualOrientation,
};
use crate::country::Country;
use crate::events::LifeEvent;

pub use factory::{create_character, create_child, CharacterSpec};
pub use hidden::HiddenAttributes;
pub use stats::{clamp_stat, Effects, StatKind, Stats};

/// The simulated person
///
/// Relatives and friends are owned value copies, so the structure is a tree
/// with no back-pointers. Cross-references go through [`CharacterId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub gender: Gender,
    pub sexual_orientation: SexualOrientation,
    pub age: u32,
    pub education_level: EducationLevel,
    pub relationship_status: RelationshipStatus,
    pub partner: Option<Box<Character>>,
    pub children: Vec<Character>,
    pub job: Option<Job>,
    pub housing: Option<Housing>,
    pub country: Arc<Country>,
    pub stats: Stats,
    /// Resolved events, oldest first
    pub events: Vec<LifeEvent>,
    pub personality_traits: Vec<PersonalityTrait>,
    pub life_values: Vec<LifeValue>,
    pub hidden_attributes: HiddenAttributes,
    pub parenting_style: Option<ParentingStyle>,
    pub mental_health_history: Vec<MentalHealthEvent>,
    pub social_circle: Vec<Character>,
}

impl Character {
    pub fn has_trait(&self, trait_: PersonalityTrait) -> bool {
        self.personality_traits.contains(&trait_)
    }

    pub fn has_value(&self, value: LifeValue) -> bool {
        self.life_values.contains(&value)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of events the character has resolved
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub sector: JobSector,
    pub salary: f32,
    pub satisfaction: f32,
    pub work_hours: f32,
    pub remote: bool,
    pub prestige: f32,
    pub stress_level: f32,
    pub benefits: JobBenefits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobBenefits {
    /// Paid leave days per year
    pub paid_leave: u32,
    /// Parental leave days
    pub parental_leave: u32,
    pub childcare: bool,
    pub flexible_hours: bool,
    pub health_insurance: bool,
    pub retirement: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Housing {
    #[serde(rename = "type")]
    pub kind: HousingType,
    pub cost: f32,
    /// Square metres
    pub size: f32,
    pub location: String,
    pub quality: f32,
    pub market_value: f32,
    pub ownership: Ownership,
}

crate::keyed_enum! {
    pub enum MentalHealthKind {
        Depression => "depression",
        Anxiety => "anxiety",
        Burnout => "burnout",
        Postpartum => "postpartum",
        Therapy => "therapy",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentalHealthEvent {
    #[serde(rename = "type")]
    pub kind: MentalHealthKind,
    pub severity: f32,
    /// Years
    pub duration: u32,
    /// In-game year
    pub timestamp: i32,
    pub resolved: bool,
}
