//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for characters
///
/// Partners, children and friends are stored as owned copies; anything that
/// needs to point back at another character does it through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

crate::keyed_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

crate::keyed_enum! {
    pub enum SexualOrientation {
        Heterosexual => "heterosexual",
        Homosexual => "homosexual",
        Bisexual => "bisexual",
        Asexual => "asexual",
    }
}

crate::keyed_enum! {
    pub enum RelationshipStatus {
        Single => "single",
        Dating => "dating",
        Engaged => "engaged",
        Married => "married",
        Divorced => "divorced",
        Widowed => "widowed",
        Cohabiting => "cohabiting",
    }
}

impl RelationshipStatus {
    /// Whether the character currently has a partner
    pub fn is_partnered(&self) -> bool {
        matches!(
            self,
            RelationshipStatus::Dating
                | RelationshipStatus::Engaged
                | RelationshipStatus::Married
                | RelationshipStatus::Cohabiting
        )
    }
}

crate::keyed_enum! {
    /// Ordered from least to most schooling
    pub enum EducationLevel {
        Elementary => "elementary",
        HighSchool => "highSchool",
        Bachelor => "bachelor",
        Master => "master",
        Doctorate => "doctorate",
    }
}

impl EducationLevel {
    /// The next level up, saturating at a doctorate
    pub fn next(&self) -> Self {
        match self {
            EducationLevel::Elementary => EducationLevel::HighSchool,
            EducationLevel::HighSchool => EducationLevel::Bachelor,
            EducationLevel::Bachelor => EducationLevel::Master,
            EducationLevel::Master | EducationLevel::Doctorate => EducationLevel::Doctorate,
        }
    }
}

crate::keyed_enum! {
    pub enum JobSector {
        Technology => "technology",
        Healthcare => "healthcare",
        Education => "education",
        Finance => "finance",
        Service => "service",
        Manufacturing => "manufacturing",
        Government => "government",
        Arts => "arts",
        Unemployed => "unemployed",
    }
}

crate::keyed_enum! {
    pub enum HousingType {
        Apartment => "apartment",
        House => "house",
        Villa => "villa",
        LivingWithParents => "livingWithParents",
        SharedHousing => "sharedHousing",
    }
}

crate::keyed_enum! {
    pub enum Ownership {
        Rent => "rent",
        Own => "own",
        Mortgage => "mortgage",
    }
}

crate::keyed_enum! {
    pub enum PersonalityTrait {
        Ambitious => "ambitious",
        Nurturing => "nurturing",
        Adventurous => "adventurous",
        Stable => "stable",
        Creative => "creative",
        Analytical => "analytical",
        Social => "social",
        Independent => "independent",
    }
}

crate::keyed_enum! {
    pub enum LifeValue {
        Career => "career",
        Family => "family",
        Stability => "stability",
        Freedom => "freedom",
        Wealth => "wealth",
        Creativity => "creativity",
        Social => "social",
        Health => "health",
    }
}

crate::keyed_enum! {
    pub enum ParentingStyle {
        Authoritative => "authoritative",
        Permissive => "permissive",
        Strict => "strict",
        Neglectful => "neglectful",
    }
}

crate::keyed_enum! {
    pub enum GameMode {
        Sandbox => "sandbox",
        Scenario => "scenario",
        /// Accepted for compatibility; no synchronization is implemented
        Multiplayer => "multiplayer",
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Sandbox
    }
}
