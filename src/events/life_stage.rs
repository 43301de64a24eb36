//! Age brackets and the event pool each one draws from

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::core::types::RelationshipStatus;
use crate::events::catalog::EventKind;

/// Life stage a character's age falls into. Brackets are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeStage {
    /// Under 18; only reachable for children
    Minor,
    YoungAdult,
    EarlyCareer,
    Midlife,
    LateCareer,
    Senior,
}

impl LifeStage {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=17 => LifeStage::Minor,
            18..=25 => LifeStage::YoungAdult,
            26..=35 => LifeStage::EarlyCareer,
            36..=45 => LifeStage::Midlife,
            46..=60 => LifeStage::LateCareer,
            _ => LifeStage::Senior,
        }
    }

    /// Candidate events in draw order, before eligibility filtering
    pub fn pool(&self) -> &'static [EventKind] {
        use EventKind::*;
        match self {
            LifeStage::Minor => &[EducationOpportunity, JobOffer],
            LifeStage::YoungAdult => &[
                EducationOpportunity,
                JobOffer,
                DatingApp,
                StudyAbroad,
                FriendshipOpportunity,
                Investment,
                HousingDecision,
                StartupOpportunity,
                CommunityInvolvement,
                HousingMarketOpportunity,
            ],
            LifeStage::EarlyCareer => &[
                MarriageProposal,
                Promotion,
                ConsiderChildren,
                HousingDecision,
                CareerChange,
                HomeOwnership,
                LongDistance,
                MentalHealth,
                WorkLifePolicy,
                DebtManagement,
                VolunteerWork,
                WorkLifeBalance,
                FertilityConsultation,
                HousingMarketOpportunity,
                EconomicDownturn,
                CommunityInvolvement,
            ],
            LifeStage::Midlife => &[
                ChildEducation,
                RelationshipStrain,
                HealthCrisis,
                RemoteWorkOption,
                ChildActivityChoice,
                Adoption,
                FertilityTreatment,
                Promotion,
                Sabbatical,
                Entrepreneurship,
                LifestyleChange,
                Relocation,
                SecondChildDecision,
                ChildEducationChoice,
                ChildTalentDiscovery,
                ParentalBurnout,
                WorkLifeBalance,
                EconomicDownturn,
            ],
            LifeStage::LateCareer => &[
                ChildEducation,
                HealthCrisis,
                Promotion,
                RemoteWorkOption,
                TeenageChallenges,
                LifestyleChange,
                RelationshipStrain,
                Investment,
                CareerChange,
                ChildEducationChoice,
                WorkLifeBalance,
                HousingMarketOpportunity,
                EconomicDownturn,
                CommunityInvolvement,
            ],
            LifeStage::Senior => &[
                Retirement,
                HealthCrisis,
                Relocation,
                VolunteerWork,
                Investment,
                CommunityInvolvement,
                HousingMarketOpportunity,
            ],
        }
    }
}

/// Whether `kind` may fire for `character` right now
pub fn is_eligible(kind: EventKind, character: &Character) -> bool {
    match kind {
        EventKind::MarriageProposal => {
            character.relationship_status == RelationshipStatus::Dating
        }
        EventKind::ConsiderChildren => {
            character.relationship_status == RelationshipStatus::Married
                && !character.has_children()
        }
        kind if kind.requires_children() => character.has_children(),
        _ => true,
    }
}

/// The filtered pool for the character's current age
pub fn eligible_events(character: &Character) -> Vec<EventKind> {
    LifeStage::for_age(character.age)
        .pool()
        .iter()
        .copied()
        .filter(|kind| is_eligible(*kind, character))
        .collect()
}
