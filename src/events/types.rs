//! Life event and choice records

use serde::{Deserialize, Serialize};

use crate::character::stats::{Effects, StatKind};
use crate::events::catalog::EventKind;

crate::keyed_enum! {
    pub enum Category {
        Career => "career",
        Relationship => "relationship",
        Family => "family",
        Education => "education",
        Health => "health",
        Financial => "financial",
        Social => "social",
        Housing => "housing",
    }
}

crate::keyed_enum! {
    pub enum Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

crate::keyed_enum! {
    /// Structural change a choice makes to the character beyond its stats
    pub enum Transition {
        StartDating => "startDating",
        Marry => "marry",
        EndRelationship => "endRelationship",
        HaveChild => "haveChild",
        AdvanceEducation => "advanceEducation",
    }
}

/// One selectable outcome of a life event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub text: String,
    #[serde(rename = "effect")]
    pub effects: Effects,
    /// Recorded for reference; never scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_term_effects: Option<Effects>,
    /// Money the choice costs, in local currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    /// Time units the choice takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_required: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl Choice {
    pub fn new(text: &str, effects: &[(StatKind, f32)]) -> Self {
        Self {
            text: text.to_string(),
            effects: Effects::from_pairs(effects),
            long_term_effects: None,
            cost: None,
            time_required: None,
            transition: None,
        }
    }

    pub fn cost(mut self, amount: u32) -> Self {
        self.cost = Some(amount);
        self
    }

    pub fn time(mut self, units: u32) -> Self {
        self.time_required = Some(units);
        self
    }

    pub fn long_term(mut self, effects: &[(StatKind, f32)]) -> Self {
        self.long_term_effects = Some(Effects::from_pairs(effects));
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// A generated life event, pending or resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub category: Category,
    pub description: String,
    /// Immediate deltas attached to the event itself (recorded only)
    #[serde(rename = "effect")]
    pub effects: Effects,
    pub choices: Vec<Choice>,
    /// In-game year the event fired
    pub timestamp: i32,
    pub priority: Priority,
}

impl LifeEvent {
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Stable key used in decision logs
    pub fn key(&self) -> &'static str {
        self.kind.as_str()
    }
}
