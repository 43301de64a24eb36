//! The event catalog
//!
//! Every event the simulation can raise, keyed by the camelCase identifier
//! that appears in decision logs. Descriptions are rendered against the
//! character at generation time; a few pick a random detail.

use rand::Rng;

use crate::character::stats::{Effects, StatKind::*};
use crate::character::Character;
use crate::core::error::{LifeSimError, Result};
use crate::core::types::{Ownership, PersonalityTrait};
use crate::events::types::{Category, Choice, LifeEvent, Priority, Transition};

crate::keyed_enum! {
    pub enum EventKind {
        // Career
        JobOffer => "jobOffer",
        Promotion => "promotion",
        CareerChange => "careerChange",
        RemoteWorkOption => "remoteWorkOption",
        WorkLifePolicy => "workLifePolicy",
        OvertimeRequest => "overtimeRequest",
        Sabbatical => "sabbatical",
        Entrepreneurship => "entrepreneurship",
        StartupOpportunity => "startupOpportunity",
        WorkLifeBalance => "workLifeBalance",
        Retirement => "retirement",

        // Relationships
        MarriageProposal => "marriageProposal",
        RelationshipStrain => "relationshipStrain",
        DatingApp => "datingApp",
        LongDistance => "longDistance",

        // Family
        ConsiderChildren => "considerChildren",
        Pregnancy => "pregnancy",
        Childcare => "childcare",
        Adoption => "adoption",
        FertilityTreatment => "fertilityTreatment",
        FertilityConsultation => "fertilityConsultation",
        SecondChildDecision => "secondChildDecision",
        ChildEducation => "childEducation",
        ChildActivityChoice => "childActivityChoice",
        ChildTalentDiscovery => "childTalentDiscovery",
        TeenageChallenges => "teenageChallenges",

        // Education
        EducationOpportunity => "educationOpportunity",
        StudyAbroad => "studyAbroad",
        ChildEducationChoice => "childEducationChoice",

        // Housing
        HousingDecision => "housingDecision",
        HomeOwnership => "homeOwnership",
        Relocation => "relocation",
        HousingMarketOpportunity => "housingMarketOpportunity",

        // Health
        HealthCrisis => "healthCrisis",
        MentalHealth => "mentalHealth",
        LifestyleChange => "lifestyleChange",
        ParentalBurnout => "parentalBurnout",

        // Financial
        Investment => "investment",
        DebtManagement => "debtManagement",
        EconomicDownturn => "economicDownturn",

        // Social
        FriendshipOpportunity => "friendshipOpportunity",
        VolunteerWork => "volunteerWork",
        CommunityInvolvement => "communityInvolvement",
    }
}

impl EventKind {
    pub fn category(&self) -> Category {
        use EventKind::*;
        match self {
            JobOffer | Promotion | CareerChange | RemoteWorkOption | WorkLifePolicy
            | OvertimeRequest | Sabbatical | Entrepreneurship | StartupOpportunity
            | WorkLifeBalance | Retirement => Category::Career,
            MarriageProposal | RelationshipStrain | DatingApp | LongDistance => {
                Category::Relationship
            }
            ConsiderChildren | Pregnancy | Childcare | Adoption | FertilityTreatment
            | FertilityConsultation | SecondChildDecision | ChildEducation
            | ChildActivityChoice | ChildTalentDiscovery | TeenageChallenges => Category::Family,
            EducationOpportunity | StudyAbroad | ChildEducationChoice => Category::Education,
            HousingDecision | HomeOwnership | Relocation | HousingMarketOpportunity => {
                Category::Housing
            }
            HealthCrisis | MentalHealth | LifestyleChange | ParentalBurnout => Category::Health,
            Investment | DebtManagement | EconomicDownturn => Category::Financial,
            FriendshipOpportunity | VolunteerWork | CommunityInvolvement => Category::Social,
        }
    }

    pub fn priority(&self) -> Priority {
        use EventKind::*;
        match self {
            ParentalBurnout => Priority::Critical,
            StartupOpportunity
            | FertilityConsultation
            | SecondChildDecision
            | ChildEducationChoice
            | HousingMarketOpportunity
            | EconomicDownturn => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Whether the event is about the character's children
    pub fn requires_children(&self) -> bool {
        use EventKind::*;
        matches!(
            self,
            ChildEducation
                | ChildEducationChoice
                | ChildActivityChoice
                | ChildTalentDiscovery
                | TeenageChallenges
                | SecondChildDecision
                | ParentalBurnout
        )
    }
}

/// Instantiate an event for `character` in `year`
pub fn create_event<R: Rng + ?Sized>(
    kind: EventKind,
    year: i32,
    character: &Character,
    rng: &mut R,
) -> LifeEvent {
    let (description, effects, choices) = definition(kind, character, rng);
    LifeEvent {
        kind,
        category: kind.category(),
        description,
        effects,
        choices,
        timestamp: year,
        priority: kind.priority(),
    }
}

/// Instantiate an event by its string key
///
/// Fails with [`LifeSimError::UnknownEvent`] when the key is not in the
/// catalog.
pub fn create_event_by_key<R: Rng + ?Sized>(
    key: &str,
    year: i32,
    character: &Character,
    rng: &mut R,
) -> Result<LifeEvent> {
    let kind = key
        .parse::<EventKind>()
        .map_err(|_| LifeSimError::UnknownEvent(key.to_string()))?;
    Ok(create_event(kind, year, character, rng))
}

fn either<R: Rng + ?Sized>(rng: &mut R, a: &'static str, b: &'static str) -> &'static str {
    if rng.gen_bool(0.5) {
        a
    } else {
        b
    }
}

fn fx(pairs: &[(crate::character::stats::StatKind, f32)]) -> Effects {
    Effects::from_pairs(pairs)
}

fn fixed(text: &str) -> String {
    text.to_string()
}

fn definition<R: Rng + ?Sized>(
    kind: EventKind,
    character: &Character,
    rng: &mut R,
) -> (String, Effects, Vec<Choice>) {
    match kind {
        EventKind::JobOffer => (
            fixed("You've received a job offer with higher pay but longer hours."),
            Effects::new(),
            vec![
                Choice::new(
                    "Accept the job for better finances but less free time",
                    &[(Finances, 10.0), (Energy, -5.0), (WorkEthic, 5.0)],
                ),
                Choice::new(
                    "Stay at your current job for work-life balance",
                    &[(Happiness, 5.0), (Energy, 5.0), (Finances, -5.0)],
                ),
            ],
        ),
        EventKind::Promotion => (
            fixed("Your boss offers you a promotion with more responsibilities."),
            Effects::new(),
            vec![
                Choice::new(
                    "Accept the promotion and the challenge",
                    &[(Finances, 15.0), (WorkEthic, 10.0), (Energy, -10.0)],
                ),
                Choice::new(
                    "Decline and maintain current work-life balance",
                    &[(Happiness, 5.0), (RelationshipSatisfaction, 5.0), (Finances, -5.0)],
                ),
            ],
        ),
        EventKind::CareerChange => (
            fixed("You're considering a complete career change to follow your passion."),
            Effects::new(),
            vec![
                Choice::new(
                    "Take the risk and change careers",
                    &[(Happiness, 15.0), (Finances, -15.0), (WorkEthic, 10.0)],
                ),
                Choice::new(
                    "Stay in your current field for stability",
                    &[(Finances, 5.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Take classes in your passion while keeping your job",
                    &[(Energy, -10.0), (Happiness, 5.0), (WorkEthic, 5.0)],
                ),
            ],
        ),
        EventKind::RemoteWorkOption => (
            fixed("Your company is offering the option to work remotely."),
            Effects::new(),
            vec![
                Choice::new(
                    "Switch to full remote work",
                    &[(Energy, 10.0), (Happiness, 5.0), (RelationshipSatisfaction, 5.0)],
                ),
                Choice::new("Choose a hybrid schedule", &[(Energy, 5.0), (Happiness, 5.0)]),
                Choice::new(
                    "Continue working at the office",
                    &[(WorkEthic, 5.0), (Finances, 5.0)],
                ),
            ],
        ),
        EventKind::WorkLifePolicy => (
            fixed("Your company is implementing new policies affecting work-life balance."),
            Effects::new(),
            vec![
                Choice::new(
                    "Advocate for better parental leave policies",
                    &[(Happiness, 5.0), (RelationshipSatisfaction, 5.0), (WorkEthic, -5.0)],
                ),
                Choice::new(
                    "Push for flexible working hours",
                    &[(Happiness, 10.0), (Energy, 5.0), (WorkEthic, -5.0)],
                ),
                Choice::new(
                    "Accept the policies as they are",
                    &[(WorkEthic, 5.0), (Happiness, -5.0)],
                ),
            ],
        ),
        EventKind::OvertimeRequest => (
            fixed("Your boss asks if you can work overtime for the next month."),
            Effects::new(),
            vec![
                Choice::new(
                    "Accept for the extra money",
                    &[
                        (Finances, 10.0),
                        (Energy, -10.0),
                        (RelationshipSatisfaction, -5.0),
                        (Happiness, -5.0),
                    ],
                ),
                Choice::new(
                    "Decline to maintain family time",
                    &[(Finances, -5.0), (RelationshipSatisfaction, 10.0), (Happiness, 5.0)],
                ),
            ],
        ),
        EventKind::Sabbatical => (
            fixed("You're considering taking a sabbatical from work to pursue personal interests."),
            Effects::new(),
            vec![
                Choice::new(
                    "Take the sabbatical",
                    &[(Happiness, 15.0), (Finances, -15.0), (Energy, 15.0)],
                ),
                Choice::new(
                    "Continue working but find more time for hobbies",
                    &[(Happiness, 5.0), (Energy, -5.0), (Finances, 5.0)],
                ),
            ],
        ),
        EventKind::Entrepreneurship => (
            fixed("You have an idea for a business. Do you want to pursue it?"),
            Effects::new(),
            vec![
                Choice::new(
                    "Quit your job and start a business",
                    &[(WorkEthic, 15.0), (Finances, -15.0), (Energy, -10.0), (Happiness, 10.0)],
                ),
                Choice::new(
                    "Start a side business while keeping your job",
                    &[(WorkEthic, 10.0), (Energy, -15.0), (Finances, 5.0)],
                ),
                Choice::new("Shelve the idea for now", &[(Happiness, -5.0), (Finances, 5.0)]),
            ],
        ),
        EventKind::StartupOpportunity => {
            let approach = if character.has_trait(PersonalityTrait::Ambitious) {
                "ambitious nature"
            } else {
                "careful approach"
            };
            (
                format!(
                    "A tech startup has offered you equity and a leadership role. The risk is \
                     high but the potential rewards could be life-changing. Your {} will \
                     influence this decision.",
                    approach
                ),
                Effects::new(),
                vec![
                    Choice::new(
                        "Join the startup - take the entrepreneurial leap",
                        &[
                            (Finances, -10.0),
                            (Stress, 15.0),
                            (Energy, -10.0),
                            (Happiness, 20.0),
                            (WorkEthic, 15.0),
                        ],
                    )
                    .long_term(&[(Finances, 40.0), (Happiness, 10.0)])
                    .cost(5000)
                    .time(2),
                    Choice::new(
                        "Negotiate for consulting role while keeping current job",
                        &[(Finances, 5.0), (Stress, 5.0), (Energy, -5.0), (WorkEthic, 10.0)],
                    )
                    .time(1),
                    Choice::new(
                        "Decline and focus on current career stability",
                        &[(Finances, 5.0), (Happiness, -5.0), (Stress, -5.0)],
                    ),
                ],
            )
        }
        EventKind::WorkLifeBalance => {
            let impact = if character.has_children() {
                "and affecting family time"
            } else {
                "and impacting your personal life"
            };
            (
                format!(
                    "Your current work schedule is demanding {}. How do you want to address this?",
                    impact
                ),
                Effects::new(),
                vec![
                    Choice::new(
                        "Negotiate flexible working arrangements",
                        &[
                            (WorkLifeBalance, 15.0),
                            (Stress, -10.0),
                            (RelationshipSatisfaction, 10.0),
                            (Energy, 5.0),
                        ],
                    ),
                    Choice::new(
                        "Look for a new job with better work-life balance",
                        &[(WorkLifeBalance, 20.0), (Stress, 10.0), (Finances, -10.0), (Happiness, 5.0)],
                    ),
                    Choice::new(
                        "Push through and focus on career advancement",
                        &[
                            (WorkEthic, 10.0),
                            (Finances, 10.0),
                            (Stress, 15.0),
                            (WorkLifeBalance, -10.0),
                            (RelationshipSatisfaction, -5.0),
                        ],
                    ),
                    Choice::new(
                        "Consider reducing hours for family time",
                        &[
                            (WorkLifeBalance, 25.0),
                            (Finances, -15.0),
                            (RelationshipSatisfaction, 15.0),
                            (ParentingSkills, 10.0),
                        ],
                    ),
                ],
            )
        }
        EventKind::Retirement => (
            fixed("You're considering retirement options."),
            fx(&[(Energy, 10.0)]),
            vec![
                Choice::new(
                    "Fully retire and enjoy leisure time",
                    &[(Happiness, 15.0), (Finances, -10.0), (Energy, 15.0)],
                ),
                Choice::new(
                    "Semi-retire with part-time consulting",
                    &[(Finances, 5.0), (Happiness, 10.0), (Energy, 5.0)],
                ),
                Choice::new(
                    "Continue working as long as possible",
                    &[(Finances, 15.0), (Energy, -10.0), (Happiness, -5.0)],
                ),
            ],
        ),
        EventKind::MarriageProposal => (
            fixed("Your partner has proposed marriage."),
            Effects::new(),
            vec![
                Choice::new(
                    "Accept the proposal",
                    &[(Happiness, 15.0), (RelationshipSatisfaction, 20.0)],
                )
                .transition(Transition::Marry),
                Choice::new(
                    "Decline, you're not ready for marriage",
                    &[(Happiness, -5.0), (RelationshipSatisfaction, -15.0)],
                ),
            ],
        ),
        EventKind::RelationshipStrain => (
            fixed("You and your partner are going through a rough patch."),
            Effects::new(),
            vec![
                Choice::new(
                    "Work through it together with communication",
                    &[(RelationshipSatisfaction, 10.0), (Happiness, 5.0)],
                ),
                Choice::new(
                    "Focus on yourself for now",
                    &[(RelationshipSatisfaction, -10.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Consider ending the relationship",
                    &[(RelationshipSatisfaction, -20.0), (Happiness, -10.0)],
                )
                .transition(Transition::EndRelationship),
            ],
        ),
        EventKind::DatingApp => (
            fixed("You've matched with someone interesting on a dating app."),
            Effects::new(),
            vec![
                Choice::new(
                    "Meet them for coffee",
                    &[(Happiness, 5.0), (Energy, -5.0), (RelationshipSatisfaction, 5.0)],
                )
                .transition(Transition::StartDating),
                Choice::new(
                    "Chat longer before meeting in person",
                    &[(RelationshipSatisfaction, 2.0)],
                ),
                Choice::new(
                    "Focus on your career instead of dating",
                    &[(WorkEthic, 5.0), (RelationshipSatisfaction, -5.0)],
                ),
            ],
        ),
        EventKind::LongDistance => (
            fixed(
                "Your partner received a job offer in another city that would mean a \
                 long-distance relationship.",
            ),
            Effects::new(),
            vec![
                Choice::new(
                    "Support their move and try long-distance",
                    &[(RelationshipSatisfaction, -5.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Ask them to decline the offer",
                    &[(RelationshipSatisfaction, -10.0), (Finances, -5.0)],
                ),
                Choice::new(
                    "Move with them to the new city",
                    &[(Happiness, 5.0), (Finances, -10.0), (WorkEthic, 5.0)],
                ),
            ],
        ),
        EventKind::ConsiderChildren => (
            fixed("You and your partner are discussing having children."),
            Effects::new(),
            vec![
                Choice::new(
                    "Start trying for a baby",
                    &[(Happiness, 10.0), (RelationshipSatisfaction, 5.0)],
                )
                .transition(Transition::HaveChild),
                Choice::new(
                    "Wait until you're more financially stable",
                    &[(Finances, 5.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Decide not to have children",
                    &[(Finances, 10.0), (Energy, 5.0), (Happiness, -5.0)],
                ),
            ],
        ),
        EventKind::Pregnancy => (
            fixed("You/your partner is pregnant!"),
            fx(&[(Happiness, 15.0), (Health, -5.0)]),
            vec![
                Choice::new(
                    "Prepare extensively for the baby",
                    &[(ParentingSkills, 10.0), (Finances, -10.0)],
                )
                .transition(Transition::HaveChild),
                Choice::new(
                    "Take a balanced approach to preparation",
                    &[(ParentingSkills, 5.0), (Finances, -5.0), (Energy, 5.0)],
                )
                .transition(Transition::HaveChild),
            ],
        ),
        EventKind::Childcare => (
            fixed("You need to arrange childcare for your young child."),
            Effects::new(),
            vec![
                Choice::new(
                    "Enroll in a premium daycare center",
                    &[(Finances, -15.0), (ParentingSkills, 5.0), (Happiness, 5.0)],
                ),
                Choice::new(
                    "Find a more affordable daycare option",
                    &[(Finances, -5.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Ask family members to help with childcare",
                    &[(Finances, 5.0), (Energy, 5.0), (ParentingSkills, -5.0)],
                ),
                Choice::new(
                    "Reduce work hours to care for your child",
                    &[(Finances, -10.0), (ParentingSkills, 15.0), (Energy, -10.0)],
                ),
            ],
        ),
        EventKind::Adoption => (
            fixed("You're considering adopting a child."),
            Effects::new(),
            vec![
                Choice::new(
                    "Begin the adoption process",
                    &[(Happiness, 15.0), (Finances, -15.0), (ParentingSkills, 10.0)],
                )
                .transition(Transition::HaveChild),
                Choice::new(
                    "Research fertility treatments instead",
                    &[(Finances, -10.0), (Health, -5.0), (Happiness, 5.0)],
                ),
                Choice::new(
                    "Decide to remain child-free for now",
                    &[(Finances, 5.0), (Energy, 5.0)],
                ),
            ],
        ),
        EventKind::FertilityTreatment => (
            fixed("You're having difficulty conceiving and considering fertility treatments."),
            fx(&[(Happiness, -5.0)]),
            vec![
                Choice::new(
                    "Pursue expensive fertility treatments",
                    &[(Finances, -20.0), (Health, -5.0), (Happiness, 10.0)],
                ),
                Choice::new("Consider adoption instead", &[(Happiness, 5.0), (Finances, -10.0)]),
                Choice::new("Take a break from trying for now", &[(Health, 5.0), (Happiness, -5.0)]),
            ],
        ),
        EventKind::FertilityConsultation => (
            format!(
                "After trying to conceive for over a year, you and your partner are \
                 considering seeing a fertility specialist. Your fertility rate is currently {}%.",
                character.stats.fertility.round()
            ),
            fx(&[(Stress, 10.0)]),
            vec![
                Choice::new(
                    "See a fertility specialist and explore all options",
                    &[(Finances, -15.0), (Stress, 5.0), (Happiness, 10.0)],
                )
                .cost(3000),
                Choice::new(
                    "Try natural methods and lifestyle changes first",
                    &[(Health, 5.0), (Stress, -5.0), (Finances, -2.0)],
                )
                .time(6),
                Choice::new(
                    "Consider adoption as an alternative",
                    &[(Happiness, 15.0), (Finances, -20.0), (ParentingSkills, 10.0)],
                )
                .cost(15_000)
                .transition(Transition::HaveChild),
                Choice::new(
                    "Take a break from trying and focus on relationship",
                    &[(Stress, -15.0), (RelationshipSatisfaction, 10.0), (Happiness, 5.0)],
                ),
            ],
        ),
        EventKind::SecondChildDecision => (
            format!(
                "Your first child is now {} years old. You and your partner are discussing \
                 whether to have a second child. Consider the financial, emotional, and \
                 practical implications.",
                rng.gen_range(2..5)
            ),
            Effects::new(),
            vec![
                Choice::new(
                    "Start trying for a second child soon",
                    &[(Happiness, 15.0), (Stress, 10.0), (Finances, -5.0), (ParentingSkills, 5.0)],
                )
                .transition(Transition::HaveChild),
                Choice::new(
                    "Wait until first child is more independent",
                    &[(Finances, 5.0), (Stress, -5.0), (WorkLifeBalance, 5.0)],
                ),
                Choice::new(
                    "Focus resources on one child for better opportunities",
                    &[(Finances, 10.0), (ParentingSkills, 10.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Leave it to chance and see what happens",
                    &[(Stress, -5.0), (Happiness, 5.0)],
                ),
            ],
        ),
        EventKind::ChildEducation => (
            fixed("It's time to make decisions about your child's education."),
            Effects::new(),
            vec![
                Choice::new(
                    "Enroll in a private school with specialized programs",
                    &[(Finances, -15.0), (ParentingSkills, 10.0)],
                ),
                Choice::new(
                    "Choose the local public school",
                    &[(Finances, 5.0), (ParentingSkills, 5.0)],
                ),
                Choice::new(
                    "Consider homeschooling",
                    &[(Finances, -5.0), (Energy, -15.0), (ParentingSkills, 15.0)],
                ),
            ],
        ),
        EventKind::ChildActivityChoice => (
            fixed("Your child wants to participate in extracurricular activities."),
            Effects::new(),
            vec![
                Choice::new(
                    "Enroll them in multiple activities",
                    &[(Finances, -10.0), (Energy, -10.0), (ParentingSkills, 10.0)],
                ),
                Choice::new(
                    "Let them choose one activity to focus on",
                    &[(Finances, -5.0), (Happiness, 5.0), (ParentingSkills, 5.0)],
                ),
                Choice::new(
                    "Delay extracurriculars until they're older",
                    &[(Finances, 5.0), (ParentingSkills, -5.0)],
                ),
            ],
        ),
        EventKind::ChildTalentDiscovery => (
            format!(
                "Your child has shown exceptional talent in {}. Nurturing this talent could \
                 open doors but requires significant investment.",
                either(rng, "music", "sports")
            ),
            fx(&[(Happiness, 10.0)]),
            vec![
                Choice::new(
                    "Invest heavily in professional coaching/lessons",
                    &[(Finances, -20.0), (ParentingSkills, 10.0), (Stress, 10.0)],
                )
                .cost(15_000),
                Choice::new(
                    "Support their interest with moderate investment",
                    &[(Finances, -8.0), (ParentingSkills, 5.0), (Happiness, 5.0)],
                )
                .cost(5000),
                Choice::new(
                    "Encourage as a hobby without pressure",
                    &[(ParentingSkills, 8.0), (Happiness, 8.0), (Stress, -5.0)],
                ),
                Choice::new(
                    "Focus on well-rounded development instead",
                    &[(ParentingSkills, 5.0), (WorkLifeBalance, 5.0)],
                ),
            ],
        ),
        EventKind::TeenageChallenges => (
            fixed("Your teenager is going through a rebellious phase."),
            fx(&[(Happiness, -5.0)]),
            vec![
                Choice::new(
                    "Set strict boundaries and rules",
                    &[(ParentingSkills, 5.0), (RelationshipSatisfaction, -5.0)],
                ),
                Choice::new(
                    "Have open conversations about their feelings",
                    &[(ParentingSkills, 10.0), (Energy, -5.0), (RelationshipSatisfaction, 5.0)],
                ),
                Choice::new(
                    "Give them space to figure things out",
                    &[(ParentingSkills, -5.0), (Happiness, 5.0)],
                ),
            ],
        ),
        EventKind::EducationOpportunity => (
            fixed("You have an opportunity to further your education."),
            Effects::new(),
            vec![
                Choice::new(
                    "Pursue higher education full-time",
                    &[(Finances, -15.0), (Energy, -10.0), (WorkEthic, 15.0)],
                )
                .transition(Transition::AdvanceEducation),
                Choice::new(
                    "Take part-time classes while working",
                    &[(Finances, -5.0), (Energy, -15.0), (WorkEthic, 10.0)],
                )
                .transition(Transition::AdvanceEducation),
                Choice::new(
                    "Skip further education for now",
                    &[(Energy, 5.0), (Finances, 5.0), (WorkEthic, -5.0)],
                ),
            ],
        ),
        EventKind::StudyAbroad => (
            fixed("You have an opportunity to study abroad for a semester."),
            Effects::new(),
            vec![
                Choice::new(
                    "Go abroad for the experience",
                    &[(Happiness, 15.0), (Finances, -15.0), (WorkEthic, 5.0)],
                ),
                Choice::new(
                    "Stay at your current institution",
                    &[(Finances, 5.0), (Happiness, -5.0)],
                ),
            ],
        ),
        EventKind::ChildEducationChoice => (
            format!(
                "Your child is ready for {}. You need to choose between different educational \
                 approaches that will shape their development.",
                either(rng, "primary school", "preschool")
            ),
            Effects::new(),
            vec![
                Choice::new(
                    "Enroll in prestigious private school",
                    &[(Finances, -25.0), (ParentingSkills, 5.0), (Stress, 5.0)],
                )
                .cost(20_000),
                Choice::new(
                    "Choose excellent public school in good district",
                    &[(Finances, -5.0), (ParentingSkills, 3.0)],
                )
                .cost(2000),
                Choice::new(
                    "Consider alternative education (Montessori, Waldorf)",
                    &[(Finances, -15.0), (ParentingSkills, 8.0), (Happiness, 5.0)],
                )
                .cost(12_000),
                Choice::new(
                    "Homeschool for personalized attention",
                    &[
                        (Finances, -8.0),
                        (Energy, -20.0),
                        (ParentingSkills, 15.0),
                        (WorkLifeBalance, -15.0),
                    ],
                )
                .time(5),
            ],
        ),
        EventKind::HousingDecision => (
            fixed("You're considering changing your living situation."),
            Effects::new(),
            vec![
                Choice::new(
                    "Move to a bigger place closer to good schools",
                    &[(Finances, -15.0), (Happiness, 10.0)],
                ),
                Choice::new(
                    "Move to a smaller place to save money",
                    &[(Finances, 15.0), (Happiness, -5.0)],
                ),
                Choice::new("Stay where you are", &[]),
            ],
        ),
        EventKind::HomeOwnership => (
            fixed("You have an opportunity to buy your first home."),
            Effects::new(),
            vec![
                Choice::new(
                    "Buy a home and take on a mortgage",
                    &[(Finances, -20.0), (Happiness, 15.0)],
                ),
                Choice::new(
                    "Continue renting for flexibility",
                    &[(Finances, 5.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Move to a more affordable area to buy",
                    &[(Finances, -10.0), (Happiness, 5.0), (Energy, -5.0)],
                ),
            ],
        ),
        EventKind::Relocation => (
            fixed("You're considering relocating to a different city or country."),
            Effects::new(),
            vec![
                Choice::new(
                    "Relocate for better opportunities",
                    &[(Happiness, 10.0), (Finances, 10.0), (Energy, -15.0)],
                ),
                Choice::new(
                    "Stay where your support network is",
                    &[(Happiness, 5.0), (RelationshipSatisfaction, 5.0), (Finances, -5.0)],
                ),
            ],
        ),
        EventKind::HousingMarketOpportunity => {
            let market = either(rng, "booming", "in a downturn");
            let renting = character
                .housing
                .as_ref()
                .is_some_and(|h| h.ownership == Ownership::Rent);
            let plan = if renting {
                "buy your first home"
            } else {
                "upgrade or relocate"
            };
            (
                format!(
                    "The housing market is {}. This could be a perfect time to {}.",
                    market, plan
                ),
                Effects::new(),
                vec![
                    Choice::new(
                        "Buy a family home in excellent school district",
                        &[(Finances, -30.0), (Happiness, 20.0), (Stress, 15.0)],
                    )
                    .cost(50_000),
                    Choice::new(
                        "Purchase investment property for future security",
                        &[(Finances, -25.0), (Stress, 10.0)],
                    )
                    .cost(40_000)
                    .long_term(&[(Finances, 30.0)]),
                    Choice::new(
                        "Downsize to save money for children's education",
                        &[(Finances, 15.0), (Happiness, -5.0), (Stress, -5.0)],
                    ),
                    Choice::new(
                        "Stay put and focus on other investments",
                        &[(Stress, -5.0), (Finances, 5.0)],
                    ),
                ],
            )
        }
        EventKind::HealthCrisis => (
            fixed("You're experiencing health issues that affect your daily life."),
            fx(&[(Health, -15.0)]),
            vec![
                Choice::new(
                    "Take time off to fully recover",
                    &[(Finances, -10.0), (Health, 20.0), (Energy, 15.0)],
                ),
                Choice::new(
                    "Try to work through it",
                    &[(Finances, 5.0), (Health, -5.0), (Energy, -10.0)],
                ),
            ],
        ),
        EventKind::MentalHealth => (
            fixed("You've been feeling burnt out and stressed lately."),
            fx(&[(Happiness, -10.0), (Energy, -10.0)]),
            vec![
                Choice::new(
                    "Seek therapy or counseling",
                    &[(Happiness, 15.0), (Finances, -5.0), (Health, 10.0)],
                ),
                Choice::new(
                    "Take a vacation to recharge",
                    &[(Happiness, 10.0), (Energy, 15.0), (Finances, -10.0)],
                ),
                Choice::new(
                    "Practice self-care and mindfulness",
                    &[(Happiness, 5.0), (Health, 5.0), (Energy, 5.0)],
                ),
                Choice::new(
                    "Ignore it and keep pushing forward",
                    &[(WorkEthic, 5.0), (Health, -10.0), (Happiness, -5.0)],
                ),
            ],
        ),
        EventKind::LifestyleChange => (
            fixed("Your doctor recommends a significant lifestyle change for your health."),
            Effects::new(),
            vec![
                Choice::new(
                    "Follow all recommendations strictly",
                    &[(Health, 20.0), (Energy, 15.0), (Happiness, -5.0)],
                ),
                Choice::new(
                    "Make moderate changes gradually",
                    &[(Health, 10.0), (Energy, 5.0), (Happiness, 5.0)],
                ),
                Choice::new("Ignore the recommendations", &[(Happiness, 5.0), (Health, -15.0)]),
            ],
        ),
        EventKind::ParentalBurnout => {
            let count = character.children.len();
            let who = if count == 1 { "child needs" } else { "children need" };
            (
                format!(
                    "You're experiencing severe parental burnout - exhaustion, stress, and \
                     feeling overwhelmed. Your {} {} you, but you need to take care of \
                     yourself too.",
                    count, who
                ),
                fx(&[(Stress, 20.0), (Energy, -15.0), (Happiness, -10.0)]),
                vec![
                    Choice::new(
                        "Seek professional help and therapy",
                        &[(Happiness, 15.0), (Stress, -20.0), (Finances, -5.0)],
                    )
                    .cost(2000),
                    Choice::new(
                        "Arrange regular childcare support",
                        &[(Stress, -15.0), (Energy, 10.0), (Finances, -10.0)],
                    )
                    .cost(8000),
                    Choice::new(
                        "Take extended leave from work",
                        &[(Stress, -25.0), (Finances, -20.0), (WorkLifeBalance, 20.0)],
                    ),
                    Choice::new(
                        "Push through and hope it gets better",
                        &[(Stress, 10.0), (Health, -10.0), (RelationshipSatisfaction, -10.0)],
                    ),
                ],
            )
        }
        EventKind::Investment => (
            fixed("You have some extra money and are considering investment options."),
            Effects::new(),
            vec![
                Choice::new(
                    "Invest in a high-risk, high-reward opportunity",
                    &[(Finances, 15.0), (Happiness, 5.0)],
                ),
                Choice::new(
                    "Choose safe, low-yield investments",
                    &[(Finances, 5.0), (Happiness, 2.0)],
                ),
                Choice::new(
                    "Save the money for emergencies",
                    &[(Finances, 2.0), (Happiness, -2.0)],
                ),
            ],
        ),
        EventKind::DebtManagement => (
            fixed("You're considering how to handle your debt situation."),
            Effects::new(),
            vec![
                Choice::new(
                    "Pay off debt aggressively",
                    &[(Finances, 15.0), (Happiness, 10.0), (Energy, -5.0)],
                ),
                Choice::new(
                    "Balance debt repayment with living expenses",
                    &[(Finances, 5.0), (Happiness, 5.0)],
                ),
                Choice::new(
                    "Maintain minimum payments for now",
                    &[(Finances, -5.0), (Happiness, 5.0), (Energy, 5.0)],
                ),
            ],
        ),
        EventKind::EconomicDownturn => {
            let exposure = match &character.job {
                Some(job) => format!("Your job at {} may be at risk", job.title),
                None => "Job opportunities are scarce".to_string(),
            };
            (
                format!(
                    "A recession is affecting your industry. {}. How do you protect your \
                     family's financial security?",
                    exposure
                ),
                fx(&[(Stress, 15.0), (Finances, -10.0)]),
                vec![
                    Choice::new(
                        "Aggressively cut expenses and build emergency fund",
                        &[(Finances, 15.0), (Stress, -5.0), (Happiness, -10.0)],
                    ),
                    Choice::new(
                        "Invest in retraining for recession-proof skills",
                        &[(Finances, -10.0), (WorkEthic, 15.0), (Stress, 5.0)],
                    )
                    .cost(5000)
                    .long_term(&[(Finances, 20.0)]),
                    Choice::new(
                        "Start a side business for additional income",
                        &[(Energy, -15.0), (Stress, 10.0), (WorkEthic, 10.0)],
                    )
                    .long_term(&[(Finances, 15.0)]),
                    Choice::new(
                        "Relocate to area with better job prospects",
                        &[
                            (Finances, -15.0),
                            (Stress, 20.0),
                            (Happiness, -5.0),
                            (SocialConnections, -15.0),
                        ],
                    ),
                ],
            )
        }
        EventKind::FriendshipOpportunity => (
            fixed("You've been invited to join a club or social group."),
            Effects::new(),
            vec![
                Choice::new(
                    "Join and make time for new friends",
                    &[(Happiness, 10.0), (Energy, -5.0), (RelationshipSatisfaction, 5.0)],
                ),
                Choice::new(
                    "Decline to focus on existing relationships",
                    &[(RelationshipSatisfaction, 5.0), (Energy, 5.0)],
                ),
            ],
        ),
        EventKind::VolunteerWork => (
            fixed("There's an opportunity to volunteer for a cause you care about."),
            Effects::new(),
            vec![
                Choice::new(
                    "Commit to regular volunteering",
                    &[(Happiness, 15.0), (Energy, -10.0), (WorkEthic, 5.0)],
                ),
                Choice::new("Volunteer occasionally", &[(Happiness, 5.0), (Energy, -2.0)]),
                Choice::new("Donate money instead of time", &[(Happiness, 2.0), (Finances, -5.0)]),
            ],
        ),
        EventKind::CommunityInvolvement => (
            format!(
                "Your local community needs volunteers for {}. Getting involved could benefit \
                 your children and community, but requires time commitment.",
                either(rng, "school board", "youth programs")
            ),
            Effects::new(),
            vec![
                Choice::new(
                    "Take active leadership role in community",
                    &[
                        (SocialConnections, 20.0),
                        (Happiness, 15.0),
                        (Energy, -10.0),
                        (ParentingSkills, 5.0),
                    ],
                )
                .time(3),
                Choice::new(
                    "Volunteer occasionally when possible",
                    &[(SocialConnections, 10.0), (Happiness, 8.0), (Energy, -3.0)],
                ),
                Choice::new(
                    "Support financially instead of time commitment",
                    &[(Finances, -5.0), (Happiness, 5.0), (SocialConnections, 5.0)],
                ),
                Choice::new(
                    "Focus energy on immediate family needs",
                    &[(ParentingSkills, 5.0), (Energy, 5.0)],
                ),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterSpec;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, LifeValue, SexualOrientation};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn character(traits: Vec<PersonalityTrait>) -> Character {
        let spec = CharacterSpec {
            name: "Sam".into(),
            gender: Gender::Male,
            sexual_orientation: SexualOrientation::Bisexual,
            country_key: "germany".into(),
            personality_traits: traits,
            life_values: vec![LifeValue::Family],
        };
        spec.build(&SimulationConfig::default(), &mut ChaCha8Rng::seed_from_u64(1))
    }

    #[test]
    fn test_every_event_has_choices() {
        let sam = character(vec![PersonalityTrait::Social]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for kind in EventKind::ALL {
            let event = create_event(*kind, 2030, &sam, &mut rng);
            assert!(!event.choices.is_empty(), "{} has no choices", kind);
            assert!(!event.description.is_empty());
            assert_eq!(event.kind, *kind);
            assert_eq!(event.timestamp, 2030);
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let sam = character(vec![PersonalityTrait::Social]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let event = create_event_by_key("fertilityConsultation", 2031, &sam, &mut rng).unwrap();
        assert_eq!(event.category, Category::Family);
        assert_eq!(event.priority, Priority::High);
        assert_eq!(event.choices.len(), 4);
        assert_eq!(event.effects.get(Stress), Some(10.0));
    }

    #[test]
    fn test_unknown_key_is_catalog_error() {
        let sam = character(vec![PersonalityTrait::Social]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let err = create_event_by_key("winLottery", 2031, &sam, &mut rng).unwrap_err();
        assert!(matches!(err, LifeSimError::UnknownEvent(key) if key == "winLottery"));
    }

    #[test]
    fn test_descriptions_follow_character() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let ambitious = character(vec![PersonalityTrait::Ambitious]);
        let careful = character(vec![PersonalityTrait::Stable]);
        let a = create_event(EventKind::StartupOpportunity, 2030, &ambitious, &mut rng);
        let c = create_event(EventKind::StartupOpportunity, 2030, &careful, &mut rng);
        assert!(a.description.contains("ambitious nature"));
        assert!(c.description.contains("careful approach"));

        let balance = create_event(EventKind::WorkLifeBalance, 2030, &careful, &mut rng);
        assert!(balance.description.contains("personal life"));
    }

    #[test]
    fn test_long_term_effects_are_recorded() {
        let sam = character(vec![PersonalityTrait::Social]);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let event = create_event(EventKind::StartupOpportunity, 2030, &sam, &mut rng);
        let leap = &event.choices[0];
        assert_eq!(leap.cost, Some(5000));
        assert_eq!(leap.time_required, Some(2));
        let long_term = leap.long_term_effects.as_ref().unwrap();
        assert_eq!(long_term.get(Finances), Some(40.0));
    }

    #[test]
    fn test_event_json_uses_wire_keys() {
        let sam = character(vec![PersonalityTrait::Social]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let event = create_event(EventKind::JobOffer, 2030, &sam, &mut rng);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "jobOffer");
        assert_eq!(json["category"], "career");
        assert_eq!(json["choices"][0]["effect"]["finances"], 10.0);
    }
}
