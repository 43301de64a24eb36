//! Macro-economic background events
//!
//! Rolled once per simulated year. They are recorded on the game state but
//! do not yet feed back into stats or expire.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::JobSector;

crate::keyed_enum! {
    pub enum EconomicEventKind {
        Recession => "recession",
        Boom => "boom",
        Inflation => "inflation",
        MarketCrash => "marketCrash",
        JobMarketShift => "jobMarketShift",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicEvent {
    #[serde(rename = "type")]
    pub kind: EconomicEventKind,
    /// 0-100
    pub severity: f32,
    /// Years
    pub duration: u32,
    pub affected_sectors: Vec<JobSector>,
    /// Percent change in housing prices
    pub housing_impact: f32,
    /// In-game year
    pub timestamp: i32,
}

const AFFECTED_SECTORS: [JobSector; 3] =
    [JobSector::Technology, JobSector::Healthcare, JobSector::Finance];

/// Roll for this year's economic event
///
/// Fires with probability `chance`; everything about the event is uniform.
pub fn roll_economic_event<R: Rng + ?Sized>(
    year: i32,
    chance: f64,
    rng: &mut R,
) -> Option<EconomicEvent> {
    if !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return None;
    }
    let kinds = EconomicEventKind::ALL;
    let kind = kinds[rng.gen_range(0..kinds.len())];
    Some(EconomicEvent {
        kind,
        severity: rng.gen_range(0.0..100.0),
        duration: rng.gen_range(1..=3),
        affected_sectors: AFFECTED_SECTORS.to_vec(),
        housing_impact: rng.gen_range(-20.0..20.0),
        timestamp: year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_never_fires_at_zero_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!((0..500).all(|_| roll_economic_event(2030, 0.0, &mut rng).is_none()));
    }

    #[test]
    fn test_fields_within_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let e = roll_economic_event(2031, 1.0, &mut rng).unwrap();
            assert!((0.0..100.0).contains(&e.severity));
            assert!((1..=3).contains(&e.duration));
            assert!((-20.0..20.0).contains(&e.housing_impact));
            assert_eq!(e.affected_sectors.len(), 3);
            assert_eq!(e.timestamp, 2031);
        }
    }

    #[test]
    fn test_rate_is_roughly_five_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let fired = (0..10_000)
            .filter(|_| roll_economic_event(2030, 0.05, &mut rng).is_some())
            .count();
        assert!((350..650).contains(&fired), "fired {} times", fired);
    }
}
