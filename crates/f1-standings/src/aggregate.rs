//! Driver and constructor championship aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;

use f1_model::{DriverRef, Race};

/// Identity of a driver across races: the code when one exists, otherwise
/// the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DriverKey {
    Code(String),
    Name(String),
}

impl DriverKey {
    /// Key for a driver reference, `None` when it has neither code nor name.
    pub fn for_driver(driver: &DriverRef) -> Option<Self> {
        if !driver.code.is_empty() {
            Some(Self::Code(driver.code.clone()))
        } else if !driver.name.is_empty() {
            Some(Self::Name(driver.name.clone()))
        } else {
            None
        }
    }
}

/// Identity of a constructor: its non-empty team label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn new(team: &str) -> Option<Self> {
        let team = team.trim();
        (!team.is_empty()).then(|| Self(team.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverStanding {
    pub key: DriverKey,
    pub code: String,
    pub name: String,
    /// Most recently seen non-empty team label.
    pub team: String,
    pub points: f64,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorStanding {
    pub team: String,
    pub points: f64,
    pub wins: u32,
}

/// Both championships, ranked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    pub drivers: Vec<DriverStanding>,
    pub constructors: Vec<ConstructorStanding>,
}

impl Standings {
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty() && self.constructors.is_empty()
    }

    /// Points of the championship leader, floored at 1 so it can scale a bar.
    pub fn driver_scale(&self) -> f64 {
        scale(self.drivers.iter().map(|d| d.points))
    }

    pub fn constructor_scale(&self) -> f64 {
        scale(self.constructors.iter().map(|c| c.points))
    }
}

fn scale(points: impl Iterator<Item = f64>) -> f64 {
    points.fold(1.0, f64::max)
}

/// Folds race results into ranked driver and constructor standings.
///
/// Totals do not depend on race or result order. A driver's name and code
/// are taken from the first result seen for its key; the team follows the
/// latest non-empty label.
pub fn build_standings<'a, I>(races: I) -> Standings
where
    I: IntoIterator<Item = &'a Race>,
{
    let mut drivers: HashMap<DriverKey, DriverStanding> = HashMap::new();
    let mut teams: HashMap<TeamKey, ConstructorStanding> = HashMap::new();
    let mut race_count = 0usize;

    for race in races {
        race_count += 1;
        for result in &race.results {
            let win = u32::from(result.is_win());
            let driver = &result.driver;

            if let Some(key) = DriverKey::for_driver(driver) {
                let entry = drivers.entry(key.clone()).or_insert_with(|| DriverStanding {
                    key,
                    code: driver.code.clone(),
                    name: driver.name.clone(),
                    team: String::new(),
                    points: 0.0,
                    wins: 0,
                });
                entry.points += result.points;
                entry.wins += win;
                if !driver.team.trim().is_empty() {
                    entry.team.clone_from(&driver.team);
                }
            }

            if let Some(key) = TeamKey::new(&driver.team) {
                let entry = teams.entry(key.clone()).or_insert_with(|| ConstructorStanding {
                    team: key.0,
                    points: 0.0,
                    wins: 0,
                });
                entry.points += result.points;
                entry.wins += win;
            }
        }
    }

    let mut drivers: Vec<DriverStanding> = drivers.into_values().collect();
    drivers.sort_by(|a, b| {
        rank(a.points, a.wins, b.points, b.wins)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.key.cmp(&b.key))
    });

    let mut constructors: Vec<ConstructorStanding> = teams.into_values().collect();
    constructors
        .sort_by(|a, b| rank(a.points, a.wins, b.points, b.wins).then_with(|| a.team.cmp(&b.team)));

    tracing::debug!(
        races = race_count,
        drivers = drivers.len(),
        constructors = constructors.len(),
        "built standings"
    );

    Standings {
        drivers,
        constructors,
    }
}

/// Points descending, then wins descending.
fn rank(a_points: f64, a_wins: u32, b_points: f64, b_wins: u32) -> Ordering {
    b_points.total_cmp(&a_points).then(b_wins.cmp(&a_wins))
}
