//! Rider kinds and the strategies they are composed of.
//!
//! | Kind              | Space | Access      | Faction | Routine            | Patience |
//! |-------------------|-------|-------------|---------|--------------------|----------|
//! | `Goggle`          | 1     | upper half  | Goggle  | roaming            | none     |
//! | `Mugtome`         | 1     | upper half  | Mugtome | roaming            | none     |
//! | `NonDeveloper`    | 1     | all         | none    | roaming            | none     |
//! | `Client`          | 1     | lower half  | none    | visiting 60..180   | 60       |
//! | `MaintenanceCrew` | 4     | top only    | none    | visiting 120..240  | none     |

use std::fmt;

use lift_core::{FloorId, SimRng};

/// Ticks a client tolerates in the ground-floor queue before complaining.
pub const CLIENT_PATIENCE_TICKS: u64 = 60;

// ── Strategies ────────────────────────────────────────────────────────────────

/// Developer faction.  Members of rival factions never share the elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    Goggle,
    Mugtome,
}

impl Faction {
    pub fn rival(self) -> Faction {
        match self {
            Faction::Goggle => Faction::Mugtome,
            Faction::Mugtome => Faction::Goggle,
        }
    }
}

/// Which floors a kind may request.  "Half" splits at `floor_count / 2`,
/// and the middle floor belongs to both halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorAccess {
    All,
    UpperHalf,
    LowerHalf,
    TopOnly,
}

impl FloorAccess {
    /// Accessible levels in ascending order for a building of `floor_count`
    /// floors.
    pub fn floors(self, floor_count: usize) -> Vec<FloorId> {
        let middle = floor_count / 2;
        let levels = 0..floor_count;
        let pick: Vec<usize> = match self {
            FloorAccess::All => levels.collect(),
            FloorAccess::UpperHalf => levels.filter(|&l| l >= middle).collect(),
            FloorAccess::LowerHalf => levels.filter(|&l| l <= middle).collect(),
            FloorAccess::TopOnly => floor_count.checked_sub(1).into_iter().collect(),
        };
        pick.into_iter().map_while(|l| FloorId::try_from(l).ok()).collect()
    }
}

/// How long a visitor stays after reaching its floor: `[min_ticks, max_ticks)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StayWindow {
    pub min_ticks: u64,
    pub max_ticks: u64,
}

impl StayWindow {
    /// Draw a stay duration.  Consumes one value from the stream unless the
    /// window is degenerate.
    pub fn draw(&self, rng: &mut SimRng) -> u64 {
        if self.max_ticks > self.min_ticks {
            self.min_ticks + rng.gen_range(0..self.max_ticks - self.min_ticks)
        } else {
            self.min_ticks
        }
    }
}

/// What a rider does while idle on a floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Routine {
    /// Employees: stay in the building, change floor with probability *p*
    /// each idle tick.
    Roaming,
    /// Non-employees: one trip in, a stay, then back to ground and out.
    Visiting(StayWindow),
}

/// Everything that distinguishes one rider kind from another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiderProfile {
    pub kind:           RiderKind,
    pub required_space: usize,
    pub access:         FloorAccess,
    pub faction:        Option<Faction>,
    pub routine:        Routine,
    /// Ticks tolerated in the ground-floor queue; `None` = infinitely patient.
    /// Impatient riders also jump ahead of everyone else in floor queues.
    pub patience:       Option<u64>,
}

// ── RiderKind ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderKind {
    Goggle,
    Mugtome,
    NonDeveloper,
    Client,
    MaintenanceCrew,
}

impl RiderKind {
    pub const ALL: [RiderKind; 5] = [
        RiderKind::Goggle,
        RiderKind::Mugtome,
        RiderKind::NonDeveloper,
        RiderKind::Client,
        RiderKind::MaintenanceCrew,
    ];

    /// Two-letter label prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            RiderKind::Goggle => "GG",
            RiderKind::Mugtome => "MU",
            RiderKind::NonDeveloper => "ND",
            RiderKind::Client => "CL",
            RiderKind::MaintenanceCrew => "MC",
        }
    }

    pub fn profile(self) -> RiderProfile {
        let developer = |faction| RiderProfile {
            kind: self,
            required_space: 1,
            access: FloorAccess::UpperHalf,
            faction: Some(faction),
            routine: Routine::Roaming,
            patience: None,
        };

        match self {
            RiderKind::Goggle => developer(Faction::Goggle),
            RiderKind::Mugtome => developer(Faction::Mugtome),
            RiderKind::NonDeveloper => RiderProfile {
                kind: self,
                required_space: 1,
                access: FloorAccess::All,
                faction: None,
                routine: Routine::Roaming,
                patience: None,
            },
            RiderKind::Client => RiderProfile {
                kind: self,
                required_space: 1,
                access: FloorAccess::LowerHalf,
                faction: None,
                routine: Routine::Visiting(StayWindow { min_ticks: 60, max_ticks: 180 }),
                patience: Some(CLIENT_PATIENCE_TICKS),
            },
            RiderKind::MaintenanceCrew => RiderProfile {
                kind: self,
                required_space: 4,
                access: FloorAccess::TopOnly,
                faction: None,
                routine: Routine::Visiting(StayWindow { min_ticks: 120, max_ticks: 240 }),
                patience: None,
            },
        }
    }

    #[inline]
    pub fn is_employee(self) -> bool {
        matches!(self.profile().routine, Routine::Roaming)
    }

    #[inline]
    pub fn is_developer(self) -> bool {
        matches!(self, RiderKind::Goggle | RiderKind::Mugtome)
    }

    #[inline]
    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RiderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiderKind::Goggle => "goggle",
            RiderKind::Mugtome => "mugtome",
            RiderKind::NonDeveloper => "non_developer",
            RiderKind::Client => "client",
            RiderKind::MaintenanceCrew => "maintenance_crew",
        };
        f.write_str(name)
    }
}
