//! Field gear described by small capability traits.
//!
//! Each piece of gear implements only the capabilities it really has.
//! [`Gear`] closes the set so callers can match exhaustively or ask for
//! a capability and get `None` when the item lacks it.

use serde::{Deserialize, Serialize};

pub trait Weapon {
    fn use_as_weapon(&self) -> String;
}

pub trait NavigationTool {
    fn use_for_navigation(&self) -> String;
}

pub trait CommunicationTool {
    fn use_for_communication(&self) -> String;
}

pub trait SurvivalTool {
    fn use_for_survival(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rifle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compass;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radio;

impl Weapon for Rifle {
    fn use_as_weapon(&self) -> String {
        "Using rifle to engage target".to_string()
    }
}

impl SurvivalTool for Rifle {
    fn use_for_survival(&self) -> String {
        "Using rifle to hunt for food".to_string()
    }
}

impl NavigationTool for Compass {
    fn use_for_navigation(&self) -> String {
        "Using compass to determine direction".to_string()
    }
}

impl SurvivalTool for Compass {
    fn use_for_survival(&self) -> String {
        "Using compass to find way back to safety".to_string()
    }
}

impl CommunicationTool for Radio {
    fn use_for_communication(&self) -> String {
        "Using radio to call for support".to_string()
    }
}

impl SurvivalTool for Radio {
    fn use_for_survival(&self) -> String {
        "Using radio to call for rescue".to_string()
    }
}

/// Capability tags, used for listing what a piece of gear can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Weapon,
    Navigation,
    Communication,
    Survival,
}

/// Closed set of issued gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gear {
    Rifle(Rifle),
    Compass(Compass),
    Radio(Radio),
}

impl Gear {
    /// Standard kit: one of each.
    pub fn kit() -> [Gear; 3] {
        [Gear::Rifle(Rifle), Gear::Compass(Compass), Gear::Radio(Radio)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gear::Rifle(_) => "Rifle",
            Gear::Compass(_) => "Compass",
            Gear::Radio(_) => "Radio",
        }
    }

    pub fn as_weapon(&self) -> Option<&dyn Weapon> {
        match self {
            Gear::Rifle(rifle) => Some(rifle),
            Gear::Compass(_) | Gear::Radio(_) => None,
        }
    }

    pub fn as_navigation(&self) -> Option<&dyn NavigationTool> {
        match self {
            Gear::Compass(compass) => Some(compass),
            Gear::Rifle(_) | Gear::Radio(_) => None,
        }
    }

    pub fn as_communication(&self) -> Option<&dyn CommunicationTool> {
        match self {
            Gear::Radio(radio) => Some(radio),
            Gear::Rifle(_) | Gear::Compass(_) => None,
        }
    }

    /// All gear in the set can help with survival.
    pub fn as_survival(&self) -> &dyn SurvivalTool {
        match self {
            Gear::Rifle(rifle) => rifle,
            Gear::Compass(compass) => compass,
            Gear::Radio(radio) => radio,
        }
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        let mut caps = Vec::with_capacity(2);
        if self.as_weapon().is_some() {
            caps.push(Capability::Weapon);
        }
        if self.as_navigation().is_some() {
            caps.push(Capability::Navigation);
        }
        if self.as_communication().is_some() {
            caps.push(Capability::Communication);
        }
        caps.push(Capability::Survival);
        caps
    }

    /// Use every capability this item has, in capability order.
    pub fn field_test(&self) -> Vec<String> {
        let mut uses = Vec::new();
        if let Some(weapon) = self.as_weapon() {
            uses.push(weapon.use_as_weapon());
        }
        if let Some(nav) = self.as_navigation() {
            uses.push(nav.use_for_navigation());
        }
        if let Some(comm) = self.as_communication() {
            uses.push(comm.use_for_communication());
        }
        uses.push(self.as_survival().use_for_survival());
        uses
    }
}
