//! Squad units built by composition.
//!
//! A unit *has* a resource pool instead of inheriting resource handling.
//! Movement and actions are separate narrow traits so a mission can run
//! over anything that moves and acts, not just [`Unit`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A countable supply a unit draws from when it acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    resource: String,
    remaining: u32,
}

/// Outcome of drawing from a [`ResourcePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Consumed { remaining: u32 },
    Depleted,
}

impl ResourcePool {
    pub fn new(resource: impl Into<String>, amount: u32) -> Self {
        Self {
            resource: resource.into(),
            remaining: amount,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Take one unit of the resource. Never goes below zero.
    pub fn consume(&mut self) -> Usage {
        if self.remaining > 0 {
            self.remaining -= 1;
            Usage::Consumed {
                remaining: self.remaining,
            }
        } else {
            Usage::Depleted
        }
    }
}

/// What a unit does on the field; decides which resource it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Marine,
    Medic,
    Engineer,
}

impl Role {
    /// Name of the resource this role spends when acting.
    pub fn resource(&self) -> &'static str {
        match self {
            Role::Marine => "ammo",
            Role::Medic => "medkit",
            Role::Engineer => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Marine => "marine",
            Role::Medic => "medic",
            Role::Engineer => "engineer",
        };
        f.write_str(name)
    }
}

/// Anything that can move a distance in meters.
pub trait Mobile {
    fn advance(&mut self, distance: u32) -> String;
}

/// Anything that can perform its role action.
pub trait Actor {
    fn act(&mut self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    health: u32,
    role: Role,
    supplies: ResourcePool,
}

impl Unit {
    pub fn new(name: impl Into<String>, health: u32, role: Role, supply: u32) -> Self {
        Self {
            name: name.into(),
            health,
            role,
            supplies: ResourcePool::new(role.resource(), supply),
        }
    }

    pub fn marine(name: impl Into<String>, health: u32, ammo: u32) -> Self {
        Self::new(name, health, Role::Marine, ammo)
    }

    pub fn medic(name: impl Into<String>, health: u32, medkits: u32) -> Self {
        Self::new(name, health, Role::Medic, medkits)
    }

    pub fn engineer(name: impl Into<String>, health: u32, tools: u32) -> Self {
        Self::new(name, health, Role::Engineer, tools)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn supplies(&self) -> &ResourcePool {
        &self.supplies
    }
}

impl Mobile for Unit {
    fn advance(&mut self, distance: u32) -> String {
        format!("{} moved {} meters.", self.name, distance)
    }
}

impl Actor for Unit {
    fn act(&mut self) -> String {
        let resource = self.supplies.resource().to_string();
        match self.supplies.consume() {
            Usage::Consumed { remaining } => format!(
                "{} used a {}. {} left: {}",
                self.name, resource, resource, remaining
            ),
            Usage::Depleted => format!("{} is out of {}!", self.name, resource),
        }
    }
}

/// Move every unit, then have it act. Returns the field reports in order.
pub fn perform_mission<U: Mobile + Actor>(units: &mut [U], distance: u32) -> Vec<String> {
    let mut reports = Vec::with_capacity(units.len() * 2);
    for unit in units.iter_mut() {
        reports.push(unit.advance(distance));
        reports.push(unit.act());
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_never_underflows() {
        let mut pool = ResourcePool::new("ammo", 1);
        assert_eq!(pool.consume(), Usage::Consumed { remaining: 0 });
        assert_eq!(pool.consume(), Usage::Depleted);
        assert_eq!(pool.remaining(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_roles_pick_their_resource() {
        assert_eq!(Unit::marine("A", 100, 1).supplies().resource(), "ammo");
        assert_eq!(Unit::medic("B", 80, 1).supplies().resource(), "medkit");
        assert_eq!(Unit::engineer("C", 90, 1).supplies().resource(), "tool");
    }

    #[test]
    fn test_perform_mission_reports() {
        let mut squad = vec![
            Unit::marine("John Doe", 100, 30),
            Unit::medic("Jane Smith", 80, 0),
        ];

        let reports = perform_mission(&mut squad, 50);

        assert_eq!(
            reports,
            vec![
                "John Doe moved 50 meters.",
                "John Doe used a ammo. ammo left: 29",
                "Jane Smith moved 50 meters.",
                "Jane Smith is out of medkit!",
            ]
        );
        assert_eq!(squad[0].supplies().remaining(), 29);
    }
}
