//! Specifications over squad units.

use crate::traits::Specification;
use domain::{Role, Unit};

/// Units that still have something left in their resource pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasSupplies;

impl Specification<Unit> for HasSupplies {
    fn is_satisfied(&self, item: &Unit) -> bool {
        !item.supplies().is_empty()
    }

    fn describe(&self) -> String {
        "has supplies".to_string()
    }
}

/// Units with a given role.
#[derive(Debug, Clone, Copy)]
pub struct RoleSpecification {
    role: Role,
}

impl RoleSpecification {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

impl Specification<Unit> for RoleSpecification {
    fn is_satisfied(&self, item: &Unit) -> bool {
        item.role() == self.role
    }

    fn describe(&self) -> String {
        format!("role == {}", self.role)
    }
}

/// Units with at least `threshold` health.
#[derive(Debug, Clone, Copy)]
pub struct MinHealth {
    threshold: u32,
}

impl MinHealth {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Specification<Unit> for MinHealth {
    fn is_satisfied(&self, item: &Unit) -> bool {
        item.health() >= self.threshold
    }

    fn describe(&self) -> String {
        format!("health >= {}", self.threshold)
    }
}
