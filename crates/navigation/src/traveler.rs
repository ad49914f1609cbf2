//! The Traveler: a client that delegates navigation to its strategy slot.
//!
//! Nothing in here branches on which strategy is installed.

use crate::error::Result;
use crate::route::{Leg, Route};
use crate::strategies::NavigationOutcome;
use strategy::{BoxedStrategy, ContractViolation, Strategy, StrategySlot};
use tracing::debug;

#[derive(Debug)]
pub struct Traveler {
    navigation: StrategySlot<Leg, NavigationOutcome>,
}

impl Traveler {
    pub fn new(strategy: impl Strategy<Leg, Output = NavigationOutcome> + 'static) -> Self {
        Self {
            navigation: StrategySlot::new(strategy),
        }
    }

    pub fn with_boxed(strategy: BoxedStrategy<Leg, NavigationOutcome>) -> Self {
        Self {
            navigation: StrategySlot::from_boxed(strategy),
        }
    }

    /// Swap the navigation strategy at runtime.
    pub fn set_strategy(
        &mut self,
        strategy: impl Strategy<Leg, Output = NavigationOutcome> + 'static,
    ) {
        self.navigation.replace(strategy);
    }

    pub fn set_boxed_strategy(&mut self, strategy: BoxedStrategy<Leg, NavigationOutcome>) {
        self.navigation.replace_boxed(strategy);
    }

    /// Swap only if `strategy` handles every leg in `legs`.
    pub fn set_strategy_verified(
        &mut self,
        strategy: impl Strategy<Leg, Output = NavigationOutcome> + 'static,
        legs: &[Leg],
    ) -> std::result::Result<(), ContractViolation> {
        self.navigation.replace_verified(strategy, legs)
    }

    pub fn travel(&self, start: &str, end: &str) -> Result<Route> {
        let leg = Leg::new(start, end);
        debug!(
            "Traveling from {} to {} with {}",
            leg.start,
            leg.end,
            self.navigation.strategy_name()
        );
        self.navigation.invoke(&leg)
    }

    pub fn strategy_name(&self) -> &str {
        self.navigation.strategy_name()
    }
}
