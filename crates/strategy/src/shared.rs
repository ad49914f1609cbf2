//! A strategy slot that can be shared between threads.
//!
//! `invoke` holds a read guard for the whole call and `replace` takes the
//! write guard, so an invocation in flight always completes against the
//! strategy that was current when it started, and every invocation that
//! begins after `replace` returns sees the new strategy.

use crate::slot::StrategySlot;
use crate::traits::Strategy;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct SharedStrategySlot<I: ?Sized, O> {
    inner: Arc<RwLock<StrategySlot<I, O>>>,
}

impl<I: ?Sized, O> SharedStrategySlot<I, O> {
    pub fn new(initial: impl Strategy<I, Output = O> + 'static) -> Self {
        Self::from_slot(StrategySlot::new(initial))
    }

    pub fn from_slot(slot: StrategySlot<I, O>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(slot)),
        }
    }

    /// Waits for in-flight invocations, then installs `next`.
    pub fn replace(&self, next: impl Strategy<I, Output = O> + 'static) {
        self.inner.write().replace(next);
    }

    pub fn invoke(&self, input: &I) -> O {
        self.inner.read().invoke(input)
    }

    pub fn strategy_name(&self) -> String {
        self.inner.read().strategy_name().to_string()
    }

    pub fn generation(&self) -> u64 {
        self.inner.read().generation()
    }
}

// Manual impl: a derive would require `I: Clone` and `O: Clone`.
impl<I: ?Sized, O> Clone for SharedStrategySlot<I, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    struct Tag(&'static str);

    impl Strategy<u32> for Tag {
        type Output = &'static str;

        fn name(&self) -> &str {
            self.0
        }

        fn execute(&self, _input: &u32) -> &'static str {
            self.0
        }
    }

    /// Parks inside `execute` until the test lets it go.
    struct Slow {
        started: Arc<Barrier>,
    }

    impl Strategy<u32> for Slow {
        type Output = &'static str;

        fn name(&self) -> &str {
            "slow"
        }

        fn execute(&self, _input: &u32) -> &'static str {
            self.started.wait();
            thread::sleep(Duration::from_millis(50));
            "slow"
        }
    }

    #[test]
    fn test_in_flight_invoke_finishes_on_old_strategy() {
        let started = Arc::new(Barrier::new(2));
        let slot = SharedStrategySlot::new(Slow {
            started: started.clone(),
        });

        let reader = {
            let slot = slot.clone();
            thread::spawn(move || slot.invoke(&0))
        };

        started.wait();
        slot.replace(Tag("fast"));

        assert_eq!(reader.join().unwrap(), "slow");
        assert_eq!(slot.invoke(&0), "fast");
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn test_concurrent_readers_see_a_whole_strategy() {
        let slot = SharedStrategySlot::new(Tag("A"));

        let readers: Vec<_> = (0..8)
            .map(|i| {
                let slot = slot.clone();
                thread::spawn(move || {
                    (0..200)
                        .map(|n| slot.invoke(&(i * n)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        slot.replace(Tag("B"));

        for reader in readers {
            for tag in reader.join().unwrap() {
                assert!(tag == "A" || tag == "B");
            }
        }
        assert_eq!(slot.strategy_name(), "B");
    }
}
