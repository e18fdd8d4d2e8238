//! Strategies for waiting on the init done flag of the controller.
//!
//! The controller sets the flag once its startup delay of roughly 100 us has elapsed. The
//! default [BusyWait] strategy spins forever if the flag never gets set. [BoundedPoll] and
//! [DelayPoll] are opt-in alternatives which give up and report an [InitError] instead.
use core::convert::Infallible;

use crate::time::Microseconds;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("init done flag not set after {polls} polls of the control register")]
    InitDoneTimeout { polls: u32 },
}

/// Strategy invoked between reads of the control register while init done is not set.
pub trait PollStrategy {
    type Error;

    /// Called after the `polls`-th read which did not report init done. Returning an error
    /// aborts the bring-up sequence.
    fn pending(&mut self, polls: u32) -> Result<(), Self::Error>;
}

impl<F, E> PollStrategy for F
where
    F: FnMut(u32) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn pending(&mut self, polls: u32) -> Result<(), E> {
        self(polls)
    }
}

/// Unbounded busy wait without timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct BusyWait;

impl PollStrategy for BusyWait {
    type Error = Infallible;

    #[inline]
    fn pending(&mut self, _polls: u32) -> Result<(), Infallible> {
        core::hint::spin_loop();
        Ok(())
    }
}

/// Busy wait which gives up after a maximum number of control register reads.
#[derive(Debug, Clone, Copy)]
pub struct BoundedPoll {
    max_polls: u32,
}

impl BoundedPoll {
    pub const fn new(max_polls: u32) -> Self {
        Self { max_polls }
    }

    pub const fn max_polls(&self) -> u32 {
        self.max_polls
    }
}

impl PollStrategy for BoundedPoll {
    type Error = InitError;

    fn pending(&mut self, polls: u32) -> Result<(), InitError> {
        if polls >= self.max_polls {
            log::warn!("SDRAM init done flag not set after {} polls", polls);
            return Err(InitError::InitDoneTimeout { polls });
        }
        core::hint::spin_loop();
        Ok(())
    }
}

/// Waits a fixed interval between polls using a blocking delay provider and gives up once the
/// accumulated wait time reaches the timeout.
pub struct DelayPoll<D> {
    delay: D,
    interval: Microseconds,
    timeout: Microseconds,
}

impl<D: embedded_hal::delay::DelayNs> DelayPoll<D> {
    pub const fn new(delay: D, interval: Microseconds, timeout: Microseconds) -> Self {
        Self {
            delay,
            interval,
            timeout,
        }
    }

    /// Release the delay provider.
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: embedded_hal::delay::DelayNs> PollStrategy for DelayPoll<D> {
    type Error = InitError;

    fn pending(&mut self, polls: u32) -> Result<(), InitError> {
        let waited_us = polls.saturating_sub(1).saturating_mul(self.interval.ticks());
        if waited_us >= self.timeout.ticks() {
            log::warn!("SDRAM init done flag not set after {} us", waited_us);
            return Err(InitError::InitDoneTimeout { polls });
        }
        self.delay.delay_us(self.interval.ticks());
        Ok(())
    }
}
