//! SDRAM controller bring-up.
//!
//! The sequence follows the initialization procedure of the Roa Logic SDRAM controller:
//!
//!  1. Write the timing configuration and the refresh interval.
//!  2. Wait until the controller reports that its startup delay has elapsed.
//!  3. Enable the controller and precharge all banks.
//!  4. Issue eight auto-refresh cycles.
//!  5. Program the mode register of the SDRAM device.
//!  6. Switch the controller to the caller-provided normal operation configuration.
//!
//! Commands are not sent through a register. The command is armed in the mode field of the
//! control register and the controller sends it to the device on the next access to the data
//! region. The value read by such an access is meaningless and discarded.
use roa_sdram::regs::{CommandMode, ControlRegister, ModeRegister, TimingConfig};

use crate::{
    access::{DataWindow, SdramRegisters},
    poll::{BusyWait, PollStrategy},
};

/// Number of auto-refresh cycles required by the SDRAM initialization protocol.
pub const AUTO_REFRESH_CYCLES: usize = 8;

/// Configuration values for the bring-up sequence.
///
/// All values must be derived from the datasheet of the attached SDRAM part and the controller
/// clock. They are written as they are, without any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdramConfig {
    /// Refresh interval in controller clock cycles.
    pub time_ref: u16,
    pub time_config: TimingConfig,
    /// Control register value for normal operation, written last.
    pub control: ControlRegister,
    /// Mode register value programmed into the SDRAM device.
    pub mode: ModeRegister,
}

impl SdramConfig {
    pub const fn new(
        time_ref: u16,
        time_config: TimingConfig,
        control: ControlRegister,
        mode: ModeRegister,
    ) -> Self {
        Self {
            time_ref,
            time_config,
            control,
            mode,
        }
    }
}

/// Initialize the SDRAM controller and the attached SDRAM device.
///
/// This function blocks until the controller reports that its startup delay has elapsed, which
/// takes approximately 100 us. There is no timeout: if the controller never sets the init done
/// flag, this function never returns. Use [initialize_with_poll] with a bounded
/// [PollStrategy] to get an error instead.
///
/// The sequence is not idempotent. Calling it on an already running controller issues
/// precharge, refresh and mode register commands again.
pub fn initialize<R: SdramRegisters, D: DataWindow>(
    regs: &mut R,
    data: &mut D,
    cfg: &SdramConfig,
) {
    match initialize_with_poll(regs, data, cfg, BusyWait) {
        Ok(()) => (),
        Err(never) => match never {},
    }
}

/// Same as [initialize], but the wait for the init done flag is controlled by the given
/// polling strategy.
///
/// If the strategy gives up, the sequence is aborted before the control register was written
/// and the error of the strategy is returned.
pub fn initialize_with_poll<R: SdramRegisters, D: DataWindow, P: PollStrategy>(
    regs: &mut R,
    data: &mut D,
    cfg: &SdramConfig,
    mut poll: P,
) -> Result<(), P::Error> {
    regs.set_time_config(cfg.time_config);
    regs.set_time_ref(cfg.time_ref);

    let mut polls: u32 = 0;
    let mut ctrl = loop {
        let ctrl = regs.control();
        if ctrl.init_done() {
            break ctrl;
        }
        polls = polls.saturating_add(1);
        poll.pending(polls)?;
    };
    log::debug!("SDRAM startup delay done after {} polls", polls);

    // Precharge all banks and enable the controller with the same write.
    ctrl.set_mode(CommandMode::Precharge);
    // Read-only for the hardware, this only clears the local copy.
    ctrl.set_init_done(false);
    ctrl.set_enable(true);
    regs.set_control(ctrl);
    data.read_word(0);

    ctrl.set_mode(CommandMode::AutoRefresh);
    regs.set_control(ctrl);
    for _ in 0..AUTO_REFRESH_CYCLES {
        data.read_word(0);
    }

    // The device mode register is programmed with the address of the next access.
    ctrl.set_mode(CommandMode::SetMode);
    regs.set_control(ctrl);
    data.read_word(cfg.mode.raw_value() as usize);
    log::debug!("SDRAM mode register programmed: {:?}", cfg.mode);

    regs.set_control(cfg.control);
    log::debug!("SDRAM controller in normal operation");
    Ok(())
}
