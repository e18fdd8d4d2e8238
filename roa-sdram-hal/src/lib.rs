//! # HAL for the Roa Logic SDRAM controller
//!
//! This crate contains the **H**ardware **A**bstraction **L**ayer (HAL) on top of the
//! [register definitions](roa_sdram) of the Roa Logic AHB-Lite SDRAM controller.
//!
//! Its main job is the one-shot bring-up of the controller and the attached SDRAM device,
//! see [initialize]. Hardware is only accessed through the [SdramRegisters] and [DataWindow]
//! traits, which allows running the bring-up sequence against a simulated controller.
//!
//! ```no_run
//! use roa_sdram::regs::*;
//! use roa_sdram_hal::{MmioDataWindow, SdramConfig, initialize};
//!
//! let cfg = SdramConfig::new(
//!     0x07FF,
//!     TimingConfig::new_with_raw_value(0x0011_2233),
//!     ControlRegister::new_with_raw_value(0)
//!         .with_dq_size(DqSize::_32Bit)
//!         .with_rows(RowCount::_13)
//!         .with_columns(ColumnCount::_10)
//!         .with_enable(true),
//!     ModeRegister::new_with_raw_value(0)
//!         .with_burst_length(BurstLength::_4)
//!         .with_latency(ModeLatency::Cl2),
//! );
//! // Safety: Addresses of the controller CSRs and the SDRAM data region of the target system.
//! let mut regs = unsafe { roa_sdram::SdramController::new_mmio_at(0x9000_0000) };
//! let mut data = unsafe { MmioDataWindow::new_at(0x8000_0000) }.unwrap();
//! initialize(&mut regs, &mut data, &cfg);
//! ```
#![no_std]

pub mod access;
pub mod init;
pub mod memtest;
pub mod poll;
pub mod time;

pub use access::{DataWindow, MmioDataWindow, SdramRegisters};
pub use init::{AUTO_REFRESH_CYCLES, SdramConfig, initialize, initialize_with_poll};
pub use poll::{BoundedPoll, BusyWait, DelayPoll, InitError, PollStrategy};
