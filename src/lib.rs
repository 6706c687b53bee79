//!
//! A platform-agnostic driver for the ADE7953 single-phase energy metering device. Built using embedded-hal.
//!
//! The ADE7953 exposes its measurement, calibration, and configuration
//! registers over either a 4-wire SPI bus or a 2-wire I2C bus. Both buses
//! speak the same register protocol (16-bit address, big-endian payload), so
//! the driver is written against an [`Interface`] trait with one
//! implementation per transport.
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod driver;
pub mod interface;
pub mod register;

pub use driver::*;
pub use interface::{
    Error, I2cInterface, Interface, SpiInterface, DEFAULT_I2C_ADDRESS, SPI_CLOCK_HZ,
};
pub use register::{Register16, Register24, Register32, Register8};
