//! Bus transports for the ADE7953.
//!
//! The device carries the same register file behind two physical buses. A
//! transaction always starts with the two address bytes, MSB first; on SPI a
//! read/write command byte follows the address inside one chip-select frame,
//! on I2C the direction comes from the bus protocol itself. [`Interface`]
//! captures that shared shape so the driver is written once.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};
use embedded_hal::spi::{Operation, SpiDevice};

/// Command byte requesting a register read.
pub const READ: u8 = 0x80;
/// Command byte requesting a register write.
pub const WRITE: u8 = 0x00;

/// Recommended SPI clock frequency in Hz.
pub const SPI_CLOCK_HZ: u32 = 1_000_000;

/// Factory I2C address of the ADE7953.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x38;

const CONFIG_ADDRESS: u16 = 0x0102;
/// CONFIG value with COMM_LOCK (bit 15) cleared, pinning the device to the
/// interface it autodetected at power-up.
const CONFIG_COMM_LOCK: u16 = 0x2000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Fault surfaced by the underlying bus peripheral.
    Bus(E),
    /// The device delivered fewer bytes than the register width requires.
    ShortRead,
    /// A mode-select pin could not be driven.
    Pin,
}

/// Returns byte `index` of a 16-bit register address; index 1 is the MSB,
/// index 0 the LSB.
pub(crate) const fn address_byte(address: u16, index: u8) -> u8 {
    (address >> (8 * index)) as u8
}

/// One register transport to the ADE7953.
pub trait Interface {
    /// Error type of the underlying bus peripheral.
    type BusError;

    /// Prepares the bus for first contact with the device.
    fn begin(&mut self) -> Result<(), Error<Self::BusError>>;

    /// Locks the device to the communication interface in use.
    ///
    /// Only meaningful on I2C, where the power-up interface autodetection
    /// must be pinned down; the SPI transport treats this as a no-op.
    fn lock_comm_interface(&mut self) -> Result<(), Error<Self::BusError>>;

    /// Writes `data`, MSB first, to the register at `address`.
    fn write_register(&mut self, address: u16, data: &[u8]) -> Result<(), Error<Self::BusError>>;

    /// Reads `data.len()` bytes, MSB first, from the register at `address`.
    fn read_register(&mut self, address: u16, data: &mut [u8])
        -> Result<(), Error<Self::BusError>>;
}

/// Framed-clock transport: SPI mode 3, MSB first, one chip-select frame per
/// transaction. Chip select and clock configuration are owned by the
/// [`SpiDevice`]; [`SPI_CLOCK_HZ`] is the recommended clock.
pub struct SpiInterface<SPI> {
    pub(crate) spi: SPI,
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type BusError = SPI::Error;

    fn begin(&mut self) -> Result<(), Error<SPI::Error>> {
        // The SpiDevice already carries chip-select and clock configuration.
        Ok(())
    }

    fn lock_comm_interface(&mut self) -> Result<(), Error<SPI::Error>> {
        Ok(())
    }

    fn write_register(&mut self, address: u16, data: &[u8]) -> Result<(), Error<SPI::Error>> {
        let header = [address_byte(address, 1), address_byte(address, 0), WRITE];
        self.spi
            .transaction(&mut [Operation::Write(&header), Operation::Write(data)])
            .map_err(Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("spi write {=u16:#x} <- {=[u8]:#x}", address, data);

        Ok(())
    }

    fn read_register(&mut self, address: u16, data: &mut [u8]) -> Result<(), Error<SPI::Error>> {
        let header = [address_byte(address, 1), address_byte(address, 0), READ];
        if data.len() == 1 {
            // An 8-bit read clocks out two byte-slots; only the first carries
            // data, the second is a duplicate the device emits regardless.
            let mut slots = [0u8; 2];
            self.spi
                .transaction(&mut [Operation::Write(&header), Operation::Read(&mut slots)])
                .map_err(Error::Bus)?;
            data[0] = slots[0];
        } else {
            self.spi
                .transaction(&mut [Operation::Write(&header), Operation::Read(data)])
                .map_err(Error::Bus)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("spi read {=u16:#x} -> {=[u8]:#x}", address, data);

        Ok(())
    }
}

/// Addressed-bus transport. The CS and SCLK pins double as interface
/// mode-select inputs on the ADE7953; both are driven high in [`begin`]
/// so the device autodetects I2C.
///
/// [`begin`]: Interface::begin
pub struct I2cInterface<I2C, CS, SCLK> {
    pub(crate) i2c: I2C,
    address: u8,
    pub(crate) cs: CS,
    pub(crate) sclk: SCLK,
}

impl<I2C, CS, SCLK> I2cInterface<I2C, CS, SCLK>
where
    I2C: I2c,
    CS: OutputPin,
    SCLK: OutputPin,
{
    /// Creates the transport at the factory address
    /// [`DEFAULT_I2C_ADDRESS`].
    pub fn new(i2c: I2C, cs: CS, sclk: SCLK) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS, cs, sclk)
    }

    pub fn with_address(i2c: I2C, address: u8, cs: CS, sclk: SCLK) -> Self {
        Self {
            i2c,
            address,
            cs,
            sclk,
        }
    }
}

impl<I2C, CS, SCLK> Interface for I2cInterface<I2C, CS, SCLK>
where
    I2C: I2c,
    CS: OutputPin,
    SCLK: OutputPin,
{
    type BusError = I2C::Error;

    fn begin(&mut self) -> Result<(), Error<I2C::Error>> {
        self.cs.set_high().map_err(|_| Error::Pin)?;
        self.sclk.set_high().map_err(|_| Error::Pin)
    }

    fn lock_comm_interface(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(CONFIG_ADDRESS, &CONFIG_COMM_LOCK.to_be_bytes())
    }

    fn write_register(&mut self, address: u16, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut frame = [0u8; 6];
        frame[0] = address_byte(address, 1);
        frame[1] = address_byte(address, 0);
        frame[2..2 + data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &frame[..2 + data.len()])
            .map_err(Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c write {=u16:#x} <- {=[u8]:#x}", address, data);

        Ok(())
    }

    fn read_register(&mut self, address: u16, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        let pointer = [address_byte(address, 1), address_byte(address, 0)];
        self.i2c
            .write_read(self.address, &pointer, data)
            .map_err(|e| match e.kind() {
                // A data-phase NACK means the device stopped supplying bytes
                // before the register width was satisfied.
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => Error::ShortRead,
                _ => Error::Bus(e),
            })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c read {=u16:#x} -> {=[u8]:#x}", address, data);

        Ok(())
    }
}

#[cfg(feature = "std")]
impl<E> std::fmt::Display for Error<E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {e:?}"),
            Error::ShortRead => write!(f, "Short read"),
            Error::Pin => write!(f, "Pin error"),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E>
where
    E: std::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
