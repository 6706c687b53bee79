use embedded_hal::delay::DelayNs;
use libm::fabsf;

use crate::interface::{Error, Interface};
use crate::register::{Register16, Register24, Register32, Register8};

/// Writing this key to the unlock address opens register 0x120 for one write.
const UNLOCK_ADDRESS: u16 = 0x00FE;
const UNLOCK_KEY: u16 = 0x00AD;

/// Register 0x120 value required for datasheet performance.
const OPTIMUM_SETTING: u16 = 0x0030;
/// Line cycle accumulation on active, reactive, and apparent energy for both
/// current channels, read-with-reset enabled.
const LCYCMODE_ALL_CHANNELS: u8 = 0b0111_1111;
/// 120 half line cycles per accumulation period.
const LINECYC_HALF_CYCLES: u16 = 0x0078;
/// Pattern parked in AP_NOLOAD during bring-up as a read/write sanity check.
const AP_NOLOAD_PATTERN: u32 = 0x0000_0001;

const SETTLE_MS: u32 = 100;

/// Divisor/offset pair converting a raw register value to engineering units,
/// applied as `raw / divisor + offset`.
///
/// The divisors are calibration constants tied to the transducer ratios of
/// the reference meter board and are carried verbatim; re-deriving them would
/// break compatibility with readings taken on that hardware.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale {
    divisor: f32,
    offset: f32,
}

impl Scale {
    /// VRMS counts per volt.
    pub const VRMS: Self = Self::new(19090.0, 0.0);
    /// IRMSA counts per ampere.
    pub const IRMS_A: Self = Self::new(1327.0, 0.0);
    /// Instantaneous power counts per watt (also VA and var).
    pub const INST_POWER: Self = Self::new(1.502, 0.0);
    /// Power factor counts per unit; full scale 0x7FFF is a power factor of
    /// 100.
    pub const POWER_FACTOR: Self = Self::new(327.67, 0.0);
    /// Period register counts, passed through unscaled.
    pub const PERIOD: Self = Self::new(1.0, 0.0);

    pub const fn new(divisor: f32, offset: f32) -> Self {
        Self { divisor, offset }
    }

    pub fn decimalize(self, raw: f32) -> f32 {
        raw / self.divisor + self.offset
    }
}

/// Driver for one ADE7953 behind an [`Interface`].
///
/// The handle owns the bus transport and the delay source; bus transactions
/// are blocking and strictly serialized through it.
pub struct Ade7953<I, Delay> {
    interface: I,
    delay: Delay,
}

impl<I, Delay> Ade7953<I, Delay>
where
    I: Interface,
    Delay: DelayNs,
{
    ///
    ///
    /// # Arguments
    ///
    /// * `interface`: The bus transport, [`SpiInterface`] or [`I2cInterface`].
    /// * `delay`: The delay source used to pace initialization.
    ///
    /// returns: Ade7953<I, Delay>
    ///
    /// [`SpiInterface`]: crate::interface::SpiInterface
    /// [`I2cInterface`]: crate::interface::I2cInterface
    pub fn new(interface: I, delay: Delay) -> Self {
        Self { interface, delay }
    }

    /// Brings the device to its measuring configuration. Call once after
    /// power-up, before any accessor.
    ///
    /// Unlocks and writes the optimum-performance setting the datasheet
    /// requires, pins the communication interface (I2C only), parks a sanity
    /// pattern in AP_NOLOAD, and enables line cycle accumulation over 120
    /// half line cycles on all four energy/channel combinations. Each
    /// calibration write is followed by a settling delay.
    pub fn initialize(&mut self) -> Result<(), Error<I::BusError>> {
        self.interface.begin()?;
        self.delay.delay_ms(50);

        self.interface
            .write_register(UNLOCK_ADDRESS, &UNLOCK_KEY.to_be_bytes())?;
        self.write_u16(Register16::Reserved, OPTIMUM_SETTING)?;
        self.interface.lock_comm_interface()?;
        self.delay.delay_ms(SETTLE_MS);

        self.write_u32(Register32::ApNoload, AP_NOLOAD_PATTERN)?;
        self.delay.delay_ms(SETTLE_MS);
        self.write_u8(Register8::LcycMode, LCYCMODE_ALL_CHANNELS)?;
        self.delay.delay_ms(SETTLE_MS);
        self.write_u16(Register16::LineCyc, LINECYC_HALF_CYCLES)?;
        self.delay.delay_ms(SETTLE_MS);

        Ok(())
    }

    pub fn read_u8(&mut self, register: Register8) -> Result<u8, Error<I::BusError>> {
        let mut data = [0u8; 1];
        self.interface.read_register(register as u16, &mut data)?;
        Ok(data[0])
    }

    pub fn read_u16(&mut self, register: Register16) -> Result<u16, Error<I::BusError>> {
        let mut data = [0u8; 2];
        self.interface.read_register(register as u16, &mut data)?;
        Ok(u16::from_be_bytes(data))
    }

    /// The value occupies the low 24 bits of the returned word.
    pub fn read_u24(&mut self, register: Register24) -> Result<u32, Error<I::BusError>> {
        let mut data = [0u8; 3];
        self.interface.read_register(register as u16, &mut data)?;
        Ok(u32::from_be_bytes([0, data[0], data[1], data[2]]))
    }

    pub fn read_u32(&mut self, register: Register32) -> Result<u32, Error<I::BusError>> {
        let mut data = [0u8; 4];
        self.interface.read_register(register as u16, &mut data)?;
        Ok(u32::from_be_bytes(data))
    }

    pub fn write_u8(&mut self, register: Register8, data: u8) -> Result<(), Error<I::BusError>> {
        self.interface.write_register(register as u16, &[data])
    }

    pub fn write_u16(&mut self, register: Register16, data: u16) -> Result<(), Error<I::BusError>> {
        self.interface
            .write_register(register as u16, &data.to_be_bytes())
    }

    /// Sends the low 24 bits of `data`, MSB first.
    pub fn write_u24(&mut self, register: Register24, data: u32) -> Result<(), Error<I::BusError>> {
        let bytes = data.to_be_bytes();
        self.interface.write_register(register as u16, &bytes[1..])
    }

    pub fn write_u32(&mut self, register: Register32, data: u32) -> Result<(), Error<I::BusError>> {
        self.interface
            .write_register(register as u16, &data.to_be_bytes())
    }

    /// Silicon version number.
    pub fn get_version(&mut self) -> Result<u8, Error<I::BusError>> {
        self.read_u8(Register8::Version)
    }

    /// Power factor magnitude on Current Channel A. The register is sign
    /// magnitude; the sign is dropped.
    pub fn get_power_factor_a(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u16(Register16::PfA)? as i16;
        Ok(fabsf(Scale::POWER_FACTOR.decimalize(raw as f32)))
    }

    /// Line period register, in raw counts.
    pub fn get_period(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u16(Register16::Period)?;
        Ok(Scale::PERIOD.decimalize(raw as f32))
    }

    /// Phase calibration for Current Channel A, sign magnitude format.
    pub fn get_phase_calib_a(&mut self) -> Result<i16, Error<I::BusError>> {
        Ok(self.read_u16(Register16::PhCalA)? as i16)
    }

    /// Sets the phase calibration for Current Channel A, sign magnitude
    /// format.
    pub fn set_phase_calib_a(&mut self, value: i16) -> Result<(), Error<I::BusError>> {
        self.write_u16(Register16::PhCalA, value as u16)
    }

    /// Active power no-load threshold, raw.
    pub fn get_ap_noload(&mut self) -> Result<u32, Error<I::BusError>> {
        self.read_u32(Register32::ApNoload)
    }

    /// Instantaneous voltage sample, raw counts.
    pub fn get_inst_voltage(&mut self) -> Result<i32, Error<I::BusError>> {
        Ok(self.read_u32(Register32::V)? as i32)
    }

    /// RMS voltage in volts.
    pub fn get_vrms(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u32(Register32::Vrms)?;
        Ok(Scale::VRMS.decimalize(raw as f32))
    }

    /// Instantaneous Current Channel A sample, raw counts.
    pub fn get_inst_current_a(&mut self) -> Result<i32, Error<I::BusError>> {
        Ok(self.read_u32(Register32::Ia)? as i32)
    }

    /// RMS current on Current Channel A in amperes.
    pub fn get_irms_a(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u32(Register32::IrmsA)?;
        Ok(Scale::IRMS_A.decimalize(raw as f32))
    }

    /// Voltage channel peak, raw counts.
    pub fn get_vpeak(&mut self) -> Result<u32, Error<I::BusError>> {
        self.read_u32(Register32::VPeak)
    }

    /// Current Channel A peak, raw counts.
    pub fn get_ipeak_a(&mut self) -> Result<u32, Error<I::BusError>> {
        self.read_u32(Register32::IaPeak)
    }

    /// Accumulated active energy on Current Channel A, raw counts.
    pub fn get_active_energy_a(&mut self) -> Result<i32, Error<I::BusError>> {
        Ok(self.read_u32(Register32::AEnergyA)? as i32)
    }

    /// Accumulated reactive energy on Current Channel A, raw counts.
    pub fn get_reactive_energy_a(&mut self) -> Result<i32, Error<I::BusError>> {
        Ok(self.read_u32(Register32::REnergyA)? as i32)
    }

    /// Accumulated apparent energy on Current Channel A, raw counts.
    pub fn get_apparent_energy_a(&mut self) -> Result<i32, Error<I::BusError>> {
        Ok(self.read_u32(Register32::ApEnergyA)? as i32)
    }

    /// Instantaneous apparent power magnitude on Current Channel A in VA.
    pub fn get_inst_apparent_power_a(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u32(Register32::Ava)? as i32;
        Ok(fabsf(Scale::INST_POWER.decimalize(raw as f32)))
    }

    /// Instantaneous active power magnitude on Current Channel A in watts.
    pub fn get_inst_active_power_a(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u32(Register32::Awatt)? as i32;
        Ok(fabsf(Scale::INST_POWER.decimalize(raw as f32)))
    }

    /// Instantaneous reactive power on Current Channel A in var. Unlike the
    /// active and apparent readings this keeps the sign of the raw register.
    pub fn get_inst_reactive_power_a(&mut self) -> Result<f32, Error<I::BusError>> {
        let raw = self.read_u32(Register32::Avar)? as i32;
        Ok(Scale::INST_POWER.decimalize(raw as f32))
    }
}

#[cfg(test)]
mod test {
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use libm::fabsf;

    use crate::interface::{I2cInterface, SpiInterface};
    use crate::register::{Register16, Register24, Register32, Register8};

    use super::{Ade7953, Scale};

    fn spi_driver(expectations: &[SpiTransaction<u8>]) -> Ade7953<SpiInterface<SpiMock<u8>>, NoopDelay> {
        Ade7953::new(SpiInterface::new(SpiMock::new(expectations)), NoopDelay::new())
    }

    fn spi_read(address_msb: u8, address_lsb: u8, response: Vec<u8>) -> Vec<SpiTransaction<u8>> {
        vec![
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![address_msb, address_lsb, 0x80]),
            SpiTransaction::read_vec(response),
            SpiTransaction::transaction_end(),
        ]
    }

    fn spi_write(address_msb: u8, address_lsb: u8, payload: Vec<u8>) -> Vec<SpiTransaction<u8>> {
        vec![
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![address_msb, address_lsb, 0x00]),
            SpiTransaction::write_vec(payload),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn decimalize_is_affine() {
        assert_eq!(Scale::new(3.0, 2.5).decimalize(0.0), 2.5);
        assert_eq!(Scale::new(1.0, 0.0).decimalize(1234.0), 1234.0);
    }

    #[test]
    fn get_version_returns_the_first_captured_byte() {
        let expectations = spi_read(0x07, 0x02, vec![0x02, 0x02]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.get_version().unwrap(), 0x02);

        meter.interface.spi.done();
    }

    #[test]
    fn get_vrms_at_one_volt() {
        // 19090 counts is one volt.
        let expectations = spi_read(0x03, 0x1C, vec![0x00, 0x00, 0x4A, 0x92]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.get_vrms().unwrap(), 1.0);

        meter.interface.spi.done();
    }

    #[test]
    fn get_irms_a_at_one_ampere() {
        // 1327 counts is one ampere.
        let expectations = spi_read(0x03, 0x1A, vec![0x00, 0x00, 0x05, 0x2F]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.get_irms_a().unwrap(), 1.0);

        meter.interface.spi.done();
    }

    #[test]
    fn get_period_passes_raw_counts_through() {
        let expectations = spi_read(0x01, 0x1E, vec![0x1F, 0x40]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.get_period().unwrap(), 8000.0);

        meter.interface.spi.done();
    }

    #[test]
    fn get_power_factor_a_drops_the_sign() {
        let expectations = spi_read(0x01, 0x0A, vec![0x80, 0x00]);
        let mut meter = spi_driver(&expectations);

        let pf = meter.get_power_factor_a().unwrap();
        assert!(pf > 0.0);
        assert!(fabsf(pf - 100.003_05) < 1e-3);

        meter.interface.spi.done();
    }

    #[test]
    fn active_power_is_magnitude_but_reactive_keeps_sign() {
        // -1502 counts, about -1 kW / -1 kvar.
        let raw = vec![0xFF, 0xFF, 0xFA, 0x22];

        let expectations = spi_read(0x03, 0x12, raw.clone());
        let mut meter = spi_driver(&expectations);
        let active = meter.get_inst_active_power_a().unwrap();
        assert!(fabsf(active - 1000.0) < 1e-3);
        meter.interface.spi.done();

        let expectations = spi_read(0x03, 0x14, raw);
        let mut meter = spi_driver(&expectations);
        let reactive = meter.get_inst_reactive_power_a().unwrap();
        assert!(fabsf(reactive + 1000.0) < 1e-3);
        meter.interface.spi.done();
    }

    #[test]
    fn get_phase_calib_a_is_sign_extended() {
        let expectations = spi_read(0x01, 0x08, vec![0xFF, 0xFE]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.get_phase_calib_a().unwrap(), -2);

        meter.interface.spi.done();
    }

    #[test]
    fn set_phase_calib_a_writes_sign_magnitude_bits() {
        let expectations = spi_write(0x01, 0x08, vec![0x00, 0x7F]);
        let mut meter = spi_driver(&expectations);

        meter.set_phase_calib_a(0x7F).unwrap();

        meter.interface.spi.done();
    }

    #[test]
    fn read_u24_leaves_the_top_byte_clear() {
        let expectations = spi_read(0x02, 0x1C, vec![0x4A, 0x92, 0x00]);
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.read_u24(Register24::Vrms).unwrap(), 0x004A_9200);

        meter.interface.spi.done();
    }

    #[test]
    fn write_u24_sends_three_bytes() {
        let expectations = spi_write(0x02, 0x03, vec![0x00, 0xE4, 0x19]);
        let mut meter = spi_driver(&expectations);

        meter.write_u24(Register24::ApNoload, 0x00E419).unwrap();

        meter.interface.spi.done();
    }

    #[test]
    fn raw_register_access_reaches_the_full_map() {
        let mut expectations = spi_read(0x00, 0x04, vec![0x40, 0x40]);
        expectations.extend(spi_read(0x01, 0x02, vec![0x80, 0x04]));
        expectations.extend(spi_read(0x03, 0x7F, vec![0x00, 0xFF, 0xFF, 0xFF]));
        let mut meter = spi_driver(&expectations);

        assert_eq!(meter.read_u8(Register8::LcycMode).unwrap(), 0x40);
        assert_eq!(meter.read_u16(Register16::Config).unwrap(), 0x8004);
        assert_eq!(meter.read_u32(Register32::Crc).unwrap(), 0x00FF_FFFF);

        meter.interface.spi.done();
    }

    #[test]
    fn initialize_unlocks_before_calibrating_over_spi() {
        let mut expectations = spi_write(0x00, 0xFE, vec![0x00, 0xAD]);
        expectations.extend(spi_write(0x01, 0x20, vec![0x00, 0x30]));
        expectations.extend(spi_write(0x03, 0x03, vec![0x00, 0x00, 0x00, 0x01]));
        expectations.extend(spi_write(0x00, 0x04, vec![0x7F]));
        expectations.extend(spi_write(0x01, 0x01, vec![0x00, 0x78]));
        let mut meter = spi_driver(&expectations);

        meter.initialize().unwrap();

        meter.interface.spi.done();
    }

    #[test]
    fn initialize_locks_the_comm_interface_over_i2c() {
        let expectations = [
            I2cTransaction::write(0x38, vec![0x00, 0xFE, 0x00, 0xAD]),
            I2cTransaction::write(0x38, vec![0x01, 0x20, 0x00, 0x30]),
            I2cTransaction::write(0x38, vec![0x01, 0x02, 0x20, 0x00]),
            I2cTransaction::write(0x38, vec![0x03, 0x03, 0x00, 0x00, 0x00, 0x01]),
            I2cTransaction::write(0x38, vec![0x00, 0x04, 0x7F]),
            I2cTransaction::write(0x38, vec![0x01, 0x01, 0x00, 0x78]),
        ];
        let interface = I2cInterface::new(
            I2cMock::new(&expectations),
            PinMock::new(&[PinTransaction::set(PinState::High)]),
            PinMock::new(&[PinTransaction::set(PinState::High)]),
        );
        let mut meter = Ade7953::new(interface, NoopDelay::new());

        meter.initialize().unwrap();

        meter.interface.i2c.done();
        meter.interface.cs.done();
        meter.interface.sclk.done();
    }
}
