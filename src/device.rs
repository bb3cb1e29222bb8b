use std::fmt;

use crate::config::{ConfigError, DeviceAddress, InitSequence};
use crate::interface::Interface;
use crate::register::{self, AxisRegisters, ACCEL_AXES, GYRO_AXES};
use crate::types::RawSample;

#[cfg(feature = "linux")]
use crate::interface::I2cInterface;

/// Driver del LSM6DS3: posee la interfaz de bus y la dirección del dispositivo.
///
/// No hay estado interno más allá de la interfaz, la dirección y la tabla de
/// inicialización. Nada impide leer muestras antes de `setup`; el dispositivo
/// simplemente devuelve el contenido de sus registros tras el power-on reset.
pub struct Lsm6ds3<I> {
    pub(crate) interface: I,
    pub(crate) address: u8,
    pub(crate) initial_registers: InitSequence<'static>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lsm6ds3Error<E> {
    /// No se pudo abrir el bus
    BusOpen(E),
    /// WHO_AM_I devolvió un valor distinto de 0x69 (valor leído)
    WhoAmIError(u8),
    /// Fallo de transporte en una lectura o escritura de registro
    Interface(E),
    /// Dirección o tabla de inicialización inválida
    Config(ConfigError),
}

impl<E> From<ConfigError> for Lsm6ds3Error<E> {
    fn from(error: ConfigError) -> Self {
        Lsm6ds3Error::Config(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Lsm6ds3Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lsm6ds3Error::BusOpen(e) => write!(f, "no se pudo abrir el bus I2C: {:?}", e),
            Lsm6ds3Error::WhoAmIError(value) => write!(
                f,
                "WHO_AM_I incorrecto: leído 0x{:02X}, esperado 0x{:02X}",
                value,
                register::WHO_AM_I_VALUE
            ),
            Lsm6ds3Error::Interface(e) => write!(f, "error de bus: {:?}", e),
            Lsm6ds3Error::Config(e) => write!(f, "configuración inválida: {}", e),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for Lsm6ds3Error<E> {}

/// Combina la pareja de registros alto/bajo de un eje en una muestra raw.
///
/// Empaquetado no estándar, conservado por compatibilidad: se descarta el
/// nibble bajo del byte bajo (`(high << 4) | (low >> 4)`) y, si el bit 7 del
/// byte alto está activo, se extiende el signo con `0xF000`. El datasheet
/// indica `(high << 8) | low`, pero las lecturas existentes dependen de esta
/// forma.
pub fn pack_raw(high: u8, low: u8) -> i16 {
    let mut raw = ((high as u16) << 4) | ((low as u16) >> 4);
    if high & 0x80 != 0 {
        raw |= 0xF000;
    }
    raw as i16
}

impl<I, E> Lsm6ds3<I>
where
    I: Interface<Error = E>,
{
    /// Crea un nuevo driver sobre una interfaz ya abierta.
    ///
    /// La dirección puede ser un entero o texto hexadecimal (`"6a"`, `"0x6A"`).
    pub fn new<'a>(
        interface: I,
        address: impl Into<DeviceAddress<'a>>,
    ) -> Result<Self, Lsm6ds3Error<E>> {
        let address = address.into().resolve()?;
        Ok(Self {
            interface,
            address,
            initial_registers: InitSequence::DEFAULT,
        })
    }

    /// Dirección I2C de 7 bits del dispositivo
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Tabla de registros que escribirá `setup`
    pub fn initial_registers(&self) -> InitSequence<'static> {
        self.initial_registers
    }

    /// Sustituye la tabla de inicialización. Se valida en `setup`.
    pub fn set_initial_registers(&mut self, sequence: InitSequence<'static>) {
        self.initial_registers = sequence;
    }

    /// Consume el driver y devuelve la interfaz subyacente
    pub fn release(self) -> I {
        self.interface
    }

    /// Lee un registro
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Lsm6ds3Error<E>> {
        self.interface
            .read_byte(self.address, reg)
            .map_err(Lsm6ds3Error::Interface)
    }

    /// Escribe un registro
    pub fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Lsm6ds3Error<E>> {
        self.interface
            .write_byte(self.address, reg, value)
            .map_err(Lsm6ds3Error::Interface)
    }

    /// Comprueba que el dispositivo responde como un LSM6DS3
    pub fn detect(&mut self) -> Result<(), Lsm6ds3Error<E>> {
        let whoami = self.read_reg(register::WHO_AM_I)?;
        if whoami != register::WHO_AM_I_VALUE {
            return Err(Lsm6ds3Error::WhoAmIError(whoami));
        }
        log::debug!("LSM6DS3 detectado en 0x{:02X}", self.address);
        Ok(())
    }

    /// Inicializa el dispositivo con la tabla configurada.
    ///
    /// Con `run_detect` se verifica WHO_AM_I antes de escribir nada. Si una
    /// escritura falla la secuencia se detiene y el dispositivo queda
    /// parcialmente configurado; se puede repetir `setup` desde el principio.
    pub fn setup(&mut self, run_detect: bool) -> Result<(), Lsm6ds3Error<E>> {
        let sequence = self.initial_registers;
        self.setup_with(sequence, run_detect)
    }

    /// Igual que `setup` pero con una tabla explícita
    pub fn setup_with(
        &mut self,
        sequence: InitSequence<'_>,
        run_detect: bool,
    ) -> Result<(), Lsm6ds3Error<E>> {
        if run_detect {
            self.detect()?;
        }

        for (reg, value) in sequence.pairs()? {
            log::trace!("setup: reg 0x{:02X} <- 0x{:02X}", reg, value);
            self.write_reg(reg, value)?;
        }

        log::debug!("Setup completado: {} registros escritos", sequence.len());
        Ok(())
    }

    /// Lee los valores raw del acelerómetro (x, y, z)
    pub fn get_raw_accel_values(&mut self) -> Result<RawSample, Lsm6ds3Error<E>> {
        self.read_axes(&ACCEL_AXES)
    }

    /// Lee los valores raw del giroscopio (x, y, z)
    pub fn get_raw_gyro_values(&mut self) -> Result<RawSample, Lsm6ds3Error<E>> {
        self.read_axes(&GYRO_AXES)
    }

    // Alto antes que bajo, ejes en orden X, Y, Z
    fn read_axes(&mut self, axes: &[AxisRegisters; 3]) -> Result<RawSample, Lsm6ds3Error<E>> {
        let mut out = [0i16; 3];
        for (slot, axis) in out.iter_mut().zip(axes.iter()) {
            let high = self.read_reg(axis.high)?;
            let low = self.read_reg(axis.low)?;
            *slot = pack_raw(high, low);
        }
        Ok((out[0], out[1], out[2]))
    }
}

#[cfg(feature = "linux")]
pub type LinuxLsm6ds3 = Lsm6ds3<I2cInterface<linux_embedded_hal::I2cdev>>;

#[cfg(feature = "linux")]
impl LinuxLsm6ds3 {
    /// Abre `/dev/i2c-<bus>` y crea el driver.
    ///
    /// El descriptor del bus se libera al destruir el driver.
    pub fn open<'a>(
        bus: u8,
        address: impl Into<DeviceAddress<'a>>,
    ) -> Result<Self, Lsm6ds3Error<linux_embedded_hal::I2CError>> {
        let address = address.into().resolve()?;
        let path = format!("/dev/i2c-{}", bus);
        let i2c = linux_embedded_hal::I2cdev::new(&path)
            .map_err(|e| Lsm6ds3Error::BusOpen(linux_embedded_hal::I2CError::from(e)))?;
        log::debug!("Bus {} abierto para el dispositivo 0x{:02X}", path, address);
        Self::new(I2cInterface::new(i2c), address)
    }

    /// Bus 1, dirección 0x6A
    pub fn open_default() -> Result<Self, Lsm6ds3Error<linux_embedded_hal::I2CError>> {
        Self::open(crate::config::DEFAULT_BUS, crate::config::DEFAULT_ADDRESS)
    }
}
