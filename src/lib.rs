//! Biblioteca Rust para el sensor inercial ST LSM6DS3
//!
//! Esta biblioteca proporciona una interfaz mínima sobre I2C para el LSM6DS3,
//! un IMU de 6 ejes con acelerómetro y giroscopio: identificación, escritura
//! de la tabla de configuración inicial y lectura de muestras raw.

use embedded_hal::i2c::I2c;

pub mod config;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

// Re-exports públicos
pub use config::{ConfigError, DeviceAddress, InitSequence, DEFAULT_ADDRESS, DEFAULT_BUS};
pub use device::{pack_raw, Lsm6ds3, Lsm6ds3Error};
pub use types::{AccelFullScale, GyroFullScale, RawSample};

#[cfg(feature = "linux")]
pub use device::LinuxLsm6ds3;

use crate::interface::I2cInterface;

/// Crea un nuevo dispositivo LSM6DS3 usando el bus I2C
pub fn new_i2c_device<'a, I>(
    i2c: I,
    address: impl Into<DeviceAddress<'a>>,
) -> Result<Lsm6ds3<I2cInterface<I>>, Lsm6ds3Error<I::Error>>
where
    I: I2c,
{
    Lsm6ds3::new(I2cInterface::new(i2c), address)
}
