//! Módulo de abstracción para el transporte de bus usado por el LSM6DS3

use embedded_hal::i2c::I2c;

/// Trait para abstraer la comunicación con el dispositivo LSM6DS3
///
/// El driver solo necesita escribir y leer un byte en un registro de un
/// dispositivo direccionado. Cualquier transporte que cumpla esto (adaptador
/// I2C real, mock, simulador) puede respaldar al driver.
pub trait Interface {
    /// Tipo de error que puede producir la interfaz
    type Error;

    /// Escribe un byte en un registro
    fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Lee un byte de un registro
    fn read_byte(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error>;
}

/// Implementación de Interface para I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Interface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[reg, value])
    }

    fn read_byte(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut data = [0u8];
        self.i2c.write_read(address, &[reg], &mut data)?;
        Ok(data[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

    #[test]
    fn test_write_byte_is_single_transfer() {
        let expectations = [I2cTrans::write(0x6A, vec![0x10, 0x70])];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations));

        iface.write_byte(0x6A, 0x10, 0x70).unwrap();

        iface.release().done();
    }

    #[test]
    fn test_read_byte_uses_write_read() {
        let expectations = [I2cTrans::write_read(0x6B, vec![0x0F], vec![0x69])];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations));

        assert_eq!(iface.read_byte(0x6B, 0x0F).unwrap(), 0x69);

        iface.release().done();
    }

    #[test]
    fn test_bus_error_passes_through() {
        let expectations =
            [I2cTrans::write_read(0x6A, vec![0x28], vec![0x00]).with_error(ErrorKind::Other)];
        let mut iface = I2cInterface::new(I2cMock::new(&expectations));

        assert_eq!(iface.read_byte(0x6A, 0x28), Err(ErrorKind::Other));

        iface.release().done();
    }
}
