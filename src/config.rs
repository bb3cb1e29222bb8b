//! Configuración de construcción e inicialización del LSM6DS3

use std::fmt;

use crate::register;

/// Bus I2C por defecto (`/dev/i2c-1` en Linux)
pub const DEFAULT_BUS: u8 = 1;

/// Dirección I2C por defecto (SA0 a GND)
pub const DEFAULT_ADDRESS: u8 = 0x6A;

/// Mayor dirección válida de 7 bits
pub const MAX_ADDRESS: u8 = 0x7F;

/// Errores de configuración detectados antes de tocar el bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// La tabla de inicialización tiene distinto número de registros y valores
    LengthMismatch { registers: usize, values: usize },
    /// La dirección no es un número hexadecimal válido de 7 bits
    InvalidAddress,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LengthMismatch { registers, values } => write!(
                f,
                "la tabla inicial tiene {} registros y {} valores",
                registers, values
            ),
            ConfigError::InvalidAddress => write!(f, "dirección de 7 bits inválida"),
        }
    }
}

/// Dirección del dispositivo tal como la entrega el usuario.
///
/// Solo existe durante la construcción: `resolve` la normaliza a un entero y
/// el driver nunca guarda esta forma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceAddress<'a> {
    Numeric(u8),
    /// Texto hexadecimal, con o sin prefijo `0x`
    Hex(&'a str),
}

impl Default for DeviceAddress<'_> {
    fn default() -> Self {
        DeviceAddress::Numeric(DEFAULT_ADDRESS)
    }
}

impl From<u8> for DeviceAddress<'_> {
    fn from(value: u8) -> Self {
        DeviceAddress::Numeric(value)
    }
}

impl<'a> From<&'a str> for DeviceAddress<'a> {
    fn from(value: &'a str) -> Self {
        DeviceAddress::Hex(value)
    }
}

impl DeviceAddress<'_> {
    /// Normaliza la dirección a un entero de 7 bits
    pub fn resolve(self) -> Result<u8, ConfigError> {
        let address = match self {
            DeviceAddress::Numeric(value) => value,
            DeviceAddress::Hex(text) => {
                let text = text.trim();
                let digits = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                    .unwrap_or(text);
                u8::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidAddress)?
            }
        };

        if address > MAX_ADDRESS {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(address)
    }
}

/// Tabla de registros escrita por `setup`, como dos listas paralelas.
///
/// El orden importa: CTRL3_C (BDU, IF_INC) debe estar activo antes que las
/// escrituras siguientes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSequence<'a> {
    pub registers: &'a [u8],
    pub values: &'a [u8],
}

impl InitSequence<'static> {
    pub const DEFAULT: InitSequence<'static> = InitSequence {
        registers: &[
            register::CTRL1_XL,
            register::CTRL2_G,
            register::CTRL3_C,
            register::CTRL4_C,
            register::CTRL5_C,
            register::CTRL6_C,
            register::CTRL7_G,
            register::CTRL8_XL,
            register::CTRL9_XL,
            register::CTRL10_C,
        ],
        values: &[0x70, 0x4C, 0x44, 0x00, 0x00, 0x00, 0x50, 0x00, 0x38, 0x38],
    };
}

impl Default for InitSequence<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'a> InitSequence<'a> {
    pub fn new(registers: &'a [u8], values: &'a [u8]) -> Self {
        Self { registers, values }
    }

    /// Comprueba que ambas listas tienen la misma longitud
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registers.len() != self.values.len() {
            return Err(ConfigError::LengthMismatch {
                registers: self.registers.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Pares (registro, valor) en orden de escritura
    pub fn pairs(&self) -> Result<impl Iterator<Item = (u8, u8)> + 'a, ConfigError> {
        self.validate()?;
        let (registers, values): (&'a [u8], &'a [u8]) = (self.registers, self.values);
        Ok(registers.iter().copied().zip(values.iter().copied()))
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        assert_eq!(DeviceAddress::default().resolve(), Ok(0x6A));
    }

    #[test]
    fn test_hex_address_forms() {
        assert_eq!(DeviceAddress::from("6a").resolve(), Ok(0x6A));
        assert_eq!(DeviceAddress::from("0x6B").resolve(), Ok(0x6B));
        assert_eq!(DeviceAddress::from(" 0X6A ").resolve(), Ok(0x6A));
    }

    #[test]
    fn test_malformed_address_rejected() {
        assert_eq!(DeviceAddress::from("").resolve(), Err(ConfigError::InvalidAddress));
        assert_eq!(DeviceAddress::from("0x").resolve(), Err(ConfigError::InvalidAddress));
        assert_eq!(DeviceAddress::from("zz").resolve(), Err(ConfigError::InvalidAddress));
        assert_eq!(DeviceAddress::from("0x1FF").resolve(), Err(ConfigError::InvalidAddress));
    }

    #[test]
    fn test_address_above_seven_bits_rejected() {
        assert_eq!(DeviceAddress::from(0x80).resolve(), Err(ConfigError::InvalidAddress));
        assert_eq!(DeviceAddress::from("d4").resolve(), Err(ConfigError::InvalidAddress));
        assert_eq!(DeviceAddress::from(0x7F).resolve(), Ok(0x7F));
    }

    #[test]
    fn test_default_sequence() {
        let pairs: Vec<(u8, u8)> = InitSequence::DEFAULT.pairs().unwrap().collect();
        assert_eq!(
            pairs,
            vec![
                (0x10, 0x70),
                (0x11, 0x4C),
                (0x12, 0x44),
                (0x13, 0x00),
                (0x14, 0x00),
                (0x15, 0x00),
                (0x16, 0x50),
                (0x17, 0x00),
                (0x18, 0x38),
                (0x19, 0x38),
            ]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let seq = InitSequence::new(&[0x10, 0x11], &[0x70]);
        assert_eq!(
            seq.validate(),
            Err(ConfigError::LengthMismatch { registers: 2, values: 1 })
        );
        assert!(seq.pairs().is_err());
    }
}
