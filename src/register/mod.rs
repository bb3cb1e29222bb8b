//! Definiciones de registros para el LSM6DS3
//!
//! Direcciones absolutas del mapa de registros del dispositivo. Deben coincidir
//! exactamente con el datasheet para que el hardware responda.

/// Registros de identificación
pub const WHO_AM_I: u8 = 0x0F;

/// Valor esperado en el registro WHO_AM_I
pub const WHO_AM_I_VALUE: u8 = 0x69;

// Registros de control
pub const CTRL1_XL: u8 = 0x10;
pub const CTRL2_G: u8 = 0x11;
pub const CTRL3_C: u8 = 0x12;
pub const CTRL4_C: u8 = 0x13;
pub const CTRL5_C: u8 = 0x14;
pub const CTRL6_C: u8 = 0x15;
pub const CTRL7_G: u8 = 0x16;
pub const CTRL8_XL: u8 = 0x17;
pub const CTRL9_XL: u8 = 0x18;
pub const CTRL10_C: u8 = 0x19;

// Registros de giroscopio
pub const OUTX_L_G: u8 = 0x22;
pub const OUTX_H_G: u8 = 0x23;
pub const OUTY_L_G: u8 = 0x24;
pub const OUTY_H_G: u8 = 0x25;
pub const OUTZ_L_G: u8 = 0x26;
pub const OUTZ_H_G: u8 = 0x27;

// Registros de acelerómetro
pub const OUTX_L_XL: u8 = 0x28;
pub const OUTX_H_XL: u8 = 0x29;
pub const OUTY_L_XL: u8 = 0x2A;
pub const OUTY_H_XL: u8 = 0x2B;
pub const OUTZ_L_XL: u8 = 0x2C;
pub const OUTZ_H_XL: u8 = 0x2D;

/// Par de registros (parte alta, parte baja) de un eje
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRegisters {
    pub high: u8,
    pub low: u8,
}

impl AxisRegisters {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }
}

/// Ejes del acelerómetro en orden X, Y, Z
pub const ACCEL_AXES: [AxisRegisters; 3] = [
    AxisRegisters::new(OUTX_H_XL, OUTX_L_XL),
    AxisRegisters::new(OUTY_H_XL, OUTY_L_XL),
    AxisRegisters::new(OUTZ_H_XL, OUTZ_L_XL),
];

/// Ejes del giroscopio en orden X, Y, Z
pub const GYRO_AXES: [AxisRegisters; 3] = [
    AxisRegisters::new(OUTX_H_G, OUTX_L_G),
    AxisRegisters::new(OUTY_H_G, OUTY_L_G),
    AxisRegisters::new(OUTZ_H_G, OUTZ_L_G),
];
