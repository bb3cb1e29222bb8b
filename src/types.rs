//! Definiciones de tipos y constantes comunes para el LSM6DS3

/// Escalas completas disponibles para el acelerómetro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AccelFullScale {
    /// ±2g
    #[default]
    Fs2G = 0,
    /// ±4g
    Fs4G = 2,
    /// ±8g
    Fs8G = 3,
    /// ±16g
    Fs16G = 1,
}

// Los bits FS_XL[1:0] no siguen el orden de las escalas
impl From<u8> for AccelFullScale {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => AccelFullScale::Fs2G,
            1 => AccelFullScale::Fs16G,
            2 => AccelFullScale::Fs4G,
            _ => AccelFullScale::Fs8G,
        }
    }
}

impl AccelFullScale {
    /// Escala nominal (sin aplicar) en g por LSB
    pub fn scale(self) -> f32 {
        match self {
            AccelFullScale::Fs2G => scale::SCALE_FOR_2G,
            AccelFullScale::Fs4G => scale::SCALE_FOR_4G,
            AccelFullScale::Fs8G => scale::SCALE_FOR_8G,
            AccelFullScale::Fs16G => scale::SCALE_FOR_16G,
        }
    }

    /// Divisor entero equivalente a `scale`
    pub fn divisor(self) -> u32 {
        match self {
            AccelFullScale::Fs2G => scale::DIV_2G,
            AccelFullScale::Fs4G => scale::DIV_4G,
            AccelFullScale::Fs8G => scale::DIV_8G,
            AccelFullScale::Fs16G => scale::DIV_16G,
        }
    }
}

/// Escalas completas disponibles para el giroscopio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GyroFullScale {
    /// ±250 dps
    Fs250Dps = 0,
    /// ±500 dps
    Fs500Dps = 1,
    /// ±1000 dps
    Fs1000Dps = 2,
    /// ±2000 dps
    #[default]
    Fs2000Dps = 3,
}

impl From<u8> for GyroFullScale {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => GyroFullScale::Fs250Dps,
            1 => GyroFullScale::Fs500Dps,
            2 => GyroFullScale::Fs1000Dps,
            _ => GyroFullScale::Fs2000Dps,
        }
    }
}

impl GyroFullScale {
    pub fn scale(self) -> f32 {
        match self {
            GyroFullScale::Fs250Dps => scale::SCALE_FOR_250_DPS,
            GyroFullScale::Fs500Dps => scale::SCALE_FOR_500_DPS,
            GyroFullScale::Fs1000Dps => scale::SCALE_FOR_1000_DPS,
            GyroFullScale::Fs2000Dps => scale::SCALE_FOR_2000_DPS,
        }
    }

    pub fn divisor(self) -> u32 {
        match self {
            GyroFullScale::Fs250Dps => scale::DIV_250_DPS,
            GyroFullScale::Fs500Dps => scale::DIV_500_DPS,
            GyroFullScale::Fs1000Dps => scale::DIV_1000_DPS,
            GyroFullScale::Fs2000Dps => scale::DIV_2000_DPS,
        }
    }
}

/// Factores de escala y divisores para convertir a unidades físicas.
///
/// Solo documentan la conversión prevista: el driver entrega siempre valores
/// raw y nunca los multiplica por estos factores.
pub mod scale {
    pub const SCALE_FOR_2G: f32 = 0.0001;
    pub const SCALE_FOR_4G: f32 = 0.0002;
    pub const SCALE_FOR_8G: f32 = 0.0004;
    pub const SCALE_FOR_16G: f32 = 0.0008;
    pub const DIV_2G: u32 = 100;
    pub const DIV_4G: u32 = 200;
    pub const DIV_8G: u32 = 400;
    pub const DIV_16G: u32 = 1200;

    pub const SCALE_FOR_250_DPS: f32 = 0.000875;
    pub const SCALE_FOR_500_DPS: f32 = 0.00175;
    pub const SCALE_FOR_1000_DPS: f32 = 0.0035;
    pub const SCALE_FOR_2000_DPS: f32 = 0.0070;
    pub const DIV_250_DPS: u32 = 875;
    pub const DIV_500_DPS: u32 = 1750;
    pub const DIV_1000_DPS: u32 = 3500;
    pub const DIV_2000_DPS: u32 = 7000;
}

/// Muestra raw de tres ejes (x, y, z)
pub type RawSample = (i16, i16, i16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_fs_bits() {
        assert_eq!(AccelFullScale::from(0x00), AccelFullScale::Fs2G);
        assert_eq!(AccelFullScale::from(0x02), AccelFullScale::Fs4G);
        assert_eq!(AccelFullScale::from(0x03), AccelFullScale::Fs8G);
        assert_eq!(AccelFullScale::from(0x01), AccelFullScale::Fs16G);
        assert_eq!(AccelFullScale::Fs4G as u8, 2);
    }

    #[test]
    fn test_divisors_match_scales() {
        assert_eq!(AccelFullScale::Fs8G.divisor(), 400);
        assert_eq!(GyroFullScale::Fs500Dps.divisor(), 1750);
        assert!((GyroFullScale::Fs250Dps.scale() - 0.000875).abs() < f32::EPSILON);
    }

    #[test]
    fn test_gyro_fs_bits() {
        assert_eq!(GyroFullScale::from(0x00), GyroFullScale::Fs250Dps);
        assert_eq!(GyroFullScale::from(0x01), GyroFullScale::Fs500Dps);
        assert_eq!(GyroFullScale::from(0x02), GyroFullScale::Fs1000Dps);
        assert_eq!(GyroFullScale::from(0x03), GyroFullScale::Fs2000Dps);
        assert_eq!(GyroFullScale::from(0x06), GyroFullScale::Fs1000Dps);
        assert_eq!(GyroFullScale::Fs1000Dps as u8, 2);
        assert_eq!(GyroFullScale::Fs1000Dps.divisor(), 3500);
    }
}
