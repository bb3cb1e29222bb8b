//! Utilidades comunes para los ejemplos

use std::fmt::Debug;
use std::time::Duration;

/// Helper para manejar errores en los ejemplos
pub fn handle_error<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(val) => val,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            std::process::exit(1);
        }
    }
}

/// Función para pausar la ejecución por un tiempo determinado
pub fn delay_ms(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}

/// Argumentos de línea de comandos: `[bus] [dirección-hex] [--gyro]`
pub struct Args {
    pub bus: u8,
    pub address: String,
    pub gyro: bool,
}

impl Args {
    pub fn parse() -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut gyro = false;
        for arg in std::env::args().skip(1) {
            if arg == "--gyro" {
                gyro = true;
            } else {
                positional.push(arg);
            }
        }

        let bus = match positional.first() {
            Some(text) => text
                .parse()
                .map_err(|_| format!("número de bus inválido: {}", text))?,
            None => lsm6ds3_rs::DEFAULT_BUS,
        };
        let address = positional
            .get(1)
            .cloned()
            .unwrap_or_else(|| format!("{:x}", lsm6ds3_rs::DEFAULT_ADDRESS));

        Ok(Self { bus, address, gyro })
    }
}
