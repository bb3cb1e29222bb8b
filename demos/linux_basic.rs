//! Ejemplo básico para LSM6DS3 en Linux
//!
//! Abre el bus, inicializa el sensor y muestra valores raw cada 20 ms.
//!
//! Para ejecutar: cargo run --example linux_basic --features linux -- [bus] [dirección] [--gyro]

mod common;

use common::{delay_ms, handle_error, Args};
use lsm6ds3_rs::LinuxLsm6ds3;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

fn main() {
    println!("LSM6DS3 - Ejemplo básico");

    let args = handle_error(Args::parse());

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    let mut device = handle_error(LinuxLsm6ds3::open(args.bus, args.address.as_str()));
    println!(
        "Bus /dev/i2c-{} abierto, dispositivo en 0x{:02X}",
        args.bus,
        device.address()
    );

    if let Err(e) = device.setup(true) {
        eprintln!("Error al inicializar el dispositivo: {}", e);
        return;
    }
    println!("Dispositivo inicializado correctamente");

    println!("Leyendo datos. Presiona Ctrl+C para detener...");

    while running.load(Ordering::SeqCst) {
        if args.gyro {
            match device.get_raw_gyro_values() {
                Ok((gx, gy, gz)) => {
                    println!("Raw gyro values: \t X {} \t\t Y {} \t\t Z {}", gx, gy, gz)
                }
                Err(e) => eprintln!("Error al leer giroscopio: {}", e),
            }
        } else {
            match device.get_raw_accel_values() {
                Ok((ax, ay, az)) => {
                    println!("Raw accel values: \t X {} \t Y {} \t Z {}", ax, ay, az)
                }
                Err(e) => eprintln!("Error al leer acelerómetro: {}", e),
            }
        }
        delay_ms(20);
    }

    println!("Ejemplo finalizado");
}
