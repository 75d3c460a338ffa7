//! Jog a motor through a serial-over-TCP bridge.
//!
//! Run with:
//!   cargo run --example jog -- 192.168.1.50:4001
//!
//! Spins axis 0 of module 1 left for two seconds, then stops it and
//! prints the actual position.

use std::net::TcpStream;
use std::time::Duration;

use tmcl::bus::Bus;
use tmcl::params::axis;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:4001".to_string());

    let stream = TcpStream::connect(&target)?;
    // An unresponsive module surfaces as a read timeout, so set one.
    stream.set_read_timeout(Some(Duration::from_secs(2)))?;
    eprintln!("Connected to {target}");

    let mut bus = Bus::new(stream);
    let mut motor = bus.motor(1, 0);

    motor.rotate_left(500)?;
    std::thread::sleep(Duration::from_secs(2));
    motor.stop()?;

    let position = motor.get_axis_param(axis::ACTUAL_POSITION)?;
    println!("actual position: {position}");
    Ok(())
}
