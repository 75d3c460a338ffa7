//! Host-side TMCL motion control for Trinamic stepper modules.
//!
//! TMCL is the fixed binary command protocol spoken by Trinamic
//! stepper-motor controller modules over RS-232/RS-485 or CAN. This
//! crate drives the host side of it: encode a 9-byte command frame,
//! compute the additive checksum, write it, read the fixed-length reply
//! and turn its status byte into a typed result.
//!
//! # Crate structure
//!
//! - [`transport`] — The byte-transport contract the host must supply
//! - [`frame`] — Wire codec: instruction/reply frames, opcodes, checksums
//! - [`params`] — Static axis and global parameter tables
//! - [`bus`] — Transaction executor and module/motor addressing layer
//!
//! # Example
//!
//! ```no_run
//! use tmcl::bus::Bus;
//! use tmcl::params::axis;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Any blocking Read + Write stream works as a transport; here, a
//! // serial-over-TCP bridge. Configure read timeouts on the stream.
//! let stream = std::net::TcpStream::connect("192.168.1.50:4001")?;
//! let mut bus = Bus::new(stream);
//!
//! let mut motor = bus.motor(1, 0);
//! motor.set_max_positioning_speed(1000)?;
//! motor.move_absolute(50_000)?;
//! while !motor.target_position_reached()? {
//!     std::thread::sleep(std::time::Duration::from_millis(50));
//! }
//!
//! let position = motor.get_axis_param(axis::ACTUAL_POSITION)?;
//! println!("settled at {position}");
//! # Ok(())
//! # }
//! ```

/// Re-export transport types.
pub mod transport {
    pub use tmcl_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use tmcl_frame::*;
}

/// Re-export parameter tables.
pub mod params {
    pub use tmcl_params::*;
}

/// Re-export bus, module and motor types.
pub mod bus {
    pub use tmcl_bus::*;
}
