#![no_std]

pub mod color;
pub mod config;
pub mod device;
pub mod error;
pub mod frame_scheduler;
pub mod layer;
pub mod math;
pub mod ring;
pub mod signal;

pub use color::{Cmyk, Color, Gray, Hsv, Nrgba, Nrgba16, Rgb};
pub use config::{BrightnessRange, RingConfig};
pub use device::{DeviceConfig, LedDevice};
pub use error::{DeviceInitError, DeviceIoError, Error, PermissionDenied};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layer::{ContentMode, Layer};
pub use math::Rotation;
pub use ring::Ring;
pub use signal::{RenderRequest, StopSignal};

pub use embassy_time::{Duration, Instant};
pub use smart_leds::colors;
