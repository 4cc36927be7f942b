//! Mock LED device shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard};

use myrtio_ring_composer::{
    DeviceConfig, DeviceInitError, DeviceIoError, LedDevice, PermissionDenied,
};

/// Something the mock device was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Flush(Vec<u32>),
    Close,
}

#[derive(Debug, Default)]
pub struct DeviceLog {
    pub config: Option<DeviceConfig>,
    pub events: Vec<Event>,
    pub fail_flush: bool,
}

impl DeviceLog {
    /// Every frame that reached the hardware, in order
    pub fn frames(&self) -> Vec<Vec<u32>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Flush(frame) => Some(frame.clone()),
                Event::Close => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> Vec<u32> {
        self.frames().pop().expect("no frame was flushed")
    }

    pub fn close_count(&self) -> usize {
        self.events.iter().filter(|event| **event == Event::Close).count()
    }
}

pub type SharedLog = Arc<Mutex<DeviceLog>>;

thread_local! {
    static LAST_LOG: RefCell<Option<SharedLog>> = const { RefCell::new(None) };
}

/// Log of the device most recently started on this thread
pub fn last_log() -> SharedLog {
    LAST_LOG.with(|last| last.borrow().clone().expect("no device was started"))
}

pub fn lock(log: &SharedLog) -> MutexGuard<'_, DeviceLog> {
    log.lock().expect("device log poisoned")
}

/// In-memory device that records every flush and close
pub struct MockDevice {
    leds: Vec<u32>,
    log: SharedLog,
}

impl LedDevice for MockDevice {
    fn init(config: &DeviceConfig) -> Result<Self, DeviceInitError> {
        let log = Arc::new(Mutex::new(DeviceLog {
            config: Some(*config),
            ..DeviceLog::default()
        }));
        LAST_LOG.with(|last| *last.borrow_mut() = Some(Arc::clone(&log)));
        Ok(Self {
            // Garbage, so tests notice values the ring failed to write
            leds: vec![0xDEAD_BEEF; config.led_count],
            log,
        })
    }

    fn leds(&mut self) -> &mut [u32] {
        &mut self.leds
    }

    fn flush(&mut self) -> Result<(), DeviceIoError> {
        let mut log = lock(&self.log);
        if log.fail_flush {
            return Err(DeviceIoError("mock flush failure"));
        }
        log.events.push(Event::Flush(self.leds.clone()));
        Ok(())
    }

    fn close(&mut self) {
        lock(&self.log).events.push(Event::Close);
    }
}

/// Device that refuses to run without privileges
pub struct UnprivilegedDevice;

impl LedDevice for UnprivilegedDevice {
    fn check_access() -> Result<(), PermissionDenied> {
        Err(PermissionDenied)
    }

    fn init(_config: &DeviceConfig) -> Result<Self, DeviceInitError> {
        panic!("init must not run without access");
    }

    fn leds(&mut self) -> &mut [u32] {
        &mut []
    }

    fn flush(&mut self) -> Result<(), DeviceIoError> {
        Ok(())
    }

    fn close(&mut self) {}
}

/// Device whose driver never comes up
pub struct BrokenDevice;

impl LedDevice for BrokenDevice {
    fn init(_config: &DeviceConfig) -> Result<Self, DeviceInitError> {
        Err(DeviceInitError("no PWM channel"))
    }

    fn leds(&mut self) -> &mut [u32] {
        &mut []
    }

    fn flush(&mut self) -> Result<(), DeviceIoError> {
        Ok(())
    }

    fn close(&mut self) {}
}

/// Device whose frame buffer is too short for the requested LED count
pub struct ShortBufferDevice {
    leds: [u32; 2],
}

impl LedDevice for ShortBufferDevice {
    fn init(_config: &DeviceConfig) -> Result<Self, DeviceInitError> {
        Ok(Self { leds: [0; 2] })
    }

    fn leds(&mut self) -> &mut [u32] {
        &mut self.leds
    }

    fn flush(&mut self) -> Result<(), DeviceIoError> {
        Ok(())
    }

    fn close(&mut self) {}
}
