//! LED controller firmware — main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  EspHttpServer        DatagramServer        BlockingWifi       │
//! │  (HTTP task)          (main task)           (STA)              │
//! │        │                    │                                  │
//! │        └──── lock ──────────┘                                  │
//! │  ──────────────── SharedController ─────────────────────       │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │        Controller (pure logic) ──▶ LedcPwm (PwmPort)   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::info;

use ledctl::adapters::ledc::LedcPwm;
use ledctl::adapters::udp::DatagramServer;
use ledctl::adapters::wifi::{self, WifiCredentials};
use ledctl::adapters::http;
use ledctl::app::controller::{Controller, lock};
use ledctl::config::DeviceConfig;
use ledctl::led::{BoardResolution, Resolution};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ledctl v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (build-time override or defaults) ────
    let config = match option_env!("LEDCTL_CONFIG") {
        Some(json) => {
            info!("Config: using LEDCTL_CONFIG override");
            DeviceConfig::from_json(json)?
        }
        None => DeviceConfig::default(),
    };

    // ── 3. LEDC + controller ──────────────────────────────────
    let pwm = LedcPwm::new(config.pins, BoardResolution::BITS, config.pwm_frequency_hz)?;
    let controller = Controller::<BoardResolution, _>::new(&config, pwm)?.into_shared();

    // ── 4. Network ────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let creds = WifiCredentials::from_build_env()?;
    let _wifi = wifi::connect(peripherals.modem, sysloop, nvs, &creds)?;

    // ── 5. HTTP surface (own task) ────────────────────────────
    let _http = http::start(config.http_port, controller.clone())?;

    // ── 6. UDP fast path (this task, forever) ─────────────────
    let mut udp = DatagramServer::bind(config.udp_port)?;
    info!("System ready.");
    udp.run(|datagram| lock(&controller).apply_datagram(datagram))
}
