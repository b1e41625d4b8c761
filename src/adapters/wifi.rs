//! WiFi station-mode bring-up.
//!
//! Credentials are checked on every target; the association itself is
//! ESP-IDF only and blocks until the interface has an address.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: `BlockingWifi<EspWifi>` from `esp_idf_svc::wifi`.
//! - **all other targets**: validation only, for host-side tests.

use core::fmt;

// ───────────────────────────────────────────────────────────────
// Errors
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityError {
    NoCredentials,
    InvalidSsid,
    InvalidPassword,
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentials => write!(f, "no WiFi credentials configured"),
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)"),
        }
    }
}

impl core::error::Error for ConnectivityError {}

// ───────────────────────────────────────────────────────────────
// Credentials
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), ConnectivityError> {
    if ssid.is_empty() || ssid.len() > 32 {
        return Err(ConnectivityError::InvalidSsid);
    }
    if !is_printable_ascii(ssid) {
        return Err(ConnectivityError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ConnectivityError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(ConnectivityError::InvalidPassword);
    }
    Ok(())
}

/// Validated station credentials, sized for the ESP-IDF client config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: heapless::String<32>,
    password: heapless::String<64>,
}

impl WifiCredentials {
    pub fn new(ssid: &str, password: &str) -> Result<Self, ConnectivityError> {
        validate_ssid(ssid)?;
        validate_password(password)?;
        let mut creds = Self {
            ssid: heapless::String::new(),
            password: heapless::String::new(),
        };
        creds.ssid.push_str(ssid).map_err(|_| ConnectivityError::InvalidSsid)?;
        creds
            .password
            .push_str(password)
            .map_err(|_| ConnectivityError::InvalidPassword)?;
        Ok(creds)
    }

    /// Credentials baked in at build time through `WIFI_SSID` /
    /// `WIFI_PASSWORD`.
    pub fn from_build_env() -> Result<Self, ConnectivityError> {
        let ssid = option_env!("WIFI_SSID").ok_or(ConnectivityError::NoCredentials)?;
        Self::new(ssid, option_env!("WIFI_PASSWORD").unwrap_or(""))
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}

// ───────────────────────────────────────────────────────────────
// Station bring-up (ESP-IDF)
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn connect(
    modem: esp_idf_hal::modem::Modem,
    sysloop: esp_idf_svc::eventloop::EspSystemEventLoop,
    nvs: esp_idf_svc::nvs::EspDefaultNvsPartition,
    creds: &WifiCredentials,
) -> anyhow::Result<esp_idf_svc::wifi::BlockingWifi<esp_idf_svc::wifi::EspWifi<'static>>> {
    use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};
    use log::info;

    let mut wifi = BlockingWifi::wrap(EspWifi::new(modem, sysloop.clone(), Some(nvs))?, sysloop)?;

    wifi.set_configuration(&Configuration::Client(ClientConfiguration {
        ssid: creds.ssid.clone(),
        password: creds.password.clone(),
        auth_method: if creds.is_open() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        },
        ..Default::default()
    }))?;

    info!("WiFi: connecting to '{}'", creds.ssid);
    wifi.start()?;
    wifi.connect()?;
    wifi.wait_netif_up()?;

    let ip_info = wifi.wifi().sta_netif().get_ip_info()?;
    info!("WiFi: connected, ip={}", ip_info.ip);
    Ok(wifi)
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
