//! Adapters — concrete implementations of the hexagonal port traits and
//! the network surfaces that drive the controller.
//!
//! | Adapter | Implements / drives | Connects to              |
//! |---------|---------------------|--------------------------|
//! | `ledc`  | PwmPort             | ESP32 LEDC timer+channels|
//! | `http`  | Controller::handle  | ESP-IDF httpd            |
//! | `udp`   | Controller::apply_datagram | lwIP UDP socket   |
//! | `wifi`  | —                   | ESP-IDF WiFi STA         |

#[cfg(target_os = "espidf")]
pub mod http;
pub mod ledc;
pub mod udp;
pub mod wifi;
