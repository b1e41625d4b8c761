fn main() {
    // Baked into the image via option_env!().
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");
    println!("cargo:rerun-if-env-changed=LEDCTL_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
