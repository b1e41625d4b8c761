//! HTTP control API on the ESP-IDF httpd.
//!
//! Every route in [`ROUTES`] gets a GET and a PUT handler.  The handlers
//! only translate between httpd and [`Request`] / `Response`; routing and
//! method checks live in
//! [`Controller::handle`](crate::app::controller::Controller::handle).

use esp_idf_svc::http::Method as HttpMethod;
use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::io::Write;
use log::info;

use crate::app::controller::{ROUTES, SharedController, lock};
use crate::app::ports::PwmPort;
use crate::app::request::{Method, Request};
use crate::led::Resolution;

/// GET + PUT per route, with headroom.
const MAX_URI_HANDLERS: usize = 16;

/// Start the server.  Routes stay registered as long as the returned
/// server is alive.
pub fn start<R, P>(
    port: u16,
    controller: SharedController<R, P>,
) -> anyhow::Result<EspHttpServer<'static>>
where
    R: Resolution,
    P: PwmPort + Send + 'static,
{
    let mut server = EspHttpServer::new(&Configuration {
        http_port: port,
        max_uri_handlers: MAX_URI_HANDLERS,
        ..Default::default()
    })?;

    for path in ROUTES {
        for (http_method, method) in [(HttpMethod::Get, Method::Get), (HttpMethod::Put, Method::Put)] {
            let controller = controller.clone();
            server.fn_handler::<anyhow::Error, _>(path, http_method, move |req| {
                let response = {
                    let parsed = Request::parse(method, req.uri());
                    lock::<R, P>(&controller).handle(&parsed)
                };
                req.into_response(response.status, None, &[("Content-Type", "text/plain")])?
                    .write_all(response.body.as_bytes())?;
                Ok(())
            })?;
        }
    }

    info!("HTTP: serving {} routes on port {}", ROUTES.len(), port);
    Ok(server)
}
