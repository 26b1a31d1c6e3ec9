//! Luach-Live Client
//!
//! Yew WASM frontend application. Build with `trunk build`; the server embeds
//! the resulting dist/ directory.

mod api;
mod app;
mod components;
mod export;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for wasm with tracing-web
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
