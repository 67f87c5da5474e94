#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, warn};

mod common;

mod components;

mod gallery;
use gallery::Gallery;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    if api::API_KEY.is_empty() {
        warn!("FILMSTRIP_API_KEY was empty at build time, photo requests will fail");
    }

    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::BASE}" }
        Gallery {}
    }
}
