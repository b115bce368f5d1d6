//! Banner shown when the bundle was built without backend configuration.

use leptos::prelude::*;
use portal::ConfigError;
use portal::config::{KEY_VARS, URL_VARS};

use crate::app::AppSession;

#[cfg(test)]
#[path = "config_banner_test.rs"]
mod config_banner_test;

pub fn config_message(err: &ConfigError) -> String {
    format!(
        "Backend is not configured ({err}). Set {} or {} and {} or {} when building the site. \
         Sign-in and data screens are disabled until then.",
        URL_VARS[0], URL_VARS[1], KEY_VARS[0], KEY_VARS[1]
    )
}

#[component]
pub fn ConfigBanner() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let message = session.client().config().err().map(|e| config_message(&e));

    message.map(|text| {
        view! {
            <div class="notice notice--error config-banner" role="alert">
                {text}
            </div>
        }
    })
}
