use crate::constants::LOG_LEVEL_ATTR;
use missed_call_core::Tuning;
use web_sys as web;

fn body() -> Option<web::HtmlElement> {
    crate::dom::window_document().and_then(|d| d.body())
}

/// Console log level from `<body data-log-level="...">`, defaulting to info.
pub fn log_level() -> log::Level {
    body()
        .and_then(|b| b.get_attribute(LOG_LEVEL_ATTR))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

/// Tuning from `data-*` attributes on `<body>`, falling back to defaults.
pub fn load_tuning() -> Tuning {
    let Some(body) = body() else {
        return Tuning::default();
    };
    let overrides: Vec<(&str, String)> = Tuning::KEYS
        .iter()
        .filter_map(|key| {
            body.get_attribute(&format!("data-{}", key))
                .map(|v| (*key, v))
        })
        .collect();
    Tuning::with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())))
}
