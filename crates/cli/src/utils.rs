pub fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic| match panic.location() {
        Some(loc) => {
            tracing::error!(
                message = %panic,
                panic.file = loc.file(),
                panic.line = loc.line(),
                panic.column = loc.column(),
            );
        }
        None => tracing::error!(message = %panic),
    }));
}

pub fn report_version() {
    tracing::debug!(
        build_profile = env!("BUILD_PROFILE"),
        features = env!("BUILD_FEATURES"),
        version = env!("CARGO_PKG_VERSION"),
        "recs cli starting up"
    );
}
