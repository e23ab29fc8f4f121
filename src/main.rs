use tracing_subscriber::EnvFilter;

use marquee::ui;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dioxus::LaunchBuilder::new()
        .with_cfg(ui::make_config())
        .launch(ui::App);
}
