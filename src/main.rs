#[cfg(not(target_arch = "wasm32"))]
fn init_runtime() {
    // .env (desktop dev) overrides the bundled config.env
    let loaded_dotenv = dotenvy::dotenv().is_ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("falcon_chat=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if loaded_dotenv {
        tracing::debug!("loaded .env");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_runtime() {}

fn main() {
    init_runtime();
    tracing::info!("starting chat widget");
    dioxus::launch(falcon_chat::ui::App);
}
