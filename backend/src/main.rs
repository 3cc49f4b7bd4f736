use channel_insights::build_rocket;
use channel_insights::config::{create_app_state, init_logger, load_environment, Settings};
use log::info;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();
    info!("Starting Rocket backend...");

    let settings = Settings::from_env()?;
    let state = create_app_state(settings);

    let _rocket = build_rocket(state)?.launch().await?;
    Ok(())
}
