use clap::Parser;
use color_eyre::Result;
use ward_facility_map::app::App;
use ward_facility_map::cli::CliArgs;
use ward_facility_map::config::{init_app_config, AppConfig};
use ward_facility_map::event::{self, HeadlessMode};
use ward_facility_map::logging::init_logging;
use ward_facility_map::map::Viewport;
use ward_facility_map::model::MapModel;
use ward_facility_map::seed::seed_store;
use ward_facility_map::store::FacilityStore;
use ward_facility_map::terminal;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.is_headless() || !is_terminal();
    init_logging(&config, headless)?;

    let model = MapModel::new(
        load_store(&config)?,
        Viewport::new(config.center, config.span_m),
    );
    tracing::info!(facilities = model.store.len(), headless, "starting");

    if headless {
        let mode = if args.json {
            HeadlessMode::Json
        } else if args.export {
            HeadlessMode::Text
        } else {
            HeadlessMode::Stats
        };
        return event::run_headless(&model, mode);
    }

    let mut app = App::new(model);
    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    result
}

fn load_store(config: &AppConfig) -> Result<FacilityStore> {
    match &config.data_path {
        Some(path) => FacilityStore::load_json(path),
        None => Ok(seed_store()),
    }
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
