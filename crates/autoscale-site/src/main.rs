#![forbid(unsafe_code)]

//! AutoScale site binary entry point.

use autoscale_core::catalog::Catalog;
use autoscale_site::app::AppModel;
use autoscale_site::cli::{self, ScreenModeOpt};
use autoscale_site::logging;
use ftui_runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();

    if opts.dump_catalog {
        match serde_json::to_string_pretty(Catalog::builtin()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize catalog: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file {}: {e}", path.display());
        std::process::exit(1);
    }

    let mut model = match &opts.case_study {
        Some(id) => AppModel::new().start_on_case_study(id.clone()),
        None => AppModel::new().start_on(opts.start_page),
    };
    model.exit_after_ms = opts.exit_after_ms;

    let config = match opts.screen_mode {
        ScreenModeOpt::Alt => ProgramConfig::fullscreen(),
        ScreenModeOpt::Inline => ProgramConfig::inline(opts.ui_height),
    };
    tracing::info!(
        target: "autoscale.app",
        screen_mode = ?opts.screen_mode,
        page = %model.state().current_page(),
        "starting"
    );

    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
