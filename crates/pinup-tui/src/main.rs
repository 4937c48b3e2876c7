mod input;
mod render;
mod runtime;
mod ui;

use anyhow::Result;
use pinup_core::config::CoreConfig;
use pinup_core::runtime::CoreRuntime;
use pinup_core::worker::GalleryCommand;

use crate::runtime::run_app;
use crate::ui::App;

#[tokio::main]
async fn main() -> Result<()> {
    pinup_core::tracing_setup::init_tracing();

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut core_runtime = CoreRuntime::new(config.clone());
    let mut app = App::new(core_runtime.data_store(), config.uncensored_dir.clone());
    let core_handle = core_runtime.handle();
    let data_rx = core_runtime
        .take_data_rx()
        .ok_or_else(|| anyhow::anyhow!("Core runtime already has active data receiver"))?;
    app.set_core_handle(core_handle.clone(), data_rx);

    // The visibility list is fetched once per session, independent of the
    // wallet connection.
    if core_handle.send(GalleryCommand::FetchVisibilityList).is_err() {
        app.set_status("Failed to reach the fetch worker");
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;

    core_runtime.shutdown();
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
