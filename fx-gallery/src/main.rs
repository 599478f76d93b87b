//! This binary crate runs the gallery itself: a native app to browse the demos, tweak their
//! parameters, and copy their install/usage snippets.

mod app;

use self::app::App;
use color_eyre::Result;
use tracing_unwrap::ResultExt;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        follow_system_theme: true,
        ..Default::default()
    };

    eframe::run_native(
        "FX Gallery",
        options,
        Box::new(|cc| Box::new(App::new(cc))),
    )
    .expect_or_log("Unable to run native eframe app");

    Ok(())
}
