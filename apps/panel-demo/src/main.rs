mod host;
mod script;

use anyhow::{Context, Result};
use slidepanel_graphics::Size;

use crate::host::Host;

const SCREEN: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("density must be a number, got {arg:?}"))?,
        None => 2.0,
    };
    anyhow::ensure!(density > 0.0, "density must be positive, got {density}");

    println!("=== Sliding Panel Demo ===");
    println!(
        "Replaying scripted gestures on a {}x{} screen at density {density}",
        SCREEN.width, SCREEN.height
    );
    println!("Set RUST_LOG=debug to see every state transition.");
    println!();

    let mut host = Host::new(SCREEN, density).context("failed to set up the panel")?;
    for step in script::default_script(SCREEN, host.peek_height()) {
        log::info!("> {}", step.describe());
        host.run(&step)?;
        let output = host.render_output();
        log::info!(
            "  settled {:?}: sliding {:.1}px, bottom {:.1}px, shadow {}",
            host.state(),
            output.sliding_translation,
            output.bottom_translation,
            match output.shadow {
                Some(rect) => format!("{:.0}px tall ending at y={:.1}", rect.height, rect.bottom()),
                None => "hidden".to_string(),
            }
        );
    }
    Ok(())
}
