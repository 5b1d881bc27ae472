use colored::{Color, Colorize};
use log::{Level, LevelFilter};

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Blue,
        Level::Debug => Color::Magenta,
        Level::Trace => Color::Green,
    }
}

/// Progress and diagnostics go to stderr; stdout is reserved for command output.
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let level = record.level();
            let tag = format!("{}:", level.to_string().to_lowercase());
            out.finish(format_args!("{} {}", tag.color(level_color(level)), message))
        })
        .level(level)
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("rustls", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
