use anyhow::Result;
pub use log::Level;

/// Routes `log` records to the browser console and panics to `console.error`.
pub fn init(level: Level) -> Result<()> {
	console_error_panic_hook::set_once();
	console_log::init_with_level(level)?;
	log::debug!("Logging to browser console at {level}");
	Ok(())
}
