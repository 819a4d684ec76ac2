// src/cli/handlers.rs
use anyhow::Result;
use console::style;
use log::debug;

use crate::core::config::Config;
use crate::pipeline::Pipeline;
use crate::wordlist;

// Handlers for CLI commands
pub fn handle_generate(config: &Config, count: usize) -> Result<()> {
    let pipeline = Pipeline::from_config(config);

    for _ in 0..count {
        let result = pipeline.run_with_observer(|stage| debug!("{}", stage.label()))?;
        println!("{}", style(&result.password).green().bold());
        println!("  entropy:    {} bits", result.bits);
        println!("  crack time: {}", result.crack_time);
    }

    Ok(())
}

pub fn handle_reload() -> Result<()> {
    let count = wordlist::reload();
    println!("Wordlist reloaded: {} entries", style(count).cyan());
    Ok(())
}
