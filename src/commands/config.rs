use anyhow::Result;
use calevent_core::config::CalEventConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let config_path = CalEventConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{}", "Config file already exists".yellow());
        } else {
            CalEventConfig::create_default_config(&config_path)?;
            println!("{}", "Created default config".green());
        }
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Temp:    {}", std::env::temp_dir().display());

    Ok(())
}
