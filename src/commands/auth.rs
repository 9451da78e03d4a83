use clap::ArgMatches;

use crate::config::{load_config, save_config};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(api_token) = matches.get_one::<String>("api-token") {
        let mut config = load_config();
        config.api_token = Some(api_token.clone());
        save_config(&config)?;
        println!("API token saved successfully!");
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_token {
            Some(token) if token.len() > 12 => {
                println!("API token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("API token: (configured)"),
            None => println!("No API token configured"),
        }
    } else {
        println!("Usage: ghp auth --api-token <TOKEN> or ghp auth --show");
    }
    Ok(())
}
