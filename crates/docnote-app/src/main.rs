use std::io::Write;
use std::sync::Arc;

use docnote_app::config;
use docnote_app::logging;
use docnote_app::shell::{Outcome, Shell};
use docnote_intake::summarize::PlaceholderSummarizer;
use docnote_storage::memory::InMemoryRepository;
use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let existed = config::has_config();
    let config::LoadedConfig {
        config,
        migrated_from,
    } = config::load_config()?;
    logging::init(config.log_format);

    if let Some(from) = migrated_from {
        let path = config::save_config(&config)?;
        tracing::info!(
            from,
            to = config::CURRENT_VERSION,
            path = %path.display(),
            "config migrated"
        );
    } else if !existed {
        let path = config::save_config(&config)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }

    let repo = Arc::new(InMemoryRepository::seeded());
    let today = jiff::Zoned::now().date();
    let mut shell = Shell::new(
        repo,
        Arc::new(PlaceholderSummarizer),
        config.trainer_name.clone(),
        today,
    );

    println!("{}", shell.render().await?);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match shell.handle_line(&line).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue(screen)) => println!("{screen}"),
            Err(e) => println!("error: {e}"),
        }
    }

    Ok(())
}
