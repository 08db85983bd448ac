use std::io::Write;

use sunriseset::{SUPPORTED_LOCALES, SunTimeService, SunTimesClient};
use tracing::{error, info, span, warn};
use tracing_subscriber::EnvFilter;

/// The main function initializes the tracing subscriber, builds the sun time
/// service, and enters a loop reading locale codes from the user. Each
/// recognized code triggers a fetch-and-localize cycle (the fetch itself runs
/// only once per process) and prints the rendered sunrise and sunset times.
/// The loop continues until the user inputs "exit".
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = SunTimeService::new(SunTimesClient::new());
    let observer = service.subscribe();

    span!(tracing::Level::INFO, "display").in_scope(|| {
        info!("Pick a locale for the sunrise/sunset display: {:?}", SUPPORTED_LOCALES);
        info!("Send `exit` to stop");
    });
    println!("Locales: {}. Send `exit` to stop.", SUPPORTED_LOCALES.join(", "));

    // read locale selections until the user sends `exit`
    let mut buffer = String::new();
    print!("> ");
    std::io::stdout().flush()?;
    std::io::stdin().read_line(&mut buffer)?;

    while buffer.trim() != "exit" {
        let selection = buffer.trim_start_matches('>').trim();

        if !selection.is_empty() {
            if SUPPORTED_LOCALES.contains(&selection) {
                match service.select_locale(Some(selection)).await {
                    Ok(()) => {
                        if let Some(times) = observer.borrow().as_ref() {
                            println!("Sunrise: {}", times.sunrise_local);
                            println!("Sunset:  {}", times.sunset_local);
                        }
                    }
                    Err(e) => {
                        // no data for this cycle; the user may simply try again
                        error!("Failed to fetch sun times: {}", e);
                    }
                }
            } else {
                warn!("Unsupported locale: {}", selection);
                println!("Unsupported locale `{selection}`, pick one of: {}", SUPPORTED_LOCALES.join(", "));
            }
        }

        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        std::io::stdin().read_line(&mut buffer)?;
    }

    Ok(())
}
