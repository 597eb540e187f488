// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostic logging
// 3. Run the checker (all the work lives in the library, see src/app.rs)
// 4. Exit with the right code (0 = all clean, 1 = issues or fatal error)
// =============================================================================

use clap::Parser;
use sitemap_guardian::{logging, Cli};

// The #[tokio::main] attribute transforms our async main into a real main
// function: it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.log_level) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let exit_code = match sitemap_guardian::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
