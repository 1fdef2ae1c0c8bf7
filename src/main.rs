// src/main.rs

use rmmkit::errors::Result;
use rmmkit::exec::EXIT_ERROR;
use rmmkit::{cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            // Alternate form walks `anyhow` context chains; `RmmError` variants
            // print their own message only.
            eprintln!("ERROR: {err:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
