use std::process::{ExitCode, Termination};

use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Prune old package versions from a hosted package repository",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub(crate) run: pkgprune::Run,
}

impl Cli {
    async fn run(self) -> ExitCode {
        match self.run.run().await {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        eprintln!("Caused by:");
                    }
                    eprintln!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }
}

#[tokio::main]
async fn main() -> impl Termination {
    Cli::parse().run().await
}
