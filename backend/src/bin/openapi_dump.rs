//! Print the generated OpenAPI document.
//!
//! JSON by default; `--yaml` switches to YAML for diffing against the
//! bundled declarative document.

use clap::Parser;
use users_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Print the generated OpenAPI document")]
struct Cli {
    /// Emit YAML instead of pretty-printed JSON.
    #[arg(long)]
    yaml: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let document = ApiDoc::openapi();
    let rendered = if cli.yaml {
        serde_yaml::to_string(&document)?
    } else {
        document.to_pretty_json()?
    };
    println!("{rendered}");
    Ok(())
}
