//! Product sheet comparator API server binary

use clap::Parser;
use sheetcmp::api::{run_api_server, server::ApiConfig};
use sheetcmp::layout::Layout;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetcmp-server")]
#[command(version)]
#[command(about = "HTTP API for comparing product sheets")]
#[command(long_about = r#"
Product sheet comparator HTTP API

Endpoints:
  - POST /api/v1/compare   - Compare two CSV product tables
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Example usage:
  sheetcmp-server                           # Start on localhost:8080
  sheetcmp-server --host 0.0.0.0 --port 3000

  curl -X POST http://localhost:8080/api/v1/compare \
    -H "Content-Type: application/json" \
    -d '{"new_csv": "id,name\nA,x\n", "old_csv": "id,name\nB,y\n"}'
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SHEETCMP_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "SHEETCMP_PORT")]
    port: u16,

    /// YAML file overriding the column layout
    #[arg(short, long, env = "SHEETCMP_LAYOUT")]
    layout: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let layout = match args.layout {
        Some(path) => Layout::load(&path)?,
        None => Layout::default(),
    };

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        layout,
    };

    run_api_server(config).await
}
