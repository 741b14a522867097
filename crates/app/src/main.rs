use clap::Parser;
use tapeconv_core::{convert_song, ConverterConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = ConverterConfig {
        input_folder: cli.input_folder,
        output_folder: cli.output_folder,
        jsonp: cli.jsonp,
    };

    match convert_song(&config) {
        Ok(summary) => {
            tracing::info!(
                map_name = %summary.map_name,
                artist = %summary.artist,
                title = %summary.title,
                files = summary.written.len(),
                "conversion complete"
            );
        }
        Err(err) => {
            tracing::error!(%err, "conversion failed");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Converts a song's tape documents into flattened player JSON", long_about = None)]
struct Cli {
    /// Folder containing the four input documents.
    #[arg(short, long, default_value = "input")]
    input_folder: String,
    /// Folder that receives the per-song output directory.
    #[arg(short, long, default_value = "output")]
    output_folder: String,
    /// Wrap each output body in a `MapName(...)` call instead of raw JSON.
    #[arg(long)]
    jsonp: bool,
}
