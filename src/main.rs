use std::{panic, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use zeus_activity::core::{
   ActivityFile, Settings,
   data::settings::SETTINGS_FILE,
   utils::{data_dir, trace::setup_tracing},
};

#[derive(Parser)]
#[command(author, version, about = "Render a wallet's transaction activity")]
struct Cli {
   #[command(subcommand)]
   command: Commands,
}

#[derive(Subcommand)]
enum Commands {
   /// Classify and render the transactions of an activity file
   Render {
      /// Activity JSON with the context and the transactions
      #[arg(short, long)]
      input: PathBuf,

      /// Settings file, defaults to the one in the data directory
      #[arg(short, long)]
      settings: Option<PathBuf>,

      /// Print the rendered rows as JSON
      #[arg(long, default_value_t = false)]
      json: bool,
   },
   /// Write the default settings so they can be edited
   GenerateSettings {
      /// Where to write them, defaults to the data directory
      #[arg(short, long)]
      path: Option<PathBuf>,
   },
}

fn main() -> Result<()> {
   panic::set_hook(Box::new(|panic_info| {
      let message = panic_info
         .payload()
         .downcast_ref::<&str>()
         .map_or("Unknown panic", |s| s);
      let location = panic_info
         .location()
         .map_or("Unknown location".to_string(), |loc| {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
         });
      tracing::error!("Panic occurred: '{}' at {}", message, location);
   }));

   let _tracing_guard = setup_tracing();

   let cli = Cli::parse();

   match cli.command {
      Commands::Render {
         input,
         settings,
         json,
      } => render(input, settings, json)?,
      Commands::GenerateSettings { path } => generate_settings(path)?,
   }

   Ok(())
}

fn render(input: PathBuf, settings_path: Option<PathBuf>, json: bool) -> Result<()> {
   let settings = match settings_path {
      Some(path) => Settings::load_from_path(&path)?,
      None => Settings::load_or_default(),
   };

   let activity = ActivityFile::load_from_path(&input)?;
   let rows = activity.render(&settings);
   info!(target: "zeus_activity::cli", "Rendered {} transactions", rows.len());

   if json {
      println!("{}", serde_json::to_string_pretty(&rows)?);
   } else {
      for row in &rows {
         println!("{}", row.to_text());
      }
   }

   Ok(())
}

fn generate_settings(path: Option<PathBuf>) -> Result<()> {
   let path = match path {
      Some(path) => path,
      None => data_dir()?.join(SETTINGS_FILE),
   };

   Settings::default().save_to_path(&path)?;
   println!("Settings written to {}", path.display());
   Ok(())
}
