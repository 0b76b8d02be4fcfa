use std::process;

use clap::Parser;

use tifinagh_cli::cli::{Cli, Command};
use tifinagh_cli::commands::{config_ops, convert_ops, table_ops};
use tifinagh_cli::trace_init::init_tracing;
use tifinagh_core::glyph::all_records;
use tifinagh_core::settings::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(ref path) = cli.settings {
        die!(config_ops::install_custom_settings(path), "Error: {}");
    }
    if let Some(ref path) = cli.table {
        die!(table_ops::install_custom_table(path), "Error: {}");
    }

    match cli.command {
        Command::Convert { mode, text } => match convert_ops::convert(&mode, &text) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!("{}", convert_ops::USAGE);
                process::exit(1);
            }
        },
        Command::List {
            standard_only,
            json,
        } => {
            let standard_only = standard_only || settings().index.standard_only;
            if json {
                let out = die!(
                    table_ops::format_json(all_records(), standard_only),
                    "JSON serialization failed: {}"
                );
                println!("{out}");
            } else {
                print!("{}", table_ops::format_table(all_records(), standard_only));
            }
        }
        Command::TableExport => print!("{}", table_ops::table_export()),
        Command::TableValidate { file } => {
            println!("{}", die!(table_ops::table_validate(&file), "Error: {}"));
        }
        Command::SettingsExport => print!("{}", config_ops::settings_export()),
        Command::SettingsValidate { file } => {
            println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
        }
    }
}
