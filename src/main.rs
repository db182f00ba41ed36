use clap::{crate_version, App, Arg};
use std::path::PathBuf;

use cssroll::compile;
use cssroll::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    std::process::exit(match run() {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run() -> Result<(), String> {
    let app = App::new("Cssroll")
        .version(crate_version!())
        .about(
            "CSS import bundler\n\
             \n\
             Replaces @import directives in a stylesheet with the contents\n\
             of the referenced files, recursively, and writes the result\n\
             to a single output file.",
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("config_file")
                .help("Sets the config file name")
                .takes_value(true)
                .default_value("Cssroll.toml"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("input")
                .help("The root stylesheet to bundle. If none is specified, uses 'paths' -> 'root' from config file.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("output")
                .help("The file to write the bundled stylesheet to. If none is specified, uses 'paths' -> 'output' from config file.")
                .takes_value(true),
        );

    let matches = app.get_matches();

    let config_path = matches.value_of("config").unwrap();
    let mut config =
        if matches.occurrences_of("config") == 0 && !PathBuf::from(config_path).exists() {
            Config::default()
        } else {
            Config::read(config_path).map_err(|err| {
                format!(
                    "ERROR: Could not read config file \"{}\": {}",
                    config_path, err
                )
            })?
        };

    if let Some(input) = matches.value_of("input") {
        config.paths.root = PathBuf::from(input);
    }
    if let Some(output) = matches.value_of("output") {
        config.paths.output = PathBuf::from(output);
    }

    config
        .check()
        .map_err(|err| format!("ERROR: Invalid configuration: {}", err))?;

    compile::build(&config).map_err(|err| {
        format!(
            "ERROR: Failed to bundle \"{}\": {}",
            config.paths.root.display(),
            err
        )
    })
}
