//! Splatview binary: parse the CLI, load options, run the viewer.

use std::path::PathBuf;

use splatview::{CloudSource, Options, Viewer};

struct CliArgs {
    source: CloudSource,
    options_path: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut source = None;
    let mut options_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let path = args
                    .next()
                    .ok_or("--options requires a file path")?;
                options_path = Some(PathBuf::from(path));
            }
            _ if source.is_none() => {
                source = Some(CloudSource::parse(&arg));
            }
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    let source = source.ok_or(
        "Usage: splatview <path-or-url> [--options <file.toml>]",
    )?;
    Ok(CliArgs {
        source,
        options_path,
    })
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let options = match args.options_path {
        Some(path) => match Options::load(&path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder()
        .with_source(args.source)
        .with_options(options)
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
