//! Main entry point for the mdl2obj CLI

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};

use quake_mdl::{MdlModel, NORMAL_TABLE, ObjMesh};

use crate::cli::Cli;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid input file name: {}", cli.input.display()))?
        .to_string();

    let model = MdlModel::load(&cli.input)
        .with_context(|| format!("Failed to parse MDL file: {}", cli.input.display()))?;
    log::info!("{} (frame '{}')", model.header, model.frame.name);

    let mesh = ObjMesh::from_model(&model, &stem)
        .with_context(|| format!("Failed to convert: {}", cli.input.display()))?;

    write_output(&format!("{stem}.obj"), |writer| {
        mesh.write_obj(writer, &NORMAL_TABLE)
    })?;
    write_output(&format!("{stem}.mtl"), |writer| mesh.write_mtl(writer))?;

    log::info!(
        "wrote {stem}.obj ({} faces) and {stem}.mtl",
        mesh.faces.len()
    );
    Ok(())
}

/// Creates (or truncates) `path` in the working directory and renders
/// into it through a buffered writer
fn write_output<F>(path: &str, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> quake_mdl::Result<()>,
{
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).with_context(|| format!("Failed to write {path}"))?;
    writer.flush().with_context(|| format!("Failed to write {path}"))?;
    Ok(())
}
