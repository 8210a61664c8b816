use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use panel_nest::io::ext_repr::ExtInstance;
use panel_nest::io::svg::solution_to_svgs;
use pnest::config::NestConfig;
use pnest::io::cli::Cli;
use pnest::io::output::NestOutput;
use pnest::io::{read_config, read_instance};
use pnest::{EPOCH, io};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestConfig::default()
        }
        Some(config_file) => read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NestConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = read_instance(args.input_file.as_path())?;
    main_nest(
        ext_instance,
        config,
        &input_file_stem,
        args.solution_folder,
    )
}

fn main_nest(
    ext_instance: ExtInstance,
    config: NestConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let instance = panel_nest::io::import(&ext_instance)?;
    let sol = instance.solve(config.packer)?;

    info!(
        "[MAIN] nested {} of {} shape(s) on {} panel(s), density: {:.3}%, total panel area: {}",
        sol.n_placed(),
        instance.shapes().len(),
        sol.n_bins(),
        sol.density() * 100.0,
        ((sol.n_bins() as f64 * instance.panel_width * instance.panel_height).round() as u64)
            .separate_with_commas()
    );
    if !sol.rejections.is_empty() {
        warn!("[MAIN] {} shape(s) were rejected", sol.rejections.len());
    }

    {
        let output = NestOutput {
            instance: ext_instance,
            solution: panel_nest::io::export(&instance, &sol, *EPOCH),
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    if config.write_svg {
        for (i, svg) in solution_to_svgs(&sol, &instance, config.svg_draw_options)
            .iter()
            .enumerate()
        {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{i}.svg"));
            io::write_svg(svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}
