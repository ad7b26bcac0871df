use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use decyb::{
    analyze_race, decode_file, export_tracks, ExportOptions, RaceOptions, RaceSetup, Track,
    TrackSummary,
};
use glob::glob;
use std::path::PathBuf;

/// Distance windows used by `--analyze` when none are given: one day, one week
const DEFAULT_WINDOWS: [i64; 2] = [86_400, 604_800];

/// Legs slower than this are considered drifting with `--analyze`
const DEFAULT_MIN_SPEED: f64 = 0.05;

fn build_command() -> Command {
    Command::new("decyb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode YB tracker position streams and compute race statistics. Optionally exports to CSV/JSON.")
        .arg(
            Arg::new("files")
                .help("Position stream files to decode, supports globbing")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed decoding information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export decoded tracks to JSON files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export decoded tracks to CSV files, one row per position")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("analyze")
                .long("analyze")
                .help("Compute distance, speed and distance window statistics per vessel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .help("Race start as unix timestamp, earlier positions are dropped")
                .value_name("EPOCH")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .help("Race end as unix timestamp, later positions are dropped")
                .value_name("EPOCH")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("min-speed")
                .long("min-speed")
                .help("Legs slower than this (knots) do not count as moving time [default: 0.05]")
                .value_name("KNOTS")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .help("Time window in seconds for distance statistics, repeatable [default: 86400, 604800]")
                .value_name("SECONDS")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(i64)),
        )
}

/// Expand glob patterns, passing plain paths through unchanged
fn expand_input_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') {
            let matches = glob(pattern)
                .with_context(|| format!("Invalid glob pattern '{pattern}'"))?
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("Error expanding glob pattern '{pattern}'"))?;
            if matches.is_empty() {
                log::warn!("No files match '{pattern}'");
            }
            files.extend(matches.into_iter().filter(|p| p.is_file()));
        } else {
            files.push(PathBuf::from(pattern));
        }
    }

    Ok(files)
}

fn print_tracks(tracks: &[Track]) {
    for track in tracks {
        match (track.newest(), track.oldest()) {
            (Some(newest), Some(oldest)) => println!(
                "  Vessel {:>5}: {:>6} position(s), {} .. {}",
                track.id,
                track.len(),
                oldest.at,
                newest.at
            ),
            _ => println!("  Vessel {:>5}: no positions", track.id),
        }
    }
}

fn print_summaries(summaries: &[TrackSummary]) {
    for s in summaries {
        println!(
            "  Vessel {:>5}: {:>6} position(s), {:>8.1} nm, moving {:>7.1} h, avg {:>5.2} kn, max {:>6.2} kn",
            s.id,
            s.points,
            s.distance,
            s.moving_time as f64 / 3600.0,
            s.average_speed,
            s.max_speed
        );
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if debug { "debug" } else { "warn" }),
    )
    .init();
    log::debug!(
        "decyb {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    );

    // Check if no files were provided and show help
    let file_patterns: Vec<String> = match matches.get_many::<String>("files") {
        Some(files) => files.cloned().collect(),
        None => {
            build_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let export_options = ExportOptions {
        json: matches.get_flag("json"),
        csv: matches.get_flag("csv"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };

    let analyze = matches.get_flag("analyze");
    let start = matches.get_one::<i64>("start").copied();
    let end = matches.get_one::<i64>("end").copied();
    let windows: Vec<i64> = match matches.get_many::<i64>("window") {
        Some(values) => values.copied().collect(),
        None if analyze => DEFAULT_WINDOWS.to_vec(),
        None => Vec::new(),
    };
    let race_options = RaceOptions {
        min_moving_speed: matches
            .get_one::<f64>("min-speed")
            .copied()
            .unwrap_or(if analyze { DEFAULT_MIN_SPEED } else { 0.0 }),
        distance_windows: windows,
        ..Default::default()
    };

    let mut setup = RaceSetup::new(Vec::new(), start.unwrap_or(i64::MIN));
    if let Some(end) = end {
        setup = setup.with_end(end);
    }
    let analyze_tracks = analyze || start.is_some() || end.is_some();

    let input_files = match expand_input_paths(&file_patterns) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error expanding input paths: {e:#}");
            std::process::exit(1);
        }
    };
    if input_files.is_empty() {
        eprintln!("Error: No input files found for {file_patterns:?}");
        std::process::exit(1);
    }
    log::debug!("Found {} file(s) to process", input_files.len());

    let mut processed_files = 0;
    for (index, path) in input_files.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Processing: {}", path.display());

        let mut tracks = match decode_file(path) {
            Ok(tracks) => tracks,
            Err(e) => {
                eprintln!("Error processing {}: {e:#}", path.display());
                eprintln!("Continuing with next file...");
                continue;
            }
        };

        if analyze_tracks {
            let summaries = analyze_race(&mut tracks, &setup, &race_options);
            print_summaries(&summaries);
        } else {
            print_tracks(&tracks);
        }

        match export_tracks(&tracks, path, &export_options) {
            Ok(report) => {
                for written in report.json_path.iter().chain(report.csv_path.iter()) {
                    println!("Exported to: {}", written.display());
                }
            }
            Err(e) => {
                eprintln!("Error exporting {}: {e:#}", path.display());
                continue;
            }
        }
        processed_files += 1;
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            input_files.len()
        );
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}
