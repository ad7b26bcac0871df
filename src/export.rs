//! Export of annotated tracks
//!
//! Output files are named after the input stream (`<stem>.json`,
//! `<stem>.csv`) and written next to it unless an output directory is set.

use crate::types::Track;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub json: bool,
    pub csv: bool,
    pub output_dir: Option<String>,
}

/// Files written by [`export_tracks`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}

/// Build the output path for `input_path` with the given extension,
/// creating the output directory if needed
pub fn compute_export_path(input_path: &Path, options: &ExportOptions, extension: &str) -> Result<PathBuf> {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("positions");

    let output_dir = match options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
        log::debug!("Created output directory: {}", output_dir.display());
    }

    Ok(output_dir.join(format!("{base_name}.{extension}")))
}

/// Write all tracks as pretty-printed JSON
#[cfg(feature = "json")]
pub fn export_to_json(tracks: &[Track], input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    use std::fs::File;
    use std::io::{BufWriter, Write};

    let path = compute_export_path(input_path, options, "json")?;
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, tracks)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writer.flush()?;

    log::debug!("Exported {} track(s) to {}", tracks.len(), path.display());
    Ok(path)
}

#[cfg(feature = "csv")]
const CSV_HEADER: [&str; 17] = [
    "id",
    "time",
    "lat",
    "lon",
    "alt",
    "reported_dtf",
    "lap",
    "aux",
    "dist",
    "bearing",
    "dist_tot",
    "td",
    "v_avg",
    "v_avg_max",
    "dtf",
    "dmg",
    "name",
];

#[cfg(feature = "csv")]
fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write one CSV row per moment, tracks in stream order
#[cfg(feature = "csv")]
pub fn export_to_csv(tracks: &[Track], input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let path = compute_export_path(input_path, options, "csv")?;
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    let mut rows = 0;
    for track in tracks {
        for m in &track.moments {
            writer.write_record([
                track.id.to_string(),
                m.at.to_string(),
                format!("{:.5}", m.lat),
                format!("{:.5}", m.lon),
                opt(m.alt),
                opt(m.reported_dtf),
                opt(m.lap),
                opt(m.aux),
                format!("{:.3}", m.dist),
                format!("{:.1}", m.bearing),
                format!("{:.3}", m.dist_tot),
                m.td.to_string(),
                format!("{:.2}", m.v_avg),
                u8::from(m.v_avg_max).to_string(),
                opt(m.dtf.map(|d| format!("{d:.3}"))),
                opt(m.dmg.map(|d| format!("{d:.3}"))),
                m.name.clone().unwrap_or_default(),
            ])?;
            rows += 1;
        }
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    log::debug!("Exported {} row(s) to {}", rows, path.display());
    Ok(path)
}

/// Run every export enabled in `options`
pub fn export_tracks(tracks: &[Track], input_path: &Path, options: &ExportOptions) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    if options.json {
        #[cfg(feature = "json")]
        {
            report.json_path = Some(export_to_json(tracks, input_path, options)?);
        }
        #[cfg(not(feature = "json"))]
        log::warn!("JSON export requested but the `json` feature is disabled");
    }

    if options.csv {
        #[cfg(feature = "csv")]
        {
            report.csv_path = Some(export_to_csv(tracks, input_path, options)?);
        }
        #[cfg(not(feature = "csv"))]
        log::warn!("CSV export requested but the `csv` feature is disabled");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_export_path_next_to_input() {
        let path = compute_export_path(Path::new("positions.bin"), &ExportOptions::default(), "json").unwrap();
        assert_eq!(path, PathBuf::from("positions.json"));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_optional_fields_render_empty() {
        assert_eq!(opt::<i32>(None), "");
        assert_eq!(opt(Some(42u8)), "42");
    }
}
