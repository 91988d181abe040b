use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TallyError};
use crate::settings::load_settings;

const OUTPUT_PREFIX: &str = "filtered_";

pub fn run(
    input_dir: &str,
    output_dir: Option<&str>,
    keep: &[String],
    rename: &[String],
) -> Result<()> {
    let settings = load_settings();
    let keep = if keep.is_empty() {
        settings.filter.keep.clone()
    } else {
        keep.to_vec()
    };
    let rename = if rename.is_empty() {
        settings.filter.rename.clone()
    } else {
        parse_rename_args(rename)?
    };

    let input = Path::new(input_dir);
    let out_dir = output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| input.join("filtered"));
    fs::create_dir_all(&out_dir)?;

    let mut processed = 0usize;
    for path in csv_files(input)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match filter_file(&path, &out_dir, &keep, &rename)? {
            Some(out_path) => {
                processed += 1;
                println!("Processed {} -> {}", path.display(), out_path.display());
            }
            None => println!("Skipping {name}: missing required columns."),
        }
    }
    println!("{processed} file(s) processed into {}", out_dir.display());
    Ok(())
}

/// CSV files in the folder, skipping previous filter output. Sorted by name
/// so repeated runs process in the same order.
fn csv_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        let is_csv = path
            .extension()
            .map_or(false, |e| e.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv && !name.to_lowercase().starts_with(OUTPUT_PREFIX) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Project one CSV down to the kept columns, applying renames to the
/// header. Returns None when the file lacks a required column.
fn filter_file(
    path: &Path,
    out_dir: &Path,
    keep: &[String],
    rename: &HashMap<String, String>,
) -> Result<Option<PathBuf>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut indices = Vec::with_capacity(keep.len());
    for column in keep {
        match headers.iter().position(|h| h == column) {
            Some(i) => indices.push(i),
            None => return Ok(None),
        }
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let out_path = out_dir.join(format!("{OUTPUT_PREFIX}{name}"));
    let mut wtr = csv::Writer::from_path(&out_path)?;

    let out_header: Vec<&str> = keep
        .iter()
        .map(|column| rename.get(column).unwrap_or(column).as_str())
        .collect();
    wtr.write_record(&out_header)?;

    for record in rdr.records() {
        let record = record?;
        let row: Vec<&str> = indices.iter().map(|&i| record.get(i).unwrap_or("")).collect();
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(Some(out_path))
}

fn parse_rename_args(args: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for arg in args {
        match arg.split_once('=') {
            Some((old, new)) if !old.is_empty() && !new.is_empty() => {
                map.insert(old.to_string(), new.to_string());
            }
            _ => {
                return Err(TallyError::Other(format!(
                    "invalid --rename '{arg}', expected OLD=NEW"
                )))
            }
        }
    }
    Ok(map)
}
