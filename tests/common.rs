#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

// Local times below are UTC+6 on 2023-11-15 unless noted.
pub const E001_0900: &str = "E001 John Doe 1700017200 Main Gate";
pub const E001_1745: &str = "E001 John Doe 1700048700 Main Gate";
pub const E002_0931: &str = "E002 Jane Roe 1700019060 Back Door";
pub const E002_1655: &str = "E002 Jane Roe 1700045700 Back Door";
pub const E001_NEXT_DAY_0900: &str = "E001 John Doe 1700103600 Main Gate";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `lines` as a punch log and return its path.
pub fn write_log(name: &str, lines: &[&str]) -> String {
    let path = temp_path(name, "log");
    fs::write(&path, lines.join("\n")).expect("write punch log");
    path
}

/// Config path that does not exist, so the binary runs on defaults
/// regardless of the user's own configuration.
pub fn default_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// Config file with the given YAML body.
pub fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_path(&format!("{name}_cfg"), "conf");
    fs::write(&path, yaml).expect("write config");
    path
}

pub fn sample_log() -> Vec<&'static str> {
    vec![
        E001_0900,
        E002_0931,
        E001_1745,
        E001_1745, // device flushed twice
        "E003 OnlyThreeTokens",
        E002_1655,
        E001_NEXT_DAY_0900,
    ]
}


/// Read one XML part out of a written workbook.
pub fn xlsx_part(path: &str, part: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip container");
    let mut xml = String::new();
    archive
        .by_name(part)
        .expect("workbook part")
        .read_to_string(&mut xml)
        .expect("read workbook part");
    xml
}

/// The `<c r="REF" ...>...</c>` element for a cell reference.
pub fn xlsx_cell<'a>(sheet_xml: &'a str, cell_ref: &str) -> &'a str {
    let open = format!("<c r=\"{cell_ref}\"");
    let start = sheet_xml.find(&open).expect("cell present");
    let rest = &sheet_xml[start..];
    let end = rest.find("</c>").map(|i| i + 4).unwrap_or(rest.len());
    &rest[..end]
}
