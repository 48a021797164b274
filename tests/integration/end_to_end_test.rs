use chrono::{TimeZone, Utc};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use reaindex::{
    core::{FixedCommitHash, Generator},
    output::{xml, Formatter, XmlFormatter},
    Catalog, Settings,
};

const REPO: &str = "https://github.com/YichengZ/zyc-scripts";

fn write_files(base: &Path, files: &[&str]) {
    for file in files {
        let path = base.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}

fn render(settings: &Settings, commit: &str) -> String {
    let catalog = Catalog::zyc_scripts();
    let manifest = Generator::new(settings, &catalog)
        .with_commit_provider(FixedCommitHash::new(commit))
        .generate(Utc.with_ymd_and_hms(2025, 12, 24, 0, 0, 0).unwrap())
        .unwrap();
    XmlFormatter.format(&manifest).unwrap()
}

fn source_lines(xml: &str) -> Vec<&str> {
    xml.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<source") && line.contains("/Scripts/"))
        .collect()
}

#[test]
fn test_main_file_is_first_source() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("Release/REAPER/Scripts/ReaPet");
    write_files(&base, &["assets/a.png", "zyc_ReaPet.lua", "lib/b.lua"]);

    let settings = Settings {
        base_path: base,
        ..Default::default()
    };
    let output = render(&settings, "c0ffee0123");
    let sources = source_lines(&output);

    assert!(output.contains(r#"commit="c0ffee0""#));
    assert_eq!(
        sources,
        vec![
            format!(r#"<source main="main">{}/raw/main/Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua</source>"#, REPO),
            format!(r#"<source>{}/raw/main/Release/REAPER/Scripts/ReaPet/assets/a.png</source>"#, REPO),
            format!(r#"<source>{}/raw/main/Release/REAPER/Scripts/ReaPet/lib/b.lua</source>"#, REPO),
        ]
    );
    assert_eq!(output.matches(r#"<source main="main">"#).count(), 3);
}

#[test]
fn test_fallback_when_main_file_missing() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("Release/REAPER/Scripts/ReaPet");
    write_files(&base, &["lib/b.lua"]);

    let settings = Settings {
        base_path: base,
        ..Default::default()
    };
    let output = render(&settings, "c0ffee0123");
    let sources = source_lines(&output);

    assert_eq!(sources.len(), 2);
    assert_eq!(
        sources[1],
        format!(r#"<source main="main">{}/raw/main/Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua</source>"#, REPO)
    );
}

#[test]
fn test_missing_asset_directory_still_produces_index() {
    let temp_dir = tempdir().unwrap();
    let settings = Settings {
        base_path: temp_dir.path().join("nowhere"),
        ..Default::default()
    };

    let output = render(&settings, "c0ffee0123");

    assert!(output.starts_with(xml::DECLARATION));
    assert!(output.ends_with("</index>\n"));
    assert_eq!(source_lines(&output).len(), 1);
}

#[test]
fn test_assets_outside_anchor_get_prefixed() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("dist");
    write_files(&base, &["zyc_ReaPet.lua"]);

    let settings = Settings {
        base_path: base,
        branch: "dev".to_string(),
        ..Default::default()
    };
    let output = render(&settings, "c0ffee0123");

    let normalized = reaindex::core::paths::normalize(temp_dir.path());
    let expected = format!(
        r#"<source main="main">{}/raw/dev/Release/{}/dist/zyc_ReaPet.lua</source>"#,
        REPO,
        normalized
    );
    assert!(output.contains(&expected), "missing {} in\n{}", expected, output);
}

#[test]
fn test_only_commit_and_time_change_between_runs() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("Release/REAPER/Scripts/ReaPet");
    write_files(&base, &["zyc_ReaPet.lua", "lib/b.lua"]);

    let settings = Settings {
        base_path: base,
        ..Default::default()
    };
    let first = render(&settings, "1111111aaaa");
    let second = render(&settings, "2222222bbbb");

    let changed: Vec<_> = first.lines().zip(second.lines()).filter(|(a, b)| a != b).collect();
    assert_eq!(changed.len(), 1);
    assert!(changed[0].0.starts_with("<index "));
}
