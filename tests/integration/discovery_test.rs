use std::fs;
use std::path::Path;
use tempfile::tempdir;
use reaindex::{
    core::{discovery::discover_files, paths},
    error::Result,
    models::config::Settings,
};

fn create_release_tree(root: &Path) -> Result<()> {
    let base = root.join("Release/REAPER/Scripts/ReaPet");

    fs::create_dir_all(base.join("lib"))?;
    fs::create_dir_all(base.join("assets/skins"))?;
    fs::create_dir_all(base.join(".git/objects"))?;

    fs::write(base.join("zyc_ReaPet.lua"), "-- entry point")?;
    fs::write(base.join("lib/stats.lua"), "-- stats")?;
    fs::write(base.join("lib/config.JSON"), "{}")?;
    fs::write(base.join("assets/skins/cat.png"), [0u8; 4])?;
    fs::write(base.join("assets/skins/dog.JPG"), [0u8; 4])?;
    fs::write(base.join("assets/skins/onion.jpeg"), [0u8; 4])?;
    fs::write(base.join("assets/.DS_Store"), "")?;
    fs::write(base.join(".git/objects/pack.lua"), "")?;
    fs::write(base.join(".gitignore"), "*.tmp")?;
    fs::write(base.join("README.md"), "# ReaPet")?;
    fs::write(base.join("lib/notes.txt"), "notes")?;

    Ok(())
}

#[test]
fn test_discovery_properties() -> Result<()> {
    let temp_dir = tempdir()?;
    create_release_tree(temp_dir.path())?;

    let base = temp_dir.path().join("Release/REAPER/Scripts/ReaPet");
    let settings = Settings {
        base_path: base.clone(),
        ..Default::default()
    };

    let files = discover_files(&settings)?;
    let rendered: Vec<String> = files.iter().map(|path| paths::normalize(path)).collect();

    assert_eq!(files.len(), 6);

    // Under the base directory, files only
    assert!(files.iter().all(|path| path.starts_with(&base) && path.is_file()));

    // Allowed extensions only
    let allowed = [".lua", ".png", ".jpg", ".jpeg", ".json"];
    assert!(rendered
        .iter()
        .all(|path| allowed.iter().any(|ext| path.to_lowercase().ends_with(ext))));

    // No housekeeping or version-control entries
    assert!(rendered.iter().all(|path| !path.contains(".DS_Store") && !path.contains(".git")));

    // Sorted ascending
    let mut sorted = rendered.clone();
    sorted.sort();
    assert_eq!(rendered, sorted);

    Ok(())
}

#[test]
fn test_discovery_of_missing_directory_is_empty() -> Result<()> {
    let temp_dir = tempdir()?;
    let settings = Settings {
        base_path: temp_dir.path().join("Release/REAPER/Scripts/ReaPet"),
        ..Default::default()
    };

    assert!(discover_files(&settings)?.is_empty());
    Ok(())
}

#[test]
fn test_discovery_with_custom_extensions() -> Result<()> {
    let temp_dir = tempdir()?;
    create_release_tree(temp_dir.path())?;

    let settings = Settings {
        base_path: temp_dir.path().join("Release/REAPER/Scripts/ReaPet"),
        extensions: vec!["md".to_string(), ".txt".to_string()],
        ..Default::default()
    };

    let names: Vec<String> = discover_files(&settings)?
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["README.md", "notes.txt"]);
    Ok(())
}
