/*!
 * Tests for file and directory utilities
 */

use anyhow::Result;
use std::fs;

use ianzimu::exporter::ExportArtifact;
use ianzimu::file_utils::FileManager;
use ianzimu::subtitle_processor::demo_entries;

use crate::common;

#[test]
fn test_file_exists_withFileAndDirectory_shouldOnlyAcceptFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.txt", "x")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.txt")));
    Ok(())
}

#[test]
fn test_ensure_dir_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());
    FileManager::ensure_dir(&nested)?;
    Ok(())
}

#[test]
fn test_write_artifact_withNewDirectory_shouldWriteContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let artifact = ExportArtifact::plain_text(&demo_entries(), "out.txt");

    let path = FileManager::write_artifact(&artifact, temp_dir.path().join("exports"), false)?;
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("out.txt"));
    assert_eq!(FileManager::read_to_string(&path)?, artifact.as_text());
    Ok(())
}

#[test]
fn test_write_artifact_withExistingFile_shouldRespectForceFlag() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "out.srt", "old")?;
    let artifact = ExportArtifact::timed_captions(&demo_entries(), "out.srt");

    let err = FileManager::write_artifact(&artifact, temp_dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(temp_dir.path().join("out.srt"))?, "old");

    FileManager::write_artifact(&artifact, temp_dir.path(), true)?;
    assert_eq!(fs::read_to_string(temp_dir.path().join("out.srt"))?, artifact.as_text());
    Ok(())
}
