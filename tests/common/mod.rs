/*!
 * Common test utilities for the realign test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use realign::Utterance;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Two groups of cues separated by a blank cue
pub fn sample_utterances() -> Vec<Utterance> {
    vec![
        Utterance::new("Hello world", 1),
        Utterance::new("Bye now", 1),
        Utterance::separator(),
        Utterance::new("This is the second scene.", 1),
        Utterance::new("It has three cues,", 1),
        Utterance::new("all of them short.", 1),
    ]
}

/// Translations matching `sample_utterances`, one block per group
pub fn sample_blocks() -> Vec<String> {
    vec![
        "Hola mundo adios ahora".to_string(),
        "Esta es la segunda escena. Tiene tres partes, todas ellas cortas.".to_string(),
    ]
}

/// Creates sample utterance and translation files for the file workflow
pub fn create_sample_inputs(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let utterances = serde_json::to_string_pretty(&sample_utterances())?;
    let utterances_path = create_test_file(dir, "cues.json", &utterances)?;
    let translation_path = create_test_file(dir, "cues.es.txt", &sample_blocks().join("\n\n"))?;
    Ok((utterances_path, translation_path))
}
