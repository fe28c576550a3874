use anyhow::{Result, Context};
use std::fs;
use std::path::Path;

use crate::utterance::Utterance;

// @module: File utilities for the realign command line

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    /// Read a JSON array of utterances
    pub fn read_utterances<P: AsRef<Path>>(path: P) -> Result<Vec<Utterance>> {
        let content = Self::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse utterances: {:?}", path.as_ref()))
    }

    /// Write utterances as a pretty JSON array
    pub fn write_utterances<P: AsRef<Path>>(path: P, utterances: &[Utterance]) -> Result<()> {
        let json = serde_json::to_string_pretty(utterances)
            .context("Failed to serialize utterances to JSON")?;
        Self::write_to_file(path, &json)
    }

    /// Read translated text blocks, one per group, separated by blank lines
    pub fn read_translation_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let content = Self::read_to_string(path)?;
        Ok(parse_translation_blocks(&content))
    }
}

/// Split text into blocks at blank lines; lines inside a block are joined with a space
pub fn parse_translation_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        blocks.push(current.join(" "));
    }

    blocks
}
