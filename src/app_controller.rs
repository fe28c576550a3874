use anyhow::{Result, Context, anyhow};
use log::{info, warn, debug};
use std::path::Path;

use crate::app_config::{Config, SentenceServiceProvider};
use crate::distribution::{Distributor, group_count};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::providers::SentenceBreaker;
use crate::providers::microsoft::MicrosoftTranslator;
use crate::providers::rule_based::RuleBasedBreaker;
use crate::utterance::Utterance;

// @module: Application controller for the realign command line

/// Main application controller: loads inputs, distributes, writes outputs
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Distribute already loaded text blocks over utterances
    pub async fn distribute(&self, utterances: &mut [Utterance], blocks: &[String]) -> Result<(), AppError> {
        match self.config.sentence_service.provider {
            SentenceServiceProvider::Microsoft => {
                let service = &self.config.sentence_service;
                let breaker = MicrosoftTranslator::new(
                    service.api_key.clone(),
                    service.endpoint.clone(),
                    service.region.clone(),
                    service.timeout(),
                );
                self.distribute_with(breaker, utterances, blocks).await
            }
            SentenceServiceProvider::RuleBased => {
                self.distribute_with(RuleBasedBreaker::new(), utterances, blocks).await
            }
        }
    }

    async fn distribute_with<B: SentenceBreaker>(
        &self,
        breaker: B,
        utterances: &mut [Utterance],
        blocks: &[String],
    ) -> Result<(), AppError> {
        debug!("Using {} sentence service for language {}", breaker.name(), self.config.language);
        let distributor = Distributor::with_config(breaker, self.config.language.clone(), self.config.distributor_config());
        distributor.distribute(utterances, blocks).await?;
        Ok(())
    }

    /// Run the file workflow: read utterances and translation, write the result
    pub async fn run(&self, utterances_path: &Path, translation_path: &Path, output_path: &Path, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if output_path.exists() && !force_overwrite {
            return Err(anyhow!("Output file already exists (use -f to force overwrite): {:?}", output_path));
        }

        let mut utterances = FileManager::read_utterances(utterances_path)?;
        let blocks = FileManager::read_translation_blocks(translation_path)?;

        let groups = group_count(&utterances);
        if groups != blocks.len() {
            warn!("{} has {} group(s) but {} has {} block(s)",
                utterances_path.display(), groups, translation_path.display(), blocks.len());
        }

        self.distribute(&mut utterances, &blocks).await?;
        FileManager::write_utterances(output_path, &utterances)?;

        info!("Wrote {} utterance(s) to {} in {:.2}s",
            utterances.len(), output_path.display(), start_time.elapsed().as_secs_f64());
        Ok(())
    }
}
