//! Pipeline driver: sequences load, construct, process, save, and report

use crate::Result;
use crate::app::models::Item;
use crate::app::services::data_source::ItemSource;
use crate::app::services::item_processor::ItemProcessor;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::stats::{RunReport, Stage};

/// Orchestrates one end-to-end run over a source and a processor
///
/// The driver owns every item for the duration of a run; items are mutated
/// in place on the single pipeline thread and dropped when the run ends.
#[derive(Debug)]
pub struct Pipeline<S: ItemSource> {
    source: S,
    processor: ItemProcessor,
    show_progress: bool,
}

impl<S: ItemSource> Pipeline<S> {
    /// Create a pipeline over the given source and processor
    pub fn new(source: S, processor: ItemProcessor) -> Self {
        Self {
            source,
            processor,
            show_progress: false,
        }
    }

    /// Enable or disable the processing progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Execute one pipeline run
    ///
    /// A load failure is the only error that propagates: it happens before
    /// any items exist. Every later problem (skipped records, per-item
    /// processing failures, a failed save) is logged, counted on the report,
    /// and does not halt the run, so the final report is always produced.
    pub fn run(&self) -> Result<RunReport> {
        let start = Instant::now();
        let mut report = RunReport::new();

        info!("Starting item processing pipeline");

        // Stage 1: load raw records
        self.advance(&mut report, Stage::Loading);
        let raw_records = self.source.load_raw()?;
        report.records_loaded = raw_records.len();

        // Stage 2: validate and construct, preserving order
        self.advance(&mut report, Stage::Constructing);
        let mut items: Vec<Item> = Vec::with_capacity(raw_records.len());
        for (index, record) in raw_records.into_iter().enumerate() {
            match record.into_item() {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!("Skipping record {} during load: {}", index, e);
                    report.records_skipped += 1;
                }
            }
        }
        report.items_constructed = items.len();

        if items.is_empty() {
            warn!("No items loaded from data source, exiting pipeline early");
            return Ok(self.finish(report, start));
        }

        info!(
            "Successfully loaded {} items ({} records skipped)",
            items.len(),
            report.records_skipped
        );

        // Stage 3: process each item in order
        self.advance(&mut report, Stage::Processing);
        let progress_bar = self.create_progress_bar(items.len() as u64);
        for item in items.iter_mut() {
            match self.processor.process_item(item) {
                Ok(outcome) => {
                    debug!("Item {} {}", item.item_id, outcome);
                    report.success_count += 1;
                }
                Err(e) => {
                    error!("Failed to process item: {}", e);
                    report.failure_count += 1;
                }
            }
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }
        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("Processed {} items", items.len()));
        }

        info!(
            "Processed {} items successfully, {} failed",
            report.success_count, report.failure_count
        );

        // Stage 4: save the full ordered sequence, failed items included
        self.advance(&mut report, Stage::Saving);
        match self.source.save_all(&items) {
            Ok(()) => {
                report.saved = true;
                info!("Processed items saved successfully");
            }
            Err(e) => {
                error!("Failed to save processed items: {}", e);
            }
        }

        Ok(self.finish(report, start))
    }

    /// Move the run to the next stage
    fn advance(&self, report: &mut RunReport, stage: Stage) {
        debug!("Pipeline stage: {} -> {}", report.stage, stage);
        report.stage = stage;
    }

    /// Close out the report; runs on both the normal and early-exit paths
    fn finish(&self, mut report: RunReport, start: Instant) -> RunReport {
        report.stage = Stage::Finished;
        report.duration = start.elapsed();
        info!("Item processing pipeline finished: {}", report.summary());
        report
    }

    fn create_progress_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} items {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Processing items");
        Some(pb)
    }
}
