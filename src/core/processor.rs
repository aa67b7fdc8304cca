use crate::core::targets::{parse_target, parse_targets};
use crate::domain::model::{
    failures, to_pretty_json, LookupOutcome, ReportSummary, ResultMapping, RunReport,
};
use crate::domain::ports::{ReputationSource, Storage};
use crate::utils::error::{CheckError, FailureKind, Result};

/// Reads targets, checks each valid address one after the other and writes
/// the collected outcomes as a single JSON document.
pub struct TargetProcessor<S: Storage, R: ReputationSource> {
    storage: S,
    source: R,
    output_path: String,
}

impl<S: Storage, R: ReputationSource> TargetProcessor<S, R> {
    pub fn new(storage: S, source: R, output_path: impl Into<String>) -> Self {
        Self {
            storage,
            source,
            output_path: output_path.into(),
        }
    }

    pub async fn load_targets(&self, input_path: &str) -> Result<Vec<String>> {
        if !self.storage.is_file(input_path).await {
            return Err(CheckError::InputNotFound {
                path: input_path.to_string(),
            });
        }

        let raw = self.storage.read_file(input_path).await?;
        let content = String::from_utf8(raw).map_err(|_| CheckError::InvalidInputEncoding {
            path: input_path.to_string(),
        })?;

        Ok(parse_targets(&content))
    }

    /// Per-target failures end up in the mapping; nothing here aborts.
    pub async fn process(&self, targets: &[String]) -> (ResultMapping, RunReport) {
        let mut mapping = ResultMapping::new();
        let mut report = RunReport {
            targets_read: targets.len(),
            ..RunReport::default()
        };

        for target in targets {
            if parse_target(target).is_err() {
                tracing::warn!("Skipping invalid IP or CIDR: {}", target);
                report.skipped += 1;
                continue;
            }

            tracing::info!("Checking IP: {}", target);
            report.checked += 1;

            let outcome = match self.source.check(target).await {
                Ok(body) => {
                    if let Some(summary) = ReportSummary::from_response(&body) {
                        tracing::info!(
                            "{}: abuse score {}%, country {}, {} reports",
                            target,
                            summary.abuse_confidence_score.unwrap_or(0),
                            summary.country_code.as_deref().unwrap_or("??"),
                            summary.total_reports.unwrap_or(0)
                        );
                    }
                    LookupOutcome::Report(body)
                }
                Err(e) => {
                    match e.kind() {
                        Some(FailureKind::RemoteRejection) => {
                            tracing::error!("HTTP Error at {}: {}", target, e);
                            if let CheckError::RemoteRejection {
                                detail: Some(detail),
                                ..
                            } = &e
                            {
                                tracing::debug!("API said: {}", detail);
                            }
                        }
                        _ => tracing::error!("Error at {}: {}", target, e),
                    }
                    LookupOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };

            if mapping.insert(target.clone(), outcome).is_some() {
                tracing::warn!("Duplicate target {}, keeping the latest result", target);
            }
        }

        report.failed = failures(&mapping);
        (mapping, report)
    }

    pub async fn save(&self, mapping: &ResultMapping) -> Result<()> {
        let json = to_pretty_json(mapping)?;
        tracing::debug!("Writing {} bytes to {}", json.len(), self.output_path);
        self.storage.write_file(&self.output_path, &json).await
    }

    /// Missing input is reported before anything is written.
    pub async fn run(&self, input_path: &str) -> Result<RunReport> {
        let targets = self.load_targets(input_path).await?;
        tracing::info!("Loaded {} targets from {}", targets.len(), input_path);

        let (mapping, mut report) = self.process(&targets).await;
        self.save(&mapping).await?;

        report.output_path = self.output_path.clone();
        Ok(report)
    }
}
