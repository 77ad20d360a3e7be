use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use time::OffsetDateTime;

/// Step of a pruning run a problem was reported in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd)]
pub enum Phase {
    Versions,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,

    /// Number of packages inspected, over all package types.
    pub number_of_packages: usize,
    /// Number of versions successfully deleted.
    pub number_of_deletions: usize,
    /// Error messages, by phase and by the path which failed.
    pub messages: BTreeMap<Phase, BTreeMap<String, Vec<String>>>,
}

impl Report {
    pub fn number_of_problems(&self, phase: Phase) -> usize {
        self.messages
            .get(&phase)
            .map(|paths| paths.values().map(Vec::len).sum())
            .unwrap_or_default()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Inspected {} packages, deleted {} versions ({} skipped version listings, {} failed deletions) in {}",
            self.number_of_packages,
            self.number_of_deletions,
            self.number_of_problems(Phase::Versions),
            self.number_of_problems(Phase::Delete),
            self.end_date - self.start_date,
        )
    }
}

#[derive(Clone, Debug)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: Report {
                start_date: OffsetDateTime::now_utc(),
                end_date: OffsetDateTime::now_utc(),
                number_of_packages: 0,
                number_of_deletions: 0,
                messages: Default::default(),
            },
        }
    }

    pub fn tick(&mut self) {
        self.report.number_of_packages += 1;
    }

    pub fn deleted(&mut self) {
        self.report.number_of_deletions += 1;
    }

    pub fn add_error(&mut self, phase: Phase, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        let message = message.into();

        self.report
            .messages
            .entry(phase)
            .or_default()
            .entry(path)
            .or_default()
            .push(message);
    }

    pub fn build(mut self) -> Report {
        self.report.end_date = OffsetDateTime::now_utc();
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
