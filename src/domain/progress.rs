use log::info;

/// Track progress of a batch ingestion
pub struct IngestProgress {
    total: usize,
    inserted: usize,
    merged: usize,
    skipped: usize,
}

impl IngestProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            inserted: 0,
            merged: 0,
            skipped: 0,
        }
    }

    pub fn increment_inserted(&mut self) {
        self.inserted += 1;
        self.log_progress();
    }

    pub fn increment_merged(&mut self) {
        self.merged += 1;
        self.log_progress();
    }

    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.inserted + self.merged + self.skipped
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn merged(&self) -> usize {
        self.merged
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} new, {} merged, {} skipped)",
                current, self.total, self.inserted, self.merged, self.skipped
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
