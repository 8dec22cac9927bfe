use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

pub const CRATE_TARGET: &str = "solviz";

/// Passes events from this crate whose level lies between `most_verbose` and
/// `least_verbose`, inclusive.
#[derive(Debug, Clone, Copy)]
pub struct LevelRangeFilter {
    pub most_verbose: Level,
    pub least_verbose: Level,
}

impl LevelRangeFilter {
    pub const fn only(level: Level) -> Self {
        Self {
            most_verbose: level,
            least_verbose: level,
        }
    }

    pub const fn between(
        most_verbose: Level,
        least_verbose: Level,
    ) -> Self {
        Self {
            most_verbose,
            least_verbose,
        }
    }

    pub fn allows(
        &self,
        level: &Level,
        target: &str,
    ) -> bool {
        // `Level` orders ERROR as the smallest
        target.starts_with(CRATE_TARGET) && *level <= self.most_verbose && *level >= self.least_verbose
    }
}

impl<S> Filter<S> for LevelRangeFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        self.allows(meta.level(), meta.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_only_rejects_neighbours() {
        let filter = LevelRangeFilter::only(Level::DEBUG);
        assert!(filter.allows(&Level::DEBUG, "solviz::engine"));
        assert!(!filter.allows(&Level::INFO, "solviz::engine"));
        assert!(!filter.allows(&Level::TRACE, "solviz::engine"));
    }

    #[test]
    fn warn_and_error_range() {
        let filter = LevelRangeFilter::between(Level::WARN, Level::ERROR);
        assert!(filter.allows(&Level::ERROR, "solviz"));
        assert!(filter.allows(&Level::WARN, "solviz::storage"));
        assert!(!filter.allows(&Level::INFO, "solviz"));
        assert!(!filter.allows(&Level::ERROR, "petgraph"));
    }
}
