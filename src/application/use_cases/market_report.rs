// ============================================================
// MARKET REPORT USE CASE
// ============================================================
// Orchestrate loading, cleaning, and aggregation of both stores

use tracing::info;

use crate::application::use_cases::corrector::remove_known_bad_row;
use crate::application::use_cases::deduplicator::{
    dedupe_by_max, duplicate_summary, DuplicateSummary,
};
use crate::application::use_cases::frequency::{frequency_table, FrequencyTable};
use crate::application::use_cases::grouped_average::{
    distinct_groups, grouped_average, GroupAverage,
};
use crate::application::use_cases::language_filter::{filter_english, is_english};
use crate::application::use_cases::price_filter::filter_free;
use crate::domain::dataset::schema::{apple, google};
use crate::domain::dataset::{
    into_records, AnalysisConfig, AppRecord, AppleAppRecord, CsvRow, Dataset, GoogleAppRecord,
};
use crate::domain::error::AppError;
use crate::infrastructure::csv::CsvLoader;

/// Names used to sanity-check the language heuristic
pub const LANGUAGE_SAMPLES: [&str; 4] = [
    "Instagram",
    "爱奇艺PPS -《欢乐颂2》电视剧热播",
    "Docs To Go™ Free Office Suite",
    "Instachat 😜",
];

/// Surviving row count after one cleaning stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub dataset: &'static str,
    pub stage: &'static str,
    pub rows: usize,
}

/// Shape and first rows of a dataset as loaded
#[derive(Debug, Clone)]
pub struct DatasetOverview {
    pub label: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub header: Vec<String>,
    pub preview: Vec<CsvRow>,
}

impl DatasetOverview {
    fn new(label: &'static str, dataset: &Dataset, preview_rows: usize) -> Self {
        let (rows, columns) = dataset.shape();
        Self {
            label,
            rows,
            columns,
            header: dataset.header.clone(),
            preview: dataset.slice(0, preview_rows).to_vec(),
        }
    }
}

/// Individual apps behind one group of an aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Drilldown {
    pub title: String,

    /// (app name, metric text)
    pub apps: Vec<(String, String)>,
}

/// Everything the profiling run prints
#[derive(Debug, Clone)]
pub struct MarketReport {
    pub apple_overview: DatasetOverview,
    pub google_overview: DatasetOverview,
    pub google_duplicates: DuplicateSummary,
    pub language_samples: Vec<(String, bool)>,
    pub stages: Vec<StageCount>,

    pub apple_genres: FrequencyTable,
    pub google_categories: FrequencyTable,
    pub google_genres: FrequencyTable,
    pub google_installs: FrequencyTable,

    pub apple_genre_list: Vec<String>,
    pub apple_ratings_by_genre: Vec<GroupAverage>,
    pub google_category_list: Vec<String>,
    pub google_installs_by_category: Vec<GroupAverage>,

    pub drilldowns: Vec<Drilldown>,
}

/// Free English apps of both stores after cleaning
#[derive(Debug, Clone)]
pub struct CleanedMarkets {
    pub apple: Vec<AppleAppRecord>,
    pub google: Vec<GoogleAppRecord>,
    pub google_duplicates: DuplicateSummary,
    pub stages: Vec<StageCount>,
}

/// Market profiling use case
pub struct MarketProfiler {
    config: AnalysisConfig,
}

impl MarketProfiler {
    /// Create a new profiler
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Load both exports from the configured paths and profile them
    pub fn profile(&self) -> Result<MarketReport, AppError> {
        self.config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid analysis config: {}", e))
        })?;

        let apple_data = CsvLoader::new().load_file(&self.config.apple_path)?;
        // the known bad Google row is one field short, so width is checked after correction
        let google_data = CsvLoader::new()
            .with_flexible(true)
            .load_file(&self.config.google_path)?;

        self.profile_datasets(apple_data, google_data)
    }

    /// Profile in-memory CSV content (fixtures, tests)
    pub fn profile_content(
        &self,
        apple_csv: &str,
        google_csv: &str,
    ) -> Result<MarketReport, AppError> {
        let apple_data = CsvLoader::new().parse_content(apple_csv)?;
        let google_data = CsvLoader::new().with_flexible(true).parse_content(google_csv)?;
        self.profile_datasets(apple_data, google_data)
    }

    /// Profile already loaded datasets
    pub fn profile_datasets(
        &self,
        apple_data: Dataset,
        google_data: Dataset,
    ) -> Result<MarketReport, AppError> {
        let apple_overview =
            DatasetOverview::new(apple::SCHEMA.label, &apple_data, self.config.explore_rows);
        let google_overview =
            DatasetOverview::new(google::SCHEMA.label, &google_data, self.config.explore_rows);

        let cleaned = self.clean(apple_data, google_data)?;

        let language_samples = LANGUAGE_SAMPLES
            .iter()
            .map(|name| (name.to_string(), is_english(name)))
            .collect();

        let apple_genres = frequency_table(&cleaned.apple, |r| r.prime_genre());
        let google_categories = frequency_table(&cleaned.google, |r| r.category());
        let google_genres = frequency_table(&cleaned.google, |r| r.genres());
        let google_installs = frequency_table(&cleaned.google, |r| r.installs_text());

        let apple_genre_list = distinct_groups(&cleaned.apple, |r| r.prime_genre());
        let apple_ratings_by_genre =
            grouped_average(&cleaned.apple, |r| r.prime_genre(), |r| r.rating_count())?;
        let google_category_list = distinct_groups(&cleaned.google, |r| r.category());
        let google_installs_by_category =
            grouped_average(&cleaned.google, |r| r.category(), |r| r.installs())?;

        let drilldowns = self.drilldowns(&cleaned);

        info!(
            apple_genres = apple_genres.len(),
            google_categories = google_categories.len(),
            drilldowns = drilldowns.len(),
            "Profiled free English apps"
        );

        Ok(MarketReport {
            apple_overview,
            google_overview,
            google_duplicates: cleaned.google_duplicates,
            language_samples,
            stages: cleaned.stages,
            apple_genres,
            google_categories,
            google_genres,
            google_installs,
            apple_genre_list,
            apple_ratings_by_genre,
            google_category_list,
            google_installs_by_category,
            drilldowns,
        })
    }

    /// Correct, type, deduplicate, and filter both datasets
    pub fn clean(
        &self,
        apple_data: Dataset,
        google_data: Dataset,
    ) -> Result<CleanedMarkets, AppError> {
        let mut stages = Vec::new();
        let mut record = |dataset: &'static str, stage: &'static str, rows: usize| {
            info!(dataset, stage, rows, "Cleaning stage complete");
            stages.push(StageCount { dataset, stage, rows });
        };

        let google_rows = if self.config.apply_row_correction {
            let corrected = remove_known_bad_row(
                &google_data.rows,
                self.config.google_bad_row,
                google::RATING,
                google::MAX_RATING,
            )?;
            record(google::SCHEMA.label, "corrected", corrected.len());
            corrected
        } else {
            google_data.rows
        };

        let apple_records: Vec<AppleAppRecord> = into_records(apple_data.rows)?;
        let google_records: Vec<GoogleAppRecord> = into_records(google_rows)?;

        let google_duplicates = duplicate_summary(&google_records, |r| r.name());
        let google_unique = dedupe_by_max(&google_records, |r| r.name(), |r| r.reviews())?;
        record(google::SCHEMA.label, "deduplicated", google_unique.len());

        let apple_english = filter_english(&apple_records);
        record(apple::SCHEMA.label, "english", apple_english.len());
        let google_english = filter_english(&google_unique);
        record(google::SCHEMA.label, "english", google_english.len());

        let apple_free = filter_free(&apple_english);
        record(apple::SCHEMA.label, "free", apple_free.len());
        let google_free = filter_free(&google_english);
        record(google::SCHEMA.label, "free", google_free.len());

        Ok(CleanedMarkets {
            apple: apple_free,
            google: google_free,
            google_duplicates,
            stages,
        })
    }

    fn drilldowns(&self, cleaned: &CleanedMarkets) -> Vec<Drilldown> {
        let mut drilldowns = Vec::new();

        for genre in &self.config.apple_drilldown_genres {
            let apps = cleaned
                .apple
                .iter()
                .filter(|r| r.prime_genre() == genre.as_str())
                .map(|r| (r.name().to_string(), r.rating_count_text().to_string()))
                .collect();
            drilldowns.push(Drilldown {
                title: format!("{} {} apps by user ratings", apple::SCHEMA.label, genre),
                apps,
            });
        }

        for category in &self.config.google_listing_categories {
            let apps = cleaned
                .google
                .iter()
                .filter(|r| r.category() == category.as_str())
                .map(|r| (r.name().to_string(), r.installs_text().to_string()))
                .collect();
            drilldowns.push(Drilldown {
                title: format!("{} {} apps by installs", google::SCHEMA.label, category),
                apps,
            });
        }

        let tiers = &self.config.google_top_install_tiers;
        for category in &self.config.google_drilldown_categories {
            let apps = cleaned
                .google
                .iter()
                .filter(|r| r.category() == category.as_str())
                .filter(|r| tiers.iter().any(|t| t.as_str() == r.installs_text()))
                .map(|r| (r.name().to_string(), r.installs_text().to_string()))
                .collect();
            drilldowns.push(Drilldown {
                title: format!("{} {} apps with top installs", google::SCHEMA.label, category),
                apps,
            });
        }

        drilldowns
    }
}

impl Default for MarketProfiler {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
