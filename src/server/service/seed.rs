//! Startup seeding of colleges and courses from a JSON file.
//!
//! The file is an array of `{name, location, course, fee}` objects, one course per entry.
//! Entries go through the same workflow as `POST /api/colleges`, so several entries naming
//! the same college add courses to a single college row.

use std::path::Path;

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::server::{
    data::{college::CollegeRepository, course::CourseRepository},
    error::{config::ConfigError, AppError},
    model::college::{validate_fee, CreateCollegeWithCoursesParam, NewCourseParam},
    service::college::CollegeService,
};

/// One entry of the seed file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub location: String,
    pub course: String,
    pub fee: Decimal,
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub seeded: usize,
    pub failed: usize,
}

/// Reads and parses a seed file.
///
/// # Returns
/// - `Ok(Vec<SeedEntry>)` - Parsed entries in file order
/// - `Err(ConfigError::InvalidSeedFile)` - File unreadable or not a JSON array of entries
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>, ConfigError> {
    let path = path.as_ref();
    let invalid = |reason: String| ConfigError::InvalidSeedFile {
        path: path.display().to_string(),
        reason,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))
}

pub struct SeedService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds colleges and courses.
    ///
    /// When colleges already exist the run is skipped unless `force` is set, in which case
    /// every course and college is deleted first. A failing entry is logged and counted but
    /// does not stop the run.
    ///
    /// # Returns
    /// - `Ok(Some(SeedSummary))` - Seeding ran
    /// - `Ok(None)` - Skipped because the store already holds colleges
    /// - `Err(AppError::DbErr)` - Database error while checking or clearing existing data
    pub async fn seed(
        &self,
        entries: Vec<SeedEntry>,
        force: bool,
    ) -> Result<Option<SeedSummary>, AppError> {
        let existing = CollegeRepository::new(self.db).count().await?;

        if existing > 0 {
            if !force {
                tracing::info!(
                    "Database already contains {} college(s), skipping seed (set SEED_FORCE=true to reseed)",
                    existing
                );
                return Ok(None);
            }

            tracing::warn!("SEED_FORCE is set, deleting all courses and colleges");
            self.clear().await?;
        }

        tracing::info!("Seeding {} college/course entries", entries.len());

        let college_service = CollegeService::new(self.db);
        let mut summary = SeedSummary::default();

        for entry in entries {
            let label = format!("{} - {}", entry.name, entry.course);

            let result = match seed_param(entry) {
                Ok(param) => college_service.create_with_courses(param).await.map(|_| ()),
                Err(err) => Err(err),
            };

            match result {
                Ok(()) => {
                    tracing::debug!("Seeded {}", label);
                    summary.seeded += 1;
                }
                Err(err) => {
                    tracing::error!("Failed to seed {}: {}", label, err);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Seeding finished: {} seeded, {} failed",
            summary.seeded,
            summary.failed
        );

        Ok(Some(summary))
    }

    async fn clear(&self) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        CourseRepository::new(&txn).delete_all().await?;
        CollegeRepository::new(&txn).delete_all().await?;

        txn.commit().await?;

        Ok(())
    }
}

fn seed_param(entry: SeedEntry) -> Result<CreateCollegeWithCoursesParam, AppError> {
    let SeedEntry {
        name,
        location,
        course,
        fee,
    } = entry;

    if name.trim().is_empty() || location.trim().is_empty() || course.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Seed entry has a blank name, location or course".to_string(),
        ));
    }
    let fee = validate_fee(fee)?;

    Ok(CreateCollegeWithCoursesParam {
        name: name.trim().to_string(),
        location: location.trim().to_string(),
        courses: vec![NewCourseParam {
            name: course.trim().to_string(),
            fee,
        }],
    })
}
