//! CLI administration tool for golf-course-api.
//!
//! Provides commands for seeding sample data, inspecting and removing
//! courses, and performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Insert the sample courses into an empty database
//! cargo run --bin admin -- seed
//!
//! # List courses, optionally filtered
//! cargo run --bin admin -- course list --search "augusta"
//!
//! # Show a course with its holes
//! cargo run --bin admin -- course show 6c1f0c7e-4c1b-4d43-9a55-2b0b6b0d9a11
//!
//! # Delete a course
//! cargo run --bin admin -- course delete 6c1f0c7e-4c1b-4d43-9a55-2b0b6b0d9a11
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use golf_course_api::application::services::GolfCourseService;
use golf_course_api::domain::entities::GolfCourse;
use golf_course_api::domain::repositories::CourseFilter;
use golf_course_api::infrastructure::persistence::PgGolfCourseRepository;
use golf_course_api::infrastructure::seed::sample_courses;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

const LIST_LIMIT: i64 = 100;

type Service = GolfCourseService<PgGolfCourseRepository>;

/// CLI tool for managing golf-course-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Insert the sample courses if no course exists yet
    Seed,

    /// Inspect and manage courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Course subcommands.
#[derive(Subcommand)]
enum CourseAction {
    /// List courses ordered by name
    List {
        /// Substring of name, location or country
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a course and its holes
    Show { id: Uuid },

    /// Delete a course (refused while rounds reference it)
    Delete {
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = GolfCourseService::new(Arc::new(PgGolfCourseRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Seed => seed(&service).await?,
        Commands::Course { action } => handle_course_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Inserts the sample courses when the table is empty.
async fn seed(service: &Service) -> Result<()> {
    println!("{}", "🌱 Seeding sample courses".bright_blue().bold());
    println!();

    let existing = service
        .list_courses(CourseFilter::new(0, 1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count courses: {}", e))?;

    if existing.total > 0 {
        println!(
            "{}",
            format!(
                "⚠️  Database already holds {} course(s), nothing to do",
                existing.total
            )
            .yellow()
        );
        return Ok(());
    }

    for new_course in sample_courses() {
        let course = service
            .create_course(new_course)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create course: {}", e))?;

        println!(
            "  {} {} ({}, par {})",
            "✓".green(),
            course.name.cyan(),
            course.location,
            course.par()
        );
    }

    println!();
    println!("{}", "✅ Seeding complete".green().bold());

    Ok(())
}

/// Dispatches course commands.
async fn handle_course_action(action: CourseAction, service: &Service) -> Result<()> {
    match action {
        CourseAction::List { search } => list_courses(service, search).await,
        CourseAction::Show { id } => show_course(service, id).await,
        CourseAction::Delete { id, yes } => delete_course(service, id, yes).await,
    }
}

/// Lists courses in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Golf Courses
///
///   ID                                    Name                      Country          Holes  Par  Status
///   ─────────────────────────────────────────────────────────────────────────────────────────────────────
///   6c1f0c7e-4c1b-4d43-9a55-2b0b6b0d9a11  Augusta National          United States    18     72   ACTIVE
/// ```
async fn list_courses(service: &Service, search: Option<String>) -> Result<()> {
    println!("{}", "📋 Golf Courses".bright_blue().bold());
    println!();

    let (courses, total) = match search {
        Some(text) => {
            let courses = service
                .search_courses(&text, LIST_LIMIT)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to search courses: {}", e))?;
            let total = courses.len() as i64;
            (courses, total)
        }
        None => {
            let page = service
                .list_courses(CourseFilter::new(0, LIST_LIMIT))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list courses: {}", e))?;
            (page.items, page.total)
        }
    };

    if courses.is_empty() {
        println!("{}", "  No courses found".yellow());
        println!();
        println!(
            "  Load sample data with: {} admin seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<25} {:<16} {:<6} {:<4} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Country".bright_white().bold(),
        "Holes".bright_white().bold(),
        "Par".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(101).bright_black());

    for course in &courses {
        let status = if course.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<37} {:<25} {:<16} {:<6} {:<4} {}",
            course.id.to_string().bright_black(),
            truncate(&course.name, 25).cyan(),
            truncate(&course.country, 16),
            course.total_holes,
            course.par(),
            status
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_course(service: &Service, id: Uuid) -> Result<()> {
    let course = service
        .get_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_course(&course);

    Ok(())
}

fn print_course(course: &GolfCourse) {
    println!("{}", format!("⛳ {}", course.name).bright_blue().bold());
    println!();
    println!("  ID:         {}", course.id.to_string().bright_black());
    println!("  Location:   {}, {}", course.location, course.country);
    println!(
        "  Difficulty: {}",
        course
            .difficulty
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Active:     {}",
        if course.is_active {
            "yes".green()
        } else {
            "no".red()
        }
    );
    if let Some(description) = &course.description {
        println!("  About:      {}", description);
    }
    println!();

    println!(
        "  {:<5} {:<4} {:<9} {}",
        "Hole".bright_white().bold(),
        "Par".bright_white().bold(),
        "Meters".bright_white().bold(),
        "Handicap".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for hole in &course.holes {
        println!(
            "  {:<5} {:<4} {:<9} {}",
            hole.hole_number, hole.par, hole.distance_meters, hole.handicap
        );
    }

    println!();
    println!(
        "  Par {} over {} holes",
        course.par().to_string().bright_white().bold(),
        course.total_holes
    );
    println!();
}

/// Deletes a course after confirmation (default: No).
async fn delete_course(service: &Service, id: Uuid, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Golf Course".bright_blue().bold());
    println!();

    let course = service
        .get_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Course:   {}", course.name.cyan());
    println!("  Location: {}", course.location);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this course and its holes?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete course: {}", e))?;

    println!("{}", "✅ Course deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let courses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM golf_courses")
                .fetch_one(pool)
                .await?;

            let holes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holes")
                .fetch_one(pool)
                .await?;

            let rounds: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM golf_rounds")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Courses:    {}",
                courses.to_string().bright_green().bold()
            );
            println!("  Holes:      {}", holes.to_string().bright_green().bold());
            println!("  Rounds:     {}", rounds.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}
