//! Development seeder: migrates the database and loads the sample data set
//! (companies, staff + applicant identities, jobs and applications).

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

#[derive(Parser, Debug)]
#[command(author, version, about = "hireconnect sample data seeder", long_about = None)]
struct Cli {
    /// SQLite database URL; falls back to DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(crate_env);
    }

    let cli = Cli::parse();
    let database_url = match cli.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL").context("DATABASE_URL not set")?,
    };

    let options: SqliteConnectOptions = database_url
        .parse::<SqliteConnectOptions>()
        .context("invalid database url")?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    seed(&pool).await?;
    println!("Sample data inserted");

    Ok(())
}

async fn seed(pool: &SqlitePool) -> anyhow::Result<()> {
    let companies = [
        ("TechCorp Solutions", "Technology", "San Francisco, CA"),
        ("Global Finance Inc", "Finance", "New York, NY"),
        ("HealthCare Plus", "Healthcare", "Boston, MA"),
        ("EduLearn Systems", "Education", "Austin, TX"),
        ("RetailMax", "Retail", "Seattle, WA"),
    ];
    for (name, industry, location) in companies {
        sqlx::query("INSERT INTO companies (company_name, industry, location) VALUES (?, ?, ?)")
            .bind(name)
            .bind(industry)
            .bind(location)
            .execute(pool)
            .await?;
    }

    let people = [
        ("John", "Admin", "admin@hireconnect.com", "San Francisco, CA", "Admin"),
        ("Sarah", "Wilson", "sarah.recruiter@hireconnect.com", "New York, NY", "Recruiter"),
        ("Mike", "Johnson", "mike.recruiter@hireconnect.com", "Boston, MA", "Recruiter"),
        ("Lisa", "Hart", "lisa.hr@hireconnect.com", "Austin, TX", "HRManager"),
        ("David", "Reese", "david.recruiter@hireconnect.com", "Seattle, WA", "Recruiter"),
        ("Emily", "Smith", "emily.smith@email.com", "San Francisco, CA", "Applicant"),
        ("Michael", "Brown", "michael.brown@email.com", "New York, NY", "Applicant"),
        ("Jessica", "Davis", "jessica.davis@email.com", "Boston, MA", "Applicant"),
        ("Robert", "Miller", "robert.miller@email.com", "Austin, TX", "Applicant"),
        ("Amanda", "Taylor", "amanda.taylor@email.com", "Chicago, IL", "Applicant"),
    ];
    for (first, last, email, location, role) in people {
        sqlx::query(
            "INSERT INTO applicants (first_name, last_name, email, location, role) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(first)
        .bind(last)
        .bind(email)
        .bind(location)
        .bind(role)
        .execute(pool)
        .await?;
    }

    let jobs = [
        (1_i64, "Senior Software Engineer", "Engineering", 120000.0, 180000.0, 2_i64, "Active"),
        (1, "Frontend Developer", "Engineering", 90000.0, 130000.0, 2, "Active"),
        (2, "Financial Analyst", "Finance", 80000.0, 120000.0, 3, "Active"),
        (2, "Investment Banking Associate", "Finance", 100000.0, 150000.0, 3, "Active"),
        (3, "Registered Nurse", "Healthcare", 70000.0, 95000.0, 3, "Active"),
        (4, "Curriculum Developer", "Education", 65000.0, 90000.0, 5, "Active"),
        (5, "E-commerce Manager", "Retail", 85000.0, 115000.0, 5, "Active"),
        (1, "DevOps Engineer", "Engineering", 115000.0, 165000.0, 2, "Closed"),
    ];
    for (company_id, title, category, min, max, recruiter_id, status) in jobs {
        sqlx::query(
            "INSERT INTO jobs (company_id, job_title, job_category, salary_min, salary_max, \
             recruiter_id, status) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(company_id)
        .bind(title)
        .bind(category)
        .bind(min)
        .bind(max)
        .bind(recruiter_id)
        .bind(status)
        .execute(pool)
        .await?;
    }

    // Ten applications; the tenth (application_id 10) links job 3 and
    // applicant 7, matching the documented offer-issuance walkthrough.
    let applications = [
        (1_i64, 6_i64),
        (2, 6),
        (1, 7),
        (4, 8),
        (5, 8),
        (6, 9),
        (7, 9),
        (2, 10),
        (5, 10),
        (3, 7),
    ];
    for (job_id, applicant_id) in applications {
        sqlx::query("INSERT INTO applications (job_id, applicant_id) VALUES (?, ?)")
            .bind(job_id)
            .bind(applicant_id)
            .execute(pool)
            .await?;
    }

    Ok(())
}
