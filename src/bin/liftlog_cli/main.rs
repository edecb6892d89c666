// ABOUTME: LiftLog CLI - command-line front end for the workout-logging services
// ABOUTME: Session, exercise logging, history, workout plan and catalog administration commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create an account and sign in
//! liftlog register --username lifter --email lifter@example.com --password Password1
//!
//! # Log a bench press with two sets, the last one to failure
//! liftlog log --group CHEST --name "Bench Press" --set 100x10 --set 100x8 --failure
//!
//! # Show history and aggregate statistics
//! liftlog history
//! liftlog stats
//!
//! # Manage the catalog (administrators)
//! liftlog muscle-groups create --name glutes --description "Glute exercises"
//! liftlog exercises create --name "Hip Thrust" --group GLUTES
//!
//! # Plan eight weeks of lower-body days from catalog exercise ids
//! liftlog plans create --name "Strength" --duration 8 --day "Lower=2,5" --active
//! liftlog plans active
//! ```
//!
//! Backends are selected with the `LIFTLOG_*` environment variables.

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use liftlog::config::ClientConfig;
use liftlog::context::ServiceContext;
use liftlog::errors::{AppError, AppResult};
use liftlog::logging::LoggingConfig;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "liftlog",
    about = "LiftLog workout logging CLI",
    long_about = "Log workouts, browse history and manage the exercise catalog against local storage or a remote backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    Register {
        /// Display name, 3 to 20 characters of letters, digits, `_` or `-`
        #[arg(long)]
        username: String,

        /// Login email
        #[arg(long)]
        email: String,

        /// Password, at least 8 characters
        #[arg(long)]
        password: String,

        /// Repeated password (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Sign in
    Login {
        /// Login email
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Log an exercise
    Log {
        /// Muscle group, e.g. CHEST
        #[arg(long)]
        group: String,

        /// Exercise name, e.g. "Bench Press"
        #[arg(long)]
        name: String,

        /// A set as WEIGHTxREPS, e.g. 100x10; repeat for every set
        #[arg(long = "set", required = true)]
        sets: Vec<String>,

        /// The last set went to failure
        #[arg(long)]
        failure: bool,

        /// When the exercise was performed (defaults to now)
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Show logged exercises
    History,

    /// Show totals over the logged exercises
    Stats,

    /// Show the latest remote log of a catalog exercise
    Latest {
        /// Catalog exercise id
        #[arg(long)]
        exercise_id: i64,
    },

    /// Delete a locally stored exercise by key
    Delete {
        /// Storage key shown by `history`
        key: String,
    },

    /// Delete every locally stored exercise
    Clear,

    /// Muscle group administration
    MuscleGroups {
        #[command(subcommand)]
        action: MuscleGroupCommand,
    },

    /// Exercise catalog administration
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Workout plans of the signed-in user
    Plans {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MuscleGroupCommand {
    /// List every muscle group
    List,

    /// Look a muscle group up by name
    Show {
        /// Muscle group name, any case
        name: String,
    },

    /// Create a muscle group
    Create {
        /// Name, stored upper case
        #[arg(long)]
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Replace a muscle group
    Update {
        /// Muscle group id
        id: i64,

        /// New name
        #[arg(long)]
        name: String,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a muscle group no exercise references
    Delete {
        /// Muscle group id
        id: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// List catalog exercises
    List {
        /// Use the administrator listing instead of the public one
        #[arg(long)]
        admin: bool,
    },

    /// Show one exercise of the public catalog
    Show {
        /// Exercise id
        id: i64,
    },

    /// Create a catalog exercise
    Create {
        /// Exercise name
        #[arg(long)]
        name: String,

        /// Muscle group name
        #[arg(long)]
        group: String,
    },

    /// Replace a catalog exercise
    Update {
        /// Exercise id
        id: i64,

        /// New name
        #[arg(long)]
        name: String,

        /// New muscle group
        #[arg(long)]
        group: String,
    },

    /// Delete a catalog exercise
    Delete {
        /// Exercise id
        id: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// List every plan
    List,

    /// Show one plan with its days
    Show {
        /// Plan id
        id: String,
    },

    /// Show the active plan
    Active,

    /// Create a plan
    Create {
        /// Plan name
        #[arg(long)]
        name: String,

        /// Length of the plan
        #[arg(long)]
        duration: u32,

        /// `weeks` or `months`
        #[arg(long, default_value = "weeks")]
        unit: String,

        /// A day as LABEL=ID,ID with catalog exercise ids; repeat for every day
        #[arg(long = "day")]
        days: Vec<String>,

        /// Mark the new plan active
        #[arg(long)]
        active: bool,
    },

    /// Make a plan the active one
    Activate {
        /// Plan id
        id: String,
    },

    /// Delete a plan
    Delete {
        /// Plan id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    let config = ClientConfig::from_env()?;
    let context = ServiceContext::from_config(&config).await?;
    debug!(auth = context.auth().backend_name(), "LiftLog CLI ready");

    let json = cli.json;
    match cli.command {
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            commands::session::register(&context, username, email, password, confirm_password, json)
                .await?;
        }
        Command::Login { email, password } => {
            commands::session::login(&context, email, password, json).await?;
        }
        Command::Logout => commands::session::logout(&context).await?,
        Command::Whoami => commands::session::whoami(&context, json).await?,
        Command::Log {
            group,
            name,
            sets,
            failure,
            timestamp,
        } => {
            commands::log::record(&context, group, name, &sets, failure, timestamp).await?;
        }
        Command::History => commands::log::history(&context, json).await?,
        Command::Stats => commands::log::stats(&context, json).await?,
        Command::Latest { exercise_id } => {
            commands::log::latest(&context, exercise_id, json).await?;
        }
        Command::Delete { key } => commands::log::delete(&context, &key).await?,
        Command::Clear => commands::log::clear(&context).await?,
        Command::MuscleGroups { action } => match action {
            MuscleGroupCommand::List => commands::catalog::list_groups(&context, json).await?,
            MuscleGroupCommand::Show { name } => {
                commands::catalog::show_group(&context, &name, json).await?;
            }
            MuscleGroupCommand::Create { name, description } => {
                commands::catalog::create_group(&context, name, description, json).await?;
            }
            MuscleGroupCommand::Update {
                id,
                name,
                description,
            } => {
                commands::catalog::update_group(&context, id, name, description, json).await?;
            }
            MuscleGroupCommand::Delete { id } => {
                commands::catalog::delete_group(&context, id).await?;
            }
        },
        Command::Exercises { action } => match action {
            ExerciseCommand::List { admin } => {
                commands::catalog::list_exercises(&context, admin, json).await?;
            }
            ExerciseCommand::Show { id } => {
                commands::catalog::show_exercise(&context, id, json).await?;
            }
            ExerciseCommand::Create { name, group } => {
                commands::catalog::create_exercise(&context, name, group, json).await?;
            }
            ExerciseCommand::Update { id, name, group } => {
                commands::catalog::update_exercise(&context, id, name, group, json).await?;
            }
            ExerciseCommand::Delete { id } => {
                commands::catalog::delete_exercise(&context, id).await?;
            }
        },
        Command::Plans { action } => match action {
            PlanCommand::List => commands::plans::list(&context, json).await?,
            PlanCommand::Show { id } => commands::plans::show(&context, &id, json).await?,
            PlanCommand::Active => commands::plans::active(&context, json).await?,
            PlanCommand::Create {
                name,
                duration,
                unit,
                days,
                active,
            } => {
                commands::plans::create(&context, name, duration, &unit, &days, active, json)
                    .await?;
            }
            PlanCommand::Activate { id } => {
                commands::plans::activate(&context, &id, json).await?;
            }
            PlanCommand::Delete { id } => commands::plans::delete(&context, &id).await?,
        },
    }

    Ok(())
}
