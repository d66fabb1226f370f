// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! `cargo xtask <command>` wraps the lint, test and dependency checks a
//! pull request must pass, plus two project specific commands:
//!
//! - `verify-migrations` applies the embedded `SQLite` migrations to a
//!   scratch database, checks the resulting schema, reverts everything and
//!   applies it again to prove `down.sql` and `up.sql` agree.
//! - `serve` starts the HTTP server against a local database file.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{QueryableByName, RunQueryDsl, SqliteConnection};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Tables the initial migration must create.
const EXPECTED_TABLES: [&str; 6] = [
    "applications",
    "interviews",
    "jobs",
    "notifications",
    "sessions",
    "users",
];

/// (table, column, referenced table) for every foreign key the schema needs.
const EXPECTED_FOREIGN_KEYS: [(&str, &str, &str); 6] = [
    ("applications", "job_id", "jobs"),
    ("applications", "user_id", "users"),
    ("interviews", "application_id", "applications"),
    ("jobs", "posted_by", "users"),
    ("notifications", "user_id", "users"),
    ("sessions", "user_id", "users"),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Everything a pull request must pass: lint, unused deps, tests, migrations
    CI,

    /// Type-check every crate and target
    #[command(visible_alias = "c")]
    Check,

    /// Clippy with warnings denied, rustfmt check, and rustdoc with warnings denied
    #[command(visible_alias = "l")]
    Lint,

    /// Apply clippy suggestions and rustfmt in place
    #[command(visible_alias = "fix")]
    Fix,

    /// Look for workspace dependencies no crate uses
    #[command(visible_alias = "m")]
    Machete,

    /// Run the workspace test suite, doc tests included
    #[command(visible_alias = "t")]
    Test,

    /// Apply, check, revert and reapply the `SQLite` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,

    /// Run the server against a local database file
    #[command(visible_alias = "s")]
    Serve {
        /// Database file to use
        #[arg(long, default_value = "talent-bridge.db")]
        database: String,

        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Check => run_cargo(vec!["check", "--workspace", "--all-targets"]),
            Self::Lint => lint(),
            Self::Fix => fix(),
            Self::Machete => machete(),
            Self::Test => test(),
            Self::VerifyMigrations => verify_migrations(),
            Self::Serve { database, port } => serve(&database, port),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    machete()?;
    test()?;
    verify_migrations()
}

fn lint() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ])?;
    run_cargo_nightly(vec!["fmt", "--all", "--check"])?;
    lint_docs()
}

fn fix() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--workspace",
        "--all-targets",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
    ])?;
    run_cargo_nightly(vec!["fmt", "--all"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Builds the docs of every portal crate with rustdoc warnings denied.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta
        .workspace_packages()
        .into_iter()
        .filter(|package| package.name.starts_with("talent-bridge"))
    {
        cmd!("cargo", "doc", "--no-deps", "--package", package.name.as_str())
            .env("RUSTDOCFLAGS", "-D warnings")
            .run_with_trace()?;
    }

    Ok(())
}

/// Unit and integration tests first, doc tests last.
fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])?;
    run_cargo(vec!["test", "--workspace", "--doc"])
}

/// Run the server with a file database and debug logging for the portal crates
fn serve(database: &str, port: u16) -> Result<()> {
    let port: String = port.to_string();
    cmd(
        "cargo",
        [
            "run",
            "--package",
            "talent-bridge-server",
            "--",
            "--database",
            database,
            "--port",
            &port,
        ],
    )
    .env(
        "RUST_LOG",
        "info,talent_bridge_api=debug,talent_bridge_server=debug",
    )
    .run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Verify the `SQLite` migrations.
///
/// ## What This Command Does
///
/// 1. Applies every embedded migration to an in-memory database with
///    foreign keys enforced
/// 2. Checks the expected tables, foreign keys, and the one-application-
///    per-job-and-user unique constraint exist
/// 3. Reverts all migrations and checks no table is left behind
/// 4. Applies the migrations again and checks the schema is identical to
///    the first pass
fn verify_migrations() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, MigrationHarness};

    #[allow(clippy::items_after_statements)]
    const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
        embed_migrations!("../crates/persistence/migrations");

    tracing::info!("Starting migration verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply migrations: {}", e))?;
    tracing::info!("Migrations applied");

    let first = introspect_sqlite_schema(&mut conn)?;
    check_expected_schema(&first)?;

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to revert migrations: {}", e))?;
    let reverted = introspect_sqlite_schema(&mut conn)?;
    if !reverted.tables.is_empty() {
        let leftover: Vec<&String> = reverted.tables.keys().collect();
        return Err(color_eyre::eyre::eyre!(
            "Tables left behind after revert: {:?}",
            leftover
        ));
    }
    tracing::info!("Migrations reverted cleanly");

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to reapply migrations: {}", e))?;
    let second = introspect_sqlite_schema(&mut conn)?;
    if first != second {
        return Err(color_eyre::eyre::eyre!(
            "Schema differs after revert and reapply"
        ));
    }

    tracing::info!("✓ Migration verification passed");
    Ok(())
}

/// Normalized schema representation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Table {
    columns: BTreeMap<String, Column>,
    foreign_keys: BTreeSet<ForeignKey>,
    unique_constraints: BTreeSet<UniqueConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Column {
    declared_type: String,
    nullable: bool,
    primary_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ForeignKey {
    from_column: String,
    to_table: String,
    to_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct UniqueConstraint {
    columns: Vec<String>,
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' \
         AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let mut table_info = Table {
            columns: BTreeMap::new(),
            foreign_keys: BTreeSet::new(),
            unique_constraints: BTreeSet::new(),
        };

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        for col in columns {
            table_info.columns.insert(
                col.name,
                Column {
                    declared_type: col.r#type.to_uppercase(),
                    nullable: col.notnull == 0,
                    primary_key: col.pk > 0,
                },
            );
        }

        let fks: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err(format!(
                    "Failed to get foreign keys for table {}",
                    table.name
                ))?;

        for fk in fks {
            table_info.foreign_keys.insert(ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            });
        }

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get indexes for table {}", table.name))?;

        // Origin 'u' marks a UNIQUE constraint, including sqlite_autoindex_*
        for idx in indexes.into_iter().filter(|idx| idx.origin == "u") {
            let index_columns: Vec<IndexColumnInfo> =
                diesel::sql_query(format!("PRAGMA index_info({})", idx.name))
                    .load(conn)
                    .wrap_err(format!("Failed to get index columns for {}", idx.name))?;

            table_info.unique_constraints.insert(UniqueConstraint {
                columns: index_columns.into_iter().map(|c| c.name).collect(),
            });
        }

        schema.tables.insert(table.name, table_info);
    }

    Ok(schema)
}

/// Check the tables, foreign keys and unique constraints the portal relies on.
fn check_expected_schema(schema: &Schema) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    let found: BTreeSet<&str> = schema.tables.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = EXPECTED_TABLES.into_iter().collect();
    for missing in expected.difference(&found) {
        errors.push(format!("Missing table: {missing}"));
    }
    for extra in found.difference(&expected) {
        errors.push(format!("Unexpected table: {extra}"));
    }

    for (table, column, target) in EXPECTED_FOREIGN_KEYS {
        let present: bool = schema.tables.get(table).is_some_and(|t| {
            t.foreign_keys
                .iter()
                .any(|fk| fk.from_column == column && fk.to_table == target)
        });
        if !present {
            errors.push(format!(
                "Missing foreign key: {table}.{column} -> {target}"
            ));
        }
    }

    let unique_pair = UniqueConstraint {
        columns: vec![String::from("job_id"), String::from("user_id")],
    };
    let has_unique_pair: bool = schema
        .tables
        .get("applications")
        .is_some_and(|t| t.unique_constraints.contains(&unique_pair));
    if !has_unique_pair {
        errors.push(String::from(
            "Missing unique constraint: applications(job_id, user_id)",
        ));
    }

    for (table, column) in [
        ("users", "username"),
        ("users", "email"),
        ("sessions", "session_token"),
    ] {
        let single = UniqueConstraint {
            columns: vec![column.to_string()],
        };
        let unique: bool = schema
            .tables
            .get(table)
            .is_some_and(|t| t.unique_constraints.contains(&single));
        if !unique {
            errors.push(format!("Missing unique constraint: {table}({column})"));
        }
    }

    if errors.is_empty() {
        tracing::info!("Schema has every expected table, key and constraint");
        Ok(())
    } else {
        for error in &errors {
            tracing::error!("{error}");
        }
        Err(color_eyre::eyre::eyre!(
            "Schema check failed with {} error(s)",
            errors.len()
        ))
    }
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
