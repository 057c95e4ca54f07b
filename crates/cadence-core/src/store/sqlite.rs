//! SQLite-backed plan store.
//!
//! Schema management and queries for per-shop plan persistence. The whole
//! plan list of a shop is written in one transaction; stored order is
//! preserved through an explicit position column.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection};

use super::PlanStore;
use crate::error::{Result, StoreResultExt};
use crate::models::{Plan, ReleaseEntry};

const CREATE_PLANS_SQL: &str = "CREATE TABLE IF NOT EXISTS plans (
    shop TEXT NOT NULL,
    id INTEGER NOT NULL,
    code TEXT NOT NULL DEFAULT '',
    name TEXT NOT NULL,
    sku_name TEXT NOT NULL DEFAULT '',
    sku_price TEXT NOT NULL DEFAULT '',
    posted INTEGER,
    created_at TEXT NOT NULL,
    position INTEGER NOT NULL,
    PRIMARY KEY (shop, id)
)";

const CREATE_RELEASES_SQL: &str = "CREATE TABLE IF NOT EXISTS releases (
    shop TEXT NOT NULL,
    plan_id INTEGER NOT NULL,
    seq INTEGER NOT NULL,
    date TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    remark TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (shop, plan_id, seq)
)";

const SELECT_PLANS_SQL: &str = "SELECT id, code, name, sku_name, sku_price, posted, created_at
     FROM plans WHERE shop = ?1 ORDER BY position";
const SELECT_RELEASES_SQL: &str = "SELECT date, quantity, remark
     FROM releases WHERE shop = ?1 AND plan_id = ?2 ORDER BY seq";
const DELETE_PLANS_SQL: &str = "DELETE FROM plans WHERE shop = ?1";
const DELETE_RELEASES_SQL: &str = "DELETE FROM releases WHERE shop = ?1";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans
     (shop, id, code, name, sku_name, sku_price, posted, created_at, position)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const INSERT_RELEASE_SQL: &str = "INSERT INTO releases
     (shop, plan_id, seq, date, quantity, remark)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Plan store backed by a SQLite database file.
///
/// A connection is opened per operation; operations are expected to run on
/// a blocking-friendly thread (the console wraps them in
/// `task::spawn_blocking`).
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Creates a store for the given database file and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.open()?;
        Ok(store)
    }

    fn open(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.path).db_context("Failed to open database connection")?;
        connection
            .execute(CREATE_PLANS_SQL, [])
            .db_context("Failed to create plans table")?;
        connection
            .execute(CREATE_RELEASES_SQL, [])
            .db_context("Failed to create releases table")?;
        Ok(connection)
    }
}

fn parse_date(column: usize, text: &str) -> std::result::Result<Date, rusqlite::Error> {
    text.parse::<Date>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
    })
}

impl PlanStore for SqliteStore {
    fn load(&self, shop: &str) -> Result<Vec<Plan>> {
        let connection = self.open()?;

        let mut stmt = connection
            .prepare(SELECT_PLANS_SQL)
            .db_context("Failed to prepare plan query")?;
        let mut plans: Vec<Plan> = stmt
            .query_map(params![shop], |row| {
                let posted: Option<i64> = row.get(5)?;
                Ok(Plan {
                    id: row.get::<_, i64>(0)? as u64,
                    code: row.get(1)?,
                    name: row.get(2)?,
                    sku_name: row.get(3)?,
                    sku_price: row.get(4)?,
                    posted: posted.map(|v| v != 0),
                    created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
                    })?,
                    releases: Vec::new(),
                })
            })
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        let mut release_stmt = connection
            .prepare(SELECT_RELEASES_SQL)
            .db_context("Failed to prepare release query")?;
        for plan in &mut plans {
            plan.releases = release_stmt
                .query_map(params![shop, plan.id as i64], |row| {
                    Ok(ReleaseEntry {
                        date: parse_date(0, &row.get::<_, String>(0)?)?,
                        quantity: row.get::<_, i64>(1)?.max(0) as u32,
                        remark: row.get(2)?,
                    })
                })
                .db_context("Failed to query releases")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch releases")?;
        }

        Ok(plans)
    }

    fn save(&self, shop: &str, plans: &[Plan]) -> Result<()> {
        let mut connection = self.open()?;
        let tx = connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_RELEASES_SQL, params![shop])
            .db_context("Failed to clear releases")?;
        tx.execute(DELETE_PLANS_SQL, params![shop])
            .db_context("Failed to clear plans")?;

        for (position, plan) in plans.iter().enumerate() {
            tx.execute(
                INSERT_PLAN_SQL,
                params![
                    shop,
                    plan.id as i64,
                    plan.code,
                    plan.name,
                    plan.sku_name,
                    plan.sku_price,
                    plan.posted.map(i64::from),
                    plan.created_at.to_string(),
                    position as i64,
                ],
            )
            .db_context("Failed to insert plan")?;

            for (seq, release) in plan.releases.iter().enumerate() {
                tx.execute(
                    INSERT_RELEASE_SQL,
                    params![
                        shop,
                        plan.id as i64,
                        seq as i64,
                        release.date.to_string(),
                        i64::from(release.quantity),
                        release.remark,
                    ],
                )
                .db_context("Failed to insert release")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
