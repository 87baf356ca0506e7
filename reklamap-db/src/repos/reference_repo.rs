//! Area, block and beneficiary lookups

use reklamap_core::types::{Area, Beneficiary, Block};
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor, SqlitePool};

use crate::entities::{AreaEntity, BeneficiaryEntity, BlockEntity};
use crate::error::DbResult;

const BENEFICIARY_SELECT: &str = "SELECT ben.beneficiary_id, ben.area_id, ben.block_id, \
     blk.block_no, ben.first_name, ben.middle_initial, ben.last_name, ben.suffix, \
     ben.lot_no, ben.sqm, ben.co_owner \
     FROM beneficiaries ben JOIN blocks blk ON blk.block_id = ben.block_id";

/// Name filter for beneficiary searches; every set field must match
/// (case-insensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Matches either the first or the last name
    pub either_name: Option<String>,
    pub middle_initial: Option<String>,
    pub suffix: Option<String>,
}

impl NameQuery {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.either_name.is_none()
    }
}

pub struct ReferenceRepo {
    pool: SqlitePool,
}

impl ReferenceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn area_by_id(&self, area_id: i64) -> DbResult<Option<AreaEntity>> {
        Ok(sqlx::query_as::<_, AreaEntity>("SELECT * FROM areas WHERE area_id = ?")
            .bind(area_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Match an area by code or name, ignoring case
    pub async fn area_by_label(&self, label: &str) -> DbResult<Option<AreaEntity>> {
        Ok(sqlx::query_as::<_, AreaEntity>(
            "SELECT * FROM areas WHERE lower(area_code) = lower(?1) OR lower(area_name) = lower(?1) \
             ORDER BY area_id LIMIT 1",
        )
        .bind(label.trim())
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn list_areas(&self) -> DbResult<Vec<AreaEntity>> {
        Ok(sqlx::query_as::<_, AreaEntity>("SELECT * FROM areas ORDER BY area_name")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn block_in_area(&self, area_id: i64, block_no: i64) -> DbResult<Option<BlockEntity>> {
        Ok(sqlx::query_as::<_, BlockEntity>(
            "SELECT * FROM blocks WHERE area_id = ? AND block_no = ? LIMIT 1",
        )
        .bind(area_id)
        .bind(block_no)
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn beneficiary_by_id(&self, beneficiary_id: i64) -> DbResult<Option<BeneficiaryEntity>> {
        let sql = format!("{} WHERE ben.beneficiary_id = ?", BENEFICIARY_SELECT);
        Ok(sqlx::query_as::<_, BeneficiaryEntity>(&sql)
            .bind(beneficiary_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Beneficiary holding a block/lot, optionally restricted to one area
    pub async fn beneficiary_at(
        &self,
        area_id: Option<i64>,
        block_no: i64,
        lot_no: i64,
    ) -> DbResult<Option<BeneficiaryEntity>> {
        let mut qb = QueryBuilder::<Sqlite>::new(BENEFICIARY_SELECT);
        qb.push(" WHERE blk.block_no = ").push_bind(block_no);
        qb.push(" AND ben.lot_no = ").push_bind(lot_no);
        if let Some(area_id) = area_id {
            qb.push(" AND ben.area_id = ").push_bind(area_id);
        }
        qb.push(" ORDER BY ben.beneficiary_id LIMIT 1");

        Ok(qb
            .build_query_as::<BeneficiaryEntity>()
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Beneficiaries whose name matches the query
    pub async fn beneficiaries_named(&self, name: &NameQuery) -> DbResult<Vec<BeneficiaryEntity>> {
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb = QueryBuilder::<Sqlite>::new(BENEFICIARY_SELECT);
        qb.push(" WHERE 1 = 1");
        if let Some(first) = &name.first_name {
            qb.push(" AND lower(ben.first_name) = lower(").push_bind(first.clone()).push(")");
        }
        if let Some(last) = &name.last_name {
            qb.push(" AND lower(ben.last_name) = lower(").push_bind(last.clone()).push(")");
        }
        if let Some(either) = &name.either_name {
            qb.push(" AND (lower(ben.first_name) = lower(")
                .push_bind(either.clone())
                .push(") OR lower(ben.last_name) = lower(")
                .push_bind(either.clone())
                .push("))");
        }
        if let Some(middle) = &name.middle_initial {
            qb.push(" AND lower(trim(ben.middle_initial, '.')) = lower(")
                .push_bind(middle.trim_end_matches('.').to_string())
                .push(")");
        }
        if let Some(suffix) = &name.suffix {
            qb.push(" AND lower(ben.suffix) = lower(").push_bind(suffix.clone()).push(")");
        }
        qb.push(" ORDER BY ben.beneficiary_id");

        Ok(qb
            .build_query_as::<BeneficiaryEntity>()
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn upsert_area<'e>(&self, conn: impl SqliteExecutor<'e>, area: &Area) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO areas (area_id, area_code, area_name, president, designation, contact_no) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(area_id) DO UPDATE SET area_code = excluded.area_code, \
             area_name = excluded.area_name, president = excluded.president, \
             designation = excluded.designation, contact_no = excluded.contact_no",
        )
        .bind(area.area_id)
        .bind(&area.area_code)
        .bind(&area.area_name)
        .bind(&area.president)
        .bind(&area.designation)
        .bind(&area.contact_no)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn upsert_block<'e>(&self, conn: impl SqliteExecutor<'e>, block: &Block) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO blocks (block_id, area_id, block_no) VALUES (?, ?, ?) \
             ON CONFLICT(block_id) DO UPDATE SET area_id = excluded.area_id, block_no = excluded.block_no",
        )
        .bind(block.block_id)
        .bind(block.area_id)
        .bind(block.block_no)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn upsert_beneficiary<'e>(
        &self,
        conn: impl SqliteExecutor<'e>,
        ben: &Beneficiary,
    ) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO beneficiaries (beneficiary_id, area_id, block_id, first_name, middle_initial, \
             last_name, suffix, lot_no, sqm, co_owner) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(beneficiary_id) DO UPDATE SET area_id = excluded.area_id, \
             block_id = excluded.block_id, first_name = excluded.first_name, \
             middle_initial = excluded.middle_initial, last_name = excluded.last_name, \
             suffix = excluded.suffix, lot_no = excluded.lot_no, sqm = excluded.sqm, \
             co_owner = excluded.co_owner",
        )
        .bind(ben.beneficiary_id)
        .bind(ben.area_id)
        .bind(ben.block_id)
        .bind(&ben.first_name)
        .bind(&ben.middle_initial)
        .bind(&ben.last_name)
        .bind(&ben.suffix)
        .bind(ben.lot_no)
        .bind(ben.sqm)
        .bind(&ben.co_owner)
        .execute(conn)
        .await?;
        Ok(())
    }
}
