//! Complaint and questionnaire repository

use chrono::{DateTime, Utc};
use reklamap_core::types::{
    BoundaryDisputeForm, ComplaintStage, ComplaintStatus, ComplaintType, DetailRecord,
    LotDisputeForm, OverlappingForm, PathwayDisputeForm, PriorityLevel, UnauthorizedOccupationForm,
};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::entities::{
    format_timestamp, to_json_text, BoundaryDisputeEntity, ComplaintEntity, LotDisputeEntity,
    OverlappingEntity, PathwayDisputeEntity, UnauthorizedOccupationEntity,
};
use crate::error::DbResult;

/// Column values for a new complaints row
#[derive(Debug, Clone)]
pub struct NewComplaintRow {
    pub registration_id: i64,
    pub complaint_type: ComplaintType,
    pub date_received: DateTime<Utc>,
    pub status: ComplaintStatus,
    pub stage: ComplaintStage,
    pub priority: PriorityLevel,
    pub description: String,
    pub complainant_name: String,
    pub area_id: i64,
    pub address: Option<String>,
}

pub struct ComplaintRepo {
    pool: SqlitePool,
}

impl ComplaintRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a complaints row and return its id
    pub async fn insert<'e>(&self, conn: impl SqliteExecutor<'e>, row: &NewComplaintRow) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO complaints (registration_id, type_of_complaint, date_received, status, \
             complaint_stage, priority_level, description, complainant_name, area_id, address) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.registration_id)
        .bind(row.complaint_type.as_str())
        .bind(format_timestamp(row.date_received))
        .bind(row.status.as_str())
        .bind(row.stage.as_str())
        .bind(row.priority.as_str())
        .bind(&row.description)
        .bind(&row.complainant_name)
        .bind(row.area_id)
        .bind(&row.address)
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert the questionnaire row matching the detail's complaint type
    pub async fn insert_detail<'e>(
        &self,
        conn: impl SqliteExecutor<'e>,
        complaint_id: i64,
        registration_id: i64,
        detail: &DetailRecord,
    ) -> DbResult<()> {
        match detail {
            DetailRecord::LotDispute(f) => insert_lot_dispute(conn, complaint_id, f).await,
            DetailRecord::BoundaryDispute(f) => insert_boundary_dispute(conn, complaint_id, f).await,
            DetailRecord::PathwayDispute(f) => insert_pathway_dispute(conn, complaint_id, f).await,
            DetailRecord::UnauthorizedOccupation(f) => {
                insert_unauthorized_occupation(conn, complaint_id, f).await
            }
            DetailRecord::Overlapping(f) => {
                insert_overlapping(conn, complaint_id, registration_id, f).await
            }
        }
    }

    pub async fn get(&self, complaint_id: i64) -> DbResult<Option<ComplaintEntity>> {
        Ok(sqlx::query_as::<_, ComplaintEntity>(
            "SELECT complaint_id, registration_id, type_of_complaint, date_received, status, \
             complaint_stage, priority_level, description, complainant_name, area_id, address \
             FROM complaints WHERE complaint_id = ?",
        )
        .bind(complaint_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Current stage and status, read through the given executor
    /// Current stage and status, read through a no-op write so the
    /// surrounding transaction holds the write lock from its first statement.
    pub async fn claim_stage<'e>(
        &self,
        conn: impl SqliteExecutor<'e>,
        complaint_id: i64,
    ) -> DbResult<Option<(String, String)>> {
        Ok(sqlx::query_as::<_, (String, String)>(
            "UPDATE complaints SET complaint_stage = complaint_stage WHERE complaint_id = ? \
             RETURNING complaint_stage, status",
        )
        .bind(complaint_id)
        .fetch_optional(conn)
        .await?)
    }

    pub async fn update_stage<'e>(
        &self,
        conn: impl SqliteExecutor<'e>,
        complaint_id: i64,
        stage: ComplaintStage,
        status: Option<ComplaintStatus>,
    ) -> DbResult<()> {
        match status {
            Some(status) => {
                sqlx::query(
                    "UPDATE complaints SET complaint_stage = ?, status = ? WHERE complaint_id = ?",
                )
                .bind(stage.as_str())
                .bind(status.as_str())
                .bind(complaint_id)
                .execute(conn)
                .await?;
            }
            None => {
                sqlx::query("UPDATE complaints SET complaint_stage = ? WHERE complaint_id = ?")
                    .bind(stage.as_str())
                    .bind(complaint_id)
                    .execute(conn)
                    .await?;
            }
        }
        Ok(())
    }

    /// User that filed the complaint (through its registration)
    pub async fn owner_of(&self, complaint_id: i64) -> DbResult<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT r.user_id FROM complaints c \
             JOIN registration r ON r.registration_id = c.registration_id \
             WHERE c.complaint_id = ?",
        )
        .bind(complaint_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(user_id,)| user_id))
    }

    /// Most recent Overlapping complaint filed under a registration
    pub async fn latest_overlapping(&self, registration_id: i64) -> DbResult<Option<ComplaintEntity>> {
        Ok(sqlx::query_as::<_, ComplaintEntity>(
            "SELECT c.complaint_id, c.registration_id, c.type_of_complaint, c.date_received, c.status, \
             c.complaint_stage, c.priority_level, c.description, c.complainant_name, c.area_id, c.address \
             FROM complaints c JOIN overlapping o ON o.complaint_id = c.complaint_id \
             WHERE o.registration_id = ? \
             ORDER BY c.date_received DESC, c.complaint_id DESC LIMIT 1",
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Questionnaire answers stored for a complaint
    pub async fn get_detail(
        &self,
        complaint_id: i64,
        complaint_type: ComplaintType,
    ) -> DbResult<Option<DetailRecord>> {
        let detail = match complaint_type {
            ComplaintType::LotDispute => {
                sqlx::query_as::<_, LotDisputeEntity>(
                    "SELECT complaint_id, q1, block_lot, q2, q3, q4, q5, q6, q7, q8, q9, q10, \
                     description, signature FROM lot_dispute WHERE complaint_id = ?",
                )
                .bind(complaint_id)
                .fetch_optional(&self.pool)
                .await?
                .map(|e| e.to_record().map(DetailRecord::LotDispute))
            }
            ComplaintType::BoundaryDispute => {
                sqlx::query_as::<_, BoundaryDisputeEntity>(
                    "SELECT complaint_id, q1, q2, q3, q4, q5, q5_1, q6, q7, q8, q9, q10, q10_1, q11, \
                     q12, q13, q14, q15, q15_1, other_parties, description, signature \
                     FROM boundary_dispute WHERE complaint_id = ?",
                )
                .bind(complaint_id)
                .fetch_optional(&self.pool)
                .await?
                .map(|e| e.to_record().map(DetailRecord::BoundaryDispute))
            }
            ComplaintType::PathwayDispute => {
                sqlx::query_as::<_, PathwayDisputeEntity>(
                    "SELECT complaint_id, block_lot, q1, q2, q3, q4, q5, q6, q7, q8, q9, q10, q11, \
                     q12, description, signature FROM pathway_dispute WHERE complaint_id = ?",
                )
                .bind(complaint_id)
                .fetch_optional(&self.pool)
                .await?
                .map(|e| e.to_record().map(DetailRecord::PathwayDispute))
            }
            ComplaintType::UnauthorizedOccupation => {
                sqlx::query_as::<_, UnauthorizedOccupationEntity>(
                    "SELECT complaint_id, block_lot, q1, q2, q3, q4, q5, q5a, q6, q6a, q7, q8, \
                     description, signature FROM unauthorized_occupation WHERE complaint_id = ?",
                )
                .bind(complaint_id)
                .fetch_optional(&self.pool)
                .await?
                .map(|e| e.to_record().map(DetailRecord::UnauthorizedOccupation))
            }
            ComplaintType::Overlapping => {
                sqlx::query_as::<_, OverlappingEntity>(
                    "SELECT complaint_id, registration_id, q1, q2, q3, q4, q5, q6, q7, q8, q9, q10, \
                     q11, q12, q13, description, signature FROM overlapping WHERE complaint_id = ?",
                )
                .bind(complaint_id)
                .fetch_optional(&self.pool)
                .await?
                .map(|e| e.to_record().map(DetailRecord::Overlapping))
            }
        };

        detail.transpose()
    }

    /// Number of questionnaire rows across all detail tables for a complaint
    pub async fn detail_row_count(&self, complaint_id: i64) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT \
             (SELECT COUNT(*) FROM lot_dispute WHERE complaint_id = ?1) + \
             (SELECT COUNT(*) FROM boundary_dispute WHERE complaint_id = ?1) + \
             (SELECT COUNT(*) FROM pathway_dispute WHERE complaint_id = ?1) + \
             (SELECT COUNT(*) FROM unauthorized_occupation WHERE complaint_id = ?1) + \
             (SELECT COUNT(*) FROM overlapping WHERE complaint_id = ?1)",
        )
        .bind(complaint_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

async fn insert_lot_dispute<'e>(
    conn: impl SqliteExecutor<'e>,
    complaint_id: i64,
    f: &LotDisputeForm,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO lot_dispute (complaint_id, q1, block_lot, q2, q3, q4, q5, q6, q7, q8, q9, q10, \
         description, signature) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(complaint_id)
    .bind(&f.q1)
    .bind(to_json_text(&f.block_lot)?)
    .bind(to_json_text(&f.q2)?)
    .bind(&f.q3)
    .bind(to_json_text(&f.q4)?)
    .bind(to_json_text(&f.q5)?)
    .bind(to_json_text(&f.q6)?)
    .bind(to_json_text(&f.q7)?)
    .bind(to_json_text(&f.q8)?)
    .bind(to_json_text(&f.q9)?)
    .bind(to_json_text(&f.q10)?)
    .bind(&f.description)
    .bind(&f.signature)
    .execute(conn)
    .await?;
    Ok(())
}

async fn insert_boundary_dispute<'e>(
    conn: impl SqliteExecutor<'e>,
    complaint_id: i64,
    f: &BoundaryDisputeForm,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO boundary_dispute (complaint_id, q1, q2, q3, q4, q5, q5_1, q6, q7, q8, q9, q10, \
         q10_1, q11, q12, q13, q14, q15, q15_1, other_parties, description, signature) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(complaint_id)
    .bind(to_json_text(&f.q1)?)
    .bind(&f.q2)
    .bind(&f.q3)
    .bind(&f.q4)
    .bind(&f.q5)
    .bind(&f.q5_1)
    .bind(to_json_text(&f.q6)?)
    .bind(to_json_text(&f.q7)?)
    .bind(&f.q8)
    .bind(to_json_text(&f.q9)?)
    .bind(&f.q10)
    .bind(to_json_text(&f.q10_1)?)
    .bind(&f.q11)
    .bind(to_json_text(&f.q12)?)
    .bind(to_json_text(&f.q13)?)
    .bind(&f.q14)
    .bind(&f.q15)
    .bind(to_json_text(&f.q15_1)?)
    .bind(to_json_text(&f.other_parties)?)
    .bind(&f.description)
    .bind(&f.signature)
    .execute(conn)
    .await?;
    Ok(())
}

async fn insert_pathway_dispute<'e>(
    conn: impl SqliteExecutor<'e>,
    complaint_id: i64,
    f: &PathwayDisputeForm,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO pathway_dispute (complaint_id, block_lot, q1, q2, q3, q4, q5, q6, q7, q8, q9, \
         q10, q11, q12, description, signature) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(complaint_id)
    .bind(to_json_text(&f.block_lot)?)
    .bind(&f.q1)
    .bind(&f.q2)
    .bind(&f.q3)
    .bind(&f.q4)
    .bind(to_json_text(&f.q5)?)
    .bind(&f.q6)
    .bind(&f.q7)
    .bind(to_json_text(&f.q8)?)
    .bind(to_json_text(&f.q9)?)
    .bind(&f.q10)
    .bind(to_json_text(&f.q11)?)
    .bind(&f.q12)
    .bind(&f.description)
    .bind(&f.signature)
    .execute(conn)
    .await?;
    Ok(())
}

async fn insert_unauthorized_occupation<'e>(
    conn: impl SqliteExecutor<'e>,
    complaint_id: i64,
    f: &UnauthorizedOccupationForm,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO unauthorized_occupation (complaint_id, block_lot, q1, q2, q3, q4, q5, q5a, q6, \
         q6a, q7, q8, description, signature) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(complaint_id)
    .bind(to_json_text(&f.block_lot)?)
    .bind(&f.q1)
    .bind(to_json_text(&f.q2)?)
    .bind(&f.q3)
    .bind(to_json_text(&f.q4)?)
    .bind(&f.q5)
    .bind(to_json_text(&f.q5a)?)
    .bind(&f.q6)
    .bind(to_json_text(&f.q6a)?)
    .bind(to_json_text(&f.q7)?)
    .bind(&f.q8)
    .bind(&f.description)
    .bind(&f.signature)
    .execute(conn)
    .await?;
    Ok(())
}

async fn insert_overlapping<'e>(
    conn: impl SqliteExecutor<'e>,
    complaint_id: i64,
    registration_id: i64,
    f: &OverlappingForm,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO overlapping (complaint_id, registration_id, q1, q2, q3, q4, q5, q6, q7, q8, q9, \
         q10, q11, q12, q13, description, signature) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(complaint_id)
    .bind(registration_id)
    .bind(&f.q1)
    .bind(to_json_text(&f.q2)?)
    .bind(&f.q3)
    .bind(to_json_text(&f.q4)?)
    .bind(to_json_text(&f.q5)?)
    .bind(&f.q6)
    .bind(&f.q7)
    .bind(&f.q8)
    .bind(to_json_text(&f.q9)?)
    .bind(&f.q10)
    .bind(&f.q11)
    .bind(&f.q12)
    .bind(&f.q13)
    .bind(&f.description)
    .bind(&f.signature)
    .execute(conn)
    .await?;
    Ok(())
}
