//! Registration repository

use chrono::{DateTime, Utc};
use reklamap_core::types::{RegistrationCategory, RegistrationForm};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::entities::{format_timestamp, RegistrationEntity};
use crate::error::DbResult;

pub struct RegistrationRepo {
    pool: SqlitePool,
}

impl RegistrationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a registration and return its id
    pub async fn insert<'e>(
        &self,
        conn: impl SqliteExecutor<'e>,
        user_id: &str,
        category: RegistrationCategory,
        form: &RegistrationForm,
        created_at: DateTime<Utc>,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO registration (user_id, beneficiary_id, category, first_name, middle_name, \
             last_name, suffix, date_of_birth, sex, citizenship, age, phone_number, year_of_residence, \
             civil_status, current_address, hoa, block_no, lot_no, lot_size, \
             recipient_of_other_housing, signature_path, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(form.beneficiary_id)
        .bind(category.as_str())
        .bind(form.first_name.trim())
        .bind(&form.middle_name)
        .bind(form.last_name.trim())
        .bind(&form.suffix)
        .bind(&form.date_of_birth)
        .bind(&form.sex)
        .bind(&form.citizenship)
        .bind(form.age)
        .bind(&form.phone_number)
        .bind(form.year_of_residence)
        .bind(&form.civil_status)
        .bind(&form.current_address)
        .bind(&form.hoa)
        .bind(&form.block_no)
        .bind(&form.lot_no)
        .bind(&form.lot_size)
        .bind(&form.recipient_of_other_housing)
        .bind(&form.signature_path)
        .bind(format_timestamp(created_at))
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, registration_id: i64) -> DbResult<Option<RegistrationEntity>> {
        Ok(sqlx::query_as::<_, RegistrationEntity>(
            "SELECT * FROM registration WHERE registration_id = ?",
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn list_by_user(&self, user_id: &str) -> DbResult<Vec<RegistrationEntity>> {
        Ok(sqlx::query_as::<_, RegistrationEntity>(
            "SELECT * FROM registration WHERE user_id = ? ORDER BY registration_id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
