use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use gymlog_core::{
    CheckIn, CheckInId, CheckInStore, CheckInStoreError, GymId, NewCheckIn, UserId,
};

/// PostgreSQL-backed check-in store. The once-per-day rule is enforced by
/// the unique index over `(user_id, UTC day of created_at)`.
#[derive(Clone)]
pub struct PostgresCheckInStore {
    pool: PgPool,
}

const USER_DAY_CONSTRAINT: &str = "check_ins_user_id_utc_day_key";

impl PostgresCheckInStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresCheckInStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CheckInRow {
    id: Uuid,
    user_id: Uuid,
    gym_id: Uuid,
    created_at: DateTime<Utc>,
}

impl CheckInRow {
    fn into_check_in(self) -> CheckIn {
        CheckIn::new(
            CheckInId::from(self.id),
            UserId::from(self.user_id),
            GymId::from(self.gym_id),
            self.created_at,
        )
    }
}

#[async_trait::async_trait]
impl CheckInStore for PostgresCheckInStore {
    #[tracing::instrument(name = "Adding check-in to PostgreSQL", skip_all)]
    async fn add_check_in(&self, new_check_in: NewCheckIn) -> Result<CheckIn, CheckInStoreError> {
        let id = CheckInId::new();
        let created_at = Utc::now();

        sqlx::query(
            r#"
                INSERT INTO check_ins (id, user_id, gym_id, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(new_check_in.user_id.as_uuid())
        .bind(new_check_in.gym_id.as_uuid())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint() == Some(USER_DAY_CONSTRAINT) {
                    return CheckInStoreError::AlreadyCheckedInToday;
                }
            }
            CheckInStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(CheckIn::new(
            id,
            new_check_in.user_id,
            new_check_in.gym_id,
            created_at,
        ))
    }

    #[tracing::instrument(name = "Looking up same-day check-in in PostgreSQL", skip_all)]
    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInStoreError> {
        // Day bounds are computed in UTC; created_at is stored as timestamptz.
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Duration::days(1);

        let row = sqlx::query_as::<_, CheckInRow>(
            r#"
                SELECT id, user_id, gym_id, created_at
                FROM check_ins
                WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
                LIMIT 1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(day_start)
        .bind(day_end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CheckInStoreError::UnexpectedError(e.to_string()))?;

        Ok(row.map(CheckInRow::into_check_in))
    }

    #[tracing::instrument(name = "Counting check-ins in PostgreSQL", skip_all)]
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, CheckInStoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM check_ins
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CheckInStoreError::UnexpectedError(e.to_string()))?;

        Ok(count as u64)
    }
}
