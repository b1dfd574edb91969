use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use gymlog_core::{CheckIn, CheckInId, CheckInStore, CheckInStoreError, NewCheckIn, UserId};

/// In-memory check-in store. `Clone` shares the same backing list.
#[derive(Default, Clone)]
pub struct InMemoryCheckInStore {
    check_ins: Arc<RwLock<Vec<CheckIn>>>,
}

impl InMemoryCheckInStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CheckInStore for InMemoryCheckInStore {
    async fn add_check_in(&self, new_check_in: NewCheckIn) -> Result<CheckIn, CheckInStoreError> {
        // The same-day scan and the insert happen under one write lock so
        // concurrent check-ins cannot both pass the scan.
        let mut check_ins = self.check_ins.write().await;

        let created_at = Utc::now();
        let today = created_at.date_naive();
        if check_ins
            .iter()
            .any(|c| c.user_id() == new_check_in.user_id && c.created_at().date_naive() == today)
        {
            return Err(CheckInStoreError::AlreadyCheckedInToday);
        }

        let check_in = CheckIn::new(
            CheckInId::new(),
            new_check_in.user_id,
            new_check_in.gym_id,
            created_at,
        );
        check_ins.push(check_in.clone());
        Ok(check_in)
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInStoreError> {
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .find(|c| c.user_id() == *user_id && c.created_at().date_naive() == date)
            .cloned())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, CheckInStoreError> {
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .filter(|c| c.user_id() == *user_id)
            .count() as u64)
    }
}
