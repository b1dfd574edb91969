use chrono::Utc;
use gymlog_core::{
    CheckIn, CheckInStore, CheckInStoreError, GymId, NewCheckIn, UserId, UserStore, UserStoreError,
};

/// Error types specific to the check-in use case
#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("User not found")]
    UserNotFound,
    #[error("Already checked in today")]
    AlreadyCheckedInToday,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Check-in store error: {0}")]
    CheckInStoreError(#[from] CheckInStoreError),
}

/// Check-in use case - records a gym visit
///
/// A user may check in at most once per UTC calendar day.
pub struct CheckInUseCase<U, C>
where
    U: UserStore,
    C: CheckInStore,
{
    users: U,
    check_ins: C,
}

impl<U, C> CheckInUseCase<U, C>
where
    U: UserStore,
    C: CheckInStore,
{
    pub fn new(users: U, check_ins: C) -> Self {
        Self { users, check_ins }
    }

    #[tracing::instrument(name = "CheckInUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId, gym_id: GymId) -> Result<CheckIn, CheckInError> {
        if self.users.find_by_id(&user_id).await?.is_none() {
            return Err(CheckInError::UserNotFound);
        }

        let today = Utc::now().date_naive();
        if self
            .check_ins
            .find_by_user_on_date(&user_id, today)
            .await?
            .is_some()
        {
            return Err(CheckInError::AlreadyCheckedInToday);
        }

        // The insert is the authoritative same-day guard; a check-in that
        // raced past the lookup above surfaces here as the same error.
        match self
            .check_ins
            .add_check_in(NewCheckIn { user_id, gym_id })
            .await
        {
            Ok(check_in) => Ok(check_in),
            Err(CheckInStoreError::AlreadyCheckedInToday) => {
                Err(CheckInError::AlreadyCheckedInToday)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use gymlog_core::{CheckInId, Email, NewUser, PasswordHashString, User, UserLookup};
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    #[derive(Default, Clone)]
    struct MockUserStore {
        users: Arc<RwLock<Vec<User>>>,
    }

    impl MockUserStore {
        async fn seed(&self) -> UserId {
            let user = User::new(
                UserId::new(),
                "John Doe".to_string(),
                Email::parse("johndoe@example.com").unwrap(),
                PasswordHashString::from("plain$123456".to_string()),
                Utc::now(),
            );
            let id = user.id();
            self.users.write().await.push(user);
            id
        }
    }

    #[async_trait::async_trait]
    impl UserLookup for MockUserStore {
        async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
            Ok(self
                .users
                .read()
                .await
                .iter()
                .find(|u| u.email() == email)
                .cloned())
        }
    }

    #[async_trait::async_trait]
    impl UserStore for MockUserStore {
        async fn add_user(&self, _new_user: NewUser) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
            Ok(self
                .users
                .read()
                .await
                .iter()
                .find(|u| u.id() == *id)
                .cloned())
        }
    }

    #[derive(Default, Clone)]
    struct MockCheckInStore {
        check_ins: Arc<RwLock<Vec<CheckIn>>>,
    }

    impl MockCheckInStore {
        async fn seed_on(&self, user_id: UserId, date: NaiveDate) {
            let created_at = date
                .and_hms_opt(8, 0, 0)
                .unwrap()
                .and_utc();
            self.check_ins.write().await.push(CheckIn::new(
                CheckInId::new(),
                user_id,
                GymId::from(Uuid::new_v4()),
                created_at,
            ));
        }
    }

    #[async_trait::async_trait]
    impl CheckInStore for MockCheckInStore {
        async fn add_check_in(
            &self,
            new_check_in: NewCheckIn,
        ) -> Result<CheckIn, CheckInStoreError> {
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
            // Simulated round-trip latency, wide enough for concurrent
            // callers to interleave between lookup and insert.
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;

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

    #[tokio::test]
    async fn records_a_check_in() {
        let users = MockUserStore::default();
        let user_id = users.seed().await;
        let gym_id = GymId::from(Uuid::new_v4());

        let use_case = CheckInUseCase::new(users, MockCheckInStore::default());

        let check_in = use_case.execute(user_id, gym_id).await.unwrap();

        assert_eq!(check_in.user_id(), user_id);
        assert_eq!(check_in.gym_id(), gym_id);
    }

    #[tokio::test]
    async fn rejects_unknown_user() {
        let use_case = CheckInUseCase::new(MockUserStore::default(), MockCheckInStore::default());

        let result = use_case
            .execute(UserId::new(), GymId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(CheckInError::UserNotFound)));
    }

    #[tokio::test]
    async fn rejects_second_check_in_on_the_same_day() {
        let users = MockUserStore::default();
        let user_id = users.seed().await;
        let gym_id = GymId::from(Uuid::new_v4());

        let use_case = CheckInUseCase::new(users, MockCheckInStore::default());

        use_case.execute(user_id, gym_id).await.unwrap();
        let result = use_case.execute(user_id, gym_id).await;

        assert!(matches!(result, Err(CheckInError::AlreadyCheckedInToday)));
    }

    #[tokio::test]
    async fn concurrent_same_day_check_ins_record_only_one_visit() {
        let users = MockUserStore::default();
        let user_id = users.seed().await;
        let check_ins = MockCheckInStore::default();

        let use_case = Arc::new(CheckInUseCase::new(users, check_ins.clone()));

        let first = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(user_id, GymId::from(Uuid::new_v4())).await }
        });
        let second = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(user_id, GymId::from(Uuid::new_v4())).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(CheckInError::AlreadyCheckedInToday)))
        );
        assert_eq!(check_ins.count_by_user(&user_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn allows_check_in_on_a_different_day() {
        let users = MockUserStore::default();
        let user_id = users.seed().await;
        let check_ins = MockCheckInStore::default();

        let yesterday = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .unwrap();
        check_ins.seed_on(user_id, yesterday).await;

        let use_case = CheckInUseCase::new(users, check_ins);

        let result = use_case
            .execute(user_id, GymId::from(Uuid::new_v4()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn same_day_rule_is_per_user() {
        let users = MockUserStore::default();
        let first = users.seed().await;
        let second = {
            let user = User::new(
                UserId::new(),
                "Jane Doe".to_string(),
                Email::parse("janedoe@example.com").unwrap(),
                PasswordHashString::from("plain$123456".to_string()),
                Utc::now(),
            );
            let id = user.id();
            users.users.write().await.push(user);
            id
        };
        let gym_id = GymId::from(Uuid::new_v4());

        let use_case = CheckInUseCase::new(users, MockCheckInStore::default());

        use_case.execute(first, gym_id).await.unwrap();
        let result = use_case.execute(second, gym_id).await;

        assert!(result.is_ok());
    }
}
