use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use gymlog_adapters::config::AllowedOrigins;
use gymlog_axum::routes::{authenticate, check_in, count_check_ins, register};
use gymlog_core::{CheckInStore, PasswordHasher, UserStore};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Main check-in service that provides all gym check-in routes
pub struct CheckInService {
    router: Router,
}

impl CheckInService {
    /// Create a new CheckInService with the provided stores and hasher
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `check_in_store` - Store for check-in records (must be Clone)
    /// * `hasher` - Password hashing primitive (must be Clone)
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal sharing (Arc or a connection
    /// pool). Each route is given exactly the state it needs.
    pub fn new<U, C, H>(user_store: U, check_in_store: C, hasher: H) -> Self
    where
        U: UserStore + Clone + 'static,
        C: CheckInStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let router = Router::new()
            // Registration needs the user store and the hasher
            .route("/users", post(register::<U, H>))
            .with_state((user_store.clone(), hasher.clone()))
            // Authentication needs user lookup and the hasher
            .route("/sessions", post(authenticate::<U, H>))
            .with_state((user_store.clone(), hasher))
            // Check-in needs the user store and the check-in store
            .route("/check-ins", post(check_in::<U, C>))
            .with_state((user_store, check_in_store.clone()))
            // The count metric only needs the check-in store
            .route(
                "/users/{user_id}/check-ins/count",
                get(count_check_ins::<C>),
            )
            .with_state(check_in_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a plain Router, optionally restricted by a
    /// CORS origin allowlist, with the request tracing layer applied.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the check-in service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Check-in service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
