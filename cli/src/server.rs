#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{
            rejection::{FormRejection, QueryRejection},
            Form, Query,
        },
        http::StatusCode,
        response::{Html, IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use calc::{Operation, Response};
    use serde::Serialize;
    use std::net::SocketAddr;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{info, warn};

    const CALCULATOR_PAGE: &str = include_str!("../static/calculator.html");

    type ApiError = (StatusCode, Json<ErrorResponse>);

    /// Raw `name=value` pairs, in the order they were sent. Names may repeat.
    type Pairs = Vec<(String, String)>;

    /// Request parameters for `/calculate`, from the query string or a form body.
    /// Everything is kept as text so missing and malformed values can be told apart.
    #[derive(Debug, Default)]
    struct CalculateParams {
        num1: Option<String>,
        num2: Option<String>,
        operation: Option<String>,
    }

    impl CalculateParams {
        /// Collect the known parameters. A repeated name keeps its first value.
        fn from_pairs(pairs: Pairs) -> CalculateParams {
            let mut params = CalculateParams::default();
            for (name, value) in pairs {
                let slot = match name.as_str() {
                    "num1" => &mut params.num1,
                    "num2" => &mut params.num2,
                    "operation" => &mut params.operation,
                    _ => continue,
                };
                if slot.is_none() {
                    *slot = Some(value);
                }
            }
            params
        }

        /// Fill gaps in `self` with values from `other`
        fn or(self, other: CalculateParams) -> CalculateParams {
            CalculateParams {
                num1: self.num1.or(other.num1),
                num2: self.num2.or(other.num2),
                operation: self.operation.or(other.operation),
            }
        }
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub fn router() -> Router {
        Router::new()
            .route("/", get(index))
            .route("/health", get(health_check))
            .route("/calculate", post(calculate))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    pub async fn start_server(host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "calc=info,tower_http=info".into()),
            )
            .init();

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Calculator server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router()).await?;

        Ok(())
    }

    async fn index() -> Html<&'static str> {
        Html(CALCULATOR_PAGE)
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "calc",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn calculate(
        query: Result<Query<Pairs>, QueryRejection>,
        form: Result<Form<Pairs>, FormRejection>,
    ) -> Result<Json<Response>, ApiError> {
        let Query(query) = query.map_err(|e| bad_request(e.body_text()))?;
        let query = CalculateParams::from_pairs(query);

        let params = match form {
            Ok(Form(body)) => CalculateParams::from_pairs(body).or(query),
            // No form body; the query string carries everything
            Err(FormRejection::InvalidFormContentType(_)) => query,
            Err(e) => return Err(bad_request(e.body_text())),
        };

        let num1 = parse_operand("num1", params.num1)?;
        let num2 = parse_operand("num2", params.num2)?;
        let operation = Operation::from(required("operation", params.operation)?);

        let outcome = calc::guard(|| operation.apply(num1, num2));

        match &outcome {
            Ok(result) => info!("Calculated {} {} {} = {}", num1, operation, num2, result),
            Err(e) if e.is_domain_error() => {
                info!("Calculation {} {} {} failed: {}", num1, operation, num2, e)
            }
            Err(e) => warn!("Calculation {} {} {} faulted: {}", num1, operation, num2, e),
        }

        Ok(Json(Response::from(outcome)))
    }

    fn required(name: &str, value: Option<String>) -> Result<String, ApiError> {
        value.ok_or_else(|| {
            bad_request(format!("Required parameter '{}' is not present", name))
        })
    }

    fn parse_operand(name: &str, value: Option<String>) -> Result<f64, ApiError> {
        let raw = required(name, value)?;
        raw.trim().parse::<f64>().map_err(|_| {
            bad_request(format!(
                "Parameter '{}' must be a number, got '{}'",
                name, raw
            ))
        })
    }

    fn bad_request(error: String) -> ApiError {
        warn!("Rejected calculation request: {}", error);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(_host: &str, _port: u16) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
