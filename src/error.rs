use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

// 请求级错误
// 缓存错误不在此列：缓存路径的错误一律记录日志后吞掉，绝不变成响应
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    MissingIds,
    FailedToFetchCoinList,
    FailedToFetchTrending,
    FailedToFetchHistorical,
    FailedToFetchPrices,
    FailedToFetchNews,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::MissingIds => (
                StatusCode::BAD_REQUEST,
                "Parameter 'ids' is required".to_string(),
            ),
            AppError::FailedToFetchCoinList => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch coin list".to_string(),
            ),
            AppError::FailedToFetchTrending => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch trending coins".to_string(),
            ),
            AppError::FailedToFetchHistorical => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch historical data".to_string(),
            ),
            AppError::FailedToFetchPrices => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch crypto prices".to_string(),
            ),
            AppError::FailedToFetchNews => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to fetch news".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}
