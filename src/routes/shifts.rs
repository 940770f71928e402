use crate::{
    errors::AppError,
    repositories::shifts,
    state::AppState,
    structs::shifts::{Shift, ShiftPayload},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_shifts).post(create_shift))
        .route(
            "/{id}",
            get(get_shift).put(update_shift).delete(delete_shift),
        )
        .fallback(invalid_shift_path)
}

/// 取 shifts 清單
async fn get_shifts(State(state): State<AppState>) -> Result<Json<Vec<Shift>>, AppError> {
    let shifts = shifts::get_shifts(&state).await;

    Ok(Json(shifts))
}

async fn create_shift(
    State(state): State<AppState>,
    payload: Result<Json<ShiftPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Shift>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::InvalidJson)?;
    let start_time = payload.parse_start_time()?;
    let end_time = payload.parse_end_time()?;

    let shift = shifts::insert_shift(&state, payload.employee, start_time, end_time).await;
    tracing::debug!("created shift {}", shift.id);

    Ok((StatusCode::CREATED, Json(shift)))
}

/// 取單筆 shift
async fn get_shift(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Shift>, AppError> {
    let id = validate_id(id)?;
    let shift = shifts::get_shift_by_id(&state, id).await?;

    Ok(Json(shift))
}

async fn update_shift(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ShiftPayload>, JsonRejection>,
) -> Result<Json<Shift>, AppError> {
    let id = validate_id(id)?;
    let Json(payload) = payload.map_err(|_| AppError::InvalidJson)?;
    let start_time = payload.parse_start_time()?;
    let end_time = payload.parse_end_time()?;

    let shift = shifts::update_shift(&state, id, payload.employee, start_time, end_time).await?;

    Ok(Json(shift))
}

async fn delete_shift(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = validate_id(id)?;
    shifts::delete_shift(&state, id).await?;
    tracing::debug!("deleted shift {}", id);

    Ok(StatusCode::NO_CONTENT)
}

// id 必須是正整數, 解析不了或 <= 0 都回 400
fn validate_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    let Path(id) = id.map_err(|_| AppError::InvalidShiftId)?;
    if id <= 0 {
        return Err(AppError::InvalidShiftId);
    }

    Ok(id)
}

// /shifts 底下多出來的 path 段也當成壞掉的 id
async fn invalid_shift_path() -> AppError {
    AppError::InvalidShiftId
}
