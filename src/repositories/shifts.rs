use crate::{errors::AppError, state::AppState, structs::shifts::Shift};
use chrono::{DateTime, FixedOffset};

pub async fn get_shifts(state: &AppState) -> Vec<Shift> {
    state.get_store().read().await.shifts.clone()
}

pub async fn insert_shift(
    state: &AppState,
    employee: String,
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
) -> Shift {
    let mut store = state.get_store().write().await;

    let shift = Shift {
        id: store.next_id,
        employee,
        start_time,
        end_time,
    };
    store.next_id += 1;
    store.shifts.push(shift.clone());

    shift
}

pub async fn get_shift_by_id(state: &AppState, id: i64) -> Result<Shift, AppError> {
    let store = state.get_store().read().await;

    store
        .shifts
        .iter()
        .find(|shift| shift.id == id)
        .cloned()
        .ok_or(AppError::ShiftNotFound(id))
}

/// 整筆覆蓋可變欄位, id 不動
pub async fn update_shift(
    state: &AppState,
    id: i64,
    employee: String,
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
) -> Result<Shift, AppError> {
    let mut store = state.get_store().write().await;

    let shift = store
        .shifts
        .iter_mut()
        .find(|shift| shift.id == id)
        .ok_or(AppError::ShiftNotFound(id))?;

    shift.employee = employee;
    shift.start_time = start_time;
    shift.end_time = end_time;

    Ok(shift.clone())
}

pub async fn delete_shift(state: &AppState, id: i64) -> Result<(), AppError> {
    let mut store = state.get_store().write().await;

    let index = store
        .shifts
        .iter()
        .position(|shift| shift.id == id)
        .ok_or(AppError::ShiftNotFound(id))?;
    store.shifts.remove(index);

    Ok(())
}
