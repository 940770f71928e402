use crate::structs::shifts::Shift;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 純 in-memory 的資料層, 重啟後歸零
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ShiftStore>>,
}

pub struct ShiftStore {
    pub shifts: Vec<Shift>,
    // id 從 1 開始遞增, 刪除後不重用
    pub next_id: i64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ShiftStore {
                shifts: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub fn get_store(&self) -> &RwLock<ShiftStore> {
        &self.store
    }
}
