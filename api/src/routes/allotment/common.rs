use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AllotmentRequest {
    pub batch_id: i64,
    pub teacher_id: i64,
}
