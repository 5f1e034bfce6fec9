use serde::Serialize;

/// `{ "data": T }`, the envelope every successful JSON body is wrapped in.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
