//! Application services for board orchestration.

mod board;
mod requests;
mod sync;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
pub use requests::CreateTaskRequest;
pub use sync::{load_all, save_all};
