pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskListResponse, TaskPatch};
pub use user::{User, UserProfile};
