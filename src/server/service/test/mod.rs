use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{model::user::User, task::BackgroundTask};

mod comment;
mod registration;

fn as_user(model: entity::registration::Model) -> User {
    User::from_entity(model).unwrap()
}

/// Everything queued so far, without waiting.
fn drain(receiver: &mut UnboundedReceiver<BackgroundTask>) -> Vec<BackgroundTask> {
    let mut tasks = Vec::new();
    while let Ok(task) = receiver.try_recv() {
        tasks.push(task);
    }
    tasks
}
