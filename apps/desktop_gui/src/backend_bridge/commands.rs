//! Backend commands queued from UI to backend worker.

use shared::domain::RequestVariant;

pub enum BackendCommand {
    GenerateTitle { variant: RequestVariant },
}
