use uuid::Uuid;

/// Source of order and dish identifiers. Identifiers must be unique for the
/// lifetime of the process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random identifiers: 32 lowercase hex characters (v4 UUID, simple form).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
