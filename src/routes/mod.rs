pub(crate) mod advisory;
pub(crate) mod health;
