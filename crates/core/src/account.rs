//! Account: a named owner of samples.

use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// A registered account together with the samples it owns.
///
/// The JSON shape (field names, embedded `samples` list) is the wire format
/// of the HTTP API, so the fields are serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub samples: Vec<Sample>,
}

/// Payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
}
