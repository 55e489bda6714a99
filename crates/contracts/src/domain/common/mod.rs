//! Traits shared by the entities that have a list page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::shared::error::AppError;

/// A record that can be listed, filtered and sorted by the generic list page.
pub trait ListEntity: Clone {
    /// Identity used in `PUT`/`DELETE` paths.
    fn identity(&self) -> Option<&str>;

    fn customer_name(&self) -> &str;

    /// Value matched by the page's categorical filter.
    fn category(&self) -> Option<&str>;

    fn order_date(&self) -> Option<NaiveDate>;

    /// Recompute presentation-only fields. Called once per fetch.
    fn derive(&mut self, _today: NaiveDate) {}
}

/// Text-based edit form for a [`ListEntity`].
pub trait EntityForm: Clone + Default {
    type Record: ListEntity;
    type Payload: Serialize;

    /// Empty form for "add"; only the order date is pre-filled.
    fn blank(today: NaiveDate) -> Self;

    /// Form pre-populated for "edit".
    fn from_record(record: &Self::Record) -> Self;

    /// Coerce the text fields into the request body.
    ///
    /// Returns [`AppError::Validation`] when the form must not be sent.
    fn to_payload(&self) -> Result<Self::Payload, AppError>;
}

/// What a form submission turns into on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest<P> {
    Create(P),
    Update { id: String, payload: P },
}

impl<P> SubmitRequest<P> {
    pub fn payload(&self) -> &P {
        match self {
            SubmitRequest::Create(payload) | SubmitRequest::Update { payload, .. } => payload,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, SubmitRequest::Update { .. })
    }
}
