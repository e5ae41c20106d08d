//! Timeline read model of [`Task`]s.
//!
//! [`Task`]: crate::domain::tender::Task

use std::time::Duration;

use common::DateTime;

use crate::domain::tender::{self, task};
#[cfg(doc)]
use crate::domain::{tender::Task, Tender};

/// Timeline of [`Task`]s laid out against a common origin.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    /// Earliest moment any [`Span`] touches.
    ///
    /// [`None`] if there are no [`Span`]s.
    pub origin: Option<DateTime>,

    /// [`Span`]s of this [`Chart`], in the owning [`Tender`]s' order.
    pub spans: Vec<Span>,
}

/// Single [`Task`] bar of a [`Chart`].
#[derive(Clone, Debug)]
pub struct Span {
    /// ID of the [`Tender`] owning the [`Task`].
    pub tender_id: tender::Id,

    /// Title of the [`Tender`] owning the [`Task`].
    pub tender_title: tender::Title,

    /// ID of the [`Task`].
    pub task_id: task::Id,

    /// Title of the [`Task`].
    pub title: task::Title,

    /// [`task::Status`] of the [`Task`].
    pub status: task::Status,

    /// Offset of the bar from the [`Chart::origin`].
    pub offset: Duration,

    /// Length of the bar.
    ///
    /// Zero if the [`Task`] is due before it starts.
    pub length: Duration,
}
