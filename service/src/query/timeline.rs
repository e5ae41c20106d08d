//! [`Query`] of the [`Task`] timeline.
//!
//! [`Task`]: crate::domain::tender::Task

use std::time::Duration;

use common::{
    operations::{All, By, Select},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{tender, Tender},
    infra::{store, Store},
    read::timeline::{Chart, Span},
    Service,
};
#[cfg(doc)]
use crate::domain::tender::Task;

use super::Query;

/// [`Query`] laying out [`Task`]s on a [`Chart`].
///
/// Every [`Task`] spans from its assignment moment (or the owning
/// [`Tender`]'s planned start, while unassigned) to its due date. The
/// [`Chart::origin`] is the earliest moment any [`Span`] touches, and all
/// offsets are measured from it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timeline {
    /// ID of a single [`Tender`] to lay out, or [`None`] for all of them.
    pub tender: Option<tender::Id>,
}

impl<Db, Ai> Query<Timeline> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Vec<Tender>, All>>,
            Ok = Vec<Tender>,
            Err = Traced<store::Error>,
        >,
{
    type Ok = Chart;
    type Err = Traced<store::Error>;

    async fn execute(&self, query: Timeline) -> Result<Self::Ok, Self::Err> {
        let Timeline { tender } = query;

        let tenders: Vec<Tender> = self
            .store()
            .execute(Select(By::<Vec<Tender>, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        let bars: Vec<(DateTime, DateTime, Span)> = tenders
            .into_iter()
            .filter(|t| tender.is_none_or(|id| t.id == id))
            .flat_map(|t| {
                let tender_id = t.id;
                let tender_title = t.title.clone();
                let planned_start: DateTime = t.start_date.coerce();
                t.tasks
                    .into_iter()
                    .map(move |task| {
                        let start = task
                            .assigned_at
                            .map_or(planned_start, |at| at.coerce());
                        let due: DateTime = task.due_date.coerce();
                        (
                            start,
                            due,
                            Span {
                                tender_id,
                                tender_title: tender_title.clone(),
                                task_id: task.id,
                                title: task.title,
                                status: task.status,
                                offset: Duration::ZERO,
                                length: Duration::ZERO,
                            },
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let origin = bars
            .iter()
            .flat_map(|(start, due, _)| [*start, *due])
            .min();
        let Some(origin) = origin else {
            return Ok(Chart::default());
        };

        let spans = bars
            .into_iter()
            .map(|(start, due, mut span)| {
                span.offset = start.saturating_since(origin);
                span.length = due.saturating_since(start);
                span
            })
            .collect();

        Ok(Chart {
            origin: Some(origin),
            spans,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::operations::{All, By, Select};

    use crate::{
        domain::Tender,
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };

    use super::{Query as _, Timeline};

    async fn service() -> (Service<InMemory, assistant::Static>, Vec<Tender>)
    {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let assistant =
            assistant::Static(Err(assistant::Error("unused".into())));
        (Service::new(store, assistant), tenders)
    }

    #[tokio::test]
    async fn origin_is_the_earliest_touched_moment() {
        let (service, tenders) = service().await;

        let chart = service.execute(Timeline::default()).await.unwrap();

        let total: usize = tenders.iter().map(|t| t.tasks.len()).sum();
        assert_eq!(chart.spans.len(), total);
        // Unassigned tasks start at their tender's planned start, so the
        // earliest planned start wins over any assignment or due date.
        let earliest = tenders
            .iter()
            .flat_map(|t| {
                t.tasks.iter().map(|task| {
                    task.assigned_at
                        .map_or(t.start_date.coerce(), |at| at.coerce())
                })
            })
            .min()
            .unwrap();
        assert_eq!(chart.origin, Some(earliest));
        assert!(chart
            .spans
            .iter()
            .any(|s| s.offset == Duration::ZERO));
    }

    #[tokio::test]
    async fn single_tender_chart_ignores_the_rest() {
        let (service, tenders) = service().await;

        let chart = service
            .execute(Timeline {
                tender: Some(tenders[0].id),
            })
            .await
            .unwrap();

        assert_eq!(chart.spans.len(), tenders[0].tasks.len());
        assert!(chart
            .spans
            .iter()
            .all(|s| s.tender_id == tenders[0].id));
    }

    #[tokio::test]
    async fn empty_selection_has_no_origin() {
        let (service, _) = service().await;

        let chart = service
            .execute(Timeline {
                tender: Some(crate::domain::tender::Id::new()),
            })
            .await
            .unwrap();

        assert_eq!(chart.origin, None);
        assert!(chart.spans.is_empty());
    }
}
