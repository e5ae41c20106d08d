//! [`Query`] of [`Task`]s across all [`Tender`]s.
//!
//! [`Task`]: crate::domain::tender::Task

use std::{cmp::Ordering, collections::HashMap};

use common::{
    operations::{All, By, Select},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{employee, Employee, Tender},
    infra::{store, Store},
    read::task::list::{Direction, Filter, SortKey, Sorting, Summary},
    Service,
};

use super::Query;

/// [`Query`] listing [`Task`]s of every [`Tender`] as flat [`Summary`]
/// rows, filtered and ordered.
///
/// The ordering is stable: rows equal by the sort key keep their relative
/// [`Tender`]-then-[`Task`] order.
///
/// [`Task`]: crate::domain::tender::Task
#[derive(Clone, Copy, Debug, Default)]
pub struct Tasks {
    /// [`Filter`] to apply to the listing.
    pub filter: Filter,

    /// [`Sorting`] to apply to the listing.
    pub sorting: Sorting,
}

impl<Db, Ai> Query<Tasks> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Vec<Tender>, All>>,
            Ok = Vec<Tender>,
            Err = Traced<store::Error>,
        > + Store<
            Select<By<Vec<Employee>, All>>,
            Ok = Vec<Employee>,
            Err = Traced<store::Error>,
        >,
{
    type Ok = Vec<Summary>;
    type Err = Traced<store::Error>;

    async fn execute(&self, query: Tasks) -> Result<Self::Ok, Self::Err> {
        let Tasks { filter, sorting } = query;

        let tenders: Vec<Tender> = self
            .store()
            .execute(Select(By::<Vec<Tender>, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;
        let names: HashMap<employee::Id, employee::Name> = self
            .store()
            .execute(Select(By::<Vec<Employee>, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();

        let now = DateTime::now();
        let names = &names;
        let mut rows: Vec<Summary> = tenders
            .into_iter()
            .flat_map(|tender| {
                let tender_id = tender.id;
                let tender_title = tender.title.clone();
                tender
                    .tasks
                    .into_iter()
                    .filter(|task| filter.matches(task))
                    .map(move |task| Summary {
                        tender_id,
                        tender_title: tender_title.clone(),
                        assignee: task
                            .assigned_to
                            .and_then(|id| names.get(&id).cloned()),
                        overdue: task.is_overdue(now),
                        task,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        rows.sort_by(|a, b| {
            let ord = match sorting.key {
                SortKey::Title => a.task.title.cmp(&b.task.title),
                SortKey::TenderTitle => {
                    a.tender_title.cmp(&b.tender_title)
                }
                SortKey::DueDate => a.task.due_date.cmp(&b.task.due_date),
                SortKey::Assignee => {
                    match (a.assignee.as_ref(), b.assignee.as_ref()) {
                        (Some(x), Some(y)) => x.cmp(y),
                        // Unassigned rows go last in ascending order.
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                }
                SortKey::Status => {
                    a.task.status.u8().cmp(&b.task.status.u8())
                }
            };
            match sorting.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });

        Ok(rows)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::tender::task,
        infra::{assistant, store::InMemory},
        read::task::list::{
            AssigneeFilter, Filter, SortKey, Sorting, StatusFilter,
        },
        Service,
    };

    use super::{Query as _, Tasks};

    fn service() -> Service<InMemory, assistant::Static> {
        Service::new(
            InMemory::seeded(),
            assistant::Static(Err(assistant::Error("unused".into()))),
        )
    }

    #[tokio::test]
    async fn filters_combine_status_and_assignee() {
        let service = service();

        let unassigned = service
            .execute(Tasks {
                filter: Filter {
                    status: StatusFilter::Any,
                    assignee: AssigneeFilter::Unassigned,
                },
                sorting: Sorting::default(),
            })
            .await
            .unwrap();
        assert_eq!(unassigned.len(), 3);
        assert!(unassigned.iter().all(|r| r.assignee.is_none()));

        let done = service
            .execute(Tasks {
                filter: Filter {
                    status: StatusFilter::Is(task::Status::Done),
                    assignee: AssigneeFilter::Any,
                },
                sorting: Sorting::default(),
            })
            .await
            .unwrap();
        assert_eq!(done.len(), 1);

        let done_unassigned = service
            .execute(Tasks {
                filter: Filter {
                    status: StatusFilter::Is(task::Status::Done),
                    assignee: AssigneeFilter::Unassigned,
                },
                sorting: Sorting::default(),
            })
            .await
            .unwrap();
        assert!(done_unassigned.is_empty());
    }

    #[tokio::test]
    async fn unassigned_rows_sort_last_by_assignee() {
        let service = service();

        let rows = service
            .execute(Tasks {
                filter: Filter::default(),
                sorting: Sorting::default().toggled(SortKey::Assignee),
            })
            .await
            .unwrap();

        let first_unassigned = rows
            .iter()
            .position(|r| r.assignee.is_none())
            .unwrap();
        assert!(rows[first_unassigned..]
            .iter()
            .all(|r| r.assignee.is_none()));
        assert!(rows[..first_unassigned]
            .iter()
            .all(|r| r.assignee.is_some()));
    }

    #[tokio::test]
    async fn due_date_ordering_flips_with_direction() {
        let service = service();

        let asc = service
            .execute(Tasks {
                filter: Filter::default(),
                sorting: Sorting::default(),
            })
            .await
            .unwrap();
        assert!(asc
            .windows(2)
            .all(|w| w[0].task.due_date <= w[1].task.due_date));

        let desc = service
            .execute(Tasks {
                filter: Filter::default(),
                sorting: Sorting::default().toggled(SortKey::DueDate),
            })
            .await
            .unwrap();
        assert!(desc
            .windows(2)
            .all(|w| w[0].task.due_date >= w[1].task.due_date));
        assert_eq!(asc.len(), desc.len());
    }

    #[tokio::test]
    async fn overdue_rows_are_flagged() {
        let service = service();

        let rows = service
            .execute(Tasks::default())
            .await
            .unwrap();

        // The only task due in the past is already done.
        assert!(rows.iter().all(|r| !r.overdue));
    }
}
