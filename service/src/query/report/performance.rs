//! [`Performance`] definition.

use std::{collections::HashMap, ops::RangeInclusive};

use common::{
    operations::{All, By, Select},
    Percent,
};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{
        employee,
        tender::{task, Task},
        Employee, Tender,
    },
    infra::{store, Store},
    Query, Service,
};

/// [`Query`] to calculate per-[`Employee`] performance over completed
/// [`Task`]s.
///
/// Only [`task::Status::Done`] [`Task`]s attributed to their current
/// assignee count, optionally narrowed to a completion period. Every
/// [`Employee`] gets a [`Row`], with zeroes when nothing was completed.
#[derive(Clone, Debug, Default)]
pub struct Performance {
    /// Completion period to narrow the calculation to, inclusive on both
    /// ends.
    pub period: Option<RangeInclusive<task::CompletionDateTime>>,
}

/// Output of the [`Performance`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Rows of the report, ordered by on-time rate (highest first), then
    /// by completed count (highest first), then by [`Employee`] name.
    pub rows: Vec<Row>,

    /// [`Totals`] over all the [`Row`]s.
    pub totals: Totals,
}

/// Row in the [`Output`] of the [`Performance`] [`Query`].
#[derive(Clone, Debug)]
pub struct Row {
    /// [`Employee`] the row is calculated for.
    pub employee: Employee,

    /// Number of completed [`Task`]s.
    pub completed: u32,

    /// Number of completed [`Task`]s finished on or before their due day.
    pub on_time: u32,

    /// Number of completed [`Task`]s finished after their due day.
    pub late: u32,

    /// Share of on-time completions, `0` when nothing was completed.
    pub on_time_rate: Percent,

    /// Whole days from assignment to due date, summed over the completed
    /// [`Task`]s.
    pub days_assigned: u32,

    /// Whole days from assignment to completion, summed over the completed
    /// [`Task`]s.
    pub days_taken: u32,
}

/// Totals over all the [`Row`]s of an [`Output`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Totals {
    /// Total number of completed [`Task`]s.
    ///
    /// [`Task`]: Task
    pub completed: u32,

    /// Total number of on-time completions.
    pub on_time: u32,

    /// Total number of late completions.
    pub late: u32,

    /// Overall share of on-time completions.
    pub on_time_rate: Percent,
}

impl<Db, Ai> Query<Performance> for Service<Db, Ai>
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
    type Ok = Output;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Performance { period }: Performance,
    ) -> Result<Self::Ok, Self::Err> {
        let tenders: Vec<Tender> = self
            .store()
            .execute(Select(By::<Vec<Tender>, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;
        let employees: Vec<Employee> = self
            .store()
            .execute(Select(By::<Vec<Employee>, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        let completed: HashMap<employee::Id, Vec<&Task>> = tenders
            .iter()
            .flat_map(|t| &t.tasks)
            .filter(|t| {
                t.status == task::Status::Done
                    && t.completed_at.is_some_and(|at| {
                        period.as_ref().is_none_or(|p| p.contains(&at))
                    })
            })
            .filter_map(|t| t.assigned_to.map(|id| (id, t)))
            .into_group_map();

        let mut rows: Vec<Row> = employees
            .into_iter()
            .map(|employee| {
                let tasks = completed.get(&employee.id);
                let total =
                    u32::try_from(tasks.map_or(0, Vec::len)).unwrap_or(0);
                let on_time = tasks
                    .into_iter()
                    .flatten()
                    .filter(|t| t.completed_on_time())
                    .count();
                let on_time = u32::try_from(on_time).unwrap_or(0);
                let (days_assigned, days_taken) = tasks
                    .into_iter()
                    .flatten()
                    .fold((0, 0), |(assigned, taken), t| {
                        let Some(at) = t.assigned_at else {
                            return (assigned, taken);
                        };
                        (
                            assigned + at.days_until(t.due_date),
                            taken
                                + t.completed_at
                                    .map_or(0, |done| at.days_until(done)),
                        )
                    });
                Row {
                    employee,
                    completed: total,
                    on_time,
                    late: total - on_time,
                    on_time_rate: Percent::ratio(on_time, total),
                    days_assigned,
                    days_taken,
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            b.on_time_rate
                .cmp(&a.on_time_rate)
                .then(b.completed.cmp(&a.completed))
                .then(a.employee.name.cmp(&b.employee.name))
        });

        let totals = {
            let completed = rows.iter().map(|r| r.completed).sum();
            let on_time = rows.iter().map(|r| r.on_time).sum();
            Totals {
                completed,
                on_time,
                late: completed - on_time,
                on_time_rate: Percent::ratio(on_time, completed),
            }
        };

        Ok(Output { rows, totals })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;

    use crate::{
        command::{AddTask, CreateEmployee, CreateTender, UpdateTaskStatus},
        domain::{employee, tender::task, Employee, Tender},
        infra::{assistant, store::InMemory},
        Command as _, Query as _, Service,
    };

    use super::Performance;

    const DAY: Duration = Duration::from_secs(86_400);

    fn service() -> Service<InMemory, assistant::Static> {
        Service::new(
            InMemory::new(),
            assistant::Static(Err(assistant::Error("unused".into()))),
        )
    }

    async fn employee(
        service: &Service<InMemory, assistant::Static>,
        name: &str,
        code: &str,
    ) -> Employee {
        service
            .execute(CreateEmployee {
                name: name.parse().unwrap(),
                code: code.parse().unwrap(),
                job_title: "Engineer".parse().unwrap(),
                status: employee::Status::Active,
            })
            .await
            .unwrap()
    }

    /// Seeds a tender with 3 tasks completed by `worker`: 2 due in the
    /// future (on time) and 1 overdue (late).
    async fn seed_completed(
        service: &Service<InMemory, assistant::Static>,
        worker: employee::Id,
    ) -> Tender {
        let tender = service
            .execute(CreateTender {
                title: "Warehouse Extension".parse().unwrap(),
                client: "Acme Logistics".parse().unwrap(),
                start_date: DateTime::now().coerce(),
                end_date: (DateTime::now() + 30 * DAY).coerce(),
            })
            .await
            .unwrap();

        let now = DateTime::now();
        for (title, due) in [
            ("Site survey", now + DAY),
            ("Permit filing", now + 2 * DAY),
            ("Soil analysis", now - DAY),
        ] {
            let updated = service
                .execute(AddTask {
                    tender_id: tender.id,
                    title: title.parse().unwrap(),
                    description: String::new().into(),
                    due_date: due.coerce(),
                    assigned_to: Some(worker),
                    assigned_at: None,
                })
                .await
                .unwrap();
            let task_id = updated.tasks.last().unwrap().id;
            drop(
                service
                    .execute(UpdateTaskStatus {
                        tender_id: tender.id,
                        task_id,
                        status: task::Status::Done,
                    })
                    .await
                    .unwrap(),
            );
        }

        tender
    }

    #[tokio::test]
    async fn rate_is_rounded_to_one_decimal() {
        let service = service();
        let worker = employee(&service, "Alice Johnson", "EC001").await;
        let idle = employee(&service, "Bob Williams", "EC002").await;
        drop(seed_completed(&service, worker.id).await);

        let out = service
            .execute(Performance::default())
            .await
            .unwrap();

        assert_eq!(out.rows.len(), 2);
        let top = &out.rows[0];
        assert_eq!(top.employee.id, worker.id);
        assert_eq!(top.completed, 3);
        assert_eq!(top.on_time, 2);
        assert_eq!(top.late, 1);
        assert_eq!(top.on_time_rate.to_string(), "66.7");

        let rest = &out.rows[1];
        assert_eq!(rest.employee.id, idle.id);
        assert_eq!(rest.completed, 0);
        assert_eq!(rest.on_time_rate.to_string(), "0");

        assert_eq!(out.totals.completed, 3);
        assert_eq!(out.totals.on_time, 2);
        assert_eq!(out.totals.late, 1);
        assert_eq!(out.totals.on_time_rate.to_string(), "66.7");
    }

    #[tokio::test]
    async fn durations_follow_the_whole_day_rule() {
        let service = service();
        let worker = employee(&service, "Alice Johnson", "EC001").await;
        drop(seed_completed(&service, worker.id).await);

        let out = service
            .execute(Performance::default())
            .await
            .unwrap();

        let row = &out.rows[0];
        // Due tomorrow and the day after tomorrow: 1 + 2 days; the overdue
        // task clamps to 0.
        assert_eq!(row.days_assigned, 3);
        // Same-moment completions count as 1 day each.
        assert_eq!(row.days_taken, 3);
    }

    #[tokio::test]
    async fn period_is_inclusive_and_narrowing() {
        let service = service();
        let worker = employee(&service, "Alice Johnson", "EC001").await;
        drop(seed_completed(&service, worker.id).await);

        let now = DateTime::now();
        let everything = service
            .execute(Performance {
                period: Some(
                    (now - DAY).coerce()..=(now + DAY).coerce(),
                ),
            })
            .await
            .unwrap();
        assert_eq!(everything.rows[0].completed, 3);

        let nothing = service
            .execute(Performance {
                period: Some(
                    (now - 3 * DAY).coerce()..=(now - 2 * DAY).coerce(),
                ),
            })
            .await
            .unwrap();
        assert_eq!(nothing.totals.completed, 0);
        assert_eq!(nothing.rows[0].completed, 0);
    }
}
