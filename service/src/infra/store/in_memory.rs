//! In-memory [`Store`] backend.

use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use common::{
    operations::{All, By, Delete, Insert, Select, Update},
    DateTime,
};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::domain::{
    employee,
    tender::{self, task, vehicle, Task},
    vehicle_type, Employee, Tender, VehicleType,
};

use super::{Error, Store};

/// In-memory [`Store`] holding the whole dataset behind an [`RwLock`].
///
/// Commands run to completion one at a time against it (single-writer
/// model), so no transactional machinery is provided: every operation takes
/// the lock for its own duration only.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// Shared state of this [`InMemory`] store.
    state: Arc<RwLock<State>>,
}

/// State of an [`InMemory`] store.
#[derive(Debug, Default)]
struct State {
    /// Stored [`Tender`]s, newest first.
    tenders: Vec<Tender>,

    /// Stored [`Employee`]s, in creation order.
    employees: Vec<Employee>,

    /// Stored [`VehicleType`]s, in creation order.
    vehicle_types: Vec<VehicleType>,
}

impl InMemory {
    /// Creates a new empty [`InMemory`] store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`InMemory`] store populated with the demo dataset:
    /// 5 [`Employee`]s, 4 [`VehicleType`]s and 2 [`Tender`]s with their
    /// [`Task`]s, [`Vehicle`]s and remarks, dated relative to the current
    /// moment.
    ///
    /// [`Task`]: task::Task
    /// [`Vehicle`]: vehicle::Vehicle
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = State::default();
        state.seed();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl State {
    /// Populates this [`State`] with the demo dataset.
    fn seed(&mut self) {
        let now = DateTime::now();
        let ago = |days| now - period(days);
        let ahead = |days| now + period(days);

        let employees: Vec<Employee> = [
            ("Alice Johnson", "EC001", "Legal Counsel", employee::Status::Active),
            ("Bob Williams", "EC002", "Project Manager", employee::Status::Active),
            ("Charlie Brown", "EC003", "Lead Engineer", employee::Status::Active),
            ("Diana Miller", "EC004", "Procurement Specialist", employee::Status::Inactive),
            ("Ethan Davis", "EC005", "Financial Analyst", employee::Status::Active),
        ]
        .into_iter()
        .map(|(name, code, job_title, status)| Employee {
            id: employee::Id::new(),
            name: lit(name),
            code: lit(code),
            job_title: lit(job_title),
            status,
        })
        .collect();
        let legal = employees[0].id;
        let manager = employees[1].id;
        let engineer = employees[2].id;
        let procurement = employees[3].id;

        self.vehicle_types = ["Car", "Truck", "Van", "Heavy Equipment"]
            .into_iter()
            .map(|name| VehicleType {
                id: vehicle_type::Id::new(),
                name: lit(name),
            })
            .collect();
        let truck = self.vehicle_types[1].id;
        let heavy = self.vehicle_types[3].id;

        let bridge = Tender {
            id: tender::Id::new(),
            title: lit("City Bridge Infrastructure Renewal"),
            client: lit("Metropolis City Council"),
            start_date: ago(30).coerce(),
            end_date: ahead(105).coerce(),
            tasks: vec![
                Task {
                    id: task::Id::new(),
                    title: lit("Review Legal Framework"),
                    description: "Analyze all relevant local and national \
                                  laws for bridge construction."
                        .to_owned()
                        .into(),
                    due_date: ago(11).coerce(),
                    status: task::Status::Done,
                    assigned_to: Some(legal),
                    assigned_at: Some(ago(26).coerce()),
                    completed_at: Some(ago(13).coerce()),
                    assignment_history: vec![task::HistoryEntry {
                        assigned_to: legal,
                        assigned_at: ago(26).coerce(),
                    }],
                },
                Task {
                    id: task::Id::new(),
                    title: lit("Initial Risk Assessment"),
                    description: "Identify potential risks related to \
                                  project timeline, budget, and safety."
                        .to_owned()
                        .into(),
                    due_date: ahead(5).coerce(),
                    status: task::Status::InProgress,
                    assigned_to: Some(manager),
                    assigned_at: Some(ago(9).coerce()),
                    completed_at: None,
                    assignment_history: vec![task::HistoryEntry {
                        assigned_to: manager,
                        assigned_at: ago(9).coerce(),
                    }],
                },
                Task {
                    id: task::Id::new(),
                    title: lit("Draft Technical Specifications"),
                    description: "Prepare detailed engineering specs for \
                                  materials and construction methods."
                        .to_owned()
                        .into(),
                    due_date: ahead(30).coerce(),
                    status: task::Status::Todo,
                    assigned_to: None,
                    assigned_at: None,
                    completed_at: None,
                    assignment_history: vec![],
                },
                Task {
                    id: task::Id::new(),
                    title: lit("Vendor Market Research"),
                    description: "Identify and vet potential suppliers for \
                                  steel and concrete."
                        .to_owned()
                        .into(),
                    due_date: ahead(45).coerce(),
                    status: task::Status::Todo,
                    assigned_to: None,
                    assigned_at: None,
                    completed_at: None,
                    assignment_history: vec![],
                },
            ],
            vehicles: vec![
                vehicle::Vehicle {
                    id: vehicle::Id::new(),
                    make: lit("Caterpillar"),
                    model: lit("320D L"),
                    model_year: 2022.into(),
                    qty: 2.into(),
                    vehicle_type_id: heavy,
                    driver_option: vehicle::DriverOption::WithManpower,
                    lease_period: Some(36.into()),
                },
                vehicle::Vehicle {
                    id: vehicle::Id::new(),
                    make: lit("Ford"),
                    model: lit("F-550"),
                    model_year: 2023.into(),
                    qty: 5.into(),
                    vehicle_type_id: truck,
                    driver_option: vehicle::DriverOption::SelfDrive,
                    lease_period: Some(24.into()),
                },
            ],
            attachments: vec![],
            remarks: "Initial assessment is complete. Awaiting the final \
                      structural engineering report."
                .to_owned()
                .into(),
            completed_at: None,
        };

        let overhaul = Tender {
            id: tender::Id::new(),
            title: lit("Municipal IT System Overhaul"),
            client: lit("Springfield County"),
            start_date: ago(7).coerce(),
            end_date: ahead(180).coerce(),
            tasks: vec![
                Task {
                    id: task::Id::new(),
                    title: lit("Analyze Existing Infrastructure"),
                    description: "Document current hardware, software, and \
                                  network configurations."
                        .to_owned()
                        .into(),
                    due_date: ahead(25).coerce(),
                    status: task::Status::InProgress,
                    assigned_to: Some(engineer),
                    assigned_at: Some(ago(5).coerce()),
                    completed_at: None,
                    assignment_history: vec![task::HistoryEntry {
                        assigned_to: engineer,
                        assigned_at: ago(5).coerce(),
                    }],
                },
                Task {
                    id: task::Id::new(),
                    title: lit("Develop Budget Proposal"),
                    description: "Create a detailed cost analysis for the \
                                  new IT system."
                        .to_owned()
                        .into(),
                    due_date: ahead(50).coerce(),
                    status: task::Status::Todo,
                    assigned_to: None,
                    assigned_at: None,
                    completed_at: None,
                    assignment_history: vec![],
                },
                Task {
                    id: task::Id::new(),
                    title: lit("Evaluate Supplier Contracts"),
                    description: "Review contracts from potential hardware \
                                  and software vendors."
                        .to_owned()
                        .into(),
                    due_date: ahead(70).coerce(),
                    status: task::Status::InProgress,
                    assigned_to: Some(legal),
                    assigned_at: Some(ago(3).coerce()),
                    completed_at: None,
                    assignment_history: vec![
                        task::HistoryEntry {
                            assigned_to: procurement,
                            assigned_at: ago(8).coerce(),
                        },
                        task::HistoryEntry {
                            assigned_to: legal,
                            assigned_at: ago(3).coerce(),
                        },
                    ],
                },
            ],
            vehicles: vec![],
            attachments: vec![],
            remarks: "The client has requested a phased rollout: core \
                      infrastructure first, then user-facing applications \
                      and data migration."
                .to_owned()
                .into(),
            completed_at: None,
        };

        self.employees = employees;
        // Newest first.
        self.tenders = vec![overhaul, bridge];
    }
}

/// Returns a [`Duration`] of the provided number of days.
fn period(days: u64) -> Duration {
    Duration::from_secs(days * 86_400)
}

/// Parses a known-valid seed literal.
fn lit<T: FromStr>(s: &str) -> T
where
    T::Err: fmt::Debug,
{
    s.parse().expect("valid seed literal")
}

impl Store<Select<By<Option<Tender>, tender::Id>>> for InMemory {
    type Ok = Option<Tender>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Tender>, tender::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .state
            .read()
            .await
            .tenders
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }
}

impl Store<Select<By<Vec<Tender>, All>>> for InMemory {
    type Ok = Vec<Tender>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Tender>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state.read().await.tenders.clone())
    }
}

impl Store<Insert<Tender>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(tender): Insert<Tender>,
    ) -> Result<Self::Ok, Self::Err> {
        // Newest first.
        self.state.write().await.tenders.insert(0, tender);
        Ok(())
    }
}

impl Store<Update<Tender>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(tender): Update<Tender>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        let slot = state
            .tenders
            .iter_mut()
            .find(|t| t.id == tender.id)
            .ok_or(Error::UnknownTender(tender.id))
            .map_err(tracerr::wrap!())?;
        *slot = tender;
        Ok(())
    }
}

impl Store<Delete<By<Tender, tender::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Tender, tender::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self.state.write().await;
        let len = state.tenders.len();
        state.tenders.retain(|t| t.id != id);
        if state.tenders.len() == len {
            return Err(tracerr::new!(Error::UnknownTender(id)));
        }
        Ok(())
    }
}

impl Store<Select<By<Option<Employee>, employee::Id>>> for InMemory {
    type Ok = Option<Employee>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Employee>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .state
            .read()
            .await
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }
}

impl Store<Select<By<Vec<Employee>, All>>> for InMemory {
    type Ok = Vec<Employee>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Employee>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state.read().await.employees.clone())
    }
}

impl Store<Select<By<Vec<Employee>, employee::Status>>> for InMemory {
    type Ok = Vec<Employee>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Employee>, employee::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        let status = by.into_inner();
        Ok(self
            .state
            .read()
            .await
            .employees
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect())
    }
}

impl Store<Insert<Employee>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(employee): Insert<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state.write().await.employees.push(employee);
        Ok(())
    }
}

impl Store<Update<Employee>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(employee): Update<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        let slot = state
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(Error::UnknownEmployee(employee.id))
            .map_err(tracerr::wrap!())?;
        *slot = employee;
        Ok(())
    }
}

impl Store<Select<By<Option<VehicleType>, vehicle_type::Id>>> for InMemory {
    type Ok = Option<VehicleType>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<VehicleType>, vehicle_type::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .state
            .read()
            .await
            .vehicle_types
            .iter()
            .find(|vt| vt.id == id)
            .cloned())
    }
}

impl Store<Select<By<Vec<VehicleType>, All>>> for InMemory {
    type Ok = Vec<VehicleType>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<VehicleType>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state.read().await.vehicle_types.clone())
    }
}

impl Store<Insert<VehicleType>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(vehicle_type): Insert<VehicleType>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state.write().await.vehicle_types.push(vehicle_type);
        Ok(())
    }
}

impl Store<Update<VehicleType>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(vehicle_type): Update<VehicleType>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        let slot = state
            .vehicle_types
            .iter_mut()
            .find(|vt| vt.id == vehicle_type.id)
            .ok_or(Error::UnknownVehicleType(vehicle_type.id))
            .map_err(tracerr::wrap!())?;
        *slot = vehicle_type;
        Ok(())
    }
}

impl Store<Delete<By<VehicleType, vehicle_type::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<VehicleType, vehicle_type::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self.state.write().await;
        let len = state.vehicle_types.len();
        state.vehicle_types.retain(|vt| vt.id != id);
        if state.vehicle_types.len() == len {
            return Err(tracerr::new!(Error::UnknownVehicleType(id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Select, Update};

    use crate::domain::{tender, Tender};
    use crate::infra::Store as _;

    use super::{Error, InMemory};

    #[tokio::test]
    async fn seeded_dataset_is_complete() {
        let store = InMemory::seeded();

        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        assert_eq!(tenders.len(), 2);
        assert_eq!(tenders.iter().map(|t| t.tasks.len()).sum::<usize>(), 7);
        assert_eq!(store.state.read().await.employees.len(), 5);
        assert_eq!(store.state.read().await.vehicle_types.len(), 4);
    }

    #[tokio::test]
    async fn updating_unknown_tender_fails() {
        let store = InMemory::seeded();

        let mut tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let mut missing = tenders.remove(0);
        missing.id = tender::Id::new();

        let err = store.execute(Update(missing.clone())).await.unwrap_err();
        let err: Error = *err.as_ref();
        assert!(matches!(err, Error::UnknownTender(id) if id == missing.id));
    }
}
